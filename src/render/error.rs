//! Errors raised while laying out a chart.

use thiserror::Error;

use crate::ir::ChartType;

/// A structurally valid IR that cannot be drawn.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("{chart} chart has no data points")]
    NoData { chart: ChartType },

    #[error("{chart} chart has {labels} labels but {values} values")]
    MismatchedLengths {
        chart: ChartType,
        labels: usize,
        values: usize,
    },

    #[error("Cannot scale {chart} chart: largest value is {max}")]
    NonPositiveScale { chart: ChartType, max: f64 },

    #[error("Cannot slice {chart} chart: values sum to {total}")]
    NonPositiveTotal { chart: ChartType, total: f64 },

    #[error("{chart} slice \"{label}\" has negative value {value}")]
    NegativeSlice {
        chart: ChartType,
        label: String,
        value: f64,
    },

    #[error("Canvas {width}x{height} with padding {padding} leaves no room to draw")]
    CanvasTooSmall { width: f64, height: f64, padding: f64 },
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
