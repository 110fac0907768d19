//! SVG rendering of an [`Ir`].
//!
//! Every chart is a standalone `<svg>` document with a background rectangle,
//! an accessible `<title>`/`<desc>` and deterministic output for a given IR
//! and option set.

mod area;
mod bar;
mod builder;
mod element;
mod error;
mod format;
mod layout;
mod line;
mod options;
mod pie;
mod style;

pub use area::render_area;
pub use bar::render_bar;
pub use builder::SvgBuilder;
pub use element::{Bar, Label, LinePath, Marker, Rule, SvgElement, Swatch, Wedge};
pub use error::RenderError;
pub use format::html_escape;
pub use layout::{LEGEND_BAND, PlotArea, TITLE_BAND};
pub use line::render_line;
pub use options::{DEFAULT_PALETTE, RenderOptions, Theme};
pub use pie::{SliceAngle, render_donut, render_pie, slice_angles};
pub use style::TextAnchor;

use crate::ir::{ChartType, Ir};

/// Render `ir` with the renderer for its chart type.
///
/// # Errors
/// Returns a [`RenderError`] when the data cannot be drawn on the canvas.
pub fn render(ir: &Ir, options: &RenderOptions) -> Result<String, RenderError> {
    tracing::debug!(
        chart = %ir.chart_type,
        labels = ir.labels.len(),
        series = ir.series.as_ref().map_or(1, Vec::len),
        width = options.width,
        height = options.height,
        "rendering chart"
    );

    match ir.chart_type {
        ChartType::Bar => render_bar(ir, options),
        ChartType::Line => render_line(ir, options),
        ChartType::Pie => render_pie(ir, options),
        ChartType::Area => render_area(ir, options),
        ChartType::Donut => render_donut(ir, options),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
