//! Area charts: a filled line chart of the primary series.

use super::element::LinePath;
use super::error::RenderError;
use super::layout::{self, PlotArea};
use super::line::{plot_points, point_x};
use super::options::{Palette, RenderOptions};
use crate::ir::Ir;

/// Render an area chart.
///
/// Only `values` is drawn; extra series on a multi-series IR are ignored.
///
/// # Errors
/// Returns a [`RenderError`] for empty or mismatched data, a non-positive
/// maximum, or a canvas too small to hold the plot.
pub fn render_area(ir: &Ir, options: &RenderOptions) -> Result<String, RenderError> {
    layout::check_lengths(ir)?;
    let max = layout::scale_max(ir.chart_type, ir.values.iter().copied())?;

    let plot = PlotArea::for_canvas(options, false)?;
    let palette = Palette::resolve(ir, options);
    let mut builder = layout::start_document(ir, options)?;

    layout::draw_gridlines(&mut builder, &plot, max, options);
    layout::draw_axes(&mut builder, &plot, options);

    builder.push(&LinePath::new(plot_points(&plot, &ir.values, max), palette.color(0)).with_fill_to(plot.bottom));

    let count = ir.labels.len();
    layout::draw_category_labels(&mut builder, &plot, &ir.labels, |i| point_x(&plot, i, count), options);
    layout::draw_axis_captions(&mut builder, ir, &plot, options);

    Ok(builder.build())
}

#[cfg(test)]
#[path = "area_tests.rs"]
mod tests;
