//! Line charts, single and multi-series.

use super::bar::series_color;
use super::element::{Label, LinePath, Marker};
use super::error::RenderError;
use super::layout::{self, PlotArea};
use super::options::{Palette, RenderOptions};
use crate::ir::Ir;

/// Horizontal position of point `index` out of `count` spread over the plot.
///
/// A single point sits on the left edge.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn point_x(plot: &PlotArea, index: usize, count: usize) -> f64 {
    let spacing = if count > 1 {
        plot.width() / (count - 1) as f64
    } else {
        plot.width()
    };
    (index as f64).mul_add(spacing, plot.left)
}

pub(crate) fn plot_points(plot: &PlotArea, values: &[f64], max: f64) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| (point_x(plot, i, values.len()), plot.y_for(value, max)))
        .collect()
}

/// Render a line chart.
///
/// # Errors
/// Returns a [`RenderError`] for empty or mismatched data, a non-positive
/// maximum, or a canvas too small to hold the plot.
pub fn render_line(ir: &Ir, options: &RenderOptions) -> Result<String, RenderError> {
    layout::check_lengths(ir)?;
    let multi = ir.multi_series();
    let max = match multi {
        Some(series) => layout::scale_max(ir.chart_type, series.iter().flat_map(|s| s.values.iter().copied()))?,
        None => layout::scale_max(ir.chart_type, ir.values.iter().copied())?,
    };

    let plot = PlotArea::for_canvas(options, multi.is_some())?;
    let palette = Palette::resolve(ir, options);
    let mut builder = layout::start_document(ir, options)?;
    let count = ir.labels.len();

    if let Some(series) = multi {
        layout::draw_legend(
            &mut builder,
            series.iter().enumerate().map(|(i, s)| (s.name.as_str(), series_color(s, &palette, i))),
            options,
        );
    }

    layout::draw_gridlines(&mut builder, &plot, max, options);
    layout::draw_axes(&mut builder, &plot, options);

    match multi {
        Some(series) => {
            for (s, entry) in series.iter().enumerate() {
                let color = series_color(entry, &palette, s);
                // Pad or cut each series to the label count.
                let values: Vec<f64> = (0..count)
                    .map(|i| entry.values.get(i).copied().unwrap_or(0.0))
                    .collect();
                let points = plot_points(&plot, &values, max);

                builder.push(&LinePath::new(points.clone(), color));
                for (x, y) in points {
                    builder.push(&Marker {
                        cx: x,
                        cy: y,
                        radius: 4.0,
                        fill: color.to_string(),
                        stroke: options.background_color.clone(),
                    });
                }
            }
        }
        None => {
            let color = palette.color(0);
            let points = plot_points(&plot, &ir.values, max);

            builder.push(&LinePath::new(points.clone(), color).with_stroke_width(3.0));
            for (&(x, y), value) in points.iter().zip(&ir.values) {
                builder.push(&Marker {
                    cx: x,
                    cy: y,
                    radius: 5.0,
                    fill: color.to_string(),
                    stroke: options.background_color.clone(),
                });
                builder.push(&Label::new(x, y - 12.0, value.to_string(), options.text_color.clone()));
            }
        }
    }

    layout::draw_category_labels(&mut builder, &plot, &ir.labels, |i| point_x(&plot, i, count), options);
    layout::draw_axis_captions(&mut builder, ir, &plot, options);

    Ok(builder.build())
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
