//! Vertical bar charts, single and grouped.

use super::element::{Bar, Label};
use super::error::RenderError;
use super::layout::{self, PlotArea};
use super::options::{Palette, RenderOptions};
use crate::ir::{Ir, Series};

/// Share of each category slot occupied by bars.
const BAR_FILL: f64 = 0.7;
/// Gap between neighbouring bars within a group.
const GROUP_GAP: f64 = 2.0;

/// Render a bar chart.
///
/// Single-series charts colour each bar by category and print the value
/// above it. Multi-series charts draw one bar per series within each
/// category group, coloured by series, with a legend.
///
/// # Errors
/// Returns a [`RenderError`] for empty or mismatched data, a non-positive
/// maximum, or a canvas too small to hold the plot.
#[allow(clippy::cast_precision_loss)]
pub fn render_bar(ir: &Ir, options: &RenderOptions) -> Result<String, RenderError> {
    layout::check_lengths(ir)?;
    let multi = ir.multi_series();
    let max = match multi {
        Some(series) => layout::scale_max(ir.chart_type, series.iter().flat_map(|s| s.values.iter().copied()))?,
        None => layout::scale_max(ir.chart_type, ir.values.iter().copied())?,
    };

    let plot = PlotArea::for_canvas(options, multi.is_some())?;
    let palette = Palette::resolve(ir, options);
    let mut builder = layout::start_document(ir, options)?;

    if let Some(series) = multi {
        layout::draw_legend(
            &mut builder,
            series.iter().enumerate().map(|(i, s)| (s.name.as_str(), series_color(s, &palette, i))),
            options,
        );
    }

    layout::draw_gridlines(&mut builder, &plot, max, options);
    layout::draw_axes(&mut builder, &plot, options);

    let group_width = plot.width() / ir.labels.len() as f64;
    let group_padding = group_width * (1.0 - BAR_FILL) / 2.0;
    let group_x = |i: usize| (i as f64).mul_add(group_width, plot.left + group_padding);

    match multi {
        Some(series) => {
            let bar_width = group_width * BAR_FILL / series.len() as f64;
            for (i, label) in ir.labels.iter().enumerate() {
                for (s, entry) in series.iter().enumerate() {
                    let value = entry.values.get(i).copied().unwrap_or(0.0);
                    builder.push(&Bar {
                        x: (s as f64).mul_add(bar_width, group_x(i)),
                        y: plot.y_for(value, max),
                        width: (bar_width - GROUP_GAP).max(0.0),
                        height: plot.bar_height(value, max),
                        color: series_color(entry, &palette, s).to_string(),
                        corner_radius: 2.0,
                        label: format!("{label} ({})", entry.name),
                        value,
                    });
                }
            }
        }
        None => {
            let bar_width = group_width * BAR_FILL;
            for (i, (label, &value)) in ir.labels.iter().zip(&ir.values).enumerate() {
                let x = group_x(i);
                let y = plot.y_for(value, max);
                builder.push(&Bar {
                    x,
                    y,
                    width: bar_width,
                    height: plot.bar_height(value, max),
                    color: palette.color(i).to_string(),
                    corner_radius: 4.0,
                    label: label.clone(),
                    value,
                });
                builder.push(&Label::new(
                    bar_width.mul_add(0.5, x),
                    y - 8.0,
                    value.to_string(),
                    options.text_color.clone(),
                ));
            }
        }
    }

    let bar_width = group_width * BAR_FILL;
    layout::draw_category_labels(
        &mut builder,
        &plot,
        &ir.labels,
        |i| bar_width.mul_add(0.5, group_x(i)),
        options,
    );
    layout::draw_axis_captions(&mut builder, ir, &plot, options);

    Ok(builder.build())
}

/// Explicit series colour, else the palette entry for its position.
pub(crate) fn series_color<'a>(series: &'a Series, palette: &Palette<'a>, index: usize) -> &'a str {
    series.color.as_deref().unwrap_or_else(|| palette.color(index))
}

#[cfg(test)]
#[path = "bar_tests.rs"]
mod tests;
