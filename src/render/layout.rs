//! Shared chart frame: canvas checks, title, legend, plot area, gridlines
//! and axes.

use super::builder::SvgBuilder;
use super::element::{Label, Rule, Swatch};
use super::error::RenderError;
use super::format::tick_label;
use super::options::RenderOptions;
use super::style::{TITLE_FONT_SIZE, TextAnchor};
use crate::ir::{ChartType, Ir};

/// Vertical space reserved for the title.
pub const TITLE_BAND: f64 = 30.0;
/// Vertical space reserved for the legend on multi-series charts.
pub const LEGEND_BAND: f64 = 25.0;

const TITLE_BASELINE: f64 = 25.0;
const LEGEND_BASELINE: f64 = 45.0;
const LEGEND_ITEM_WIDTH: f64 = 80.0;
const SWATCH_SIZE: f64 = 12.0;
const GRIDLINES: u32 = 4;
const CATEGORY_LABEL_OFFSET: f64 = 18.0;
const X_CAPTION_OFFSET: f64 = 40.0;
const Y_CAPTION_OFFSET: f64 = 45.0;

/// Rectangle the data is plotted into, in SVG coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl PlotArea {
    /// Plot area left after padding, title band and optional legend band.
    ///
    /// # Errors
    /// Returns [`RenderError::CanvasTooSmall`] if nothing is left.
    pub fn for_canvas(options: &RenderOptions, with_legend: bool) -> Result<Self, RenderError> {
        let legend = if with_legend { LEGEND_BAND } else { 0.0 };
        let plot_height = options.height - options.padding * 2.0 - TITLE_BAND - legend;
        let plot = Self {
            left: options.padding,
            right: options.width - options.padding,
            bottom: options.height - options.padding,
            top: options.height - options.padding - plot_height,
        };

        if plot.width() > 0.0 && plot.height() > 0.0 {
            Ok(plot)
        } else {
            Err(canvas_too_small(options))
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Vertical position of `value` on a `0..=max` scale. Negative values
    /// are clamped to the baseline.
    #[must_use]
    pub fn y_for(&self, value: f64, max: f64) -> f64 {
        self.bottom - self.bar_height(value, max)
    }

    #[must_use]
    pub fn bar_height(&self, value: f64, max: f64) -> f64 {
        (value / max * self.height()).max(0.0)
    }
}

pub(crate) fn canvas_too_small(options: &RenderOptions) -> RenderError {
    RenderError::CanvasTooSmall {
        width: options.width,
        height: options.height,
        padding: options.padding,
    }
}

/// Require at least one label and one value per label.
pub(crate) fn check_lengths(ir: &Ir) -> Result<(), RenderError> {
    if ir.labels.is_empty() {
        return Err(RenderError::NoData {
            chart: ir.chart_type,
        });
    }
    if ir.values.len() != ir.labels.len() {
        return Err(RenderError::MismatchedLengths {
            chart: ir.chart_type,
            labels: ir.labels.len(),
            values: ir.values.len(),
        });
    }
    Ok(())
}

/// Largest value, which must be finite and positive to scale against.
pub(crate) fn scale_max(
    chart: ChartType,
    values: impl IntoIterator<Item = f64>,
) -> Result<f64, RenderError> {
    let max = values.into_iter().fold(f64::NEG_INFINITY, f64::max);
    if max.is_finite() && max > 0.0 {
        Ok(max)
    } else {
        Err(RenderError::NonPositiveScale { chart, max })
    }
}

/// Root element with accessible title, description, background and the
/// visible title.
pub(crate) fn start_document(ir: &Ir, options: &RenderOptions) -> Result<SvgBuilder, RenderError> {
    let valid = |v: f64| v.is_finite() && v > 0.0;
    if !valid(options.width) || !valid(options.height) || !options.padding.is_finite() || options.padding < 0.0 {
        return Err(canvas_too_small(options));
    }

    // IR loaded from JSON may still carry empty strings.
    let title = ir.title.as_deref().filter(|t| !t.is_empty());
    let subtitle = ir.subtitle.as_deref().filter(|s| !s.is_empty());

    let mut builder = SvgBuilder::new(options.width, options.height)
        .with_background(options.background_color.clone());
    if let Some(title) = title {
        builder = builder.with_title(title);
    }
    if let Some(subtitle) = subtitle {
        builder = builder.with_description(subtitle);
    }

    if let Some(title) = title {
        builder.push(
            &Label::new(options.width / 2.0, TITLE_BASELINE, title, options.text_color.clone())
                .with_font_size(TITLE_FONT_SIZE)
                .bold(),
        );
    }

    Ok(builder)
}

/// Centred row of colour swatches with series names.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn draw_legend<'a>(
    builder: &mut SvgBuilder,
    entries: impl ExactSizeIterator<Item = (&'a str, &'a str)>,
    options: &RenderOptions,
) {
    let start_x = (options.width - entries.len() as f64 * LEGEND_ITEM_WIDTH) / 2.0;

    for (i, (name, color)) in entries.enumerate() {
        let x = (i as f64).mul_add(LEGEND_ITEM_WIDTH, start_x);
        builder.push(&Swatch {
            x,
            y: LEGEND_BASELINE - 8.0,
            size: SWATCH_SIZE,
            color: color.to_string(),
        });
        builder.push(
            &Label::new(x + 16.0, LEGEND_BASELINE, name, options.text_color.clone())
                .with_anchor(TextAnchor::Start),
        );
    }
}

/// Dashed gridlines at quarter steps of `max`, labelled on the left.
pub(crate) fn draw_gridlines(builder: &mut SvgBuilder, plot: &PlotArea, max: f64, options: &RenderOptions) {
    for step in 1..=GRIDLINES {
        let fraction = f64::from(step) / f64::from(GRIDLINES);
        let y = fraction.mul_add(-plot.height(), plot.bottom);

        builder.push(&Rule {
            x1: plot.left,
            y1: y,
            x2: plot.right,
            y2: y,
            stroke: options.grid_color.clone(),
            dashed: true,
        });
        builder.push(
            &Label::new(plot.left - 8.0, y + 4.0, tick_label(max * fraction), options.muted_color.clone())
                .with_anchor(TextAnchor::End),
        );
    }
}

/// Solid y and x axis lines along the left and bottom edges.
pub(crate) fn draw_axes(builder: &mut SvgBuilder, plot: &PlotArea, options: &RenderOptions) {
    builder.push(&Rule {
        x1: plot.left,
        y1: plot.top,
        x2: plot.left,
        y2: plot.bottom,
        stroke: options.grid_color.clone(),
        dashed: false,
    });
    builder.push(&Rule {
        x1: plot.left,
        y1: plot.bottom,
        x2: plot.right,
        y2: plot.bottom,
        stroke: options.grid_color.clone(),
        dashed: false,
    });
}

/// Category labels under the x axis.
pub(crate) fn draw_category_labels(
    builder: &mut SvgBuilder,
    plot: &PlotArea,
    labels: &[String],
    x_for: impl Fn(usize) -> f64,
    options: &RenderOptions,
) {
    for (i, label) in labels.iter().enumerate() {
        builder.push(&Label::new(
            x_for(i),
            plot.bottom + CATEGORY_LABEL_OFFSET,
            label.clone(),
            options.muted_color.clone(),
        ));
    }
}

/// `X:` caption centred below the category labels and `Y:` caption rotated
/// along the left edge.
pub(crate) fn draw_axis_captions(builder: &mut SvgBuilder, ir: &Ir, plot: &PlotArea, options: &RenderOptions) {
    let Some(meta) = &ir.meta else {
        return;
    };

    if let Some(caption) = &meta.x_axis {
        builder.push(&Label::new(
            plot.width().mul_add(0.5, plot.left),
            plot.bottom + X_CAPTION_OFFSET,
            caption.clone(),
            options.muted_color.clone(),
        ));
    }

    if let Some(caption) = &meta.y_axis {
        let x = plot.left - Y_CAPTION_OFFSET;
        let y = plot.height().mul_add(0.5, plot.top);
        builder.push(
            &Label::new(x, y, caption.clone(), options.muted_color.clone())
                .centered()
                .rotated(-90.0),
        );
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
