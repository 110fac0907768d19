//! Pie and donut charts.

use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fmt::Write;

use super::builder::SvgBuilder;
use super::element::{Label, Wedge};
use super::error::RenderError;
use super::format::percent_label;
use super::layout;
use super::options::{Palette, RenderOptions};
use crate::ir::Ir;

/// Inner radius of a donut as a share of the outer radius.
const DONUT_HOLE: f64 = 0.6;
/// Distance from the rim to the slice labels.
const LABEL_OFFSET: f64 = 25.0;
/// Pie centre sits this far below the canvas centre, under the title.
const CENTER_DROP: f64 = 10.0;

/// Angular extent of one slice, in radians. Slices start at 12 o'clock and
/// run clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceAngle {
    pub start: f64,
    pub end: f64,
}

impl SliceAngle {
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.end - self.start
    }

    #[must_use]
    pub fn mid(&self) -> f64 {
        self.sweep().mul_add(0.5, self.start)
    }

    fn is_full_circle(&self) -> bool {
        (self.sweep() - TAU).abs() < 1e-9
    }

    fn large_arc(&self) -> u8 {
        u8::from(self.sweep() > PI)
    }
}

/// Split the full circle proportionally to `ir.values`.
///
/// # Errors
/// Returns a [`RenderError`] for empty or mismatched data, a negative
/// value, or a non-positive total.
pub fn slice_angles(ir: &Ir) -> Result<Vec<SliceAngle>, RenderError> {
    layout::check_lengths(ir)?;

    if let Some((label, &value)) = ir.labels.iter().zip(&ir.values).find(|(_, v)| **v < 0.0) {
        return Err(RenderError::NegativeSlice {
            chart: ir.chart_type,
            label: label.clone(),
            value,
        });
    }

    let total: f64 = ir.values.iter().sum();
    if !(total.is_finite() && total > 0.0) {
        return Err(RenderError::NonPositiveTotal {
            chart: ir.chart_type,
            total,
        });
    }

    let mut current = -FRAC_PI_2;
    Ok(ir
        .values
        .iter()
        .map(|value| {
            let start = current;
            current += value / total * TAU;
            SliceAngle { start, end: current }
        })
        .collect())
}

/// Render a pie chart.
///
/// # Errors
/// See [`slice_angles`]; also fails when the canvas leaves no radius.
pub fn render_pie(ir: &Ir, options: &RenderOptions) -> Result<String, RenderError> {
    render_radial(ir, options, None)
}

/// Render a donut chart: a pie with a hole of 60% of the radius.
///
/// # Errors
/// See [`render_pie`].
pub fn render_donut(ir: &Ir, options: &RenderOptions) -> Result<String, RenderError> {
    render_radial(ir, options, Some(DONUT_HOLE))
}

struct Circle {
    cx: f64,
    cy: f64,
    radius: f64,
}

impl Circle {
    fn point(&self, radius: f64, angle: f64) -> (f64, f64) {
        (
            radius.mul_add(angle.cos(), self.cx),
            radius.mul_add(angle.sin(), self.cy),
        )
    }
}

fn render_radial(ir: &Ir, options: &RenderOptions, hole: Option<f64>) -> Result<String, RenderError> {
    let slices = slice_angles(ir)?;
    let mut builder = layout::start_document(ir, options)?;

    let circle = Circle {
        cx: options.width / 2.0,
        cy: options.height / 2.0 + CENTER_DROP,
        radius: options.width.min(options.height) / 2.0 - options.padding,
    };
    if circle.radius <= 0.0 {
        return Err(layout::canvas_too_small(options));
    }
    let inner = hole.map(|share| circle.radius * share);

    let palette = Palette::resolve(ir, options);
    let total: f64 = ir.values.iter().sum();

    for (i, ((slice, label), &value)) in slices.iter().zip(&ir.labels).zip(&ir.values).enumerate() {
        if value > 0.0 {
            let (path, even_odd) = slice_path(&circle, inner, slice);
            builder.push(&Wedge {
                path,
                fill: palette.color(i).to_string(),
                stroke: options.background_color.clone(),
                label: label.clone(),
                value,
                even_odd,
            });
        }
        push_slice_label(&mut builder, &circle, slice, label, value, total, options);
    }

    tracing::trace!(chart = %ir.chart_type, slices = slices.len(), "radial chart laid out");

    Ok(builder.build())
}

/// Path for one slice, and whether it needs the even-odd fill rule.
fn slice_path(circle: &Circle, inner: Option<f64>, slice: &SliceAngle) -> (String, bool) {
    let r = circle.radius;
    let mut path = String::new();

    if slice.is_full_circle() {
        // A single arc cannot close on itself; draw two half circles.
        push_ring(&mut path, circle, r, 1);
        if let Some(ri) = inner {
            push_ring(&mut path, circle, ri, 0);
        }
        return (path, inner.is_some());
    }

    let large = slice.large_arc();
    let (x1, y1) = circle.point(r, slice.start);
    let (x2, y2) = circle.point(r, slice.end);

    match inner {
        None => {
            let _ = write!(
                path,
                "M {} {} L {x1} {y1} A {r} {r} 0 {large} 1 {x2} {y2} Z",
                circle.cx, circle.cy
            );
        }
        Some(ri) => {
            let (ix1, iy1) = circle.point(ri, slice.start);
            let (ix2, iy2) = circle.point(ri, slice.end);
            let _ = write!(
                path,
                "M {x1} {y1} A {r} {r} 0 {large} 1 {x2} {y2} L {ix2} {iy2} A {ri} {ri} 0 {large} 0 {ix1} {iy1} Z"
            );
        }
    }

    (path, false)
}

fn push_ring(path: &mut String, circle: &Circle, radius: f64, sweep: u8) {
    let (left, right) = (circle.cx - radius, circle.cx + radius);
    let cy = circle.cy;
    if !path.is_empty() {
        path.push(' ');
    }
    let _ = write!(
        path,
        "M {right} {cy} A {radius} {radius} 0 1 {sweep} {left} {cy} A {radius} {radius} 0 1 {sweep} {right} {cy} Z"
    );
}

fn push_slice_label(
    builder: &mut SvgBuilder,
    circle: &Circle,
    slice: &SliceAngle,
    label: &str,
    value: f64,
    total: f64,
    options: &RenderOptions,
) {
    let (x, y) = circle.point(circle.radius + LABEL_OFFSET, slice.mid());
    builder.push(
        &Label::new(
            x,
            y,
            format!("{label}: {}%", percent_label(value, total)),
            options.text_color.clone(),
        )
        .centered(),
    );
}

#[cfg(test)]
#[path = "pie_tests.rs"]
mod tests;
