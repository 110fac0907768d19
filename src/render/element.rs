//! Primitive SVG elements: bars, paths, markers, text and rules.

use std::fmt::Write;

use super::format::html_escape;
use super::style::{FONT_FAMILY, LABEL_FONT_SIZE, TextAnchor};

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// A single bar in a bar chart.
#[derive(Debug, Clone)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
    pub corner_radius: f64,
    pub label: String,
    pub value: f64,
}

impl SvgElement for Bar {
    fn render(&self) -> String {
        let escaped_label = html_escape(&self.label);
        // Accessibility: title element for screen readers and hover tooltip
        format!(
            r#"<rect class="pv-bar" x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}">
    <title>{escaped_label}: {}</title>
</rect>"#,
            self.x,
            self.y,
            self.width,
            self.height,
            self.corner_radius,
            html_escape(&self.color),
            self.value
        )
    }
}

/// Polyline through data points, optionally filled down to a baseline.
#[derive(Debug, Clone)]
pub struct LinePath {
    pub points: Vec<(f64, f64)>,
    pub color: String,
    pub stroke_width: f64,
    pub fill_opacity: f64,
    /// Y-coordinate the fill area closes against. No fill when unset.
    pub baseline_y: Option<f64>,
}

impl LinePath {
    #[must_use]
    pub fn new(points: Vec<(f64, f64)>, color: impl Into<String>) -> Self {
        Self {
            points,
            color: color.into(),
            stroke_width: 2.0,
            fill_opacity: 0.3,
            baseline_y: None,
        }
    }

    /// Fill the area between the line and `baseline_y`.
    #[must_use]
    pub const fn with_fill_to(mut self, baseline_y: f64) -> Self {
        self.baseline_y = Some(baseline_y);
        self
    }

    #[must_use]
    pub const fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    /// `M x y L x y ...` path data through every point.
    #[must_use]
    pub fn path_data(&self) -> String {
        let mut path = String::new();
        for (i, (x, y)) in self.points.iter().enumerate() {
            let command = if i == 0 { "M" } else { " L" };
            let _ = write!(path, "{command} {x} {y}");
        }
        path
    }
}

impl SvgElement for LinePath {
    fn render(&self) -> String {
        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            return String::new();
        };

        let color = html_escape(&self.color);
        let path = self.path_data();
        let mut output = String::new();

        if let Some(baseline_y) = self.baseline_y {
            let _ = writeln!(
                output,
                r#"<path class="pv-area" d="{path} L {} {baseline_y} L {} {baseline_y} Z" fill="{color}" fill-opacity="{}" stroke="none"/>"#,
                last.0, first.0, self.fill_opacity
            );
        }

        let _ = writeln!(
            output,
            r#"<path class="pv-line" d="{path}" fill="none" stroke="{color}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round"/>"#,
            self.stroke_width
        );

        output
    }
}

/// Circular point marker.
#[derive(Debug, Clone)]
pub struct Marker {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill: String,
    /// Ring drawn in the background colour to lift the marker off the line.
    pub stroke: String,
}

impl SvgElement for Marker {
    fn render(&self) -> String {
        format!(
            r#"<circle class="pv-point" cx="{}" cy="{}" r="{}" fill="{}" stroke="{}" stroke-width="2"/>"#,
            self.cx,
            self.cy,
            self.radius,
            html_escape(&self.fill),
            html_escape(&self.stroke)
        )
    }
}

/// Filled path with a precomputed outline, used for pie and donut slices.
#[derive(Debug, Clone)]
pub struct Wedge {
    pub path: String,
    pub fill: String,
    pub stroke: String,
    pub label: String,
    pub value: f64,
    /// Needed for full rings drawn as two concentric circles.
    pub even_odd: bool,
}

impl SvgElement for Wedge {
    fn render(&self) -> String {
        let fill_rule = if self.even_odd {
            r#" fill-rule="evenodd""#
        } else {
            ""
        };
        format!(
            r#"<path class="pv-slice" d="{}" fill="{}"{fill_rule} stroke="{}" stroke-width="2">
    <title>{}: {}</title>
</path>"#,
            self.path,
            html_escape(&self.fill),
            html_escape(&self.stroke),
            html_escape(&self.label),
            self.value
        )
    }
}

/// Straight line between two points.
#[derive(Debug, Clone)]
pub struct Rule {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: String,
    pub dashed: bool,
}

impl SvgElement for Rule {
    fn render(&self) -> String {
        let dash = if self.dashed {
            r#" stroke-dasharray="3,3""#
        } else {
            ""
        };
        format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="1"{dash}/>"#,
            self.x1,
            self.y1,
            self.x2,
            self.y2,
            html_escape(&self.stroke)
        )
    }
}

/// Square colour key in the legend.
#[derive(Debug, Clone)]
pub struct Swatch {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub color: String,
}

impl SvgElement for Swatch {
    fn render(&self) -> String {
        format!(
            r#"<rect class="pv-swatch" x="{}" y="{}" width="{size}" height="{size}" rx="2" fill="{}"/>"#,
            self.x,
            self.y,
            html_escape(&self.color),
            size = self.size
        )
    }
}

/// Text label.
#[derive(Debug, Clone)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub color: String,
    pub anchor: TextAnchor,
    pub font_size: f64,
    pub bold: bool,
    /// Vertically centre on `y` instead of sitting on it.
    pub centered: bool,
    /// Rotation in degrees around (`x`, `y`).
    pub rotate: Option<f64>,
}

impl Label {
    #[must_use]
    pub fn new(x: f64, y: f64, text: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            color: color.into(),
            anchor: TextAnchor::Middle,
            font_size: LABEL_FONT_SIZE,
            bold: false,
            centered: false,
            rotate: None,
        }
    }

    #[must_use]
    pub const fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub const fn centered(mut self) -> Self {
        self.centered = true;
        self
    }

    #[must_use]
    pub const fn rotated(mut self, degrees: f64) -> Self {
        self.rotate = Some(degrees);
        self
    }
}

impl SvgElement for Label {
    fn render(&self) -> String {
        let mut attrs = String::new();
        if self.bold {
            attrs.push_str(r#" font-weight="bold""#);
        }
        if self.centered {
            attrs.push_str(r#" dominant-baseline="middle""#);
        }
        if let Some(degrees) = self.rotate {
            let _ = write!(attrs, r#" transform="rotate({degrees} {} {})""#, self.x, self.y);
        }

        format!(
            r#"<text x="{}" y="{}" text-anchor="{}" font-family="{FONT_FAMILY}" font-size="{}" fill="{}"{attrs}>{}</text>"#,
            self.x,
            self.y,
            self.anchor,
            self.font_size,
            html_escape(&self.color),
            html_escape(&self.text)
        )
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
