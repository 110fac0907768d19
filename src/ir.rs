//! Intermediate representation shared by the parser and the renderers.
//!
//! The parser produces an [`Ir`] once per call; renderers only ever borrow it.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Chart kinds understood by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Bar,
    Line,
    Pie,
    Area,
    Donut,
}

impl ChartType {
    /// Every chart type, in the order used for suggestions and help text.
    pub const ALL: [Self; 5] = [Self::Bar, Self::Line, Self::Pie, Self::Area, Self::Donut];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Pie => "pie",
            Self::Area => "area",
            Self::Donut => "donut",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named column of a multi-series chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Series {
    #[must_use]
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
            color: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Optional presentation hints carried alongside the data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
}

impl Meta {
    /// True when no field carries a value.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.x_axis.is_none() && self.y_axis.is_none() && self.theme.is_none() && self.colors.is_none()
    }
}

/// Renderer-agnostic chart description.
///
/// `labels` and `values` always have the same length when produced by the
/// parser. For multi-series charts `series` holds at least two entries and
/// `values` mirrors the first one so single-series consumers keep working.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ir {
    #[serde(rename = "type", default)]
    pub chart_type: ChartType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<Vec<Series>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl Ir {
    /// Single-series IR from parallel label/value lists.
    #[must_use]
    pub fn new(chart_type: ChartType, labels: Vec<String>, values: Vec<f64>) -> Self {
        Self {
            chart_type,
            labels,
            values,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Attach series and mirror the first one into `values`.
    #[must_use]
    pub fn with_series(mut self, series: Vec<Series>) -> Self {
        if let Some(first) = series.first() {
            self.values.clone_from(&first.values);
        }
        self.series = Some(series);
        self
    }

    #[must_use]
    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = if meta.is_empty() { None } else { Some(meta) };
        self
    }

    /// Series list when the chart really has more than one series.
    #[must_use]
    pub fn multi_series(&self) -> Option<&[Series]> {
        self.series.as_deref().filter(|series| series.len() > 1)
    }

    /// Custom palette from the `Colors:` header, if any.
    #[must_use]
    pub fn custom_colors(&self) -> Option<&[String]> {
        self.meta
            .as_ref()
            .and_then(|meta| meta.colors.as_deref())
            .filter(|colors| !colors.is_empty())
    }
}

/// A single line-attributed parse diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseError {
    /// 1-based line number, or 0 for whole-document problems.
    pub line: usize,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// The offending line, trimmed.
    #[serde(rename = "source", default, skip_serializing_if = "Option::is_none")]
    pub source_line: Option<String>,
}

impl ParseError {
    #[must_use]
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
            hint: None,
            source_line: None,
        }
    }

    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source_line = Some(source.into());
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}", self.line, self.message)
    }
}

/// Every diagnostic raised while parsing one document, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{}", summarize(.0))]
#[serde(transparent)]
pub struct Diagnostics(Vec<ParseError>);

fn summarize(errors: &[ParseError]) -> String {
    match errors {
        [single] => single.to_string(),
        [first, ..] => format!("{first} (and {} more)", errors.len() - 1),
        [] => "no diagnostics".to_string(),
    }
}

impl Diagnostics {
    #[must_use]
    pub const fn new(errors: Vec<ParseError>) -> Self {
        Self(errors)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParseError> {
        self.0.iter()
    }

    #[must_use]
    pub fn first(&self) -> Option<&ParseError> {
        self.0.first()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<ParseError> {
        self.0
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a ParseError;
    type IntoIter = std::slice::Iter<'a, ParseError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Outcome of parsing one document.
pub type ParseResult = std::result::Result<Ir, Diagnostics>;

#[cfg(test)]
#[path = "ir_tests.rs"]
mod tests;
