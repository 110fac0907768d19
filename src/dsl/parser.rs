//! Line-oriented parser turning DSL text into an [`Ir`].
//!
//! The document is a header section followed by a data section. The first
//! data row switches the parser into the data section for good; header-looking
//! keys after that point are read as ordinary data rows.

use super::header::{HeaderKey, STANDARD_VOCABULARY, Vocabulary, split_list, strip_quotes};
use super::number::normalize_number;
use super::split::split_values;
use crate::ir::{ChartType, Diagnostics, Ir, Meta, ParseError, ParseResult, Series};

/// Which part of the document the parser is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Section {
    #[default]
    Header,
    Data,
}

/// A line split at its first colon.
struct Entry<'a> {
    key: &'a str,
    value: &'a str,
}

/// Accumulated state for one parse call.
#[derive(Debug, Default)]
struct ParseState {
    section: Section,
    chart_type: ChartType,
    title: Option<String>,
    subtitle: Option<String>,
    x_axis: Option<String>,
    y_axis: Option<String>,
    theme: Option<String>,
    legend: Vec<String>,
    colors: Option<Vec<String>>,
    labels: Vec<String>,
    /// One entry per accepted data row, aligned with `labels`.
    rows: Vec<Vec<f64>>,
    errors: Vec<ParseError>,
}

/// DSL parser bound to a vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct Parser<'v> {
    vocabulary: &'v Vocabulary,
}

impl Default for Parser<'static> {
    fn default() -> Self {
        Self::new(&STANDARD_VOCABULARY)
    }
}

impl<'v> Parser<'v> {
    #[must_use]
    pub const fn new(vocabulary: &'v Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Parse a whole document.
    ///
    /// # Errors
    /// Returns every diagnostic found, in document order, if any line is
    /// malformed or the document has no data rows.
    pub fn parse(&self, input: &str) -> ParseResult {
        let mut state = ParseState::default();

        for (idx, raw) in input.split('\n').enumerate() {
            self.parse_line(&mut state, idx + 1, raw.trim());
        }

        state.finish()
    }

    fn parse_line(&self, state: &mut ParseState, line: usize, trimmed: &str) {
        if is_skippable(trimmed) {
            return;
        }

        let entry = match split_entry(line, trimmed) {
            Ok(entry) => entry,
            Err(err) => {
                state.errors.push(err);
                return;
            }
        };

        if state.section == Section::Header
            && let Some(header) = self.vocabulary.header_key(entry.key)
        {
            self.apply_header(state, line, trimmed, header, entry.value);
            return;
        }

        // Header -> Data is the only transition.
        state.section = Section::Data;
        parse_data_row(state, line, trimmed, &entry);
    }

    fn apply_header(
        &self,
        state: &mut ParseState,
        line: usize,
        trimmed: &str,
        header: HeaderKey,
        value: &str,
    ) {
        tracing::trace!(line, ?header, "header field");

        match header {
            HeaderKey::Type => match self.vocabulary.chart_type(value) {
                Some(chart_type) => state.chart_type = chart_type,
                None => {
                    let suggestion = self.vocabulary.suggest_chart_type(value);
                    state.errors.push(
                        ParseError::new(line, format!("Unknown chart type \"{value}\""))
                            .with_hint(format!(
                                "Valid types: {}. Did you mean \"{suggestion}\"?",
                                self.vocabulary.chart_type_list()
                            ))
                            .with_source(trimmed),
                    );
                }
            },
            HeaderKey::Title => state.title = quoted_text(value),
            HeaderKey::Subtitle => state.subtitle = quoted_text(value),
            HeaderKey::Theme => state.theme = Some(value.to_string()),
            HeaderKey::XAxis => state.x_axis = Some(value.to_string()),
            HeaderKey::YAxis => state.y_axis = Some(value.to_string()),
            HeaderKey::Legend => state.legend = split_list(value),
            HeaderKey::Colors => state.colors = Some(split_list(value)),
        }
    }
}

/// Parse a document with the standard vocabulary.
///
/// # Errors
/// See [`Parser::parse`].
pub fn parse(input: &str) -> ParseResult {
    Parser::default().parse(input)
}

fn is_skippable(trimmed: &str) -> bool {
    trimmed.is_empty() || trimmed.starts_with("//") || trimmed.starts_with('#')
}

fn split_entry(line: usize, trimmed: &str) -> Result<Entry<'_>, ParseError> {
    let Some((key, value)) = trimmed.split_once(':') else {
        return Err(missing_separator(line, trimmed));
    };

    let key = key.trim();
    let value = value.trim();

    if key.is_empty() {
        return Err(ParseError::new(line, "Empty label before ':'")
            .with_hint("Add a label name, e.g., \"Product A: 50\"")
            .with_source(trimmed));
    }

    if value.is_empty() {
        return Err(ParseError::new(line, "Missing value after ':'")
            .with_hint(format!("Add a number value, e.g., \"{key}: 100\""))
            .with_source(trimmed));
    }

    Ok(Entry { key, value })
}

fn missing_separator(line: usize, trimmed: &str) -> ParseError {
    if trimmed.contains('=') {
        ParseError::new(line, "Use ':' instead of '='")
            .with_hint(format!("Try: {}", trimmed.replacen('=', ":", 1)))
            .with_source(trimmed)
    } else {
        ParseError::new(line, "Missing ':' separator")
            .with_hint("Each line should be \"Label: Value\", e.g., \"Sales: 100\"")
            .with_source(trimmed)
    }
}

fn parse_data_row(state: &mut ParseState, line: usize, trimmed: &str, entry: &Entry<'_>) {
    let fragments = split_values(entry.value);

    if let [single] = fragments.as_slice() {
        let Some(value) = normalize_number(single) else {
            state.errors.push(
                ParseError::new(line, format!("\"{}\" is not a valid number", entry.value))
                    .with_hint(format!(
                        "Use a number like: {}: 100 (supports $, %, commas)",
                        entry.key
                    ))
                    .with_source(trimmed),
            );
            return;
        };
        state.labels.push(entry.key.to_string());
        state.rows.push(vec![value]);
        return;
    }

    let mut values = Vec::with_capacity(fragments.len());
    for fragment in fragments {
        let Some(value) = normalize_number(fragment) else {
            state.errors.push(
                ParseError::new(line, format!("\"{fragment}\" is not a valid number"))
                    .with_hint(format!(
                        "Separate series values with \", \", e.g., \"{}: 100, 80\"",
                        entry.key
                    ))
                    .with_source(trimmed),
            );
            return;
        };
        values.push(value);
    }

    tracing::trace!(line, series = values.len(), "multi-series row");
    state.labels.push(entry.key.to_string());
    state.rows.push(values);
}

impl ParseState {
    fn finish(mut self) -> ParseResult {
        if self.labels.is_empty() && self.errors.is_empty() {
            self.errors.push(
                ParseError::new(0, "No data points found")
                    .with_hint("Add data like:\nApples: 50\nOranges: 30\nBananas: 45"),
            );
        }

        if !self.errors.is_empty() {
            return Err(Diagnostics::new(self.errors));
        }

        let series = materialize_series(&self.rows, &self.legend);
        let values = match &series {
            Some(series) => series[0].values.clone(),
            None => self.rows.iter().map(|row| row[0]).collect(),
        };

        let meta = Meta {
            x_axis: self.x_axis,
            y_axis: self.y_axis,
            theme: self.theme,
            colors: self.colors,
        };

        Ok(Ir {
            chart_type: self.chart_type,
            title: self.title,
            subtitle: self.subtitle,
            labels: self.labels,
            values,
            series,
            meta: (!meta.is_empty()).then_some(meta),
        })
    }
}

/// Transpose row-major data into named series.
///
/// The first row with more than one value fixes the series count; shorter
/// rows are padded with zeros and longer rows are truncated.
fn materialize_series(rows: &[Vec<f64>], legend: &[String]) -> Option<Vec<Series>> {
    let width = rows.iter().map(Vec::len).find(|&len| len > 1)?;

    let series = (0..width)
        .map(|i| {
            let name = legend
                .get(i)
                .cloned()
                .unwrap_or_else(|| format!("Series {}", i + 1));
            let values = rows
                .iter()
                .map(|row| row.get(i).copied().unwrap_or(0.0))
                .collect();
            Series::new(name, values)
        })
        .collect();

    Some(series)
}

/// `Title: ""` leaves the title unset.
fn quoted_text(value: &str) -> Option<String> {
    Some(strip_quotes(value))
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
#[path = "parser_tests/mod.rs"]
mod tests;
