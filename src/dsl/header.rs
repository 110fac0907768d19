//! Header vocabulary: recognized keys, chart type validation and value helpers.

use super::split::FULL_WIDTH_COMMA;
use crate::ir::ChartType;

/// Header fields a document may set before its first data row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKey {
    Type,
    Title,
    Subtitle,
    Theme,
    XAxis,
    YAxis,
    Legend,
    Colors,
}

/// Immutable lookup tables consulted by the parser.
#[derive(Debug, Clone, Copy)]
pub struct Vocabulary {
    /// Lower-case key spellings and the field they set.
    pub header_keys: &'static [(&'static str, HeaderKey)],
    /// Chart types accepted by `Type:`, in suggestion order.
    pub chart_types: &'static [ChartType],
}

/// The standard vocabulary.
pub const STANDARD_VOCABULARY: Vocabulary = Vocabulary {
    header_keys: &[
        ("type", HeaderKey::Type),
        ("title", HeaderKey::Title),
        ("subtitle", HeaderKey::Subtitle),
        ("theme", HeaderKey::Theme),
        ("x-axis", HeaderKey::XAxis),
        ("x", HeaderKey::XAxis),
        ("y-axis", HeaderKey::YAxis),
        ("y", HeaderKey::YAxis),
        ("legend", HeaderKey::Legend),
        ("colors", HeaderKey::Colors),
    ],
    chart_types: &ChartType::ALL,
};

impl Default for Vocabulary {
    fn default() -> Self {
        STANDARD_VOCABULARY
    }
}

impl Vocabulary {
    /// Resolve a header key, ignoring case.
    #[must_use]
    pub fn header_key(&self, key: &str) -> Option<HeaderKey> {
        self.header_keys
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|&(_, header)| header)
    }

    /// Resolve a chart type name, ignoring case.
    #[must_use]
    pub fn chart_type(&self, name: &str) -> Option<ChartType> {
        self.chart_types
            .iter()
            .copied()
            .find(|ty| ty.as_str().eq_ignore_ascii_case(name))
    }

    /// Comma-separated list of valid type names for hints.
    #[must_use]
    pub fn chart_type_list(&self) -> String {
        self.chart_types
            .iter()
            .map(|ty| ty.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Suggest a chart type for an unknown name.
    ///
    /// Picks the first type that starts with the input's first letter, or whose
    /// own first letter appears anywhere in the input. Falls back to `bar`.
    #[must_use]
    pub fn suggest_chart_type(&self, unknown: &str) -> ChartType {
        let lowered = unknown.to_lowercase();
        let first = lowered.chars().next();

        self.chart_types
            .iter()
            .copied()
            .find(|ty| {
                let name = ty.as_str();
                let starts_alike = first.is_some_and(|c| name.starts_with(c));
                let shares_initial = name.chars().next().is_some_and(|c| lowered.contains(c));
                starts_alike || shares_initial
            })
            .unwrap_or(ChartType::Bar)
    }
}

/// Remove one layer of surrounding straight quotes (`"` or `'`).
///
/// The leading and trailing quote are stripped independently, so a lone
/// opening quote is removed as well.
#[must_use]
pub fn strip_quotes(value: &str) -> &str {
    let is_quote = |c: char| c == '"' || c == '\'';
    let value = value.strip_prefix(is_quote).unwrap_or(value);
    value.strip_suffix(is_quote).unwrap_or(value)
}

/// Split a `Legend:` / `Colors:` value into trimmed, non-empty entries.
///
/// Accepts an optional surrounding `[ ]`, e.g. `[2023, 2024]`.
#[must_use]
pub fn split_list(value: &str) -> Vec<String> {
    let value = value.trim();
    let value = value
        .strip_prefix('[')
        .and_then(|inner| inner.strip_suffix(']'))
        .unwrap_or(value);

    value
        .split([',', FULL_WIDTH_COMMA])
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "header_tests.rs"]
mod tests;
