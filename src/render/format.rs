//! Text escaping and number formatting for SVG output.

/// Escape text for use in SVG element content and attribute values.
#[must_use]
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Gridline tick label: the tick value rounded to the nearest integer.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn tick_label(value: f64) -> String {
    let rounded = value.round();
    if rounded == 0.0 {
        // Avoid "-0" for tiny negative ticks.
        return "0".to_string();
    }
    format!("{}", rounded as i64)
}

/// Percentage of `total` rounded to the nearest integer.
#[must_use]
pub fn percent_label(value: f64, total: f64) -> String {
    tick_label(value / total * 100.0)
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
