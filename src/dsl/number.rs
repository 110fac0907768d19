//! Numeric token normalization.

/// Characters stripped before parsing: currency, percent and thousands separators.
const DECORATION: [char; 3] = ['$', '%', ','];

/// Strip `$`, `%`, `,` and whitespace from `token` and parse what remains.
///
/// Returns `None` for empty input, malformed numbers, and non-finite results.
#[must_use]
pub fn normalize_number(token: &str) -> Option<f64> {
    let cleaned: String = token
        .chars()
        .filter(|c| !DECORATION.contains(c) && !c.is_whitespace())
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// True when `token` normalizes to a number.
#[must_use]
pub fn is_number(token: &str) -> bool {
    normalize_number(token).is_some()
}

#[cfg(test)]
#[path = "number_tests.rs"]
mod tests;
