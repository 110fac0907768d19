//! Single- vs multi-series detection for data values.

use super::number::is_number;

/// Full-width comma used by CJK input methods.
pub const FULL_WIDTH_COMMA: char = '，';

/// Split a data value into its series fragments.
///
/// A full-width comma always splits. An ASCII comma splits only when followed
/// by whitespace or the end of the field, so `1,200` stays intact. The split is
/// kept only when it yields several fragments that all parse as numbers;
/// otherwise the whole (trimmed) field comes back as a single fragment.
#[must_use]
pub fn split_values(field: &str) -> Vec<&str> {
    let field = field.trim();
    let fragments = split_on_delimiters(field);

    if fragments.len() > 1 && fragments.iter().all(|fragment| is_number(fragment)) {
        fragments
    } else {
        vec![field]
    }
}

fn split_on_delimiters(field: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut start = 0;
    let mut chars = field.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        let splits = match ch {
            FULL_WIDTH_COMMA => true,
            ',' => chars.peek().is_none_or(|&(_, next)| next.is_whitespace()),
            _ => false,
        };
        if splits {
            fragments.push(field[start..idx].trim());
            start = idx + ch.len_utf8();
        }
    }
    fragments.push(field[start..].trim());

    fragments
}

#[cfg(test)]
#[path = "split_tests.rs"]
mod tests;
