//! SVG styling primitives: text anchoring and typography.

use std::fmt;

/// Font stack used for every text element.
pub const FONT_FAMILY: &str = "system-ui, sans-serif";

/// Font size for the chart title.
pub const TITLE_FONT_SIZE: f64 = 16.0;

/// Font size for axis, value and legend labels.
pub const LABEL_FONT_SIZE: f64 = 11.0;

/// Text anchor position for labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
