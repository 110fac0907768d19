//! The plain-text chart DSL.
//!
//! A document is a run of `Key: Value` lines. Recognized keys before the first
//! data row set chart metadata; every other line is a data row whose value is a
//! number or, for multi-series charts, a comma-separated list of numbers.

mod header;
mod number;
mod parser;
mod split;

pub use header::{HeaderKey, STANDARD_VOCABULARY, Vocabulary, split_list, strip_quotes};
pub use number::{is_number, normalize_number};
pub use parser::{Parser, parse};
pub use split::{FULL_WIDTH_COMMA, split_values};
