//! plainviz turns plain `Label: Value` text into SVG charts.
//!
//! The pipeline is [`parse`] (text to [`Ir`]) followed by [`render`]
//! ([`Ir`] to an SVG string). Both are pure and deterministic.

pub mod cli;
pub mod commands;
pub mod config;
pub mod dsl;
pub mod embed;
pub mod error;
pub mod ir;
pub mod output;
pub mod render;

pub use dsl::parse;
pub use error::{PlainvizError, Result};
pub use ir::{ChartType, Diagnostics, Ir, ParseError};
pub use render::{RenderError, RenderOptions, render};

pub const EXIT_SUCCESS: i32 = 0;
/// The document could not be parsed or rendered.
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
