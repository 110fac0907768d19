use crate::cli::{Cli, ParseArgs};
use crate::dsl::parse;
use crate::{EXIT_SUCCESS, Result};

use super::context::{error_output, read_input, write_output};

#[must_use]
pub fn run_parse(args: &ParseArgs, cli: &Cli) -> i32 {
    match run_parse_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            error_output(cli.color).report(&e);
            e.exit_code()
        }
    }
}

/// Parses the input and writes its IR as JSON.
///
/// # Errors
/// Returns the parser's diagnostics, or an I/O error.
pub(crate) fn run_parse_impl(args: &ParseArgs) -> Result<()> {
    let source = read_input(args.input.as_deref())?;
    let json = parse_to_json(&source)?;
    write_output(args.output.as_deref(), &json)
}

/// Pretty-printed IR for `source`, newline-terminated.
///
/// # Errors
/// Returns [`crate::PlainvizError::Parse`] with every diagnostic when the
/// document is malformed.
pub fn parse_to_json(source: &str) -> Result<String> {
    let ir = parse(source)?;
    tracing::debug!(chart = %ir.chart_type, points = ir.labels.len(), "parsed document");
    Ok(format!("{}\n", serde_json::to_string_pretty(&ir)?))
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
