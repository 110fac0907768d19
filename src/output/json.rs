//! JSON envelope for `render --format json`.

use serde::Serialize;

use crate::error::Result;
use crate::ir::{Diagnostics, Ir};
use crate::render::RenderError;

/// Result of running one document through parse and render.
#[derive(Debug, Clone, Copy)]
pub enum RenderOutcome<'a> {
    Rendered { ir: &'a Ir, svg: &'a str },
    Invalid(&'a Diagnostics),
    Failed(&'a RenderError),
}

impl RenderOutcome<'_> {
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Rendered { .. })
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum Envelope<'a> {
    Rendered {
        ok: bool,
        ir: &'a Ir,
        svg: &'a str,
    },
    Invalid {
        ok: bool,
        errors: &'a Diagnostics,
    },
    Failed {
        ok: bool,
        error: String,
        code: &'static str,
    },
}

const RENDER_ERROR_CODE: &str = "RENDER_ERROR";

pub struct JsonFormatter;

impl JsonFormatter {
    /// Pretty-printed envelope for `outcome`.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn format(&self, outcome: &RenderOutcome<'_>) -> Result<String> {
        let envelope = match *outcome {
            RenderOutcome::Rendered { ir, svg } => Envelope::Rendered { ok: true, ir, svg },
            RenderOutcome::Invalid(errors) => Envelope::Invalid { ok: false, errors },
            RenderOutcome::Failed(error) => Envelope::Failed {
                ok: false,
                error: error.to_string(),
                code: RENDER_ERROR_CODE,
            },
        };

        Ok(serde_json::to_string_pretty(&envelope)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
