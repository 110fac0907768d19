//! Unified error and warning output formatting with color support.
//!
//! Format: ✖ Error Type / × Detail / help: Suggestion

use std::io::{IsTerminal, Write};

use super::ColorMode;
use super::ansi;
use crate::error::PlainvizError;
use crate::ir::Diagnostics;

/// Error output formatter with color support.
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    /// Creates a new error output formatter with the specified color mode.
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    /// Creates an error output formatter that auto-detects color support on stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(ColorMode::Auto)
    }

    /// Creates an error output formatter with explicit color control.
    #[must_use]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            // https://no-color.org: presence of the variable disables color
            ColorMode::Auto => std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal(),
        }
    }

    /// Prints any crate error to stderr. Parse failures list every diagnostic.
    pub fn report(&self, error: &PlainvizError) {
        let mut stderr = std::io::stderr().lock();
        self.write_report(&mut stderr, error);
    }

    /// Prints a warning to stderr.
    pub fn print_warning(&self, message: &str, suggestion: Option<&str>) {
        let mut stderr = std::io::stderr().lock();
        self.write_warning(&mut stderr, message, None, suggestion);
    }

    /// Writes any crate error to a writer.
    pub fn write_report<W: Write>(&self, w: &mut W, error: &PlainvizError) {
        if let PlainvizError::Parse(diagnostics) = error {
            self.write_diagnostics(w, diagnostics);
            return;
        }
        self.write_error(
            w,
            error.error_type(),
            &error.message(),
            error.detail().as_deref(),
            error.suggestion(),
        );
    }

    /// Writes one header line followed by every diagnostic with its source
    /// line and hint.
    pub fn write_diagnostics<W: Write>(&self, w: &mut W, diagnostics: &Diagnostics) {
        let summary = match diagnostics.len() {
            1 => "1 problem found".to_string(),
            n => format!("{n} problems found"),
        };
        self.write_error(w, "Parse", &summary, None, None);

        for diagnostic in diagnostics {
            self.write_detail(w, &diagnostic.to_string());
            if let Some(source) = &diagnostic.source_line {
                let _ = writeln!(w, "    | {source}");
            }
            if let Some(hint) = &diagnostic.hint {
                let mut lines = hint.lines();
                if let Some(first) = lines.next() {
                    self.write_help(w, "    ", first);
                }
                for rest in lines {
                    let _ = writeln!(w, "          {rest}");
                }
            }
        }
    }

    /// Writes error to a writer.
    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        // Write failures on stderr are ignored; there is nowhere left to report them.
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {message}");
        }

        if let Some(d) = detail {
            self.write_detail(w, d);
        }

        if let Some(s) = suggestion {
            self.write_help(w, "  ", s);
        }
    }

    /// Writes warning to a writer.
    pub fn write_warning<W: Write>(
        &self,
        w: &mut W,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}⚠ Warning:{} {message}",
                ansi::BOLD,
                ansi::YELLOW,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "⚠ Warning: {message}");
        }

        if let Some(d) = detail {
            self.write_detail(w, d);
        }

        if let Some(s) = suggestion {
            self.write_help(w, "  ", s);
        }
    }

    fn write_detail<W: Write>(&self, w: &mut W, detail: &str) {
        if self.use_colors {
            let _ = writeln!(w, "  {}× {detail}{}", ansi::DIM, ansi::RESET);
        } else {
            let _ = writeln!(w, "  × {detail}");
        }
    }

    fn write_help<W: Write>(&self, w: &mut W, indent: &str, text: &str) {
        if self.use_colors {
            let _ = writeln!(w, "{indent}{}help:{} {text}", ansi::CYAN, ansi::RESET);
        } else {
            let _ = writeln!(w, "{indent}help: {text}");
        }
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::stderr()
    }
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
