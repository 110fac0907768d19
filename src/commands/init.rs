use std::fs;

use crate::cli::{Cli, InitArgs};
use crate::{EXIT_SUCCESS, PlainvizError, Result};

use super::context::error_output;

#[must_use]
pub fn run_init(args: &InitArgs, cli: &Cli) -> i32 {
    match run_init_impl(args) {
        Ok(()) => {
            if !cli.quiet {
                println!("Created configuration file: {}", args.output.display());
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            error_output(cli.color).report(&e);
            e.exit_code()
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(PlainvizError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;
    tracing::debug!(path = %output_path.display(), "wrote configuration template");
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r##"# plainviz configuration file
# Looked up as .plainviz.toml in the working directory, then as
# config.toml in the platform configuration directory.

[render]
# Canvas size in pixels
width = 500
height = 300

# Space between the canvas edge and the plot area
padding = 60

# Colour scheme: "dark" or "light". When unset, a document's
# "Theme:" header line decides, falling back to dark.
# theme = "dark"

# Series palette, used in order and repeated when exhausted.
# A document's "Colors:" header takes precedence.
# colors = ["#89b4fa", "#a6e3a1", "#f9e2af", "#fab387"]

# Override individual theme colours
# background_color = "#1e1e2e"
# text_color = "#cdd6f4"
# grid_color = "#313244"

[embed]
# Class of the <div> wrapping each chart in `plainviz embed` output
class_name = "plainviz-chart"

# Fenced code block languages treated as charts
languages = ["plainviz", "pv"]
"##
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
