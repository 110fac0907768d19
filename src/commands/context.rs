//! Helpers shared by every subcommand: input, output, config and colours.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::cli::ColorChoice;
use crate::config::{ConfigLoader, FileConfigLoader, LoadResult};
use crate::error::{PlainvizError, Result};
use crate::output::{ColorMode, ErrorOutput};

/// Path that stands for stdin.
pub const STDIN_PATH: &str = "-";

#[must_use]
pub(crate) const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

#[must_use]
pub(crate) fn error_output(choice: ColorChoice) -> ErrorOutput {
    ErrorOutput::new(color_choice_to_mode(choice))
}

/// Read the whole input, from stdin when `input` is `None` or `-`.
///
/// # Errors
/// Returns an error if the file or stdin cannot be read.
pub(crate) fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != STDIN_PATH => {
            tracing::debug!(path = %path.display(), "reading input");
            fs::read_to_string(path).map_err(|source| PlainvizError::FileRead {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => {
            tracing::debug!("reading input from stdin");
            let mut content = String::new();
            io::stdin().read_to_string(&mut content)?;
            Ok(content)
        }
    }
}

/// Write `content` to `output_path`, or to stdout when there is none.
///
/// # Errors
/// Returns an error if the parent directory or file cannot be written.
pub(crate) fn write_output(output_path: Option<&Path>, content: &str) -> Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "wrote output");
    } else {
        print!("{content}");
    }
    Ok(())
}

/// Load configuration from an explicit path, the default locations, or
/// nowhere at all when `no_config` is set.
///
/// # Errors
/// Returns an error if the chosen configuration file cannot be loaded.
pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<LoadResult> {
    load_config_with(&FileConfigLoader::new(), config_path, no_config)
}

pub(crate) fn load_config_with<L: ConfigLoader>(
    loader: &L,
    config_path: Option<&Path>,
    no_config: bool,
) -> Result<LoadResult> {
    if no_config {
        tracing::debug!("configuration disabled by --no-config");
        return Ok(LoadResult {
            config: crate::config::Config::default(),
            source: None,
        });
    }
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
