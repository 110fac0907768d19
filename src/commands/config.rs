use std::fmt::Write;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs, ConfigOutputFormat};
use crate::config::{ConfigLoader, FileConfigLoader, LoadResult};
use crate::{EXIT_SUCCESS, Result};

use super::context::{error_output, load_config};

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    let result = match &args.action {
        ConfigAction::Validate { config } => run_config_validate_impl(config).map(|()| {
            if !cli.quiet {
                println!("Configuration is valid: {}", config.display());
            }
        }),
        ConfigAction::Show { config, format } => {
            run_config_show_impl(config.as_deref(), *format, cli.no_config).map(|output| print!("{output}"))
        }
    };

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            error_output(cli.color).report(&e);
            e.exit_code()
        }
    }
}

/// Validates a configuration file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has semantic errors.
pub(crate) fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    FileConfigLoader::new().load_from_path(config_path).map(|_| ())
}

/// Shows the effective configuration.
///
/// # Errors
/// Returns an error if the configuration file cannot be loaded or serialization fails.
pub(crate) fn run_config_show_impl(
    config_path: Option<&Path>,
    format: ConfigOutputFormat,
    no_config: bool,
) -> Result<String> {
    let loaded = load_config(config_path, no_config)?;

    match format {
        ConfigOutputFormat::Json => {
            let json = serde_json::to_string_pretty(&loaded.config)?;
            Ok(format!("{json}\n"))
        }
        ConfigOutputFormat::Text => Ok(format_config_text(&loaded)),
    }
}

#[must_use]
pub(crate) fn format_config_text(loaded: &LoadResult) -> String {
    let config = &loaded.config;
    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n");
    match &loaded.source {
        Some(path) => {
            let _ = writeln!(output, "Source: {}", path.display());
        }
        None => output.push_str("Source: built-in defaults\n"),
    }

    let render = &config.render;
    output.push_str("\n[render]\n");
    let _ = writeln!(output, "  width = {}", render.width);
    let _ = writeln!(output, "  height = {}", render.height);
    let _ = writeln!(output, "  padding = {}", render.padding);
    match render.theme {
        Some(theme) => {
            let _ = writeln!(output, "  theme = {theme}");
        }
        None => output.push_str("  theme = (from document, else dark)\n"),
    }
    if let Some(colors) = &render.colors {
        let _ = writeln!(output, "  colors = {colors:?}");
    }
    for (key, value) in [
        ("background_color", &render.background_color),
        ("text_color", &render.text_color),
        ("grid_color", &render.grid_color),
    ] {
        if let Some(value) = value {
            let _ = writeln!(output, "  {key} = {value}");
        }
    }

    output.push_str("\n[embed]\n");
    let _ = writeln!(output, "  class_name = {}", config.embed.class_name);
    let _ = writeln!(output, "  languages = {:?}", config.embed.languages);

    output
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
