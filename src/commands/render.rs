use std::path::Path;

use crate::cli::{Cli, RenderArgs};
use crate::config::RenderConfig;
use crate::dsl::parse;
use crate::ir::Ir;
use crate::output::{JsonFormatter, OutputFormat, RenderOutcome};
use crate::render::render;
use crate::{EXIT_FAILURE, EXIT_SUCCESS, PlainvizError, Result};

use super::context::{error_output, load_config, read_input, write_output};

#[must_use]
pub fn run_render(args: &RenderArgs, cli: &Cli) -> i32 {
    match run_render_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            error_output(cli.color).report(&e);
            e.exit_code()
        }
    }
}

/// Renders one document. JSON output reports document failures inside the
/// envelope and returns [`EXIT_FAILURE`] instead of an error.
///
/// # Errors
/// Returns an error if configuration or input cannot be loaded, or, for SVG
/// output, if the document cannot be parsed or rendered.
pub(crate) fn run_render_impl(args: &RenderArgs, cli: &Cli) -> Result<i32> {
    let loaded = load_config(args.config.as_deref(), cli.no_config)?;
    let render_config = apply_overrides(loaded.config.render, args);

    let source = read_input(args.input.as_deref())?;
    let document = load_document(&source, args.ir);

    match args.format {
        OutputFormat::Svg => {
            let svg = render_svg(&document?, &render_config)?;
            write_output(args.output.as_deref(), &format!("{svg}\n"))?;
            Ok(EXIT_SUCCESS)
        }
        OutputFormat::Json => render_json(document, &render_config, args.output.as_deref()),
    }
}

/// Command-line flags take precedence over the configuration file.
#[must_use]
pub(crate) fn apply_overrides(mut config: RenderConfig, args: &RenderArgs) -> RenderConfig {
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(padding) = args.padding {
        config.padding = padding;
    }
    if let Some(theme) = args.theme {
        config.theme = Some(theme.into());
    }
    config
}

/// DSL text, or IR JSON when `is_ir` is set.
///
/// # Errors
/// Returns parse diagnostics or a JSON decoding error.
pub fn load_document(source: &str, is_ir: bool) -> Result<Ir> {
    if is_ir {
        serde_json::from_str(source).map_err(PlainvizError::InvalidIr)
    } else {
        Ok(parse(source)?)
    }
}

/// SVG for `ir` using the configured options and the document's own theme.
///
/// # Errors
/// Returns a render error for degenerate data or canvas sizes.
pub fn render_svg(ir: &Ir, config: &RenderConfig) -> Result<String> {
    Ok(render(ir, &config.options_for_ir(ir))?)
}

fn render_json(document: Result<Ir>, config: &RenderConfig, output: Option<&Path>) -> Result<i32> {
    let ir = match document {
        Ok(ir) => ir,
        Err(PlainvizError::Parse(diagnostics)) => {
            let json = JsonFormatter.format(&RenderOutcome::Invalid(&diagnostics))?;
            write_output(output, &format!("{json}\n"))?;
            return Ok(EXIT_FAILURE);
        }
        Err(e) => return Err(e),
    };

    let rendered = render(&ir, &config.options_for_ir(&ir));
    let outcome = match &rendered {
        Ok(svg) => RenderOutcome::Rendered { ir: &ir, svg },
        Err(err) => RenderOutcome::Failed(err),
    };

    let json = JsonFormatter.format(&outcome)?;
    write_output(output, &format!("{json}\n"))?;
    Ok(if outcome.is_ok() { EXIT_SUCCESS } else { EXIT_FAILURE })
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
