use crate::cli::{Cli, EmbedArgs};
use crate::embed::{EmbedOptions, find_chart_blocks, replace_chart_blocks};
use crate::{EXIT_SUCCESS, Result};

use super::context::{error_output, load_config, read_input, write_output};

#[must_use]
pub fn run_embed(args: &EmbedArgs, cli: &Cli) -> i32 {
    match run_embed_impl(args, cli) {
        Ok(0) if !cli.quiet => {
            error_output(cli.color).print_warning(
                "No chart blocks found",
                Some("Fence charts with ```plainviz or ```pv"),
            );
            EXIT_SUCCESS
        }
        Ok(_) => EXIT_SUCCESS,
        Err(e) => {
            error_output(cli.color).report(&e);
            e.exit_code()
        }
    }
}

/// Rewrites a markdown document with its chart blocks rendered and returns
/// how many blocks were found.
///
/// Blocks that fail become error blocks in the output; they do not fail the
/// command.
///
/// # Errors
/// Returns an error if configuration or input cannot be loaded, or the
/// output cannot be written.
pub(crate) fn run_embed_impl(args: &EmbedArgs, cli: &Cli) -> Result<usize> {
    let loaded = load_config(args.config.as_deref(), cli.no_config)?;
    let options = embed_options(&loaded.config, args);

    let markdown = read_input(args.input.as_deref())?;
    let blocks = find_chart_blocks(&markdown, &options);
    let rewritten = replace_chart_blocks(&markdown, &blocks, &options);
    write_output(args.output.as_deref(), &rewritten)?;
    Ok(blocks.len())
}

fn embed_options(config: &crate::config::Config, args: &EmbedArgs) -> EmbedOptions {
    let mut options = EmbedOptions::from_config(config);
    if let Some(class_name) = &args.class_name {
        options.class_name.clone_from(class_name);
    }
    options
}

#[cfg(test)]
#[path = "embed_tests.rs"]
mod tests;
