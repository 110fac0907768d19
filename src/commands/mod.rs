//! Subcommand entry points. Each `run_*` reports its own errors and returns
//! the process exit code.

pub mod config;
pub mod context;
pub mod embed;
pub mod init;
pub mod parse;
pub mod render;

pub use config::run_config;
pub use embed::run_embed;
pub use init::{generate_config_template, run_init, run_init_impl};
pub use parse::{parse_to_json, run_parse};
pub use render::{load_document, render_svg, run_render};

use crate::cli::{Cli, Commands};

/// Run the selected subcommand.
#[must_use]
pub fn dispatch(cli: &Cli) -> i32 {
    match &cli.command {
        Commands::Parse(args) => run_parse(args, cli),
        Commands::Render(args) => run_render(args, cli),
        Commands::Embed(args) => run_embed(args, cli),
        Commands::Init(args) => run_init(args, cli),
        Commands::Config(args) => run_config(args, cli),
    }
}
