use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::LOCAL_CONFIG_NAME;
use crate::output::OutputFormat;
use crate::render::Theme;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Colour scheme for rendered charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeChoice {
    Dark,
    Light,
}

impl From<ThemeChoice> for Theme {
    fn from(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Dark => Self::Dark,
            ThemeChoice::Light => Self::Light,
        }
    }
}

/// Output format for `config show`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ConfigOutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "plainviz")]
#[command(author, version, about = "Turn plain \"Label: Value\" text into SVG charts")]
#[command(long_about = "Parse a tiny line-oriented chart language and render it to SVG.\n\n\
    Input reads from a file, or from stdin when the path is '-' or omitted.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Chart could not be parsed or rendered\n  \
    2 - Configuration or I/O error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a chart and print its intermediate representation as JSON
    Parse(ParseArgs),

    /// Render a chart to SVG
    Render(RenderArgs),

    /// Replace chart code blocks in a markdown document with SVG
    Embed(EmbedArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
pub struct ParseArgs {
    /// Chart source file ('-' for stdin)
    pub input: Option<PathBuf>,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Chart source file ('-' for stdin)
    pub input: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format [possible values: svg, json]
    #[arg(short, long, default_value = "svg")]
    pub format: OutputFormat,

    /// Read intermediate representation JSON instead of chart source
    #[arg(long)]
    pub ir: bool,

    /// Canvas width in pixels (overrides config)
    #[arg(long)]
    pub width: Option<f64>,

    /// Canvas height in pixels (overrides config)
    #[arg(long)]
    pub height: Option<f64>,

    /// Padding around the plot in pixels (overrides config)
    #[arg(long)]
    pub padding: Option<f64>,

    /// Colour scheme (overrides config and the document's Theme header)
    #[arg(long, value_enum)]
    pub theme: Option<ThemeChoice>,
}

#[derive(Parser, Debug)]
pub struct EmbedArgs {
    /// Markdown file ('-' for stdin)
    pub input: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Class of the <div> wrapping each chart (overrides config)
    #[arg(long)]
    pub class_name: Option<String>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and values
    Validate {
        /// Path to configuration file
        #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
        config: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ConfigOutputFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
