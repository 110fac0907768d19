use clap::Parser;
use tracing_subscriber::EnvFilter;

use plainviz::cli::Cli;
use plainviz::commands::dispatch;

/// Environment variable overriding the `-v` derived log filter.
const LOG_ENV: &str = "PLAINVIZ_LOG";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    std::process::exit(dispatch(&cli));
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "off"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
