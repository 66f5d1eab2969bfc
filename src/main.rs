//! rDriverStats main entrypoint.

use clap::Parser;
use rdriverstats::cli::parser::Cli;
use rdriverstats::run;
use rdriverstats::ui::messages::error;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr; RUST_LOG overrides the verbosity flag.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
