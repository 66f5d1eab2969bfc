//! rDriverStats library root.
//! Exposes the CLI parser, the high-level run() function, and the pipeline
//! modules (load, aggregate, export) used by the binary and by tests.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

pub use crate::core::pipeline::{RunReport, build_summary, generate_outputs};

use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Generate => cli::commands::generate::handle(cfg),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cli, cfg),
    }
}

/// Entry point used by main.rs once the CLI has been parsed.
pub fn run(cli: &Cli) -> AppResult<()> {
    // 1️⃣ load config once (explicit --config file wins over the default location)
    let mut cfg = match &cli.config {
        Some(path) => Config::load_from(&utils::path::expand_tilde(path))?,
        None => Config::load()?,
    };

    // 2️⃣ command-line directory overrides
    cfg.apply_overrides(cli);

    // 3️⃣ hand everything to the dispatcher
    dispatch(cli, &cfg)
}
