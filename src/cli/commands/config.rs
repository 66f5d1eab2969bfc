use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        init,
        force,
    } = cmd
    {
        let path = match &cli.config {
            Some(p) => expand_tilde(p),
            None => Config::config_file(),
        };

        // ---- INIT CONFIG ----
        if *init {
            if path.exists() && !*force {
                return Err(AppError::Config(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }
            Config::default().save_to(&path)?;
            success(format!("Config file: {}", path.display()));
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            info(format!("Effective configuration ({}):", path.display()));
            print!("{}", cfg.to_yaml()?);
        }

        if !*init && !*print_config {
            info(format!("Config file: {}", path.display()));
        }
    }

    Ok(())
}
