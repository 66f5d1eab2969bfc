use crate::cli::parser::Cli;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_input_dir")]
    pub input_dir: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_plots_dir")]
    pub plots_dir: String,
}

fn default_input_dir() -> String {
    "files/input".to_string()
}
fn default_output_dir() -> String {
    "files/output".to_string()
}
fn default_plots_dir() -> String {
    "files/plots".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            output_dir: default_output_dir(),
            plots_dir: default_plots_dir(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        let base = if cfg!(target_os = "windows") {
            env::var("APPDATA").ok().map(PathBuf::from)
        } else {
            env::var("HOME").ok().map(PathBuf::from)
        };
        let base = base
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        if cfg!(target_os = "windows") {
            base.join("rdriverstats")
        } else {
            base.join(".rdriverstats")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rdriverstats.conf")
    }

    /// Load configuration from the standard location, or defaults if absent
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    /// Load configuration from `path`. A missing file yields the defaults;
    /// keys absent from the file fall back to their defaults too.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    /// Write this configuration as YAML, creating the parent directory.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir).map_err(|e| AppError::file_access(dir, e))?;
            }
        }
        fs::write(path, self.to_yaml()?).map_err(|e| AppError::file_access(path, e))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("cannot serialize configuration: {e}")))
    }

    /// Command-line flags win over the file and the defaults.
    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(dir) = &cli.input {
            self.input_dir = dir.clone();
        }
        if let Some(dir) = &cli.output {
            self.output_dir = dir.clone();
        }
        if let Some(dir) = &cli.plots {
            self.plots_dir = dir.clone();
        }
    }

    pub fn input_path(&self) -> PathBuf {
        expand_tilde(&self.input_dir)
    }

    pub fn output_path(&self) -> PathBuf {
        expand_tilde(&self.output_dir)
    }

    pub fn plots_path(&self) -> PathBuf {
        expand_tilde(&self.plots_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn temp_conf(name: &str, content: Option<&str>) -> PathBuf {
        let path = env::temp_dir().join(format!("rdriverstats_config_{name}.conf"));
        fs::remove_file(&path).ok();
        if let Some(c) = content {
            fs::write(&path, c).unwrap();
        }
        path
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = temp_conf("missing", None);
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.input_dir, "files/input");
        assert_eq!(cfg.output_dir, "files/output");
        assert_eq!(cfg.plots_dir, "files/plots");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let path = temp_conf("partial", Some("input_dir: data/in\n"));
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.input_dir, "data/in");
        assert_eq!(cfg.output_dir, "files/output");
    }

    #[test]
    fn invalid_yaml_is_a_config_error() {
        let path = temp_conf("invalid", Some("input_dir: [unclosed\n"));
        assert!(matches!(Config::load_from(&path), Err(AppError::Config(_))));
    }

    #[test]
    fn saved_config_loads_back() {
        let path = temp_conf("saved", None);
        let cfg = Config {
            input_dir: "in".into(),
            output_dir: "out".into(),
            plots_dir: "plots".into(),
        };
        cfg.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), cfg);
    }

    #[test]
    fn yaml_lists_every_directory() {
        let yaml = Config::default().to_yaml().unwrap();
        assert!(yaml.contains("input_dir: files/input"));
        assert!(yaml.contains("output_dir: files/output"));
        assert!(yaml.contains("plots_dir: files/plots"));
    }

    #[test]
    fn cli_flags_override_file_values() {
        let cli = Cli::parse_from(["rdriverstats", "--output", "/tmp/out", "generate"]);
        let mut cfg = Config::default();
        cfg.apply_overrides(&cli);
        assert_eq!(cfg.output_dir, "/tmp/out");
        assert_eq!(cfg.input_dir, "files/input");
    }
}
