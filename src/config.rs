//! Runtime configuration from environment variables.
//!
//! - `MAZE_LAYOUT_PATH`: read the maze from this file instead of the built-in layout
//! - `MAZE_LOG_PATH`: write logs to this file; without it logging is off
//!   (the game owns the terminal, so logs never go to stderr)
//!
//! Empty values are treated as unset.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;

use crate::types::DEFAULT_LAYOUT;

pub const LAYOUT_PATH_VAR: &str = "MAZE_LAYOUT_PATH";
pub const LOG_PATH_VAR: &str = "MAZE_LOG_PATH";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub layout_path: Option<PathBuf>,
    pub log_path: Option<PathBuf>,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) })
        };

        Self {
            layout_path: path(LAYOUT_PATH_VAR),
            log_path: path(LOG_PATH_VAR),
        }
    }

    /// Layout text: the configured file, or the built-in maze.
    pub fn load_layout(&self) -> Result<String> {
        match &self.layout_path {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading maze layout from {}", path.display()))?;
                info!("loaded layout from {}", path.display());
                Ok(text)
            }
            None => Ok(DEFAULT_LAYOUT.to_string()),
        }
    }

    /// Install the global logger.
    ///
    /// Records at `info` and above (or per `RUST_LOG`) are appended to the
    /// configured log file. Without a log path no logger is installed, even
    /// when `RUST_LOG` is set, so nothing is written over the game screen.
    pub fn init_logging(&self) -> Result<()> {
        if let Some(mut builder) = self.logger()? {
            builder.try_init().context("installing logger")?;
        }
        Ok(())
    }

    fn logger(&self) -> Result<Option<env_logger::Builder>> {
        let Some(path) = &self.log_path else {
            return Ok(None);
        };
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        let mut builder =
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
        builder.target(env_logger::Target::Pipe(Box::new(file)));
        Ok(Some(builder))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.load_layout().unwrap(), DEFAULT_LAYOUT);
    }

    #[test]
    fn blank_values_are_unset() {
        let config =
            AppConfig::from_lookup(lookup(&[(LAYOUT_PATH_VAR, "  "), (LOG_PATH_VAR, "")]));
        assert_eq!(config.layout_path, None);
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn paths_are_trimmed() {
        let config = AppConfig::from_lookup(lookup(&[(LAYOUT_PATH_VAR, " maze.txt ")]));
        assert_eq!(config.layout_path, Some(PathBuf::from("maze.txt")));
    }

    #[test]
    fn missing_layout_file_is_an_error() {
        let config = AppConfig {
            layout_path: Some(PathBuf::from("/nonexistent/tui-maze/layout.txt")),
            log_path: None,
        };
        let err = config.load_layout().unwrap_err();
        assert!(err.to_string().contains("reading maze layout"));
    }

    #[test]
    fn no_logger_without_log_path() {
        std::env::set_var("RUST_LOG", "debug");
        let config = AppConfig::from_lookup(lookup(&[]));
        assert!(config.logger().unwrap().is_none());
        // Nothing installed, so no global logger is claimed.
        config.init_logging().unwrap();
        assert_eq!(log::max_level(), log::LevelFilter::Off);
    }

    #[test]
    fn logger_targets_configured_file() {
        let path = std::env::temp_dir().join(format!("tui-maze-{}.log", std::process::id()));
        let config = AppConfig {
            layout_path: None,
            log_path: Some(path.clone()),
        };
        assert!(config.logger().unwrap().is_some());
        assert!(path.exists());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn unwritable_log_path_is_an_error() {
        let config = AppConfig {
            layout_path: None,
            log_path: Some(PathBuf::from("/nonexistent/tui-maze/maze.log")),
        };
        let Err(err) = config.logger() else {
            panic!("log file under a missing directory should not open");
        };
        assert!(err.to_string().contains("opening log file"));
    }
}
