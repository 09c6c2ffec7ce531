//! Service configuration management.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Slate JSON document to build from.
    pub slate_file: PathBuf,

    /// Slate reference TOML (games, aliases, stack designation).
    pub slate_config: Option<PathBuf>,

    /// Lineups to request per run.
    pub lineup_count: u32,

    /// Output directory for submission files.
    pub output_dir: PathBuf,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    pub level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            slate_file: PathBuf::from("./data/slate.json"),
            slate_config: None,
            lineup_count: 4,
            output_dir: PathBuf::from("./out"),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string() }
    }
}

impl ServiceConfig {
    /// Load configuration from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file {:?}", path.as_ref()))?;
        let config: ServiceConfig =
            toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Load from `path` when given, defaults otherwise, then apply
    /// environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load_from_file(path)?,
            None => Self::default(),
        };
        config.apply_env();
        Ok(config)
    }

    /// Environment overrides for container deployments.
    fn apply_env(&mut self) {
        if let Ok(slate) = std::env::var("LINEUP_SLATE_FILE") {
            self.slate_file = PathBuf::from(slate);
        }
        if let Ok(count) = std::env::var("LINEUP_COUNT") {
            if let Ok(count) = count.parse() {
                self.lineup_count = count;
            }
        }
        if let Ok(out) = std::env::var("LINEUP_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(out);
        }
        if let Ok(level) = std::env::var("LINEUP_LOG_LEVEL") {
            self.logging.level = level;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_request_four_lineups() {
        let config = ServiceConfig::default();
        assert_eq!(config.lineup_count, 4);
        assert_eq!(config.logging.level, "info");
        assert!(config.slate_config.is_none());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: ServiceConfig = toml::from_str(
            r#"
            slate_file = "./slates/showdown.json"
            lineup_count = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.slate_file, PathBuf::from("./slates/showdown.json"));
        assert_eq!(config.lineup_count, 10);
        assert_eq!(config.output_dir, PathBuf::from("./out"));
    }
}
