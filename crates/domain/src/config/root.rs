use super::{ConfigError, DatabaseConfig, LoggingConfig, PipelineConfig, ScopeConfig};
use crate::names::normalize_name;
use serde::{Deserialize, Serialize};
use std::path::Path;

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Root configuration, loaded from TOML and patched by CLI flags
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub pipeline: PipelineConfig,

    #[serde(default)]
    pub scope: ScopeConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values given on the command line take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub max_concurrency: Option<usize>,
    pub database_path: Option<String>,
    pub disable_database: bool,
    pub log_level: Option<String>,
    pub domains: Vec<String>,
    pub run_id: Option<String>,
}

impl Config {
    /// Loads the config file (or defaults when `path` is `None`) and applies `overrides`.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        config.normalize_scope();
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pipeline.max_concurrency == 0 {
            return Err(ConfigError::Validation(
                "pipeline.max_concurrency must be at least 1".to_string(),
            ));
        }
        if self.pipeline.backoff_ms.is_empty() {
            return Err(ConfigError::Validation(
                "pipeline.backoff_ms must contain at least one delay".to_string(),
            ));
        }
        if self.pipeline.heartbeat_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "pipeline.heartbeat_interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.pipeline.service_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "pipeline.service_name cannot be empty".to_string(),
            ));
        }
        if !VALID_LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.level must be one of {:?}, got '{}'",
                VALID_LOG_LEVELS, self.logging.level
            )));
        }
        if self.database.enabled && self.database.path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "database.path cannot be empty when the database sink is enabled".to_string(),
            ));
        }
        Ok(())
    }

    fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(max) = overrides.max_concurrency {
            self.pipeline.max_concurrency = max;
        }
        if let Some(path) = overrides.database_path {
            self.database.path = path;
        }
        if overrides.disable_database {
            self.database.enabled = false;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if overrides.run_id.is_some() {
            self.scope.run_id = overrides.run_id;
        }
        self.scope.domains.extend(overrides.domains);
    }

    fn normalize_scope(&mut self) {
        let normalize_all = |names: &mut Vec<String>| {
            let mut normalized: Vec<String> = names
                .iter()
                .map(|n| normalize_name(n))
                .filter(|n| !n.is_empty())
                .collect();
            normalized.sort();
            normalized.dedup();
            *names = normalized;
        };
        normalize_all(&mut self.scope.domains);
        normalize_all(&mut self.scope.excluded);
    }
}
