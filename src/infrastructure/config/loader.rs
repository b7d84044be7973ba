use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Largest accepted `max_rounds`.
const MAX_ROUNDS_LIMIT: u32 = 20;

/// Largest accepted `round_timeout_secs` (one day).
const MAX_ROUND_TIMEOUT_SECS: u64 = 86_400;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid max_rounds: {0}. Must be between 1 and {MAX_ROUNDS_LIMIT}")]
    InvalidMaxRounds(u32),

    #[error("Invalid convergence_threshold: {0}. Must be between 0 and 100")]
    InvalidConvergenceThreshold(u8),

    #[error("Invalid round_timeout_secs: {0}. Must be between 1 and {MAX_ROUND_TIMEOUT_SECS}")]
    InvalidRoundTimeout(u64),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .dialectic/config.yaml (project config)
    /// 3. .dialectic/local.yaml (project local overrides, optional)
    /// 4. Environment variables (DIALECTIC_* prefix, `__` separates sections)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(".dialectic/config.yaml"))
            .merge(Yaml::file(".dialectic/local.yaml"))
            .merge(Env::prefixed("DIALECTIC_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        if !path.as_ref().is_file() {
            anyhow::bail!("Config file not found: {}", path.as_ref().display());
        }

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .with_context(|| format!("Failed to load config from {}", path.as_ref().display()))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let orchestration = &config.orchestration;

        if orchestration.max_rounds == 0 || orchestration.max_rounds > MAX_ROUNDS_LIMIT {
            return Err(ConfigError::InvalidMaxRounds(orchestration.max_rounds));
        }

        if orchestration.convergence_threshold > 100 {
            return Err(ConfigError::InvalidConvergenceThreshold(
                orchestration.convergence_threshold,
            ));
        }

        if orchestration.round_timeout_secs == 0
            || orchestration.round_timeout_secs > MAX_ROUND_TIMEOUT_SECS
        {
            return Err(ConfigError::InvalidRoundTimeout(
                orchestration.round_timeout_secs,
            ));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        Ok(())
    }
}
