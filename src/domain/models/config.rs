use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Main configuration structure for Dialectic
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Round loop configuration
    #[serde(default)]
    pub orchestration: OrchestrationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Round loop configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct OrchestrationConfig {
    /// Hard cap on rounds per run (1-20)
    #[serde(default = "default_max_rounds")]
    pub max_rounds: u32,

    /// Score (0-100) at or above which a run stops as converged
    #[serde(default = "default_convergence_threshold")]
    pub convergence_threshold: u8,

    /// Deadline for all hook calls of one round, in seconds
    #[serde(default = "default_round_timeout_secs")]
    pub round_timeout_secs: u64,
}

const fn default_max_rounds() -> u32 {
    3
}

const fn default_convergence_threshold() -> u8 {
    88
}

const fn default_round_timeout_secs() -> u64 {
    300
}

impl Default for OrchestrationConfig {
    fn default() -> Self {
        Self {
            max_rounds: default_max_rounds(),
            convergence_threshold: default_convergence_threshold(),
            round_timeout_secs: default_round_timeout_secs(),
        }
    }
}

impl OrchestrationConfig {
    pub const fn round_timeout(&self) -> Duration {
        Duration::from_secs(self.round_timeout_secs)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling JSON log files (stderr only when unset)
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
        }
    }
}
