//! Configuration loading and validation.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::calculate::KickoffSchedule;
use crate::models::Round;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors_origin() -> String {
    "*".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origin: default_cors_origin(),
        }
    }
}

/// Worksheet source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Endpoint returning the picks worksheet as a JSON array of rows.
    pub picks_url: Url,

    /// Endpoint returning the scores worksheet as a JSON array of rows.
    pub scores_url: Url,

    /// Snapshot cache freshness in seconds.
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,
}

fn default_cache_ttl() -> u64 {
    30
}

impl SourceConfig {
    /// Cache TTL as a `Duration`.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

/// Kickoff schedule configuration: round name → kickoff timestamp
/// (RFC 3339, timezone-aware). Rounds without an entry never start.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleConfig {
    #[serde(default)]
    pub kickoffs: BTreeMap<String, DateTime<FixedOffset>>,
}

impl ScheduleConfig {
    /// Build the gate used by the scoring engine.
    ///
    /// Unknown round names were rejected by `validate`, so they are
    /// silently ignored here.
    pub fn kickoff_schedule(&self) -> KickoffSchedule {
        let mut schedule = KickoffSchedule::new();
        for (name, at) in &self.kickoffs {
            if let Some(round) = Round::parse(name) {
                schedule = schedule.with_kickoff(round, at.with_timezone(&Utc));
            }
        }
        schedule
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub server: ServerConfig,

    /// Absent when running purely from local fixtures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceConfig>,

    #[serde(default)]
    pub schedule: ScheduleConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            server: ServerConfig::default(),
            source: None,
            schedule: ScheduleConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "Server port must be greater than 0".to_string(),
            ));
        }

        if let Some(source) = &self.source {
            if source.cache_ttl_secs == 0 {
                return Err(ConfigError::ValidationError(
                    "Source cache TTL must be greater than 0".to_string(),
                ));
            }
        }

        for name in self.schedule.kickoffs.keys() {
            if Round::parse(name).is_none() {
                return Err(ConfigError::ValidationError(format!(
                    "Unknown round in schedule: {name:?}"
                )));
            }
        }

        Ok(())
    }
}
