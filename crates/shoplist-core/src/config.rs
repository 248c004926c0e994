//! Session configuration
//!
//! The `config` section of the seed document. Every field is optional;
//! missing values fall back to the defaults below.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{OwnerFilter, SessionState, UserId};

pub const DEFAULT_CURRENT_USER: &str = "john@example.com";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unsupported log level `{0}`; expected trace|debug|info|warn|error")]
    UnknownLogLevel(String),
}

/// Console log level. Read case-insensitively; `warning` means `warn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl TryFrom<String> for LogLevel {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, ConfigError> {
        Self::parse(&value)
    }
}

impl LogLevel {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            other => Err(ConfigError::UnknownLogLevel(other.to_string())),
        }
    }

    pub fn as_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Hardcoded signed-in user
    pub current_user: UserId,
    pub owner_filter: OwnerFilter,
    pub show_archived: bool,
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            current_user: DEFAULT_CURRENT_USER.to_string(),
            owner_filter: OwnerFilter::All,
            show_archived: false,
            log_level: LogLevel::default(),
        }
    }
}

impl AppConfig {
    /// Initial session state for this configuration
    pub fn session(&self) -> SessionState {
        SessionState {
            owner_filter: self.owner_filter,
            show_archived: self.show_archived,
            ..SessionState::new(self.current_user.clone())
        }
    }
}
