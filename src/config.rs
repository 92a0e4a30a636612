// In: src/config.rs

//! Runtime configuration for the library's ambient services.
//!
//! Sentinel resolution itself has no knobs: it is a pure function of the
//! descriptor, and the contract-violation strategy is fixed at build time by
//! the `device` cargo feature. What remains configurable is how the host
//! process logs.

use serde::{Deserialize, Serialize};

use crate::error::SentinelResult;

//==================================================================================
// I. Logging
//==================================================================================

/// Maximum log level emitted once logging is initialized.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Settings for [`crate::observability::init_logging`].
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    #[serde(default)]
    pub level: LogLevel,

    /// Append log lines to this file instead of stderr.
    #[serde(default)]
    pub log_file: Option<String>,

    /// Print only `[LEVEL] message`, without timestamp or module path.
    #[serde(default)]
    pub compact: bool,
}

//==================================================================================
// II. The Unified CoreConfig
//==================================================================================

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct CoreConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CoreConfig {
    /// Parses a configuration document. Missing sections take their defaults.
    pub fn from_json_str(json: &str) -> SentinelResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
