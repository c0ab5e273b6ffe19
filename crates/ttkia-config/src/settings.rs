//! Client settings loaded from the environment.
//!
//! The SDK is configured through three variables:
//!
//! - `TTKIA_BASE_URL` — server base URL (required)
//! - `TTKIA_APP_TOKEN` — application bearer token (required)
//! - `TTKIA_LOG_LEVEL` — log verbosity, one of DEBUG/INFO/WARNING/ERROR
//!   (optional, defaults to INFO)
//!
//! Timeouts may be overridden with `TTKIA_TIMEOUT_SECS` and
//! `TTKIA_CONNECT_TIMEOUT_SECS`.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, Result};

/// Environment variable holding the server base URL.
pub const ENV_BASE_URL: &str = "TTKIA_BASE_URL";

/// Environment variable holding the application bearer token.
pub const ENV_APP_TOKEN: &str = "TTKIA_APP_TOKEN";

/// Environment variable holding the log level.
pub const ENV_LOG_LEVEL: &str = "TTKIA_LOG_LEVEL";

/// Environment variable overriding the request timeout (seconds).
pub const ENV_TIMEOUT_SECS: &str = "TTKIA_TIMEOUT_SECS";

/// Environment variable overriding the connect timeout (seconds).
pub const ENV_CONNECT_TIMEOUT_SECS: &str = "TTKIA_CONNECT_TIMEOUT_SECS";

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connect timeout.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

// ─────────────────────────────────────────────────────────────────────────────
// Log Level
// ─────────────────────────────────────────────────────────────────────────────

/// Log verbosity for SDK-emitted records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    /// Per-request detail, including response statuses.
    Debug,
    /// Lifecycle events (workspace created, file uploaded).
    #[default]
    Info,
    /// Recoverable problems (failed auth probe, unexpected shapes).
    Warning,
    /// Failures surfaced to the caller.
    Error,
}

impl LogLevel {
    /// The equivalent `tracing` level.
    pub fn tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warning => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }

    /// The level name as used in filter directives.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            _ => Err(ConfigError::invalid(
                ENV_LOG_LEVEL,
                s,
                "expected one of DEBUG, INFO, WARNING, ERROR",
            )),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings
// ─────────────────────────────────────────────────────────────────────────────

/// Settings passed to the client constructor.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Server base URL.
    pub base_url: String,

    /// Application bearer token.
    pub app_token: String,

    /// Log verbosity.
    pub log_level: LogLevel,

    /// Request timeout.
    pub timeout: Duration,

    /// Connect timeout.
    pub connect_timeout: Duration,
}

impl Settings {
    /// Create settings with the given URL and token and default everything else.
    pub fn new(base_url: impl Into<String>, app_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            app_token: app_token.into(),
            log_level: LogLevel::default(),
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    /// Load settings from the environment.
    pub fn from_env() -> Result<Self> {
        let base_url = require_var(ENV_BASE_URL)?;
        let app_token = require_var(ENV_APP_TOKEN)?;

        let log_level = match std::env::var(ENV_LOG_LEVEL) {
            Ok(value) => value.parse()?,
            Err(_) => LogLevel::default(),
        };

        let timeout = duration_var(ENV_TIMEOUT_SECS)?.unwrap_or(DEFAULT_TIMEOUT);
        let connect_timeout =
            duration_var(ENV_CONNECT_TIMEOUT_SECS)?.unwrap_or(DEFAULT_CONNECT_TIMEOUT);

        Ok(Self {
            base_url,
            app_token,
            log_level,
            timeout,
            connect_timeout,
        })
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the connect timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }
}

/// Load a `.env` file from the current directory or any parent, if present.
///
/// Returns the path that was loaded. Missing files are not an error.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

fn require_var(name: &'static str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        Ok(value) => Err(ConfigError::invalid(name, value, "must not be empty")),
        Err(_) => Err(ConfigError::missing(name)),
    }
}

fn duration_var(name: &'static str) -> Result<Option<Duration>> {
    match std::env::var(name) {
        Ok(value) => {
            let secs: u64 = value.trim().parse().map_err(|_| {
                ConfigError::invalid(name, value.as_str(), "expected a whole number of seconds")
            })?;
            Ok(Some(Duration::from_secs(secs)))
        }
        Err(_) => Ok(None),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
