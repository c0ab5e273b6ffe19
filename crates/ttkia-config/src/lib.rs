//! Environment configuration for the TTKIA client SDK.
//!
//! Provides:
//! - [`Settings`] loaded from `TTKIA_BASE_URL`, `TTKIA_APP_TOKEN`, and
//!   `TTKIA_LOG_LEVEL` (with optional timeout overrides)
//! - [`LogLevel`] parsing and conversion to `tracing` levels
//! - [`load_dotenv`] for `.env` support
//! - [`init_logging`] console subscriber bootstrap
//!
//! # Example
//!
//! ```no_run
//! use ttkia_config::{init_logging, load_dotenv, Settings};
//!
//! # fn example() -> ttkia_config::Result<()> {
//! load_dotenv();
//! let settings = Settings::from_env()?;
//! init_logging(settings.log_level);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod logging;
pub mod settings;

pub use error::{ConfigError, Result};
pub use logging::init_logging;
pub use settings::{
    load_dotenv, LogLevel, Settings, ENV_APP_TOKEN, ENV_BASE_URL, ENV_CONNECT_TIMEOUT_SECS,
    ENV_LOG_LEVEL, ENV_TIMEOUT_SECS,
};
