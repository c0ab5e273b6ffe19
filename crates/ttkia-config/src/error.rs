//! Configuration error types.

/// Result type alias for config operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("environment variable {name} is not set")]
    MissingVar { name: &'static str },

    /// An environment variable holds a value that cannot be used.
    #[error("invalid value '{value}' for {name}: {reason}")]
    InvalidVar {
        name: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    /// Create a missing-variable error.
    pub fn missing(name: &'static str) -> Self {
        Self::MissingVar { name }
    }

    /// Create an invalid-value error.
    pub fn invalid(name: &'static str, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidVar {
            name,
            value: value.into(),
            reason: reason.into(),
        }
    }
}
