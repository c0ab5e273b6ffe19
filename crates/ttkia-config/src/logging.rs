//! Logging bootstrap for SDK consumers.
//!
//! The SDK emits records through `tracing`; how they are rendered is up to
//! the host application. This helper installs a plain console subscriber
//! filtered to the configured [`LogLevel`] for applications that have no
//! subscriber of their own.

use tracing_subscriber::prelude::*;

use crate::LogLevel;

/// Initialize a console `tracing` subscriber at the given level.
///
/// SDK crates are filtered to `level`; everything else is capped at `warn`.
/// Returns `false` if a global subscriber was already installed, in which
/// case this call is a no-op.
pub fn init_logging(level: LogLevel) -> bool {
    let directives = format!(
        "ttkia_client={level},ttkia_config={level},warn",
        level = level.as_str()
    );

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_filter(tracing_subscriber::EnvFilter::new(directives)),
        )
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        // First install may succeed or lose the race against another test;
        // the second call must report the existing subscriber either way.
        init_logging(LogLevel::Debug);
        assert!(!init_logging(LogLevel::Info));
    }
}
