//! Logging setup
//!
//! The library only emits `tracing` events. Host applications that do not
//! install their own subscriber can call [`init_logging`].

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Filter directive for this crate at `level`, `warn` for everything else
pub fn filter_directive(level: &str) -> String {
    format!("lamco_viewport_probe={},warn", level.to_lowercase())
}

/// Install a global subscriber honoring `RUST_LOG`, else `config.level`
///
/// # Errors
///
/// Returns an error if the directive is invalid or a global subscriber is
/// already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(filter_directive(&config.level))
            .with_context(|| format!("Invalid log level: {}", config.level))?,
    };

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = match config.format.as_str() {
        "json" => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        "compact" => registry
            .with(tracing_subscriber::fmt::layer().compact())
            .try_init(),
        _ => registry
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init(),
    };
    installed.context("Failed to install tracing subscriber")?;

    log_build_info();
    Ok(())
}

/// Log crate version and build identification
pub fn log_build_info() {
    info!(
        "lamco-viewport-probe v{} (commit {}, built {})",
        env!("CARGO_PKG_VERSION"),
        option_env!("GIT_HASH").unwrap_or("unknown"),
        option_env!("BUILD_DATE").unwrap_or("unknown")
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive("DEBUG"), "lamco_viewport_probe=debug,warn");
        assert!(EnvFilter::try_new(filter_directive("info")).is_ok());
    }
}
