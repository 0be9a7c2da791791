//! Structured logging with tracing
//!
//! Every layer writes to stderr: stdout belongs to the MCP stdio transport.

use std::path::Path;

use nbx_domain::error::Result;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{AppConfig, LogLevel, TransportMode};
use crate::constants::{LOG_FILTER_ENV, LOOPBACK_HOSTS, NOISY_LOG_TARGETS, WILDCARD_HOSTS};
use crate::error_ext::ErrorContext;

/// Initialize logging with the provided configuration
///
/// `NBX_LOG` takes precedence over the configured level when set.
pub fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(config.log_level)));

    let result = if config.log_json {
        let layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true);
        Registry::default().with(filter).with(layer).try_init()
    } else {
        let layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_target(true);
        Registry::default().with(filter).with(layer).try_init()
    };

    result.config_context("Failed to initialize logging")?;

    info!("Logging initialized with level: {}", config.log_level);
    Ok(())
}

/// Build the filter directives for a level
///
/// HTTP client and framework crates stay at `warn` unless debugging.
pub fn filter_directives(level: LogLevel) -> String {
    let mut directives = vec![level.as_filter().to_string()];
    if level > LogLevel::Debug {
        directives.extend(
            NOISY_LOG_TARGETS
                .iter()
                .map(|target| format!("{target}=warn")),
        );
    }
    directives.join(",")
}

/// Log which configuration file was read
///
/// Call after [`init_logging`], otherwise the event is dropped.
pub fn log_config_source(config_path: Option<&Path>) {
    match config_path {
        Some(path) => info!("Configuration loaded from {}", path.display()),
        None => info!("No configuration file found, using environment and defaults"),
    }
}

/// Warnings worth surfacing before serving requests
pub fn startup_warnings(config: &AppConfig) -> Vec<String> {
    let mut warnings = Vec::new();
    if !config.verify_ssl {
        warnings.push(
            "SSL certificate verification is disabled. This is insecure and should only be used \
             for testing."
                .to_string(),
        );
    }
    if config.transport == TransportMode::Http && WILDCARD_HOSTS.contains(&config.host.as_str()) {
        warnings.push(format!(
            "HTTP transport is bound to {}, which exposes the server on all network interfaces.",
            config.host
        ));
    }
    warnings
}

/// Log the effective configuration and any startup warnings
pub fn log_startup(config: &AppConfig) {
    info!(config = %config.effective_summary(), "Effective configuration");

    for message in startup_warnings(config) {
        warn!("{message}");
    }

    if config.transport == TransportMode::Http
        && !WILDCARD_HOSTS.contains(&config.host.as_str())
        && !LOOPBACK_HOSTS.contains(&config.host.as_str())
    {
        info!(host = %config.host, "HTTP transport is bound to a non-loopback address");
    }
}
