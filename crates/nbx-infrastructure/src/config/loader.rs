//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables and
//! command line overrides on top of default values, using Figment.

use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use nbx_domain::error::{Error, Result};
use reqwest::Url;
use secrecy::ExposeSecret;
use serde::Serialize;

use crate::config::{AppConfig, LogLevel, TransportMode};
use crate::constants::{
    CONFIG_ENV_KEYS, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME, NETBOX_TOKEN_KEY,
};
use crate::error_ext::ErrorContext;

/// Values given explicitly on the command line
///
/// Unset fields leave lower-precedence sources untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CliOverrides {
    /// `--netbox-url`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub netbox_url: Option<String>,
    /// `--netbox-token`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub netbox_token: Option<String>,
    /// `--transport`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport: Option<TransportMode>,
    /// `--host`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// `--port`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// `--verify-ssl` / `--no-verify-ssl`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_ssl: Option<bool>,
    /// `--log-level`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<LogLevel>,
}

/// Configuration loader service
#[derive(Clone, Default)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Command line overrides
    overrides: CliOverrides,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Apply command line overrides
    pub fn with_overrides(mut self, overrides: CliOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (explicit path, or the first default location found)
    /// 3. Environment variables named after the fields (`NETBOX_URL`, `PORT`, ...)
    /// 4. Command line overrides
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path
            && !config_path.exists()
        {
            return Err(Error::config(format!(
                "Configuration file not found: {}",
                config_path.display()
            )));
        }
        if let Some(config_path) = self.config_source() {
            figment = figment.merge(Toml::file(config_path));
        }

        figment = figment.merge(Env::raw().only(CONFIG_ENV_KEYS));
        if let Some(token) = raw_env_token() {
            figment = figment.merge((NETBOX_TOKEN_KEY, token));
        }
        figment = figment.merge(Serialized::defaults(&self.overrides));

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// The TOML file [`load`](Self::load) reads, if any
    pub fn config_source(&self) -> Option<PathBuf> {
        match &self.config_path {
            Some(path) => Some(path.clone()),
            None => Self::find_default_config_path(),
        }
    }

    /// Get the configured file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

/// `NETBOX_TOKEN` exactly as set, matched case-insensitively
///
/// Read outside figment's `Env` provider so numeric-looking tokens keep
/// their leading zeros.
fn raw_env_token() -> Option<String> {
    env::vars_os().find_map(|(key, value)| {
        key.to_str()
            .is_some_and(|key| key.eq_ignore_ascii_case(NETBOX_TOKEN_KEY))
            .then(|| value.into_string().ok())
            .flatten()
    })
}

/// Validate application configuration
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_netbox_url(config)?;
    validate_netbox_token(config)?;
    validate_server_config(config)?;
    Ok(())
}

fn validate_netbox_url(config: &AppConfig) -> Result<()> {
    let Some(raw_url) = config.netbox_url.as_deref() else {
        return Err(Error::config(
            "NETBOX_URL is required (set --netbox-url, the NETBOX_URL environment variable \
             or netbox_url in the config file)",
        ));
    };

    let url = Url::parse(raw_url).config_context(format!("Invalid NETBOX_URL '{raw_url}'"))?;
    if url.scheme().is_empty() || url.host_str().is_none() {
        return Err(Error::config(
            "NETBOX_URL must include scheme and host (e.g., https://netbox.example.com/)",
        ));
    }
    Ok(())
}

fn validate_netbox_token(config: &AppConfig) -> Result<()> {
    match &config.netbox_token {
        Some(token) if !token.expose_secret().trim().is_empty() => Ok(()),
        _ => Err(Error::config(
            "NETBOX_TOKEN is required (set --netbox-token, the NETBOX_TOKEN environment \
             variable or netbox_token in the config file)",
        )),
    }
}

fn validate_server_config(config: &AppConfig) -> Result<()> {
    if config.port == 0 {
        return Err(Error::config(
            "Port must be between 1 and 65535, got 0".to_string(),
        ));
    }
    if config.netbox_timeout_secs == 0 {
        return Err(Error::config("NetBox timeout cannot be 0"));
    }
    if config.transport == TransportMode::Http {
        config.bind_address()?;
    }
    Ok(())
}
