//! Configuration types

use std::fmt;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;
use std::time::Duration;

use nbx_domain::error::{Error, Result as DomainResult};
use secrecy::SecretString;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::{
    DEFAULT_HTTP_HOST, DEFAULT_HTTP_PORT, DEFAULT_NETBOX_TIMEOUT_SECS, LOCALHOST, REDACTED,
};

/// MCP transport the server speaks
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    /// MCP over stdin/stdout (desktop agents)
    #[default]
    Stdio,
    /// MCP JSON-RPC over HTTP (web clients)
    Http,
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdio => f.write_str("stdio"),
            Self::Http => f.write_str("http"),
        }
    }
}

impl FromStr for TransportMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "stdio" => Ok(Self::Stdio),
            "http" => Ok(Self::Http),
            other => Err(format!("Invalid transport '{other}'. Use stdio or http")),
        }
    }
}

/// Logging verbosity
///
/// Accepts the conventional names in any case; `WARN` is an alias of
/// `WARNING`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default)]
#[serde(try_from = "String", into = "String")]
pub enum LogLevel {
    /// Everything, including HTTP client internals
    Debug,
    /// Lifecycle and request summaries
    #[default]
    Info,
    /// Recoverable problems
    Warning,
    /// Failures
    Error,
    /// Failures that stop the server
    Critical,
}

impl LogLevel {
    /// Canonical upper-case name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }

    /// The tracing filter directive for this level
    pub fn as_filter(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warn",
            Self::Error | Self::Critical => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(Self::Debug),
            "INFO" => Ok(Self::Info),
            "WARNING" | "WARN" => Ok(Self::Warning),
            "ERROR" => Ok(Self::Error),
            "CRITICAL" => Ok(Self::Critical),
            _ => Err(format!(
                "Invalid log level: {value}. Use DEBUG, INFO, WARNING, ERROR or CRITICAL"
            )),
        }
    }
}

impl TryFrom<String> for LogLevel {
    type Error = String;

    fn try_from(value: String) -> Result<Self, String> {
        value.parse()
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        level.as_str().to_string()
    }
}

/// Application configuration
///
/// ```toml
/// netbox_url = "https://netbox.example.com/"
/// netbox_token = "0123456789abcdef"
/// transport = "http"
/// host = "127.0.0.1"
/// port = 8000
/// verify_ssl = true
/// log_level = "INFO"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the NetBox instance
    pub netbox_url: Option<String>,

    /// API token; never serialized
    #[serde(skip_serializing, deserialize_with = "deserialize_token")]
    pub netbox_token: Option<SecretString>,

    /// MCP transport
    pub transport: TransportMode,

    /// Bind address for the HTTP transport
    pub host: String,

    /// Bind port for the HTTP transport
    pub port: u16,

    /// Verify NetBox's TLS certificate
    #[serde(deserialize_with = "deserialize_flag")]
    pub verify_ssl: bool,

    /// Logging verbosity
    pub log_level: LogLevel,

    /// Emit logs as JSON lines
    #[serde(deserialize_with = "deserialize_flag")]
    pub log_json: bool,

    /// Timeout for each NetBox request, in seconds
    pub netbox_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            netbox_url: None,
            netbox_token: None,
            transport: TransportMode::default(),
            host: DEFAULT_HTTP_HOST.to_string(),
            port: DEFAULT_HTTP_PORT,
            verify_ssl: true,
            log_level: LogLevel::default(),
            log_json: false,
            netbox_timeout_secs: DEFAULT_NETBOX_TIMEOUT_SECS,
        }
    }
}

/// Token as written in a file or the environment
///
/// Unquoted numbers in TOML arrive as integers.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawToken {
    Text(String),
    Unsigned(u64),
    Signed(i64),
}

fn deserialize_token<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
where
    D: Deserializer<'de>,
{
    let token = Option::<RawToken>::deserialize(deserializer)?.map(|raw| match raw {
        RawToken::Text(text) => text,
        RawToken::Unsigned(number) => number.to_string(),
        RawToken::Signed(number) => number.to_string(),
    });
    Ok(token.map(SecretString::from))
}

/// Boolean flag as written in a file or the environment
#[derive(Deserialize)]
#[serde(untagged)]
enum RawFlag {
    Bool(bool),
    Integer(i64),
    Text(String),
}

/// Parse the usual spellings of a boolean, in any case
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" | "on" | "1" => Some(true),
        "false" | "f" | "no" | "n" | "off" | "0" => Some(false),
        _ => None,
    }
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match RawFlag::deserialize(deserializer)? {
        RawFlag::Bool(flag) => Ok(flag),
        RawFlag::Integer(0) => Ok(false),
        RawFlag::Integer(1) => Ok(true),
        RawFlag::Integer(other) => Err(D::Error::custom(format!(
            "invalid boolean value: {other}"
        ))),
        RawFlag::Text(text) => parse_flag(&text)
            .ok_or_else(|| D::Error::custom(format!("invalid boolean value: '{text}'"))),
    }
}

impl AppConfig {
    /// NetBox request timeout
    pub fn netbox_timeout(&self) -> Duration {
        Duration::from_secs(self.netbox_timeout_secs)
    }

    /// IP address the HTTP transport binds to
    pub fn bind_address(&self) -> DomainResult<IpAddr> {
        parse_bind_address(&self.host)
    }

    /// Non-secret view of the effective configuration, suitable for logging
    pub fn effective_summary(&self) -> serde_json::Value {
        let http = self.transport == TransportMode::Http;
        serde_json::json!({
            "netbox_url": self.netbox_url.as_deref().unwrap_or_default(),
            "netbox_token": REDACTED,
            "transport": self.transport.to_string(),
            "host": if http { self.host.clone() } else { "N/A".to_string() },
            "port": if http { serde_json::json!(self.port) } else { serde_json::json!("N/A") },
            "verify_ssl": self.verify_ssl,
            "log_level": self.log_level.as_str(),
            "netbox_timeout_secs": self.netbox_timeout_secs,
        })
    }
}

/// Resolve a bind host to an IP address
///
/// Accepts `localhost` and bracketed IPv6 literals such as `[::]`; other
/// host names are rejected.
pub fn parse_bind_address(host: &str) -> DomainResult<IpAddr> {
    let host = host.trim();
    if host.eq_ignore_ascii_case(LOCALHOST) {
        return Ok(IpAddr::V4(Ipv4Addr::LOCALHOST));
    }
    let literal = host
        .strip_prefix('[')
        .and_then(|inner| inner.strip_suffix(']'))
        .unwrap_or(host);
    literal.parse().map_err(|_| {
        Error::config(format!(
            "Invalid host '{host}': use an IP address (e.g. 127.0.0.1, 0.0.0.0, ::) or localhost"
        ))
    })
}
