//! # NetBox MCP Infrastructure
//!
//! Cross-cutting technical concerns for the gateway:
//!
//! - [`config`]: figment based configuration (defaults, TOML, environment, CLI)
//! - [`logging`]: tracing subscriber setup (always on stderr)
//! - [`netbox`]: reqwest implementation of the [`nbx_domain::NetBoxApi`] port
//! - [`error_ext`]: context helpers mapping foreign errors into domain errors

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;
pub mod netbox;

pub use config::{AppConfig, ConfigLoader, LogLevel, TransportMode};
pub use netbox::{NetBoxClientConfig, NetBoxRestClient};
