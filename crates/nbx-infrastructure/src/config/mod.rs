//! Configuration
//!
//! Sources are merged by [`ConfigLoader`] in increasing precedence:
//! defaults, TOML file, environment, command line.

pub mod loader;
pub mod types;

pub use loader::{CliOverrides, ConfigLoader};
pub use types::{AppConfig, LogLevel, TransportMode, parse_bind_address};
