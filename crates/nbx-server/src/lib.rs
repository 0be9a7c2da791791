//! # NetBox MCP Gateway Server
//!
//! Exposes a NetBox instance to MCP clients as a set of tools and forwards
//! each tool call to NetBox's REST API.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nbx_server::run;
//! use nbx_infrastructure::config::CliOverrides;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     // Configuration from ./nbx.toml and the environment
//!     run(None, CliOverrides::default()).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Core Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`McpServer`] | Main server struct, implements `rmcp::ServerHandler` |
//! | [`McpServerBuilder`] | Injects the NetBox client |
//!
//! ## Tools
//!
//! - Generic reads: `netbox_get_objects`, `netbox_get_object_by_id`,
//!   `netbox_get_changelogs`, `netbox_search_objects`
//! - Generic writes: `netbox_create_object`, `netbox_update_object`,
//!   `netbox_delete_object`
//! - Per-object writes such as `netbox_create_site` or `netbox_delete_cable`,
//!   see [`tools::typed`]

pub mod args;
pub mod builder;
pub mod constants;
pub mod formatter;
pub mod handlers;
pub mod init;
pub mod mcp_server;
pub mod tools;
pub mod transport;

pub use builder::McpServerBuilder;
pub use init::run;
pub use mcp_server::McpServer;
