//! MCP Transport Layer
//!
//! ## Available Transports
//!
//! | Transport | Description | Use Case |
//! |-----------|-------------|----------|
//! | [`stdio`] | Standard I/O streams | Desktop agents, IDE integrations |
//! | [`http`] | JSON-RPC over HTTP POST | Web clients, shared deployments |
//!
//! ## Usage
//!
//! ```rust,ignore
//! use nbx_server::transport::{HttpTransport, HttpTransportConfig, StdioServerExt};
//!
//! // Stdio transport
//! server.serve_stdio().await?;
//!
//! // HTTP transport
//! let http = HttpTransport::new(HttpTransportConfig::localhost(8000), Arc::new(server));
//! http.start().await?;
//! ```

pub mod http;
pub mod stdio;
pub mod types;

pub use http::{HttpTransport, HttpTransportConfig};
pub use stdio::StdioServerExt;
pub use types::{McpError, McpRequest, McpResponse};

pub use nbx_infrastructure::config::TransportMode;
