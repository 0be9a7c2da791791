//! MCP Server Builder
//!
//! Builder pattern for constructing MCP servers with dependency injection.
//! Ensures the NetBox client is provided before server construction.

use crate::McpServer;
use nbx_domain::ports::SharedNetBoxApi;

/// Builder for MCP Server with dependency injection
///
/// Production code injects the REST client; tests inject an in-memory
/// implementation of the same port.
#[derive(Default)]
pub struct McpServerBuilder {
    netbox: Option<SharedNetBoxApi>,
}

impl McpServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the NetBox client
    ///
    /// # Arguments
    /// * `netbox` - Implementation of the NetBox API port
    pub fn with_netbox_api(mut self, netbox: SharedNetBoxApi) -> Self {
        self.netbox = Some(netbox);
        self
    }

    /// Build the MCP server
    ///
    /// # Errors
    /// Returns `BuilderError::MissingDependency` if the NetBox client is not provided
    pub fn build(self) -> Result<McpServer, BuilderError> {
        let netbox = self
            .netbox
            .ok_or(BuilderError::MissingDependency("NetBox API"))?;

        Ok(McpServer::new(netbox))
    }
}

/// Errors that can occur during server building
#[derive(Debug, thiserror::Error)]
pub enum BuilderError {
    /// A required dependency was not provided
    #[error("Missing required dependency: {0}")]
    MissingDependency(&'static str),
}
