//! Stdio Transport for MCP
//!
//! Implements MCP protocol over standard input/output streams. Nothing else
//! may write to stdout while this transport runs; logs go to stderr.

use crate::McpServer;
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use tracing::info;

/// Extension trait for McpServer to add stdio serving capability
#[allow(async_fn_in_trait)]
pub trait StdioServerExt {
    /// Serve the MCP server over stdio until the client disconnects
    async fn serve_stdio(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

impl StdioServerExt for McpServer {
    async fn serve_stdio(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        info!("Starting MCP server on stdio transport");

        let service = self
            .serve(stdio())
            .await
            .map_err(|e| format!("Failed to start MCP service: {e}"))?;

        service
            .waiting()
            .await
            .map_err(|e| format!("MCP service error: {e}"))?;

        info!("MCP server shutdown complete");
        Ok(())
    }
}
