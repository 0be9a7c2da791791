//! Per-Object Write Tool Handler
//!
//! Executes the netbox_create_<object>, netbox_update_<object> and
//! netbox_delete_<object> tools described by the typed tool table.

use nbx_domain::ports::SharedNetBoxApi;
use rmcp::ErrorData as McpError;
use rmcp::model::{CallToolResult, JsonObject};

use crate::tools::typed::TypedTool;

/// Handler shared by every per-object write tool
pub struct TypedWriteHandler {
    netbox: SharedNetBoxApi,
}

impl TypedWriteHandler {
    /// Create a new per-object write handler
    pub fn new(netbox: SharedNetBoxApi) -> Self {
        Self { netbox }
    }

    /// Parse the arguments for `tool` and send its request
    pub async fn handle(
        &self,
        tool: &TypedTool,
        arguments: JsonObject,
    ) -> Result<CallToolResult, McpError> {
        let request = tool.parse_request(arguments)?;
        request.execute(&self.netbox, tool.endpoint).await
    }
}
