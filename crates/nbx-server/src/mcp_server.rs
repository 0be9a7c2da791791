//! MCP Server Implementation
//!
//! Core MCP protocol server exposing NetBox as tools. The NetBox client is
//! injected through [`crate::McpServerBuilder`].

use std::sync::Arc;

use nbx_domain::ports::SharedNetBoxApi;
use rmcp::ErrorData as McpError;
use rmcp::ServerHandler;
use rmcp::model::{
    CallToolRequestParams, CallToolResult, Implementation, ListToolsResult,
    PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo, Tool,
};
use tracing::debug;

use crate::constants::SERVER_NAME;
use crate::handlers::{
    GetChangelogsHandler, GetObjectByIdHandler, GetObjectsHandler, SearchObjectsHandler,
    TypedWriteHandler, WriteObjectHandler,
};
use crate::tools::{ToolHandlers, create_tool_list, route_tool_call};

const INSTRUCTIONS: &str = "NetBox MCP Gateway - read and write access to a NetBox instance\n\n\
    Object types use NetBox's dotted app.model keys, e.g. dcim.device, ipam.ipaddress, \
    virtualization.virtualmachine.\n\n\
    Read tools:\n\
    - netbox_get_objects: List objects of one type with filters, fields, ordering and paging\n\
    - netbox_get_object_by_id: Fetch one object\n\
    - netbox_get_changelogs: Query the change log\n\
    - netbox_search_objects: Free-text search across several object types\n\n\
    Write tools:\n\
    - netbox_create_object / netbox_update_object / netbox_delete_object for any type\n\
    - netbox_create_<object>, netbox_update_<object>, netbox_delete_<object> with named \
    parameters for common objects (site, device, vlan, prefix, ip_address...)\n\n\
    Prefer `fields` and small limits to keep responses short. Filters do not traverse \
    relationships: use the related object's id (site_id=3), not device__site_id.\n";

/// Core MCP server implementation
///
/// Holds one handler per tool family, all sharing the same NetBox client.
#[derive(Clone)]
pub struct McpServer {
    netbox: SharedNetBoxApi,
    handlers: ToolHandlers,
}

impl McpServer {
    /// Create a new MCP server on top of a NetBox client
    pub fn new(netbox: SharedNetBoxApi) -> Self {
        let handlers = ToolHandlers {
            get_objects: Arc::new(GetObjectsHandler::new(Arc::clone(&netbox))),
            get_object_by_id: Arc::new(GetObjectByIdHandler::new(Arc::clone(&netbox))),
            get_changelogs: Arc::new(GetChangelogsHandler::new(Arc::clone(&netbox))),
            search_objects: Arc::new(SearchObjectsHandler::new(Arc::clone(&netbox))),
            write_object: Arc::new(WriteObjectHandler::new(Arc::clone(&netbox))),
            typed_write: Arc::new(TypedWriteHandler::new(Arc::clone(&netbox))),
        };

        Self { netbox, handlers }
    }

    /// Access to the NetBox client
    pub fn netbox(&self) -> SharedNetBoxApi {
        Arc::clone(&self.netbox)
    }

    /// Every tool this server exposes
    pub fn tools(&self) -> Result<Vec<Tool>, McpError> {
        create_tool_list()
    }

    /// Dispatch a tool call (shared by every transport)
    pub async fn call(&self, request: CallToolRequestParams) -> Result<CallToolResult, McpError> {
        debug!(tool = %request.name, "Tool call");
        route_tool_call(request, &self.handlers).await
    }
}

impl ServerHandler for McpServer {
    /// Get server information and capabilities
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }

    /// List available tools
    async fn list_tools(
        &self,
        _pagination: Option<PaginatedRequestParam>,
        _context: rmcp::service::RequestContext<rmcp::RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.tools()?,
            meta: Default::default(),
            next_cursor: None,
        })
    }

    /// Call a tool
    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: rmcp::service::RequestContext<rmcp::RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.call(request).await
    }
}
