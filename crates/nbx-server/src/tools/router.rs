//! Tool Router Module
//!
//! Routes incoming tool call requests to the appropriate handlers.
//! Generic tools are matched by name first, then the per-object write tools.

use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolRequestParams, CallToolResult, JsonObject};
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::constants::{
    TOOL_CREATE_OBJECT, TOOL_DELETE_OBJECT, TOOL_GET_CHANGELOGS, TOOL_GET_OBJECT_BY_ID,
    TOOL_GET_OBJECTS, TOOL_SEARCH_OBJECTS, TOOL_UPDATE_OBJECT,
};
use crate::handlers::{
    GetChangelogsHandler, GetObjectByIdHandler, GetObjectsHandler, SearchObjectsHandler,
    TypedWriteHandler, WriteObjectHandler,
};
use crate::tools::typed::find_typed_tool;

/// Handler references for tool routing
#[derive(Clone)]
pub struct ToolHandlers {
    /// Handler for object listing
    pub get_objects: Arc<GetObjectsHandler>,
    /// Handler for single object lookups
    pub get_object_by_id: Arc<GetObjectByIdHandler>,
    /// Handler for change log queries
    pub get_changelogs: Arc<GetChangelogsHandler>,
    /// Handler for global search
    pub search_objects: Arc<SearchObjectsHandler>,
    /// Handler for the generic write tools
    pub write_object: Arc<WriteObjectHandler>,
    /// Handler for the per-object write tools
    pub typed_write: Arc<TypedWriteHandler>,
}

/// Route a tool call request to the appropriate handler
///
/// Parses the request arguments and delegates to the matching handler.
pub async fn route_tool_call(
    request: CallToolRequestParams,
    handlers: &ToolHandlers,
) -> Result<CallToolResult, McpError> {
    let arguments = request.arguments.unwrap_or_default();
    match request.name.as_ref() {
        TOOL_GET_OBJECTS => {
            let args = parse_arguments(arguments)?;
            handlers.get_objects.handle(Parameters(args)).await
        }
        TOOL_GET_OBJECT_BY_ID => {
            let args = parse_arguments(arguments)?;
            handlers.get_object_by_id.handle(Parameters(args)).await
        }
        TOOL_GET_CHANGELOGS => {
            let args = parse_arguments(arguments)?;
            handlers.get_changelogs.handle(Parameters(args)).await
        }
        TOOL_SEARCH_OBJECTS => {
            let args = parse_arguments(arguments)?;
            handlers.search_objects.handle(Parameters(args)).await
        }
        TOOL_CREATE_OBJECT => {
            let args = parse_arguments(arguments)?;
            handlers.write_object.create(Parameters(args)).await
        }
        TOOL_UPDATE_OBJECT => {
            let args = parse_arguments(arguments)?;
            handlers.write_object.update(Parameters(args)).await
        }
        TOOL_DELETE_OBJECT => {
            let args = parse_arguments(arguments)?;
            handlers.write_object.delete(Parameters(args)).await
        }
        name => match find_typed_tool(name) {
            Some(tool) => handlers.typed_write.handle(tool, arguments).await,
            None => Err(McpError::invalid_params(
                format!("Unknown tool: {name}"),
                None,
            )),
        },
    }
}

/// Parse request arguments into the expected type
pub(crate) fn parse_arguments<T: DeserializeOwned>(arguments: JsonObject) -> Result<T, McpError> {
    serde_json::from_value(serde_json::Value::Object(arguments))
        .map_err(|e| McpError::invalid_params(format!("Invalid arguments: {e}"), None))
}
