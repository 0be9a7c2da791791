//! Server-specific constants
//!
//! Contains constants specific to the MCP server implementation,
//! including JSON-RPC error codes and tool names.

// ============================================================================
// JSON-RPC ERROR CODES (Standard)
// ============================================================================

/// JSON-RPC Parse error code
pub const JSONRPC_PARSE_ERROR: i32 = -32700;

/// JSON-RPC Method not found error code
pub const JSONRPC_METHOD_NOT_FOUND: i32 = -32601;

/// JSON-RPC Invalid params error code
pub const JSONRPC_INVALID_PARAMS: i32 = -32602;

/// JSON-RPC Internal error code
pub const JSONRPC_INTERNAL_ERROR: i32 = -32603;

// ============================================================================
// MCP PROTOCOL
// ============================================================================

/// Prefix of JSON-RPC notifications, which never get a response body
pub const NOTIFICATION_PREFIX: &str = "notifications/";

/// Path of the JSON-RPC endpoint of the HTTP transport
pub const MCP_HTTP_PATH: &str = "/mcp";

/// Name reported in `serverInfo`
pub const SERVER_NAME: &str = "NetBox MCP Gateway";

// ============================================================================
// TOOL NAMES
// ============================================================================

/// List objects of one type
pub const TOOL_GET_OBJECTS: &str = "netbox_get_objects";

/// Fetch one object by id
pub const TOOL_GET_OBJECT_BY_ID: &str = "netbox_get_object_by_id";

/// Query the change log
pub const TOOL_GET_CHANGELOGS: &str = "netbox_get_changelogs";

/// Search several object types at once
pub const TOOL_SEARCH_OBJECTS: &str = "netbox_search_objects";

/// Create any object
pub const TOOL_CREATE_OBJECT: &str = "netbox_create_object";

/// Update any object
pub const TOOL_UPDATE_OBJECT: &str = "netbox_update_object";

/// Delete any object
pub const TOOL_DELETE_OBJECT: &str = "netbox_delete_object";
