//! MCP tool surface
//!
//! Tool definitions and schemas ([`registry`]), dispatch ([`router`]) and the
//! table of per-object write tools ([`typed`]).

pub mod registry;
pub mod router;
pub mod typed;

pub use registry::{ToolDefinitions, ToolKind, create_tool_list};
pub use router::{ToolHandlers, route_tool_call};
pub use typed::{TYPED_TOOLS, TypedTool, WriteAction, find_typed_tool};
