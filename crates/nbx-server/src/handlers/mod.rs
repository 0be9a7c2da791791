//! MCP Tool Handlers
//!
//! Each handler validates its arguments, shapes one NetBox request (search
//! shapes one per object type) and formats the response.

pub mod get_changelogs;
pub mod get_object_by_id;
pub mod get_objects;
pub mod search_objects;
pub mod typed_write;
pub mod write_object;

pub use get_changelogs::GetChangelogsHandler;
pub use get_object_by_id::GetObjectByIdHandler;
pub use get_objects::GetObjectsHandler;
pub use search_objects::SearchObjectsHandler;
pub use typed_write::TypedWriteHandler;
pub use write_object::{WriteObjectHandler, WriteRequest};
