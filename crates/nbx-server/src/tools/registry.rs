//! Tool Registry Module
//!
//! Manages tool definitions and schema generation for the MCP protocol.
//! This module centralizes all tool metadata to enable consistent tool listing.

use rmcp::ErrorData as McpError;
use rmcp::model::{Tool, ToolAnnotations};
use std::borrow::Cow;
use std::sync::Arc;

use crate::args::{
    CreateObjectArgs, DeleteObjectArgs, GetChangelogsArgs, GetObjectByIdArgs, GetObjectsArgs,
    SearchObjectsArgs, UpdateObjectArgs,
};
use crate::constants::{
    TOOL_CREATE_OBJECT, TOOL_DELETE_OBJECT, TOOL_GET_CHANGELOGS, TOOL_GET_OBJECT_BY_ID,
    TOOL_GET_OBJECTS, TOOL_SEARCH_OBJECTS, TOOL_UPDATE_OBJECT,
};
use crate::tools::typed::{TYPED_TOOLS, WriteAction};

/// Behaviour hints attached to a tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    /// Only reads from NetBox
    Read,
    /// Creates objects
    Create,
    /// Changes existing objects
    Update,
    /// Removes objects
    Delete,
}

impl ToolKind {
    fn annotations(self) -> ToolAnnotations {
        let mut annotations = ToolAnnotations::default();
        annotations.read_only_hint = Some(self == Self::Read);
        annotations.destructive_hint = Some(self == Self::Delete);
        annotations.idempotent_hint = Some(matches!(self, Self::Read | Self::Update));
        annotations
    }
}

impl From<WriteAction> for ToolKind {
    fn from(action: WriteAction) -> Self {
        match action {
            WriteAction::Create => Self::Create,
            WriteAction::Update => Self::Update,
            WriteAction::Delete => Self::Delete,
        }
    }
}

/// Tool definitions for MCP protocol
pub struct ToolDefinitions;

impl ToolDefinitions {
    /// Get the netbox_get_objects tool definition
    pub fn get_objects() -> Result<Tool, McpError> {
        Self::create_tool(
            TOOL_GET_OBJECTS,
            "List NetBox objects of one type with filters, field selection, ordering and \
             pagination. Returns NetBox's paginated response (count, next, previous, results). \
             Filters accept direct fields and single lookups (name__ic, id__in); filter across \
             relationships with the related object's id (site_id) instead of multi-hop paths.",
            schemars::schema_for!(GetObjectsArgs),
            ToolKind::Read,
        )
    }

    /// Get the netbox_get_object_by_id tool definition
    pub fn get_object_by_id() -> Result<Tool, McpError> {
        Self::create_tool(
            TOOL_GET_OBJECT_BY_ID,
            "Get one NetBox object by its numeric id, optionally restricted to some fields \
             or in brief form.",
            schemars::schema_for!(GetObjectByIdArgs),
            ToolKind::Read,
        )
    }

    /// Get the netbox_get_changelogs tool definition
    pub fn get_changelogs() -> Result<Tool, McpError> {
        Self::create_tool(
            TOOL_GET_CHANGELOGS,
            "Query NetBox's change log: who created, updated or deleted which object and when.",
            schemars::schema_for!(GetChangelogsArgs),
            ToolKind::Read,
        )
    }

    /// Get the netbox_search_objects tool definition
    pub fn search_objects() -> Result<Tool, McpError> {
        Self::create_tool(
            TOOL_SEARCH_OBJECTS,
            "Search several NetBox object types at once with a free-text query. Returns an \
             object keyed by object type; a type that fails to answer yields an empty list.",
            schemars::schema_for!(SearchObjectsArgs),
            ToolKind::Read,
        )
    }

    /// Get the netbox_create_object tool definition
    pub fn create_object() -> Result<Tool, McpError> {
        Self::create_tool(
            TOOL_CREATE_OBJECT,
            "Create a NetBox object of any type from a field map. Returns the created object.",
            schemars::schema_for!(CreateObjectArgs),
            ToolKind::Create,
        )
    }

    /// Get the netbox_update_object tool definition
    pub fn update_object() -> Result<Tool, McpError> {
        Self::create_tool(
            TOOL_UPDATE_OBJECT,
            "Partially update a NetBox object of any type. Only the given fields change.",
            schemars::schema_for!(UpdateObjectArgs),
            ToolKind::Update,
        )
    }

    /// Get the netbox_delete_object tool definition
    pub fn delete_object() -> Result<Tool, McpError> {
        Self::create_tool(
            TOOL_DELETE_OBJECT,
            "Delete a NetBox object of any type by id.",
            schemars::schema_for!(DeleteObjectArgs),
            ToolKind::Delete,
        )
    }

    /// Create a tool from schema
    fn create_tool(
        name: impl Into<Cow<'static, str>>,
        description: impl Into<Cow<'static, str>>,
        schema: schemars::Schema,
        kind: ToolKind,
    ) -> Result<Tool, McpError> {
        let name = name.into();
        let schema_value = serde_json::to_value(schema)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        let input_schema = schema_value
            .as_object()
            .ok_or_else(|| {
                McpError::internal_error(format!("Schema for {name} is not an object"), None)
            })?
            .clone();

        Ok(Tool {
            name,
            title: None,
            description: Some(description.into()),
            input_schema: Arc::new(input_schema),
            output_schema: None,
            annotations: Some(kind.annotations()),
            icons: None,
            meta: Default::default(),
        })
    }
}

/// Create the complete list of available tools
///
/// Returns all tool definitions for the MCP list_tools response: the generic
/// tools first, then the per-object write tools.
pub fn create_tool_list() -> Result<Vec<Tool>, McpError> {
    let mut tools = vec![
        ToolDefinitions::get_objects()?,
        ToolDefinitions::get_object_by_id()?,
        ToolDefinitions::get_changelogs()?,
        ToolDefinitions::search_objects()?,
        ToolDefinitions::create_object()?,
        ToolDefinitions::update_object()?,
        ToolDefinitions::delete_object()?,
    ];

    for typed in TYPED_TOOLS.iter() {
        tools.push(ToolDefinitions::create_tool(
            typed.name.clone(),
            typed.description.clone(),
            typed.schema(),
            typed.action.into(),
        )?);
    }

    Ok(tools)
}
