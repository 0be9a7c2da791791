//! Tool argument types for the MCP server
//!
//! Generic tools address any object type by its dotted key; the typed write
//! tools in [`typed`] name their required fields explicitly.

pub mod typed;

use nbx_domain::Ordering;
use nbx_domain::constants::DEFAULT_RESULT_LIMIT;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};
use validator::Validate;

pub use typed::{CreatePayload, DeleteArgs, UpdateArgs};

/// Arguments for the netbox_get_objects tool
#[derive(Debug, Clone, Deserialize, JsonSchema, Validate)]
#[schemars(description = "Parameters for listing NetBox objects of one type")]
pub struct GetObjectsArgs {
    /// NetBox object type, e.g. "dcim.device" or "ipam.ipaddress"
    #[validate(length(min = 1, message = "object_type cannot be empty"))]
    pub object_type: String,

    /// Filters passed to the list endpoint
    #[schemars(
        description = "NetBox API filters. Direct fields ({'site_id': 1, 'status': 'active'}) and \
                       single lookups ({'name__ic': 'switch', 'id__in': [1, 2]}) are accepted; \
                       multi-hop traversal such as 'device__site_id' is not"
    )]
    #[serde(default)]
    pub filters: Map<String, Value>,

    /// Fields to return
    #[schemars(
        description = "Only return these fields, e.g. ['id', 'name']. Omit for complete objects"
    )]
    pub fields: Option<Vec<String>>,

    /// Minimal representation
    #[schemars(description = "Return NetBox's brief representation of each object")]
    #[serde(default)]
    pub brief: bool,

    /// Maximum number of results (default: 5)
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    #[serde(default = "default_limit")]
    pub limit: u32,

    /// Number of results to skip
    #[serde(default)]
    pub offset: u32,

    /// Sort order
    #[schemars(
        description = "Field to order by, '-' prefix for descending. A list orders by several fields"
    )]
    pub ordering: Option<Ordering>,
}

/// Arguments for the netbox_get_object_by_id tool
#[derive(Debug, Clone, Deserialize, JsonSchema, Validate)]
#[schemars(description = "Parameters for fetching one NetBox object")]
pub struct GetObjectByIdArgs {
    /// NetBox object type, e.g. "dcim.device"
    #[validate(length(min = 1, message = "object_type cannot be empty"))]
    pub object_type: String,

    /// Numeric id of the object
    #[validate(range(min = 1, message = "object_id must be a positive integer"))]
    pub object_id: u64,

    /// Fields to return
    pub fields: Option<Vec<String>>,

    /// Minimal representation
    #[serde(default)]
    pub brief: bool,
}

/// Arguments for the netbox_get_changelogs tool
#[derive(Debug, Clone, Default, Deserialize, JsonSchema, Validate)]
#[schemars(description = "Parameters for querying object change records")]
pub struct GetChangelogsArgs {
    /// Filters for the change log
    #[schemars(
        description = "Change log filters: user, user_id, changed_object_type_id, \
                       changed_object_id, object_repr, action (create, update, delete), \
                       time_before, time_after, q"
    )]
    #[serde(default)]
    pub filters: Map<String, Value>,
}

/// Arguments for the netbox_search_objects tool
#[derive(Debug, Clone, Deserialize, JsonSchema, Validate)]
#[schemars(description = "Parameters for a global search across object types")]
pub struct SearchObjectsArgs {
    /// Search term
    #[schemars(description = "Names, IP addresses, serial numbers, asset tags, hostnames...")]
    pub query: String,

    /// Object types to search
    #[schemars(
        description = "Object types to search. Defaults to devices, sites, IP addresses, \
                       interfaces, racks, VLANs, circuits and virtual machines"
    )]
    pub object_types: Option<Vec<String>>,

    /// Fields to return
    pub fields: Option<Vec<String>>,

    /// Maximum results per object type (default: 5)
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    #[serde(default = "default_limit")]
    pub limit: u32,
}

/// Arguments for the netbox_create_object tool
#[derive(Debug, Clone, Deserialize, JsonSchema, Validate)]
#[schemars(description = "Parameters for creating any NetBox object")]
pub struct CreateObjectArgs {
    /// NetBox object type, e.g. "dcim.site"
    #[validate(length(min = 1, message = "object_type cannot be empty"))]
    pub object_type: String,

    /// Object fields; required fields vary by object type
    pub data: Map<String, Value>,
}

/// Arguments for the netbox_update_object tool
#[derive(Debug, Clone, Deserialize, JsonSchema, Validate)]
#[schemars(description = "Parameters for updating any NetBox object")]
pub struct UpdateObjectArgs {
    /// NetBox object type, e.g. "ipam.vlan"
    #[validate(length(min = 1, message = "object_type cannot be empty"))]
    pub object_type: String,

    /// Numeric id of the object to update
    #[validate(range(min = 1, message = "object_id must be a positive integer"))]
    pub object_id: u64,

    /// Fields to change; omitted fields are left untouched
    pub data: Map<String, Value>,
}

/// Arguments for the netbox_delete_object tool
#[derive(Debug, Clone, Deserialize, JsonSchema, Validate)]
#[schemars(description = "Parameters for deleting any NetBox object")]
pub struct DeleteObjectArgs {
    /// NetBox object type, e.g. "dcim.site"
    #[validate(length(min = 1, message = "object_type cannot be empty"))]
    pub object_type: String,

    /// Numeric id of the object to delete
    #[validate(range(min = 1, message = "object_id must be a positive integer"))]
    pub object_id: u64,
}

fn default_limit() -> u32 {
    DEFAULT_RESULT_LIMIT
}
