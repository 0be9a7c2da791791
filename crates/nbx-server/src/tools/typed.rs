//! Per-object write tools
//!
//! A table of the objects that get dedicated create, update and delete tools.
//! Each entry carries its JSON schema and a parser producing the
//! [`WriteRequest`] sent to the object's endpoint.

use std::sync::LazyLock;

use rmcp::ErrorData as McpError;
use rmcp::model::JsonObject;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::args::typed::*;
use crate::args::{CreatePayload, DeleteArgs, UpdateArgs};
use crate::formatter::ResponseFormatter;
use crate::handlers::WriteRequest;
use crate::tools::router::parse_arguments;

/// Kind of write a typed tool performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteAction {
    /// `netbox_create_<object>`
    Create,
    /// `netbox_update_<object>`
    Update,
    /// `netbox_delete_<object>`
    Delete,
}

/// A per-object write tool
pub struct TypedTool {
    /// Tool name, e.g. `netbox_create_site`
    pub name: String,
    /// Tool description shown to clients
    pub description: String,
    /// NetBox endpoint, e.g. `dcim/sites`
    pub endpoint: &'static str,
    /// Kind of write
    pub action: WriteAction,
    schema: fn() -> schemars::Schema,
    parse: fn(JsonObject) -> Result<WriteRequest, McpError>,
}

impl TypedTool {
    /// JSON schema of the tool arguments
    pub fn schema(&self) -> schemars::Schema {
        (self.schema)()
    }

    /// Parse and validate call arguments into a write request
    pub fn parse_request(&self, arguments: JsonObject) -> Result<WriteRequest, McpError> {
        (self.parse)(arguments)
    }
}

/// An object with dedicated write tools
struct ObjectTools {
    object: &'static str,
    label: &'static str,
    endpoint: &'static str,
    extra_fields: &'static str,
}

impl ObjectTools {
    const fn new(
        object: &'static str,
        label: &'static str,
        endpoint: &'static str,
        extra_fields: &'static str,
    ) -> Self {
        Self {
            object,
            label,
            endpoint,
            extra_fields,
        }
    }

    fn create<A>(&self) -> TypedTool
    where
        A: CreatePayload + DeserializeOwned + JsonSchema + Validate,
    {
        TypedTool {
            name: format!("netbox_create_{}", self.object),
            description: format!(
                "Create a new {} in NetBox. Optional fields ({}) go in `data`; \
                 keys in `data` override the named parameters. Returns the created object.",
                self.label, self.extra_fields
            ),
            endpoint: self.endpoint,
            action: WriteAction::Create,
            schema: schema_of::<A>,
            parse: parse_create::<A>,
        }
    }

    fn update<A>(&self) -> TypedTool
    where
        A: UpdateArgs + DeserializeOwned + JsonSchema + Validate,
    {
        TypedTool {
            name: format!("netbox_update_{}", self.object),
            description: format!(
                "Update an existing {} in NetBox. Only the fields in `data` are changed \
                 ({}). Returns the updated object.",
                self.label, self.extra_fields
            ),
            endpoint: self.endpoint,
            action: WriteAction::Update,
            schema: schema_of::<A>,
            parse: parse_update::<A>,
        }
    }

    fn delete<A>(&self) -> TypedTool
    where
        A: DeleteArgs + DeserializeOwned + JsonSchema + Validate,
    {
        TypedTool {
            name: format!("netbox_delete_{}", self.object),
            description: format!(
                "Delete a {} from NetBox. Returns whether NetBox confirmed the deletion.",
                self.label
            ),
            endpoint: self.endpoint,
            action: WriteAction::Delete,
            schema: schema_of::<A>,
            parse: parse_delete::<A>,
        }
    }
}

fn schema_of<A: JsonSchema>() -> schemars::Schema {
    schemars::schema_for!(A)
}

fn parse_validated<A: DeserializeOwned + Validate>(arguments: JsonObject) -> Result<A, McpError> {
    let args: A = parse_arguments(arguments)?;
    args.validate()
        .map_err(|e| ResponseFormatter::invalid_arguments(&e))?;
    Ok(args)
}

fn parse_create<A>(arguments: JsonObject) -> Result<WriteRequest, McpError>
where
    A: CreatePayload + DeserializeOwned + Validate,
{
    let args: A = parse_validated(arguments)?;
    Ok(WriteRequest::Create {
        payload: args.into_payload(),
    })
}

fn parse_update<A>(arguments: JsonObject) -> Result<WriteRequest, McpError>
where
    A: UpdateArgs + DeserializeOwned + Validate,
{
    let (object_id, data) = parse_validated::<A>(arguments)?.into_parts();
    Ok(WriteRequest::Update { object_id, data })
}

fn parse_delete<A>(arguments: JsonObject) -> Result<WriteRequest, McpError>
where
    A: DeleteArgs + DeserializeOwned + Validate,
{
    let args: A = parse_validated(arguments)?;
    Ok(WriteRequest::Delete {
        object_id: args.object_id(),
    })
}

const SITE: ObjectTools = ObjectTools::new(
    "site",
    "site",
    "dcim/sites",
    "region, group, tenant, facility, time_zone, description",
);
const TENANT: ObjectTools = ObjectTools::new(
    "tenant",
    "tenant",
    "tenancy/tenants",
    "group, description, comments",
);
const TENANT_GROUP: ObjectTools = ObjectTools::new(
    "tenant_group",
    "tenant group",
    "tenancy/tenant-groups",
    "parent, description",
);
const TAG: ObjectTools = ObjectTools::new("tag", "tag", "extras/tags", "description, object_types");
const VLAN: ObjectTools = ObjectTools::new(
    "vlan",
    "VLAN",
    "ipam/vlans",
    "site, group, tenant, role, description",
);
const VLAN_GROUP: ObjectTools = ObjectTools::new(
    "vlan_group",
    "VLAN group",
    "ipam/vlan-groups",
    "scope_type, scope_id, description",
);
const REGION: ObjectTools =
    ObjectTools::new("region", "region", "dcim/regions", "parent, description");
const LOCATION: ObjectTools = ObjectTools::new(
    "location",
    "location",
    "dcim/locations",
    "parent, status, tenant, description",
);
const VRF: ObjectTools = ObjectTools::new(
    "vrf",
    "VRF",
    "ipam/vrfs",
    "rd, tenant, enforce_unique, description",
);
const PREFIX: ObjectTools = ObjectTools::new(
    "prefix",
    "prefix",
    "ipam/prefixes",
    "site, vrf, tenant, vlan, status, role, is_pool, description",
);
const IP_ADDRESS: ObjectTools = ObjectTools::new(
    "ip_address",
    "IP address",
    "ipam/ip-addresses",
    "vrf, tenant, status, role, assigned_object_type, assigned_object_id, dns_name",
);
const IP_RANGE: ObjectTools = ObjectTools::new(
    "ip_range",
    "IP range",
    "ipam/ip-ranges",
    "vrf, tenant, status, role, description",
);
const DEVICE: ObjectTools = ObjectTools::new(
    "device",
    "device",
    "dcim/devices",
    "role, rack, position, face, platform, serial, status, tenant",
);
const INTERFACE: ObjectTools = ObjectTools::new(
    "interface",
    "interface",
    "dcim/interfaces",
    "enabled, mtu, mac_address, mode, untagged_vlan, description",
);
const DEVICE_TYPE: ObjectTools = ObjectTools::new(
    "device_type",
    "device type",
    "dcim/device-types",
    "part_number, u_height, is_full_depth, airflow, description",
);
const MANUFACTURER: ObjectTools = ObjectTools::new(
    "manufacturer",
    "manufacturer",
    "dcim/manufacturers",
    "description",
);
const RACK: ObjectTools = ObjectTools::new(
    "rack",
    "rack",
    "dcim/racks",
    "location, tenant, status, role, u_height, facility_id",
);
const RACK_ROLE: ObjectTools =
    ObjectTools::new("rack_role", "rack role", "dcim/rack-roles", "color, description");
const CABLE: ObjectTools = ObjectTools::new(
    "cable",
    "cable",
    "dcim/cables",
    "type, status, label, color, length, length_unit",
);
const CIRCUIT: ObjectTools = ObjectTools::new(
    "circuit",
    "circuit",
    "circuits/circuits",
    "status, tenant, install_date, commit_rate, description",
);
const PROVIDER: ObjectTools = ObjectTools::new(
    "provider",
    "circuit provider",
    "circuits/providers",
    "accounts, description, comments",
);
const CIRCUIT_TYPE: ObjectTools = ObjectTools::new(
    "circuit_type",
    "circuit type",
    "circuits/circuit-types",
    "color, description",
);
const VIRTUAL_MACHINE: ObjectTools = ObjectTools::new(
    "virtual_machine",
    "virtual machine",
    "virtualization/virtual-machines",
    "status, role, tenant, platform, vcpus, memory, disk",
);
const CLUSTER: ObjectTools = ObjectTools::new(
    "cluster",
    "cluster",
    "virtualization/clusters",
    "group, status, tenant, site, description",
);

/// Every per-object write tool, grouped by object
pub static TYPED_TOOLS: LazyLock<Vec<TypedTool>> = LazyLock::new(|| {
    vec![
        SITE.create::<CreateSiteArgs>(),
        SITE.update::<UpdateSiteArgs>(),
        SITE.delete::<DeleteSiteArgs>(),
        TENANT.create::<CreateNamedArgs>(),
        TENANT.update::<UpdateTenantArgs>(),
        TENANT.delete::<DeleteTenantArgs>(),
        TENANT_GROUP.create::<CreateNamedArgs>(),
        TENANT_GROUP.update::<UpdateTenantGroupArgs>(),
        TENANT_GROUP.delete::<DeleteTenantGroupArgs>(),
        TAG.create::<CreateTagArgs>(),
        TAG.update::<UpdateTagArgs>(),
        TAG.delete::<DeleteTagArgs>(),
        VLAN.create::<CreateVlanArgs>(),
        VLAN.update::<UpdateVlanArgs>(),
        VLAN.delete::<DeleteVlanArgs>(),
        VLAN_GROUP.create::<CreateNamedArgs>(),
        VLAN_GROUP.update::<UpdateVlanGroupArgs>(),
        VLAN_GROUP.delete::<DeleteVlanGroupArgs>(),
        REGION.create::<CreateNamedArgs>(),
        REGION.update::<UpdateRegionArgs>(),
        REGION.delete::<DeleteRegionArgs>(),
        LOCATION.create::<CreateSiteScopedArgs>(),
        LOCATION.update::<UpdateLocationArgs>(),
        LOCATION.delete::<DeleteLocationArgs>(),
        VRF.create::<CreateVrfArgs>(),
        VRF.update::<UpdateVrfArgs>(),
        VRF.delete::<DeleteVrfArgs>(),
        PREFIX.create::<CreatePrefixArgs>(),
        PREFIX.update::<UpdatePrefixArgs>(),
        PREFIX.delete::<DeletePrefixArgs>(),
        IP_ADDRESS.create::<CreateIpAddressArgs>(),
        IP_ADDRESS.update::<UpdateIpAddressArgs>(),
        IP_ADDRESS.delete::<DeleteIpAddressArgs>(),
        IP_RANGE.create::<CreateIpRangeArgs>(),
        IP_RANGE.update::<UpdateIpRangeArgs>(),
        IP_RANGE.delete::<DeleteIpRangeArgs>(),
        DEVICE.create::<CreateDeviceArgs>(),
        DEVICE.update::<UpdateDeviceArgs>(),
        DEVICE.delete::<DeleteDeviceArgs>(),
        INTERFACE.create::<CreateInterfaceArgs>(),
        INTERFACE.update::<UpdateInterfaceArgs>(),
        INTERFACE.delete::<DeleteInterfaceArgs>(),
        DEVICE_TYPE.create::<CreateDeviceTypeArgs>(),
        DEVICE_TYPE.update::<UpdateDeviceTypeArgs>(),
        DEVICE_TYPE.delete::<DeleteDeviceTypeArgs>(),
        MANUFACTURER.create::<CreateNamedArgs>(),
        MANUFACTURER.update::<UpdateManufacturerArgs>(),
        MANUFACTURER.delete::<DeleteManufacturerArgs>(),
        RACK.create::<CreateSiteScopedArgs>(),
        RACK.update::<UpdateRackArgs>(),
        RACK.delete::<DeleteRackArgs>(),
        RACK_ROLE.create::<CreateNamedArgs>(),
        CABLE.create::<CreateCableArgs>(),
        CABLE.delete::<DeleteCableArgs>(),
        CIRCUIT.create::<CreateCircuitArgs>(),
        CIRCUIT.update::<UpdateCircuitArgs>(),
        CIRCUIT.delete::<DeleteCircuitArgs>(),
        PROVIDER.create::<CreateNamedArgs>(),
        PROVIDER.update::<UpdateProviderArgs>(),
        PROVIDER.delete::<DeleteProviderArgs>(),
        CIRCUIT_TYPE.create::<CreateNamedArgs>(),
        CIRCUIT_TYPE.update::<UpdateCircuitTypeArgs>(),
        CIRCUIT_TYPE.delete::<DeleteCircuitTypeArgs>(),
        VIRTUAL_MACHINE.create::<CreateVirtualMachineArgs>(),
        VIRTUAL_MACHINE.update::<UpdateVirtualMachineArgs>(),
        VIRTUAL_MACHINE.delete::<DeleteVirtualMachineArgs>(),
        CLUSTER.create::<CreateClusterArgs>(),
        CLUSTER.update::<UpdateClusterArgs>(),
        CLUSTER.delete::<DeleteClusterArgs>(),
    ]
});

/// Find a per-object write tool by name
pub fn find_typed_tool(name: &str) -> Option<&'static TypedTool> {
    TYPED_TOOLS.iter().find(|tool| tool.name == name)
}
