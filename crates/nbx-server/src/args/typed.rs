//! Arguments for the per-object write tools
//!
//! Create tools take the object's required fields as named parameters plus
//! an optional `data` map. The payload sent to NetBox is the required fields
//! overlaid with `data`, so `data` wins on conflicts.
//!
//! Update and delete tools only differ in the name of their id parameter
//! (`site_id`, `vlan_id`...), so their argument types are generated.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};
use validator::Validate;

/// Builds the JSON body of a create request
pub trait CreatePayload {
    /// Required fields merged with the optional `data` map
    fn into_payload(self) -> Map<String, Value>;
}

/// Arguments of an update tool
pub trait UpdateArgs {
    /// The object id and the fields to change
    fn into_parts(self) -> (u64, Map<String, Value>);
}

/// Arguments of a delete tool
pub trait DeleteArgs {
    /// The object id
    fn object_id(&self) -> u64;
}

fn merge_payload<const N: usize>(
    required: [(&'static str, Value); N],
    data: Option<Map<String, Value>>,
) -> Map<String, Value> {
    let mut payload: Map<String, Value> = required
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect();
    if let Some(data) = data {
        payload.extend(data);
    }
    payload
}

fn default_status() -> String {
    "active".to_string()
}

/// Arguments for netbox_create_site
#[derive(Debug, Clone, Deserialize, JsonSchema, Validate)]
pub struct CreateSiteArgs {
    /// Site name
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: String,
    /// URL-friendly identifier
    #[validate(length(min = 1, message = "slug cannot be empty"))]
    pub slug: String,
    /// active, planned, staging, decommissioning or retired (default: active)
    #[serde(default = "default_status")]
    pub status: String,
    /// Additional fields (region, tenant, facility, time_zone...)
    pub data: Option<Map<String, Value>>,
}

impl CreatePayload for CreateSiteArgs {
    fn into_payload(self) -> Map<String, Value> {
        merge_payload(
            [
                ("name", self.name.into()),
                ("slug", self.slug.into()),
                ("status", self.status.into()),
            ],
            self.data,
        )
    }
}

/// Arguments for create tools of objects identified by name and slug
///
/// Used by tenants, tenant groups, VLAN groups, regions, manufacturers, rack
/// roles, providers and circuit types.
#[derive(Debug, Clone, Deserialize, JsonSchema, Validate)]
pub struct CreateNamedArgs {
    /// Object name
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: String,
    /// URL-friendly identifier
    #[validate(length(min = 1, message = "slug cannot be empty"))]
    pub slug: String,
    /// Additional fields (parent, group, description...)
    pub data: Option<Map<String, Value>>,
}

impl CreatePayload for CreateNamedArgs {
    fn into_payload(self) -> Map<String, Value> {
        merge_payload(
            [("name", self.name.into()), ("slug", self.slug.into())],
            self.data,
        )
    }
}

/// Arguments for netbox_create_tag
#[derive(Debug, Clone, Deserialize, JsonSchema, Validate)]
pub struct CreateTagArgs {
    /// Tag name
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: String,
    /// URL-friendly identifier; NetBox derives one from the name when omitted
    pub slug: Option<String>,
    /// Hex color without '#', e.g. "ff0000"
    pub color: Option<String>,
    /// Additional fields (description...)
    pub data: Option<Map<String, Value>>,
}

impl CreatePayload for CreateTagArgs {
    fn into_payload(self) -> Map<String, Value> {
        let mut payload = merge_payload([("name", self.name.into())], None);
        let optional = [("slug", self.slug), ("color", self.color)];
        for (key, value) in optional {
            if let Some(value) = value.filter(|value| !value.is_empty()) {
                payload.insert(key.to_string(), value.into());
            }
        }
        if let Some(data) = self.data {
            payload.extend(data);
        }
        payload
    }
}

/// Arguments for netbox_create_vlan
#[derive(Debug, Clone, Deserialize, JsonSchema, Validate)]
pub struct CreateVlanArgs {
    /// VLAN name
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: String,
    /// VLAN id (1-4094)
    #[validate(range(min = 1, max = 4094, message = "vid must be between 1 and 4094"))]
    pub vid: u16,
    /// active, reserved or deprecated (default: active)
    #[serde(default = "default_status")]
    pub status: String,
    /// Additional fields (site, group, tenant, role, description...)
    pub data: Option<Map<String, Value>>,
}

impl CreatePayload for CreateVlanArgs {
    fn into_payload(self) -> Map<String, Value> {
        merge_payload(
            [
                ("name", self.name.into()),
                ("vid", self.vid.into()),
                ("status", self.status.into()),
            ],
            self.data,
        )
    }
}

/// Arguments for create tools of objects placed in a site
///
/// Used by locations and racks.
#[derive(Debug, Clone, Deserialize, JsonSchema, Validate)]
pub struct CreateSiteScopedArgs {
    /// Object name
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: String,
    /// Site id
    #[validate(range(min = 1, message = "site must be a positive integer"))]
    pub site: u64,
    /// Additional fields (parent, status, tenant, role, u_height...)
    pub data: Option<Map<String, Value>>,
}

impl CreatePayload for CreateSiteScopedArgs {
    fn into_payload(self) -> Map<String, Value> {
        merge_payload(
            [("name", self.name.into()), ("site", self.site.into())],
            self.data,
        )
    }
}

/// Arguments for netbox_create_vrf
#[derive(Debug, Clone, Deserialize, JsonSchema, Validate)]
pub struct CreateVrfArgs {
    /// VRF name
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: String,
    /// Additional fields (rd, tenant, enforce_unique, description...)
    pub data: Option<Map<String, Value>>,
}

impl CreatePayload for CreateVrfArgs {
    fn into_payload(self) -> Map<String, Value> {
        merge_payload([("name", self.name.into())], self.data)
    }
}

/// Arguments for netbox_create_prefix
#[derive(Debug, Clone, Deserialize, JsonSchema, Validate)]
pub struct CreatePrefixArgs {
    /// Network in CIDR notation, e.g. "10.0.0.0/24"
    #[validate(length(min = 1, message = "prefix cannot be empty"))]
    pub prefix: String,
    /// Additional fields (site, vrf, tenant, vlan, status, role, is_pool...)
    pub data: Option<Map<String, Value>>,
}

impl CreatePayload for CreatePrefixArgs {
    fn into_payload(self) -> Map<String, Value> {
        merge_payload([("prefix", self.prefix.into())], self.data)
    }
}

/// Arguments for netbox_create_ip_address
#[derive(Debug, Clone, Deserialize, JsonSchema, Validate)]
pub struct CreateIpAddressArgs {
    /// Address with mask, e.g. "192.0.2.10/24"
    #[validate(length(min = 1, message = "address cannot be empty"))]
    pub address: String,
    /// Additional fields (vrf, tenant, status, role, assigned_object_type, dns_name...)
    pub data: Option<Map<String, Value>>,
}

impl CreatePayload for CreateIpAddressArgs {
    fn into_payload(self) -> Map<String, Value> {
        merge_payload([("address", self.address.into())], self.data)
    }
}

/// Arguments for netbox_create_ip_range
#[derive(Debug, Clone, Deserialize, JsonSchema, Validate)]
pub struct CreateIpRangeArgs {
    /// First address with mask, e.g. "192.0.2.10/24"
    #[validate(length(min = 1, message = "start_address cannot be empty"))]
    pub start_address: String,
    /// Last address with mask, e.g. "192.0.2.50/24"
    #[validate(length(min = 1, message = "end_address cannot be empty"))]
    pub end_address: String,
    /// Additional fields (vrf, tenant, status, role, description...)
    pub data: Option<Map<String, Value>>,
}

impl CreatePayload for CreateIpRangeArgs {
    fn into_payload(self) -> Map<String, Value> {
        merge_payload(
            [
                ("start_address", self.start_address.into()),
                ("end_address", self.end_address.into()),
            ],
            self.data,
        )
    }
}

/// Arguments for netbox_create_device
#[derive(Debug, Clone, Deserialize, JsonSchema, Validate)]
pub struct CreateDeviceArgs {
    /// Device name
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: String,
    /// Device type id
    #[validate(range(min = 1, message = "device_type must be a positive integer"))]
    pub device_type: u64,
    /// Site id
    #[validate(range(min = 1, message = "site must be a positive integer"))]
    pub site: u64,
    /// Additional fields (role, rack, position, platform, serial, status...)
    pub data: Option<Map<String, Value>>,
}

impl CreatePayload for CreateDeviceArgs {
    fn into_payload(self) -> Map<String, Value> {
        merge_payload(
            [
                ("name", self.name.into()),
                ("device_type", self.device_type.into()),
                ("site", self.site.into()),
            ],
            self.data,
        )
    }
}

/// Arguments for netbox_create_interface
#[derive(Debug, Clone, Deserialize, JsonSchema, Validate)]
pub struct CreateInterfaceArgs {
    /// Interface name, e.g. "eth0"
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: String,
    /// Device id
    #[validate(range(min = 1, message = "device must be a positive integer"))]
    pub device: u64,
    /// Interface type, e.g. "1000base-t" or "virtual"
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "type cannot be empty"))]
    pub interface_type: String,
    /// Additional fields (enabled, mtu, mac_address, mode, description...)
    pub data: Option<Map<String, Value>>,
}

impl CreatePayload for CreateInterfaceArgs {
    fn into_payload(self) -> Map<String, Value> {
        merge_payload(
            [
                ("name", self.name.into()),
                ("device", self.device.into()),
                ("type", self.interface_type.into()),
            ],
            self.data,
        )
    }
}

/// Arguments for netbox_create_device_type
#[derive(Debug, Clone, Deserialize, JsonSchema, Validate)]
pub struct CreateDeviceTypeArgs {
    /// Manufacturer id
    #[validate(range(min = 1, message = "manufacturer must be a positive integer"))]
    pub manufacturer: u64,
    /// Model name
    #[validate(length(min = 1, message = "model cannot be empty"))]
    pub model: String,
    /// URL-friendly identifier
    #[validate(length(min = 1, message = "slug cannot be empty"))]
    pub slug: String,
    /// Additional fields (part_number, u_height, is_full_depth, airflow...)
    pub data: Option<Map<String, Value>>,
}

impl CreatePayload for CreateDeviceTypeArgs {
    fn into_payload(self) -> Map<String, Value> {
        merge_payload(
            [
                ("manufacturer", self.manufacturer.into()),
                ("model", self.model.into()),
                ("slug", self.slug.into()),
            ],
            self.data,
        )
    }
}

/// Arguments for netbox_create_cable
#[derive(Debug, Clone, Deserialize, JsonSchema, Validate)]
pub struct CreateCableArgs {
    /// Content type of the A side, e.g. "dcim.interface"
    #[validate(length(min = 1, message = "termination_a_type cannot be empty"))]
    pub termination_a_type: String,
    /// Id of the A side termination
    #[validate(range(min = 1, message = "termination_a_id must be a positive integer"))]
    pub termination_a_id: u64,
    /// Content type of the B side, e.g. "dcim.interface"
    #[validate(length(min = 1, message = "termination_b_type cannot be empty"))]
    pub termination_b_type: String,
    /// Id of the B side termination
    #[validate(range(min = 1, message = "termination_b_id must be a positive integer"))]
    pub termination_b_id: u64,
    /// Additional fields (type, status, label, color, length...)
    pub data: Option<Map<String, Value>>,
}

impl CreatePayload for CreateCableArgs {
    fn into_payload(self) -> Map<String, Value> {
        merge_payload(
            [
                ("termination_a_type", self.termination_a_type.into()),
                ("termination_a_id", self.termination_a_id.into()),
                ("termination_b_type", self.termination_b_type.into()),
                ("termination_b_id", self.termination_b_id.into()),
            ],
            self.data,
        )
    }
}

/// Arguments for netbox_create_circuit
#[derive(Debug, Clone, Deserialize, JsonSchema, Validate)]
pub struct CreateCircuitArgs {
    /// Circuit id assigned by the provider
    #[validate(length(min = 1, message = "cid cannot be empty"))]
    pub cid: String,
    /// Provider id
    #[validate(range(min = 1, message = "provider must be a positive integer"))]
    pub provider: u64,
    /// Circuit type id
    #[serde(rename = "type")]
    #[validate(range(min = 1, message = "type must be a positive integer"))]
    pub circuit_type: u64,
    /// Additional fields (status, tenant, install_date, commit_rate...)
    pub data: Option<Map<String, Value>>,
}

impl CreatePayload for CreateCircuitArgs {
    fn into_payload(self) -> Map<String, Value> {
        merge_payload(
            [
                ("cid", self.cid.into()),
                ("provider", self.provider.into()),
                ("type", self.circuit_type.into()),
            ],
            self.data,
        )
    }
}

/// Arguments for netbox_create_virtual_machine
#[derive(Debug, Clone, Deserialize, JsonSchema, Validate)]
pub struct CreateVirtualMachineArgs {
    /// Virtual machine name
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: String,
    /// Cluster id
    #[validate(range(min = 1, message = "cluster must be a positive integer"))]
    pub cluster: u64,
    /// Additional fields (status, role, tenant, platform, vcpus, memory, disk...)
    pub data: Option<Map<String, Value>>,
}

impl CreatePayload for CreateVirtualMachineArgs {
    fn into_payload(self) -> Map<String, Value> {
        merge_payload(
            [("name", self.name.into()), ("cluster", self.cluster.into())],
            self.data,
        )
    }
}

/// Arguments for netbox_create_cluster
#[derive(Debug, Clone, Deserialize, JsonSchema, Validate)]
pub struct CreateClusterArgs {
    /// Cluster name
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: String,
    /// Cluster type id
    #[serde(rename = "type")]
    #[validate(range(min = 1, message = "type must be a positive integer"))]
    pub cluster_type: u64,
    /// Additional fields (group, status, tenant, site...)
    pub data: Option<Map<String, Value>>,
}

impl CreatePayload for CreateClusterArgs {
    fn into_payload(self) -> Map<String, Value> {
        merge_payload(
            [("name", self.name.into()), ("type", self.cluster_type.into())],
            self.data,
        )
    }
}

macro_rules! update_args {
    ($(#[doc = $doc:tt])* $name:ident { $id:ident }) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Deserialize, JsonSchema, Validate)]
        pub struct $name {
            /// Numeric id of the object to update
            #[validate(range(min = 1, message = "id must be a positive integer"))]
            pub $id: u64,
            /// Fields to change; omitted fields are left untouched
            pub data: Map<String, Value>,
        }

        impl UpdateArgs for $name {
            fn into_parts(self) -> (u64, Map<String, Value>) {
                (self.$id, self.data)
            }
        }
    };
}

macro_rules! delete_args {
    ($(#[doc = $doc:tt])* $name:ident { $id:ident }) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Deserialize, JsonSchema, Validate)]
        pub struct $name {
            /// Numeric id of the object to delete
            #[validate(range(min = 1, message = "id must be a positive integer"))]
            pub $id: u64,
        }

        impl DeleteArgs for $name {
            fn object_id(&self) -> u64 {
                self.$id
            }
        }
    };
}

update_args!(/// Arguments for netbox_update_site
    UpdateSiteArgs { site_id });
update_args!(/// Arguments for netbox_update_tenant
    UpdateTenantArgs { tenant_id });
update_args!(/// Arguments for netbox_update_tenant_group
    UpdateTenantGroupArgs { tenant_group_id });
update_args!(/// Arguments for netbox_update_tag
    UpdateTagArgs { tag_id });
update_args!(/// Arguments for netbox_update_vlan
    UpdateVlanArgs { vlan_id });
update_args!(/// Arguments for netbox_update_vlan_group
    UpdateVlanGroupArgs { vlan_group_id });
update_args!(/// Arguments for netbox_update_region
    UpdateRegionArgs { region_id });
update_args!(/// Arguments for netbox_update_location
    UpdateLocationArgs { location_id });
update_args!(/// Arguments for netbox_update_vrf
    UpdateVrfArgs { vrf_id });
update_args!(/// Arguments for netbox_update_prefix
    UpdatePrefixArgs { prefix_id });
update_args!(/// Arguments for netbox_update_ip_address
    UpdateIpAddressArgs { ip_address_id });
update_args!(/// Arguments for netbox_update_ip_range
    UpdateIpRangeArgs { ip_range_id });
update_args!(/// Arguments for netbox_update_device
    UpdateDeviceArgs { device_id });
update_args!(/// Arguments for netbox_update_interface
    UpdateInterfaceArgs { interface_id });
update_args!(/// Arguments for netbox_update_device_type
    UpdateDeviceTypeArgs { device_type_id });
update_args!(/// Arguments for netbox_update_manufacturer
    UpdateManufacturerArgs { manufacturer_id });
update_args!(/// Arguments for netbox_update_rack
    UpdateRackArgs { rack_id });
update_args!(/// Arguments for netbox_update_circuit
    UpdateCircuitArgs { circuit_id });
update_args!(/// Arguments for netbox_update_provider
    UpdateProviderArgs { provider_id });
update_args!(/// Arguments for netbox_update_circuit_type
    UpdateCircuitTypeArgs { circuit_type_id });
update_args!(/// Arguments for netbox_update_virtual_machine
    UpdateVirtualMachineArgs { vm_id });
update_args!(/// Arguments for netbox_update_cluster
    UpdateClusterArgs { cluster_id });

delete_args!(/// Arguments for netbox_delete_site
    DeleteSiteArgs { site_id });
delete_args!(/// Arguments for netbox_delete_tenant
    DeleteTenantArgs { tenant_id });
delete_args!(/// Arguments for netbox_delete_tenant_group
    DeleteTenantGroupArgs { tenant_group_id });
delete_args!(/// Arguments for netbox_delete_tag
    DeleteTagArgs { tag_id });
delete_args!(/// Arguments for netbox_delete_vlan
    DeleteVlanArgs { vlan_id });
delete_args!(/// Arguments for netbox_delete_vlan_group
    DeleteVlanGroupArgs { vlan_group_id });
delete_args!(/// Arguments for netbox_delete_region
    DeleteRegionArgs { region_id });
delete_args!(/// Arguments for netbox_delete_location
    DeleteLocationArgs { location_id });
delete_args!(/// Arguments for netbox_delete_vrf
    DeleteVrfArgs { vrf_id });
delete_args!(/// Arguments for netbox_delete_prefix
    DeletePrefixArgs { prefix_id });
delete_args!(/// Arguments for netbox_delete_ip_address
    DeleteIpAddressArgs { ip_address_id });
delete_args!(/// Arguments for netbox_delete_ip_range
    DeleteIpRangeArgs { ip_range_id });
delete_args!(/// Arguments for netbox_delete_device
    DeleteDeviceArgs { device_id });
delete_args!(/// Arguments for netbox_delete_interface
    DeleteInterfaceArgs { interface_id });
delete_args!(/// Arguments for netbox_delete_device_type
    DeleteDeviceTypeArgs { device_type_id });
delete_args!(/// Arguments for netbox_delete_manufacturer
    DeleteManufacturerArgs { manufacturer_id });
delete_args!(/// Arguments for netbox_delete_rack
    DeleteRackArgs { rack_id });
delete_args!(/// Arguments for netbox_delete_cable
    DeleteCableArgs { cable_id });
delete_args!(/// Arguments for netbox_delete_circuit
    DeleteCircuitArgs { circuit_id });
delete_args!(/// Arguments for netbox_delete_provider
    DeleteProviderArgs { provider_id });
delete_args!(/// Arguments for netbox_delete_circuit_type
    DeleteCircuitTypeArgs { circuit_type_id });
delete_args!(/// Arguments for netbox_delete_virtual_machine
    DeleteVirtualMachineArgs { vm_id });
delete_args!(/// Arguments for netbox_delete_cluster
    DeleteClusterArgs { cluster_id });
