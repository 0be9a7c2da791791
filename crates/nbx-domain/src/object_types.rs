//! NetBox object type registry
//!
//! Maps dotted object type keys (`app.model`) to the REST endpoint serving
//! them. The table is sorted by key so listings are stable and lookups can
//! binary search.

use crate::error::{Error, Result};

/// A NetBox model addressable through the REST API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectType {
    /// Dotted key, e.g. `dcim.device`
    pub key: &'static str,
    /// Model name, e.g. `Device`
    pub name: &'static str,
    /// Endpoint path relative to `/api/`, e.g. `dcim/devices`
    pub endpoint: &'static str,
}

impl ObjectType {
    const fn new(key: &'static str, name: &'static str, endpoint: &'static str) -> Self {
        Self {
            key,
            name,
            endpoint,
        }
    }

    /// The NetBox application the model belongs to (`dcim`, `ipam`, ...)
    pub fn app(&self) -> &'static str {
        self.key.split_once('.').map_or(self.key, |(app, _)| app)
    }
}

/// Every object type the gateway can address, sorted by key
pub static OBJECT_TYPES: &[ObjectType] = &[
    ObjectType::new("circuits.circuit", "Circuit", "circuits/circuits"),
    ObjectType::new("circuits.circuitgroup", "CircuitGroup", "circuits/circuit-groups"),
    ObjectType::new("circuits.circuitgroupassignment", "CircuitGroupAssignment", "circuits/circuit-group-assignments"),
    ObjectType::new("circuits.circuittermination", "CircuitTermination", "circuits/circuit-terminations"),
    ObjectType::new("circuits.circuittype", "CircuitType", "circuits/circuit-types"),
    ObjectType::new("circuits.provider", "Provider", "circuits/providers"),
    ObjectType::new("circuits.provideraccount", "ProviderAccount", "circuits/provider-accounts"),
    ObjectType::new("circuits.providernetwork", "ProviderNetwork", "circuits/provider-networks"),
    ObjectType::new("circuits.virtualcircuit", "VirtualCircuit", "circuits/virtual-circuits"),
    ObjectType::new("circuits.virtualcircuittermination", "VirtualCircuitTermination", "circuits/virtual-circuit-terminations"),
    ObjectType::new("circuits.virtualcircuittype", "VirtualCircuitType", "circuits/virtual-circuit-types"),
    ObjectType::new("core.datafile", "DataFile", "core/data-files"),
    ObjectType::new("core.datasource", "DataSource", "core/data-sources"),
    ObjectType::new("core.job", "Job", "core/jobs"),
    ObjectType::new("core.objectchange", "ObjectChange", "core/object-changes"),
    ObjectType::new("core.objecttype", "ObjectType", "extras/object-types"),
    ObjectType::new("dcim.cable", "Cable", "dcim/cables"),
    ObjectType::new("dcim.cabletermination", "CableTermination", "dcim/cable-terminations"),
    ObjectType::new("dcim.consoleport", "ConsolePort", "dcim/console-ports"),
    ObjectType::new("dcim.consoleporttemplate", "ConsolePortTemplate", "dcim/console-port-templates"),
    ObjectType::new("dcim.consoleserverport", "ConsoleServerPort", "dcim/console-server-ports"),
    ObjectType::new("dcim.consoleserverporttemplate", "ConsoleServerPortTemplate", "dcim/console-server-port-templates"),
    ObjectType::new("dcim.device", "Device", "dcim/devices"),
    ObjectType::new("dcim.devicebay", "DeviceBay", "dcim/device-bays"),
    ObjectType::new("dcim.devicebaytemplate", "DeviceBayTemplate", "dcim/device-bay-templates"),
    ObjectType::new("dcim.devicerole", "DeviceRole", "dcim/device-roles"),
    ObjectType::new("dcim.devicetype", "DeviceType", "dcim/device-types"),
    ObjectType::new("dcim.frontport", "FrontPort", "dcim/front-ports"),
    ObjectType::new("dcim.frontporttemplate", "FrontPortTemplate", "dcim/front-port-templates"),
    ObjectType::new("dcim.interface", "Interface", "dcim/interfaces"),
    ObjectType::new("dcim.interfacetemplate", "InterfaceTemplate", "dcim/interface-templates"),
    ObjectType::new("dcim.inventoryitem", "InventoryItem", "dcim/inventory-items"),
    ObjectType::new("dcim.inventoryitemrole", "InventoryItemRole", "dcim/inventory-item-roles"),
    ObjectType::new("dcim.inventoryitemtemplate", "InventoryItemTemplate", "dcim/inventory-item-templates"),
    ObjectType::new("dcim.location", "Location", "dcim/locations"),
    ObjectType::new("dcim.macaddress", "MACAddress", "dcim/mac-addresses"),
    ObjectType::new("dcim.manufacturer", "Manufacturer", "dcim/manufacturers"),
    ObjectType::new("dcim.module", "Module", "dcim/modules"),
    ObjectType::new("dcim.modulebay", "ModuleBay", "dcim/module-bays"),
    ObjectType::new("dcim.modulebaytemplate", "ModuleBayTemplate", "dcim/module-bay-templates"),
    ObjectType::new("dcim.moduletype", "ModuleType", "dcim/module-types"),
    ObjectType::new("dcim.moduletypeprofile", "ModuleTypeProfile", "dcim/module-type-profiles"),
    ObjectType::new("dcim.platform", "Platform", "dcim/platforms"),
    ObjectType::new("dcim.powerfeed", "PowerFeed", "dcim/power-feeds"),
    ObjectType::new("dcim.poweroutlet", "PowerOutlet", "dcim/power-outlets"),
    ObjectType::new("dcim.poweroutlettemplate", "PowerOutletTemplate", "dcim/power-outlet-templates"),
    ObjectType::new("dcim.powerpanel", "PowerPanel", "dcim/power-panels"),
    ObjectType::new("dcim.powerport", "PowerPort", "dcim/power-ports"),
    ObjectType::new("dcim.powerporttemplate", "PowerPortTemplate", "dcim/power-port-templates"),
    ObjectType::new("dcim.rack", "Rack", "dcim/racks"),
    ObjectType::new("dcim.rackreservation", "RackReservation", "dcim/rack-reservations"),
    ObjectType::new("dcim.rackrole", "RackRole", "dcim/rack-roles"),
    ObjectType::new("dcim.racktype", "RackType", "dcim/rack-types"),
    ObjectType::new("dcim.rearport", "RearPort", "dcim/rear-ports"),
    ObjectType::new("dcim.rearporttemplate", "RearPortTemplate", "dcim/rear-port-templates"),
    ObjectType::new("dcim.region", "Region", "dcim/regions"),
    ObjectType::new("dcim.site", "Site", "dcim/sites"),
    ObjectType::new("dcim.sitegroup", "SiteGroup", "dcim/site-groups"),
    ObjectType::new("dcim.virtualchassis", "VirtualChassis", "dcim/virtual-chassis"),
    ObjectType::new("dcim.virtualdevicecontext", "VirtualDeviceContext", "dcim/virtual-device-contexts"),
    ObjectType::new("extras.bookmark", "Bookmark", "extras/bookmarks"),
    ObjectType::new("extras.configcontext", "ConfigContext", "extras/config-contexts"),
    ObjectType::new("extras.configtemplate", "ConfigTemplate", "extras/config-templates"),
    ObjectType::new("extras.customfield", "CustomField", "extras/custom-fields"),
    ObjectType::new("extras.customfieldchoiceset", "CustomFieldChoiceSet", "extras/custom-field-choice-sets"),
    ObjectType::new("extras.customlink", "CustomLink", "extras/custom-links"),
    ObjectType::new("extras.eventrule", "EventRule", "extras/event-rules"),
    ObjectType::new("extras.exporttemplate", "ExportTemplate", "extras/export-templates"),
    ObjectType::new("extras.imageattachment", "ImageAttachment", "extras/image-attachments"),
    ObjectType::new("extras.journalentry", "JournalEntry", "extras/journal-entries"),
    ObjectType::new("extras.notification", "Notification", "extras/notifications"),
    ObjectType::new("extras.notificationgroup", "NotificationGroup", "extras/notification-groups"),
    ObjectType::new("extras.savedfilter", "SavedFilter", "extras/saved-filters"),
    ObjectType::new("extras.script", "Script", "extras/scripts"),
    ObjectType::new("extras.subscription", "Subscription", "extras/subscriptions"),
    ObjectType::new("extras.tableconfig", "TableConfig", "extras/table-configs"),
    ObjectType::new("extras.tag", "Tag", "extras/tags"),
    ObjectType::new("extras.taggeditem", "TaggedItem", "extras/tagged-objects"),
    ObjectType::new("extras.webhook", "Webhook", "extras/webhooks"),
    ObjectType::new("ipam.aggregate", "Aggregate", "ipam/aggregates"),
    ObjectType::new("ipam.asn", "ASN", "ipam/asns"),
    ObjectType::new("ipam.asnrange", "ASNRange", "ipam/asn-ranges"),
    ObjectType::new("ipam.fhrpgroup", "FHRPGroup", "ipam/fhrp-groups"),
    ObjectType::new("ipam.fhrpgroupassignment", "FHRPGroupAssignment", "ipam/fhrp-group-assignments"),
    ObjectType::new("ipam.ipaddress", "IPAddress", "ipam/ip-addresses"),
    ObjectType::new("ipam.iprange", "IPRange", "ipam/ip-ranges"),
    ObjectType::new("ipam.prefix", "Prefix", "ipam/prefixes"),
    ObjectType::new("ipam.rir", "RIR", "ipam/rirs"),
    ObjectType::new("ipam.role", "Role", "ipam/roles"),
    ObjectType::new("ipam.routetarget", "RouteTarget", "ipam/route-targets"),
    ObjectType::new("ipam.service", "Service", "ipam/services"),
    ObjectType::new("ipam.servicetemplate", "ServiceTemplate", "ipam/service-templates"),
    ObjectType::new("ipam.vlan", "VLAN", "ipam/vlans"),
    ObjectType::new("ipam.vlangroup", "VLANGroup", "ipam/vlan-groups"),
    ObjectType::new("ipam.vlantranslationpolicy", "VLANTranslationPolicy", "ipam/vlan-translation-policies"),
    ObjectType::new("ipam.vlantranslationrule", "VLANTranslationRule", "ipam/vlan-translation-rules"),
    ObjectType::new("ipam.vrf", "VRF", "ipam/vrfs"),
    ObjectType::new("tenancy.contact", "Contact", "tenancy/contacts"),
    ObjectType::new("tenancy.contactassignment", "ContactAssignment", "tenancy/contact-assignments"),
    ObjectType::new("tenancy.contactgroup", "ContactGroup", "tenancy/contact-groups"),
    ObjectType::new("tenancy.contactrole", "ContactRole", "tenancy/contact-roles"),
    ObjectType::new("tenancy.tenant", "Tenant", "tenancy/tenants"),
    ObjectType::new("tenancy.tenantgroup", "TenantGroup", "tenancy/tenant-groups"),
    ObjectType::new("users.group", "Group", "users/groups"),
    ObjectType::new("users.objectpermission", "ObjectPermission", "users/permissions"),
    ObjectType::new("users.token", "Token", "users/tokens"),
    ObjectType::new("users.user", "User", "users/users"),
    ObjectType::new("virtualization.cluster", "Cluster", "virtualization/clusters"),
    ObjectType::new("virtualization.clustergroup", "ClusterGroup", "virtualization/cluster-groups"),
    ObjectType::new("virtualization.clustertype", "ClusterType", "virtualization/cluster-types"),
    ObjectType::new("virtualization.virtualdisk", "VirtualDisk", "virtualization/virtual-disks"),
    ObjectType::new("virtualization.virtualmachine", "VirtualMachine", "virtualization/virtual-machines"),
    ObjectType::new("virtualization.vminterface", "VMInterface", "virtualization/interfaces"),
    ObjectType::new("vpn.ikepolicy", "IKEPolicy", "vpn/ike-policies"),
    ObjectType::new("vpn.ikeproposal", "IKEProposal", "vpn/ike-proposals"),
    ObjectType::new("vpn.ipsecpolicy", "IPSecPolicy", "vpn/ipsec-policies"),
    ObjectType::new("vpn.ipsecprofile", "IPSecProfile", "vpn/ipsec-profiles"),
    ObjectType::new("vpn.ipsecproposal", "IPSecProposal", "vpn/ipsec-proposals"),
    ObjectType::new("vpn.l2vpn", "L2VPN", "vpn/l2vpns"),
    ObjectType::new("vpn.l2vpntermination", "L2VPNTermination", "vpn/l2vpn-terminations"),
    ObjectType::new("vpn.tunnel", "Tunnel", "vpn/tunnels"),
    ObjectType::new("vpn.tunnelgroup", "TunnelGroup", "vpn/tunnel-groups"),
    ObjectType::new("vpn.tunneltermination", "TunnelTermination", "vpn/tunnel-terminations"),
    ObjectType::new("wireless.wirelesslan", "WirelessLAN", "wireless/wireless-lans"),
    ObjectType::new("wireless.wirelesslangroup", "WirelessLANGroup", "wireless/wireless-lan-groups"),
    ObjectType::new("wireless.wirelesslink", "WirelessLink", "wireless/wireless-links"),
];

/// Look up an object type by its dotted key
///
/// # Errors
/// Returns [`Error::InvalidObjectType`] listing every valid key when `key`
/// is unknown.
pub fn lookup(key: &str) -> Result<&'static ObjectType> {
    OBJECT_TYPES
        .binary_search_by(|candidate| candidate.key.cmp(key))
        .map(|index| &OBJECT_TYPES[index])
        .map_err(|_| Error::InvalidObjectType {
            object_type: key.to_string(),
            valid_types: valid_types_listing(),
        })
}

/// Resolve the API endpoint for an object type key
pub fn endpoint_for(key: &str) -> Result<&'static str> {
    lookup(key).map(|object_type| object_type.endpoint)
}

/// Whether `key` names a known object type
pub fn is_valid(key: &str) -> bool {
    lookup(key).is_ok()
}

/// Every valid key rendered as a Markdown bullet list
pub fn valid_types_listing() -> String {
    OBJECT_TYPES
        .iter()
        .map(|object_type| format!("- {}", object_type.key))
        .collect::<Vec<_>>()
        .join("\n")
}
