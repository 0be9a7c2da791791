//! Domain layer constants
//!
//! Values that shape how tool parameters become NetBox API requests.

// ============================================================================
// PAGINATION
// ============================================================================

/// Default number of results returned by list and search queries
pub const DEFAULT_RESULT_LIMIT: u32 = 5;

/// Maximum number of results a single list or search query may request
pub const MAX_RESULT_LIMIT: u32 = 100;

// ============================================================================
// FILTERS
// ============================================================================

/// Query parameters that are never treated as field filters
pub const RESERVED_FILTER_KEYS: &[&str] = &["limit", "offset", "fields", "q"];

/// Lookup expressions NetBox accepts after a `__` separator
pub const LOOKUP_SUFFIXES: &[&str] = &[
    "n", "ic", "nic", "isw", "nisw", "iew", "niew", "ie", "nie", "empty", "regex", "iregex", "lt",
    "lte", "gt", "gte", "in",
];

/// Separator between a field name and its lookup expression
pub const LOOKUP_SEPARATOR: &str = "__";

// ============================================================================
// ENDPOINTS
// ============================================================================

/// Endpoint holding object change records
pub const CHANGELOG_ENDPOINT: &str = "core/object-changes";

/// Object types searched when the caller does not narrow the search
pub const DEFAULT_SEARCH_TYPES: &[&str] = &[
    "dcim.device",
    "dcim.site",
    "ipam.ipaddress",
    "dcim.interface",
    "dcim.rack",
    "ipam.vlan",
    "circuits.circuit",
    "virtualization.virtualmachine",
];
