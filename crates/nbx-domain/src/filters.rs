//! Filter validation
//!
//! NetBox filters address fields of the queried model directly. Lookups such
//! as `name__ic` are allowed; relationship traversal such as
//! `device__site_id` is not, so it is rejected before any request is sent.

use serde_json::{Map, Value};

use crate::constants::{LOOKUP_SEPARATOR, LOOKUP_SUFFIXES, RESERVED_FILTER_KEYS};
use crate::error::{Error, Result};

/// Validate every key of a filter map
///
/// Accepted shapes:
/// - reserved parameters (`limit`, `offset`, `fields`, `q`)
/// - direct fields (`site_id`, `name`, `status`)
/// - a field followed by one known lookup (`name__ic`, `id__in`, `vid__gte`)
///
/// # Errors
/// Returns [`Error::InvalidFilter`] for the first key that traverses a
/// relationship or uses an unknown lookup.
pub fn validate_filters(filters: &Map<String, Value>) -> Result<()> {
    filters.keys().try_for_each(|key| validate_filter_key(key))
}

/// Validate a single filter key
pub fn validate_filter_key(key: &str) -> Result<()> {
    if RESERVED_FILTER_KEYS.contains(&key) || !key.contains(LOOKUP_SEPARATOR) {
        return Ok(());
    }

    let parts: Vec<&str> = key.split(LOOKUP_SEPARATOR).collect();
    match parts.as_slice() {
        [_, suffix] if LOOKUP_SUFFIXES.contains(suffix) => Ok(()),
        _ => Err(Error::invalid_filter(key)),
    }
}
