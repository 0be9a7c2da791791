//! Query parameter shaping
//!
//! Tool parameters arrive as JSON. NetBox expects a flat URL query where
//! multi-valued filters repeat their key (`id=1&id=2`). [`QueryParams`] holds
//! that flat, ordered form; [`ObjectQuery`] layers pagination, projection and
//! ordering over caller supplied filters.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Ordered URL query pairs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Create an empty parameter list
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten a JSON filter map into query pairs
    ///
    /// Arrays expand into repeated keys, `null` values are dropped and nested
    /// objects are sent as JSON text.
    pub fn from_filters(filters: &Map<String, Value>) -> Self {
        let mut params = Self::new();
        for (key, value) in filters {
            match value {
                Value::Array(items) => {
                    for item in items {
                        if let Some(text) = value_to_param(item) {
                            params.push(key, text);
                        }
                    }
                }
                other => {
                    if let Some(text) = value_to_param(other) {
                        params.push(key, text);
                    }
                }
            }
        }
        params
    }

    /// Append a pair, keeping existing pairs with the same key
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Replace every pair with `key` by a single pair
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        self.pairs.retain(|(existing, _)| *existing != key);
        self.pairs.push((key, value.into()));
    }

    /// Builder form of [`QueryParams::set`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// First value stored under `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    /// Every value stored under `key`, in insertion order
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
            .collect()
    }

    /// The pairs in the order they will be sent
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Number of pairs
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether no pairs are set
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

fn value_to_param(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        nested => Some(nested.to_string()),
    }
}

/// Sort order for list queries
///
/// NetBox takes a comma separated list of field names, each optionally
/// prefixed with `-` for descending order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Ordering {
    /// A single field, e.g. `name` or `-id`
    Single(String),
    /// Several fields applied in order, e.g. `["facility", "-name"]`
    Multiple(Vec<String>),
}

impl Ordering {
    /// The `ordering` parameter value, or `None` when it would be blank
    pub fn to_param(&self) -> Option<String> {
        let joined = match self {
            Self::Single(field) => field.clone(),
            Self::Multiple(fields) => fields.join(","),
        };
        (!joined.trim().is_empty()).then_some(joined)
    }
}

/// A list or detail query against one endpoint
#[derive(Debug, Clone, Default)]
pub struct ObjectQuery {
    /// Field filters supplied by the caller
    pub filters: Map<String, Value>,
    /// Fields to project; `None` or empty returns every field
    pub fields: Option<Vec<String>>,
    /// Request NetBox's minimal representation
    pub brief: bool,
    /// Page size
    pub limit: Option<u32>,
    /// Number of results to skip
    pub offset: Option<u32>,
    /// Sort order
    pub ordering: Option<Ordering>,
}

impl ObjectQuery {
    /// Build the URL query
    ///
    /// Explicit pagination parameters override `limit`/`offset` keys present
    /// in the filters.
    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::from_filters(&self.filters);

        if let Some(limit) = self.limit {
            params.set("limit", limit.to_string());
        }
        if let Some(offset) = self.offset {
            params.set("offset", offset.to_string());
        }
        if let Some(fields) = fields_param(self.fields.as_deref()) {
            params.set("fields", fields);
        }
        if self.brief {
            params.set("brief", "1");
        }
        if let Some(ordering) = self.ordering.as_ref().and_then(Ordering::to_param) {
            params.set("ordering", ordering);
        }

        params
    }
}

/// Join a field projection into NetBox's `fields` parameter
pub fn fields_param(fields: Option<&[String]>) -> Option<String> {
    fields
        .filter(|fields| !fields.is_empty())
        .map(|fields| fields.join(","))
}
