//! Search Objects Tool Handler
//!
//! Handles the netbox_search_objects MCP tool call: one `?q=` list query per
//! object type, issued concurrently.

use futures::future::join_all;
use nbx_domain::constants::DEFAULT_SEARCH_TYPES;
use nbx_domain::object_types::{self, ObjectType};
use nbx_domain::ports::SharedNetBoxApi;
use nbx_domain::query::{QueryParams, fields_param};
use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use serde_json::{Map, Value};
use tracing::{debug, warn};
use validator::Validate;

use crate::args::SearchObjectsArgs;
use crate::formatter::ResponseFormatter;

/// Handler for the global search tool
pub struct SearchObjectsHandler {
    netbox: SharedNetBoxApi,
}

impl SearchObjectsHandler {
    /// Create a new netbox_search_objects handler
    pub fn new(netbox: SharedNetBoxApi) -> Self {
        Self { netbox }
    }

    /// Handle the netbox_search_objects tool request
    ///
    /// Every requested type is validated before any request is sent. A type
    /// whose query fails contributes an empty list.
    pub async fn handle(
        &self,
        Parameters(args): Parameters<SearchObjectsArgs>,
    ) -> Result<CallToolResult, McpError> {
        args.validate()
            .map_err(|e| ResponseFormatter::invalid_arguments(&e))?;

        let types = match resolve_types(args.object_types.as_deref()) {
            Ok(types) => types,
            Err(error) => return ResponseFormatter::from_error(error),
        };

        let mut params = QueryParams::new()
            .with("q", args.query.as_str())
            .with("limit", args.limit.to_string());
        if let Some(fields) = fields_param(args.fields.as_deref()) {
            params.set("fields", fields);
        }

        let searches = types
            .iter()
            .map(|object_type| self.search_type(object_type, &params));
        let results: Map<String, Value> = join_all(searches).await.into_iter().collect();

        debug!(query = %args.query, types = results.len(), "Search completed");
        ResponseFormatter::json(&Value::Object(results))
    }

    async fn search_type(&self, object_type: &ObjectType, params: &QueryParams) -> (String, Value) {
        let matches = match self.netbox.get(object_type.endpoint, params).await {
            Ok(response) => response
                .get("results")
                .cloned()
                .unwrap_or_else(|| Value::Array(Vec::new())),
            Err(error) => {
                warn!(object_type = object_type.key, error = %error, "Search failed for object type");
                Value::Array(Vec::new())
            }
        };
        (object_type.key.to_string(), matches)
    }
}

fn resolve_types(requested: Option<&[String]>) -> nbx_domain::Result<Vec<&'static ObjectType>> {
    match requested {
        Some(keys) => keys.iter().map(|key| object_types::lookup(key)).collect(),
        None => DEFAULT_SEARCH_TYPES
            .iter()
            .map(|key| object_types::lookup(key))
            .collect(),
    }
}
