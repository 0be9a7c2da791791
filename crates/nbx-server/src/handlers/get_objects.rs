//! Get Objects Tool Handler
//!
//! Handles the netbox_get_objects MCP tool call.

use nbx_domain::filters::validate_filters;
use nbx_domain::object_types;
use nbx_domain::ports::SharedNetBoxApi;
use nbx_domain::query::ObjectQuery;
use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use serde_json::Value;
use validator::Validate;

use crate::args::GetObjectsArgs;
use crate::formatter::ResponseFormatter;

/// Handler for paginated list queries
pub struct GetObjectsHandler {
    netbox: SharedNetBoxApi,
}

impl GetObjectsHandler {
    /// Create a new netbox_get_objects handler
    pub fn new(netbox: SharedNetBoxApi) -> Self {
        Self { netbox }
    }

    /// Handle the netbox_get_objects tool request
    pub async fn handle(
        &self,
        Parameters(args): Parameters<GetObjectsArgs>,
    ) -> Result<CallToolResult, McpError> {
        args.validate()
            .map_err(|e| ResponseFormatter::invalid_arguments(&e))?;

        ResponseFormatter::from_result(self.fetch(args).await)
    }

    async fn fetch(&self, args: GetObjectsArgs) -> nbx_domain::Result<Value> {
        let object_type = object_types::lookup(&args.object_type)?;
        validate_filters(&args.filters)?;

        let query = ObjectQuery {
            filters: args.filters,
            fields: args.fields,
            brief: args.brief,
            limit: Some(args.limit),
            offset: Some(args.offset),
            ordering: args.ordering,
        };

        self.netbox
            .get(object_type.endpoint, &query.to_params())
            .await
    }
}
