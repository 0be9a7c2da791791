//! Get Object By Id Tool Handler
//!
//! Handles the netbox_get_object_by_id MCP tool call.

use nbx_domain::object_types;
use nbx_domain::ports::SharedNetBoxApi;
use nbx_domain::query::{QueryParams, fields_param};
use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use serde_json::Value;
use validator::Validate;

use crate::args::GetObjectByIdArgs;
use crate::formatter::ResponseFormatter;

/// Handler for single object lookups
pub struct GetObjectByIdHandler {
    netbox: SharedNetBoxApi,
}

impl GetObjectByIdHandler {
    /// Create a new netbox_get_object_by_id handler
    pub fn new(netbox: SharedNetBoxApi) -> Self {
        Self { netbox }
    }

    /// Handle the netbox_get_object_by_id tool request
    pub async fn handle(
        &self,
        Parameters(args): Parameters<GetObjectByIdArgs>,
    ) -> Result<CallToolResult, McpError> {
        args.validate()
            .map_err(|e| ResponseFormatter::invalid_arguments(&e))?;

        ResponseFormatter::from_result(self.fetch(args).await)
    }

    async fn fetch(&self, args: GetObjectByIdArgs) -> nbx_domain::Result<Value> {
        let endpoint = object_types::endpoint_for(&args.object_type)?;

        let mut params = QueryParams::new();
        if let Some(fields) = fields_param(args.fields.as_deref()) {
            params.set("fields", fields);
        }
        if args.brief {
            params.set("brief", "1");
        }

        self.netbox
            .get(&format!("{endpoint}/{}", args.object_id), &params)
            .await
    }
}
