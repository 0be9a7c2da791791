//! Get Changelogs Tool Handler
//!
//! Handles the netbox_get_changelogs MCP tool call.

use nbx_domain::constants::CHANGELOG_ENDPOINT;
use nbx_domain::ports::SharedNetBoxApi;
use nbx_domain::query::QueryParams;
use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;

use crate::args::GetChangelogsArgs;
use crate::formatter::ResponseFormatter;

/// Handler for object change records
pub struct GetChangelogsHandler {
    netbox: SharedNetBoxApi,
}

impl GetChangelogsHandler {
    /// Create a new netbox_get_changelogs handler
    pub fn new(netbox: SharedNetBoxApi) -> Self {
        Self { netbox }
    }

    /// Handle the netbox_get_changelogs tool request
    ///
    /// Filters are forwarded as given; change log filters such as
    /// `changed_object_type_id` are not object field lookups.
    pub async fn handle(
        &self,
        Parameters(args): Parameters<GetChangelogsArgs>,
    ) -> Result<CallToolResult, McpError> {
        let params = QueryParams::from_filters(&args.filters);
        ResponseFormatter::from_result(self.netbox.get(CHANGELOG_ENDPOINT, &params).await)
    }
}
