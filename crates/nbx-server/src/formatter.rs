//! Response formatting for MCP tool results
//!
//! Successful calls return the NetBox JSON as a single text item. Failures
//! are split by who caused them: bad parameters become protocol errors,
//! failures reported by NetBox become failed tool results.

use nbx_domain::error::{Error, Result};
use rmcp::ErrorData as McpError;
use rmcp::model::{CallToolResult, Content};
use serde_json::{Value, json};
use tracing::{debug, warn};
use validator::ValidationErrors;

/// Response formatter for MCP server tools
pub struct ResponseFormatter;

impl ResponseFormatter {
    /// Turn the outcome of a NetBox call into a tool result
    pub fn from_result(result: Result<Value>) -> std::result::Result<CallToolResult, McpError> {
        match result {
            Ok(value) => Self::json(&value),
            Err(error) => Self::from_error(error),
        }
    }

    /// Success result carrying compact JSON
    pub fn json(value: &Value) -> std::result::Result<CallToolResult, McpError> {
        let text = serde_json::to_string(value)
            .map_err(|e| McpError::internal_error(format!("Failed to serialize result: {e}"), None))?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Result of a delete call
    pub fn deleted(
        endpoint: &str,
        object_id: u64,
        result: Result<bool>,
    ) -> std::result::Result<CallToolResult, McpError> {
        match result {
            Ok(deleted) => {
                debug!(endpoint, object_id, deleted, "Delete completed");
                Self::json(&json!({
                    "deleted": deleted,
                    "endpoint": endpoint,
                    "object_id": object_id,
                }))
            }
            Err(error) => Self::from_error(error),
        }
    }

    /// Map a domain error onto the MCP error surface
    pub fn from_error(error: Error) -> std::result::Result<CallToolResult, McpError> {
        if error.is_caller_error() {
            return Err(McpError::invalid_params(error.to_string(), None));
        }

        match error {
            Error::Configuration { .. } | Error::Internal { .. } => {
                Err(McpError::internal_error(error.to_string(), None))
            }
            other => {
                warn!(error = %other, "NetBox call failed");
                Ok(CallToolResult::error(vec![Content::text(other.to_string())]))
            }
        }
    }

    /// Protocol error for arguments rejected by validation
    pub fn invalid_arguments(errors: &ValidationErrors) -> McpError {
        McpError::invalid_params(format!("Invalid arguments: {errors}"), None)
    }
}
