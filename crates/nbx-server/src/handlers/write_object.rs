//! Generic Write Tool Handlers
//!
//! Handles netbox_create_object, netbox_update_object and
//! netbox_delete_object, and executes the write requests built by the
//! per-object tools.

use nbx_domain::object_types;
use nbx_domain::ports::SharedNetBoxApi;
use rmcp::ErrorData as McpError;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use serde_json::{Map, Value};
use tracing::info;
use validator::Validate;

use crate::args::{CreateObjectArgs, DeleteObjectArgs, UpdateObjectArgs};
use crate::formatter::ResponseFormatter;

/// A single write against one endpoint
#[derive(Debug, Clone, PartialEq)]
pub enum WriteRequest {
    /// `POST` a new object
    Create {
        /// Request body
        payload: Map<String, Value>,
    },
    /// `PATCH` an existing object
    Update {
        /// Object id
        object_id: u64,
        /// Fields to change
        data: Map<String, Value>,
    },
    /// `DELETE` an object
    Delete {
        /// Object id
        object_id: u64,
    },
}

impl WriteRequest {
    /// Send the request to `endpoint` and format the outcome
    pub async fn execute(
        self,
        netbox: &SharedNetBoxApi,
        endpoint: &str,
    ) -> Result<CallToolResult, McpError> {
        match self {
            Self::Create { payload } => {
                info!(endpoint, "Creating object");
                ResponseFormatter::from_result(netbox.create(endpoint, &Value::Object(payload)).await)
            }
            Self::Update { object_id, data } => {
                info!(endpoint, object_id, "Updating object");
                ResponseFormatter::from_result(
                    netbox
                        .update(endpoint, object_id, &Value::Object(data))
                        .await,
                )
            }
            Self::Delete { object_id } => {
                info!(endpoint, object_id, "Deleting object");
                ResponseFormatter::deleted(
                    endpoint,
                    object_id,
                    netbox.delete(endpoint, object_id).await,
                )
            }
        }
    }
}

/// Handler for writes addressed by object type
pub struct WriteObjectHandler {
    netbox: SharedNetBoxApi,
}

impl WriteObjectHandler {
    /// Create a new generic write handler
    pub fn new(netbox: SharedNetBoxApi) -> Self {
        Self { netbox }
    }

    /// Handle the netbox_create_object tool request
    pub async fn create(
        &self,
        Parameters(args): Parameters<CreateObjectArgs>,
    ) -> Result<CallToolResult, McpError> {
        args.validate()
            .map_err(|e| ResponseFormatter::invalid_arguments(&e))?;
        let request = WriteRequest::Create { payload: args.data };
        self.execute(&args.object_type, request).await
    }

    /// Handle the netbox_update_object tool request
    pub async fn update(
        &self,
        Parameters(args): Parameters<UpdateObjectArgs>,
    ) -> Result<CallToolResult, McpError> {
        args.validate()
            .map_err(|e| ResponseFormatter::invalid_arguments(&e))?;
        let request = WriteRequest::Update {
            object_id: args.object_id,
            data: args.data,
        };
        self.execute(&args.object_type, request).await
    }

    /// Handle the netbox_delete_object tool request
    pub async fn delete(
        &self,
        Parameters(args): Parameters<DeleteObjectArgs>,
    ) -> Result<CallToolResult, McpError> {
        args.validate()
            .map_err(|e| ResponseFormatter::invalid_arguments(&e))?;
        let request = WriteRequest::Delete {
            object_id: args.object_id,
        };
        self.execute(&args.object_type, request).await
    }

    async fn execute(
        &self,
        object_type: &str,
        request: WriteRequest,
    ) -> Result<CallToolResult, McpError> {
        match object_types::endpoint_for(object_type) {
            Ok(endpoint) => request.execute(&self.netbox, endpoint).await,
            Err(error) => ResponseFormatter::from_error(error),
        }
    }
}
