//! HTTP Transport for MCP
//!
//! Implements MCP JSON-RPC over plain HTTP POST requests.
//!
//! # Supported Methods
//!
//! | Method | Description |
//! |--------|-------------|
//! | `initialize` | Server info and capabilities |
//! | `tools/list` | List available tools |
//! | `tools/call` | Call a tool with arguments |
//! | `ping` | Health check |
//! | `notifications/*` | Acknowledged with `202 Accepted` and no body |
//!
//! # Example
//!
//! ```text
//! POST /mcp HTTP/1.1
//! Content-Type: application/json
//!
//! {
//!     "jsonrpc": "2.0",
//!     "method": "tools/list",
//!     "id": 1
//! }
//! ```

use super::types::{McpRequest, McpResponse};
use crate::McpServer;
use crate::constants::{
    JSONRPC_INTERNAL_ERROR, JSONRPC_INVALID_PARAMS, JSONRPC_METHOD_NOT_FOUND,
    JSONRPC_PARSE_ERROR, MCP_HTTP_PATH, NOTIFICATION_PREFIX,
};
use nbx_infrastructure::AppConfig;
use nbx_infrastructure::config::parse_bind_address;
use rmcp::ServerHandler;
use rmcp::model::CallToolRequestParams;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::Header;
use rocket::serde::json::{self, Json};
use rocket::{Build, Request, Responder, Response, Rocket, State, get, post, routes};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, error, info};

/// HTTP transport configuration
#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Enable CORS for browser access
    pub enable_cors: bool,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self::localhost(nbx_infrastructure::constants::DEFAULT_HTTP_PORT)
    }
}

impl HttpTransportConfig {
    /// Create config for localhost with specified port
    pub fn localhost(port: u16) -> Self {
        Self {
            host: nbx_infrastructure::constants::DEFAULT_HTTP_HOST.to_string(),
            port,
            enable_cors: true,
        }
    }

    /// Bind address and port from the application configuration
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            host: config.host.clone(),
            port: config.port,
            enable_cors: true,
        }
    }
}

/// Shared state for HTTP transport
#[derive(Clone)]
pub struct HttpTransportState {
    /// MCP server reference (for handling requests)
    pub server: Arc<McpServer>,
}

/// HTTP transport server
pub struct HttpTransport {
    config: HttpTransportConfig,
    state: HttpTransportState,
}

impl HttpTransport {
    /// Create a new HTTP transport
    pub fn new(config: HttpTransportConfig, server: Arc<McpServer>) -> Self {
        Self {
            config,
            state: HttpTransportState { server },
        }
    }

    /// Build the Rocket application
    pub fn rocket(&self) -> Rocket<Build> {
        let mut rocket = rocket::build()
            .manage(self.state.clone())
            .mount("/", routes![handle_mcp_request, handle_health]);

        if self.config.enable_cors {
            rocket = rocket.attach(Cors);
        }

        rocket
    }

    /// Rocket application bound to the configured host and port
    ///
    /// Host names are resolved first: Rocket only accepts IP addresses.
    pub fn configured_rocket(
        &self,
    ) -> Result<Rocket<Build>, Box<dyn std::error::Error + Send + Sync>> {
        let address = parse_bind_address(&self.config.host)?;

        let figment = rocket::Config::figment()
            .merge(("address", address))
            .merge(("port", self.config.port))
            .merge(("log_level", "critical"));

        Ok(self.rocket().configure(figment))
    }

    /// Start the HTTP transport server
    ///
    /// Runs until Rocket's built-in Ctrl+C handling shuts it down.
    pub async fn start(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let rocket = self.configured_rocket()?;

        info!(
            "HTTP transport listening on http://{}:{}{}",
            self.config.host, self.config.port, MCP_HTTP_PATH
        );

        rocket
            .launch()
            .await
            .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

        Ok(())
    }
}

/// CORS Fairing for Rocket
///
/// Adds CORS headers to all responses to allow browser access.
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "CORS Headers",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "GET, POST, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

/// Reply to a JSON-RPC message
#[derive(Responder)]
pub enum McpReply {
    /// Response to a request
    #[response(status = 200, content_type = "json")]
    Reply(Json<McpResponse>),
    /// Acknowledgement of a notification
    #[response(status = 202)]
    Accepted(()),
}

/// Handle MCP request via HTTP POST
///
/// Routes MCP JSON-RPC requests to the appropriate handlers based on method name.
#[post("/mcp", format = "json", data = "<request>")]
async fn handle_mcp_request(
    state: &State<HttpTransportState>,
    request: Result<Json<McpRequest>, json::Error<'_>>,
) -> McpReply {
    let request = match request {
        Ok(request) => request.into_inner(),
        Err(e) => {
            debug!(error = %e, "Malformed JSON-RPC message");
            return McpReply::Reply(Json(McpResponse::error(
                None,
                JSONRPC_PARSE_ERROR,
                format!("Parse error: {e}"),
            )));
        }
    };

    if request.method.starts_with(NOTIFICATION_PREFIX) {
        debug!(method = %request.method, "Notification received");
        return McpReply::Accepted(());
    }

    let response = match request.method.as_str() {
        "initialize" => handle_initialize(state, &request),
        "tools/list" => handle_tools_list(state, &request),
        "tools/call" => handle_tools_call(state, &request).await,
        "ping" => McpResponse::success(request.id.clone(), json!({})),
        _ => McpResponse::error(
            request.id.clone(),
            JSONRPC_METHOD_NOT_FOUND,
            format!("Unknown method: {}", request.method),
        ),
    };

    McpReply::Reply(Json(response))
}

/// Liveness probe
#[get("/health")]
fn handle_health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Handle the `initialize` method
fn handle_initialize(state: &HttpTransportState, request: &McpRequest) -> McpResponse {
    match serde_json::to_value(state.server.get_info()) {
        Ok(result) => McpResponse::success(request.id.clone(), result),
        Err(e) => McpResponse::error(
            request.id.clone(),
            JSONRPC_INTERNAL_ERROR,
            format!("Failed to serialize server info: {e}"),
        ),
    }
}

/// Handle the `tools/list` method
fn handle_tools_list(state: &HttpTransportState, request: &McpRequest) -> McpResponse {
    let tools = state
        .server
        .tools()
        .map_err(|e| e.message.to_string())
        .and_then(|tools| serde_json::to_value(tools).map_err(|e| e.to_string()));

    match tools {
        Ok(tools) => McpResponse::success(request.id.clone(), json!({ "tools": tools })),
        Err(message) => {
            error!(error = %message, "Failed to list tools");
            McpResponse::error(
                request.id.clone(),
                JSONRPC_INTERNAL_ERROR,
                format!("Failed to list tools: {message}"),
            )
        }
    }
}

/// Parse tool call parameters from the request
fn parse_tool_call_params(params: &Value) -> Result<CallToolRequestParams, (i32, &'static str)> {
    let tool_name = params
        .get("name")
        .and_then(Value::as_str)
        .ok_or((
            JSONRPC_INVALID_PARAMS,
            "Missing 'name' parameter for tools/call",
        ))?
        .to_string();

    let arguments = match params.get("arguments") {
        None | Some(Value::Null) => None,
        Some(Value::Object(arguments)) => Some(arguments.clone()),
        Some(_) => {
            return Err((
                JSONRPC_INVALID_PARAMS,
                "'arguments' for tools/call must be an object",
            ));
        }
    };

    Ok(CallToolRequestParams {
        name: tool_name.into(),
        arguments,
        task: None,
        meta: None,
    })
}

/// Handle the `tools/call` method
///
/// Failed NetBox calls come back as results with `isError`; only protocol
/// errors (unknown tool, bad arguments) become JSON-RPC errors.
async fn handle_tools_call(state: &HttpTransportState, request: &McpRequest) -> McpResponse {
    let Some(params) = &request.params else {
        return McpResponse::error(
            request.id.clone(),
            JSONRPC_INVALID_PARAMS,
            "Missing params for tools/call",
        );
    };

    let call_request = match parse_tool_call_params(params) {
        Ok(req) => req,
        Err((code, msg)) => return McpResponse::error(request.id.clone(), code, msg),
    };

    match state.server.call(call_request).await {
        Ok(result) => match serde_json::to_value(result) {
            Ok(result) => McpResponse::success(request.id.clone(), result),
            Err(e) => McpResponse::error(
                request.id.clone(),
                JSONRPC_INTERNAL_ERROR,
                format!("Failed to serialize tool result: {e}"),
            ),
        },
        Err(e) => {
            debug!(code = e.code.0, error = %e.message, "Tool call rejected");
            McpResponse::error(request.id.clone(), e.code.0, e.message.to_string())
        }
    }
}
