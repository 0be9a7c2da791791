//! Server Initialization
//!
//! Loads the configuration, sets up logging, builds the NetBox client and
//! starts the configured transport.
//!
//! # Transport Modes
//!
//! - **Stdio**: MCP over stdin/stdout (default)
//! - **Http**: JSON-RPC over HTTP POST on `host:port`
//!
//! # Configuration
//!
//! Transport mode can be set via:
//! - Config file: `transport = "http"`
//! - Environment variable: `TRANSPORT=http`
//! - Command line: `--transport http`

use std::path::Path;
use std::sync::Arc;

use nbx_infrastructure::config::{AppConfig, CliOverrides, ConfigLoader, TransportMode};
use nbx_infrastructure::logging::{init_logging, log_config_source, log_startup};
use nbx_infrastructure::netbox::{NetBoxClientConfig, NetBoxRestClient};
use tracing::info;

use crate::McpServer;
use crate::McpServerBuilder;
use crate::transport::http::{HttpTransport, HttpTransportConfig};
use crate::transport::stdio::StdioServerExt;

/// Boxed error returned by the startup sequence
pub type StartupError = Box<dyn std::error::Error + Send + Sync>;

/// Run the NetBox MCP gateway
///
/// This is the main entry point: configuration, logging, NetBox client,
/// MCP server, then the transport until it shuts down.
pub async fn run(config_path: Option<&Path>, overrides: CliOverrides) -> Result<(), StartupError> {
    let loader = config_loader(config_path, overrides);
    let config = loader.load()?;
    init_logging(&config)?;
    log_config_source(loader.config_source().as_deref());
    log_startup(&config);

    let server = create_mcp_server(&config)?;
    info!(
        transport = %config.transport,
        version = env!("CARGO_PKG_VERSION"),
        "Starting NetBox MCP gateway"
    );

    start_transport(server, &config).await
}

/// Load configuration from an optional path plus command line overrides
pub fn load_config(
    config_path: Option<&Path>,
    overrides: CliOverrides,
) -> Result<AppConfig, StartupError> {
    Ok(config_loader(config_path, overrides).load()?)
}

fn config_loader(config_path: Option<&Path>, overrides: CliOverrides) -> ConfigLoader {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    loader.with_overrides(overrides)
}

/// Create the MCP server on top of the NetBox REST client
pub fn create_mcp_server(config: &AppConfig) -> Result<McpServer, StartupError> {
    let client = NetBoxRestClient::new(NetBoxClientConfig::from_app_config(config)?)?;

    Ok(McpServerBuilder::new()
        .with_netbox_api(Arc::new(client))
        .build()?)
}

/// Start the transport selected by the configuration
async fn start_transport(server: McpServer, config: &AppConfig) -> Result<(), StartupError> {
    match config.transport {
        TransportMode::Stdio => server.serve_stdio().await,
        TransportMode::Http => {
            let http = HttpTransport::new(HttpTransportConfig::from_app_config(config), Arc::new(server));
            http.start().await
        }
    }
}
