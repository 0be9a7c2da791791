//! NetBox MCP Gateway
//!
//! Command line entry point. Flags override environment variables, which
//! override the configuration file.

use std::path::PathBuf;

use clap::Parser;
use nbx_infrastructure::config::{CliOverrides, LogLevel, TransportMode};
use nbx_server::run;

/// Command line interface for the NetBox MCP gateway
#[derive(Parser, Debug)]
#[command(name = "nbx-server")]
#[command(about = "NetBox MCP Gateway - expose NetBox to MCP clients as tools")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Base URL of the NetBox instance
    #[arg(long)]
    pub netbox_url: Option<String>,

    /// NetBox API token
    #[arg(long)]
    pub netbox_token: Option<String>,

    /// MCP transport: stdio or http
    #[arg(long)]
    pub transport: Option<TransportMode>,

    /// Bind address for the HTTP transport
    #[arg(long)]
    pub host: Option<String>,

    /// Bind port for the HTTP transport
    #[arg(long)]
    pub port: Option<u16>,

    /// Verify NetBox's TLS certificate
    #[arg(long, overrides_with = "no_verify_ssl")]
    pub verify_ssl: bool,

    /// Skip TLS certificate verification (testing only)
    #[arg(long, overrides_with = "verify_ssl")]
    pub no_verify_ssl: bool,

    /// DEBUG, INFO, WARNING, ERROR or CRITICAL
    #[arg(long)]
    pub log_level: Option<LogLevel>,
}

impl Cli {
    /// Flags given explicitly, as configuration overrides
    fn overrides(&self) -> CliOverrides {
        let verify_ssl = match (self.verify_ssl, self.no_verify_ssl) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };

        CliOverrides {
            netbox_url: self.netbox_url.clone(),
            netbox_token: self.netbox_token.clone(),
            transport: self.transport,
            host: self.host.clone(),
            port: self.port,
            verify_ssl,
            log_level: self.log_level,
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli.config.as_deref(), cli.overrides()).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
