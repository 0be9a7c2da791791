//! Infrastructure layer constants
//!
//! Domain-specific constants are defined in `nbx_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "nbx.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "nbx";

/// Environment variables read as configuration keys (matched case-insensitively)
///
/// The token is read separately, see [`NETBOX_TOKEN_KEY`].
pub const CONFIG_ENV_KEYS: &[&str] = &[
    "netbox_url",
    "transport",
    "host",
    "port",
    "verify_ssl",
    "log_level",
    "log_json",
    "netbox_timeout_secs",
];

/// Configuration key and environment variable of the API token
pub const NETBOX_TOKEN_KEY: &str = "netbox_token";

/// Placeholder shown instead of secrets
pub const REDACTED: &str = "***REDACTED***";

// ============================================================================
// HTTP SERVER CONSTANTS
// ============================================================================

/// Default bind address for the HTTP transport
pub const DEFAULT_HTTP_HOST: &str = "127.0.0.1";

/// Default port for the HTTP transport
pub const DEFAULT_HTTP_PORT: u16 = 8000;

/// Bind addresses exposing the HTTP transport on every interface
pub const WILDCARD_HOSTS: &[&str] = &["0.0.0.0", "::", "[::]"];

/// Bind addresses only reachable from the local machine
pub const LOOPBACK_HOSTS: &[&str] = &["127.0.0.1", "localhost", "::1", "[::1]"];

/// Host name accepted in place of the IPv4 loopback address
pub const LOCALHOST: &str = "localhost";

// ============================================================================
// NETBOX CLIENT CONSTANTS
// ============================================================================

/// Default timeout for NetBox requests in seconds
pub const DEFAULT_NETBOX_TIMEOUT_SECS: u64 = 30;

/// Path of the REST API below the NetBox base URL
pub const NETBOX_API_PATH: &str = "api";

/// Authorization scheme NetBox expects for API tokens
pub const NETBOX_TOKEN_SCHEME: &str = "Token";

/// Content type for request and response bodies
pub const CONTENT_TYPE_JSON: &str = "application/json";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Environment variable overriding the tracing filter
pub const LOG_FILTER_ENV: &str = "NBX_LOG";

/// Crates whose logs are clamped to `warn` unless debugging
pub const NOISY_LOG_TARGETS: &[&str] = &["reqwest", "hyper", "hyper_util", "rocket", "rmcp"];
