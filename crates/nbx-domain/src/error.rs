//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the NetBox MCP gateway
#[derive(Error, Debug)]
pub enum Error {
    /// Object type key not present in the registry
    #[error("Invalid object_type '{object_type}'. Must be one of:\n{valid_types}")]
    InvalidObjectType {
        /// The rejected key
        object_type: String,
        /// Listing of every valid key, one per line
        valid_types: String,
    },

    /// Filter key NetBox cannot evaluate
    #[error(
        "Invalid filter '{filter}': Multi-hop relationship traversal or invalid lookup suffix \
         not supported. Use direct field filters like 'site_id' or two-step queries."
    )]
    InvalidFilter {
        /// The rejected filter key
        filter: String,
    },

    /// Invalid argument provided to a tool
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// NetBox answered with a non-success status
    #[error("NetBox API error ({status}): {body}")]
    NetBoxApi {
        /// HTTP status code
        status: u16,
        /// Response body as returned by NetBox
        body: String,
    },

    /// Request never produced a response
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an invalid filter error
    pub fn invalid_filter<S: Into<String>>(filter: S) -> Self {
        Self::InvalidFilter {
            filter: filter.into(),
        }
    }

    /// Create an error for a non-success NetBox response
    pub fn netbox_api<S: Into<String>>(status: u16, body: S) -> Self {
        Self::NetBoxApi {
            status,
            body: body.into(),
        }
    }

    /// Create a network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
            source: None,
        }
    }

    /// Create a network error with source
    pub fn network_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Network {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn config_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl Error {
    /// Whether the error was caused by the caller's parameters
    ///
    /// Caller errors are reported as protocol errors; everything else is
    /// reported as a failed tool result.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidObjectType { .. } | Self::InvalidFilter { .. } | Self::InvalidArgument { .. }
        )
    }

    /// Whether the error came from talking to NetBox
    pub fn is_remote_error(&self) -> bool {
        matches!(self, Self::NetBoxApi { .. } | Self::Network { .. })
    }
}
