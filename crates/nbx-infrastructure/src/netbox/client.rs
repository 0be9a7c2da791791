//! NetBox REST API client

use std::time::Duration;

use async_trait::async_trait;
use nbx_domain::error::{Error, Result};
use nbx_domain::ports::NetBoxApi;
use nbx_domain::query::QueryParams;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::debug;

use crate::config::AppConfig;
use crate::constants::{CONTENT_TYPE_JSON, NETBOX_API_PATH, NETBOX_TOKEN_SCHEME};
use crate::netbox::response::{check_and_parse, check_status};

/// Connection settings for [`NetBoxRestClient`]
#[derive(Debug, Clone)]
pub struct NetBoxClientConfig {
    /// NetBox base URL, with or without trailing slash
    pub base_url: String,
    /// API token
    pub token: SecretString,
    /// Verify the server certificate
    pub verify_ssl: bool,
    /// Per-request timeout
    pub timeout: Duration,
    /// `User-Agent` header value
    pub user_agent: String,
}

impl NetBoxClientConfig {
    /// Create settings with default timeout and certificate verification on
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: SecretString::from(token.into()),
            verify_ssl: true,
            timeout: AppConfig::default().netbox_timeout(),
            user_agent: default_user_agent(),
        }
    }

    /// Derive client settings from validated application configuration
    pub fn from_app_config(config: &AppConfig) -> Result<Self> {
        let base_url = config
            .netbox_url
            .clone()
            .ok_or_else(|| Error::config("NETBOX_URL is required"))?;
        let token = config
            .netbox_token
            .clone()
            .ok_or_else(|| Error::config("NETBOX_TOKEN is required"))?;

        Ok(Self {
            base_url,
            token,
            verify_ssl: config.verify_ssl,
            timeout: config.netbox_timeout(),
            user_agent: default_user_agent(),
        })
    }
}

fn default_user_agent() -> String {
    format!("nbx/{}", env!("CARGO_PKG_VERSION"))
}

/// NetBox REST client
///
/// Sends `Authorization: Token <token>` on every request and addresses
/// objects as `<base>/api/<endpoint>/[<id>/]`.
#[derive(Clone)]
pub struct NetBoxRestClient {
    api_root: String,
    timeout: Duration,
    http_client: Client,
}

impl NetBoxRestClient {
    /// Build a client from connection settings
    pub fn new(config: NetBoxClientConfig) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!(
            "{NETBOX_TOKEN_SCHEME} {}",
            config.token.expose_secret()
        ))
        .map_err(|e| Error::config_with_source("NETBOX_TOKEN is not a valid header value", e))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
        headers.insert(ACCEPT, HeaderValue::from_static(CONTENT_TYPE_JSON));

        let http_client = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .danger_accept_invalid_certs(!config.verify_ssl)
            .build()
            .map_err(|e| Error::config_with_source("Failed to build NetBox HTTP client", e))?;

        Ok(Self {
            api_root: format!(
                "{}/{NETBOX_API_PATH}",
                config.base_url.trim_end_matches('/')
            ),
            timeout: config.timeout,
            http_client,
        })
    }

    /// URL of a list endpoint, or of one object when `id` is given
    pub fn build_url(&self, endpoint: &str, id: Option<u64>) -> String {
        let endpoint = endpoint.trim_matches('/');
        match id {
            Some(id) => format!("{}/{endpoint}/{id}/", self.api_root),
            None => format!("{}/{endpoint}/", self.api_root),
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<reqwest::Response> {
        request.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::network_with_source(
                    format!("NetBox request timed out after {:?}", self.timeout),
                    e,
                )
            } else {
                Error::network_with_source(format!("NetBox request failed: {e}"), e)
            }
        })
    }
}

#[async_trait]
impl NetBoxApi for NetBoxRestClient {
    async fn get(&self, endpoint: &str, params: &QueryParams) -> Result<Value> {
        let url = self.build_url(endpoint, None);
        debug!(%url, params = params.len(), "GET");
        let response = self
            .send(self.http_client.get(&url).query(params.pairs()))
            .await?;
        check_and_parse(response).await
    }

    async fn create(&self, endpoint: &str, data: &Value) -> Result<Value> {
        let url = self.build_url(endpoint, None);
        debug!(%url, "POST");
        let response = self.send(self.http_client.post(&url).json(data)).await?;
        check_and_parse(response).await
    }

    async fn update(&self, endpoint: &str, id: u64, data: &Value) -> Result<Value> {
        let url = self.build_url(endpoint, Some(id));
        debug!(%url, "PATCH");
        let response = self.send(self.http_client.patch(&url).json(data)).await?;
        check_and_parse(response).await
    }

    async fn delete(&self, endpoint: &str, id: u64) -> Result<bool> {
        let url = self.build_url(endpoint, Some(id));
        debug!(%url, "DELETE");
        let response = self.send(self.http_client.delete(&url)).await?;
        let response = check_status(response).await?;
        Ok(response.status() == StatusCode::NO_CONTENT)
    }
}
