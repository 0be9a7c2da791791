//! HTTP response handling for NetBox calls

use nbx_domain::error::{Error, Result};
use reqwest::Response;
use serde_json::Value;
use tracing::debug;

use crate::error_ext::ErrorContext;

/// Turn a non-success response into [`Error::NetBoxApi`], keeping its body
pub async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    debug!(status = status.as_u16(), "NetBox request failed");
    Err(Error::netbox_api(status.as_u16(), body))
}

/// Check the status and parse the body as JSON
///
/// An empty body parses as `null`.
pub async fn check_and_parse(response: Response) -> Result<Value> {
    let response = check_status(response).await?;
    let text = response
        .text()
        .await
        .network_context("Failed to read NetBox response")?;

    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&text)?)
}
