//! NetBox API Port
//!
//! One method per HTTP verb the gateway issues. Endpoints are paths relative
//! to the API root (e.g. `dcim/devices`); implementations own URL building,
//! authentication and status handling.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::query::QueryParams;

/// Access to a NetBox instance's REST API
#[async_trait]
pub trait NetBoxApi: Send + Sync {
    /// `GET` a list or a single object
    ///
    /// `endpoint` may carry an object id suffix (`dcim/devices/7`).
    async fn get(&self, endpoint: &str, params: &QueryParams) -> Result<Value>;

    /// `POST` a new object and return it as stored by NetBox
    async fn create(&self, endpoint: &str, data: &Value) -> Result<Value>;

    /// `PATCH` an existing object and return its new state
    async fn update(&self, endpoint: &str, id: u64, data: &Value) -> Result<Value>;

    /// `DELETE` an object
    ///
    /// Returns `true` when NetBox confirms the deletion with `204 No Content`.
    async fn delete(&self, endpoint: &str, id: u64) -> Result<bool>;
}

/// Shared handle to a [`NetBoxApi`] implementation
pub type SharedNetBoxApi = Arc<dyn NetBoxApi>;
