//! Test utilities for nbx-server
//!
//! An in-memory [`NetBoxApi`] that records every call and answers from
//! canned responses keyed by endpoint.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use nbx_domain::error::{Error, Result};
use nbx_domain::ports::NetBoxApi;
use nbx_domain::query::QueryParams;
use nbx_server::McpServer;
use nbx_server::McpServerBuilder;
use rmcp::model::{CallToolResult, JsonObject};
use serde_json::{Value, json};

/// A call received by [`MockNetBox`]
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    Get {
        endpoint: String,
        params: Vec<(String, String)>,
    },
    Create {
        endpoint: String,
        data: Value,
    },
    Update {
        endpoint: String,
        id: u64,
        data: Value,
    },
    Delete {
        endpoint: String,
        id: u64,
    },
}

impl RecordedCall {
    pub fn endpoint(&self) -> &str {
        match self {
            Self::Get { endpoint, .. }
            | Self::Create { endpoint, .. }
            | Self::Update { endpoint, .. }
            | Self::Delete { endpoint, .. } => endpoint,
        }
    }

    /// First value of a query parameter of a GET call
    pub fn param(&self, key: &str) -> Option<&str> {
        match self {
            Self::Get { params, .. } => params
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }
}

/// Recording NetBox double
#[derive(Default)]
pub struct MockNetBox {
    calls: Mutex<Vec<RecordedCall>>,
    responses: HashMap<String, Value>,
    failures: HashMap<String, (u16, String)>,
    delete_not_confirmed: bool,
}

impl MockNetBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer GET calls on `endpoint` with `response`
    pub fn with_response(mut self, endpoint: &str, response: Value) -> Self {
        self.responses.insert(endpoint.to_string(), response);
        self
    }

    /// Fail every call on `endpoint` with an API error
    pub fn with_failure(mut self, endpoint: &str, status: u16, body: &str) -> Self {
        self.failures
            .insert(endpoint.to_string(), (status, body.to_string()));
        self
    }

    /// Answer deletes as NetBox does for a non-204 success
    pub fn without_delete_confirmation(mut self) -> Self {
        self.delete_not_confirmed = true;
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    pub fn last_call(&self) -> Option<RecordedCall> {
        self.calls().last().cloned()
    }

    fn record(&self, endpoint: &str, call: RecordedCall) -> Result<()> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
        match self.failures.get(endpoint) {
            Some((status, body)) => Err(Error::netbox_api(*status, body.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl NetBoxApi for MockNetBox {
    async fn get(&self, endpoint: &str, params: &QueryParams) -> Result<Value> {
        self.record(
            endpoint,
            RecordedCall::Get {
                endpoint: endpoint.to_string(),
                params: params.pairs().to_vec(),
            },
        )?;
        Ok(self
            .responses
            .get(endpoint)
            .cloned()
            .unwrap_or_else(|| json!({"count": 0, "next": null, "previous": null, "results": []})))
    }

    async fn create(&self, endpoint: &str, data: &Value) -> Result<Value> {
        self.record(
            endpoint,
            RecordedCall::Create {
                endpoint: endpoint.to_string(),
                data: data.clone(),
            },
        )?;
        let mut created = data.clone();
        if let Some(object) = created.as_object_mut() {
            object.insert("id".to_string(), json!(1));
        }
        Ok(created)
    }

    async fn update(&self, endpoint: &str, id: u64, data: &Value) -> Result<Value> {
        self.record(
            endpoint,
            RecordedCall::Update {
                endpoint: endpoint.to_string(),
                id,
                data: data.clone(),
            },
        )?;
        let mut updated = data.clone();
        if let Some(object) = updated.as_object_mut() {
            object.insert("id".to_string(), json!(id));
        }
        Ok(updated)
    }

    async fn delete(&self, endpoint: &str, id: u64) -> Result<bool> {
        self.record(
            endpoint,
            RecordedCall::Delete {
                endpoint: endpoint.to_string(),
                id,
            },
        )?;
        Ok(!self.delete_not_confirmed)
    }
}

/// Build a server on top of a mock, keeping a handle on the mock
pub fn server_with(mock: MockNetBox) -> (McpServer, Arc<MockNetBox>) {
    let mock = Arc::new(mock);
    let server = McpServerBuilder::new()
        .with_netbox_api(mock.clone())
        .build()
        .expect("server should build with a NetBox API");
    (server, mock)
}

/// Object map from a JSON literal
pub fn object(value: Value) -> JsonObject {
    value.as_object().cloned().unwrap_or_default()
}

/// Concatenated text content of a tool result
pub fn text_of(result: &CallToolResult) -> String {
    result
        .content
        .iter()
        .filter_map(|content| content.as_text().map(|text| text.text.clone()))
        .collect()
}

/// Tool result text parsed as JSON
pub fn json_of(result: &CallToolResult) -> Value {
    serde_json::from_str(&text_of(result)).expect("tool result should be JSON")
}
