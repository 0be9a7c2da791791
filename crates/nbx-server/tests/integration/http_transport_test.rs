//! JSON-RPC over HTTP with Rocket's local client

use std::sync::Arc;

use nbx_server::transport::{HttpTransport, HttpTransportConfig, McpRequest, McpResponse};
use rocket::http::{ContentType, Status};
use rocket::local::asynchronous::Client;
use serde_json::{Value, json};

use crate::test_utils::{MockNetBox, server_with};

async fn client_with(mock: MockNetBox) -> Client {
    let (server, _) = server_with(mock);
    let transport = HttpTransport::new(HttpTransportConfig::localhost(8000), Arc::new(server));
    Client::tracked(transport.rocket())
        .await
        .expect("Failed to create test client")
}

async fn post(client: &Client, body: String) -> (Status, String) {
    let response = client
        .post("/mcp")
        .header(ContentType::JSON)
        .body(body)
        .dispatch()
        .await;
    let status = response.status();
    (status, response.into_string().await.unwrap_or_default())
}

async fn rpc(client: &Client, method: &str, params: Option<Value>) -> McpResponse {
    let request = McpRequest {
        method: method.to_string(),
        params,
        id: Some(json!(1)),
    };
    let (status, body) = post(client, serde_json::to_string(&request).unwrap()).await;
    assert_eq!(status, Status::Ok);
    serde_json::from_str(&body).expect("Parse response")
}

#[tokio::test]
async fn initialize_reports_server_info() {
    let client = client_with(MockNetBox::new()).await;

    let response = rpc(&client, "initialize", Some(json!({}))).await;

    let result = response.result.unwrap();
    assert_eq!(result["protocolVersion"], "2024-11-05");
    assert_eq!(result["serverInfo"]["name"], "NetBox MCP Gateway");
    assert!(result["capabilities"]["tools"].is_object());
}

#[tokio::test]
async fn tools_list_includes_schemas_and_annotations() {
    let client = client_with(MockNetBox::new()).await;

    let response = rpc(&client, "tools/list", None).await;

    assert!(response.error.is_none());
    let result = response.result.unwrap();
    let tools = result["tools"].as_array().unwrap();
    let get_objects = tools
        .iter()
        .find(|tool| tool["name"] == "netbox_get_objects")
        .unwrap();
    assert_eq!(get_objects["inputSchema"]["type"], "object");
    assert_eq!(get_objects["annotations"]["readOnlyHint"], true);
}

#[tokio::test]
async fn tools_call_returns_content() {
    let client = client_with(MockNetBox::new().with_response(
        "dcim/sites",
        json!({"count": 1, "results": [{"id": 1}]}),
    ))
    .await;

    let response = rpc(
        &client,
        "tools/call",
        Some(json!({"name": "netbox_get_objects", "arguments": {"object_type": "dcim.site"}})),
    )
    .await;

    let result = response.result.unwrap();
    assert_eq!(result["isError"], false);
    let text = result["content"][0]["text"].as_str().unwrap();
    let body: Value = serde_json::from_str(text).unwrap();
    assert_eq!(body["count"], 1);
}

#[tokio::test]
async fn remote_failure_is_a_result_not_an_rpc_error() {
    let client = client_with(MockNetBox::new().with_failure("dcim/sites", 500, "oops")).await;

    let response = rpc(
        &client,
        "tools/call",
        Some(json!({"name": "netbox_get_objects", "arguments": {"object_type": "dcim.site"}})),
    )
    .await;

    assert!(response.error.is_none());
    assert_eq!(response.result.unwrap()["isError"], true);
}

#[tokio::test]
async fn unknown_tool_is_an_rpc_error() {
    let client = client_with(MockNetBox::new()).await;

    let response = rpc(
        &client,
        "tools/call",
        Some(json!({"name": "netbox_nope", "arguments": {}})),
    )
    .await;

    let error = response.error.unwrap();
    assert_eq!(error.code, -32602);
    assert!(error.message.contains("netbox_nope"));
}

#[tokio::test]
async fn tools_call_without_name_is_rejected() {
    let client = client_with(MockNetBox::new()).await;

    let response = rpc(&client, "tools/call", Some(json!({"arguments": {}}))).await;

    assert_eq!(response.error.unwrap().code, -32602);
}

#[tokio::test]
async fn unknown_method_is_method_not_found() {
    let client = client_with(MockNetBox::new()).await;

    let response = rpc(&client, "resources/list", None).await;

    assert_eq!(response.error.unwrap().code, -32601);
}

#[tokio::test]
async fn ping_echoes_request_id() {
    let client = client_with(MockNetBox::new()).await;

    let response = rpc(&client, "ping", None).await;

    assert!(response.error.is_none());
    assert_eq!(response.id, Some(json!(1)));
}

#[tokio::test]
async fn notifications_are_accepted_without_body() {
    let client = client_with(MockNetBox::new()).await;

    let (status, body) = post(
        &client,
        json!({"jsonrpc": "2.0", "method": "notifications/initialized"}).to_string(),
    )
    .await;

    assert_eq!(status, Status::Accepted);
    assert!(body.is_empty());
}

#[tokio::test]
async fn malformed_json_is_a_parse_error() {
    let client = client_with(MockNetBox::new()).await;

    let (status, body) = post(&client, "{not json".to_string()).await;

    assert_eq!(status, Status::Ok);
    let response: McpResponse = serde_json::from_str(&body).unwrap();
    assert_eq!(response.error.unwrap().code, -32700);
}

#[tokio::test]
async fn health_probe_and_cors_headers() {
    let client = client_with(MockNetBox::new()).await;

    let response = client.get("/health").dispatch().await;

    assert_eq!(response.status(), Status::Ok);
    assert_eq!(
        response.headers().get_one("Access-Control-Allow-Origin"),
        Some("*")
    );
    let body: Value = serde_json::from_str(&response.into_string().await.unwrap()).unwrap();
    assert_eq!(body["status"], "ok");
}

fn transport_on(host: &str) -> HttpTransport {
    let (server, _) = server_with(MockNetBox::new());
    let config = HttpTransportConfig {
        host: host.to_string(),
        ..HttpTransportConfig::localhost(8000)
    };
    HttpTransport::new(config, Arc::new(server))
}

#[tokio::test]
async fn host_names_resolve_to_bind_addresses() {
    let hosts = [("localhost", "127.0.0.1"), ("[::]", "::"), ("0.0.0.0", "0.0.0.0")];
    for (host, expected) in hosts {
        let rocket = transport_on(host)
            .configured_rocket()
            .expect("host should resolve")
            .ignite()
            .await
            .expect("Rocket should accept the bind address");

        assert_eq!(
            rocket.config().address,
            expected.parse::<std::net::IpAddr>().unwrap(),
            "{host}"
        );
    }
}

#[test]
fn unresolvable_host_is_rejected_before_launch() {
    let Err(error) = transport_on("netbox.internal").configured_rocket() else {
        panic!("host name should be rejected");
    };

    assert!(error.to_string().contains("Invalid host"));
}
