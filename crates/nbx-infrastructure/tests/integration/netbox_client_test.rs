//! NetBox REST client against a mock server

use mockito::{Matcher, Server};
use nbx_domain::error::Error;
use nbx_domain::ports::NetBoxApi;
use nbx_domain::query::QueryParams;
use nbx_infrastructure::netbox::{NetBoxClientConfig, NetBoxRestClient};
use serde_json::json;
use std::time::Duration;
use tokio::net::TcpListener;

const TOKEN: &str = "0123456789abcdef";

fn client_for(server: &Server) -> NetBoxRestClient {
    NetBoxRestClient::new(NetBoxClientConfig::new(server.url(), TOKEN))
        .expect("Failed to create NetBox client")
}

#[tokio::test]
async fn test_get_sends_token_and_repeated_query_keys() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/dcim/devices/")
        .match_header("authorization", "Token 0123456789abcdef")
        .match_query(Matcher::Exact("site_id=1&site_id=2&limit=5".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"count": 1, "results": [{"id": 7}]}).to_string())
        .create_async()
        .await;

    let mut params = QueryParams::new();
    params.push("site_id", "1");
    params.push("site_id", "2");
    params.set("limit", "5");

    let body = client_for(&server)
        .get("dcim/devices", &params)
        .await
        .expect("GET should succeed");

    assert_eq!(body["count"], 1);
    assert_eq!(body["results"][0]["id"], 7);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_single_object_by_path() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/ipam/prefixes/12/")
        .with_status(200)
        .with_body(r#"{"id": 12, "prefix": "10.0.0.0/24"}"#)
        .create_async()
        .await;

    let body = client_for(&server)
        .get("ipam/prefixes/12", &QueryParams::new())
        .await
        .expect("GET should succeed");

    assert_eq!(body["prefix"], "10.0.0.0/24");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_posts_json_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/dcim/sites/")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"name": "HQ", "slug": "hq", "status": "active"})))
        .with_status(201)
        .with_body(r#"{"id": 3, "name": "HQ"}"#)
        .create_async()
        .await;

    let body = client_for(&server)
        .create("dcim/sites", &json!({"name": "HQ", "slug": "hq", "status": "active"}))
        .await
        .expect("POST should succeed");

    assert_eq!(body["id"], 3);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_update_patches_object_url() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PATCH", "/api/dcim/sites/3/")
        .match_body(Matcher::Json(json!({"description": "Main office"})))
        .with_status(200)
        .with_body(r#"{"id": 3, "description": "Main office"}"#)
        .create_async()
        .await;

    let body = client_for(&server)
        .update("dcim/sites", 3, &json!({"description": "Main office"}))
        .await
        .expect("PATCH should succeed");

    assert_eq!(body["description"], "Main office");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_reports_no_content_as_deleted() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/api/dcim/cables/9/")
        .with_status(204)
        .create_async()
        .await;

    let deleted = client_for(&server)
        .delete("dcim/cables", 9)
        .await
        .expect("DELETE should succeed");

    assert!(deleted);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_with_other_success_status_is_not_confirmed() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("DELETE", "/api/dcim/cables/9/")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let deleted = client_for(&server)
        .delete("dcim/cables", 9)
        .await
        .expect("DELETE should succeed");

    assert!(!deleted);
}

#[tokio::test]
async fn test_error_status_keeps_body() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/ipam/vlans/")
        .with_status(400)
        .with_body(r#"{"vid": ["Ensure this value is less than or equal to 4094."]}"#)
        .create_async()
        .await;

    let err = client_for(&server)
        .create("ipam/vlans", &json!({"name": "bad", "vid": 5000}))
        .await
        .unwrap_err();

    match err {
        Error::NetBoxApi { status, body } => {
            assert_eq!(status, 400);
            assert!(body.contains("4094"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_not_found_is_a_remote_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/dcim/devices/999/")
        .with_status(404)
        .with_body(r#"{"detail": "Not found."}"#)
        .create_async()
        .await;

    let err = client_for(&server)
        .get("dcim/devices/999", &QueryParams::new())
        .await
        .unwrap_err();

    assert!(err.is_remote_error());
    assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn test_unreachable_server_is_a_network_error() {
    let client = NetBoxRestClient::new(NetBoxClientConfig::new("http://127.0.0.1:1", TOKEN))
        .expect("Failed to create NetBox client");

    let err = client
        .get("dcim/sites", &QueryParams::new())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Network { .. }));
}

#[tokio::test]
async fn test_silent_server_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to port 0");
    let address = listener.local_addr().expect("Failed to read local address");
    let silent = tokio::spawn(async move {
        let (_socket, _) = listener.accept().await.expect("Failed to accept");
        tokio::time::sleep(Duration::from_secs(5)).await;
    });

    let config = NetBoxClientConfig {
        timeout: Duration::from_millis(200),
        ..NetBoxClientConfig::new(format!("http://{address}"), TOKEN)
    };
    let err = NetBoxRestClient::new(config)
        .expect("Failed to create NetBox client")
        .get("dcim/sites", &QueryParams::new())
        .await
        .unwrap_err();

    match err {
        Error::Network { message, .. } => assert!(message.contains("timed out"), "{message}"),
        other => panic!("unexpected error: {other:?}"),
    }
    silent.abort();
}
