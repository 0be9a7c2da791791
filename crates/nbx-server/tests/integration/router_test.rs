//! Tool dispatch through McpServer

use rmcp::model::{CallToolRequestParams, ErrorCode};
use serde_json::{Value, json};

use crate::test_utils::{MockNetBox, RecordedCall, json_of, object, server_with};

fn call(name: &str, arguments: Option<Value>) -> CallToolRequestParams {
    CallToolRequestParams {
        name: name.to_string().into(),
        arguments: arguments.map(object),
        task: None,
        meta: None,
    }
}

#[tokio::test]
async fn routes_generic_read_tool() {
    let (server, mock) = server_with(MockNetBox::new());

    let result = server
        .call(call(
            "netbox_get_objects",
            Some(json!({"object_type": "ipam.prefix", "filters": {"status": "active"}})),
        ))
        .await
        .unwrap();

    assert_eq!(result.is_error, Some(false));
    let last = mock.last_call().unwrap();
    assert_eq!(last.endpoint(), "ipam/prefixes");
    assert_eq!(last.param("status"), Some("active"));
}

#[tokio::test]
async fn routes_per_object_tool() {
    let (server, mock) = server_with(MockNetBox::new());

    let result = server
        .call(call(
            "netbox_create_vlan",
            Some(json!({"name": "users", "vid": 120})),
        ))
        .await
        .unwrap();

    assert_eq!(json_of(&result)["vid"], 120);
    assert_eq!(
        mock.last_call(),
        Some(RecordedCall::Create {
            endpoint: "ipam/vlans".to_string(),
            data: json!({"name": "users", "vid": 120, "status": "active"}),
        })
    );
}

#[tokio::test]
async fn changelogs_accept_missing_arguments() {
    let (server, mock) = server_with(MockNetBox::new());

    server
        .call(call("netbox_get_changelogs", None))
        .await
        .unwrap();

    assert_eq!(mock.last_call().unwrap().endpoint(), "core/object-changes");
}

#[tokio::test]
async fn unknown_tool_is_invalid_params() {
    let (server, mock) = server_with(MockNetBox::new());

    let error = server
        .call(call("netbox_reboot_device", Some(json!({}))))
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::INVALID_PARAMS);
    assert!(error.message.contains("Unknown tool: netbox_reboot_device"));
    assert!(mock.calls().is_empty());
}

#[tokio::test]
async fn mistyped_arguments_are_invalid_params() {
    let (server, mock) = server_with(MockNetBox::new());

    let error = server
        .call(call(
            "netbox_get_object_by_id",
            Some(json!({"object_type": "dcim.site", "object_id": "seven"})),
        ))
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::INVALID_PARAMS);
    assert!(error.message.starts_with("Invalid arguments"));
    assert!(mock.calls().is_empty());
}

#[tokio::test]
async fn update_site_requires_site_id() {
    let (server, mock) = server_with(MockNetBox::new());

    let error = server
        .call(call(
            "netbox_update_site",
            Some(json!({"object_id": 3, "data": {"name": "x"}})),
        ))
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::INVALID_PARAMS);
    assert!(mock.calls().is_empty());
}
