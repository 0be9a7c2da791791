//! Tool listing, schemas and annotations

use nbx_server::tools::create_tool_list;
use rmcp::ServerHandler;
use serde_json::Value;

use crate::test_utils::{MockNetBox, server_with};

fn tool_names() -> Vec<String> {
    create_tool_list()
        .unwrap()
        .into_iter()
        .map(|tool| tool.name.to_string())
        .collect()
}

#[test]
fn lists_generic_and_per_object_tools() {
    let names = tool_names();

    assert_eq!(names.len(), 7 + 69);
    for expected in [
        "netbox_get_objects",
        "netbox_get_object_by_id",
        "netbox_get_changelogs",
        "netbox_search_objects",
        "netbox_create_object",
        "netbox_update_object",
        "netbox_delete_object",
        "netbox_create_site",
        "netbox_update_virtual_machine",
        "netbox_delete_cable",
        "netbox_create_rack_role",
    ] {
        assert!(names.iter().any(|name| name == expected), "missing {expected}");
    }
}

#[test]
fn read_tools_are_read_only() {
    let tools = create_tool_list().unwrap();
    let get_objects = tools
        .iter()
        .find(|tool| tool.name == "netbox_get_objects")
        .unwrap();
    let annotations = get_objects.annotations.as_ref().unwrap();

    assert_eq!(annotations.read_only_hint, Some(true));
    assert_eq!(annotations.destructive_hint, Some(false));
}

#[test]
fn delete_tools_are_destructive_and_updates_idempotent() {
    let tools = create_tool_list().unwrap();

    for tool in &tools {
        let annotations = tool.annotations.as_ref().unwrap();
        if tool.name.starts_with("netbox_delete_") {
            assert_eq!(annotations.destructive_hint, Some(true), "{}", tool.name);
            assert_eq!(annotations.read_only_hint, Some(false), "{}", tool.name);
        }
        if tool.name.starts_with("netbox_update_") {
            assert_eq!(annotations.idempotent_hint, Some(true), "{}", tool.name);
            assert_eq!(annotations.destructive_hint, Some(false), "{}", tool.name);
        }
    }
}

#[test]
fn schemas_are_objects_with_properties() {
    for tool in create_tool_list().unwrap() {
        let schema = Value::Object(tool.input_schema.as_ref().clone());
        assert_eq!(schema["type"], "object", "{}", tool.name);
        assert!(schema["properties"].is_object(), "{}", tool.name);
    }
}

#[test]
fn create_vlan_schema_requires_name_and_vid() {
    let tools = create_tool_list().unwrap();
    let create_vlan = tools
        .iter()
        .find(|tool| tool.name == "netbox_create_vlan")
        .unwrap();
    let required = create_vlan.input_schema["required"].as_array().unwrap();

    assert!(required.iter().any(|field| field == "name"));
    assert!(required.iter().any(|field| field == "vid"));
    assert!(!required.iter().any(|field| field == "status"));
}

#[test]
fn server_info_advertises_tools() {
    let (server, _) = server_with(MockNetBox::new());
    let info = server.get_info();

    assert!(info.capabilities.tools.is_some());
    assert!(
        info.instructions
            .unwrap_or_default()
            .contains("netbox_get_objects")
    );
}
