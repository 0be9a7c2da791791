//! Unit tests for domain error types

use nbx_domain::Error;

#[test]
fn test_invalid_argument_error() {
    let error = Error::invalid_argument("limit must be positive");
    match error {
        Error::InvalidArgument { message } => assert_eq!(message, "limit must be positive"),
        _ => panic!("Expected InvalidArgument error"),
    }
}

#[test]
fn test_netbox_api_error_display() {
    let error = Error::netbox_api(400, r#"{"slug":["This field is required."]}"#);
    let display = error.to_string();
    assert!(display.contains("400"));
    assert!(display.contains("This field is required."));
}

#[test]
fn test_caller_and_remote_classification() {
    assert!(Error::invalid_filter("device__site_id").is_caller_error());
    assert!(Error::invalid_argument("x").is_caller_error());
    assert!(!Error::netbox_api(500, "boom").is_caller_error());

    assert!(Error::netbox_api(404, "missing").is_remote_error());
    assert!(Error::network("timed out").is_remote_error());
    assert!(!Error::internal("bug").is_remote_error());
}

#[test]
fn test_network_error_keeps_source() {
    let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
    let error = Error::network_with_source("connect failed", io);
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_json_error_from() {
    let parse = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let error: Error = parse.into();
    assert!(matches!(error, Error::Json { .. }));
}
