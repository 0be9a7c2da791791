//! Logging Tests

use nbx_infrastructure::config::{AppConfig, LogLevel, TransportMode};
use nbx_infrastructure::logging::{filter_directives, startup_warnings};

#[test]
fn test_info_clamps_http_crates() {
    let directives = filter_directives(LogLevel::Info);

    assert!(directives.starts_with("info,"));
    assert!(directives.contains("reqwest=warn"));
    assert!(directives.contains("rocket=warn"));
}

#[test]
fn test_debug_leaves_http_crates_alone() {
    assert_eq!(filter_directives(LogLevel::Debug), "debug");
}

#[test]
fn test_critical_uses_error_filter() {
    assert!(filter_directives(LogLevel::Critical).starts_with("error,"));
}

#[test]
fn test_no_warnings_for_defaults() {
    assert!(startup_warnings(&AppConfig::default()).is_empty());
}

#[test]
fn test_disabled_tls_verification_warns() {
    let config = AppConfig {
        verify_ssl: false,
        ..Default::default()
    };
    let warnings = startup_warnings(&config);

    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("SSL certificate verification is disabled"));
}

#[test]
fn test_wildcard_http_bind_warns() {
    let config = AppConfig {
        transport: TransportMode::Http,
        host: "0.0.0.0".to_string(),
        ..Default::default()
    };
    let warnings = startup_warnings(&config);

    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("all network interfaces"));
}

#[test]
fn test_wildcard_host_ignored_for_stdio() {
    let config = AppConfig {
        host: "0.0.0.0".to_string(),
        ..Default::default()
    };
    assert!(startup_warnings(&config).is_empty());
}
