//! Configuration loader tests
//!
//! `figment::Jail` isolates the working directory and environment of each test.

use figment::Jail;
use nbx_infrastructure::config::{CliOverrides, ConfigLoader, LogLevel, TransportMode};
use secrecy::ExposeSecret;

const MINIMAL_TOML: &str = r#"
netbox_url = "https://netbox.example.com/"
netbox_token = "file-token"
"#;

fn load(loader: ConfigLoader) -> figment::error::Result<nbx_infrastructure::AppConfig> {
    loader.load().map_err(|e| e.to_string().into())
}

#[test]
fn test_defaults_apply_when_only_credentials_given() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.create_file("nbx.toml", MINIMAL_TOML)?;

        let config = load(ConfigLoader::new())?;

        assert_eq!(config.transport, TransportMode::Stdio);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8000);
        assert!(config.verify_ssl);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.netbox_timeout_secs, 30);
        Ok(())
    });
}

#[test]
fn test_environment_overrides_file() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.create_file("nbx.toml", MINIMAL_TOML)?;
        jail.set_env("NETBOX_TOKEN", "env-token");
        jail.set_env("TRANSPORT", "http");
        jail.set_env("PORT", "9001");
        jail.set_env("VERIFY_SSL", "false");
        jail.set_env("LOG_LEVEL", "debug");

        let config = load(ConfigLoader::new())?;

        let token = config.netbox_token.as_ref().map(|t| t.expose_secret().to_string());
        assert_eq!(token.as_deref(), Some("env-token"));
        assert_eq!(config.transport, TransportMode::Http);
        assert_eq!(config.port, 9001);
        assert!(!config.verify_ssl);
        assert_eq!(config.log_level, LogLevel::Debug);
        Ok(())
    });
}

#[test]
fn test_cli_overrides_environment() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("NETBOX_URL", "https://env.example.com/");
        jail.set_env("NETBOX_TOKEN", "env-token");
        jail.set_env("PORT", "9001");

        let overrides = CliOverrides {
            netbox_url: Some("https://cli.example.com/".to_string()),
            port: Some(9100),
            verify_ssl: Some(false),
            ..Default::default()
        };
        let config = load(ConfigLoader::new().with_overrides(overrides))?;

        assert_eq!(config.netbox_url.as_deref(), Some("https://cli.example.com/"));
        assert_eq!(config.port, 9100);
        assert!(!config.verify_ssl);
        let token = config.netbox_token.as_ref().map(|t| t.expose_secret().to_string());
        assert_eq!(token.as_deref(), Some("env-token"));
        Ok(())
    });
}

#[test]
fn test_explicit_config_path() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.create_file("custom.toml", &format!("{MINIMAL_TOML}\nport = 8123\n"))?;

        let config = load(ConfigLoader::new().with_config_path("custom.toml"))?;

        assert_eq!(config.port, 8123);
        Ok(())
    });
}

#[test]
fn test_missing_explicit_config_path_fails() {
    Jail::expect_with(|jail| {
        jail.clear_env();

        let err = ConfigLoader::new()
            .with_config_path("missing.toml")
            .load()
            .unwrap_err();

        assert!(err.to_string().contains("Configuration file not found"));
        Ok(())
    });
}

#[test]
fn test_missing_url_is_rejected() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("NETBOX_TOKEN", "token");

        let err = ConfigLoader::new().load().unwrap_err();

        assert!(err.to_string().contains("NETBOX_URL is required"));
        Ok(())
    });
}

#[test]
fn test_url_without_scheme_is_rejected() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("NETBOX_URL", "netbox.example.com");
        jail.set_env("NETBOX_TOKEN", "token");

        let err = ConfigLoader::new().load().unwrap_err();

        assert!(err.to_string().contains("NETBOX_URL"));
        Ok(())
    });
}

#[test]
fn test_missing_token_is_rejected() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("NETBOX_URL", "https://netbox.example.com/");

        let err = ConfigLoader::new().load().unwrap_err();

        assert!(err.to_string().contains("NETBOX_TOKEN is required"));
        Ok(())
    });
}

#[test]
fn test_invalid_transport_is_rejected() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.create_file("nbx.toml", MINIMAL_TOML)?;
        jail.set_env("TRANSPORT", "sse");

        assert!(ConfigLoader::new().load().is_err());
        Ok(())
    });
}

#[test]
fn test_port_zero_is_rejected() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.create_file("nbx.toml", &format!("{MINIMAL_TOML}\nport = 0\n"))?;

        let err = ConfigLoader::new().load().unwrap_err();

        assert!(err.to_string().contains("Port"));
        Ok(())
    });
}

fn set_credentials(jail: &mut Jail) {
    jail.set_env("NETBOX_URL", "https://netbox.example.com/");
    jail.set_env("NETBOX_TOKEN", "token");
}

#[test]
fn test_numeric_token_is_kept_verbatim() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.set_env("NETBOX_URL", "https://netbox.example.com/");
        jail.set_env("NETBOX_TOKEN", "0123456789");

        let config = load(ConfigLoader::new())?;

        let token = config.netbox_token.as_ref().map(|t| t.expose_secret().to_string());
        assert_eq!(token.as_deref(), Some("0123456789"));
        Ok(())
    });
}

#[test]
fn test_numeric_token_in_file() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.create_file(
            "nbx.toml",
            "netbox_url = \"https://netbox.example.com/\"\nnetbox_token = 42\n",
        )?;

        let config = load(ConfigLoader::new())?;

        let token = config.netbox_token.as_ref().map(|t| t.expose_secret().to_string());
        assert_eq!(token.as_deref(), Some("42"));
        Ok(())
    });
}

#[test]
fn test_boolean_flags_accept_common_spellings() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        set_credentials(jail);

        for value in ["False", "0", "no", "OFF"] {
            jail.set_env("VERIFY_SSL", value);
            assert!(!load(ConfigLoader::new())?.verify_ssl, "VERIFY_SSL={value}");
        }
        for value in ["TRUE", "1", "Yes", "on"] {
            jail.set_env("VERIFY_SSL", value);
            assert!(load(ConfigLoader::new())?.verify_ssl, "VERIFY_SSL={value}");
        }

        jail.set_env("LOG_JSON", "Yes");
        assert!(load(ConfigLoader::new())?.log_json);
        Ok(())
    });
}

#[test]
fn test_unrecognised_boolean_is_rejected() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        set_credentials(jail);
        jail.set_env("VERIFY_SSL", "maybe");

        assert!(ConfigLoader::new().load().is_err());
        Ok(())
    });
}

#[test]
fn test_http_host_must_be_bindable() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        set_credentials(jail);
        jail.set_env("TRANSPORT", "http");

        jail.set_env("HOST", "localhost");
        assert!(ConfigLoader::new().load().is_ok());

        jail.set_env("HOST", "::1");
        assert!(ConfigLoader::new().load().is_ok());

        jail.set_env("HOST", "netbox.internal");
        let err = ConfigLoader::new().load().unwrap_err();
        assert!(err.to_string().contains("Invalid host"));
        Ok(())
    });
}

#[test]
fn test_host_is_ignored_for_stdio() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        set_credentials(jail);
        jail.set_env("HOST", "build-agent-7");

        assert!(ConfigLoader::new().load().is_ok());
        Ok(())
    });
}

#[test]
fn test_config_source_reports_default_file() {
    Jail::expect_with(|jail| {
        jail.clear_env();
        jail.create_file("nbx.toml", MINIMAL_TOML)?;

        let source = ConfigLoader::new().config_source();

        assert_eq!(
            source.as_deref().and_then(|path| path.file_name()),
            Some(std::ffi::OsStr::new("nbx.toml"))
        );
        Ok(())
    });
}

#[test]
fn test_config_source_prefers_explicit_path() {
    let loader = ConfigLoader::new().with_config_path("custom.toml");

    assert_eq!(
        loader.config_source().as_deref(),
        Some(std::path::Path::new("custom.toml"))
    );
}
