use std::fs;

use viewcount::config::{Config, ConfigError};
use viewcount::store::Consistency;

/// Config::default() produces the documented defaults.
#[test]
fn default_values() {
    let config = Config::default();

    assert_eq!(config.service.bind_addr, "127.0.0.1:8787");
    assert_eq!(config.client.session_key_prefix, "viewed_");
    assert!(config.client.base_url.is_none());
    assert!(config.store.path.is_none());
    assert_eq!(config.store.consistency, Consistency::Strong);
}

#[test]
fn config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("viewcount/config.toml"));
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("does-not-exist.toml")).unwrap();
    assert_eq!(config.service.bind_addr, "127.0.0.1:8787");
}

#[test]
fn file_values_override_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[service]
bind_addr = "0.0.0.0:9000"

[client]
base_url = "https://counts.example.com"

[store]
path = "/var/lib/viewcount/counts.json"
consistency = "eventual"
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.service.bind_addr, "0.0.0.0:9000");
    assert_eq!(
        config.client.base_url.as_deref(),
        Some("https://counts.example.com")
    );
    // Unset fields keep their defaults.
    assert_eq!(config.client.session_key_prefix, "viewed_");
    assert_eq!(config.store.consistency, Consistency::Eventual);
    assert!(config
        .store
        .resolved_path()
        .ends_with("viewcount/counts.json"));
}

#[test]
fn invalid_bind_addr_fails_validation() {
    let mut config = Config::default();
    config.service.bind_addr = "not-an-address".to_string();

    match config.validate().unwrap_err() {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("Bind address"));
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn empty_session_prefix_fails_validation() {
    let mut config = Config::default();
    config.client.session_key_prefix = String::new();
    assert!(config.validate().is_err());
}

#[test]
fn empty_base_url_fails_validation() {
    let mut config = Config::default();
    config.client.base_url = Some(String::new());
    assert!(config.validate().is_err());
}

#[test]
fn parse_error_is_reported_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "this is not toml [[").unwrap();

    match Config::load_from(&path).unwrap_err() {
        ConfigError::ParseError { path: reported, .. } => {
            assert_eq!(reported, path);
        }
        other => panic!("Expected ParseError, got {:?}", other),
    }
}
