use bellows::config::{BASE_URL_ENV, BellowsConfig, ConfigError};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let config = BellowsConfig::default();

    assert_eq!(config.section.root_id, "section");
    assert_eq!(config.section.empty_suffix, "Empty");
    assert_eq!(config.section.marker_class, "unwell");
    assert_eq!(config.section.hidden_class, "hidden");
    assert_eq!(config.section.form_name, "formItem");
    assert_eq!(config.section.submit_class, "btn-primary");
    assert_eq!(config.section.success_message, "Saved");
    assert!(config.section.guard_in_flight);
    assert_eq!(config.http.base_url, "http://127.0.0.1:8080");
    assert!(!config.http.insecure_tls);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".bellows.toml");
    fs::write(
        &path,
        r#"
[section]
root_id = "portal"
success_message = "Configuration stored"

[http]
insecure_tls = true
"#,
    )
    .unwrap();

    let config = BellowsConfig::from_file(&path).unwrap();

    assert_eq!(config.section.root_id, "portal");
    assert_eq!(config.section.success_message, "Configuration stored");
    assert_eq!(config.section.form_name, "formItem");
    assert!(config.http.insecure_tls);
    assert_eq!(config.http.base_url, "http://127.0.0.1:8080");
}

#[test]
fn test_from_file_missing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let err = BellowsConfig::from_file(&path).unwrap_err();

    assert!(matches!(err, ConfigError::NotFound(_)));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn test_invalid_toml_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[section\nroot_id = ").unwrap();

    assert!(matches!(
        BellowsConfig::load(&path),
        Err(ConfigError::ParseError(_))
    ));
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();

    let config = BellowsConfig::load(dir.path().join("none.toml")).unwrap();

    assert_eq!(config.section.root_id, "section");
    assert!(config.section.guard_in_flight);
}

#[test]
fn test_env_overrides_base_url() {
    let mut config = BellowsConfig::default();

    envmnt::set(BASE_URL_ENV, "https://admin.example.test/");
    config.apply_env();
    envmnt::remove(BASE_URL_ENV);

    assert_eq!(config.http.base_url, "https://admin.example.test/");
}
