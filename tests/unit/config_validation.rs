use statement_exporter::config::{AppConfig, ConfigError, DEFAULT_API_URL};
use std::io::Write;

fn write_config(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_complete_config() {
    let file = write_config(
        r#"{
            "api-token": "secret",
            "profile": "Jane Doe",
            "locale": "pl",
            "pdf-locale": "en",
            "currency": "EUR"
        }"#,
    );

    let config = AppConfig::load(file.path()).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.profile, "Jane Doe");
    assert_eq!(config.api_url, DEFAULT_API_URL);
}

#[test]
fn test_missing_keys_reported_in_order() {
    let file = write_config(r#"{ "locale": "pl" }"#);
    let config = AppConfig::load(file.path()).unwrap();

    // api-token is the first required key, so it is reported first
    assert!(matches!(
        config.validate(),
        Err(ConfigError::MissingKey("api-token"))
    ));
}

#[test]
fn test_unreadable_file_is_io_error() {
    let err = AppConfig::load("/nonexistent/config.json").unwrap_err();
    assert!(matches!(err, ConfigError::IoError(_)));
}

#[test]
fn test_malformed_json_is_parse_error() {
    let file = write_config("{ not json");
    let err = AppConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}
