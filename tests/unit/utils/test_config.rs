use cmdbuild_client::config::Config;
use cmdbuild_client::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use cmdbuild_client::utils::config::{get_env_or_default, get_env_or_none};
use std::env;

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("CMDB_TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("CMDB_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("CMDB_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("CMDB_TEST_VAR_INVALID", "not_a_number");
        let result: u64 = get_env_or_default("CMDB_TEST_VAR_INVALID", 99);
        assert_eq!(result, 99);
        env::remove_var("CMDB_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_none_with_missing_var() {
    unsafe {
        env::remove_var("CMDB_TEST_MISSING_VAR");
    }
    let result: Option<String> = get_env_or_none("CMDB_TEST_MISSING_VAR");
    assert!(result.is_none());
}

// The only test in this binary touching CMDBUILD_* variables.
#[test]
fn test_config_new_reads_environment() {
    unsafe {
        env::set_var("CMDBUILD_URL", "http://cmdb.internal:8080/cmdbuild");
        env::set_var("CMDBUILD_USERNAME", "operator");
        env::set_var("CMDBUILD_PASSWORD", "s3cret");
        env::set_var("CMDBUILD_TIMEOUT", "12");
    }

    let config = Config::new();
    assert_eq!(config.rest_api.base_url, "http://cmdb.internal:8080/cmdbuild");
    assert_eq!(config.credentials.username, "operator");
    assert_eq!(config.credentials.password, "s3cret");
    assert_eq!(config.rest_api.timeout, 12);
    assert!(config.validate().is_ok());

    unsafe {
        env::remove_var("CMDBUILD_URL");
        env::remove_var("CMDBUILD_USERNAME");
        env::remove_var("CMDBUILD_PASSWORD");
        env::remove_var("CMDBUILD_TIMEOUT");
    }

    let config = Config::new();
    assert_eq!(config.rest_api.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.rest_api.timeout, DEFAULT_TIMEOUT_SECS);
    assert!(config.credentials.username.is_empty());
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization_roundtrip() {
    let config = Config::with_credentials("http://cmdb/cmdbuild", "admin", "secret");
    let text = serde_json::to_string(&config).unwrap();
    let back: Config = serde_json::from_str(&text).unwrap();
    assert_eq!(config, back);
}
