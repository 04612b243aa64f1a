/*!
 * Tests for translator configuration and environment defaults
 */

use std::env;

use yartt::app_config::{RttConfig, API_KEY_ENV, ENDPOINT_ENV};

/// Test the defaults of a freshly built configuration
#[test]
fn test_new_shouldDefaultToEnglishSourceAndNoEndpoint() {
    let config = RttConfig::new("fr");

    assert_eq!(config.target_language, "fr");
    assert_eq!(config.source_language, "en");
    assert!(config.endpoint.is_none());
    assert!(config.api_key.is_none());
}

/// Test the builder-style overrides
#[test]
fn test_builders_shouldOverrideDefaults() {
    let config = RttConfig::new("de")
        .with_source_language("es")
        .with_endpoint("http://localhost:5000")
        .with_api_key("secret")
        .with_timeout_secs(5);

    assert_eq!(config.target_language, "de");
    assert_eq!(config.source_language, "es");
    assert_eq!(config.endpoint.as_deref(), Some("http://localhost:5000"));
    assert_eq!(config.api_key.as_deref(), Some("secret"));
    assert_eq!(config.timeout_secs, 5);
}

/// Test the one-time environment lookup
///
/// Environment mutation is process-global, so every from_env assertion
/// lives in this single test to avoid racing parallel tests.
#[test]
fn test_from_env_shouldReadEndpointAndKeyOnce() {
    env::set_var(ENDPOINT_ENV, "http://translate.local:5000");
    env::set_var(API_KEY_ENV, "env-key");

    let config = RttConfig::from_env("fr");
    assert_eq!(config.endpoint.as_deref(), Some("http://translate.local:5000"));
    assert_eq!(config.api_key.as_deref(), Some("env-key"));

    // Empty values behave like absent ones
    env::set_var(ENDPOINT_ENV, "");
    env::remove_var(API_KEY_ENV);

    let config = RttConfig::from_env("fr");
    assert!(config.endpoint.is_none());
    assert!(config.api_key.is_none());

    env::remove_var(ENDPOINT_ENV);
}

/// Test serde round-tripping with defaults applied
#[test]
fn test_deserialize_withMinimalJson_shouldApplyDefaults() {
    let config: RttConfig = serde_json::from_str(r#"{ "target_language": "ja" }"#).unwrap();

    assert_eq!(config.target_language, "ja");
    assert_eq!(config.source_language, "en");
    assert!(config.endpoint.is_none());
    assert!(config.api_key.is_none());
    assert_eq!(config.timeout_secs, 30);
}
