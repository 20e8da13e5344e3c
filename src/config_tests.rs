//! Tests for client configuration.

use super::*;
use crate::error::ConfigurationError;

#[test]
fn test_defaults_match_service_endpoint() {
    let config = Config::builder().token("t").build().unwrap();
    let base = config.base_url().unwrap();

    assert_eq!(base.scheme(), "https");
    assert_eq!(base.host_str(), Some("mq-aws-us-east-1.iron.io"));
    assert_eq!(base.port_or_known_default(), Some(443));
    assert_eq!(base.path(), "/1/");
}

#[test]
fn test_custom_endpoint() {
    let config = Config::builder()
        .token("t")
        .protocol("http")
        .host("localhost")
        .port(8080)
        .api_version("3")
        .build()
        .unwrap();

    assert_eq!(
        config.base_url().unwrap().as_str(),
        "http://localhost:8080/3/"
    );
}

#[test]
fn test_missing_token_is_rejected_at_build() {
    assert!(matches!(
        Config::builder().project_id("p").build(),
        Err(ConfigurationError::MissingToken)
    ));
    assert!(matches!(
        Config::builder().token("").build(),
        Err(ConfigurationError::MissingToken)
    ));
}

#[test]
fn test_project_id_may_be_absent_at_build() {
    let config = Config::builder().token("t").build().unwrap();

    assert!(matches!(
        config.project_id(),
        Err(ConfigurationError::MissingProjectId)
    ));
}

#[test]
fn test_set_project_id_switches_active_project() {
    let mut config = Config::builder().token("t").project_id("first").build().unwrap();

    config.set_project_id("second").unwrap();
    assert_eq!(config.project_id().unwrap(), "second");
}

#[test]
fn test_set_project_id_empty_keeps_previous_value() {
    let mut config = Config::builder().token("t").project_id("first").build().unwrap();

    config.set_project_id("").unwrap();
    assert_eq!(config.project_id().unwrap(), "first");
}

#[test]
fn test_set_project_id_empty_without_previous_value_fails() {
    let mut config = Config::builder().token("t").build().unwrap();

    assert!(matches!(
        config.set_project_id(""),
        Err(ConfigurationError::MissingProjectId)
    ));
}

#[test]
fn test_default_user_agent_and_timeout() {
    let config = Config::builder().token("t").build().unwrap();

    assert!(config.user_agent().starts_with("mq-client-sdk/"));
    assert_eq!(config.timeout(), Duration::from_secs(30));
}

#[test]
fn test_invalid_endpoint_is_a_configuration_error() {
    let config = Config::builder()
        .token("t")
        .protocol("not a scheme")
        .build()
        .unwrap();

    assert!(matches!(
        config.base_url(),
        Err(ConfigurationError::InvalidEndpoint { .. })
    ));
}
