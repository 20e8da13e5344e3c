//! Tests for error display and transience classification.

use super::*;

#[test]
fn test_api_error_display_includes_status_and_message() {
    let error = ApiError {
        status: 404,
        message: "Queue not found".to_string(),
        body: None,
    };

    assert_eq!(
        error.to_string(),
        "API request failed with status 404: Queue not found"
    );
}

#[test]
fn test_api_error_transience_by_status() {
    let error = |status| ApiError {
        status,
        message: String::new(),
        body: None,
    };

    assert!(error(500).is_transient());
    assert!(error(503).is_transient());
    assert!(error(429).is_transient());
    assert!(!error(404).is_transient());
    assert!(!error(400).is_transient());
}

#[test]
fn test_transport_errors_are_transient() {
    assert!(TransportError::Timeout.is_transient());
    assert!(TransportError::Connection {
        message: "connection refused".to_string()
    }
    .is_transient());
}

#[test]
fn test_caller_side_errors_are_not_transient() {
    let validation: Error = ValidationError::Required {
        field: "body".to_string(),
    }
    .into();
    let configuration: Error = ConfigurationError::MissingProjectId.into();

    assert!(!validation.is_transient());
    assert!(!configuration.is_transient());
}

#[test]
fn test_top_level_error_display_is_transparent() {
    let error: Error = ConfigurationError::MissingProjectId.into();

    assert_eq!(error.to_string(), "Please set project_id");
}
