//! Error types for message-queue client operations.
//!
//! Each failure class gets its own type so callers can match on the concern
//! that failed: caller input, client configuration, the network, the service,
//! or the response body. The top-level [`Error`] composes them for the public
//! operation signatures.

use thiserror::Error;

/// Input validation errors.
///
/// Raised synchronously when constructing a [`Message`](crate::Message) with
/// invalid fields, always before any request is built or sent.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("Required field missing: {field}")]
    Required { field: String },

    /// A field value is out of the acceptable range.
    #[error("Value out of range for {field}: {message}")]
    OutOfRange { field: String, message: String },
}

/// Missing or unusable client configuration.
///
/// Raised before any network activity; a request is never attempted with an
/// incomplete configuration.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// No API token was supplied.
    #[error("Please set token")]
    MissingToken,

    /// No project id is resolvable for the operation.
    #[error("Please set project_id")]
    MissingProjectId,

    /// The protocol/host/port/api_version combination does not form a URL.
    #[error("Invalid service endpoint: {message}")]
    InvalidEndpoint { message: String },
}

/// Connection-level failures where no HTTP response was obtained.
///
/// Distinct from [`ApiError`]: a non-success status code means the service
/// answered and is never a transport error.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request timed out before a response arrived.
    #[error("Request timeout")]
    Timeout,

    /// Connection, TLS, or other transport failure.
    #[error("Connection failed: {message}")]
    Connection { message: String },
}

impl TransportError {
    /// Check if this error represents a transient condition that may succeed
    /// if retried at a higher layer. The client itself never retries.
    pub fn is_transient(&self) -> bool {
        true
    }
}

/// Non-success response from the message-queue service.
#[derive(Debug, Error)]
#[error("API request failed with status {status}: {message}")]
pub struct ApiError {
    /// HTTP status code returned by the service.
    pub status: u16,
    /// Human-readable description, taken from the response when available.
    pub message: String,
    /// Decoded error body, when the service returned JSON.
    pub body: Option<serde_json::Value>,
}

impl ApiError {
    /// Check if this error represents a transient condition that may succeed
    /// if retried at a higher layer. The client itself never retries.
    pub fn is_transient(&self) -> bool {
        self.status >= 500 || self.status == 429
    }
}

/// A success response whose body could not be decoded into the expected shape.
#[derive(Debug, Error)]
#[error("Failed to decode response body: {message}")]
pub struct ProtocolError {
    /// What was being decoded when the failure occurred.
    pub message: String,
    /// Underlying JSON decode failure.
    #[source]
    pub source: serde_json::Error,
}

/// Top-level error for all public client operations.
///
/// Every operation either returns a well-typed success value or exactly one
/// of these variants; there is no silent recovery and no error downgrading.
#[derive(Debug, Error)]
pub enum Error {
    /// Bad caller input, never sent over the wire.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Missing required client setup.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// No response was obtained from the service.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The service returned a non-success response.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The response could not be decoded into the expected shape.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

impl Error {
    /// Check if this error represents a transient condition that may succeed
    /// if retried at a higher layer.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Validation(_) => false,
            Self::Configuration(_) => false,
            Self::Transport(e) => e.is_transient(),
            Self::Api(e) => e.is_transient(),
            Self::Protocol(_) => false,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
