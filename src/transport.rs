//! Transport seam between the client facade and the HTTP stack.
//!
//! The facade only ever talks to the [`Transport`] trait; the default
//! implementation wraps `reqwest`. Non-success status codes are not transport
//! failures — the facade classifies them after a response is obtained.

use async_trait::async_trait;
use bytes::Bytes;

use crate::config::Config;
use crate::error::{ConfigurationError, TransportError};
use crate::request::{ApiRequest, HttpMethod};

/// A raw HTTP response: status code plus unparsed body.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Unparsed response body.
    pub body: Bytes,
}

/// Sends wire-ready requests and returns raw responses.
///
/// Implement this to substitute the HTTP stack, e.g. for tests or for an
/// environment with its own connection handling.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue one request and wait for its response.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` only when no response was obtained
    /// (connection refused, timeout, TLS failure).
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, TransportError>;
}

/// Default [`Transport`] backed by a `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// Build the transport from client configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` if the underlying HTTP client cannot be
    /// created.
    pub fn new(config: &Config) -> Result<Self, ConfigurationError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ConfigurationError::InvalidEndpoint {
                message: format!("failed to create HTTP client: {}", e),
            })?;

        Ok(Self { http })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, TransportError> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.http.request(method, request.url.clone());
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(transport_error)?;

        Ok(RawResponse { status, body })
    }
}

fn transport_error(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Connection {
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "transport_tests.rs"]
mod tests;
