//! Pure mapping from queue operations to wire-ready API requests.
//!
//! Nothing in this module performs I/O. Every operation maps to a method,
//! a fully assembled URL (path and query), a per-call immutable header set,
//! and an optional JSON body.

use serde::Serialize;
use url::Url;

use crate::config::Config;
use crate::error::{ConfigurationError, Error, ProtocolError};
use crate::message::Message;

/// HTTP method for an API request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    /// Get the method as its wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A wire-ready API request.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Full request URL including query parameters.
    pub url: Url,
    /// Header set for this call. Assembled fresh per request; never shared.
    pub headers: Vec<(String, String)>,
    /// JSON body, for operations that carry one.
    pub body: Option<serde_json::Value>,
}

/// A queue operation to be mapped onto the wire.
#[derive(Debug, Clone)]
pub(crate) enum Operation<'a> {
    /// List queues in the project. `page` 0 means the first page.
    ListQueues { page: u32 },
    /// Get queue information, including its size.
    GetQueue { queue: &'a str },
    /// Push a batch of messages. Always an array on the wire, even for one.
    PushMessages {
        queue: &'a str,
        messages: &'a [Message],
    },
    /// Pull up to `count` messages. `count` 1 (or 0) uses the server default.
    PullMessages { queue: &'a str, count: u32 },
    /// Delete a single message by id.
    DeleteMessage {
        queue: &'a str,
        message_id: &'a str,
    },
}

#[derive(Serialize)]
struct PushBody<'a> {
    messages: &'a [Message],
}

/// Build the wire request for an operation.
///
/// Fails with `ConfigurationError` before any URL work if no project id is
/// resolvable, so a misconfigured client never reaches the network.
pub(crate) fn build(config: &Config, operation: Operation<'_>) -> Result<ApiRequest, Error> {
    let project_id = config.project_id()?.to_string();
    let mut url = config.base_url()?;

    // Queue names and message ids are opaque caller text; pushing them as
    // path segments percent-encodes spaces, slashes, and other reserved
    // characters.
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| ConfigurationError::InvalidEndpoint {
                message: "endpoint cannot be a base URL".to_string(),
            })?;
        segments
            .pop_if_empty()
            .extend(["projects", project_id.as_str(), "queues"]);

        match &operation {
            Operation::ListQueues { .. } => {}
            Operation::GetQueue { queue } => {
                segments.push(queue);
            }
            Operation::PushMessages { queue, .. } | Operation::PullMessages { queue, .. } => {
                segments.push(queue).push("messages");
            }
            Operation::DeleteMessage { queue, message_id } => {
                segments.push(queue).push("messages").push(message_id);
            }
        }
    }

    match &operation {
        // `page` starts at 1; omitting it means the first page.
        Operation::ListQueues { page } if *page > 0 => {
            url.query_pairs_mut().append_pair("page", &page.to_string());
        }
        // The server default of one message applies when `n` is omitted.
        Operation::PullMessages { count, .. } if *count > 1 => {
            url.query_pairs_mut().append_pair("n", &count.to_string());
        }
        _ => {}
    }

    let (method, body) = match operation {
        Operation::ListQueues { .. } | Operation::GetQueue { .. } => (HttpMethod::Get, None),
        Operation::PullMessages { .. } => (HttpMethod::Get, None),
        Operation::PushMessages { messages, .. } => {
            let body =
                serde_json::to_value(PushBody { messages }).map_err(|e| ProtocolError {
                    message: "failed to encode push request body".to_string(),
                    source: e,
                })?;
            (HttpMethod::Post, Some(body))
        }
        Operation::DeleteMessage { .. } => (HttpMethod::Delete, None),
    };

    Ok(ApiRequest {
        method,
        url,
        headers: headers_for(config),
        body,
    })
}

/// Assemble the immutable header set for one call.
fn headers_for(config: &Config) -> Vec<(String, String)> {
    vec![
        (
            "Authorization".to_string(),
            format!("OAuth {}", config.token()),
        ),
        ("Content-Type".to_string(), "application/json".to_string()),
        ("User-Agent".to_string(), config.user_agent().to_string()),
    ]
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
