//! Message-queue client facade.
//!
//! `MqClient` orchestrates message validation, request building, the
//! transport collaborator, and response decoding. It is stateless across
//! calls apart from its held configuration, issues at most one request per
//! operation, and never retries.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{ApiError, Error, ProtocolError};
use crate::message::Message;
use crate::request::{self, Operation};
use crate::transport::{RawResponse, ReqwestTransport, Transport};

/// Service acceptance response for pushed messages.
#[derive(Debug, Clone, Deserialize)]
pub struct PushResponse {
    /// Server-assigned ids, one per pushed message, in order.
    pub ids: Vec<String>,
    /// Human-readable confirmation.
    #[serde(default)]
    pub msg: String,
}

/// A message pulled from a queue.
///
/// Only identity and body are modeled; any further fields the service
/// returns (timeout, delay, ...) are passed through in `extra`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReceivedMessage {
    /// Server-assigned message id, used for deletion.
    pub id: String,
    /// Message body as pushed.
    pub body: String,
    /// Remaining response fields, passed through undecoded.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct PullResponse {
    messages: Vec<ReceivedMessage>,
}

/// Client for a hosted message-queue service.
///
/// Each public operation issues at most one HTTP request and returns either a
/// well-typed success value or exactly one error from the crate's taxonomy.
/// The client is stateless across calls; held configuration is set at
/// construction and only changes through an explicit
/// [`set_project_id`](MqClient::set_project_id).
///
/// # Examples
///
/// ```no_run
/// use mq_client_sdk::{Config, Message, MqClient};
///
/// # async fn example() -> Result<(), mq_client_sdk::Error> {
/// let config = Config::builder()
///     .token("my-token")
///     .project_id("my-project")
///     .build()?;
/// let mut client = MqClient::builder(config).build()?;
///
/// client.post_message("test_queue", Message::new("Test Message")?).await?;
/// if let Some(message) = client.get_message("test_queue").await? {
///     client.delete_message("test_queue", &message.id).await?;
/// }
/// # Ok(())
/// # }
/// ```
pub struct MqClient {
    config: Config,
    transport: Arc<dyn Transport>,
}

impl MqClient {
    /// Create a new builder for constructing a client.
    pub fn builder(config: Config) -> MqClientBuilder {
        MqClientBuilder {
            config,
            transport: None,
        }
    }

    /// Get the client configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Switch the active project.
    ///
    /// Must not be called concurrently with in-flight operations; the held
    /// configuration is effectively immutable per logical session.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::MissingProjectId` (as [`Error`]) if no
    /// project id is resolvable after the update.
    pub fn set_project_id(&mut self, project_id: impl Into<String>) -> Result<(), Error> {
        self.config.set_project_id(project_id)?;
        Ok(())
    }

    /// List queues in the active project.
    ///
    /// Page numbering starts at 1; `page` of 0 requests the first page with
    /// no pagination parameter. The response is the service's decoded queue
    /// list, passed through unmodified.
    pub async fn list_queues(&self, page: u32) -> Result<serde_json::Value, Error> {
        self.dispatch(Operation::ListQueues { page }).await
    }

    /// Get information about a queue, including its size.
    ///
    /// The response is the service's decoded queue info, passed through
    /// unmodified.
    pub async fn get_queue(&self, queue_name: &str) -> Result<serde_json::Value, Error> {
        self.dispatch(Operation::GetQueue { queue: queue_name }).await
    }

    /// Push a single message onto a queue.
    ///
    /// The message travels as a one-element batch; the service assigns the
    /// message id on acceptance.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use mq_client_sdk::{Message, MqClient};
    /// # async fn example(client: &MqClient) -> Result<(), mq_client_sdk::Error> {
    /// let accepted = client
    ///     .post_message("test_queue", Message::new("Hello world")?)
    ///     .await?;
    /// println!("assigned id: {}", accepted.ids[0]);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` if no project id is set, `TransportError`
    /// or `ApiError` on request failure, and `ProtocolError` if the
    /// acceptance response cannot be decoded. Message validation failures
    /// happen earlier, at [`Message`] construction.
    pub async fn post_message(
        &self,
        queue_name: &str,
        message: Message,
    ) -> Result<PushResponse, Error> {
        let messages = [message];
        self.dispatch(Operation::PushMessages {
            queue: queue_name,
            messages: &messages,
        })
        .await
    }

    /// Push multiple messages onto a queue as one batch request.
    ///
    /// Messages are validated values, so a batch can only be assembled from
    /// entries that already passed validation; there is no partial
    /// submission.
    pub async fn post_messages(
        &self,
        queue_name: &str,
        messages: &[Message],
    ) -> Result<PushResponse, Error> {
        self.dispatch(Operation::PushMessages {
            queue: queue_name,
            messages,
        })
        .await
    }

    /// Pull up to `count` messages from a queue.
    ///
    /// Returns `None` when the queue was polled successfully but no messages
    /// were available — distinct from any failure. A `count` of 1 (or 0)
    /// omits the count parameter and the server default of one message
    /// applies. Pulling does not remove a message; pair with
    /// [`delete_message`](MqClient::delete_message) once processed.
    pub async fn get_messages(
        &self,
        queue_name: &str,
        count: u32,
    ) -> Result<Option<Vec<ReceivedMessage>>, Error> {
        let response: PullResponse = self
            .dispatch(Operation::PullMessages {
                queue: queue_name,
                count,
            })
            .await?;

        if response.messages.is_empty() {
            Ok(None)
        } else {
            Ok(Some(response.messages))
        }
    }

    /// Pull a single message from a queue.
    ///
    /// Returns `None` when no message is available; never returns a list.
    pub async fn get_message(
        &self,
        queue_name: &str,
    ) -> Result<Option<ReceivedMessage>, Error> {
        let messages = self.get_messages(queue_name, 1).await?;
        Ok(messages.and_then(|mut m| {
            if m.is_empty() {
                None
            } else {
                Some(m.remove(0))
            }
        }))
    }

    /// Delete a message from a queue.
    ///
    /// The id typically comes from a prior pull. Deleting an unknown or
    /// expired id is a service-level `ApiError`, not a client-side
    /// precondition.
    pub async fn delete_message(
        &self,
        queue_name: &str,
        message_id: &str,
    ) -> Result<serde_json::Value, Error> {
        self.dispatch(Operation::DeleteMessage {
            queue: queue_name,
            message_id,
        })
        .await
    }

    /// Shared pipeline: build, send, classify, decode.
    async fn dispatch<T: DeserializeOwned>(&self, operation: Operation<'_>) -> Result<T, Error> {
        let request = request::build(&self.config, operation)?;
        debug!(method = %request.method, url = %request.url, "dispatching API request");

        let response = self.transport.send(&request).await?;
        debug!(status = response.status, "received API response");

        if !(200..300).contains(&response.status) {
            let error = api_error(&response);
            warn!(status = response.status, message = %error.message, "API request failed");
            return Err(error.into());
        }

        serde_json::from_slice(&response.body)
            .map_err(|e| {
                ProtocolError {
                    message: format!(
                        "unexpected response shape for {} {}",
                        request.method,
                        request.url.path()
                    ),
                    source: e,
                }
                .into()
            })
    }
}

impl std::fmt::Debug for MqClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MqClient")
            .field("config", &self.config)
            .field("transport", &"<Transport>")
            .finish()
    }
}

/// Classify a non-success response, keeping the decoded error body when the
/// service returned JSON.
fn api_error(response: &RawResponse) -> ApiError {
    let body: Option<serde_json::Value> = serde_json::from_slice(&response.body).ok();

    let message = body
        .as_ref()
        .and_then(|b| b.get("msg"))
        .and_then(|m| m.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| {
            let text = String::from_utf8_lossy(&response.body);
            let text = text.trim();
            if text.is_empty() {
                "unable to read error body".to_string()
            } else {
                text.to_string()
            }
        });

    ApiError {
        status: response.status,
        message,
        body,
    }
}

/// Builder for constructing [`MqClient`] instances.
pub struct MqClientBuilder {
    config: Config,
    transport: Option<Arc<dyn Transport>>,
}

impl MqClientBuilder {
    /// Substitute the transport implementation.
    ///
    /// If not set, a [`ReqwestTransport`] is built from the configuration.
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` (as [`Error`]) if the default transport
    /// cannot be created.
    pub fn build(self) -> Result<MqClient, Error> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(&self.config)?),
        };

        Ok(MqClient {
            config: self.config,
            transport,
        })
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
