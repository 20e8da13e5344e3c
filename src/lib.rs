//! # MQ Client SDK
//!
//! Client library for a hosted message-queue service: enqueue, retrieve, and
//! delete messages on named queues, and list the queues belonging to a
//! project, over the service's HTTP(S) API.
//!
//! This SDK provides:
//! - [`Message`] construction with validation and unset-vs-zero field
//!   semantics on the wire
//! - [`MqClient`] with the queue operations: list, info, push one/many,
//!   pull one/many, delete
//! - a typed error taxonomy separating caller input, configuration,
//!   transport, service, and decoding failures
//! - a [`Transport`] seam for substituting the HTTP stack in tests
//!
//! The client performs no retries and owns no background work; resilience
//! belongs to a higher layer.
//!
//! # Examples
//!
//! ```no_run
//! use mq_client_sdk::{Config, Message, MqClient};
//!
//! # async fn example() -> Result<(), mq_client_sdk::Error> {
//! let config = Config::builder()
//!     .token("my-token")
//!     .project_id("my-project")
//!     .build()?;
//! let client = MqClient::builder(config).build()?;
//!
//! client
//!     .post_message("test_queue", Message::new("Test Message")?)
//!     .await?;
//!
//! if let Some(message) = client.get_message("test_queue").await? {
//!     println!("pulled: {}", message.body);
//!     client.delete_message("test_queue", &message.id).await?;
//! }
//! # Ok(())
//! # }
//! ```

// Public modules
pub mod client;
pub mod config;
pub mod error;
pub mod message;
pub mod request;
pub mod transport;

// Re-export commonly used types at crate root for convenience
pub use client::{MqClient, MqClientBuilder, PushResponse, ReceivedMessage};
pub use config::{Config, ConfigBuilder};
pub use error::{
    ApiError, ConfigurationError, Error, ProtocolError, TransportError, ValidationError,
};
pub use message::{Message, MAX_EXPIRES_IN};
pub use request::{ApiRequest, HttpMethod};
pub use transport::{RawResponse, ReqwestTransport, Transport};
