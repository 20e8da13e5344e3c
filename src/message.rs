//! Message value type and its wire representation.

use serde::Serialize;

use crate::error::ValidationError;

/// Maximum allowed `expires_in` value: 30 days, in seconds.
pub const MAX_EXPIRES_IN: u32 = 2_592_000;

/// One queue item and its delivery options.
///
/// A `Message` is a value, not a handle to server state: the service assigns
/// identity (a message id) on acceptance. Validation happens at construction
/// time, never at send time.
///
/// Serialization is the wire shape: `body` is always present; `timeout`,
/// `delay`, and `expires_in` appear only when explicitly set. An explicit
/// zero for `timeout` or `delay` is meaningful and is serialized — the
/// service applies its own defaults (60 s timeout, 7-day expiry) only when a
/// key is omitted entirely.
///
/// # Examples
///
/// ```
/// use mq_client_sdk::Message;
///
/// let message = Message::new("Hello world")?;
/// let message = Message::new("Test Message")?
///     .with_timeout(120)
///     .with_delay(2)
///     .with_expires_in(2 * 24 * 3600)?; // 2 days
/// # Ok::<(), mq_client_sdk::ValidationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    body: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    timeout: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    delay: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    expires_in: Option<u32>,
}

impl Message {
    /// Create a message with the given body and all delivery options unset.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Required` if the body is empty.
    pub fn new(body: impl Into<String>) -> Result<Self, ValidationError> {
        let body = body.into();
        if body.is_empty() {
            return Err(ValidationError::Required {
                field: "body".to_string(),
            });
        }

        Ok(Self {
            body,
            timeout: None,
            delay: None,
            expires_in: None,
        })
    }

    /// Set the processing timeout, in seconds.
    ///
    /// After the timeout expires a pulled item is placed back on the queue.
    /// Zero is a valid setting, distinct from leaving the timeout unset.
    pub fn with_timeout(mut self, timeout: u32) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the delivery delay, in seconds.
    ///
    /// The item will not be available on the queue until this many seconds
    /// have passed. Zero is a valid setting, distinct from leaving the delay
    /// unset.
    pub fn with_delay(mut self, delay: u32) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set how long, in seconds, to keep the item on the queue before it is
    /// deleted.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::OutOfRange` if the value exceeds
    /// [`MAX_EXPIRES_IN`] (30 days). The check runs here, at the point of
    /// setting, not at send time.
    pub fn with_expires_in(mut self, expires_in: u32) -> Result<Self, ValidationError> {
        if expires_in > MAX_EXPIRES_IN {
            return Err(ValidationError::OutOfRange {
                field: "expires_in".to_string(),
                message: format!("can't be greater than {}", MAX_EXPIRES_IN),
            });
        }

        self.expires_in = Some(expires_in);
        Ok(self)
    }

    /// Get the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Get the processing timeout, if explicitly set.
    pub fn timeout(&self) -> Option<u32> {
        self.timeout
    }

    /// Get the delivery delay, if explicitly set.
    pub fn delay(&self) -> Option<u32> {
        self.delay
    }

    /// Get the expiry, if explicitly set.
    pub fn expires_in(&self) -> Option<u32> {
        self.expires_in
    }
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
