//! Client configuration for the message-queue service.

use std::time::Duration;

use url::Url;

use crate::error::ConfigurationError;

/// Default service endpoint values.
const DEFAULT_PROTOCOL: &str = "https";
const DEFAULT_HOST: &str = "mq-aws-us-east-1.iron.io";
const DEFAULT_PORT: u16 = 443;
const DEFAULT_API_VERSION: &str = "1";

/// Configuration for the message-queue client.
///
/// Required: an API token. A project id is also required for every queue
/// operation, but may be supplied after construction via
/// [`MqClient::set_project_id`](crate::MqClient::set_project_id); its absence
/// is detected before any network activity.
///
/// # Examples
///
/// ```
/// use mq_client_sdk::Config;
///
/// let config = Config::builder()
///     .token("my-token")
///     .project_id("my-project")
///     .build()?;
/// # Ok::<(), mq_client_sdk::ConfigurationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    token: String,
    project_id: Option<String>,
    protocol: String,
    host: String,
    port: u16,
    api_version: String,
    user_agent: String,
    timeout: Duration,
}

impl Config {
    /// Create a new builder for client configuration.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Get the API token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Resolve the active project id.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::MissingProjectId` if none is set.
    pub fn project_id(&self) -> Result<&str, ConfigurationError> {
        self.project_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or(ConfigurationError::MissingProjectId)
    }

    /// Switch the active project.
    ///
    /// An empty id leaves the current value untouched; the call fails only if
    /// no project id is resolvable afterwards.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::MissingProjectId` if no project id is set
    /// after the update.
    pub fn set_project_id(
        &mut self,
        project_id: impl Into<String>,
    ) -> Result<(), ConfigurationError> {
        let project_id = project_id.into();
        if !project_id.is_empty() {
            self.project_id = Some(project_id);
        }
        self.project_id().map(|_| ())
    }

    /// Get the user agent string sent with every request.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Get the request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Assemble the service base URL: `{protocol}://{host}:{port}/{api_version}/`.
    ///
    /// The trailing slash matters: operation paths are joined onto it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidEndpoint` if the parts do not form
    /// a valid URL.
    pub fn base_url(&self) -> Result<Url, ConfigurationError> {
        let endpoint = format!(
            "{}://{}:{}/{}/",
            self.protocol, self.host, self.port, self.api_version
        );
        Url::parse(&endpoint).map_err(|e| ConfigurationError::InvalidEndpoint {
            message: format!("{}: {}", endpoint, e),
        })
    }
}

/// Builder for constructing [`Config`] instances.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    token: Option<String>,
    project_id: Option<String>,
    protocol: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    api_version: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API token (required).
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the project id.
    pub fn project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    /// Set the endpoint protocol. Defaults to `https`.
    pub fn protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }

    /// Set the endpoint host. Defaults to the service's public endpoint.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the endpoint port. Defaults to 443.
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the API version path segment. Defaults to `1`.
    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    /// Set the user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the request timeout for the default transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the final configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::MissingToken` if no token was supplied.
    pub fn build(self) -> Result<Config, ConfigurationError> {
        let token = self
            .token
            .filter(|t| !t.is_empty())
            .ok_or(ConfigurationError::MissingToken)?;

        Ok(Config {
            token,
            project_id: self.project_id.filter(|id| !id.is_empty()),
            protocol: self.protocol.unwrap_or_else(|| DEFAULT_PROTOCOL.to_string()),
            host: self.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: self.port.unwrap_or(DEFAULT_PORT),
            api_version: self
                .api_version
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            user_agent: self
                .user_agent
                .unwrap_or_else(|| concat!("mq-client-sdk/", env!("CARGO_PKG_VERSION")).to_string()),
            timeout: self.timeout.unwrap_or(Duration::from_secs(30)),
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
