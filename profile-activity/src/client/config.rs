//! API client configuration.

use std::time::Duration;

/// Public GitHub API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Upper bound for a single request, from connecting to the last body byte.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for [`GitHubClient`](super::GitHubClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// REST base URI; GraphQL requests go to `{base_uri}/graphql`.
    base_uri: String,
    /// Optional bearer token. Requests are unauthenticated without one.
    token: Option<String>,
    /// Deadline applied to every request.
    timeout: Duration,
}

impl ClientConfig {
    /// Creates a configuration for the public API.
    ///
    /// An empty token is treated the same as no token.
    pub fn new(token: Option<String>) -> Self {
        Self {
            base_uri: DEFAULT_API_URL.to_string(),
            token: token.filter(|t| !t.is_empty()),
            timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Points the client at a different API host.
    pub fn with_base_uri(mut self, base_uri: impl Into<String>) -> Self {
        self.base_uri = base_uri.into();
        self
    }

    /// Sets the per-request deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the REST base URI.
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the configured token, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns the per-request deadline.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
