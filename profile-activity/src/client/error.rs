//! API client error types.

use std::convert::Infallible;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while talking to the GitHub API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport, HTTP status or decoding failure reported by octocrab.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// The request did not complete within the configured timeout.
    #[error("GitHub request to {route} timed out after {timeout:?}")]
    Timeout { route: String, timeout: Duration },

    /// The configured API base URI could not be parsed.
    #[error("Invalid API base URI '{uri}': {source}")]
    InvalidBaseUri {
        uri: String,
        #[source]
        source: http::uri::InvalidUri,
    },

    /// The token cannot be sent as an HTTP header value.
    #[error("Invalid token: {0}")]
    InvalidToken(#[from] http::header::InvalidHeaderValue),

    /// No TLS trust roots could be loaded for HTTPS connections.
    #[error("Failed to load TLS root certificates: {0}")]
    TlsRoots(#[source] std::io::Error),
}

impl From<Infallible> for ApiError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
