//! GitHub REST and GraphQL access.
//!
//! Every request either yields decoded data or an [`ApiError`] that has
//! already been logged and counted. Callers are expected to treat an error
//! as "no data for this query" rather than abort.

mod config;
mod error;
mod models;

pub use config::{ClientConfig, DEFAULT_API_URL, DEFAULT_REQUEST_TIMEOUT};
pub use error::ApiError;
pub use models::{
    ContributedRepository, ContributionConnection, ContributionNode, ContributionsCollection,
    ContributionsResponse, ContributionsUser, GraphQlResponse, MergedPullRequest, Release,
    Repository, RepositoryContributions, RepositoryOwner, Tag,
};

use crate::activity::ActivityWindow;
use http::header::{HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use http::Uri;
use hyper_rustls::HttpsConnectorBuilder;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use octocrab::service::middleware::base_uri::BaseUriLayer;
use octocrab::service::middleware::extra_headers::ExtraHeadersLayer;
use octocrab::{AuthState, OctoBody, Octocrab, OctocrabBuilder};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Media type requested from the REST API.
const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";

/// User agent sent with every request.
const USER_AGENT_HEADER: &str = "GitHub-Profile-Updater";

/// Repositories requested per listing (single page).
const REPOSITORIES_PER_PAGE: &str = "100";

/// Commits requested per repository (single page).
const COMMITS_PER_PAGE: &str = "100";

/// Releases inspected per repository.
const RELEASES_PER_PAGE: &str = "10";

/// Tags inspected when no release qualifies.
const TAGS_PER_PAGE: &str = "5";

/// Pull request contributions for a user, grouped by repository.
const CONTRIBUTIONS_QUERY: &str = r#"
{
  user(login: LOGIN) {
    contributionsCollection {
      pullRequestContributionsByRepository(maxRepositories: 50) {
        repository {
          nameWithOwner
          url
          isPrivate
          owner {
            login
          }
        }
        contributions(first: 10) {
          nodes {
            pullRequest {
              title
              url
              mergedAt
              state
            }
          }
        }
      }
    }
  }
}
"#;

/// Thin wrapper around [`Octocrab`] that logs and counts failed requests.
pub struct GitHubClient {
    octocrab: Octocrab,
    timeout: Duration,
    failed_requests: AtomicUsize,
}

impl GitHubClient {
    /// Builds a client from the provided configuration.
    ///
    /// Every request carries exactly one `Accept` and one `User-Agent`
    /// header, must finish within the configured timeout and is never
    /// retried. A bearer token is attached only when one is configured.
    ///
    /// The service stack is assembled by hand because octocrab's default
    /// builder always adds its own `User-Agent` next to any custom one.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the base URI or token is invalid, or if no TLS
    /// root certificates can be loaded.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let base_uri: Uri = config
            .base_uri()
            .parse()
            .map_err(|source| ApiError::InvalidBaseUri {
                uri: config.base_uri().to_string(),
                source,
            })?;

        let connector = HttpsConnectorBuilder::new()
            .with_native_roots()
            .map_err(ApiError::TlsRoots)?
            .https_or_http()
            .enable_http1()
            .build();
        let http: Client<_, OctoBody> = Client::builder(TokioExecutor::new()).build(connector);

        let octocrab = OctocrabBuilder::new_empty()
            .with_service(http)
            .with_layer(&BaseUriLayer::new(base_uri))
            .with_layer(&ExtraHeadersLayer::new(Arc::new(request_headers(
                config.token(),
            )?)))
            .with_auth(AuthState::None)
            .build()?;

        Ok(Self {
            octocrab,
            timeout: config.timeout(),
            failed_requests: AtomicUsize::new(0),
        })
    }

    /// Returns the underlying octocrab client.
    pub fn octocrab(&self) -> &Octocrab {
        &self.octocrab
    }

    /// Deadline applied to each request.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Number of requests that failed since the client was created.
    #[must_use]
    pub fn failed_requests(&self) -> usize {
        self.failed_requests.load(Ordering::Relaxed)
    }

    /// Performs a REST `GET` and decodes the JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failures, non-2xx statuses and
    /// undecodable bodies. The failure is logged before returning.
    pub async fn get_json<T, P>(&self, route: &str, params: Option<&P>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        debug!(route, "GET");
        self.with_deadline(route, self.octocrab.get::<T, _, P>(route, params))
            .await
    }

    /// Posts a single GraphQL query string and decodes the JSON body.
    ///
    /// # Errors
    ///
    /// Same conditions as [`GitHubClient::get_json`].
    pub async fn graphql<T>(&self, query: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        debug!("POST /graphql");
        let body = serde_json::json!({ "query": query });
        self.with_deadline("/graphql", self.octocrab.graphql(&body))
            .await
    }

    /// Lists up to 100 repositories owned by `username`, newest push first.
    ///
    /// # Errors
    ///
    /// See [`GitHubClient::get_json`].
    pub async fn owned_repositories(&self, username: &str) -> Result<Vec<Repository>, ApiError> {
        let route = format!("/users/{username}/repos");
        let params = [
            ("per_page", REPOSITORIES_PER_PAGE),
            ("type", "owner"),
            ("sort", "pushed"),
            ("direction", "desc"),
        ];
        self.get_json(&route, Some(&params[..])).await
    }

    /// Counts the commits (up to 100) made to `full_name` inside the window.
    ///
    /// # Errors
    ///
    /// See [`GitHubClient::get_json`].
    pub async fn commit_count_since(
        &self,
        full_name: &str,
        window: &ActivityWindow,
    ) -> Result<usize, ApiError> {
        let route = format!("/repos/{full_name}/commits");
        let since = window.cutoff_iso();
        let params = [("since", since.as_str()), ("per_page", COMMITS_PER_PAGE)];
        let commits: Vec<IgnoredAny> = self.get_json(&route, Some(&params[..])).await?;
        Ok(commits.len())
    }

    /// Lists the 10 most recent releases of `full_name`.
    ///
    /// # Errors
    ///
    /// See [`GitHubClient::get_json`].
    pub async fn releases(&self, full_name: &str) -> Result<Vec<Release>, ApiError> {
        let route = format!("/repos/{full_name}/releases");
        let params = [("per_page", RELEASES_PER_PAGE)];
        self.get_json(&route, Some(&params[..])).await
    }

    /// Lists the first 5 tags of `full_name`.
    ///
    /// # Errors
    ///
    /// See [`GitHubClient::get_json`].
    pub async fn tags(&self, full_name: &str) -> Result<Vec<Tag>, ApiError> {
        let route = format!("/repos/{full_name}/tags");
        let params = [("per_page", TAGS_PER_PAGE)];
        self.get_json(&route, Some(&params[..])).await
    }

    /// Fetches pull request contributions of `username` grouped by repository.
    ///
    /// # Errors
    ///
    /// See [`GitHubClient::graphql`].
    pub async fn pull_request_contributions(
        &self,
        username: &str,
    ) -> Result<GraphQlResponse<ContributionsResponse>, ApiError> {
        self.graphql(&contributions_query(username)).await
    }

    /// Awaits `request`, bounded by the client's timeout; failures are logged
    /// and counted.
    async fn with_deadline<T>(
        &self,
        route: &str,
        request: impl Future<Output = octocrab::Result<T>>,
    ) -> Result<T, ApiError> {
        let error = match tokio::time::timeout(self.timeout, request).await {
            Ok(Ok(value)) => return Ok(value),
            Ok(Err(e)) => ApiError::from(e),
            Err(_) => ApiError::Timeout {
                route: route.to_string(),
                timeout: self.timeout,
            },
        };
        self.failed_requests.fetch_add(1, Ordering::Relaxed);
        warn!(route, error = %error, "GitHub request failed");
        Err(error)
    }
}

/// Headers sent with every request.
fn request_headers(token: Option<&str>) -> Result<Vec<(HeaderName, HeaderValue)>, ApiError> {
    let mut headers = vec![
        (USER_AGENT, HeaderValue::from_static(USER_AGENT_HEADER)),
        (ACCEPT, HeaderValue::from_static(ACCEPT_HEADER)),
    ];
    if let Some(token) = token {
        let mut value = HeaderValue::from_str(&format!("Bearer {token}"))?;
        value.set_sensitive(true);
        headers.push((AUTHORIZATION, value));
    }
    Ok(headers)
}

/// Builds the contributions query with `username` as a quoted string literal.
fn contributions_query(username: &str) -> String {
    let login = serde_json::Value::String(username.to_string()).to_string();
    CONTRIBUTIONS_QUERY.replacen("LOGIN", &login, 1)
}
