//! Response shapes for the endpoints the collectors use.
//!
//! Only the fields that are read are modelled; everything else in the
//! payloads is ignored.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Entry of `GET /users/{user}/repos`.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    /// Repository name without owner.
    pub name: String,

    /// Repository name in "owner/name" format.
    pub full_name: String,

    /// Browser URL of the repository.
    pub html_url: String,

    /// Whether the repository is a fork.
    #[serde(default)]
    pub fork: bool,

    /// Time of the last push; absent for some empty repositories.
    #[serde(default)]
    pub pushed_at: Option<DateTime<Utc>>,
}

/// Entry of `GET /repos/{owner}/{repo}/releases`.
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    /// Tag the release points at.
    pub tag_name: String,

    /// Browser URL of the release page.
    pub html_url: String,

    /// Publication time; `None` for drafts.
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

/// Entry of `GET /repos/{owner}/{repo}/tags`.
#[derive(Debug, Clone, Deserialize)]
pub struct Tag {
    pub name: String,
}

/// GraphQL envelope. `data` is absent or null when the query failed.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
}

/// `data` of the pull request contributions query.
#[derive(Debug, Clone, Deserialize)]
pub struct ContributionsResponse {
    #[serde(default)]
    pub user: Option<ContributionsUser>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionsUser {
    pub contributions_collection: ContributionsCollection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionsCollection {
    #[serde(default)]
    pub pull_request_contributions_by_repository: Vec<RepositoryContributions>,
}

/// Pull request contributions made to a single repository.
#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryContributions {
    pub repository: ContributedRepository,
    pub contributions: ContributionConnection,
}

/// Repository a contribution was made to.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributedRepository {
    /// Full name in "owner/name" format.
    pub name_with_owner: String,

    /// Browser URL of the repository.
    pub url: String,

    pub is_private: bool,

    pub owner: RepositoryOwner,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryOwner {
    pub login: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContributionConnection {
    #[serde(default)]
    pub nodes: Vec<ContributionNode>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionNode {
    pub pull_request: MergedPullRequest,
}

/// Pull request attached to a contribution node.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedPullRequest {
    pub title: String,
    pub url: String,

    /// Merge time; `None` while the pull request is open or was closed.
    #[serde(default)]
    pub merged_at: Option<DateTime<Utc>>,

    pub state: String,
}
