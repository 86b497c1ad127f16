//! Merged pull requests to repositories owned by others.

use super::record::ContributionActivity;
use super::window::ActivityWindow;
use crate::client::{ContributionsResponse, GitHubClient, GraphQlResponse, RepositoryContributions};
use tracing::{debug, info, info_span, warn, Instrument};

/// Owner logins longer than this are candidates for the hash heuristic.
const HASH_LOGIN_MIN_LEN: usize = 30;

/// Collects merged pull requests made by the user to external repositories.
///
/// Issues a single GraphQL query. A failed request or a response without
/// data yields no records.
pub async fn collect_contribution_activity(
    client: &GitHubClient,
    username: &str,
    window: &ActivityWindow,
) -> Vec<ContributionActivity> {
    let span = info_span!("contributions", username, since = %window.cutoff_iso());

    async {
        info!("Collecting open source contributions");

        let contributions = match client.pull_request_contributions(username).await {
            Ok(response) => contributions_from_response(response, username, window),
            Err(_) => Vec::new(),
        };

        info!(count = contributions.len(), "Contribution activity collected");
        contributions
    }
    .instrument(span)
    .await
}

/// Turns a contributions query response into one record per repository.
///
/// Private repositories, repositories owned by `username` and repositories
/// whose owner login looks like a hash are skipped, as are repositories
/// without a pull request merged inside the window.
#[must_use]
pub fn contributions_from_response(
    response: GraphQlResponse<ContributionsResponse>,
    username: &str,
    window: &ActivityWindow,
) -> Vec<ContributionActivity> {
    let Some(data) = response.data else {
        warn!("Contributions response contained no data");
        return Vec::new();
    };
    let Some(user) = data.user else {
        warn!(username, "User not found in contributions response");
        return Vec::new();
    };

    user.contributions_collection
        .pull_request_contributions_by_repository
        .into_iter()
        .filter_map(|entry| repository_contribution(entry, username, window))
        .collect()
}

fn repository_contribution(
    entry: RepositoryContributions,
    username: &str,
    window: &ActivityWindow,
) -> Option<ContributionActivity> {
    let repo = entry.repository;
    let owner = repo.owner.login.as_str();

    if repo.is_private || owner.eq_ignore_ascii_case(username) {
        return None;
    }
    if looks_like_hash_identifier(owner) {
        debug!(repo = %repo.name_with_owner, "Skipping hash-like owner");
        return None;
    }

    let merged: Vec<_> = entry
        .contributions
        .nodes
        .iter()
        .filter_map(|node| node.pull_request.merged_at)
        .filter(|merged_at| window.contains(*merged_at))
        .collect();
    let latest = merged.iter().max().copied()?;

    Some(ContributionActivity {
        name: repo.name_with_owner,
        url: repo.url,
        pr_count: merged.len(),
        last_activity: latest,
    })
}

/// Whether an owner login looks machine generated.
///
/// Heuristic: more than 30 characters, all hexadecimal digits (compared
/// case-insensitively). Used to hide anonymised or throwaway test
/// organisations; it is a guess, not a rule GitHub documents.
#[must_use]
pub fn looks_like_hash_identifier(login: &str) -> bool {
    login.chars().count() > HASH_LOGIN_MIN_LEN
        && login
            .chars()
            .all(|c| matches!(c.to_ascii_lowercase(), '0'..='9' | 'a'..='f'))
}
