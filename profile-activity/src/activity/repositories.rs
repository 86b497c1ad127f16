//! Activity in repositories owned by the user.

use super::record::{RepoActivity, TagLink};
use super::window::ActivityWindow;
use crate::client::{GitHubClient, Release, Repository, Tag};
use tracing::{debug, info, info_span, Instrument};

/// Collects commit and release activity for the user's own repositories.
///
/// For every owned, non-fork repository pushed inside the window (other than
/// the profile repository named after the user) this counts the commits made
/// since the cutoff and looks up the latest release, falling back to the
/// newest tag. Repositories without commits in the window are dropped.
///
/// Failed requests never abort collection: a failed listing yields no
/// records and a failed per-repository lookup counts as zero/none.
pub async fn collect_repository_activity(
    client: &GitHubClient,
    username: &str,
    window: &ActivityWindow,
) -> Vec<RepoActivity> {
    let span = info_span!("repositories", username, since = %window.cutoff_iso());

    async {
        info!("Collecting repository activity");

        // An error here has already been logged by the client.
        let repositories = client.owned_repositories(username).await.unwrap_or_default();
        debug!(count = repositories.len(), "Listed owned repositories");

        let mut activity = Vec::new();
        for repo in &repositories {
            if let Some(reason) = skip_reason(repo, username, window) {
                debug!(repo = %repo.full_name, reason, "Skipping repository");
                continue;
            }

            if let Some(record) = repository_activity(client, repo, window).await {
                activity.push(record);
            }
        }

        info!(count = activity.len(), "Repository activity collected");
        activity
    }
    .instrument(span)
    .await
}

/// Builds the record for a single candidate repository.
async fn repository_activity(
    client: &GitHubClient,
    repo: &Repository,
    window: &ActivityWindow,
) -> Option<RepoActivity> {
    let last_activity = repo.pushed_at?;

    let commit_count = client
        .commit_count_since(&repo.full_name, window)
        .await
        .unwrap_or(0);
    if commit_count == 0 {
        debug!(repo = %repo.full_name, "No commits in window");
        return None;
    }

    let releases = client.releases(&repo.full_name).await.unwrap_or_default();
    let release = latest_release_in_window(&releases, window);
    let has_release = release.is_some();

    let latest_tag = match release {
        Some(release) => Some(TagLink {
            name: release.tag_name.clone(),
            url: release.html_url.clone(),
        }),
        None => {
            let tags = client.tags(&repo.full_name).await.unwrap_or_default();
            tag_link_for(&repo.html_url, tags.first())
        }
    };

    debug!(
        repo = %repo.full_name,
        commit_count,
        tag = latest_tag.as_ref().map(|t| t.name.as_str()),
        "Repository active"
    );

    Some(RepoActivity {
        name: repo.name.clone(),
        url: repo.html_url.clone(),
        commit_count,
        has_release,
        latest_tag,
        last_activity,
    })
}

/// Returns why a listed repository is not a candidate, if it isn't one.
fn skip_reason(repo: &Repository, username: &str, window: &ActivityWindow) -> Option<&'static str> {
    if repo.fork {
        return Some("fork");
    }
    if repo.name.eq_ignore_ascii_case(username) {
        return Some("profile repository");
    }
    match repo.pushed_at {
        None => Some("never pushed"),
        Some(pushed_at) if !window.contains(pushed_at) => Some("pushed before cutoff"),
        Some(_) => None,
    }
}

/// Picks the first release (API order, newest first) published in the window.
#[must_use]
pub fn latest_release_in_window<'a>(
    releases: &'a [Release],
    window: &ActivityWindow,
) -> Option<&'a Release> {
    releases
        .iter()
        .find(|release| release.published_at.is_some_and(|at| window.contains(at)))
}

/// Links a tag to its release page under the repository URL.
///
/// Format: `{repo_html_url}/releases/tag/{tag_name}`
#[must_use]
pub fn tag_link_for(repo_html_url: &str, tag: Option<&Tag>) -> Option<TagLink> {
    tag.map(|tag| TagLink {
        name: tag.name.clone(),
        url: format!("{repo_html_url}/releases/tag/{}", tag.name),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn window() -> ActivityWindow {
        ActivityWindow::since("2024-01-01T00:00:00Z".parse().unwrap())
    }

    fn at(timestamp: &str) -> Option<DateTime<Utc>> {
        Some(timestamp.parse().unwrap())
    }

    fn repository(name: &str, pushed_at: Option<DateTime<Utc>>) -> Repository {
        Repository {
            name: name.to_string(),
            full_name: format!("octo/{name}"),
            html_url: format!("https://github.com/octo/{name}"),
            fork: false,
            pushed_at,
        }
    }

    fn release(tag: &str, published_at: Option<DateTime<Utc>>) -> Release {
        Release {
            tag_name: tag.to_string(),
            html_url: format!("https://github.com/octo/tool/releases/tag/{tag}"),
            published_at,
        }
    }

    #[test]
    fn skips_forks_profile_and_stale_repositories() {
        let window = window();

        let mut fork = repository("fork", at("2024-02-01T00:00:00Z"));
        fork.fork = true;
        assert_eq!(skip_reason(&fork, "octo", &window), Some("fork"));

        let profile = repository("Octo", at("2024-02-01T00:00:00Z"));
        assert_eq!(
            skip_reason(&profile, "octo", &window),
            Some("profile repository")
        );

        let never = repository("never", None);
        assert_eq!(skip_reason(&never, "octo", &window), Some("never pushed"));

        let stale = repository("stale", at("2023-12-31T23:59:59Z"));
        assert_eq!(
            skip_reason(&stale, "octo", &window),
            Some("pushed before cutoff")
        );

        let fresh = repository("fresh", at("2024-01-01T00:00:00Z"));
        assert_eq!(skip_reason(&fresh, "octo", &window), None);
    }

    #[test]
    fn picks_first_release_inside_window() {
        let releases = vec![
            release("draft", None),
            release("v2.0.0", at("2024-02-10T00:00:00Z")),
            release("v1.9.0", at("2024-01-15T00:00:00Z")),
        ];

        let picked = latest_release_in_window(&releases, &window()).unwrap();
        assert_eq!(picked.tag_name, "v2.0.0");
    }

    #[test]
    fn ignores_releases_before_cutoff() {
        let releases = vec![release("v1.0.0", at("2023-06-01T00:00:00Z"))];
        assert!(latest_release_in_window(&releases, &window()).is_none());
    }

    #[test]
    fn tag_link_points_at_release_page() {
        let tag = Tag {
            name: "v0.3.1".to_string(),
        };

        let link = tag_link_for("https://github.com/octo/tool", Some(&tag)).unwrap();

        assert_eq!(link.name, "v0.3.1");
        assert_eq!(link.url, "https://github.com/octo/tool/releases/tag/v0.3.1");
        assert!(tag_link_for("https://github.com/octo/tool", None).is_none());
    }
}
