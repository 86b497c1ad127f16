//! Activity collection and ranking.
//!
//! Two independent collectors gather owned-repository activity and merged
//! pull requests to other repositories. Their output is merged into a single
//! list ordered by most recent activity.

mod contributions;
mod record;
mod repositories;
mod window;

pub use contributions::{
    collect_contribution_activity, contributions_from_response, looks_like_hash_identifier,
};
pub use record::{ActivityRecord, ContributionActivity, RepoActivity, TagLink};
pub use repositories::{collect_repository_activity, latest_release_in_window, tag_link_for};
pub use window::ActivityWindow;

/// Number of records kept when no limit is configured.
pub const DEFAULT_ACTIVITY_LIMIT: usize = 10;

/// Merges both collectors' output and keeps the `limit` most recent records.
///
/// Repository records precede contribution records before sorting, and the
/// sort is stable, so equal timestamps keep that order.
#[must_use]
pub fn rank_activity(
    repositories: Vec<RepoActivity>,
    contributions: Vec<ContributionActivity>,
    limit: usize,
) -> Vec<ActivityRecord> {
    let mut records: Vec<ActivityRecord> = repositories
        .into_iter()
        .map(ActivityRecord::Repository)
        .chain(contributions.into_iter().map(ActivityRecord::Contribution))
        .collect();

    records.sort_by(|a, b| b.last_activity().cmp(&a.last_activity()));
    records.truncate(limit);
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn at(timestamp: &str) -> DateTime<Utc> {
        timestamp.parse().unwrap()
    }

    fn repo(name: &str, timestamp: &str) -> RepoActivity {
        RepoActivity {
            name: name.to_string(),
            url: format!("https://github.com/octo/{name}"),
            commit_count: 3,
            has_release: false,
            latest_tag: None,
            last_activity: at(timestamp),
        }
    }

    fn contribution(name: &str, timestamp: &str) -> ContributionActivity {
        ContributionActivity {
            name: name.to_string(),
            url: format!("https://github.com/{name}"),
            pr_count: 1,
            last_activity: at(timestamp),
        }
    }

    fn names(records: &[ActivityRecord]) -> Vec<&str> {
        records.iter().map(ActivityRecord::name).collect()
    }

    #[test]
    fn newer_contribution_sorts_before_older_repository() {
        let ranked = rank_activity(
            vec![repo("repo-a", "2024-03-01T00:00:00Z")],
            vec![contribution("other/contrib-b", "2024-03-05T00:00:00Z")],
            DEFAULT_ACTIVITY_LIMIT,
        );

        assert_eq!(names(&ranked), ["other/contrib-b", "repo-a"]);
    }

    #[test]
    fn equal_timestamps_keep_repositories_first() {
        let ranked = rank_activity(
            vec![repo("repo-a", "2024-03-01T00:00:00Z")],
            vec![contribution("other/contrib-b", "2024-03-01T00:00:00Z")],
            DEFAULT_ACTIVITY_LIMIT,
        );

        assert_eq!(names(&ranked), ["repo-a", "other/contrib-b"]);
    }

    #[test]
    fn truncates_to_limit() {
        let repositories = (1..=9)
            .map(|day| repo(&format!("repo-{day}"), &format!("2024-03-0{day}T00:00:00Z")))
            .collect();
        let contributions = vec![contribution("other/late", "2024-03-10T00:00:00Z")];

        let ranked = rank_activity(repositories, contributions, 3);

        assert_eq!(names(&ranked), ["other/late", "repo-9", "repo-8"]);
    }

    #[test]
    fn empty_inputs_rank_to_nothing() {
        assert!(rank_activity(Vec::new(), Vec::new(), DEFAULT_ACTIVITY_LIMIT).is_empty());
    }
}
