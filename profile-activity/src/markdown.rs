//! Markdown rendering of the activity list.

use crate::activity::{ActivityRecord, ContributionActivity, RepoActivity};
use chrono::{DateTime, Utc};

/// Rendered in place of the list when there is no activity.
pub const NO_ACTIVITY_PLACEHOLDER: &str = "_No recent activity_";

/// Renders ranked activity as a bulleted Markdown list.
///
/// Lines are joined with `\n`; there is no trailing newline.
#[must_use]
pub fn render_activity(activities: &[ActivityRecord]) -> String {
    if activities.is_empty() {
        return NO_ACTIVITY_PLACEHOLDER.to_string();
    }

    activities
        .iter()
        .map(|record| match record {
            ActivityRecord::Repository(repo) => render_repository(repo),
            ActivityRecord::Contribution(contribution) => render_contribution(contribution),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `- [name](url) (12 commits, [v1.0.0](tag_url))`
fn render_repository(repo: &RepoActivity) -> String {
    let mut stats = Vec::new();
    if repo.commit_count > 0 {
        stats.push(format!("{} commits", repo.commit_count));
    }
    if let Some(tag) = &repo.latest_tag {
        stats.push(format!("[{}]({})", tag.name, tag.url));
    }

    let mut line = format!("- [{}]({})", repo.name, repo.url);
    if !stats.is_empty() {
        line.push_str(&format!(" ({})", stats.join(", ")));
    }
    line
}

/// `- [owner/name](url) (3 merged PRs)`
fn render_contribution(contribution: &ContributionActivity) -> String {
    let noun = if contribution.pr_count == 1 { "PR" } else { "PRs" };
    format!(
        "- [{}]({}) ({} merged {noun})",
        contribution.name, contribution.url, contribution.pr_count
    )
}

/// Body of the `UPDATED` section, e.g. `_Last updated: 2024-03-01 08:15 UTC_`.
#[must_use]
pub fn last_updated_line(now: DateTime<Utc>) -> String {
    format!("_Last updated: {}_", now.format("%Y-%m-%d %H:%M UTC"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::TagLink;

    fn at(timestamp: &str) -> DateTime<Utc> {
        timestamp.parse().unwrap()
    }

    fn repo(commit_count: usize, tag: Option<(&str, &str)>) -> ActivityRecord {
        ActivityRecord::Repository(RepoActivity {
            name: "tool".to_string(),
            url: "https://github.com/octo/tool".to_string(),
            commit_count,
            has_release: tag.is_some(),
            latest_tag: tag.map(|(name, url)| TagLink {
                name: name.to_string(),
                url: url.to_string(),
            }),
            last_activity: at("2024-03-01T00:00:00Z"),
        })
    }

    fn contribution(pr_count: usize) -> ActivityRecord {
        ActivityRecord::Contribution(ContributionActivity {
            name: "rust-lang/cargo".to_string(),
            url: "https://github.com/rust-lang/cargo".to_string(),
            pr_count,
            last_activity: at("2024-03-01T00:00:00Z"),
        })
    }

    #[test]
    fn empty_list_renders_placeholder() {
        assert_eq!(render_activity(&[]), "_No recent activity_");
    }

    #[test]
    fn renders_repository_stats() {
        let with_tag = repo(
            12,
            Some(("v1.0.0", "https://github.com/octo/tool/releases/tag/v1.0.0")),
        );
        assert_eq!(
            render_activity(&[with_tag]),
            "- [tool](https://github.com/octo/tool) (12 commits, [v1.0.0](https://github.com/octo/tool/releases/tag/v1.0.0))"
        );

        assert_eq!(
            render_activity(&[repo(4, None)]),
            "- [tool](https://github.com/octo/tool) (4 commits)"
        );
    }

    #[test]
    fn repository_without_stats_has_no_parentheses() {
        assert_eq!(
            render_activity(&[repo(0, None)]),
            "- [tool](https://github.com/octo/tool)"
        );
    }

    #[test]
    fn pluralises_merged_pull_requests() {
        assert_eq!(
            render_activity(&[contribution(1)]),
            "- [rust-lang/cargo](https://github.com/rust-lang/cargo) (1 merged PR)"
        );
        assert_eq!(
            render_activity(&[contribution(2)]),
            "- [rust-lang/cargo](https://github.com/rust-lang/cargo) (2 merged PRs)"
        );
    }

    #[test]
    fn joins_lines_without_trailing_newline() {
        let rendered = render_activity(&[contribution(2), repo(3, None)]);

        assert_eq!(rendered.lines().count(), 2);
        assert!(!rendered.ends_with('\n'));
    }

    #[test]
    fn formats_last_updated_line() {
        assert_eq!(
            last_updated_line(at("2024-03-01T08:15:59Z")),
            "_Last updated: 2024-03-01 08:15 UTC_"
        );
    }
}
