//! Normalised activity records.

use chrono::{DateTime, Utc};

/// A single entry of the activity list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityRecord {
    /// Activity in a repository owned by the user.
    Repository(RepoActivity),

    /// Merged pull requests to a repository owned by someone else.
    Contribution(ContributionActivity),
}

impl ActivityRecord {
    /// Time of the most recent activity; the ranking key.
    #[must_use]
    pub fn last_activity(&self) -> DateTime<Utc> {
        match self {
            Self::Repository(repo) => repo.last_activity,
            Self::Contribution(contribution) => contribution.last_activity,
        }
    }

    /// Display name of the repository.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Repository(repo) => &repo.name,
            Self::Contribution(contribution) => &contribution.name,
        }
    }

    /// Browser URL of the repository.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Repository(repo) => &repo.url,
            Self::Contribution(contribution) => &contribution.url,
        }
    }
}

/// Activity in one of the user's own repositories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoActivity {
    /// Repository name without owner.
    pub name: String,

    /// Browser URL of the repository.
    pub url: String,

    /// Commits inside the activity window (capped at one page).
    pub commit_count: usize,

    /// Whether a release was published inside the window.
    pub has_release: bool,

    /// Latest release tag in the window, or the newest tag as a fallback.
    pub latest_tag: Option<TagLink>,

    /// Last push to the repository.
    pub last_activity: DateTime<Utc>,
}

/// A tag name with the page it links to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagLink {
    pub name: String,
    pub url: String,
}

/// Merged pull requests to a single external repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributionActivity {
    /// Repository name in "owner/name" format.
    pub name: String,

    /// Browser URL of the repository.
    pub url: String,

    /// Pull requests merged inside the window.
    pub pr_count: usize,

    /// Most recent merge time.
    pub last_activity: DateTime<Utc>,
}
