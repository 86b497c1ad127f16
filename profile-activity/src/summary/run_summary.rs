//! Run summary types.

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Owned repositories with commits inside the window.
    pub repository_records: usize,

    /// External repositories with merged pull requests inside the window.
    pub contribution_records: usize,

    /// Entries written to the activity section after ranking.
    pub activities_rendered: usize,

    /// GitHub requests that failed and were treated as empty.
    pub failed_requests: usize,

    /// README sections that were replaced.
    pub sections_updated: usize,

    /// README sections whose markers were not found.
    pub sections_missing: usize,

    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    /// Records whether a README section was found and replaced.
    pub fn record_section(&mut self, updated: bool) {
        if updated {
            self.sections_updated += 1;
        } else {
            self.sections_missing += 1;
        }
    }

    /// Returns true if any request failed or any section was missing.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.failed_requests > 0 || self.sections_missing > 0
    }
}
