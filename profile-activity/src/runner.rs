//! Orchestrates a full fetch, render and patch run.

mod config;
mod error;

pub use config::{RunnerConfig, DEFAULT_MONTHS, DEFAULT_README_PATH, MAX_MONTHS};
pub use error::RunnerError;

use crate::activity::{
    collect_contribution_activity, collect_repository_activity, rank_activity, ActivityWindow,
};
use crate::client::GitHubClient;
use crate::config::ConfigError;
use crate::markdown::{last_updated_line, render_activity};
use crate::rate_limit::log_core_rate_limit;
use crate::readme::{ReadmeDocument, ACTIVITY_SECTION, UPDATED_SECTION};
use crate::summary::RunSummary;
use chrono::{DateTime, Utc};
use tracing::{info, warn};

/// Runs the activity pipeline for a single user and README.
pub struct Runner {
    config: RunnerConfig,
    client: GitHubClient,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Api`] if the GitHub client cannot be built.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let client = GitHubClient::new(&config.client_config())?;
        Ok(Self { config, client })
    }

    /// Executes the full flow using the current time.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Readme`] if the README can't be read or written,
    /// and [`RunnerError::Config`] if the activity window cannot be computed.
    /// Failed GitHub requests are not errors; they shrink the activity list.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        self.run_at(Utc::now()).await
    }

    /// Executes the full flow as if it were `now`.
    ///
    /// The activity window ends at `now` and the `UPDATED` section shows it.
    ///
    /// # Errors
    ///
    /// See [`Runner::run`].
    pub async fn run_at(&self, now: DateTime<Utc>) -> Result<RunSummary, RunnerError> {
        let config = &self.config;
        let mut summary = RunSummary::new(config.dry_run());

        info!(username = %config.username(), "Fetching GitHub data");
        let rate_limit = log_core_rate_limit(self.client.octocrab());
        if tokio::time::timeout(self.client.timeout(), rate_limit)
            .await
            .is_err()
        {
            warn!("Rate limit check timed out");
        }

        let window = ActivityWindow::months_before(now, config.months()).ok_or_else(|| {
            ConfigError::ValidationError {
                message: format!("a {} month window cannot be computed", config.months()),
            }
        })?;
        let repositories =
            collect_repository_activity(&self.client, config.username(), &window).await;
        let contributions =
            collect_contribution_activity(&self.client, config.username(), &window).await;
        summary.repository_records = repositories.len();
        summary.contribution_records = contributions.len();

        let activity = rank_activity(repositories, contributions, config.limit());
        info!(count = activity.len(), "Found activities");
        summary.activities_rendered = activity.len();

        let activity_markdown = render_activity(&activity);

        let mut readme = ReadmeDocument::load(config.readme_path())?;
        info!(path = %config.readme_path().display(), "Updating README");

        summary.record_section(readme.update_section(ACTIVITY_SECTION, &activity_markdown));
        summary.record_section(readme.update_section(UPDATED_SECTION, &last_updated_line(now)));
        summary.failed_requests = self.client.failed_requests();

        if config.dry_run() {
            print_dry_run_preview(&readme, &activity_markdown);
        } else {
            readme.save()?;
            info!("README updated successfully");
        }

        Ok(summary)
    }
}

fn print_dry_run_preview(readme: &ReadmeDocument, activity_markdown: &str) {
    println!("\n[DRY RUN] README: {}", readme.path().display());
    println!("  Would write activity section:\n");
    for line in activity_markdown.lines() {
        println!("    {line}");
    }
    println!();
}
