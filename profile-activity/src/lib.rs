#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod activity;
pub mod client;
pub mod config;
pub mod markdown;
pub mod rate_limit;
pub mod readme;
pub mod runner;
pub mod summary;

pub use activity::{
    collect_contribution_activity, collect_repository_activity, contributions_from_response,
    latest_release_in_window, looks_like_hash_identifier, rank_activity, tag_link_for,
    ActivityRecord, ActivityWindow, ContributionActivity, RepoActivity, TagLink,
    DEFAULT_ACTIVITY_LIMIT,
};
pub use client::{ApiError, ClientConfig, GitHubClient, DEFAULT_API_URL, DEFAULT_REQUEST_TIMEOUT};
pub use config::{load_settings, ConfigError, Settings};
pub use markdown::{last_updated_line, render_activity, NO_ACTIVITY_PLACEHOLDER};
pub use rate_limit::{check_core_rate_limit, log_core_rate_limit, RateLimitInfo};
pub use readme::{
    splice_section, update_section, ReadmeDocument, ReadmeError, ACTIVITY_SECTION,
    UPDATED_SECTION,
};
pub use runner::{
    Runner, RunnerConfig, RunnerError, DEFAULT_MONTHS, DEFAULT_README_PATH, MAX_MONTHS,
};
pub use summary::RunSummary;
