//! Rate limit reporting for the GitHub REST API.
//!
//! Nothing here waits or retries; the quota is only logged so that an
//! exhausted token explains a run full of failed requests.

use octocrab::Octocrab;
use tracing::{info, warn};

/// Worst case REST requests for one run: the repository listing plus
/// commits, releases and tags for each of 100 repositories.
pub const MAX_REQUESTS_PER_RUN: u32 = 1 + 3 * 100;

/// Rate limit information for a specific resource.
#[derive(Debug, Clone)]
pub struct RateLimitInfo {
    /// Requests remaining in the current window.
    pub remaining: u32,
    /// Unix timestamp when the rate limit resets.
    pub reset: u64,
    /// Total requests allowed per window.
    pub limit: u32,
}

impl RateLimitInfo {
    /// Whether the remaining quota might not cover a full run.
    #[must_use]
    pub fn is_low(&self) -> bool {
        self.remaining < MAX_REQUESTS_PER_RUN
    }
}

/// Checks the current rate limit status for core API (repos, commits, etc.).
///
/// # Errors
///
/// Returns an error if the rate limit API call fails.
pub async fn check_core_rate_limit(octocrab: &Octocrab) -> Result<RateLimitInfo, octocrab::Error> {
    let rate_limit = octocrab.ratelimit().get().await?;
    let core = &rate_limit.resources.core;

    Ok(RateLimitInfo {
        remaining: core.remaining as u32,
        reset: core.reset,
        limit: core.limit as u32,
    })
}

/// Logs the core quota, warning when it is low. Failures are only logged.
pub async fn log_core_rate_limit(octocrab: &Octocrab) {
    match check_core_rate_limit(octocrab).await {
        Ok(info) if info.is_low() => warn!(
            remaining = info.remaining,
            limit = info.limit,
            reset = info.reset,
            "Rate limit low, some requests may fail"
        ),
        Ok(info) => info!(
            remaining = info.remaining,
            limit = info.limit,
            "Rate limit"
        ),
        Err(e) => warn!(error = %e, "Failed to check rate limit"),
    }
}
