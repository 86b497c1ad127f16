//! Runner configuration.

use crate::activity::DEFAULT_ACTIVITY_LIMIT;
use crate::client::{ClientConfig, DEFAULT_API_URL};
use crate::config::{ConfigError, Settings};
use std::path::{Path, PathBuf};

/// README patched when no path is configured.
pub const DEFAULT_README_PATH: &str = "README.md";

/// Activity window, in months of 30 days, when none is configured.
pub const DEFAULT_MONTHS: u32 = 2;

/// Longest accepted activity window (100 years of 30-day months).
pub const MAX_MONTHS: u32 = 1200;

/// Configuration for a single run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// GitHub login whose activity is collected.
    username: String,
    /// Optional GitHub token; requests are unauthenticated without one.
    token: Option<String>,
    /// README file to patch.
    readme_path: PathBuf,
    /// Activity window in months.
    months: u32,
    /// Maximum number of rendered activity entries.
    limit: usize,
    /// REST API base URI.
    api_url: String,
    /// Whether to print the result instead of writing the README.
    dry_run: bool,
}

impl RunnerConfig {
    /// Creates a configuration with default path, window and limit.
    pub fn new(username: String, token: Option<String>) -> Self {
        Self {
            username,
            token,
            readme_path: PathBuf::from(DEFAULT_README_PATH),
            months: DEFAULT_MONTHS,
            limit: DEFAULT_ACTIVITY_LIMIT,
            api_url: DEFAULT_API_URL.to_string(),
            dry_run: false,
        }
    }

    /// Builds a configuration from resolved settings, filling in defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if the username is missing or
    /// empty, if `months` or `limit` is zero, or if `months` exceeds
    /// [`MAX_MONTHS`].
    pub fn from_settings(
        settings: Settings,
        token: Option<String>,
        dry_run: bool,
    ) -> Result<Self, ConfigError> {
        let username = settings
            .username
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .ok_or_else(|| ConfigError::ValidationError {
                message: "username is required".to_string(),
            })?;

        let mut config = Self::new(username, token).with_dry_run(dry_run);
        if let Some(path) = settings.readme_path {
            config = config.with_readme_path(path);
        }
        if let Some(months) = settings.months {
            if months == 0 {
                return Err(ConfigError::ValidationError {
                    message: "months must be at least 1".to_string(),
                });
            }
            if months > MAX_MONTHS {
                return Err(ConfigError::ValidationError {
                    message: format!("months must be at most {MAX_MONTHS}"),
                });
            }
            config = config.with_months(months);
        }
        if let Some(limit) = settings.limit {
            if limit == 0 {
                return Err(ConfigError::ValidationError {
                    message: "limit must be at least 1".to_string(),
                });
            }
            config = config.with_limit(limit);
        }
        if let Some(api_url) = settings.api_url {
            config = config.with_api_url(api_url);
        }
        Ok(config)
    }

    /// Sets a custom README path.
    pub fn with_readme_path(mut self, readme_path: PathBuf) -> Self {
        self.readme_path = readme_path;
        self
    }

    /// Sets the activity window in months.
    pub fn with_months(mut self, months: u32) -> Self {
        self.months = months;
        self
    }

    /// Sets the maximum number of activity entries.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the REST API base URI.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Enables or disables dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Returns the GitHub login.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the README path.
    pub fn readme_path(&self) -> &Path {
        &self.readme_path
    }

    /// Returns the activity window in months.
    pub fn months(&self) -> u32 {
        self.months
    }

    /// Returns the maximum number of activity entries.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Returns the REST API base URI.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Returns the GitHub client settings for this run.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.token.clone()).with_base_uri(self.api_url.clone())
    }
}
