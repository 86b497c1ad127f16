//! Settings deserialization.

use serde::Deserialize;
use std::path::PathBuf;

/// Partially specified settings, from a file or from command line flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Settings {
    /// GitHub login whose activity is collected.
    pub username: Option<String>,

    /// README file to patch.
    pub readme_path: Option<PathBuf>,

    /// Size of the activity window in months of 30 days.
    pub months: Option<u32>,

    /// Maximum number of activity entries rendered.
    pub limit: Option<usize>,

    /// REST API base URI.
    pub api_url: Option<String>,
}

impl Settings {
    /// Layers `overrides` on top of `self`; values set in `overrides` win.
    #[must_use]
    pub fn merge(self, overrides: Settings) -> Settings {
        Settings {
            username: overrides.username.or(self.username),
            readme_path: overrides.readme_path.or(self.readme_path),
            months: overrides.months.or(self.months),
            limit: overrides.limit.or(self.limit),
            api_url: overrides.api_url.or(self.api_url),
        }
    }
}
