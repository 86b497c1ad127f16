//! Settings file loading.
//!
//! Settings may come from an optional TOML file and from command line flags.
//! Flags win over the file, and the file wins over built-in defaults.

mod error;
mod settings;

pub use error::ConfigError;
pub use settings::Settings;

use std::path::Path;
use tracing::info;

/// Loads settings from a TOML file.
///
/// ```toml
/// username = "octocat"
/// readme-path = "README.md"
/// months = 2
/// limit = 10
/// api-url = "https://api.github.com"
/// ```
///
/// Every key is optional.
///
/// # Errors
///
/// Returns an error if the file doesn't exist, can't be read or isn't valid
/// settings TOML.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    info!(path = %path.display(), "Loading settings");

    if !path.exists() {
        return Err(ConfigError::MissingFile {
            path: path.display().to_string(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;

    toml::from_str(&content).map_err(|e| ConfigError::TomlError {
        path: path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn can_load_settings() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");
        fs::write(
            &path,
            r#"
username = "octocat"
readme-path = "profile/README.md"
months = 3
limit = 5
"#,
        )
        .unwrap();

        let settings = load_settings(&path).unwrap();

        assert_eq!(settings.username.as_deref(), Some("octocat"));
        assert_eq!(
            settings.readme_path,
            Some(PathBuf::from("profile/README.md"))
        );
        assert_eq!(settings.months, Some(3));
        assert_eq!(settings.limit, Some(5));
        assert_eq!(settings.api_url, None);
    }

    #[test]
    fn load_settings_missing_file() {
        let temp = TempDir::new().unwrap();

        let result = load_settings(&temp.path().join("nonexistent.toml"));
        assert!(matches!(result, Err(ConfigError::MissingFile { .. })));
    }

    #[test]
    fn load_settings_rejects_unknown_keys() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");
        fs::write(&path, "user-name = \"typo\"\n").unwrap();

        let result = load_settings(&path);
        assert!(matches!(result, Err(ConfigError::TomlError { .. })));
    }
}
