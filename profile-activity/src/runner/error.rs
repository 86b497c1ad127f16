//! Runner error types.

/// Errors that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Settings loading and validation errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Api(#[from] crate::client::ApiError),

    /// README read and write errors.
    #[error(transparent)]
    Readme(#[from] crate::readme::ReadmeError),
}
