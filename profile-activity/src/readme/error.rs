//! README I/O error types.

use thiserror::Error;

/// Errors that can occur while reading or writing the README.
#[derive(Debug, Error)]
pub enum ReadmeError {
    /// Failed to read the README.
    #[error("Failed to read README '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the README.
    #[error("Failed to write README '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
