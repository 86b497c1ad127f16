//! README marker-region patching.
//!
//! A section is delimited by a pair of HTML comments:
//!
//! ```text
//! <!-- ACTIVITY_START -->
//! ...owned by this crate...
//! <!-- ACTIVITY_END -->
//! ```
//!
//! Everything between the markers is replaced wholesale; text outside them is
//! left untouched.

mod error;

pub use error::ReadmeError;

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Section holding the activity list.
pub const ACTIVITY_SECTION: &str = "ACTIVITY";

/// Section holding the last-updated timestamp.
pub const UPDATED_SECTION: &str = "UPDATED";

/// Replaces the body of the first `name` section in `content`.
///
/// Returns `None` when the start marker, or an end marker after it, is
/// missing.
#[must_use]
pub fn splice_section(content: &str, name: &str, body: &str) -> Option<String> {
    let start_marker = format!("<!-- {name}_START -->");
    let end_marker = format!("<!-- {name}_END -->");

    let start = content.find(&start_marker)?;
    let after_start = start + start_marker.len();
    let end = after_start + content[after_start..].find(&end_marker)?;
    let after_end = end + end_marker.len();

    let mut patched = String::with_capacity(content.len() + body.len());
    patched.push_str(&content[..start]);
    patched.push_str(&start_marker);
    patched.push('\n');
    patched.push_str(body);
    patched.push('\n');
    patched.push_str(&end_marker);
    patched.push_str(&content[after_end..]);
    Some(patched)
}

/// Replaces the body of the first `name` section in `content`.
///
/// When the markers are missing a warning is logged and `content` is
/// returned unchanged.
#[must_use]
pub fn update_section(content: &str, name: &str, body: &str) -> String {
    splice_section(content, name, body).unwrap_or_else(|| {
        warn!(section = name, "Section markers not found in README");
        content.to_string()
    })
}

/// A README file held in memory between reading and writing it back.
#[derive(Debug, Clone)]
pub struct ReadmeDocument {
    path: PathBuf,
    content: String,
}

impl ReadmeDocument {
    /// Reads the whole file as UTF-8.
    ///
    /// # Errors
    ///
    /// Returns [`ReadmeError::Read`] if the file cannot be read.
    pub fn load(path: &Path) -> Result<Self, ReadmeError> {
        let content = std::fs::read_to_string(path).map_err(|source| ReadmeError::Read {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), bytes = content.len(), "Loaded README");

        Ok(Self {
            path: path.to_path_buf(),
            content,
        })
    }

    /// Replaces the body of section `name`, returning whether it was found.
    ///
    /// A missing section is logged as a warning and leaves the document as is.
    pub fn update_section(&mut self, name: &str, body: &str) -> bool {
        match splice_section(&self.content, name, body) {
            Some(patched) => {
                self.content = patched;
                true
            }
            None => {
                warn!(section = name, path = %self.path.display(), "Section markers not found in README");
                false
            }
        }
    }

    /// Current document text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Path the document was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrites the file with the current content.
    ///
    /// # Errors
    ///
    /// Returns [`ReadmeError::Write`] if the file cannot be written.
    pub fn save(&self) -> Result<(), ReadmeError> {
        std::fs::write(&self.path, &self.content).map_err(|source| ReadmeError::Write {
            path: self.path.display().to_string(),
            source,
        })
    }
}
