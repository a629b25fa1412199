use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RewriteError {
    /// A call pattern could not be built for the configured backend.
    #[error("Invalid call pattern for backend '{0}': {1}")]
    Pattern(String, #[source] regex::Error),

    /// An error that occurs when walking a directory.
    #[error("Error walking directory '{0}': {1}")]
    WalkDir(PathBuf, #[source] walkdir::Error),
}
