use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for the envload library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("failed to open env file '{path}': {source}")]
    FileOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read line {line}: {source}")]
    StreamRead {
        line: usize,
        source: std::io::Error,
    },

    #[error("invalid line {line}: {content}")]
    MalformedLine { line: usize, content: String },

    #[error("unbalanced quotes on line {line}: '{value}'")]
    UnbalancedQuotes { line: usize, value: String },

    #[error("failed to set environment variable '{key}': {reason}")]
    EnvironmentSet { key: String, reason: &'static str },
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Returns `true` if this is a [`FileOpen`](Self::FileOpen) error caused
    /// by the file not existing.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::FileOpen { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}
