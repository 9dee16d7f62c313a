//! Error types for the TopicFoundry pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving, loading, or parsing ABI inputs.
///
/// Generators never fail on a well-formed [`crate::EventModel`]; everything
/// here happens upstream of them.
#[derive(Debug, Error)]
pub enum FoundryError {
    /// The file is not JSON, or matches none of the accepted container shapes.
    #[error("Unrecognized ABI format: {}: {reason}", path.display())]
    Format { path: PathBuf, reason: String },

    #[error("No ABI files found (patterns: {})", patterns.join(", "))]
    Resolution { patterns: Vec<String> },

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FoundryError {
    pub fn format(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Format {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` for errors caused by malformed input files.
    pub fn is_format(&self) -> bool {
        matches!(self, FoundryError::Format { .. })
    }
}
