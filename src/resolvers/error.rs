//! Resolution failures

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Cannot find `{location}` from `{}`", .basedir.display())]
    NotFound { location: String, basedir: PathBuf },

    /// The location is not something this resolver understands (e.g. a URL).
    #[error("`{0}` is not a local file location")]
    UnsupportedLocation(String),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid package manifest {}: {source}", .path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Every member of a chain failed.
    #[error("Resolution failed")]
    Exhausted,

    #[error("Resolution cancelled")]
    Cancelled,

    #[error("{0}")]
    Other(String),
}

impl ResolveError {
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
