//! Errors that abort an import run

use std::path::PathBuf;

use thiserror::Error;

use crate::pipeline::StageError;
use crate::syntax::{DisplayFile, NodeSource};

#[derive(Debug, Error)]
pub enum ImportError {
    /// `@import` params that are neither a string nor `url(...)`
    #[error("{}:{line}:{column}: {message}", DisplayFile(.file))]
    MalformedImport {
        message: String,
        file: Option<PathBuf>,
        /// 1-based
        line: usize,
        /// 1-based
        column: usize,
    },

    /// The stage was run without the context it needs.
    #[error("{0}")]
    Configuration(String),

    /// A prior stage failed on imported content.
    #[error(transparent)]
    Stage(#[from] StageError),
}

impl ImportError {
    pub(crate) fn malformed(message: impl Into<String>, source: Option<&NodeSource>) -> Self {
        let (line, column) = source.map_or((1, 1), |s| s.start().one_based());
        Self::MalformedImport {
            message: message.into(),
            file: source.and_then(NodeSource::file).map(|p| p.to_path_buf()),
            line,
            column,
        }
    }
}
