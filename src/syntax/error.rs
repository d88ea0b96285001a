//! Stylesheet syntax errors

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use super::input::Input;
use crate::base::TextSize;

/// A stylesheet could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}:{line}:{column}: {message}", DisplayFile(.file))]
pub struct CssSyntaxError {
    pub message: String,
    pub file: Option<PathBuf>,
    /// 1-based line
    pub line: usize,
    /// 1-based column
    pub column: usize,
}

impl CssSyntaxError {
    /// Create an error pointing at `offset` inside `input`.
    pub fn at(input: &Input, offset: TextSize, message: impl Into<String>) -> Self {
        let (line, column) = input.position(offset).one_based();
        Self {
            message: message.into(),
            file: input.file().map(|p| p.to_path_buf()),
            line,
            column,
        }
    }
}

pub(crate) struct DisplayFile<'a>(pub(crate) &'a Option<PathBuf>);

impl fmt::Display for DisplayFile<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(path) => write!(f, "{}", path.display()),
            None => f.write_str("<input css>"),
        }
    }
}
