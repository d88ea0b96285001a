//! Per-run processing options

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::parser::CssSyntax;
use crate::syntax::Syntax;

/// Options for one processing run, fixed for its whole duration.
#[derive(Clone, Default)]
pub struct ProcessOptions {
    /// The file the input came from
    pub from: Option<PathBuf>,
    /// Where the output will be written
    pub to: Option<PathBuf>,
    /// Custom parser/serializer; plain CSS when unset
    pub syntax: Option<Arc<dyn Syntax>>,
}

impl ProcessOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for processing `path` in place (`from` and `to` both set).
    pub fn for_file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            from: Some(path.clone()),
            to: Some(path),
            syntax: None,
        }
    }

    pub fn with_syntax(mut self, syntax: Arc<dyn Syntax>) -> Self {
        self.syntax = Some(syntax);
        self
    }

    /// The configured syntax, or [`CssSyntax`].
    pub fn syntax(&self) -> &dyn Syntax {
        match &self.syntax {
            Some(syntax) => syntax.as_ref(),
            None => &CssSyntax,
        }
    }
}

impl fmt::Debug for ProcessOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessOptions")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("syntax", &self.syntax.as_ref().map(|_| "<custom>"))
            .finish()
    }
}
