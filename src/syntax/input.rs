use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::base::{LineIndex, Position, Span, TextRange, TextSize};

/// The text a tree was parsed from, plus the file it came from (if any).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    css: String,
    file: Option<PathBuf>,
    line_index: LineIndex,
}

impl Input {
    pub fn new(css: impl Into<String>, file: Option<PathBuf>) -> Self {
        let css = css.into();
        let line_index = LineIndex::new(&css);
        Self {
            css,
            file,
            line_index,
        }
    }

    pub fn css(&self) -> &str {
        &self.css
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// 0-indexed line/column of a byte offset
    pub fn position(&self, offset: TextSize) -> Position {
        self.line_index.line_col(offset).into()
    }
}

/// Where a node came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSource {
    pub input: Arc<Input>,
    pub range: TextRange,
}

impl NodeSource {
    pub fn new(input: Arc<Input>, range: TextRange) -> Self {
        Self { input, range }
    }

    pub fn file(&self) -> Option<&Path> {
        self.input.file()
    }

    pub fn start(&self) -> Position {
        self.input.position(self.range.start())
    }

    /// Start and end line/column of the node.
    pub fn span(&self) -> Span {
        Span::new(
            self.input.position(self.range.start()),
            self.input.position(self.range.end()),
        )
    }

    /// The raw source text covered by the node.
    pub fn text(&self) -> &str {
        &self.input.css()[self.range]
    }
}
