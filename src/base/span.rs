//! Byte offsets and line/column conversion.

use super::position::Position;

pub use text_size::{TextRange, TextSize};

/// A 0-indexed line/column pair; columns count bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

impl From<LineCol> for Position {
    fn from(lc: LineCol) -> Self {
        Position::new(lc.line as usize, lc.col as usize)
    }
}

/// Maps byte offsets of one text to line/column pairs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineIndex {
    /// Offset of the first byte of every line after the first.
    newlines: Vec<TextSize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let newlines = text
            .match_indices('\n')
            .map(|(i, _)| TextSize::from(i as u32 + 1))
            .collect();
        Self { newlines }
    }

    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let line = self.newlines.partition_point(|&start| start <= offset);
        let line_start = if line == 0 {
            TextSize::from(0)
        } else {
            self.newlines[line - 1]
        };
        LineCol {
            line: line as u32,
            col: u32::from(offset - line_start),
        }
    }

    pub fn line_count(&self) -> usize {
        self.newlines.len() + 1
    }
}
