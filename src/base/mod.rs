//! Foundation types shared by every other module.
//!
//! - [`TextRange`], [`TextSize`] - byte offsets into a stylesheet
//! - [`LineCol`], [`LineIndex`] - offset to line/column conversion
//! - [`Position`], [`Span`] - line/column ranges used in diagnostics
//!
//! This module has NO dependencies on other crate modules.

mod position;
mod span;

pub use position::{Position, Span};
pub use span::{LineCol, LineIndex, TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;
