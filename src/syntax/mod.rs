//! Stylesheet syntax tree
//!
//! The tree model every other layer works on:
//! - [`Root`] owns an ordered list of [`Node`]s
//! - [`AtRule`], [`Rule`], [`Declaration`], [`Comment`] are the node kinds
//! - [`NodeSource`] ties a node back to the [`Input`] it was parsed from
//! - [`Syntax`] is the seam for custom parsers and serializers
//!
//! Nodes are addressed by [`NodePath`], the chain of child indices from the
//! root. Paths are stable as long as no earlier sibling on the way down is
//! inserted or removed.

mod error;
mod input;
mod stringify;
mod tree;

pub use error::CssSyntaxError;
pub(crate) use error::DisplayFile;
pub use input::{Input, NodeSource};
pub use tree::{AtRule, Comment, Declaration, Node, NodePath, Root, Rule};

use std::path::PathBuf;

// Re-export Position and Span from base for convenience
pub use crate::base::{Position, Span};

/// A parser/serializer pair for one stylesheet dialect.
pub trait Syntax: Send + Sync {
    /// Parse `css` into a tree whose nodes are tagged with `file`.
    fn parse(&self, css: &str, file: Option<PathBuf>) -> Result<Root, CssSyntaxError>;

    /// Serialize a tree back to text.
    fn stringify(&self, root: &Root) -> String {
        root.to_string()
    }
}
