//! Stylesheet parsing
//!
//! - **logos** tokenizes the text ([`Lexer`])
//! - a recursive descent parser builds the [`Root`] tree ([`parse_css`])
//! - [`parse_import_params`] scans the params of an `@import` rule
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with byte offsets
//!     ↓
//! Parser → Root / Node tree, nodes sharing one Arc<Input>
//! ```

#[allow(clippy::module_inception)]
mod parser;

mod lexer;
mod params;

pub use lexer::{Lexer, Token, TokenKind, tokenize};
pub use params::{ImportParam, ParamsError, parse_import_params};
pub use parser::parse_css;

use std::path::PathBuf;

use crate::syntax::{CssSyntaxError, Root, Syntax};

/// The default [`Syntax`]: plain CSS in, normalized CSS out.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssSyntax;

impl Syntax for CssSyntax {
    fn parse(&self, css: &str, file: Option<PathBuf>) -> Result<Root, CssSyntaxError> {
        parse_css(css, file)
    }
}
