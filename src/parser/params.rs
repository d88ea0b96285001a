//! `@import` parameter scanning
//!
//! Only the first significant value of the params matters:
//!
//! ```text
//! @import "foo.css" screen;      → Literal("foo.css")
//! @import url('foo.css');        → Function { name: "url", argument: "foo.css" }
//! @import url(foo.css);          → Function { name: "url", argument: "foo.css" }
//! ```
//!
//! Whatever follows (media queries, `layer(...)`, `supports(...)`) is ignored.

use super::lexer::{Token, TokenKind, tokenize};

/// The first value found in a set of `@import` params
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportParam {
    /// A quoted string
    Literal(String),
    /// A function call and its first argument
    Function { name: String, argument: String },
}

impl ImportParam {
    /// The location the import refers to.
    pub fn location(&self) -> &str {
        match self {
            ImportParam::Literal(value) => value,
            ImportParam::Function { argument, .. } => argument,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamsError {
    /// Nothing but whitespace/comments
    Empty,
    /// The first value is neither a string nor a function with an argument
    InvalidIdentifier,
}

pub fn parse_import_params(params: &str) -> Result<ImportParam, ParamsError> {
    let tokens = tokenize(params);
    let mut significant = tokens.iter().filter(|t| !t.is_trivia());

    let first = significant.next().ok_or(ParamsError::Empty)?;
    match first.kind {
        TokenKind::String => Ok(ImportParam::Literal(unquote(first.text).to_string())),
        TokenKind::Function => {
            let name = first.text.trim_end_matches('(').to_string();
            let argument = function_argument(params, first, significant)?;
            Ok(ImportParam::Function { name, argument })
        }
        _ => Err(ParamsError::InvalidIdentifier),
    }
}

/// First argument of a function whose opening token is `open`.
fn function_argument<'t, 's: 't>(
    params: &str,
    open: &Token<'_>,
    mut rest: impl Iterator<Item = &'t Token<'s>>,
) -> Result<String, ParamsError> {
    let first = rest.next().ok_or(ParamsError::InvalidIdentifier)?;
    if first.kind == TokenKind::String {
        return Ok(unquote(first.text).to_string());
    }

    // Unquoted argument: everything up to the closing paren.
    let start = usize::from(open.end());
    let mut end = None;
    for token in std::iter::once(first).chain(rest) {
        match token.kind {
            TokenKind::RParen => {
                end = Some(usize::from(token.offset));
                break;
            }
            TokenKind::Function | TokenKind::LParen | TokenKind::String => {
                return Err(ParamsError::InvalidIdentifier);
            }
            _ => {}
        }
    }
    let end = end.ok_or(ParamsError::InvalidIdentifier)?;
    let argument = params[start..end].trim();
    if argument.is_empty() {
        return Err(ParamsError::InvalidIdentifier);
    }
    Ok(argument.to_string())
}

fn unquote(text: &str) -> &str {
    &text[1..text.len() - 1]
}
