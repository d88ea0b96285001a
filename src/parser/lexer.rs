//! Logos-based stylesheet lexer
//!
//! Tokens are coarse: anything without structural meaning to the parser
//! (numbers, operators, `#`, `.`) comes out as one [`TokenKind::Other`] per
//! character. Every byte of the input belongs to exactly one token.

use logos::Logos;

use crate::base::{TextRange, TextSize};

/// A token with its kind, text, and position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub offset: TextSize,
}

impl Token<'_> {
    pub fn range(&self) -> TextRange {
        TextRange::at(self.offset, TextSize::of(self.text))
    }

    pub fn end(&self) -> TextSize {
        self.range().end()
    }

    pub fn is_trivia(&self) -> bool {
        matches!(self.kind, TokenKind::Whitespace | TokenKind::Comment)
    }

    /// A lone quote: the start of a string that never closes on its line.
    pub fn is_unclosed_string(&self) -> bool {
        self.kind == TokenKind::Other && (self.text == "\"" || self.text == "'")
    }
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, TokenKind>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: TokenKind::lexer(input),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let kind = self.inner.next()?.unwrap_or(TokenKind::Other);
        let span = self.inner.span();
        Some(Token {
            kind,
            text: self.inner.slice(),
            offset: TextSize::from(span.start as u32),
        })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    Comment,

    // =========================================================================
    // WORDS
    // =========================================================================
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    #[regex(r"'([^'\\\n]|\\.)*'")]
    String,

    #[regex(r"@-?[a-zA-Z_][-a-zA-Z0-9_]*")]
    AtKeyword,

    /// An identifier immediately followed by `(`, e.g. `url(`
    #[regex(r"(--|-)?[a-zA-Z_][-a-zA-Z0-9_]*\(")]
    Function,

    #[regex(r"(--|-)?[a-zA-Z_][-a-zA-Z0-9_]*")]
    Ident,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,

    /// Any other single character
    #[regex(r".", priority = 0)]
    Other,
}
