//! Recursive descent parser for stylesheets
//!
//! Builds a [`Root`] from tokens. The first syntax error aborts the parse.

use std::path::PathBuf;
use std::sync::Arc;

use super::lexer::{Token, TokenKind, tokenize};
use crate::base::{TextRange, TextSize};
use crate::syntax::{
    AtRule, Comment, CssSyntaxError, Declaration, Input, Node, NodeSource, Root, Rule,
};

type ParseResult<T> = Result<T, CssSyntaxError>;

/// Parse stylesheet text into a tree whose nodes point back at `file`.
pub fn parse_css(css: &str, file: Option<PathBuf>) -> ParseResult<Root> {
    let input = Arc::new(Input::new(css, file));
    let tokens = tokenize(input.css());
    let mut parser = Parser::new(&input, &tokens);
    let nodes = parser.parse_nodes(None)?;
    Ok(Root {
        nodes,
        source: Some(NodeSource::new(
            input.clone(),
            TextRange::up_to(TextSize::of(input.css())),
        )),
    })
}

/// How a run of tokens ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Terminator {
    Semicolon,
    Block,
    /// `}` or end of input, left unconsumed
    Close,
}

/// The parser state
struct Parser<'a> {
    input: &'a Arc<Input>,
    tokens: &'a [Token<'a>],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a Arc<Input>, tokens: &'a [Token<'a>]) -> Self {
        Self {
            input,
            tokens,
            pos: 0,
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    /// Offset of the current token, or end of input
    fn offset(&self) -> TextSize {
        self.current()
            .map(|t| t.offset)
            .unwrap_or_else(|| TextSize::of(self.input.css()))
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn skip_trivia(&mut self) {
        while self.current().is_some_and(|t| t.kind == TokenKind::Whitespace) {
            self.bump();
        }
    }

    fn text(&self, start: TextSize, end: TextSize) -> &'a str {
        let css: &'a str = self.input.css();
        css[TextRange::new(start, end)].trim()
    }

    fn source(&self, start: TextSize, end: TextSize) -> Option<NodeSource> {
        Some(NodeSource::new(
            self.input.clone(),
            TextRange::new(start, end),
        ))
    }

    fn error(&self, offset: TextSize, message: &str) -> CssSyntaxError {
        CssSyntaxError::at(self.input, offset, message)
    }

    // =========================================================================
    // Grammar
    // =========================================================================

    /// Parse nodes until end of input (top level) or the `}` closing the block
    /// opened at `open`.
    fn parse_nodes(&mut self, open: Option<TextSize>) -> ParseResult<Vec<Node>> {
        let mut nodes = Vec::new();
        loop {
            self.skip_trivia();
            let Some(token) = self.current().copied() else {
                return match open {
                    Some(offset) => Err(self.error(offset, "Unclosed block")),
                    None => Ok(nodes),
                };
            };
            match token.kind {
                TokenKind::RBrace => {
                    if open.is_none() {
                        return Err(self.error(token.offset, "Unexpected }"));
                    }
                    self.bump();
                    return Ok(nodes);
                }
                TokenKind::Semicolon => self.bump(),
                TokenKind::Comment => {
                    self.bump();
                    nodes.push(Node::Comment(Comment {
                        text: token.text[2..token.text.len() - 2].trim().to_string(),
                        source: self.source(token.offset, token.end()),
                    }));
                }
                TokenKind::AtKeyword => nodes.push(self.parse_at_rule()?),
                _ => nodes.push(self.parse_rule_or_declaration()?),
            }
        }
    }

    fn parse_at_rule(&mut self) -> ParseResult<Node> {
        let Some(keyword) = self.current().copied() else {
            return Err(self.error(self.offset(), "Expected at-rule"));
        };
        self.bump();

        let params_start = keyword.end();
        let (terminator, params_end) = self.scan_to_terminator()?;
        let params = self.text(params_start, params_end).to_string();

        let nodes = match terminator {
            Terminator::Block => Some(self.parse_block()?),
            Terminator::Semicolon | Terminator::Close => None,
        };
        let end = self.last_end();

        Ok(Node::AtRule(AtRule {
            name: keyword.text[1..].into(),
            params,
            nodes,
            source: self.source(keyword.offset, end),
        }))
    }

    fn parse_rule_or_declaration(&mut self) -> ParseResult<Node> {
        let start = self.offset();
        let colon = self.first_top_level_colon();
        let (terminator, text_end) = self.scan_to_terminator()?;

        if terminator == Terminator::Block {
            let selector = self.text(start, text_end).to_string();
            let nodes = self.parse_block()?;
            return Ok(Node::Rule(Rule {
                selector,
                nodes,
                source: self.source(start, self.last_end()),
            }));
        }

        let Some(colon) = colon.filter(|&c| c < text_end) else {
            return Err(self.error(start, "Unknown word"));
        };
        let prop = self.text(start, colon);
        if prop.is_empty() {
            return Err(self.error(start, "Missing property name"));
        }
        Ok(Node::Decl(Declaration {
            prop: prop.to_string(),
            value: self.text(colon + TextSize::from(1), text_end).to_string(),
            source: self.source(start, self.last_end()),
        }))
    }

    /// After `{` has been consumed: children up to and including `}`.
    fn parse_block(&mut self) -> ParseResult<Vec<Node>> {
        let open = self.tokens[self.pos - 1].offset;
        self.parse_nodes(Some(open))
    }

    /// Consume tokens up to `;` or `{` (both consumed) or `}`/end of input
    /// (not consumed), outside parentheses. Returns the terminator and the
    /// offset where the consumed text ends (before the terminator).
    fn scan_to_terminator(&mut self) -> ParseResult<(Terminator, TextSize)> {
        let mut depth = 0usize;
        while let Some(token) = self.current().copied() {
            if token.is_unclosed_string() {
                return Err(self.error(token.offset, "Unclosed string"));
            }
            if token.text == "/"
                && self
                    .tokens
                    .get(self.pos + 1)
                    .is_some_and(|next| next.text.starts_with('*'))
            {
                return Err(self.error(token.offset, "Unclosed comment"));
            }
            match token.kind {
                TokenKind::LParen | TokenKind::Function => depth += 1,
                TokenKind::RParen => depth = depth.saturating_sub(1),
                TokenKind::Semicolon if depth == 0 => {
                    self.bump();
                    return Ok((Terminator::Semicolon, token.offset));
                }
                TokenKind::LBrace if depth == 0 => {
                    self.bump();
                    return Ok((Terminator::Block, token.offset));
                }
                TokenKind::RBrace if depth == 0 => {
                    return Ok((Terminator::Close, token.offset));
                }
                _ => {}
            }
            self.bump();
        }
        if depth > 0 {
            return Err(self.error(self.offset(), "Unclosed bracket"));
        }
        Ok((Terminator::Close, self.offset()))
    }

    /// Offset of the first `:` ahead of the cursor, outside parentheses and
    /// before the statement ends. Does not move the cursor.
    fn first_top_level_colon(&self) -> Option<TextSize> {
        let mut depth = 0usize;
        for token in &self.tokens[self.pos..] {
            match token.kind {
                TokenKind::LParen | TokenKind::Function => depth += 1,
                TokenKind::RParen => depth = depth.saturating_sub(1),
                TokenKind::Colon if depth == 0 => return Some(token.offset),
                TokenKind::Semicolon | TokenKind::LBrace | TokenKind::RBrace if depth == 0 => {
                    return None;
                }
                _ => {}
            }
        }
        None
    }

    /// End offset of the last consumed token, trailing whitespace excluded
    fn last_end(&self) -> TextSize {
        self.tokens[..self.pos]
            .iter()
            .rev()
            .find(|t| t.kind != TokenKind::Whitespace)
            .map(|t| t.end())
            .unwrap_or_default()
    }
}
