//! Token cursor for navigating the token stream.
//!
//! Provides token access, lookahead, and consumption methods. The cursor
//! never reads past the end: every accessor returns `None` or a
//! structured [`ParseError::UnexpectedEndOfInput`] there.

use quip_ir::{Span, Token, TokenKind, TokenList};
use tracing::trace;

use crate::ParseError;

/// Cursor for navigating tokens.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a TokenList) -> Self {
        Cursor { tokens, pos: 0 }
    }

    /// Get the current position in the token stream.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Set the cursor position directly.
    ///
    /// Used to roll back after a failed speculative parse. `pos` may equal
    /// the token count (the end position) but not exceed it.
    pub fn set_position(&mut self, pos: usize) {
        debug_assert!(
            pos <= self.tokens.len(),
            "cursor position {} out of bounds (max {})",
            pos,
            self.tokens.len()
        );
        self.pos = pos.min(self.tokens.len());
    }

    /// Get the current token, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Check if every token has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Span of the end of input: an empty span right after the last token.
    pub fn end_span(&self) -> Span {
        self.tokens
            .as_slice()
            .last()
            .map_or(Span::DUMMY, |t| Span::point(t.span.end))
    }

    /// Consume and return the current token.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        trace!(
            pos = self.pos,
            kind = %token.kind,
            span_start = token.span.start,
            "advance"
        );
        self.pos += 1;
        Some(token)
    }

    /// Consume a token of `kind`, or fail without consuming.
    ///
    /// `expected` names what the grammar wanted, for the error message.
    pub fn expect(
        &mut self,
        kind: TokenKind,
        expected: &'static str,
    ) -> Result<&'a Token, ParseError> {
        match self.current() {
            Some(token) if token.kind == kind => {
                self.advance();
                Ok(token)
            }
            Some(token) => Err(self.unexpected(token, expected)),
            None => Err(self.end_of_input(expected)),
        }
    }

    /// Consume the identifier `word` (ASCII case-insensitive), or fail without consuming.
    pub fn expect_keyword(&mut self, word: &'static str) -> Result<&'a Token, ParseError> {
        match self.current() {
            Some(token) if token.is_ident_ignore_case(word) => {
                self.advance();
                Ok(token)
            }
            Some(token) => Err(self.unexpected(token, word)),
            None => Err(self.end_of_input(word)),
        }
    }

    /// Error for `token` at the current position.
    pub fn unexpected(&self, token: &Token, expected: &'static str) -> ParseError {
        ParseError::SyntaxError {
            position: self.pos,
            expected,
            found: token.kind,
            text: token.text.clone(),
            span: token.span,
        }
    }

    /// Error for running out of tokens.
    pub fn end_of_input(&self, expected: &'static str) -> ParseError {
        ParseError::UnexpectedEndOfInput {
            position: self.tokens.len(),
            expected,
            span: self.end_span(),
        }
    }
}
