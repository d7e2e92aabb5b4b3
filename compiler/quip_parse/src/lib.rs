//! Recursive descent parser for Quip.
//!
//! Consumes a [`TokenList`] and produces a [`Program`]. The one ambiguity
//! in the grammar (a declaration and a call both start with an identifier)
//! is resolved by speculative parsing with [`ParserSnapshot`] rewinds.
//! Parsing is fail-fast: no partial tree is returned on error.

mod cursor;
mod error;
mod grammar;
mod snapshot;

pub use cursor::Cursor;
pub use error::ParseError;
pub use grammar::LET_KEYWORD;
pub use snapshot::ParserSnapshot;

use quip_ir::{Program, TokenList};
use tracing::trace;

/// Parse a token stream into a program.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse(tokens: &TokenList) -> Result<Program, ParseError> {
    Parser::new(tokens).parse_program()
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    /// Create a new parser at the start of `tokens`.
    pub fn new(tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    /// Parse statements until every token is consumed.
    pub fn parse_program(mut self) -> Result<Program, ParseError> {
        let mut statements = Vec::new();
        while !self.cursor.is_at_end() {
            statements.push(self.parse_statement()?);
        }
        Ok(Program::new(statements))
    }

    /// Token index of the next token to be consumed.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Capture the current position for a later [`restore`](Self::restore).
    #[inline]
    pub fn snapshot(&self) -> ParserSnapshot {
        ParserSnapshot::new(self.cursor.position())
    }

    /// Rewind to a snapshot, un-consuming every token read since.
    pub fn restore(&mut self, snapshot: ParserSnapshot) {
        trace!(from = self.position(), to = snapshot.position(), "restore");
        self.cursor.set_position(snapshot.position());
    }

    /// Run `f`; if it fails, rewind to where it started and pass the error on.
    pub fn try_parse<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        let snapshot = self.snapshot();
        let result = f(self);
        if result.is_err() {
            self.restore(snapshot);
        }
        result
    }
}

#[cfg(test)]
mod tests;
