//! Parser snapshots for speculative parsing.
//!
//! A statement may start with an identifier either way (`LET x = ...` or
//! `print x`), so the parser tries the declaration form first and rewinds
//! if it fails. Snapshots are the checkpoint for that rewind:
//!
//! ```ignore
//! let snapshot = self.snapshot();
//! match self.parse_variable_declaration() {
//!     Ok(stmt) => Ok(stmt),
//!     Err(_) => {
//!         self.restore(snapshot);
//!         self.parse_function_call()
//!     }
//! }
//! ```
//!
//! [`Parser::try_parse`](crate::Parser::try_parse) wraps that pattern.
//! The tree is only built on success, so restoring the cursor position is
//! enough to undo a failed attempt.

/// A snapshot of parser state: just the cursor position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParserSnapshot {
    pub(crate) cursor_pos: usize,
}

impl ParserSnapshot {
    #[inline]
    pub(crate) fn new(cursor_pos: usize) -> Self {
        Self { cursor_pos }
    }

    /// Token index the snapshot will rewind to.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor_pos
    }
}
