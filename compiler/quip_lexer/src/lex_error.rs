//! Lexer error type.

use quip_diagnostic::{Diagnostic, ErrorCode};
use quip_ir::{Span, SpanError};
use thiserror::Error;

/// The first lexical error in a source. Lexing stops at this point.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum LexError {
    /// A `"` was opened and never closed.
    #[error("unterminated string literal")]
    UnterminatedString { span: Span },

    /// A character that cannot start any token.
    #[error("unexpected character `{ch}`")]
    UnexpectedCharacter { ch: char, span: Span },

    #[error("source too large: {0}")]
    SourceTooLarge(#[from] SpanError),
}

impl LexError {
    pub fn code(&self) -> ErrorCode {
        match self {
            LexError::UnterminatedString { .. } => ErrorCode::E0001,
            LexError::UnexpectedCharacter { .. } => ErrorCode::E0002,
            LexError::SourceTooLarge(_) => ErrorCode::E0003,
        }
    }

    /// Source span of the error. For an unterminated string this runs from
    /// the opening quote to end of input.
    pub fn span(&self) -> Span {
        match self {
            LexError::UnterminatedString { span } | LexError::UnexpectedCharacter { span, .. } => {
                *span
            }
            LexError::SourceTooLarge(_) => Span::DUMMY,
        }
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        let span = self.span();
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            LexError::UnterminatedString { .. } => diag
                .with_label(
                    Span::new(span.start, span.start.saturating_add(1)),
                    "string starts here",
                )
                .with_note("add a closing `\"` before the end of the script"),
            LexError::UnexpectedCharacter { ch, .. } => {
                let diag = diag.with_label(span, "not valid here");
                if ch.is_ascii_digit() {
                    diag.with_note("identifiers must start with a letter")
                } else {
                    diag.with_note("only identifiers, `=` and quoted strings are allowed")
                }
            }
            LexError::SourceTooLarge(_) => diag,
        }
    }
}
