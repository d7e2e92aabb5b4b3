//! Parse error type.

use quip_diagnostic::{Diagnostic, ErrorCode};
use quip_ir::{Span, TokenKind};
use thiserror::Error;

/// Why a token stream is not a valid program. Parsing stops at the first one.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum ParseError {
    /// A token that no grammar alternative accepts.
    #[error("expected {expected}, found {}", describe_found(.found, .text))]
    SyntaxError {
        /// Index of the offending token in the token stream.
        position: usize,
        expected: &'static str,
        found: TokenKind,
        text: String,
        span: Span,
    },

    /// The stream ended in the middle of a statement.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEndOfInput {
        /// Always the token count: one past the last token.
        position: usize,
        expected: &'static str,
        span: Span,
    },
}

fn describe_found(kind: &TokenKind, text: &str) -> String {
    match kind {
        TokenKind::Ident => format!("identifier `{text}`"),
        TokenKind::Str => format!("string \"{text}\""),
        TokenKind::Eq => "`=`".to_string(),
    }
}

impl ParseError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::SyntaxError { .. } => ErrorCode::E1001,
            ParseError::UnexpectedEndOfInput { .. } => ErrorCode::E1002,
        }
    }

    /// Token index the error refers to.
    pub fn position(&self) -> usize {
        match self {
            ParseError::SyntaxError { position, .. }
            | ParseError::UnexpectedEndOfInput { position, .. } => *position,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            ParseError::SyntaxError { span, .. }
            | ParseError::UnexpectedEndOfInput { span, .. } => *span,
        }
    }

    /// Pick whichever of two failed alternatives got further into the input.
    ///
    /// On a tie `later` wins, so the last alternative tried is reported.
    #[must_use]
    pub fn furthest(earlier: ParseError, later: ParseError) -> ParseError {
        if earlier.position() > later.position() {
            earlier
        } else {
            later
        }
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        let span = self.span();
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            ParseError::SyntaxError {
                expected,
                found: TokenKind::Eq,
                ..
            } => diag
                .with_label(span, format!("expected {expected}"))
                .with_note(STRAY_EQ_NOTE),
            ParseError::SyntaxError { expected, .. } => {
                diag.with_label(span, format!("expected {expected}"))
            }
            ParseError::UnexpectedEndOfInput { expected, .. } => diag
                .with_label(span, format!("expected {expected} here"))
                .with_note("every statement needs a value: a quoted string or a variable name"),
        }
    }
}

/// `LET x =` with no value parses as the call `LET x`, leaving `=` behind.
const STRAY_EQ_NOTE: &str =
    "`=` is only valid in `LET name = value`; the declaration before it may be missing its value";

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn syntax(position: usize) -> ParseError {
        ParseError::SyntaxError {
            position,
            expected: "identifier",
            found: TokenKind::Eq,
            text: "=".to_string(),
            span: Span::new(0, 1),
        }
    }

    #[test]
    fn test_furthest_prefers_later_position() {
        let eof = ParseError::UnexpectedEndOfInput {
            position: 4,
            expected: "expression",
            span: Span::point(10),
        };
        assert_eq!(ParseError::furthest(eof.clone(), syntax(1)), eof);
        assert_eq!(ParseError::furthest(syntax(1), eof.clone()), eof);
    }

    #[test]
    fn test_furthest_tie_goes_to_later() {
        let earlier = syntax(2);
        let later = ParseError::SyntaxError {
            position: 2,
            expected: "expression",
            found: TokenKind::Eq,
            text: "=".to_string(),
            span: Span::new(0, 1),
        };
        assert_eq!(ParseError::furthest(earlier, later.clone()), later);
    }

    #[test]
    fn test_stray_eq_points_at_declaration() {
        let diag = syntax(2).into_diagnostic();
        assert_eq!(diag.span(), Some(Span::new(0, 1)));
        assert_eq!(diag.notes, vec![STRAY_EQ_NOTE]);
    }

    #[test]
    fn test_display() {
        assert_eq!(syntax(0).to_string(), "expected identifier, found `=`");
        assert_eq!(syntax(0).code(), ErrorCode::E1001);
    }
}
