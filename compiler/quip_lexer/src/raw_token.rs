//! Raw tokens recognised by logos, before text capture.

use logos::{Lexer, Logos};

/// Why logos could not produce a token.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RawError {
    /// No pattern starts with this character.
    #[default]
    UnexpectedCharacter,
    /// An opening `"` with no closing `"` before end of input.
    UnterminatedString,
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"\s+")]
#[logos(error = RawError)]
pub(crate) enum RawToken {
    #[regex("[A-Za-z][A-Za-z0-9]*")]
    Ident,

    #[token("\"", scan_string)]
    Str,

    #[token("=")]
    Eq,
}

/// Extend a string token from its opening quote through the closing quote.
///
/// Any character, including a newline, may appear between the quotes.
/// There are no escape sequences.
fn scan_string(lex: &mut Lexer<'_, RawToken>) -> Result<(), RawError> {
    let rest = lex.remainder();
    match rest.find('"') {
        Some(close) => {
            lex.bump(close + 1);
            Ok(())
        }
        None => {
            lex.bump(rest.len());
            Err(RawError::UnterminatedString)
        }
    }
}
