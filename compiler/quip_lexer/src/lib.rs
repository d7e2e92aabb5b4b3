//! Lexer for Quip using logos.
//!
//! Turns source text into a [`TokenList`]. Whitespace separates tokens and
//! is never emitted. Lexing is fail-fast: the first unrecognised character
//! or unterminated string aborts with a [`LexError`].

mod lex_error;
mod raw_token;

pub use lex_error::LexError;

use logos::Logos;
use quip_ir::{Span, Token, TokenKind, TokenList};
use tracing::{debug, trace};

use raw_token::{RawError, RawToken};

/// Lex a whole source into tokens.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex(source: &str) -> Result<TokenList, LexError> {
    let mut tokens = TokenList::new();
    let mut logos = RawToken::lexer(source);

    while let Some(result) = logos.next() {
        let range = logos.span();
        let span = Span::try_from_range(range.clone())?;

        let raw = match result {
            Ok(raw) => raw,
            Err(RawError::UnterminatedString) => {
                return Err(LexError::UnterminatedString { span });
            }
            Err(RawError::UnexpectedCharacter) => {
                return Err(unexpected_character(source, range.start));
            }
        };

        let slice = logos.slice();
        let token = match raw {
            RawToken::Ident => Token::new(TokenKind::Ident, slice, span),
            RawToken::Str => Token::new(TokenKind::Str, &slice[1..slice.len() - 1], span),
            RawToken::Eq => Token::new(TokenKind::Eq, slice, span),
        };
        trace!(kind = %token.kind, text = %token.text, %span, "token");
        tokens.push(token);
    }

    debug!(count = tokens.len(), "lexed");
    Ok(tokens)
}

/// Build the error for the character at byte `start`, spanning the whole char.
fn unexpected_character(source: &str, start: usize) -> LexError {
    let ch = source
        .get(start..)
        .and_then(|rest| rest.chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    match Span::try_from_range(start..start + ch.len_utf8()) {
        Ok(span) => LexError::UnexpectedCharacter { ch, span },
        Err(e) => LexError::SourceTooLarge(e),
    }
}
