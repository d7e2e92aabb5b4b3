//! Driver-level error spanning every phase.

use quip_diagnostic::Diagnostic;
use quip_eval::RuntimeError;
use quip_lexer::LexError;
use quip_parse::ParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuipError {
    #[error("error reading file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl QuipError {
    /// Diagnostic for a script error. I/O errors have none.
    pub fn into_diagnostic(self) -> Option<Diagnostic> {
        match self {
            QuipError::Io { .. } => None,
            QuipError::Lex(e) => Some(e.into_diagnostic()),
            QuipError::Parse(e) => Some(e.into_diagnostic()),
            QuipError::Runtime(e) => Some(e.into_diagnostic()),
        }
    }
}
