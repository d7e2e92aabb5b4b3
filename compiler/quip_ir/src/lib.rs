//! Core data types shared by every Quip phase.
//!
//! - [`Span`]: byte range into the source text
//! - [`Token`], [`TokenKind`], [`TokenList`]: lexer output
//! - [`ast`]: the program tree built by the parser and read by the interpreter

pub mod ast;
mod span;
mod token;

pub use ast::{Expr, Program, Stmt};
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
