//! Syntax tree for Quip scripts.
//!
//! The tree is closed: a program is a list of statements, and every
//! statement holds exactly one expression. Nodes keep the tokens they
//! were built from so later phases can report precise spans.

use crate::{Span, Token};

/// The root node: every top-level statement in source order.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Program { statements }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// A statement.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Stmt {
    /// `LET name = value`
    VariableDeclaration { name: Token, value: Expr },
    /// `name argument`
    FunctionCall { name: Token, argument: Expr },
}

impl Stmt {
    /// Span from the statement's name to the end of its expression.
    ///
    /// For a declaration this starts at the variable name, not at `LET`.
    pub fn span(&self) -> Span {
        match self {
            Stmt::VariableDeclaration { name, value } => name.span.merge(value.span()),
            Stmt::FunctionCall { name, argument } => name.span.merge(argument.span()),
        }
    }
}

/// An expression: the value side of a declaration or a call argument.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Expr {
    /// A quoted string; the token text is the contents.
    StringLiteral(Token),
    /// A reference to a previously declared variable.
    VariableAccess(Token),
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::StringLiteral(tok) | Expr::VariableAccess(tok) => tok.span,
        }
    }
}
