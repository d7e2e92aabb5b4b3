//! Grammar productions.
//!
//! ```text
//! program              := statement*
//! statement            := variable_declaration | function_call
//! variable_declaration := IDENT("LET") IDENT EQUALS expr
//! function_call        := IDENT expr
//! expr                 := STRING | IDENT
//! ```
//!
//! Statements have no terminator; one ends where its expression ends.

use quip_ir::{Expr, Stmt, TokenKind};
use tracing::debug;

use crate::{ParseError, Parser};

/// Keyword that introduces a declaration. Matched ignoring ASCII case.
pub const LET_KEYWORD: &str = "LET";

const EXPECTED_EXPR: &str = "a string or variable name";
const EXPECTED_NAME: &str = "a variable name";
const EXPECTED_FUNCTION: &str = "a function name";

impl Parser<'_> {
    /// Parse one statement.
    ///
    /// Tries a declaration first, rewinding on failure, then a call. When
    /// both fail the error from the attempt that got further is returned.
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        let declaration_error = match self.try_parse(Self::parse_variable_declaration) {
            Ok(stmt) => return Ok(stmt),
            Err(e) => e,
        };

        let stmt = self
            .parse_function_call()
            .map_err(|call_error| ParseError::furthest(declaration_error, call_error))?;
        debug!(?stmt, "parsed statement");
        Ok(stmt)
    }

    /// `LET name = expr`
    pub(crate) fn parse_variable_declaration(&mut self) -> Result<Stmt, ParseError> {
        self.cursor.expect_keyword(LET_KEYWORD)?;
        let name = self.cursor.expect(TokenKind::Ident, EXPECTED_NAME)?.clone();
        self.cursor.expect(TokenKind::Eq, "`=`")?;
        let value = self.parse_expr()?;

        let stmt = Stmt::VariableDeclaration { name, value };
        debug!(?stmt, "parsed statement");
        Ok(stmt)
    }

    /// `name expr`
    pub(crate) fn parse_function_call(&mut self) -> Result<Stmt, ParseError> {
        let name = self.cursor.expect(TokenKind::Ident, EXPECTED_FUNCTION)?.clone();
        let argument = self.parse_expr()?;
        Ok(Stmt::FunctionCall { name, argument })
    }

    /// `STRING | IDENT`
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        let Some(token) = self.cursor.current() else {
            return Err(self.cursor.end_of_input(EXPECTED_EXPR));
        };

        let expr = match token.kind {
            TokenKind::Str => Expr::StringLiteral(token.clone()),
            TokenKind::Ident => Expr::VariableAccess(token.clone()),
            TokenKind::Eq => return Err(self.cursor.unexpected(token, EXPECTED_EXPR)),
        };
        self.cursor.advance();
        Ok(expr)
    }
}
