//! Parser tests: statement forms, backtracking, and error positions.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::{parse, ParseError, Parser};
use pretty_assertions::assert_eq;
use quip_ir::{Expr, Program, Span, Stmt, TokenKind, TokenList};

fn lex(source: &str) -> TokenList {
    quip_lexer::lex(source).unwrap()
}

fn parse_source(source: &str) -> Result<Program, ParseError> {
    parse(&lex(source))
}

/// Render a program as `decl name=<expr>` / `call name(<expr>)` lines.
fn outline(program: &Program) -> Vec<String> {
    fn expr(e: &Expr) -> String {
        match e {
            Expr::StringLiteral(tok) => format!("\"{}\"", tok.text),
            Expr::VariableAccess(tok) => format!("${}", tok.text),
        }
    }

    program
        .statements
        .iter()
        .map(|stmt| match stmt {
            Stmt::VariableDeclaration { name, value } => {
                format!("decl {}={}", name.text, expr(value))
            }
            Stmt::FunctionCall { name, argument } => {
                format!("call {}({})", name.text, expr(argument))
            }
        })
        .collect()
}

#[test]
fn test_whitespace_only_is_empty_program() {
    let program = parse_source(" \n\t \r\n").unwrap();
    assert!(program.is_empty());
}

#[test]
fn test_declaration_with_string() {
    let program = parse_source("LET greeting = \"hello\"").unwrap();
    assert_eq!(outline(&program), vec!["decl greeting=\"hello\""]);
}

#[test]
fn test_declaration_with_variable() {
    let program = parse_source("LET copy = original").unwrap();
    assert_eq!(outline(&program), vec!["decl copy=$original"]);
}

#[test]
fn test_let_keyword_ignores_case() {
    let program = parse_source("let a = \"1\" Let b = \"2\"").unwrap();
    assert_eq!(outline(&program), vec!["decl a=\"1\"", "decl b=\"2\""]);
}

#[test]
fn test_function_call_forms() {
    let program = parse_source("print \"world\" PRINT greeting").unwrap();
    assert_eq!(
        outline(&program),
        vec!["call print(\"world\")", "call PRINT($greeting)"]
    );
}

#[test]
fn test_statements_need_no_separator() {
    let program =
        parse_source("LET greeting = \"hello\"\nprint greeting\nprint \"world\"").unwrap();
    assert_eq!(
        outline(&program),
        vec![
            "decl greeting=\"hello\"",
            "call print($greeting)",
            "call print(\"world\")",
        ]
    );
}

#[test]
fn test_statement_spans() {
    let program = parse_source("LET a = \"x\" print a").unwrap();
    let spans: Vec<Span> = program.statements.iter().map(Stmt::span).collect();
    assert_eq!(spans, vec![Span::new(4, 11), Span::new(12, 19)]);
}

#[test]
fn test_failed_declaration_falls_back_to_call() {
    // `LET "x"` is not a declaration, so it parses as a call to `LET`.
    let program = parse_source("LET \"x\"").unwrap();
    assert_eq!(outline(&program), vec!["call LET(\"x\")"]);

    let program = parse_source("LET x").unwrap();
    assert_eq!(outline(&program), vec!["call LET($x)"]);
}

#[test]
fn test_declaration_then_keyword_call() {
    let program = parse_source("LET x = y LET z").unwrap();
    assert_eq!(outline(&program), vec!["decl x=$y", "call LET($z)"]);
}

#[test]
fn test_try_parse_restores_position_on_failure() {
    let tokens = lex("print x");
    let mut parser = Parser::new(&tokens);

    let result = parser.try_parse(Parser::parse_variable_declaration);
    assert!(result.is_err());
    assert_eq!(parser.position(), 0);
}

#[test]
fn test_try_parse_restores_after_partial_consumption() {
    let tokens = lex("LET x \"a\"");
    let mut parser = Parser::new(&tokens);

    let err = parser
        .try_parse(Parser::parse_variable_declaration)
        .unwrap_err();
    assert_eq!(err.position(), 2);
    assert_eq!(parser.position(), 0);
}

#[test]
fn test_try_parse_keeps_position_on_success() {
    let tokens = lex("LET x = \"a\" print x");
    let mut parser = Parser::new(&tokens);

    assert!(parser.try_parse(Parser::parse_variable_declaration).is_ok());
    assert_eq!(parser.position(), 4);
}

#[test]
fn test_snapshot_restore() {
    let tokens = lex("a b c");
    let mut parser = Parser::new(&tokens);
    let snapshot = parser.snapshot();

    parser.parse_function_call().unwrap();
    assert_eq!(parser.position(), 2);

    parser.restore(snapshot);
    assert_eq!(parser.position(), snapshot.position());
}

#[test]
fn test_call_without_argument_is_end_of_input() {
    let err = parse_source("print").unwrap_err();
    assert_eq!(
        err,
        ParseError::UnexpectedEndOfInput {
            position: 1,
            expected: "a string or variable name",
            span: Span::point(5),
        }
    );
}

#[test]
fn test_bare_let_reports_missing_expression() {
    let err = parse_source("LET").unwrap_err();
    assert!(matches!(
        err,
        ParseError::UnexpectedEndOfInput {
            position: 1,
            expected: "a string or variable name",
            ..
        }
    ));
}

#[test]
fn test_statement_cannot_start_with_eq() {
    let err = parse_source("= x").unwrap_err();
    assert_eq!(
        err,
        ParseError::SyntaxError {
            position: 0,
            expected: "a function name",
            found: TokenKind::Eq,
            text: "=".to_string(),
            span: Span::new(0, 1),
        }
    );
}

#[test]
fn test_statement_cannot_start_with_string() {
    let err = parse_source("print \"a\" \"b\"").unwrap_err();
    assert_eq!(err.position(), 2);
    assert!(matches!(
        err,
        ParseError::SyntaxError {
            found: TokenKind::Str,
            ..
        }
    ));
}

#[test]
fn test_dangling_eq_after_declaration_prefix() {
    // `LET x` parses as a call, leaving `=` to start the next statement.
    let err = parse_source("LET x =").unwrap_err();
    assert_eq!(err.position(), 2);
    assert!(matches!(
        err,
        ParseError::SyntaxError {
            found: TokenKind::Eq,
            ..
        }
    ));
}

#[test]
fn test_errors_render_as_diagnostics() {
    let diag = parse_source("print").unwrap_err().into_diagnostic();
    assert_eq!(diag.code, quip_diagnostic::ErrorCode::E1002);
    assert_eq!(diag.span(), Some(Span::point(5)));
}

#[test]
fn test_declaration_missing_value_hints_at_stray_eq() {
    let err = parse_source("LET x = ").unwrap_err();
    assert_eq!(err.position(), 2);

    let diag = err.into_diagnostic();
    assert_eq!(diag.span(), Some(Span::new(6, 7)));
    assert_eq!(diag.notes.len(), 1);
    assert!(diag.notes[0].contains("missing its value"));
}
