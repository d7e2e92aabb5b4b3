//! Lexing and parsing errors surfaced by the driver.

use pretty_assertions::assert_eq;
use quip_diagnostic::ErrorCode;
use quip_lexer::LexError;
use quip_parse::ParseError;
use quipc::commands::render_tokens;
use quipc::QuipError;

use crate::common::{run_err, run_script};

#[test]
fn whitespace_only_script_runs_nothing() {
    let run = run_script("  \n\t\n  ");
    assert!(run.result.unwrap().is_empty());
    assert!(run.lines.is_empty());
}

#[test]
fn unterminated_string_is_lex_error() {
    let err = run_err("print \"abc");
    assert!(matches!(
        err,
        QuipError::Lex(LexError::UnterminatedString { .. })
    ));
    assert_eq!(err.into_diagnostic().unwrap().code, ErrorCode::E0001);
}

#[test]
fn unexpected_character_is_lex_error() {
    let err = run_err("LET x = \"a\"\nprint x;");
    assert!(matches!(
        err,
        QuipError::Lex(LexError::UnexpectedCharacter { ch: ';', .. })
    ));
}

#[test]
fn lex_error_prevents_any_output() {
    let run = run_script("print \"ok\" print 9");
    assert!(run.result.is_err());
    assert!(run.lines.is_empty());
}

#[test]
fn missing_argument_is_end_of_input() {
    let err = run_err("print \"a\" print");
    assert!(matches!(
        err,
        QuipError::Parse(ParseError::UnexpectedEndOfInput { position: 3, .. })
    ));
}

#[test]
fn parse_error_prevents_any_output() {
    let run = run_script("print \"first\" = \"second\"");
    assert!(matches!(
        run.result,
        Err(QuipError::Parse(ParseError::SyntaxError { position: 2, .. }))
    ));
    assert!(run.lines.is_empty());
}

#[test]
fn render_tokens_lists_kind_text_and_span() {
    let tokens = quip_lexer::lex("LET a = \"x\"").unwrap();
    assert_eq!(
        render_tokens(&tokens),
        "Ident \"LET\" @0..3\nIdent \"a\" @4..5\nEq \"=\" @6..7\nStr \"x\" @8..11\n"
    );
}

#[test]
fn declaration_without_value_explains_stray_eq() {
    let err = run_err("LET x = ");
    assert!(matches!(
        err,
        QuipError::Parse(ParseError::SyntaxError { position: 2, .. })
    ));

    let diag = err.into_diagnostic().unwrap();
    assert_eq!(diag.code, ErrorCode::E1001);
    assert!(diag.notes.iter().any(|n| n.contains("missing its value")));
}
