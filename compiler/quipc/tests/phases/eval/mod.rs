//! End-to-end execution tests.

use pretty_assertions::assert_eq;
use quip_diagnostic::ErrorCode;
use quip_eval::RuntimeError;
use quipc::commands::render_symbols;
use quipc::QuipError;

use crate::common::{run_err, run_script};

#[test]
fn greeting_script() {
    let run = run_script("LET greeting = \"hello\"\nprint greeting\nprint \"world\"\n");

    assert_eq!(run.lines, vec!["hello", "world"]);
    let symbols = run.result.unwrap();
    assert_eq!(symbols.len(), 1);
    assert_eq!(render_symbols(&symbols), "greeting = \"hello\"\n");
}

#[test]
fn statements_on_one_line() {
    let run = run_script("LET a = \"1\" LET b = a print b print a");
    assert_eq!(run.lines, vec!["1", "1"]);
}

#[test]
fn redeclaration_last_write_wins() {
    let run = run_script("LET x = \"a\"\nLET x = \"b\"\nprint x");
    assert_eq!(run.lines, vec!["b"]);
    assert_eq!(run.result.unwrap().get("x").unwrap().as_str(), "b");
}

#[test]
fn keyword_and_builtin_ignore_case() {
    let run = run_script("let name = \"quip\" PRINT name Print \"done\"");
    assert_eq!(run.lines, vec!["quip", "done"]);
}

#[test]
fn print_keeps_text_verbatim() {
    let run = run_script("print \"  spaced  \" print \"\" print \"a\\nb\"");
    assert_eq!(run.lines, vec!["  spaced  ", "", "a\\nb"]);
}

#[test]
fn undeclared_variable_fails() {
    let err = run_err("print y");
    match err {
        QuipError::Runtime(RuntimeError::UndefinedVariable { ref name, .. }) => {
            assert_eq!(name, "y");
        }
        other => panic!("expected undefined variable, got {other:?}"),
    }
}

#[test]
fn unknown_function_fails() {
    let err = run_err("shout \"hi\"");
    assert!(matches!(
        err,
        QuipError::Runtime(RuntimeError::UnknownFunction { ref name, .. }) if name == "shout"
    ));
    assert_eq!(err.into_diagnostic().unwrap().code, ErrorCode::E2003);
}

#[test]
fn output_before_runtime_error_is_kept() {
    let run = run_script("print \"one\" print missing print \"three\"");
    assert!(run.result.is_err());
    assert_eq!(run.lines, vec!["one"]);
}
