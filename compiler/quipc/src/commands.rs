//! Subcommand implementations.
//!
//! Each command reads one script, runs the phases it needs, and reports
//! any error as a diagnostic on stderr. They return `false` on failure so
//! `main` can pick the exit code.

use std::fmt::Write as _;
use std::io::IsTerminal;

use quip_diagnostic::{ColorMode, TerminalEmitter};
use quip_eval::{stdout_handler, Interpreter, SharedPrintHandler, SymbolTable};
use quip_ir::TokenList;
use tracing::debug;

use crate::{QuipError, RunOptions};

/// Run the whole pipeline on `source`, sending output to `handler`.
///
/// Returns the final bindings on success.
pub fn run_source(source: &str, handler: SharedPrintHandler) -> Result<SymbolTable, QuipError> {
    let tokens = quip_lexer::lex(source)?;
    let program = quip_parse::parse(&tokens)?;
    let mut interpreter = Interpreter::new(handler);
    interpreter.run(&program)?;
    Ok(interpreter.into_symbol_table())
}

/// Read a script from disk.
pub fn read_source(path: &str) -> Result<String, QuipError> {
    std::fs::read_to_string(path).map_err(|source| QuipError::Io {
        path: path.to_string(),
        source,
    })
}

/// `quip run`: execute a script, printing to stdout.
pub fn run_file(path: &str, options: &RunOptions) -> bool {
    let source = match read_source(path) {
        Ok(source) => source,
        Err(e) => return report(e, path, "", options.color),
    };
    debug!(path, bytes = source.len(), "running script");

    match run_source(&source, stdout_handler()) {
        Ok(symbols) => {
            if options.dump_symbols {
                eprint!("{}", render_symbols(&symbols));
            }
            true
        }
        Err(e) => report(e, path, &source, options.color),
    }
}

/// `quip lex`: print one token per line.
pub fn lex_file(path: &str, options: &RunOptions) -> bool {
    let source = match read_source(path) {
        Ok(source) => source,
        Err(e) => return report(e, path, "", options.color),
    };

    match quip_lexer::lex(&source) {
        Ok(tokens) => {
            print!("{}", render_tokens(&tokens));
            true
        }
        Err(e) => report(e.into(), path, &source, options.color),
    }
}

/// `quip parse`: print the program tree.
pub fn parse_file(path: &str, options: &RunOptions) -> bool {
    let source = match read_source(path) {
        Ok(source) => source,
        Err(e) => return report(e, path, "", options.color),
    };

    let parsed = quip_lexer::lex(&source)
        .map_err(QuipError::from)
        .and_then(|tokens| quip_parse::parse(&tokens).map_err(QuipError::from));

    match parsed {
        Ok(program) => {
            println!("{program:#?}");
            true
        }
        Err(e) => report(e, path, &source, options.color),
    }
}

/// Format tokens as `Kind "text" @start..end` lines.
pub fn render_tokens(tokens: &TokenList) -> String {
    let mut out = String::new();
    for token in tokens {
        let _ = writeln!(out, "{:?} {:?} @{}", token.kind, token.text, token.span);
    }
    out
}

/// Format bindings as `name = "value"` lines, sorted by name.
pub fn render_symbols(symbols: &SymbolTable) -> String {
    let mut out = String::new();
    for (name, value) in symbols.iter() {
        let _ = writeln!(out, "{name} = {:?}", value.as_str());
    }
    out
}

/// Print `error` to stderr. Always returns `false`.
fn report(error: QuipError, path: &str, source: &str, color: ColorMode) -> bool {
    match error {
        io @ QuipError::Io { .. } => eprintln!("error: {io}"),
        other => {
            if let Some(diagnostic) = other.into_diagnostic() {
                let is_tty = std::io::stderr().is_terminal();
                let mut emitter = TerminalEmitter::stderr(color, is_tty).with_source(path, source);
                emitter.emit(&diagnostic);
                emitter.flush();
            }
        }
    }
    false
}
