//! Shared test utilities for phase tests.

use quip_eval::{buffer_handler, SymbolTable};
use quipc::{run_source, QuipError};

/// Outcome of running a script against a capture buffer.
pub struct ScriptRun {
    pub result: Result<SymbolTable, QuipError>,
    pub lines: Vec<String>,
}

/// Run `source` through every phase, capturing `print` output.
pub fn run_script(source: &str) -> ScriptRun {
    let out = buffer_handler();
    let result = run_source(source, out.clone());
    ScriptRun {
        result,
        lines: out.get_output().lines().map(str::to_string).collect(),
    }
}

/// Run `source` and return the error it must fail with.
pub fn run_err(source: &str) -> QuipError {
    match run_script(source).result {
        Ok(_) => panic!("expected script to fail: {source:?}"),
        Err(e) => e,
    }
}
