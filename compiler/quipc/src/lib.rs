//! Quip script runner.
//!
//! Ties the phases together: source text is lexed by `quip_lexer`, parsed
//! by `quip_parse` and executed by `quip_eval`. The `quip` binary is a thin
//! argument parser over [`commands`].

pub mod commands;
mod error;
pub mod options;
mod tracing_setup;

pub use commands::{lex_file, parse_file, run_file, run_source};
pub use error::QuipError;
pub use options::{parse_run_options, CommandLine, RunOptions};
pub use tracing_setup::init_tracing;
