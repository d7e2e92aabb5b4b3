// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Phase-based tests for the whole pipeline.
//!
//! - `parse/` - lexer and parser behaviour seen through `quipc`
//! - `eval/` - end-to-end script execution and runtime errors
//! - `common/` - shared helpers
//!
//! ```bash
//! cargo test -p quipc --test phases
//! cargo test -p quipc --test phases eval
//! ```

#[path = "phases/common/mod.rs"]
mod common;

#[path = "phases/parse/mod.rs"]
mod parse;

#[path = "phases/eval/mod.rs"]
mod eval;
