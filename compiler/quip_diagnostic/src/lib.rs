//! Diagnostic system for Quip error reporting.
//!
//! Every phase error converts into a [`Diagnostic`]:
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Primary span (where it went wrong)
//! - Notes (how to fix it)
//!
//! [`emitter::TerminalEmitter`] renders diagnostics for humans.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label};
pub use emitter::{ColorMode, TerminalEmitter};
pub use error_code::ErrorCode;
