//! Tree-walking interpreter for Quip.
//!
//! Walks a [`quip_ir::Program`], binding variables in a [`SymbolTable`] and
//! sending `print` output to a [`PrintHandlerImpl`].
//!
//! ```text
//! let out = buffer_handler();
//! let mut interpreter = Interpreter::new(out.clone());
//! interpreter.run(&program)?;
//! assert_eq!(out.get_output(), "hello\n");
//! ```

mod builtins;
mod errors;
mod interpreter;
pub mod print_handler;
mod symbol_table;
mod value;

pub use builtins::Builtin;
pub use errors::RuntimeError;
pub use interpreter::Interpreter;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandlerImpl, SharedPrintHandler,
};
pub use symbol_table::SymbolTable;
pub use value::Value;
