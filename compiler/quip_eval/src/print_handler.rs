//! Where `print` output goes.
//!
//! The interpreter only ever writes whole lines. The driver hands it the
//! stdout sink; tests and embedders hand it a buffer and read the lines back.

use std::sync::Arc;

use parking_lot::Mutex;

/// Destination for lines written by `print`.
pub enum PrintHandlerImpl {
    /// The process's stdout.
    Stdout,
    /// Newline-terminated lines kept in write order.
    Buffer(Mutex<String>),
    /// Lines are dropped.
    Silent,
}

impl PrintHandlerImpl {
    /// Write `text` and a trailing `\n`.
    pub fn println(&self, text: &str) {
        match self {
            PrintHandlerImpl::Stdout => println!("{text}"),
            PrintHandlerImpl::Buffer(buffer) => {
                let mut buffer = buffer.lock();
                buffer.push_str(text);
                buffer.push('\n');
            }
            PrintHandlerImpl::Silent => {}
        }
    }

    /// Everything written so far. Only a buffer keeps anything.
    pub fn get_output(&self) -> String {
        match self {
            PrintHandlerImpl::Buffer(buffer) => buffer.lock().clone(),
            PrintHandlerImpl::Stdout | PrintHandlerImpl::Silent => String::new(),
        }
    }
}

/// One sink shared between the caller and the interpreter.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout)
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(Mutex::new(String::new())))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}
