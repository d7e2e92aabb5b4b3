//! Built-in functions.
//!
//! The set is fixed. Names match ignoring ASCII case.

use crate::print_handler::PrintHandlerImpl;
use crate::Value;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Builtin {
    /// Write the argument's text and a newline to the output.
    Print,
}

impl Builtin {
    pub const ALL: [Builtin; 1] = [Builtin::Print];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Print => "print",
        }
    }

    /// Resolve a call target.
    pub fn lookup(name: &str) -> Option<Builtin> {
        Self::ALL
            .into_iter()
            .find(|builtin| builtin.name().eq_ignore_ascii_case(name))
    }

    pub fn call(self, argument: &Value, out: &PrintHandlerImpl) {
        match self {
            Builtin::Print => out.println(argument.as_str()),
        }
    }
}
