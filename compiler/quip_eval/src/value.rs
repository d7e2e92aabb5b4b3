//! Runtime values.

use std::fmt;

/// A runtime value. Quip only has strings.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Value {
    Str(String),
}

impl Value {
    /// The textual form written by `print`.
    pub fn as_str(&self) -> &str {
        match self {
            Value::Str(s) => s,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}
