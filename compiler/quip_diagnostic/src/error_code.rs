use std::fmt;

/// Error codes for all Quip diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E2xxx: Runtime errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Unexpected character in source
    E0002,
    /// Source too large to address with 32-bit spans
    E0003,

    // Parser Errors (E1xxx)
    /// Syntax error: no statement form matches
    E1001,
    /// Unexpected end of input
    E1002,

    // Runtime Errors (E2xxx)
    /// Undefined variable
    E2001,
    /// Variable declared but never assigned
    E2002,
    /// Unknown function
    E2003,
}

impl ErrorCode {
    /// Get the numeric code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
        }
    }

    /// One-line summary of what the code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated string literal",
            ErrorCode::E0002 => "unexpected character",
            ErrorCode::E0003 => "source file too large",
            ErrorCode::E1001 => "syntax error",
            ErrorCode::E1002 => "unexpected end of input",
            ErrorCode::E2001 => "undefined variable",
            ErrorCode::E2002 => "variable declared but not assigned",
            ErrorCode::E2003 => "unknown function",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
