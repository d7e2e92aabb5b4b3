//! Runtime errors raised while evaluating a program.

use quip_diagnostic::{Diagnostic, ErrorCode};
use quip_ir::Span;
use thiserror::Error;

/// A failure that stops execution. Statements after it are not run.
///
/// `span` is `None` when the error comes straight from the symbol table;
/// the interpreter attaches the span of the name that triggered it.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum RuntimeError {
    #[error("undefined variable `{name}`")]
    UndefinedVariable { name: String, span: Option<Span> },

    #[error("variable `{name}` is declared but has no value")]
    UnassignedVariable { name: String, span: Option<Span> },

    #[error("unknown function `{name}`")]
    UnknownFunction { name: String, span: Option<Span> },
}

impl RuntimeError {
    pub fn undefined_variable(name: impl Into<String>) -> Self {
        RuntimeError::UndefinedVariable {
            name: name.into(),
            span: None,
        }
    }

    pub fn unassigned_variable(name: impl Into<String>) -> Self {
        RuntimeError::UnassignedVariable {
            name: name.into(),
            span: None,
        }
    }

    pub fn unknown_function(name: impl Into<String>, span: Span) -> Self {
        RuntimeError::UnknownFunction {
            name: name.into(),
            span: Some(span),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            RuntimeError::UndefinedVariable { .. } => ErrorCode::E2001,
            RuntimeError::UnassignedVariable { .. } => ErrorCode::E2002,
            RuntimeError::UnknownFunction { .. } => ErrorCode::E2003,
        }
    }

    /// The name the error is about.
    pub fn name(&self) -> &str {
        match self {
            RuntimeError::UndefinedVariable { name, .. }
            | RuntimeError::UnassignedVariable { name, .. }
            | RuntimeError::UnknownFunction { name, .. } => name,
        }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            RuntimeError::UndefinedVariable { span, .. }
            | RuntimeError::UnassignedVariable { span, .. }
            | RuntimeError::UnknownFunction { span, .. } => *span,
        }
    }

    /// Attach a source span if the error does not have one yet.
    #[must_use]
    pub fn with_span(mut self, at: Span) -> Self {
        match &mut self {
            RuntimeError::UndefinedVariable { span, .. }
            | RuntimeError::UnassignedVariable { span, .. }
            | RuntimeError::UnknownFunction { span, .. } => {
                span.get_or_insert(at);
            }
        }
        self
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code()).with_message(self.to_string());
        if let Some(span) = self.span() {
            let label = match self {
                RuntimeError::UndefinedVariable { .. } => "not declared before this use",
                RuntimeError::UnassignedVariable { .. } => "read before a value was set",
                RuntimeError::UnknownFunction { .. } => "no built-in with this name",
            };
            diag = diag.with_label(span, label);
        }
        match &self {
            RuntimeError::UndefinedVariable { .. } => {
                let note = format!("declare it first: LET {} = \"...\"", self.name());
                diag.with_note(note)
            }
            RuntimeError::UnknownFunction { .. } => {
                diag.with_note("the only built-in function is `print`")
            }
            RuntimeError::UnassignedVariable { .. } => diag,
        }
    }
}
