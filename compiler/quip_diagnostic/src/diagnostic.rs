//! The report every phase error is turned into before it reaches the user.

use quip_ir::Span;

use crate::ErrorCode;

/// The spot a diagnostic points at, with a short remark shown beside it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
}

/// A fail-fast error, ready for an emitter.
///
/// Quip has no warnings, so there is no severity: every diagnostic ends the
/// run. At most one source location is reported.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "a diagnostic does nothing until it is emitted"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    /// `None` for errors with no source location, such as an oversized file.
    pub label: Option<Label>,
    /// Hints printed after the snippet, in order.
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Start a report for `code`, worded with the code's own description.
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: code.description().to_string(),
            label: None,
            notes: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Point at `span`. Calling this again moves the label.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.label = Some(Label {
            span,
            message: message.into(),
        });
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// The labelled span, if any.
    pub fn span(&self) -> Option<Span> {
        self.label.as_ref().map(|label| label.span)
    }
}
