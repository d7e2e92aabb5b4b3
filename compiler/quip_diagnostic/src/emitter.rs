//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.
//! When the emitter knows the source text, the label is rendered as
//! `path:line:col` with the offending line and a caret underline.

use std::io::{self, Write};

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Label};

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const NOTE: &str = "\x1b[1;36m"; // Bold cyan
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse a `--color=` flag value.
    pub fn from_flag(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Source text a diagnostic's spans point into.
struct SourceFile {
    path: String,
    text: String,
    lines: LineOffsetTable,
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceFile>,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    ///
    /// `is_tty` is only consulted for `ColorMode::Auto`.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Attach the source text so labels render with line, column and snippet.
    #[must_use]
    pub fn with_source(mut self, path: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        self.source = Some(SourceFile {
            path: path.into(),
            lines: LineOffsetTable::build(&text),
            text,
        });
        self
    }

    /// Write one diagnostic followed by a blank line.
    pub fn emit(&mut self, diagnostic: &Diagnostic) {
        self.write_colored("error", colors::ERROR);
        if self.colors {
            let _ = write!(self.writer, "{}[{}]{}", colors::BOLD, diagnostic.code, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{}]", diagnostic.code);
        }
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        if let Some(label) = &diagnostic.label {
            self.write_label(label);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::NOTE);
            let _ = writeln!(self.writer, ": {note}");
        }

        let _ = writeln!(self.writer);
    }

    pub fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn write_label(&mut self, label: &Label) {
        let Some(source) = &self.source else {
            let _ = write!(self.writer, "  --> {:?}: ", label.span);
            self.write_colored(&label.message, colors::ERROR);
            let _ = writeln!(self.writer);
            return;
        };

        let (line, col) = source.lines.offset_to_line_col(&source.text, label.span.start);
        let line_text = source.lines.line_text(&source.text, line).to_string();
        let gutter = " ".repeat(line.to_string().len());
        let underline_width = source
            .text
            .get(label.span.to_range())
            .map_or(1, |s| s.chars().count().max(1));
        let path = source.path.clone();

        let _ = writeln!(self.writer, "{gutter}--> {path}:{line}:{col}");
        let _ = writeln!(self.writer, "{gutter} |");
        let _ = writeln!(self.writer, "{line} | {line_text}");
        let _ = write!(
            self.writer,
            "{gutter} | {}",
            " ".repeat(col.saturating_sub(1) as usize)
        );
        self.write_colored(&"^".repeat(underline_width), colors::ERROR);
        let _ = write!(self.writer, " ");
        self.write_colored(&label.message, colors::ERROR);
        let _ = writeln!(self.writer);
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Create a terminal emitter for stderr.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}
