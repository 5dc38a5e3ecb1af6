//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! This module provides types for creating, formatting, and collecting
//! compiler diagnostics (errors, warnings, notes, and help messages).
//!
//! # Examples
//!
//! ```
//! use micac_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use micac_util::span::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("Unexpected character: $")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::DUMMY)
//!     .emit(&handler);
//!
//! if handler.has_errors() {
//!     eprintln!("Lexing failed with {} errors", handler.error_count());
//! }
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use crate::span::{Location, SourceFile, Span};
use serde::Serialize;
use std::cell::{Cell, RefCell};
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use micac_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// An error that prevents compilation
    Error,
    /// A warning that doesn't prevent compilation
    Warning,
    /// Additional information about a diagnostic
    Note,
    /// A suggestion for fixing an issue
    Help,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
            Level::Help => write!(f, "help"),
        }
    }
}

/// A diagnostic message with severity and location
///
/// # Examples
///
/// ```
/// use micac_util::diagnostic::{Diagnostic, Level};
/// use micac_util::span::Span;
///
/// let diag = Diagnostic::error("something went wrong", Span::DUMMY);
/// assert_eq!(diag.level, Level::Error);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a note to the diagnostic
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Line and column where the diagnostic starts
    #[inline]
    pub fn location(&self) -> Location {
        self.span.location
    }

    /// Render the diagnostic against the file it was reported for
    ///
    /// Produces the header (`error[E1007]: message`), a `-->` pointer, a
    /// caret snippet built from the span, then any notes and helps.
    ///
    /// # Examples
    ///
    /// ```
    /// use micac_util::diagnostic::{Diagnostic, DiagnosticCode};
    /// use micac_util::span::{Location, SourceFile, Span};
    ///
    /// let file = SourceFile::new("main.mc", "a = #;");
    /// let diag = Diagnostic::error("Unexpected character: #", Span::new(4, 5, Location::new(1, 5)))
    ///     .with_code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR);
    /// let rendered = diag.render(&file);
    /// assert!(rendered.starts_with("error[E1007]: Unexpected character: #"));
    /// assert!(rendered.contains("--> main.mc:1:5"));
    /// ```
    pub fn render(&self, file: &SourceFile) -> String {
        let mut out = match self.code {
            Some(code) => format!("{}[{}]: {}\n", self.level, code, self.message),
            None => format!("{}: {}\n", self.level, self.message),
        };
        out.push_str(&format!("  --> {}:{}\n", file.name(), self.span.location));

        if let Some(snippet) = SourceSnippet::from_span(file, self.span) {
            out.push_str(&snippet.format());
            out.push('\n');
        }

        for note in &self.notes {
            out.push_str(&format!("  = note: {}\n", note));
        }
        for help in &self.helps {
            out.push_str(&format!("  = help: {}\n", help));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} at {}", self.level, self.message, self.span.location)
    }
}

/// Handler for collecting and reporting diagnostics
///
/// The `Handler` collects diagnostics in emission order and provides
/// methods for querying their counts. It can be configured to keep at
/// most a fixed number of diagnostics. Emitting never aborts the caller.
///
/// # Examples
///
/// ```
/// use micac_util::diagnostic::{Diagnostic, Handler};
/// use micac_util::span::Span;
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::error("unexpected token", Span::DUMMY));
///
/// if handler.has_errors() {
///     eprintln!("Compilation failed with {} errors", handler.error_count());
/// }
/// ```
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
    /// Maximum number of diagnostics kept, if any
    limit: Option<usize>,
    /// Diagnostics dropped because the limit was reached
    suppressed: Cell<usize>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            limit: None,
            suppressed: Cell::new(0),
        }
    }

    /// Create a handler that keeps at most `limit` diagnostics
    ///
    /// Diagnostics past the limit are dropped and counted by
    /// [`Handler::suppressed_count`].
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            limit,
            ..Self::new()
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        let mut diagnostics = self.diagnostics.borrow_mut();
        if self.limit.is_some_and(|limit| diagnostics.len() >= limit) {
            self.suppressed.set(self.suppressed.get() + 1);
            return;
        }
        diagnostics.push(diagnostic);
    }

    /// Check if any errors have been reported
    ///
    /// Suppressed errors count: a handler that dropped diagnostics because
    /// of its limit still reports failure.
    pub fn has_errors(&self) -> bool {
        self.suppressed.get() > 0
            || self
                .diagnostics
                .borrow()
                .iter()
                .any(|d| d.level == Level::Error)
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Warning)
            .count()
    }

    /// Number of diagnostics dropped because the limit was reached
    pub fn suppressed_count(&self) -> usize {
        self.suppressed.get()
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Take all diagnostics, leaving the handler empty
    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        self.suppressed.set(0);
        self.diagnostics.take()
    }

    /// Clear all diagnostics
    pub fn clear(&self) {
        self.suppressed.set(0);
        self.diagnostics.borrow_mut().clear();
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}
