//! Error types for the Mica lexer.
//!
//! Lexical errors are never returned from the scan itself. Each one is
//! reported as a [`Diagnostic`] through the [`Handler`](micac_util::Handler)
//! and scanning continues. [`LexErrorKind`] names the failure and supplies
//! the message and code; [`LexErrors`] is the failure side of a finished
//! pass.

use micac_util::{Diagnostic, DiagnosticCode};
use std::path::PathBuf;
use thiserror::Error;

/// The kinds of lexical error.
///
/// The `Display` text of each variant is the diagnostic message.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum LexErrorKind {
    /// Backslash followed by a character that names no escape.
    #[error("Unknown escape sequence: {0}")]
    UnknownEscape(char),

    /// `\x` or `\u` without enough hex digits, or a `\u` that is not a
    /// valid code point.
    #[error("Invalid hex escape sequence: {0}")]
    InvalidHexEscape(String),

    /// Input ended before the closing `"`.
    #[error("Unexpected end of string literal")]
    UnterminatedString,

    /// Character literal without its closing `'`.
    #[error("Expected closing '")]
    UnterminatedChar,

    /// Text with a radix point or float suffix that is not a float.
    #[error("Invalid float literal: {0}")]
    InvalidFloatLiteral(String),

    /// Integer text with a digit outside its base.
    #[error("Invalid integer literal: {0}")]
    InvalidIntegerLiteral(String),

    /// A character that starts no token.
    #[error("Unexpected character: {0}")]
    UnexpectedCharacter(char),
}

impl LexErrorKind {
    /// Stable diagnostic code for this kind.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexErrorKind::UnknownEscape(_) => DiagnosticCode::E_LEXER_UNKNOWN_ESCAPE,
            LexErrorKind::InvalidHexEscape(_) => DiagnosticCode::E_LEXER_INVALID_HEX_ESCAPE,
            LexErrorKind::UnterminatedString => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            LexErrorKind::UnterminatedChar => DiagnosticCode::E_LEXER_UNTERMINATED_CHAR,
            LexErrorKind::InvalidFloatLiteral(_) => DiagnosticCode::E_LEXER_INVALID_FLOAT,
            LexErrorKind::InvalidIntegerLiteral(_) => DiagnosticCode::E_LEXER_INVALID_INTEGER,
            LexErrorKind::UnexpectedCharacter(_) => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
        }
    }
}

/// Every diagnostic from a failed lex pass, in the order they were found.
///
/// Empty only when every diagnostic of the pass was dropped by
/// `max_diagnostics`.
#[derive(Error, Clone, Debug, PartialEq)]
#[error("{}", summarize(.diagnostics))]
pub struct LexErrors {
    diagnostics: Vec<Diagnostic>,
}

fn summarize(diagnostics: &[Diagnostic]) -> String {
    match diagnostics {
        [] => "lexing failed".to_string(),
        [only] => only.to_string(),
        [first, rest @ ..] => format!("{} (and {} more)", first, rest.len()),
    }
}

impl LexErrors {
    /// Wrap a list of diagnostics.
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// The diagnostics, in report order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Number of diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns true if there are no diagnostics.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Consume the error, returning the diagnostics.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

/// Errors loading a [`LexerConfig`](crate::LexerConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// The file is not valid TOML or has a field of the wrong type.
    #[error("invalid lexer configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
