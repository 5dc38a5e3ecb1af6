//! micac-lex - Lexical Analyzer for the Mica Programming Language
//!
//! This crate turns Mica source text into a sequence of typed tokens for
//! the parser.
//!
//! # Example Usage
//!
//! ```
//! use micac_lex::token::{Literal, TokenValue};
//!
//! let tokens = micac_lex::lex("u32 a = 3;").unwrap();
//! assert_eq!(tokens.len(), 5);
//! assert_eq!(tokens[3].value(), &TokenValue::Literal(Literal::Signed(3)));
//!
//! let errors = micac_lex::lex("a = #;").unwrap_err();
//! assert_eq!(errors.diagnostics()[0].message, "Unexpected character: #");
//! ```
//!
//! Tooling that wants the tokens even when there are errors uses
//! [`lex_with_diagnostics`]; a caller that owns its own
//! [`Handler`](micac_util::Handler) drives a [`Lexer`] directly.
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`lexer`] - Scan loop and literal decoding
//! - [`tables`] - Operator, separator and keyword tables
//! - [`cursor`] - Character cursor for source traversal
//! - [`chars`] - Character classes
//! - [`config`] - Lexer settings
//! - [`error`] - Error kinds and the failed-pass error
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `if`, `else`, `return`, `func`
//!
//! ## Identifiers
//!
//! Pattern: `[a-zA-Z_][a-zA-Z0-9_]*`. Type names such as `u32` are
//! identifiers.
//!
//! ## Operators
//!
//! `+`, `-`, `*`, `/`, `=`
//!
//! ## Separators
//!
//! `(`, `)`, `{`, `}`, `[`, `]`, `,`, `.`, `;`
//!
//! ## Literals
//!
//! - **String**: `"hello\n"`
//! - **Character**: `'a'`, `'\x41'` (lexed as a numeric literal)
//! - **Integer**: `42`, `0x1A`, `0o17`, `0b101`, `10u`
//! - **Float**: `3.5`, `3.5f`, `3.5d`, `0x1.8p3`
//!
//! # Locations
//!
//! Every token carries a 1-based line and column. Columns count bytes from
//! the start of the line.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod config;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod tables;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use config::{LexerConfig, UnicodeEscapes};
pub use error::{ConfigError, LexErrorKind, LexErrors};
pub use lexer::{decode_number, Lexer};
pub use tables::init;
pub use token::{Keyword, Literal, Operator, Separator, Token, TokenKind, TokenValue};

use micac_util::{Diagnostic, Handler};

/// Result of a full lex pass: every token, or every diagnostic.
pub type LexResult = Result<Vec<Token>, LexErrors>;

/// Tokens and diagnostics of a lex pass, side by side.
///
/// Unlike [`LexResult`] this keeps the tokens that were lexed successfully
/// even when there are errors.
#[derive(Clone, Debug, PartialEq)]
pub struct LexOutput {
    /// Tokens in source order
    pub tokens: Vec<Token>,
    /// Diagnostics in report order
    pub diagnostics: Vec<Diagnostic>,
    /// Diagnostics dropped because `max_diagnostics` was reached
    pub suppressed: usize,
}

impl LexOutput {
    /// Returns true if the pass reported any error.
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty() || self.suppressed > 0
    }

    /// Keep the tokens if the pass was clean, else the diagnostics.
    pub fn into_result(self) -> LexResult {
        if self.has_errors() {
            Err(LexErrors::new(self.diagnostics))
        } else {
            Ok(self.tokens)
        }
    }
}

/// Lexes `source` with default settings.
pub fn lex(source: &str) -> LexResult {
    lex_with_diagnostics(source, &LexerConfig::default()).into_result()
}

/// Lexes `source`, returning the tokens together with every diagnostic.
///
/// # Example
///
/// ```
/// use micac_lex::{lex_with_diagnostics, LexerConfig};
///
/// let output = lex_with_diagnostics("a = 3.1.4;", &LexerConfig::default());
/// assert_eq!(output.tokens.len(), 3);
/// assert_eq!(output.diagnostics[0].message, "Invalid float literal: 3.1.4");
/// ```
pub fn lex_with_diagnostics(source: &str, config: &LexerConfig) -> LexOutput {
    let handler = Handler::new();
    let mut lexer = Lexer::with_config(source, &handler, config);
    let tokens: Vec<Token> = lexer.by_ref().collect();
    let suppressed = lexer.suppressed_count();
    LexOutput {
        tokens,
        diagnostics: handler.take_diagnostics(),
        suppressed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use micac_util::{Location, SourceFile};

    #[test]
    fn test_function_program() {
        let source = "func add(a, b) {\n    return a + b;\n}\n";
        let tokens = lex(source).unwrap();
        assert_eq!(tokens.len(), 14);
        assert!(tokens[0].is_keyword(Keyword::Func));
        assert!(tokens[8].is_keyword(Keyword::Return));
        assert_eq!(tokens[8].location(), Location::new(2, 5));
        assert_eq!(tokens[13].location(), Location::new(3, 1));
    }

    #[test]
    fn test_if_else_program() {
        let source = r#"if x { y = "yes"; } else { y = 'n'; }"#;
        let output = lex_with_diagnostics(source, &LexerConfig::default());
        assert!(!output.has_errors());
        let kinds: Vec<TokenKind> = output.tokens.iter().map(Token::kind).collect();
        assert_eq!(kinds.iter().filter(|&&k| k == TokenKind::Keyword).count(), 2);
        assert_eq!(kinds.iter().filter(|&&k| k == TokenKind::String).count(), 1);
        assert_eq!(kinds.iter().filter(|&&k| k == TokenKind::Numeric).count(), 1);
    }

    #[test]
    fn test_lex_collects_every_diagnostic() {
        let errors = lex("a = #; b = 0b12; c = \"\\q\";").unwrap_err();
        let messages: Vec<&str> = errors
            .diagnostics()
            .iter()
            .map(|d| d.message.as_str())
            .collect();
        assert_eq!(
            messages,
            vec![
                "Unexpected character: #",
                "Invalid integer literal: 0b12",
                "Unknown escape sequence: q",
            ]
        );
    }

    #[test]
    fn test_partial_tokens_are_kept() {
        let output = lex_with_diagnostics("a # b", &LexerConfig::default());
        assert_eq!(output.tokens.len(), 2);
        assert_eq!(output.diagnostics.len(), 1);
        assert!(output.clone().into_result().is_err());
    }

    #[test]
    fn test_suppressed_diagnostics_still_fail() {
        let config = LexerConfig {
            max_diagnostics: Some(0),
            ..LexerConfig::default()
        };
        let output = lex_with_diagnostics("#", &config);
        assert!(output.diagnostics.is_empty());
        assert_eq!(output.suppressed, 1);
        assert!(output.into_result().is_err());
    }

    #[test]
    fn test_diagnostic_codes() {
        let output = lex_with_diagnostics("'a", &LexerConfig::default());
        let diag = &output.diagnostics[0];
        assert_eq!(diag.code, Some(LexErrorKind::UnterminatedChar.code()));
    }

    #[test]
    fn test_render_diagnostic() {
        let source = "u32 a = 3;\nb = 0o19;";
        let file = SourceFile::new("main.mc", source);
        let errors = lex(file.content()).unwrap_err();
        let rendered = errors.diagnostics()[0].render(&file);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "error[E1006]: Invalid integer literal: 0o19");
        assert_eq!(lines[1], "  --> main.mc:2:5");
        assert_eq!(lines[2], "  2 | b = 0o19;");
        assert_eq!(lines[3], "    |     ^^^^");
    }

    #[test]
    fn test_init_before_threads() {
        init();
        let handles: Vec<_> = ["a = 1;", "func f() {}", "if x { return 2; }"]
            .into_iter()
            .map(|source| std::thread::spawn(move || lex(source).map(|t| t.len())))
            .collect();
        let counts: Vec<usize> = handles
            .into_iter()
            .map(|h| h.join().unwrap().unwrap())
            .collect();
        assert_eq!(counts, vec![4, 6, 7]);
    }

    #[test]
    fn test_tokens_serialize_to_json() {
        let tokens = lex("a = 10u;").unwrap();
        let json = serde_json::to_value(&tokens).unwrap();
        assert_eq!(json[2]["value"]["Literal"]["Unsigned"], 10);
        assert_eq!(json[2]["span"]["location"]["column"], 5);
    }
}
