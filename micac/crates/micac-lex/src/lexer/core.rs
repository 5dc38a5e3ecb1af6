//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and the scan loop that
//! dispatches on the current character.

use micac_util::{DiagnosticBuilder, Handler, Location, Span};
use tracing::{debug, trace};

use crate::chars::{is_ident_start, is_whitespace};
use crate::config::LexerConfig;
use crate::cursor::Cursor;
use crate::error::LexErrorKind;
use crate::token::{Separator, Token, TokenValue};

/// Lexer for the Mica programming language.
///
/// The lexer makes a single left-to-right pass over the source. Malformed
/// fragments are reported to the [`Handler`] and skipped; the pass always
/// runs to the end of the input.
///
/// # Example
///
/// ```
/// use micac_lex::token::{Operator, TokenValue};
/// use micac_lex::Lexer;
/// use micac_util::Handler;
///
/// let handler = Handler::new();
/// let tokens = Lexer::new("u32 a = 3;", &handler).tokenize();
/// assert_eq!(tokens.len(), 5);
/// assert_eq!(tokens[2].value(), &TokenValue::Operator(Operator::Assign));
/// assert!(!handler.has_errors());
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(super) cursor: Cursor<'a>,

    /// Error handler for reporting lexical errors.
    handler: &'a Handler,

    /// Settings for this pass.
    pub(super) config: LexerConfig,

    /// Starting position of the current token (byte offset).
    pub(super) token_start: usize,

    /// Line and column where the current token starts.
    token_location: Location,

    /// Tokens produced so far.
    token_count: usize,

    /// Diagnostics reported so far.
    reported: usize,

    /// Diagnostics dropped because of `max_diagnostics`.
    suppressed: usize,

    /// Set once the scan has reached the end of input or a NUL byte.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code with default settings.
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        Self::with_config(source, handler, &LexerConfig::default())
    }

    /// Creates a new lexer with explicit settings.
    pub fn with_config(source: &'a str, handler: &'a Handler, config: &LexerConfig) -> Self {
        debug!(bytes = source.len(), "starting lex pass");
        Self {
            cursor: Cursor::new(source),
            handler,
            config: config.clone(),
            token_start: 0,
            token_location: Location::START,
            token_count: 0,
            reported: 0,
            suppressed: 0,
            finished: false,
        }
    }

    /// Runs the whole pass and returns every token.
    ///
    /// Diagnostics go to the handler given at construction.
    pub fn tokenize(mut self) -> Vec<Token> {
        self.by_ref().collect()
    }

    /// Returns the next token, or `None` once the input is exhausted.
    ///
    /// Whitespace and malformed fragments are skipped here, so a single
    /// call may consume any amount of input.
    pub fn next_token(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        loop {
            match self.cursor.current_byte() {
                None | Some(0) => return self.finish(),
                Some(_) => {},
            }

            self.token_start = self.cursor.position();
            self.token_location = self.cursor.location();
            let c = self.cursor.current_char();

            if is_whitespace(c) {
                self.cursor.advance();
                continue;
            }

            if let Some(value) = self.lex_operator() {
                return Some(self.make_token(value));
            }
            if let Some(value) = self.lex_separator() {
                return Some(self.make_token(value));
            }

            let value = match c {
                '"' => self.lex_string(),
                '\'' => self.lex_char(),
                c if is_ident_start(c) => Some(self.lex_identifier()),
                c if c.is_ascii_digit() => self.lex_number(),
                c => {
                    self.cursor.advance();
                    self.report_error(LexErrorKind::UnexpectedCharacter(c));
                    None
                },
            };

            if let Some(value) = value {
                return Some(self.make_token(value));
            }
        }
    }

    /// Stops the scan, producing the end-of-program marker if configured.
    fn finish(&mut self) -> Option<Token> {
        self.finished = true;
        debug!(
            tokens = self.token_count,
            diagnostics = self.reported,
            suppressed = self.suppressed,
            "finished lex pass"
        );

        if !self.config.end_of_program {
            return None;
        }
        self.token_start = self.cursor.position();
        self.token_location = self.cursor.location();
        Some(self.make_token(TokenValue::Separator(Separator::EndOfProgram)))
    }

    /// Builds a token spanning from the token start to the cursor.
    fn make_token(&mut self, value: TokenValue) -> Token {
        let span = Span::new(self.token_start, self.cursor.position(), self.token_location);
        let token = Token::new(value, span);
        self.token_count += 1;
        trace!(kind = %token.kind(), value = %token.value(), location = %span.location, "token");
        token
    }

    /// Reports a lexical error covering the current token so far.
    pub(super) fn report_error(&mut self, kind: LexErrorKind) {
        let span = Span::new(self.token_start, self.cursor.position(), self.token_location);
        self.report_error_at(kind, span);
    }

    /// Reports a lexical error at an explicit span.
    pub(super) fn report_error_at(&mut self, kind: LexErrorKind, span: Span) {
        if self
            .config
            .max_diagnostics
            .is_some_and(|max| self.reported >= max)
        {
            self.suppressed += 1;
            return;
        }
        self.reported += 1;
        DiagnosticBuilder::error(kind.to_string())
            .code(kind.code())
            .span(span)
            .emit(self.handler);
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Number of diagnostics dropped because `max_diagnostics` was reached.
    pub fn suppressed_count(&self) -> usize {
        self.suppressed
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}
