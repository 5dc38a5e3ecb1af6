//! String and character literal lexing.

use super::escape::EscapeFailure;
use crate::error::LexErrorKind;
use crate::token::{Literal, TokenValue};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal.
    ///
    /// The cursor must be on the opening `"`. Contents are resolved one
    /// character at a time until an unescaped `"`. There is no `\"` escape,
    /// so a string cannot contain a double quote.
    ///
    /// A bad escape is reported and the rest of the literal, up to and
    /// including its closing quote, is consumed without producing a token.
    /// Reaching the end of input reports the literal as unterminated.
    pub(super) fn lex_string(&mut self) -> Option<TokenValue> {
        self.cursor.advance();

        let mut content = String::new();
        let mut failed = false;

        loop {
            if self.cursor.current_char() == '"' {
                self.cursor.advance();
                break;
            }

            match self.resolve_char() {
                Ok(c) => content.push(c),
                Err(EscapeFailure::Reported) => failed = true,
                Err(EscapeFailure::EndOfInput) => {
                    self.report_error(LexErrorKind::UnterminatedString);
                    return None;
                },
            }
        }

        if failed {
            return None;
        }
        Some(TokenValue::Literal(Literal::String(content)))
    }

    /// Lexes a character literal.
    ///
    /// The cursor must be on the opening `'`. The literal holds exactly one
    /// resolved character and decodes to its numeric value. The closing `'`
    /// is required and consumed.
    pub(super) fn lex_char(&mut self) -> Option<TokenValue> {
        self.cursor.advance();

        let value = match self.resolve_char() {
            Ok(c) => Some(c),
            Err(EscapeFailure::Reported) => None,
            Err(EscapeFailure::EndOfInput) => {
                self.report_error(LexErrorKind::UnterminatedChar);
                return None;
            },
        };

        if !self.cursor.match_char('\'') {
            self.report_error(LexErrorKind::UnterminatedChar);
            return None;
        }

        value.map(|c| TokenValue::Literal(Literal::Signed(i64::from(u32::from(c)))))
    }
}
