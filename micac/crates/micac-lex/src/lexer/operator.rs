//! Operator and separator lexing.
//!
//! Both are table driven; see [`crate::tables`].

use crate::tables::{lookup_operator, lookup_separator};
use crate::token::TokenValue;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes the longest operator at the cursor, if there is one.
    pub(super) fn lex_operator(&mut self) -> Option<TokenValue> {
        let (operator, len) = lookup_operator(self.cursor.remaining())?;
        self.cursor.advance_bytes(len);
        Some(TokenValue::Operator(operator))
    }

    /// Lexes a separator at the cursor, if there is one.
    pub(super) fn lex_separator(&mut self) -> Option<TokenValue> {
        let separator = lookup_separator(self.cursor.current_char())?;
        self.cursor.advance();
        Some(TokenValue::Separator(separator))
    }
}
