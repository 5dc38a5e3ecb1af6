//! Identifier and keyword lexing.

use crate::chars::is_ident_continue;
use crate::tables::lookup_keyword;
use crate::token::{Identifier, TokenValue};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Consumes the longest run of identifier characters. Text that spells
    /// a keyword always becomes that keyword.
    pub(super) fn lex_identifier(&mut self) -> TokenValue {
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);
        match lookup_keyword(text) {
            Some(keyword) => TokenValue::Keyword(keyword),
            None => TokenValue::Identifier(Identifier::new(text)),
        }
    }
}
