//! Character escape resolution.
//!
//! Shared by string and character literals. Every path through
//! [`Lexer::resolve_char`] consumes at least one character, and on failure
//! consumes everything it inspected, so callers can always make progress.
//!
//! | escape   | value           |
//! |----------|-----------------|
//! | `\a`     | 0x07            |
//! | `\b`     | 0x08            |
//! | `\f`     | 0x0C            |
//! | `\n`     | 0x0A            |
//! | `\t`     | 0x09            |
//! | `\r`     | 0x0D            |
//! | `\0`     | 0x00            |
//! | `\'`     | `'`             |
//! | `\\`     | `\`             |
//! | `\xHH`   | byte `HH`       |
//! | `\uHHHH` | see [`UnicodeEscapes`] |

use micac_util::Span;

use crate::chars::hex_digit_to_value;
use crate::config::UnicodeEscapes;
use crate::error::LexErrorKind;
use crate::Lexer;

/// Why a character could not be resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum EscapeFailure {
    /// A diagnostic was reported and the bad escape consumed.
    Reported,
    /// Input ended; nothing was reported.
    EndOfInput,
}

impl<'a> Lexer<'a> {
    /// Resolves one source character or escape sequence.
    ///
    /// Escapes that produce a byte value `b` resolve to the char `U+00bb`,
    /// so decoded strings stay valid UTF-8 while every byte remains
    /// recoverable.
    pub(super) fn resolve_char(&mut self) -> Result<char, EscapeFailure> {
        if self.cursor.is_at_end() {
            return Err(EscapeFailure::EndOfInput);
        }

        let c = self.cursor.current_char();
        if c != '\\' {
            self.cursor.advance();
            return Ok(c);
        }

        let escape_start = self.cursor.position();
        let escape_location = self.cursor.location();
        self.cursor.advance();
        if self.cursor.is_at_end() {
            return Err(EscapeFailure::EndOfInput);
        }

        let indicator = self.cursor.current_char();
        self.cursor.advance();
        let resolved = match indicator {
            'a' => Ok('\x07'),
            'b' => Ok('\x08'),
            'f' => Ok('\x0C'),
            'n' => Ok('\n'),
            't' => Ok('\t'),
            'r' => Ok('\r'),
            '0' => Ok('\0'),
            '\'' => Ok('\''),
            '\\' => Ok('\\'),
            'x' => self
                .read_hex_digits(2)
                .map(|value| char::from(value as u8))
                .ok_or(None),
            'u' => match self.read_hex_digits(4) {
                Some(value) => self.resolve_unicode_escape(value),
                None => Err(None),
            },
            other => Err(Some(LexErrorKind::UnknownEscape(other))),
        };

        match resolved {
            Ok(c) => Ok(c),
            Err(error) => {
                let text = self.cursor.slice_from(escape_start);
                let kind =
                    error.unwrap_or_else(|| LexErrorKind::InvalidHexEscape(text.to_string()));
                let span = Span::new(escape_start, self.cursor.position(), escape_location);
                self.report_error_at(kind, span);
                Err(EscapeFailure::Reported)
            },
        }
    }

    /// Reads up to `count` hex digits, returning their value only if all
    /// `count` were present.
    fn read_hex_digits(&mut self, count: usize) -> Option<u32> {
        let mut value = 0u32;
        for _ in 0..count {
            let digit = hex_digit_to_value(self.cursor.current_char())?;
            self.cursor.advance();
            value = value * 16 + u32::from(digit);
        }
        Some(value)
    }

    fn resolve_unicode_escape(&self, value: u32) -> Result<char, Option<LexErrorKind>> {
        match self.config.unicode_escapes {
            UnicodeEscapes::Truncate => Ok(char::from((value & 0xFF) as u8)),
            UnicodeEscapes::CodePoint => char::from_u32(value).ok_or(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LexerConfig;
    use micac_util::Handler;

    fn resolve(source: &str) -> (Result<char, EscapeFailure>, usize, Vec<String>) {
        resolve_with(source, &LexerConfig::default())
    }

    fn resolve_with(
        source: &str,
        config: &LexerConfig,
    ) -> (Result<char, EscapeFailure>, usize, Vec<String>) {
        let handler = Handler::new();
        let mut lexer = Lexer::with_config(source, &handler, config);
        let result = lexer.resolve_char();
        let position = lexer.position();
        let messages = handler.diagnostics().into_iter().map(|d| d.message).collect();
        (result, position, messages)
    }

    #[test]
    fn test_plain_characters() {
        assert_eq!(resolve("a").0, Ok('a'));
        assert_eq!(resolve("é").0, Ok('é'));
        assert_eq!(resolve("é").1, 2);
        assert_eq!(resolve("\"").0, Ok('"'));
    }

    #[test]
    fn test_simple_escapes() {
        let cases = [
            ("\\a", '\x07'),
            ("\\b", '\x08'),
            ("\\f", '\x0C'),
            ("\\n", '\n'),
            ("\\t", '\t'),
            ("\\r", '\r'),
            ("\\0", '\0'),
            ("\\'", '\''),
            ("\\\\", '\\'),
        ];
        for (source, expected) in cases {
            let (result, position, messages) = resolve(source);
            assert_eq!(result, Ok(expected), "{}", source);
            assert_eq!(position, 2);
            assert!(messages.is_empty());
        }
    }

    #[test]
    fn test_hex_escape() {
        assert_eq!(resolve("\\x41").0, Ok('A'));
        assert_eq!(resolve("\\xff").0, Ok('\u{FF}'));
        assert_eq!(resolve("\\x411").1, 4);
    }

    #[test]
    fn test_short_hex_escape() {
        let (result, position, messages) = resolve("\\x4g");
        assert_eq!(result, Err(EscapeFailure::Reported));
        assert_eq!(position, 3);
        assert_eq!(messages, vec!["Invalid hex escape sequence: \\x4"]);
    }

    #[test]
    fn test_unicode_escape_truncates_by_default() {
        assert_eq!(resolve("\\u0041").0, Ok('A'));
        assert_eq!(resolve("\\u00FF").0, Ok('\u{FF}'));
        assert_eq!(resolve("\\u2641").0, Ok('A'));
        assert_eq!(resolve("\\u0041").1, 6);
    }

    #[test]
    fn test_unicode_escape_code_point() {
        let config = LexerConfig {
            unicode_escapes: UnicodeEscapes::CodePoint,
            ..LexerConfig::default()
        };
        assert_eq!(resolve_with("\\u2641", &config).0, Ok('\u{2641}'));

        let (result, _, messages) = resolve_with("\\uD800", &config);
        assert_eq!(result, Err(EscapeFailure::Reported));
        assert_eq!(messages, vec!["Invalid hex escape sequence: \\uD800"]);
    }

    #[test]
    fn test_unknown_escape_consumes_indicator() {
        let (result, position, messages) = resolve("\\q");
        assert_eq!(result, Err(EscapeFailure::Reported));
        assert_eq!(position, 2);
        assert_eq!(messages, vec!["Unknown escape sequence: q"]);
    }

    #[test]
    fn test_double_quote_is_not_an_escape() {
        let (result, _, messages) = resolve("\\\"");
        assert_eq!(result, Err(EscapeFailure::Reported));
        assert_eq!(messages, vec!["Unknown escape sequence: \""]);
    }

    #[test]
    fn test_end_of_input() {
        assert_eq!(resolve("").0, Err(EscapeFailure::EndOfInput));
        let (result, position, messages) = resolve("\\");
        assert_eq!(result, Err(EscapeFailure::EndOfInput));
        assert_eq!(position, 1);
        assert!(messages.is_empty());
    }
}
