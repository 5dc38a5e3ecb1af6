//! Numeric literal lexing.
//!
//! Lexing a number happens in two steps. First the literal's text is cut
//! out with a purely lexical rule (see
//! [`is_numeric_span_byte`](crate::chars::is_numeric_span_byte)); then
//! [`decode_number`] interprets that text.
//!
//! # Number Formats
//!
//! - Decimal: `42`, `017` (a leading zero does not mean octal)
//! - Hexadecimal: `0xFF`, `0X1a`
//! - Octal: `0o17`
//! - Binary: `0b101`
//! - Float: `3.14`, `1.5e3`, `2.` and hex floats like `0x1.8p3`
//! - Suffixes: `u`/`U` (unsigned), `f`/`F` (32-bit float), `d`/`D` (64-bit float)
//!
//! Integers accumulate with 64-bit wraparound. Signed literals are the bit
//! reinterpretation of the unsigned value, so `0xFFFFFFFFFFFFFFFF` is `-1`.

use crate::chars::{digit_value, is_numeric_span_byte};
use crate::error::LexErrorKind;
use crate::token::{Literal, TokenValue};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a numeric literal starting at a digit.
    ///
    /// The whole span is consumed even when decoding fails, so a malformed
    /// literal is skipped as one unit.
    pub(super) fn lex_number(&mut self) -> Option<TokenValue> {
        while self.cursor.current_byte().is_some_and(is_numeric_span_byte) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);
        match decode_number(text) {
            Ok(literal) => Some(TokenValue::Literal(literal)),
            Err(kind) => {
                self.report_error(kind);
                None
            },
        }
    }
}

/// Decodes the text of a numeric literal.
///
/// `text` is everything the literal spans, including base prefix and
/// suffix. The returned variant depends only on the suffix and on whether
/// the text has a radix point. Text without any digits (`""`, `"u"`) is an
/// invalid integer literal.
///
/// # Example
///
/// ```
/// use micac_lex::decode_number;
/// use micac_lex::token::Literal;
///
/// assert_eq!(decode_number("0x1A"), Ok(Literal::Signed(26)));
/// assert_eq!(decode_number("10u"), Ok(Literal::Unsigned(10)));
/// assert_eq!(decode_number("2.5f"), Ok(Literal::Float32(2.5)));
/// assert!(decode_number("3.14.15").is_err());
/// ```
pub fn decode_number(text: &str) -> Result<Literal, LexErrorKind> {
    let bytes = text.as_bytes();
    let is_hex = matches!(bytes, [b'0', b'x' | b'X', ..]);
    let has_point = text.contains('.');

    // f/F/d/D are hex digits, so a hex integer has no float suffix
    let float_suffix =
        matches!(bytes.last(), Some(b'f' | b'F' | b'd' | b'D')) && (has_point || !is_hex);
    let unsigned_suffix = matches!(bytes.last(), Some(b'u' | b'U'));
    let is_float = has_point || float_suffix;

    let body = if float_suffix || unsigned_suffix {
        &text[..text.len() - 1]
    } else {
        text
    };

    if is_float {
        let value = decode_float(body)
            .ok_or_else(|| LexErrorKind::InvalidFloatLiteral(text.to_string()))?;
        return Ok(match bytes.last() {
            Some(b'f' | b'F') if float_suffix => Literal::Float32(value as f32),
            _ => Literal::Float(value),
        });
    }

    let value = decode_integer(body)
        .ok_or_else(|| LexErrorKind::InvalidIntegerLiteral(text.to_string()))?;
    if unsigned_suffix {
        Ok(Literal::Unsigned(value))
    } else {
        Ok(Literal::Signed(value as i64))
    }
}

/// Parses integer text with an optional base prefix, wrapping on overflow.
///
/// A bare prefix (`0x`) is zero; text with no digits at all is rejected.
fn decode_integer(text: &str) -> Option<u64> {
    if text.is_empty() {
        return None;
    }
    let (base, digits) = match text.as_bytes() {
        [b'0', b'x' | b'X', ..] => (16, &text[2..]),
        [b'0', b'o' | b'O', ..] => (8, &text[2..]),
        [b'0', b'b' | b'B', ..] => (2, &text[2..]),
        _ => (10, text),
    };

    digits.chars().try_fold(0u64, |value, c| {
        let digit = digit_value(c, base)?;
        Some(value.wrapping_mul(u64::from(base)).wrapping_add(u64::from(digit)))
    })
}

/// Parses float text. The whole text must be consumed.
fn decode_float(text: &str) -> Option<f64> {
    match text.as_bytes() {
        [b'0', b'x' | b'X', ..] => decode_hex_float(&text[2..]),
        _ => text.parse::<f64>().ok(),
    }
}

/// Parses the part of a hex float after `0x`: hex mantissa with optional
/// radix point, then an optional `p` exponent (a power of two, in decimal).
fn decode_hex_float(text: &str) -> Option<f64> {
    let (mantissa, exponent) = match text.find(['p', 'P']) {
        Some(i) => (&text[..i], Some(&text[i + 1..])),
        None => (text, None),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let mut value = 0f64;
    for c in int_part.chars() {
        value = value * 16.0 + f64::from(c.to_digit(16)?);
    }
    let mut scale = 1.0 / 16.0;
    for c in frac_part.chars() {
        value += f64::from(c.to_digit(16)?) * scale;
        scale /= 16.0;
    }

    let exponent: i32 = match exponent {
        Some(digits) if digits.bytes().all(|b| b.is_ascii_digit()) => digits.parse().ok()?,
        Some(_) => return None,
        None => 0,
    };
    Some(value * 2f64.powi(exponent))
}
