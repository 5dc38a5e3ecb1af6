//! Character classes for the Mica lexer.
//!
//! Identifiers are ASCII only: letters, digits and underscore, not starting
//! with a digit. Everything here works on `char` but only ever accepts
//! ASCII.

/// Checks if a character is whitespace.
///
/// Whitespace is space, horizontal tab, line feed, vertical tab, form feed
/// and carriage return.
///
/// # Example
///
/// ```
/// use micac_lex::chars::is_whitespace;
///
/// assert!(is_whitespace(' '));
/// assert!(is_whitespace('\x0B'));
/// assert!(!is_whitespace('\u{A0}'));
/// ```
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Checks if a character can start an identifier.
///
/// # Example
///
/// ```
/// use micac_lex::chars::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('α'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character can continue an identifier.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Checks if a byte can be part of a numeric literal's text.
///
/// Hex letters, base prefixes, the digit separator `'`, the radix point,
/// the binary exponent marker and the unsigned suffix are accepted
/// regardless of base. Whether the text is a valid number is decided
/// afterwards when the literal is decoded.
///
/// # Example
///
/// ```
/// use micac_lex::chars::is_numeric_span_byte;
///
/// assert!(is_numeric_span_byte(b'F'));
/// assert!(is_numeric_span_byte(b'.'));
/// assert!(is_numeric_span_byte(b'u'));
/// assert!(!is_numeric_span_byte(b'g'));
/// ```
#[inline]
pub fn is_numeric_span_byte(b: u8) -> bool {
    b.is_ascii_hexdigit()
        || matches!(b, b'\'' | b'x' | b'X' | b'o' | b'O' | b'p' | b'P' | b'.' | b'u' | b'U')
}

/// Returns the value of `c` as a digit in `base`, if it is one.
///
/// # Example
///
/// ```
/// use micac_lex::chars::digit_value;
///
/// assert_eq!(digit_value('7', 8), Some(7));
/// assert_eq!(digit_value('8', 8), None);
/// assert_eq!(digit_value('f', 16), Some(15));
/// assert_eq!(digit_value('A', 10), None);
/// ```
#[inline]
pub fn digit_value(c: char, base: u32) -> Option<u32> {
    match base {
        2 | 8 | 10 | 16 => c.to_digit(base),
        _ => None,
    }
}

/// Converts a hex digit character to its value.
#[inline]
pub fn hex_digit_to_value(c: char) -> Option<u8> {
    c.to_digit(16).map(|d| d as u8)
}
