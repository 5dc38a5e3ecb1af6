//! Diagnostic codes for categorizing compiler errors and warnings.
//!
//! This module provides the [`DiagnosticCode`] type for uniquely identifying
//! diagnostic messages, so tooling can match on a stable identifier instead
//! of the message text.
//!
//! # Examples
//!
//! ```
//! use micac_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_INVALID_FLOAT;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1005);
//! assert_eq!(code.as_str(), "E1005");
//! ```

use serde::{Serialize, Serializer};
use std::fmt;

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where:
/// - `prefix` is "E" for errors or "W" for warnings
/// - `number` is a 4-digit number (padded with zeros)
///
/// Lexer codes occupy the `E1000` block.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    ///
    /// # Examples
    ///
    /// ```
    /// use micac_util::diagnostic::DiagnosticCode;
    ///
    /// let code = DiagnosticCode::new("E", 1001);
    /// assert_eq!(code.prefix(), "E");
    /// assert_eq!(code.number(), 1001);
    /// ```
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix (e.g., "E" for error, "W" for warning)
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXER ERROR CODES (E1001-E1999)
    // =========================================================================

    /// E1001: Unknown escape sequence in a string or character literal
    pub const E_LEXER_UNKNOWN_ESCAPE: Self = Self::new("E", 1001);
    /// E1002: `\x` or `\u` escape without enough hex digits
    pub const E_LEXER_INVALID_HEX_ESCAPE: Self = Self::new("E", 1002);
    /// E1003: String literal without a closing quote
    pub const E_LEXER_UNTERMINATED_STRING: Self = Self::new("E", 1003);
    /// E1004: Character literal without a closing apostrophe
    pub const E_LEXER_UNTERMINATED_CHAR: Self = Self::new("E", 1004);
    /// E1005: Malformed floating-point literal
    pub const E_LEXER_INVALID_FLOAT: Self = Self::new("E", 1005);
    /// E1006: Malformed integer literal
    pub const E_LEXER_INVALID_INTEGER: Self = Self::new("E", 1006);
    /// E1007: Character that starts no token
    pub const E_LEXER_UNEXPECTED_CHAR: Self = Self::new("E", 1007);
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self)
    }
}

impl Serialize for DiagnosticCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
