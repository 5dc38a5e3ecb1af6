//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source code. It handles UTF-8 encoding correctly
//! and tracks the running `(line, line_begin)` pair used to compute token
//! locations.

use micac_util::Location;

/// A cursor for traversing source code character by character.
///
/// Columns are not stored: the cursor remembers the byte offset where the
/// current line begins and derives the column from it, so the column is
/// always the byte distance from the line start plus one.
///
/// # Example
///
/// ```
/// use micac_lex::cursor::Cursor;
///
/// let source = "u32 a = 3;";
/// let mut cursor = Cursor::new(source);
///
/// assert_eq!(cursor.current_char(), 'u');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), '3');
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Byte offset of the first byte of the current line.
    line_begin: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            line_begin: 0,
        }
    }

    /// Returns the current character at the cursor position.
    ///
    /// Returns '\0' (null character) if at the end of the source. The
    /// cursor only ever rests on character boundaries.
    ///
    /// # Example
    ///
    /// ```
    /// use micac_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("abc");
    /// assert_eq!(cursor.current_char(), 'a');
    /// ```
    #[inline]
    pub fn current_char(&self) -> char {
        let Some(b) = self.current_byte() else {
            return '\0';
        };

        // Fast path for ASCII (most common case)
        if b < 128 {
            return b as char;
        }

        // Slow path for UTF-8
        self.remaining().chars().next().unwrap_or('\0')
    }

    /// Returns the byte at the current position, or `None` at the end.
    #[inline]
    pub fn current_byte(&self) -> Option<u8> {
        self.source.as_bytes().get(self.position).copied()
    }

    /// Advances the cursor past the current character.
    ///
    /// Crossing a `\n` starts a new line. Does nothing if already at end.
    ///
    /// # Example
    ///
    /// ```
    /// use micac_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a\nb");
    /// cursor.advance();
    /// cursor.advance();
    /// assert_eq!(cursor.line(), 2);
    /// assert_eq!(cursor.column(), 1);
    /// ```
    #[inline]
    pub fn advance(&mut self) {
        let Some(b) = self.current_byte() else {
            return;
        };

        // Fast path for ASCII (most common)
        if b < 128 {
            self.position += 1;
            if b == b'\n' {
                self.line += 1;
                self.line_begin = self.position;
            }
            return;
        }

        // Slow path for UTF-8 multi-byte characters
        self.position += self.current_char().len_utf8();
    }

    /// Advances by the given number of bytes, tracking newlines.
    ///
    /// Callers must only skip over whole characters; every use in the lexer
    /// skips ASCII text that was already inspected.
    #[inline]
    pub fn advance_bytes(&mut self, count: usize) {
        let end = (self.position + count).min(self.source.len());
        for i in self.position..end {
            if self.source.as_bytes()[i] == b'\n' {
                self.line += 1;
                self.line_begin = i + 1;
            }
        }
        self.position = end;
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Matches and consumes the expected character if present.
    ///
    /// Returns true if the character was matched and consumed, false otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// use micac_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("'a");
    /// assert!(cursor.match_char('\''));
    /// assert!(!cursor.match_char('\''));
    /// assert_eq!(cursor.current_char(), 'a');
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based, in bytes).
    ///
    /// # Example
    ///
    /// ```
    /// use micac_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("αb");
    /// assert_eq!(cursor.column(), 1);
    /// cursor.advance();
    /// assert_eq!(cursor.column(), 3);
    /// ```
    #[inline]
    pub fn column(&self) -> u32 {
        (self.position - self.line_begin + 1) as u32
    }

    /// Returns the current line and column.
    #[inline]
    pub fn location(&self) -> Location {
        Location::new(self.line, self.column())
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns a slice of the source from the given start position to the
    /// current position.
    ///
    /// # Example
    ///
    /// ```
    /// use micac_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("func main");
    /// let start = cursor.position();
    /// cursor.advance_bytes(4);
    /// assert_eq!(cursor.slice_from(start), "func");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }
}
