//! Span module - Source location tracking.
//!
//! This module provides types for representing source code locations:
//! a human-readable [`Location`] (line, column) and a [`Span`] that adds the
//! byte range covered in the source text.
//!
//! # Examples
//!
//! ```
//! use micac_util::span::{Location, Span};
//!
//! // A location on the second line, third byte
//! let location = Location::new(2, 3);
//!
//! // A span covering bytes 10..14 starting at that location
//! let span = Span::new(10, 14, location);
//! assert_eq!(span.len(), 4);
//! ```

mod source_map;

pub use source_map::SourceFile;

use serde::Serialize;
use std::fmt;

/// A line/column position in source text
///
/// Both fields are 1-based. The column counts bytes from the first byte of
/// the line, so a tab or a multi-byte UTF-8 character advances it by its
/// encoded length.
///
/// # Examples
///
/// ```
/// use micac_util::span::Location;
///
/// let loc = Location::new(1, 1);
/// assert_eq!(loc.to_string(), "1:1");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Location {
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in bytes)
    pub column: u32,
}

impl Location {
    /// The location of the first byte of any source text
    pub const START: Location = Location { line: 1, column: 1 };

    /// Create a new location
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl Default for Location {
    #[inline]
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Source location span
///
/// A `Span` represents a range in source code, identified by:
/// - Byte offsets (start, end), half-open
/// - The [`Location`] of the first byte (for human-readable output)
///
/// # Examples
///
/// ```
/// use micac_util::span::{Location, Span};
///
/// // Create a span with byte offsets and line/column info
/// let span = Span::new(10, 20, Location::new(1, 11));
///
/// // Create a point span (single location)
/// let point = Span::point(20, Location::new(1, 21));
/// assert!(point.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line and column of `start`
    pub location: Location,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use micac_util::span::{Location, Span};
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.location, Location::START);
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        location: Location::START,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset (exclusive)
    /// * `location` - Line and column of `start`
    #[inline]
    pub fn new(start: usize, end: usize, location: Location) -> Self {
        debug_assert!(start <= end, "span start {} > end {}", start, end);
        Self {
            start,
            end,
            location,
        }
    }

    /// Create an empty span at a single offset
    #[inline]
    pub fn point(offset: usize, location: Location) -> Self {
        Self {
            start: offset,
            end: offset,
            location,
        }
    }

    /// Returns true if this span is empty (start == end)
    ///
    /// # Examples
    ///
    /// ```
    /// use micac_util::span::{Location, Span};
    ///
    /// let span = Span::new(10, 10, Location::START);
    /// assert!(span.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Byte range of this span, for slicing the source text
    #[inline]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}
