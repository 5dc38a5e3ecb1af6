//! Source file bookkeeping for computing source locations.
//!
//! This module provides the [`SourceFile`] type, which owns the text of one
//! compilation input and converts byte offsets to [`Location`]s.

use std::sync::Arc;

use super::{Location, Span};

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use micac_util::span::SourceFile;
///
/// let file = SourceFile::new("main.mc", "func main() {}");
/// assert_eq!(file.name(), "main.mc");
/// assert_eq!(file.content(), "func main() {}");
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Precomputed line start offsets
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    ///
    /// # Arguments
    ///
    /// * `name` - File name or path
    /// * `content` - File content
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    /// Compute line start offsets from content
    fn line_starts(content: &str) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        line_starts.extend(
            content
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        line_starts.into()
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of lines
    ///
    /// # Examples
    ///
    /// ```
    /// use micac_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("main.mc", "line1\nline2\nline3");
    /// assert_eq!(file.line_count(), 3);
    /// ```
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the byte offset where a line starts (0-indexed line number)
    ///
    /// Returns `None` if the line number is out of bounds.
    #[inline]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Convert a byte offset to a 1-based [`Location`]
    ///
    /// Column is measured in bytes from the start of the line.
    ///
    /// # Examples
    ///
    /// ```
    /// use micac_util::span::{Location, SourceFile};
    ///
    /// let file = SourceFile::new("main.mc", "func main() {}");
    /// assert_eq!(file.location(5), Location::new(1, 6));
    /// ```
    pub fn location(&self, offset: usize) -> Location {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            // insert point is never 0 because line_starts[0] == 0
            Err(insert_point) => insert_point - 1,
        };
        let column = offset - self.line_starts[line] + 1;
        Location::new(line as u32 + 1, column as u32)
    }

    /// Get a specific source line (1-indexed), without its line terminator
    ///
    /// # Examples
    ///
    /// ```
    /// use micac_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("main.mc", "line1\nline2\nline3");
    /// assert_eq!(file.line_at(1), Some("line1"));
    /// assert_eq!(file.line_at(2), Some("line2"));
    /// ```
    pub fn line_at(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        let start = self.line_start(line - 1)?;
        let end = self.line_start(line).unwrap_or(self.content.len());

        let line_content = self.content.get(start..end)?;
        Some(line_content.trim_end_matches(['\n', '\r']))
    }

    /// Extract the text covered by a span
    ///
    /// Returns `None` if the span is out of bounds or does not fall on
    /// character boundaries.
    pub fn snippet(&self, span: Span) -> Option<&str> {
        self.content.get(span.range())
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("len", &self.content.len())
            .field("lines", &self.line_starts.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_file_new() {
        let file = SourceFile::new("test.mc", "func main() {}");
        assert_eq!(file.name(), "test.mc");
        assert_eq!(file.content(), "func main() {}");
    }

    #[test]
    fn test_source_file_line_count() {
        let file = SourceFile::new("test.mc", "line1\nline2\nline3");
        assert_eq!(file.line_count(), 3);
    }

    #[test]
    fn test_source_file_line_start() {
        let file = SourceFile::new("test.mc", "line1\nline2\nline3");
        assert_eq!(file.line_start(0), Some(0));
        assert_eq!(file.line_start(1), Some(6));
        assert_eq!(file.line_start(2), Some(12));
        assert_eq!(file.line_start(3), None);
    }

    #[test]
    fn test_source_file_location() {
        let file = SourceFile::new("test.mc", "func main() {}");
        assert_eq!(file.location(0), Location::new(1, 1));
        assert_eq!(file.location(5), Location::new(1, 6));
        assert_eq!(file.location(13), Location::new(1, 14));
    }

    #[test]
    fn test_source_file_location_after_newline() {
        let file = SourceFile::new("test.mc", "a\nbc\n\nd");
        assert_eq!(file.location(2), Location::new(2, 1));
        assert_eq!(file.location(3), Location::new(2, 2));
        assert_eq!(file.location(5), Location::new(3, 1));
        assert_eq!(file.location(6), Location::new(4, 1));
    }

    #[test]
    fn test_source_file_line_at() {
        let file = SourceFile::new("test.mc", "line1\r\nline2\nline3");
        assert_eq!(file.line_at(0), None);
        assert_eq!(file.line_at(1), Some("line1"));
        assert_eq!(file.line_at(2), Some("line2"));
        assert_eq!(file.line_at(3), Some("line3"));
        assert_eq!(file.line_at(4), None);
    }

    #[test]
    fn test_source_file_snippet() {
        let file = SourceFile::new("test.mc", "u32 a = 3;");
        let span = Span::new(4, 5, Location::new(1, 5));
        assert_eq!(file.snippet(span), Some("a"));
        assert_eq!(file.snippet(Span::new(8, 40, Location::START)), None);
    }

    #[test]
    fn test_empty_file() {
        let file = SourceFile::new("empty.mc", "");
        assert_eq!(file.line_count(), 1);
        assert_eq!(file.line_start(0), Some(0));
        assert_eq!(file.location(0), Location::START);
        assert_eq!(file.line_at(1), Some(""));
    }
}
