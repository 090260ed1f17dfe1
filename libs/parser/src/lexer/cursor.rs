//! # Character Cursor
//!
//! Peekable character cursor for the tokenizer.
//! Tracks the byte offset as it advances over a single line.
//!
//! ## Example
//!
//! ```rust
//! use stitch_parser::lexer::Cursor;
//!
//! let mut cursor = Cursor::new("6x");
//! assert_eq!(cursor.peek(), Some('6'));
//! cursor.advance();
//! assert_eq!(cursor.peek(), Some('x'));
//! ```

/// Character cursor with byte tracking.
pub struct Cursor<'a> {
    /// Source line.
    source: &'a str,
    /// Current byte offset.
    byte: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor for a line.
    pub fn new(source: &'a str) -> Self {
        Self { source, byte: 0 }
    }

    /// Current byte offset.
    pub fn offset(&self) -> usize {
        self.byte
    }

    /// Check if at end of line.
    pub fn is_eof(&self) -> bool {
        self.byte >= self.source.len()
    }

    /// Peek at current character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.source[self.byte..].chars().next()
    }

    /// Advance to next character.
    ///
    /// ## Returns
    ///
    /// Character that was consumed, or None if at EOF
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.byte += c.len_utf8();
        Some(c)
    }

    /// Advance while predicate is true.
    pub fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
    }

    /// Text between `start` and the current offset.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.byte]
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_empty() {
        let cursor = Cursor::new("");
        assert!(cursor.is_eof());
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn test_cursor_advance() {
        let mut cursor = Cursor::new("ab");
        assert_eq!(cursor.advance(), Some('a'));
        assert_eq!(cursor.offset(), 1);
        assert_eq!(cursor.advance(), Some('b'));
        assert_eq!(cursor.advance(), None);
        assert!(cursor.is_eof());
    }

    #[test]
    fn test_cursor_advance_while() {
        let mut cursor = Cursor::new("123sc");
        cursor.advance_while(|c| c.is_ascii_digit());
        assert_eq!(cursor.slice_from(0), "123");
        assert_eq!(cursor.peek(), Some('s'));
    }

    #[test]
    fn test_cursor_multiply_sign_is_two_bytes() {
        let mut cursor = Cursor::new("×6");
        assert_eq!(cursor.advance(), Some('×'));
        assert_eq!(cursor.offset(), 2);
        assert_eq!(cursor.peek(), Some('6'));
    }
}
