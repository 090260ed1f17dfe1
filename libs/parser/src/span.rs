//! # Source Spans
//!
//! Byte ranges into a single lower-cased pattern line.

use serde::{Deserialize, Serialize};

/// Byte range `[start, end)` of a token within its line.
///
/// ## Example
///
/// ```rust
/// use stitch_parser::Span;
///
/// let span = Span::new(2, 4);
/// assert_eq!(span.end - span.start, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    /// First byte of the token.
    pub start: usize,
    /// One past the last byte of the token.
    pub end: usize,
}

impl Span {
    /// Create a span from byte offsets.
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}
