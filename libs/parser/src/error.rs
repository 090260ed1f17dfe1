//! # Pattern Errors
//!
//! The fatal tier of pattern parsing. Local problems (unknown words, stray
//! brackets, unreadable numbers) never surface here; they only shorten a row.
//!
//! ## Example
//!
//! ```rust
//! use stitch_parser::PatternError;
//!
//! let error = PatternError::TooManyStitches { count: 200_000, max: 100_000 };
//! assert!(error.to_string().contains("200000"));
//! ```

use thiserror::Error;

/// A failure that aborts the whole pattern parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// Repeats would materialize more stitches than the safety limit.
    #[error("pattern expands to {count} stitches (max: {max})")]
    TooManyStitches { count: usize, max: usize },

    /// A row number or stitch index no longer fits its counter.
    #[error("row {row} overflows the stitch counter")]
    CounterOverflow { row: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_many_stitches_display() {
        let error = PatternError::TooManyStitches { count: 7, max: 5 };
        assert_eq!(error.to_string(), "pattern expands to 7 stitches (max: 5)");
    }

    #[test]
    fn test_counter_overflow_display() {
        let error = PatternError::CounterOverflow { row: 3 };
        assert!(error.to_string().contains("row 3"));
    }
}
