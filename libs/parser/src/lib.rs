//! # Stitch Parser
//!
//! Parser for compact crochet shorthand such as `6x` or `(2x, v)*6`.
//! Pure Rust, no I/O, compiles directly to WASM.
//!
//! ## Architecture
//!
//! ```text
//! Pattern Text → Lexer → Token Lines → Parser → ParsedStitch[] → RowValidation[]
//! ```
//!
//! ## Example
//!
//! ```rust
//! use stitch_parser::{parse_pattern, validate_rows};
//!
//! let stitches = parse_pattern("6x").unwrap();
//! assert_eq!(stitches.len(), 6);
//! assert!(validate_rows(&stitches)[0].is_valid);
//! ```
//!
//! ## Pipeline Integration
//!
//! ```text
//! stitch-parser → stitch-layout → stitch-mesh → wasm
//! ```

pub mod dictionary;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod span;
pub mod stitch;
pub mod validate;

// Re-export public API
pub use dictionary::{StitchCategory, StitchType};
pub use error::PatternError;
pub use lexer::{tokenize, Token, TokenKind};
pub use span::Span;
pub use stitch::{LoopModifier, ParsedStitch};
pub use validate::{summarize, validate_rows, PatternSummary, RowValidation};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Parse a whole pattern, one row per non-blank line.
///
/// ## Returns
///
/// Every stitch in row order, or the single fatal error that aborted the
/// parse. Unknown vocabulary never fails; it only shortens a row.
///
/// ## Example
///
/// ```rust
/// use stitch_parser::{parse_pattern, StitchType};
///
/// let stitches = parse_pattern("(2x, v)*6").unwrap();
/// assert_eq!(stitches.len(), 18);
/// assert_eq!(stitches[2].stitch_type, StitchType::Increase);
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(bytes = text.len()))]
pub fn parse_pattern(text: &str) -> Result<Vec<ParsedStitch>, PatternError> {
    let lines = lexer::tokenize(text);
    parser::parse_lines(&lines)
}

// =============================================================================
// TESTS
// =============================================================================
