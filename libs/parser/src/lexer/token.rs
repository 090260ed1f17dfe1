//! # Tokens
//!
//! Token types for the pattern tokenizer.
//!
//! ## Example
//!
//! ```rust
//! use stitch_parser::lexer::{Token, TokenKind};
//! use stitch_parser::Span;
//!
//! let token = Token::new(TokenKind::Number, Span::new(0, 1), "6".to_string());
//! assert_eq!(token.number(), Some(6));
//! ```

use crate::span::Span;

// =============================================================================
// TOKEN
// =============================================================================

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Token type.
    pub kind: TokenKind,
    /// Location within the lower-cased line.
    pub span: Span,
    /// Raw token text.
    pub text: String,
}

impl Token {
    /// Create a new token.
    ///
    /// ## Parameters
    ///
    /// - `kind`: Token type
    /// - `span`: Source location
    /// - `text`: Token text
    pub fn new(kind: TokenKind, span: Span, text: String) -> Self {
        Self { kind, span, text }
    }

    /// Numeric value of a `Number` token.
    ///
    /// `None` for other kinds and for digit runs that overflow `u32`.
    pub fn number(&self) -> Option<u32> {
        if self.kind == TokenKind::Number {
            self.text.parse().ok()
        } else {
            None
        }
    }
}

// =============================================================================
// TOKEN KIND
// =============================================================================

/// Types of tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Word resolved by the stitch dictionary, or `+`
    Stitch,
    /// Unsigned decimal digit run
    Number,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `*` or `×`
    Multiply,
    /// `,` or `;`
    Comma,
    /// Loop modifier keyword like `blo`
    Modifier,
}

impl TokenKind {
    /// Get display string for diagnostics.
    pub const fn display(&self) -> &'static str {
        match self {
            Self::Stitch => "stitch",
            Self::Number => "number",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Multiply => "*",
            Self::Comma => ",",
            Self::Modifier => "modifier",
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_value() {
        let token = Token::new(TokenKind::Number, Span::new(0, 2), "12".to_string());
        assert_eq!(token.number(), Some(12));
    }

    #[test]
    fn test_number_overflow_is_none() {
        let token = Token::new(TokenKind::Number, Span::new(0, 11), "99999999999".to_string());
        assert_eq!(token.number(), None);
    }

    #[test]
    fn test_non_number_has_no_value() {
        let token = Token::new(TokenKind::Stitch, Span::new(0, 2), "sc".to_string());
        assert_eq!(token.number(), None);
    }

    #[test]
    fn test_token_display() {
        assert_eq!(TokenKind::LParen.display(), "(");
        assert_eq!(TokenKind::Stitch.display(), "stitch");
    }
}
