//! # Group Parsing
//!
//! Parses parenthesized and bracketed repeat groups.
//!
//! ## Responsibilities
//!
//! - Groups: `(2x, v)`, `[sc, inc]`
//! - Repeats: `(2x, v)*6`, `(2x, v) × 6`, `(2x, v) 6`
//! - Nested groups: `[(x, v)*2, a]*3`
//! - Item-local modifiers: `(blo 2x, v)`
//!
//! ## Example
//!
//! ```rust,ignore
//! let units = parser.parse_group()?;
//! ```

use super::{Parser, Unit};
use crate::error::PatternError;
use crate::lexer::TokenKind;
use config::constants::{MAX_GROUP_DEPTH, STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use stacker::maybe_grow;

impl<'t> Parser<'t> {
    /// Parse a group at row level and place its stitches.
    ///
    /// A modifier pending before the group applies to every item that has no
    /// modifier of its own.
    pub(super) fn parse_group_element(&mut self) -> Result<(), PatternError> {
        let units = self.parse_group(1)?;
        let inherited = self.pending_modifier.take();

        self.reserve(units.len())?;
        for unit in units {
            self.place(Unit {
                modifier: unit.modifier.or(inherited),
                ..unit
            })?;
        }
        Ok(())
    }

    /// Parse a group and expand its repeats.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// group = ("(" | "[") (item | group | ",")* (")" | "]") repeat?
    /// ```
    ///
    /// An unterminated group runs to the end of the row and is not repeated.
    /// `depth` counts this group; openers nested past [`MAX_GROUP_DEPTH`] are
    /// skipped.
    fn parse_group(&mut self, depth: usize) -> Result<Vec<Unit>, PatternError> {
        self.advance(); // ( or [

        let mut body = Vec::new();
        let mut closed = false;

        while let Some(kind) = self.peek_kind() {
            match kind {
                TokenKind::RParen | TokenKind::RBracket => {
                    self.advance();
                    closed = true;
                    break;
                }
                TokenKind::LParen | TokenKind::LBracket if depth >= MAX_GROUP_DEPTH => {
                    tracing::trace!(depth, "skipping opener past nesting limit");
                    self.advance();
                }
                TokenKind::LParen | TokenKind::LBracket => {
                    let nested = maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
                        self.parse_group(depth + 1)
                    })?;
                    self.reserve(body.len() + nested.len())?;
                    body.extend(nested);
                }
                TokenKind::Modifier | TokenKind::Number | TokenKind::Stitch => {
                    self.parse_item(&mut body)?;
                }
                TokenKind::Comma | TokenKind::Multiply => {
                    self.advance();
                }
            }
        }

        let repeat = if closed { self.parse_repeat() } else { 1 };
        let total = body.len().saturating_mul(repeat as usize);
        self.reserve(total)?;

        let mut expanded = Vec::with_capacity(total);
        for _ in 0..repeat {
            expanded.extend_from_slice(&body);
        }
        Ok(expanded)
    }

    /// Parse one group item into `body`.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// item = Modifier? Number? Stitch
    /// ```
    fn parse_item(&mut self, body: &mut Vec<Unit>) -> Result<(), PatternError> {
        let modifier = if self.check(TokenKind::Modifier) {
            self.take_modifier()
        } else {
            None
        };

        let mut count = 1;
        if self.check(TokenKind::Number) {
            let number = self.advance().and_then(|token| token.number());
            match number {
                Some(n) if self.check(TokenKind::Stitch) => count = n,
                _ => return Ok(()),
            }
        }

        if self.check(TokenKind::Stitch) {
            let stitch = self.take_stitch();
            self.reserve(body.len().saturating_add(count as usize))?;
            let unit = Unit {
                stitch,
                modifier,
                target: None,
            };
            body.extend(std::iter::repeat(unit).take(count as usize));
        }
        Ok(())
    }

    /// Parse the repeat count after a closing symbol. Defaults to 1.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// repeat = "*" Number | Number
    /// ```
    ///
    /// A bare number followed by a stitch is left for the counted-stitch rule.
    fn parse_repeat(&mut self) -> u32 {
        match (self.peek_kind(), self.peek_kind_at(1)) {
            (Some(TokenKind::Multiply), Some(TokenKind::Number)) => {
                self.advance();
                self.advance().and_then(|token| token.number()).unwrap_or(1)
            }
            (Some(TokenKind::Multiply), _) => {
                self.advance();
                1
            }
            (Some(TokenKind::Number), next) if next != Some(TokenKind::Stitch) => {
                self.advance().and_then(|token| token.number()).unwrap_or(1)
            }
            _ => 1,
        }
    }
}
