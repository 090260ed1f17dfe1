//! # Stitch Parsing
//!
//! Single and counted stitches outside of groups.
//!
//! ## Responsibilities
//!
//! - Single stitches: `sc`, `x`, `+`
//! - Counted stitches: `6x`, `3 dc`
//! - Chain-targeted counts: `2 in 3rd ch` (connector and ordinal are dropped
//!   by the tokenizer, leaving `Number Number Stitch`)

use super::{Parser, Unit};
use crate::error::PatternError;
use crate::lexer::TokenKind;

impl<'t> Parser<'t> {
    /// Parse a single stitch.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// single = Stitch
    /// ```
    pub(super) fn parse_single(&mut self) -> Result<(), PatternError> {
        let stitch = self.take_stitch();
        let unit = Unit {
            stitch,
            modifier: self.pending_modifier.take(),
            target: self.pending_chain_target.take(),
        };
        self.reserve(1)?;
        self.place(unit)
    }

    /// Parse an element that starts with a number.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// counted = Number Stitch
    ///         | Number Number Stitch
    /// ```
    ///
    /// A number in front of a group (`3(2x, v)`) and a number with nothing
    /// to count are consumed without effect.
    pub(super) fn parse_counted(&mut self) -> Result<(), PatternError> {
        let Some(count) = self.advance().and_then(|token| token.number()) else {
            tracing::trace!("skipping unreadable number");
            return Ok(());
        };

        match (self.peek_kind(), self.peek_kind_at(1)) {
            (Some(TokenKind::Stitch), _) => self.emit_counted(count),
            (Some(TokenKind::Number), Some(TokenKind::Stitch)) => {
                self.pending_chain_target = self.advance().and_then(|token| token.number());
                self.emit_counted(count)
            }
            (Some(TokenKind::LParen | TokenKind::LBracket), _) => {
                tracing::trace!(count, "ignoring count before group");
                Ok(())
            }
            _ => {
                tracing::trace!(count, "skipping bare number");
                Ok(())
            }
        }
    }

    /// Emit `count` copies of the next stitch token.
    fn emit_counted(&mut self, count: u32) -> Result<(), PatternError> {
        let stitch = self.take_stitch();
        let unit = Unit {
            stitch,
            modifier: self.pending_modifier.take(),
            target: self.pending_chain_target.take(),
        };
        self.reserve(count as usize)?;
        for _ in 0..count {
            self.place(unit)?;
        }
        Ok(())
    }
}
