//! # Pattern Parser
//!
//! Recursive descent over the tokens of one row, producing placed stitches.
//!
//! ## Grammar
//!
//! ```text
//! row           = element*
//! element       = Modifier | counted | single | group | <skip>
//! counted       = Number Stitch | Number Number Stitch
//! single        = Stitch
//! group         = ("(" | "[") (item | group | ",")* (")" | "]") repeat?
//! item          = Modifier? Number? Stitch
//! repeat        = ("*" Number) | Number
//! ```
//!
//! ## Example
//!
//! ```rust
//! use stitch_parser::lexer::tokenize;
//! use stitch_parser::parser::parse_lines;
//!
//! let stitches = parse_lines(&tokenize("(2x, v)*6")).unwrap();
//! assert_eq!(stitches.len(), 18);
//! ```

mod groups;
mod stitches;

use crate::dictionary::{self, StitchType};
use crate::error::PatternError;
use crate::lexer::{Token, TokenKind};
use crate::stitch::{LoopModifier, ParsedStitch};
use config::constants::MAX_STITCHES;

// =============================================================================
// UNIT
// =============================================================================

/// A resolved stitch that has not been placed in a row yet.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Unit {
    stitch: StitchType,
    modifier: Option<LoopModifier>,
    target: Option<u32>,
}

// =============================================================================
// PARSER
// =============================================================================

/// Parser state for a single row.
///
/// All mutable state lives here; nothing is shared between rows except the
/// running stitch budget passed in through [`Parser::with_budget`].
pub struct Parser<'t> {
    /// Tokens of the row.
    tokens: &'t [Token],
    /// Current token index.
    position: usize,
    /// 1-based row number.
    current_row: u32,
    /// Index of the last placed stitch; 0 before the first.
    current_index: u32,
    /// Modifier waiting for the next element.
    pending_modifier: Option<LoopModifier>,
    /// Chain target waiting for the next emitted stitch.
    pending_chain_target: Option<u32>,
    /// Stitches already emitted by earlier rows.
    emitted_before: usize,
    /// Stitches placed in this row.
    stitches: Vec<ParsedStitch>,
}

impl<'t> Parser<'t> {
    /// Create a parser for one row.
    pub fn new(tokens: &'t [Token], row: u32) -> Self {
        Self {
            tokens,
            position: 0,
            current_row: row,
            current_index: 0,
            pending_modifier: None,
            pending_chain_target: None,
            emitted_before: 0,
            stitches: Vec::new(),
        }
    }

    /// Count stitches from earlier rows against the pattern limit.
    pub fn with_budget(mut self, emitted_before: usize) -> Self {
        self.emitted_before = emitted_before;
        self
    }

    /// Parse the row.
    ///
    /// Unknown or misplaced tokens are skipped. The only error is a fatal one.
    pub fn parse_row(mut self) -> Result<Vec<ParsedStitch>, PatternError> {
        while !self.is_at_end() {
            self.parse_element()?;
        }
        Ok(self.stitches)
    }

    fn parse_element(&mut self) -> Result<(), PatternError> {
        match self.peek_kind() {
            Some(TokenKind::Modifier) => {
                self.pending_modifier = self.take_modifier();
                Ok(())
            }
            Some(TokenKind::Number) => self.parse_counted(),
            Some(TokenKind::Stitch) => self.parse_single(),
            Some(TokenKind::LParen | TokenKind::LBracket) => self.parse_group_element(),
            Some(kind) => {
                tracing::trace!(token = kind.display(), "skipping stray token");
                self.advance();
                Ok(())
            }
            None => Ok(()),
        }
    }

    // =========================================================================
    // TOKEN ACCESS
    // =========================================================================

    fn peek_kind(&self) -> Option<TokenKind> {
        self.peek_kind_at(0)
    }

    fn peek_kind_at(&self, offset: usize) -> Option<TokenKind> {
        self.tokens.get(self.position + offset).map(|t| t.kind)
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == Some(kind)
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Consume the current token.
    fn advance(&mut self) -> Option<&'t Token> {
        let token = self.tokens.get(self.position)?;
        self.position += 1;
        Some(token)
    }

    /// Consume a stitch token and resolve it.
    fn take_stitch(&mut self) -> StitchType {
        self.advance()
            .map(|token| dictionary::lookup_or_default(&token.text))
            .unwrap_or(StitchType::SingleCrochet)
    }

    /// Consume a modifier token.
    fn take_modifier(&mut self) -> Option<LoopModifier> {
        self.advance()
            .and_then(|token| LoopModifier::from_keyword(&token.text))
    }

    // =========================================================================
    // EMISSION
    // =========================================================================

    /// Fail if `extra` more stitches would exceed the pattern limit.
    fn reserve(&self, extra: usize) -> Result<(), PatternError> {
        let count = self
            .emitted_before
            .saturating_add(self.stitches.len())
            .saturating_add(extra);
        if count > MAX_STITCHES {
            return Err(PatternError::TooManyStitches {
                count,
                max: MAX_STITCHES,
            });
        }
        Ok(())
    }

    /// Place a unit at the next index of the row.
    fn place(&mut self, unit: Unit) -> Result<(), PatternError> {
        self.current_index = self
            .current_index
            .checked_add(1)
            .ok_or(PatternError::CounterOverflow {
                row: self.current_row,
            })?;
        self.stitches.push(ParsedStitch {
            row: self.current_row,
            index_in_row: self.current_index,
            stitch_type: unit.stitch,
            modifier: unit.modifier,
            target_chain_index: unit.target,
        });
        Ok(())
    }
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Parse tokenized lines into a flat stitch list, one row per line.
///
/// A fatal error in any row discards every row.
pub fn parse_lines(lines: &[Vec<Token>]) -> Result<Vec<ParsedStitch>, PatternError> {
    let mut stitches = Vec::new();

    for (index, tokens) in lines.iter().enumerate() {
        let row = u32::try_from(index + 1)
            .map_err(|_| PatternError::CounterOverflow { row: u32::MAX })?;

        match Parser::new(tokens, row).with_budget(stitches.len()).parse_row() {
            Ok(parsed) => {
                tracing::debug!(row, count = parsed.len(), "parsed row");
                stitches.extend(parsed);
            }
            Err(error) => {
                tracing::warn!(row, %error, "aborting pattern parse");
                return Err(error);
            }
        }
    }

    Ok(stitches)
}

// =============================================================================
// TESTS
// =============================================================================
