//! # Oval Layout
//!
//! Stadium-shaped foundations worked around both sides of a starting chain.
//!
//! ## Foundation
//!
//! A line containing `ch N` and the phrase `from hook` lays out:
//!
//! ```text
//!   TurnStart ╭── Top (N-2) ──╮ TurnEnd
//!      (2)    ╰─ Bottom (N-2)─╯   (3)
//! ```
//!
//! Work starts at the left end of the top edge and runs along +X, turns at
//! the right cap, returns along the bottom edge and closes with the left cap.
//! `N < 3` or a missing directive produces no layout.
//!
//! ## Later Rows
//!
//! Each further row samples the bounding ellipse of the previous row, grown
//! by `OVAL_ROW_SPACING` on both axes, at evenly spaced angles.
//!
//! ## Example
//!
//! ```rust
//! use stitch_layout::oval::{layout_oval_foundation, OvalSide};
//!
//! let foundation = layout_oval_foundation("ch 8, sc in 2nd ch from hook").unwrap();
//! assert_eq!(foundation.len(), 17);
//! assert_eq!(foundation.iter().filter(|s| s.side == OvalSide::TurnEnd).count(), 3);
//! ```

use crate::group_by_row;
use config::constants::{
    MAX_STITCHES, MIN_OVAL_CHAIN, OVAL_HALF_HEIGHT, OVAL_ROW_SPACING, OVAL_STITCH_SPACING,
};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, TAU};
use stitch_parser::dictionary;
use stitch_parser::lexer::{Lexer, Token, TokenKind};
use stitch_parser::{parse_pattern, LoopModifier, ParsedStitch, StitchType};

// =============================================================================
// TYPES
// =============================================================================

/// Which part of the stadium a stitch belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OvalSide {
    Top,
    Bottom,
    /// Left cap, where a round closes.
    TurnStart,
    /// Right cap, at the far end of the chain.
    TurnEnd,
}

/// A stitch placed on an oval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedOvalStitch {
    pub row: u32,
    pub index_in_row: u32,
    #[serde(rename = "type")]
    pub stitch_type: StitchType,
    pub side: OvalSide,
    pub x: f64,
    pub y: f64,
    /// Angle around the cap centre or ellipse centre. Straight edges of the
    /// foundation have none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifier: Option<LoopModifier>,
}

// =============================================================================
// FOUNDATION
// =============================================================================

/// The `ch N ... from hook` directive found on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoundationDirective {
    /// Length of the starting chain.
    pub chain_length: u32,
    /// Stitch worked along the chain.
    pub base: StitchType,
}

fn mentions_from_hook(line: &str) -> bool {
    let words: Vec<String> = line
        .split_whitespace()
        .map(|word| {
            word.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .collect();
    words.windows(2).any(|pair| pair[0] == "from" && pair[1] == "hook")
}

fn is_chain_keyword(token: &Token) -> bool {
    token.kind == TokenKind::Stitch && token.text == "ch"
}

/// `ch` followed by a number with only whitespace between them in `line`.
fn is_chain_count(line: &str, pair: &[Token]) -> bool {
    let [chain, number] = pair else {
        return false;
    };
    is_chain_keyword(chain)
        && number.kind == TokenKind::Number
        && line
            .get(chain.span.end..number.span.start)
            .is_some_and(|gap| gap.chars().all(char::is_whitespace))
}

/// Find the foundation directive on a line.
///
/// The chain length is the integer directly after a `ch` token, separated
/// from it by whitespace at most. The base stitch is the first non-chain
/// stitch after it, defaulting to single crochet.
pub fn find_directive(line: &str) -> Option<FoundationDirective> {
    if !mentions_from_hook(line) {
        return None;
    }

    // Token spans index the lower-cased line.
    let lowered = line.to_lowercase();
    let tokens = Lexer::new(&lowered).tokenize();
    let position = tokens
        .windows(2)
        .position(|pair| is_chain_count(&lowered, pair))?;
    let chain_length = tokens[position + 1].number()?;

    let base = tokens[position + 2..]
        .iter()
        .filter(|token| token.kind == TokenKind::Stitch)
        .filter_map(|token| dictionary::lookup(&token.text))
        .find(|stitch| *stitch != StitchType::Chain)
        .unwrap_or(StitchType::SingleCrochet);

    Some(FoundationDirective { chain_length, base })
}

/// Stitches in the first round around a chain of `chain_length`.
///
/// `None` when the round would exceed `MAX_STITCHES`.
fn foundation_size(chain_length: u32) -> Option<usize> {
    let size = (chain_length as usize)
        .checked_sub(2)?
        .checked_mul(2)?
        .checked_add(5)?;
    (size <= MAX_STITCHES).then_some(size)
}

/// Lay out the first round around a foundation chain.
///
/// Returns `None` when the line has no directive, the chain is shorter
/// than `MIN_OVAL_CHAIN`, or the round would exceed `MAX_STITCHES`.
pub fn layout_oval_foundation(line: &str) -> Option<Vec<ParsedOvalStitch>> {
    let directive = find_directive(line)?;
    if directive.chain_length < MIN_OVAL_CHAIN {
        tracing::debug!(chain = directive.chain_length, "foundation chain too short");
        return None;
    }
    let Some(size) = foundation_size(directive.chain_length) else {
        tracing::warn!(chain = directive.chain_length, max = MAX_STITCHES, "foundation chain too long");
        return None;
    };
    Some(foundation_round(directive, size))
}

fn foundation_round(directive: FoundationDirective, size: usize) -> Vec<ParsedOvalStitch> {
    let FoundationDirective { base, .. } = directive;
    let edge = (size - 5) / 2;
    let far_end = (edge - 1) as f64 * OVAL_STITCH_SPACING;

    let mut round = Vec::with_capacity(size);
    let mut index_in_row = 0;
    let mut place = |stitch_type: StitchType, side: OvalSide, x: f64, y: f64, angle: Option<f64>| {
        index_in_row += 1;
        round.push(ParsedOvalStitch {
            row: 1,
            index_in_row,
            stitch_type,
            side,
            x,
            y,
            angle,
            modifier: None,
        });
    };

    for i in 0..edge {
        place(base, OvalSide::Top, i as f64 * OVAL_STITCH_SPACING, OVAL_HALF_HEIGHT, None);
    }

    // Right cap: top to bottom around (far_end, 0).
    for k in 1..=3 {
        let angle = FRAC_PI_2 - k as f64 * FRAC_PI_4;
        let stitch_type = if k == 2 { StitchType::Increase } else { base };
        place(
            stitch_type,
            OvalSide::TurnEnd,
            far_end + OVAL_HALF_HEIGHT * angle.cos(),
            OVAL_HALF_HEIGHT * angle.sin(),
            Some(angle),
        );
    }

    for i in 0..edge {
        place(
            base,
            OvalSide::Bottom,
            far_end - i as f64 * OVAL_STITCH_SPACING,
            -OVAL_HALF_HEIGHT,
            None,
        );
    }

    // Left cap: bottom back up to the start around the origin.
    for k in 1..=2 {
        let angle = -FRAC_PI_2 - k as f64 * FRAC_PI_3;
        place(
            StitchType::Increase,
            OvalSide::TurnStart,
            OVAL_HALF_HEIGHT * angle.cos(),
            OVAL_HALF_HEIGHT * angle.sin(),
            Some(angle),
        );
    }

    round
}

// =============================================================================
// LATER ROWS
// =============================================================================

/// Sampling starts at the upper left of the ellipse.
const START_ANGLE: f64 = 3.0 * FRAC_PI_4;

/// Classify a sample angle by quadrant.
///
/// A boundary angle belongs to the side that begins there when walking
/// clockwise, so sampling from `START_ANGLE` opens on the top edge.
pub fn side_for_angle(angle: f64) -> OvalSide {
    let phi = angle.rem_euclid(TAU);
    if phi <= FRAC_PI_4 || phi > 7.0 * FRAC_PI_4 {
        OvalSide::TurnEnd
    } else if phi <= START_ANGLE {
        OvalSide::Top
    } else if phi <= 5.0 * FRAC_PI_4 {
        OvalSide::TurnStart
    } else {
        OvalSide::Bottom
    }
}

/// Lay out the row after `previous`.
///
/// `pattern` supplies the stitch types and modifiers of the new row in
/// working order. Either side being empty yields an empty row.
pub fn next_oval_row(
    previous: &[ParsedOvalStitch],
    pattern: &[ParsedStitch],
    spacing: f64,
) -> Vec<ParsedOvalStitch> {
    let (Some(first), false) = (previous.first(), pattern.is_empty()) else {
        return Vec::new();
    };
    let row = first.row + 1;

    let (min_x, max_x, min_y, max_y) = previous.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY),
        |(min_x, max_x, min_y, max_y), s| {
            (min_x.min(s.x), max_x.max(s.x), min_y.min(s.y), max_y.max(s.y))
        },
    );
    let (cx, cy) = ((min_x + max_x) / 2.0, (min_y + max_y) / 2.0);
    let semi_x = (max_x - min_x) / 2.0 + spacing;
    let semi_y = (max_y - min_y) / 2.0 + spacing;

    let step = TAU / pattern.len() as f64;
    pattern
        .iter()
        .enumerate()
        .map(|(k, stitch)| {
            let angle = START_ANGLE - k as f64 * step;
            ParsedOvalStitch {
                row,
                index_in_row: k as u32 + 1,
                stitch_type: stitch.stitch_type,
                side: side_for_angle(angle),
                x: cx + semi_x * angle.cos(),
                y: cy + semi_y * angle.sin(),
                angle: Some(angle),
                modifier: stitch.modifier,
            }
        })
        .collect()
}

/// Lay out a whole oval pattern.
///
/// The first non-blank line must carry the foundation directive; every
/// further line is parsed as shorthand and becomes the next ring. A fatal
/// parse error in the later rows, or later rows that would push the total
/// past `MAX_STITCHES`, keeps the foundation and drops the rest.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = text.len()))]
pub fn layout_oval_pattern(text: &str) -> Option<Vec<ParsedOvalStitch>> {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());
    let mut layout = layout_oval_foundation(lines.next()?)?;

    let rest = lines.collect::<Vec<_>>().join("\n");
    let later = match parse_pattern(&rest) {
        Ok(stitches) => stitches,
        Err(error) => {
            tracing::warn!(%error, "oval rows abandoned");
            return Some(layout);
        }
    };
    if layout.len().saturating_add(later.len()) > MAX_STITCHES {
        tracing::warn!(
            count = layout.len() + later.len(),
            max = MAX_STITCHES,
            "oval rows abandoned"
        );
        return Some(layout);
    }

    let mut previous_start = 0;
    for (_, members) in group_by_row(&later, |s| s.row) {
        let pattern: Vec<ParsedStitch> = members.into_iter().copied().collect();
        let next = next_oval_row(&layout[previous_start..], &pattern, OVAL_ROW_SPACING);
        previous_start = layout.len();
        layout.extend(next);
    }

    tracing::debug!(count = layout.len(), "oval layout");
    Some(layout)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use config::constants::approx_equal;
    use std::f64::consts::PI;

    fn count(stitches: &[ParsedOvalStitch], side: OvalSide) -> usize {
        stitches.iter().filter(|s| s.side == side).count()
    }

    #[test]
    fn test_chain_eight_from_hook() {
        let round = layout_oval_foundation("ch 8, sc in 2nd ch from hook").unwrap();
        assert_eq!(round.len(), 2 * (8 - 2) + 5);
        assert_eq!(count(&round, OvalSide::Top), 6);
        assert_eq!(count(&round, OvalSide::Bottom), 6);

        let turn_end: Vec<_> = round.iter().filter(|s| s.side == OvalSide::TurnEnd).collect();
        assert_eq!(turn_end.len(), 3);
        assert_eq!(turn_end[0].stitch_type, StitchType::SingleCrochet);
        assert_eq!(turn_end[1].stitch_type, StitchType::Increase);
        assert_eq!(turn_end[2].stitch_type, StitchType::SingleCrochet);

        let turn_start: Vec<_> = round.iter().filter(|s| s.side == OvalSide::TurnStart).collect();
        assert_eq!(turn_start.len(), 2);
        assert!(turn_start.iter().all(|s| s.stitch_type == StitchType::Increase));
    }

    #[test]
    fn test_indices_continuous() {
        let round = layout_oval_foundation("Ch 5 from hook").unwrap();
        for (i, stitch) in round.iter().enumerate() {
            assert_eq!(stitch.index_in_row, i as u32 + 1);
            assert_eq!(stitch.row, 1);
        }
    }

    #[test]
    fn test_minimum_chain() {
        let round = layout_oval_foundation("ch 3 from hook").unwrap();
        assert_eq!(round.len(), 7);
        assert!(layout_oval_foundation("ch 2 from hook").is_none());
    }

    #[test]
    fn test_missing_directive_fails_closed() {
        assert!(layout_oval_foundation("ch 8, sc in 2nd ch").is_none());
        assert!(layout_oval_foundation("sc 8 from hook").is_none());
        assert!(layout_oval_foundation("").is_none());
    }

    #[test]
    fn test_chain_number_without_space() {
        let directive = find_directive("ch8, hdc from hook").unwrap();
        assert_eq!(directive.chain_length, 8);
        assert_eq!(directive.base, StitchType::HalfDoubleCrochet);
    }

    #[test]
    fn test_chain_count_must_follow_directly() {
        assert!(find_directive("ch hook 8 from hook").is_none());
        assert!(find_directive("ch in 8 from hook").is_none());
        assert!(find_directive("ch, 8 from hook").is_none());
        assert_eq!(find_directive("CH   12 from hook").map(|d| d.chain_length), Some(12));
    }

    #[test]
    fn test_row_label_before_directive() {
        let directive = find_directive("Row 3: ch 8 from hook").unwrap();
        assert_eq!(directive.chain_length, 8);

        let layout = layout_oval_pattern("Row 1: ch 8, sc in 2nd ch from hook
Row 2: 22x").unwrap();
        assert_eq!(layout.len(), 17 + 22);
    }

    #[test]
    fn test_oversized_chain_fails_closed() {
        assert!(layout_oval_foundation("ch 4000000000 from hook").is_none());
        assert!(layout_oval_foundation("ch 50000 from hook").is_none());

        let largest = layout_oval_foundation("ch 49999 from hook").unwrap();
        assert_eq!(largest.len(), MAX_STITCHES - 1);
        assert_eq!(largest.last().map(|s| s.index_in_row), Some(99_999));
    }

    #[test]
    fn test_later_rows_share_the_stitch_budget() {
        let text = "ch 40000 from hook\n(x)*30000";
        let layout = layout_oval_pattern(text).unwrap();
        assert_eq!(layout.len(), 79_999);
        assert!(layout.iter().all(|s| s.row == 1));
    }

    #[test]
    fn test_default_base_stitch() {
        let directive = find_directive("ch 10 from hook").unwrap();
        assert_eq!(directive.base, StitchType::SingleCrochet);
    }

    #[test]
    fn test_edge_geometry() {
        let round = layout_oval_foundation("ch 6 from hook").unwrap();
        let top: Vec<_> = round.iter().filter(|s| s.side == OvalSide::Top).collect();
        let bottom: Vec<_> = round.iter().filter(|s| s.side == OvalSide::Bottom).collect();

        assert!(top.iter().all(|s| approx_equal(s.y, OVAL_HALF_HEIGHT) && s.angle.is_none()));
        assert!(bottom.iter().all(|s| approx_equal(s.y, -OVAL_HALF_HEIGHT)));
        assert!(top.windows(2).all(|p| p[1].x > p[0].x));
        assert!(bottom.windows(2).all(|p| p[1].x < p[0].x));
        // The bottom edge mirrors the top.
        assert!(approx_equal(bottom[0].x, top[top.len() - 1].x));
    }

    #[test]
    fn test_caps_lie_beyond_edges() {
        let round = layout_oval_foundation("ch 6 from hook").unwrap();
        let far_end = 3.0 * OVAL_STITCH_SPACING;
        for s in round.iter().filter(|s| s.side == OvalSide::TurnEnd) {
            assert!(s.x > far_end);
        }
        for s in round.iter().filter(|s| s.side == OvalSide::TurnStart) {
            assert!(s.x < 0.0);
        }
    }

    #[test]
    fn test_side_for_angle_quadrants() {
        assert_eq!(side_for_angle(FRAC_PI_2), OvalSide::Top);
        assert_eq!(side_for_angle(0.0), OvalSide::TurnEnd);
        assert_eq!(side_for_angle(-FRAC_PI_2), OvalSide::Bottom);
        assert_eq!(side_for_angle(PI), OvalSide::TurnStart);
        assert_eq!(side_for_angle(START_ANGLE), OvalSide::Top);
    }

    #[test]
    fn test_next_row_surrounds_previous() {
        let round = layout_oval_foundation("ch 8 from hook").unwrap();
        let pattern = parse_pattern("24x").unwrap();
        let next = next_oval_row(&round, &pattern, OVAL_ROW_SPACING);

        assert_eq!(next.len(), 24);
        assert!(next.iter().all(|s| s.row == 2));
        for side in [OvalSide::Top, OvalSide::Bottom, OvalSide::TurnStart, OvalSide::TurnEnd] {
            assert!(count(&next, side) > 0, "{side:?} missing");
        }

        let max_x = round.iter().map(|s| s.x).fold(f64::NEG_INFINITY, f64::max);
        let rightmost = next.iter().map(|s| s.x).fold(f64::NEG_INFINITY, f64::max);
        assert!(rightmost > max_x);
    }

    #[test]
    fn test_next_row_keeps_types_and_modifiers() {
        let round = layout_oval_foundation("ch 4 from hook").unwrap();
        let pattern = parse_pattern("blo sc, inc").unwrap();
        let next = next_oval_row(&round, &pattern, OVAL_ROW_SPACING);
        assert_eq!(next[0].modifier, Some(LoopModifier::BackLoopOnly));
        assert_eq!(next[1].stitch_type, StitchType::Increase);
    }

    #[test]
    fn test_next_row_empty_inputs() {
        let pattern = parse_pattern("6x").unwrap();
        assert!(next_oval_row(&[], &pattern, 1.0).is_empty());
        let round = layout_oval_foundation("ch 4 from hook").unwrap();
        assert!(next_oval_row(&round, &[], 1.0).is_empty());
    }

    #[test]
    fn test_layout_oval_pattern_rows() {
        let layout = layout_oval_pattern("ch 8, sc in 2nd ch from hook\n\n22x\n(x, v)*13").unwrap();
        assert_eq!(layout.len(), 17 + 22 + 26);
        assert_eq!(layout.iter().filter(|s| s.row == 2).count(), 22);
        assert_eq!(layout.iter().filter(|s| s.row == 3).count(), 26);
    }

    #[test]
    fn test_layout_oval_pattern_requires_foundation() {
        assert!(layout_oval_pattern("6x\nch 8 from hook").is_none());
    }

    #[test]
    fn test_serializes_side() {
        let round = layout_oval_foundation("ch 4 from hook").unwrap();
        let json = serde_json::to_string(&round[2]).unwrap();
        assert!(json.contains("\"side\":\"turn-end\""));
        assert!(json.contains("\"type\":\"single_crochet\""));
    }
}
