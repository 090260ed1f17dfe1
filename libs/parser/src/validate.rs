//! # Row Validation
//!
//! Checks stitch counts row by row using increase/decrease arithmetic.
//!
//! ## Rules
//!
//! - `increases` sums `fan - 1` over increase stitches, `decreases` sums
//!   `fan - 1` over decrease stitches.
//! - A row after a non-empty row, containing at least one increase or
//!   decrease, expects `previous + increases - decreases` stitches.
//! - Row 1 is always valid ("starting row"). Rows without an expectation
//!   are valid.
//!
//! ## Example
//!
//! ```rust
//! use stitch_parser::{parse_pattern, validate_rows};
//!
//! let stitches = parse_pattern("6x\n(x, v)*6").unwrap();
//! let rows = validate_rows(&stitches);
//! assert!(rows.iter().all(|row| row.is_valid));
//! ```

use crate::stitch::ParsedStitch;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Message attached to row 1.
pub const STARTING_ROW: &str = "starting row";

/// Validation result for one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowValidation {
    pub row: u32,
    pub actual_count: usize,
    /// Only set when the row can be checked against the previous one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_count: Option<i64>,
    pub is_valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Net shaping of one row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Shaping {
    increases: i64,
    decreases: i64,
}

impl Shaping {
    fn of(stitches: &[&ParsedStitch]) -> Self {
        stitches.iter().fold(Self::default(), |mut acc, stitch| {
            let kind = stitch.stitch_type;
            let extra = kind.fan_size().map_or(0, |fan| i64::from(fan) - 1);
            if kind.is_increase() {
                acc.increases += extra;
            } else if kind.is_decrease() {
                acc.decreases += extra;
            }
            acc
        })
    }

    fn is_flat(self) -> bool {
        self.increases + self.decreases == 0
    }
}

/// Group stitches by row in ascending order.
fn rows(stitches: &[ParsedStitch]) -> BTreeMap<u32, Vec<&ParsedStitch>> {
    let mut rows: BTreeMap<u32, Vec<&ParsedStitch>> = BTreeMap::new();
    for stitch in stitches {
        rows.entry(stitch.row).or_default().push(stitch);
    }
    rows
}

/// Validate every row that has stitches.
///
/// The previous row of row `r` is row `r - 1`; if that row produced no
/// stitches, row `r` is not checked.
pub fn validate_rows(stitches: &[ParsedStitch]) -> Vec<RowValidation> {
    let rows = rows(stitches);

    rows.iter()
        .map(|(&row, members)| {
            let actual_count = members.len();
            if row == 1 {
                return RowValidation {
                    row,
                    actual_count,
                    expected_count: None,
                    is_valid: true,
                    message: Some(STARTING_ROW.to_string()),
                };
            }

            let previous = rows.get(&(row - 1)).map_or(0, Vec::len);
            let shaping = Shaping::of(members);
            if previous == 0 || shaping.is_flat() {
                return RowValidation {
                    row,
                    actual_count,
                    expected_count: None,
                    is_valid: true,
                    message: None,
                };
            }

            let expected = previous as i64 + shaping.increases - shaping.decreases;
            let is_valid = expected == actual_count as i64;
            let message = (!is_valid).then(|| {
                tracing::debug!(row, expected, actual_count, "row count mismatch");
                format!("expected {expected} stitches, found {actual_count}")
            });

            RowValidation {
                row,
                actual_count,
                expected_count: Some(expected),
                is_valid,
                message,
            }
        })
        .collect()
}

// =============================================================================
// SUMMARY
// =============================================================================

/// Totals over a whole pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternSummary {
    /// Rows that produced at least one stitch.
    pub rows: usize,
    pub total_stitches: usize,
    /// Sum of `fan - 1` over increase stitches.
    pub increases: i64,
    /// Sum of `fan - 1` over decrease stitches.
    pub decreases: i64,
}

/// Summarize a stitch list.
pub fn summarize(stitches: &[ParsedStitch]) -> PatternSummary {
    let all: Vec<&ParsedStitch> = stitches.iter().collect();
    let shaping = Shaping::of(&all);
    PatternSummary {
        rows: rows(stitches).len(),
        total_stitches: stitches.len(),
        increases: shaping.increases,
        decreases: shaping.decreases,
    }
}

// =============================================================================
// TESTS
// =============================================================================
