//! # Row Topology
//!
//! Links each stitch to the stitch(es) it was worked into on the row below.
//!
//! ## Parent Rules
//!
//! | Child type | Parents in previous row            |
//! |------------|------------------------------------|
//! | increase   | `floor(i / 2)`                     |
//! | decrease   | `{i, i + 1}` clamped to the row    |
//! | other      | `min(i, len - 1)`                  |
//!
//! Every parent edge becomes one [`BezierConnection`] drawn as a symmetric
//! S-curve.

use crate::group_by_row;
use crate::spiral::StitchPosition;
use glam::DVec3;
use serde::{Deserialize, Serialize};
use stitch_parser::StitchType;

/// How a child relates to its parent row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionKind {
    Increase,
    Decrease,
    Normal,
}

impl ConnectionKind {
    pub fn of(stitch_type: StitchType) -> Self {
        if stitch_type.is_increase() {
            Self::Increase
        } else if stitch_type.is_decrease() {
            Self::Decrease
        } else {
            Self::Normal
        }
    }
}

/// A cubic Bézier from a parent stitch to a child stitch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BezierConnection {
    pub from: DVec3,
    pub to: DVec3,
    pub control_points: [DVec3; 2],
    pub kind: ConnectionKind,
    /// 0-based index of the parent in its row.
    pub parent_index: usize,
    /// 0-based index of the child in its row.
    pub child_index: usize,
}

impl BezierConnection {
    /// Build the S-curve between two points.
    ///
    /// Both control points sit at the midpoint height, one above each end.
    pub fn between(from: DVec3, to: DVec3, kind: ConnectionKind) -> Self {
        let mid = (from + to) * 0.5;
        Self {
            from,
            to,
            control_points: [
                DVec3::new(from.x, mid.y, mid.z),
                DVec3::new(to.x, mid.y, mid.z),
            ],
            kind,
            parent_index: 0,
            child_index: 0,
        }
    }

    /// Evaluate the curve at `t` in `[0, 1]`.
    pub fn point_at(&self, t: f64) -> DVec3 {
        let [c1, c2] = self.control_points;
        let u = 1.0 - t;
        self.from * (u * u * u)
            + c1 * (3.0 * u * u * t)
            + c2 * (3.0 * u * t * t)
            + self.to * (t * t * t)
    }
}

/// Parent indices of the child at `index` in a row following a row of
/// `previous_len` stitches.
///
/// ## Example
///
/// ```rust
/// use stitch_layout::parent_indices;
/// use stitch_parser::StitchType;
///
/// assert_eq!(parent_indices(StitchType::Increase, 5, 6), vec![2]);
/// assert_eq!(parent_indices(StitchType::Decrease, 5, 6), vec![5]);
/// ```
pub fn parent_indices(stitch_type: StitchType, index: usize, previous_len: usize) -> Vec<usize> {
    let Some(last) = previous_len.checked_sub(1) else {
        return Vec::new();
    };

    match ConnectionKind::of(stitch_type) {
        ConnectionKind::Increase => vec![(index / 2).min(last)],
        ConnectionKind::Decrease => {
            let first = index.min(last);
            let second = (index + 1).min(last);
            if first == second {
                vec![first]
            } else {
                vec![first, second]
            }
        }
        ConnectionKind::Normal => vec![index.min(last)],
    }
}

/// Connect one row to the row below it.
pub fn connect(previous: &[StitchPosition], current: &[StitchPosition]) -> Vec<BezierConnection> {
    current
        .iter()
        .enumerate()
        .flat_map(|(child_index, child)| {
            let kind = ConnectionKind::of(child.stitch_type);
            parent_indices(child.stitch_type, child_index, previous.len())
                .into_iter()
                .map(move |parent_index| BezierConnection {
                    parent_index,
                    child_index,
                    ..BezierConnection::between(previous[parent_index].point(), child.point(), kind)
                })
        })
        .collect()
}

/// Connect every row `r` to row `r - 1` when both have stitches.
#[tracing::instrument(level = "debug", skip_all, fields(stitches = positions.len()))]
pub fn connect_rows(positions: &[StitchPosition]) -> Vec<BezierConnection> {
    let rows = group_by_row(positions, |p| p.row);
    let mut connections = Vec::new();

    for (row, current) in &rows {
        let Some(previous) = row.checked_sub(1).and_then(|r| rows.get(&r)) else {
            continue;
        };
        let previous: Vec<StitchPosition> = previous.iter().map(|p| **p).collect();
        let current: Vec<StitchPosition> = current.iter().map(|p| **p).collect();
        connections.extend(connect(&previous, &current));
    }

    tracing::debug!(count = connections.len(), "row connections");
    connections
}

// =============================================================================
// TESTS
// =============================================================================
