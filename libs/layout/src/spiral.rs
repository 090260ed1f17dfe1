//! # Spiral Layout
//!
//! Places rounds on concentric circles while every stitch climbs one
//! `z_increment`, so the whole pattern forms a single continuous spiral.

use crate::group_by_row;
use config::constants::ChartConfig;
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, TAU};
use stitch_parser::{ParsedStitch, StitchType};

/// A stitch placed on the spiral.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StitchPosition {
    pub row: u32,
    pub index_in_row: u32,
    #[serde(rename = "type")]
    pub stitch_type: StitchType,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Polar angle around the chart centre.
    pub angle: f64,
    pub radius: f64,
}

impl StitchPosition {
    /// Position as a vector.
    #[inline]
    pub fn point(&self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    /// Unit vector pointing away from the chart centre.
    #[inline]
    pub fn outward(&self) -> DVec3 {
        DVec3::new(self.angle.cos(), self.angle.sin(), 0.0)
    }

    /// Unit vector along the round, in the direction of work.
    #[inline]
    pub fn tangent(&self) -> DVec3 {
        DVec3::new(-self.angle.sin(), self.angle.cos(), 0.0)
    }
}

/// Lay stitches out on a spiral.
///
/// Round `r` sits at `base_radius + (r - 1) * row_spacing`; its stitches are
/// spread over a full turn starting at -π/2. The k-th stitch overall (0-based,
/// across all rounds) has `z = k * z_increment`.
///
/// # Example
///
/// ```rust
/// use config::constants::ChartConfig;
/// use stitch_layout::layout_spiral;
/// use stitch_parser::parse_pattern;
///
/// let stitches = parse_pattern("6x\n6v").unwrap();
/// let positions = layout_spiral(&stitches, &ChartConfig::default());
/// assert_eq!(positions.len(), 12);
/// assert!(positions[11].z > positions[0].z);
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(stitches = stitches.len()))]
pub fn layout_spiral(stitches: &[ParsedStitch], config: &ChartConfig) -> Vec<StitchPosition> {
    let mut positions = Vec::with_capacity(stitches.len());

    for (row, members) in group_by_row(stitches, |s| s.row) {
        let radius = config.base_radius + f64::from(row.saturating_sub(1)) * config.row_spacing;
        let step = TAU / members.len() as f64;

        for (i, stitch) in members.into_iter().enumerate() {
            let angle = -FRAC_PI_2 + step * i as f64;
            let z = positions.len() as f64 * config.z_increment;
            positions.push(StitchPosition {
                row,
                index_in_row: stitch.index_in_row,
                stitch_type: stitch.stitch_type,
                x: radius * angle.cos(),
                y: radius * angle.sin(),
                z,
                angle,
                radius,
            });
        }
    }

    tracing::debug!(count = positions.len(), "spiral layout");
    positions
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use config::constants::approx_equal;
    use stitch_parser::parse_pattern;

    fn layout(source: &str) -> Vec<StitchPosition> {
        layout_spiral(&parse_pattern(source).unwrap(), &ChartConfig::default())
    }

    #[test]
    fn test_empty_input() {
        assert!(layout("").is_empty());
    }

    #[test]
    fn test_first_stitch_at_bottom() {
        let positions = layout("6x");
        let first = positions[0];
        assert!(approx_equal(first.angle, -FRAC_PI_2));
        assert!(approx_equal(first.x, 0.0));
        assert!(approx_equal(first.y, -1.0));
        assert!(approx_equal(first.z, 0.0));
    }

    #[test]
    fn test_even_distribution() {
        let positions = layout("4x");
        for pair in positions.windows(2) {
            assert!(approx_equal(pair[1].angle - pair[0].angle, FRAC_PI_2));
        }
    }

    #[test]
    fn test_row_radius() {
        let config = ChartConfig::new(2.0, 0.5, 0.1, 1.0).unwrap();
        let positions = layout_spiral(&parse_pattern("3x\n3x\n3x").unwrap(), &config);
        assert!(approx_equal(positions[0].radius, 2.0));
        assert!(approx_equal(positions[3].radius, 2.5));
        assert!(approx_equal(positions[8].radius, 3.0));
        for p in &positions {
            assert!(approx_equal(p.x.hypot(p.y), p.radius));
        }
    }

    #[test]
    fn test_z_climbs_once_per_stitch_across_rows() {
        let config = ChartConfig::default();
        let positions = layout("6x\n(x, v)*6\n(2x, v)*6");
        assert_eq!(positions.len(), 6 + 12 + 18);
        for (k, p) in positions.iter().enumerate() {
            assert!(approx_equal(p.z, k as f64 * config.z_increment));
        }
    }

    #[test]
    fn test_tangent_is_perpendicular_to_outward() {
        let positions = layout("5x");
        for p in &positions {
            assert!(approx_equal(p.outward().dot(p.tangent()), 0.0));
        }
    }

    #[test]
    fn test_serializes_type_key() {
        let positions = layout("x");
        let json = serde_json::to_string(&positions[0]).unwrap();
        assert!(json.contains("\"type\":\"single_crochet\""));
        assert!(json.contains("\"indexInRow\":1"));
    }
}
