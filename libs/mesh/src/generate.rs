//! # Wireframe Generator
//!
//! Turns positioned stitches into one flat list of line segments.

use crate::error::MeshError;
use crate::glyph::{draw_stitch, Anchors};
use crate::options::WireframeOptions;
use crate::wireframe::Wireframe;
use config::constants::MAX_SEGMENTS;
use stitch_layout::StitchPosition;

/// Generate the wireframe for a laid-out chart.
///
/// Stitches are drawn in input order. With connectors enabled, the head of
/// every drawn stitch is joined to the base of the next drawn stitch in the
/// same row, and the last wraps to the first.
///
/// ## Example
///
/// ```rust
/// use config::constants::ChartConfig;
/// use stitch_layout::layout_spiral;
/// use stitch_mesh::{generate_wireframe, WireframeOptions};
/// use stitch_parser::parse_pattern;
///
/// let config = ChartConfig::default();
/// let positions = layout_spiral(&parse_pattern("6x").unwrap(), &config);
/// let options = WireframeOptions::for_config(&config);
/// let wireframe = generate_wireframe(&positions, &options).unwrap();
/// // Three strokes per stitch plus six connectors.
/// assert_eq!(wireframe.segment_count(), 6 * 3 + 6);
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(stitches = positions.len()))]
pub fn generate_wireframe(
    positions: &[StitchPosition],
    options: &WireframeOptions,
) -> Result<Wireframe, MeshError> {
    options.validate()?;

    let mut wireframe = Wireframe::with_capacity(positions.len() * 4);
    let mut row_anchors: Vec<Anchors> = Vec::new();
    let mut current_row = None;

    for position in positions {
        if current_row != Some(position.row) {
            close_row(&mut wireframe, &row_anchors, options);
            row_anchors.clear();
            current_row = Some(position.row);
        }
        if let Some(anchors) = draw_stitch(&mut wireframe, position, options) {
            row_anchors.push(anchors);
        }
        check_size(&wireframe)?;
    }
    close_row(&mut wireframe, &row_anchors, options);
    check_size(&wireframe)?;

    tracing::debug!(segments = wireframe.segment_count(), "wireframe generated");
    Ok(wireframe)
}

/// Connect consecutive stitches of a finished row.
fn close_row(wireframe: &mut Wireframe, anchors: &[Anchors], options: &WireframeOptions) {
    if !options.connectors || anchors.len() < 2 {
        return;
    }
    for (i, anchor) in anchors.iter().enumerate() {
        let next = &anchors[(i + 1) % anchors.len()];
        wireframe.add_segment(anchor.head, next.base);
    }
}

fn check_size(wireframe: &Wireframe) -> Result<(), MeshError> {
    let count = wireframe.segment_count();
    if count > MAX_SEGMENTS {
        return Err(MeshError::TooManySegments {
            count,
            max: MAX_SEGMENTS,
        });
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use config::constants::{ChartConfig, LOOP_SEGMENTS};
    use stitch_layout::layout_spiral;
    use stitch_parser::parse_pattern;

    fn positions(source: &str) -> Vec<StitchPosition> {
        layout_spiral(&parse_pattern(source).unwrap(), &ChartConfig::default())
    }

    fn without_connectors() -> WireframeOptions {
        WireframeOptions::default().with_connectors(false)
    }

    #[test]
    fn test_empty_input() {
        let wireframe = generate_wireframe(&[], &WireframeOptions::default()).unwrap();
        assert!(wireframe.is_empty());
    }

    #[test]
    fn test_plain_round_without_connectors() {
        let wireframe = generate_wireframe(&positions("6x"), &without_connectors()).unwrap();
        assert_eq!(wireframe.segment_count(), 18);
        assert_eq!(wireframe.vertex_buffer().len(), 18 * 6);
    }

    #[test]
    fn test_connectors_wrap_each_row() {
        let all = positions("6x\n6dc");
        let plain = generate_wireframe(&all, &without_connectors()).unwrap();
        let joined = generate_wireframe(&all, &WireframeOptions::default()).unwrap();
        assert_eq!(joined.segment_count(), plain.segment_count() + 12);
    }

    #[test]
    fn test_single_stitch_row_has_no_connector() {
        let wireframe = generate_wireframe(&positions("sc"), &WireframeOptions::default()).unwrap();
        assert_eq!(wireframe.segment_count(), 3);
    }

    #[test]
    fn test_skips_are_not_connected() {
        let all = positions("sc, sk, sc");
        let wireframe = generate_wireframe(&all, &WireframeOptions::default()).unwrap();
        // Two drawn stitches joined both ways.
        assert_eq!(wireframe.segment_count(), 2 * 3 + 2);
    }

    #[test]
    fn test_magic_ring_round() {
        let all = positions("mr\n6x");
        let wireframe = generate_wireframe(&all, &without_connectors()).unwrap();
        assert_eq!(wireframe.segment_count(), LOOP_SEGMENTS as usize + 18);
    }

    #[test]
    fn test_increase_round_longer_than_plain() {
        let plain = generate_wireframe(&positions("6x"), &without_connectors()).unwrap();
        let fanned = generate_wireframe(&positions("6inc"), &without_connectors()).unwrap();
        assert_eq!(fanned.segment_count(), 2 * plain.segment_count());
    }

    #[test]
    fn test_height_scale_stretches_stems() {
        let all = positions("dc");
        let short = generate_wireframe(&all, &without_connectors()).unwrap();
        let tall = WireframeOptions {
            height_scale: 2.0 * WireframeOptions::default().height_scale,
            ..without_connectors()
        };
        let tall = generate_wireframe(&all, &tall).unwrap();
        let stem = |w: &Wireframe| w.segments()[0][0].distance(w.segments()[0][1]);
        assert!((stem(&tall) - 2.0 * stem(&short)).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_options_rejected() {
        let options = WireframeOptions::default().with_loop_segments(1);
        assert!(generate_wireframe(&positions("6x"), &options).is_err());
    }
}
