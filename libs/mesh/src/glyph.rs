//! # Stitch Glyphs
//!
//! Line-segment symbol for one positioned stitch.
//!
//! Each symbol is drawn in the stitch's local frame: `up` points away from the
//! chart centre, `side` runs along the round.
//!
//! ```text
//!  plain        increase      decrease     chain
//!   \ /          \ | /          \ /         ◯
//!    |  ─┼─        \|/           |
//!    |              ·           / \
//! ```

use crate::options::WireframeOptions;
use crate::wireframe::Wireframe;
use config::constants::{CROSSBAR_HALF_WIDTH, DECREASE_BASE_SPACING, FAN_SPREAD, HEAD_FORK_RATIO, LOOP_RADIUS};
use glam::DVec3;
use std::f64::consts::TAU;
use stitch_layout::StitchPosition;
use stitch_parser::StitchType;

/// Where connectors attach to a drawn symbol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchors {
    pub base: DVec3,
    pub head: DVec3,
}

/// Local drawing frame of one stitch.
#[derive(Debug, Clone, Copy)]
struct Frame {
    origin: DVec3,
    up: DVec3,
    side: DVec3,
}

impl Frame {
    fn of(position: &StitchPosition) -> Self {
        Self {
            origin: position.point(),
            up: position.outward(),
            side: position.tangent(),
        }
    }

    fn at(&self, up: f64, side: f64) -> DVec3 {
        self.origin + self.up * up + self.side * side
    }
}

/// Draw one stitch, returning its anchors.
///
/// Returns `None` for stitches with nothing to draw (zero height and not a
/// loop, such as a skip).
pub fn draw_stitch(
    wireframe: &mut Wireframe,
    position: &StitchPosition,
    options: &WireframeOptions,
) -> Option<Anchors> {
    let stitch = position.stitch_type;
    let frame = Frame::of(position);

    if stitch.draws_as_loop() {
        return Some(draw_loop(wireframe, &frame, stitch, options.loop_segments));
    }

    let length = stitch.height() * options.height_scale;
    if length <= 0.0 {
        return None;
    }

    let fan = usize::from(stitch.fan_size().unwrap_or(1));
    let wraps = stitch.wrap_count();
    let anchors = if stitch.is_increase() {
        draw_fan(wireframe, &frame, length, fan, wraps)
    } else if stitch.is_decrease() {
        draw_merge(wireframe, &frame, length, fan, wraps)
    } else {
        draw_stem(wireframe, &frame, 0.0, length, wraps)
    };
    Some(anchors)
}

// =============================================================================
// SYMBOL PARTS
// =============================================================================

/// Vertical stem with forked head and cross-bars.
fn draw_stem(wireframe: &mut Wireframe, frame: &Frame, side: f64, length: f64, wraps: u8) -> Anchors {
    let base = frame.at(0.0, side);
    let head = frame.at(length, side);
    wireframe.add_segment(base, head);
    draw_fork(wireframe, frame, length, side, length);
    draw_crossbars(wireframe, frame, (0.0, side), (length, side), wraps);
    Anchors { base, head }
}

/// Two short strokes opening outward from the top of a stem.
fn draw_fork(wireframe: &mut Wireframe, frame: &Frame, up: f64, side: f64, length: f64) {
    let tip = frame.at(up, side);
    let fork = length * HEAD_FORK_RATIO;
    wireframe.add_segment(tip, frame.at(up + fork, side - fork));
    wireframe.add_segment(tip, frame.at(up + fork, side + fork));
}

/// `wraps` short bars evenly spaced between two local points.
fn draw_crossbars(wireframe: &mut Wireframe, frame: &Frame, from: (f64, f64), to: (f64, f64), wraps: u8) {
    let count = f64::from(wraps) + 1.0;
    for j in 1..=wraps {
        let t = f64::from(j) / count;
        let up = from.0 + (to.0 - from.0) * t;
        let side = from.1 + (to.1 - from.1) * t;
        wireframe.add_segment(
            frame.at(up, side - CROSSBAR_HALF_WIDTH),
            frame.at(up, side + CROSSBAR_HALF_WIDTH),
        );
    }
}

/// `fan` branches from one base, spread symmetrically across the round.
fn draw_fan(wireframe: &mut Wireframe, frame: &Frame, length: f64, fan: usize, wraps: u8) -> Anchors {
    for offset in spread(fan, FAN_SPREAD * length) {
        wireframe.add_segment(frame.origin, frame.at(length, offset));
        draw_fork(wireframe, frame, length, offset, length);
        draw_crossbars(wireframe, frame, (0.0, 0.0), (length, offset), wraps);
    }
    Anchors {
        base: frame.origin,
        head: frame.at(length, 0.0),
    }
}

/// `merge` base points converging on one stem.
fn draw_merge(wireframe: &mut Wireframe, frame: &Frame, length: f64, merge: usize, wraps: u8) -> Anchors {
    let apex = frame.at(length, 0.0);
    let width = DECREASE_BASE_SPACING * (merge.saturating_sub(1)) as f64;
    for offset in spread(merge, width) {
        wireframe.add_segment(frame.at(0.0, offset), apex);
    }
    draw_fork(wireframe, frame, length, 0.0, length);
    draw_crossbars(wireframe, frame, (0.0, 0.0), (length, 0.0), wraps);
    Anchors {
        base: frame.origin,
        head: apex,
    }
}

/// Small closed loop in the chart plane; slip stitches are half size.
fn draw_loop(wireframe: &mut Wireframe, frame: &Frame, stitch: StitchType, segments: u32) -> Anchors {
    let radius = if stitch == StitchType::SlipStitch {
        LOOP_RADIUS / 2.0
    } else {
        LOOP_RADIUS
    };
    let centre = frame.at(radius, 0.0);
    let points: Vec<DVec3> = (0..segments)
        .map(|k| {
            let angle = TAU * f64::from(k) / f64::from(segments);
            centre + frame.up * (radius * angle.cos()) + frame.side * (radius * angle.sin())
        })
        .collect();
    wireframe.add_closed_polyline(&points);
    Anchors {
        base: frame.origin,
        head: frame.at(2.0 * radius, 0.0),
    }
}

/// `count` offsets evenly spread over `width`, centred on zero.
fn spread(count: usize, width: f64) -> impl Iterator<Item = f64> {
    let steps = count.saturating_sub(1).max(1) as f64;
    (0..count).map(move |j| {
        if count == 1 {
            0.0
        } else {
            width * (j as f64 / steps - 0.5)
        }
    })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use config::constants::{approx_equal, LOOP_SEGMENTS};
    use std::f64::consts::FRAC_PI_2;

    /// A stitch at (0, -1) on the first round, facing -Y.
    fn at_bottom(stitch_type: StitchType) -> StitchPosition {
        StitchPosition {
            row: 1,
            index_in_row: 1,
            stitch_type,
            x: 0.0,
            y: -1.0,
            z: 0.0,
            angle: -FRAC_PI_2,
            radius: 1.0,
        }
    }

    fn draw(stitch_type: StitchType) -> (Wireframe, Option<Anchors>) {
        let mut wireframe = Wireframe::new();
        let options = WireframeOptions::default();
        let anchors = draw_stitch(&mut wireframe, &at_bottom(stitch_type), &options);
        (wireframe, anchors)
    }

    #[test]
    fn test_single_crochet_is_stem_and_fork() {
        let (wireframe, anchors) = draw(StitchType::SingleCrochet);
        assert_eq!(wireframe.segment_count(), 3);
        let anchors = anchors.unwrap();
        let length = WireframeOptions::default().height_scale;
        assert!(approx_equal(anchors.head.y, -1.0 - length));
        assert!(approx_equal(anchors.base.distance(anchors.head), length));
    }

    #[test]
    fn test_crossbars_follow_wrap_count() {
        let (sc, _) = draw(StitchType::SingleCrochet);
        let (dc, _) = draw(StitchType::DoubleCrochet);
        let (tr, _) = draw(StitchType::TrebleCrochet);
        assert_eq!(dc.segment_count(), sc.segment_count() + 1);
        assert_eq!(tr.segment_count(), sc.segment_count() + 2);
    }

    #[test]
    fn test_crossbars_lie_along_the_round() {
        let (dc, _) = draw(StitchType::DoubleCrochet);
        let [a, b] = dc.segments()[3];
        // Tangent at the bottom of the circle is +X.
        assert!(approx_equal(a.y, b.y));
        assert!(approx_equal((b.x - a.x).abs(), 2.0 * CROSSBAR_HALF_WIDTH));
    }

    #[test]
    fn test_increase_fans_out() {
        let (wireframe, _) = draw(StitchType::Increase);
        // Two branches, each with a forked head.
        assert_eq!(wireframe.segment_count(), 2 * 3);
        let branch_tops: Vec<DVec3> = wireframe.segments().iter().step_by(3).map(|s| s[1]).collect();
        assert!(approx_equal(branch_tops[0].x, -branch_tops[1].x));
        assert!(branch_tops[0].x < 0.0);
    }

    #[test]
    fn test_triple_increase_has_centre_branch() {
        let (wireframe, _) = draw(StitchType::TripleIncrease);
        assert_eq!(wireframe.segment_count(), 3 * 3);
        assert!(approx_equal(wireframe.segments()[3][1].x, 0.0));
    }

    #[test]
    fn test_decrease_merges() {
        let (wireframe, anchors) = draw(StitchType::Decrease);
        // Two legs plus a forked head.
        assert_eq!(wireframe.segment_count(), 4);
        let head = anchors.unwrap().head;
        assert_eq!(wireframe.segments()[0][1], head);
        assert_eq!(wireframe.segments()[1][1], head);
        assert!(approx_equal(
            wireframe.segments()[0][0].distance(wireframe.segments()[1][0]),
            DECREASE_BASE_SPACING
        ));
    }

    #[test]
    fn test_chain_is_closed_loop() {
        let (wireframe, _) = draw(StitchType::Chain);
        assert_eq!(wireframe.segment_count(), LOOP_SEGMENTS as usize);
        let first = wireframe.segments()[0][0];
        let last = wireframe.segments()[wireframe.segment_count() - 1][1];
        assert!(approx_equal(first.distance(last), 0.0));
    }

    #[test]
    fn test_slip_loop_is_smaller() {
        let (chain, _) = draw(StitchType::Chain);
        let (slip, _) = draw(StitchType::SlipStitch);
        let (chain_min, chain_max) = chain.bounding_box().unwrap();
        let (slip_min, slip_max) = slip.bounding_box().unwrap();
        assert!((slip_max - slip_min).length() < (chain_max - chain_min).length());
    }

    #[test]
    fn test_skip_draws_nothing() {
        let (wireframe, anchors) = draw(StitchType::Skip);
        assert!(wireframe.is_empty());
        assert!(anchors.is_none());
    }

    #[test]
    fn test_spread_is_symmetric() {
        let offsets: Vec<f64> = spread(3, 2.0).collect();
        assert_eq!(offsets, vec![-1.0, 0.0, 1.0]);
        assert_eq!(spread(1, 2.0).collect::<Vec<_>>(), vec![0.0]);
    }
}
