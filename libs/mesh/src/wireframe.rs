//! # Wireframe Data Structure
//!
//! Unindexed list of line segments.

use glam::DVec3;

/// A set of line segments, each stored as its two endpoints.
///
/// All geometry uses f64 internally. Export to f32 only happens at the WASM
/// boundary for GPU rendering.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use stitch_mesh::Wireframe;
///
/// let mut wireframe = Wireframe::new();
/// wireframe.add_segment(DVec3::ZERO, DVec3::X);
/// assert_eq!(wireframe.vertex_buffer(), vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Wireframe {
    segments: Vec<[DVec3; 2]>,
}

impl Wireframe {
    /// Creates an empty wireframe.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a wireframe with pre-allocated capacity.
    pub fn with_capacity(segment_count: usize) -> Self {
        Self {
            segments: Vec::with_capacity(segment_count),
        }
    }

    /// Returns the number of segments.
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if there are no segments.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Adds one segment.
    pub fn add_segment(&mut self, from: DVec3, to: DVec3) {
        self.segments.push([from, to]);
    }

    /// Adds a closed polygon, one segment per edge.
    pub fn add_closed_polyline(&mut self, points: &[DVec3]) {
        if points.len() < 2 {
            return;
        }
        for (i, &point) in points.iter().enumerate() {
            let next = points[(i + 1) % points.len()];
            self.add_segment(point, next);
        }
    }

    /// Returns a reference to the segments.
    #[inline]
    pub fn segments(&self) -> &[[DVec3; 2]] {
        &self.segments
    }

    /// Flat `[x0, y0, z0, x1, y1, z1, ...]` buffer, two points per segment.
    pub fn vertex_buffer(&self) -> Vec<f32> {
        self.segments
            .iter()
            .flatten()
            .flat_map(|p| [p.x as f32, p.y as f32, p.z as f32])
            .collect()
    }

    /// Axis-aligned bounds, or `None` when empty.
    pub fn bounding_box(&self) -> Option<(DVec3, DVec3)> {
        let mut points = self.segments.iter().flatten();
        let first = *points.next()?;
        Some(points.fold((first, first), |(min, max), &p| (min.min(p), max.max(p))))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let wireframe = Wireframe::new();
        assert!(wireframe.is_empty());
        assert!(wireframe.vertex_buffer().is_empty());
        assert_eq!(wireframe.bounding_box(), None);
    }

    #[test]
    fn test_buffer_has_six_floats_per_segment() {
        let mut wireframe = Wireframe::with_capacity(2);
        wireframe.add_segment(DVec3::ZERO, DVec3::Y);
        wireframe.add_segment(DVec3::Y, DVec3::new(1.0, 1.0, 0.5));
        let buffer = wireframe.vertex_buffer();
        assert_eq!(buffer.len(), 12);
        assert_eq!(&buffer[6..], &[0.0, 1.0, 0.0, 1.0, 1.0, 0.5]);
    }

    #[test]
    fn test_closed_polyline_wraps() {
        let mut wireframe = Wireframe::new();
        wireframe.add_closed_polyline(&[DVec3::ZERO, DVec3::X, DVec3::Y]);
        assert_eq!(wireframe.segment_count(), 3);
        assert_eq!(wireframe.segments()[2], [DVec3::Y, DVec3::ZERO]);
    }

    #[test]
    fn test_closed_polyline_ignores_single_point() {
        let mut wireframe = Wireframe::new();
        wireframe.add_closed_polyline(&[DVec3::X]);
        assert!(wireframe.is_empty());
    }

    #[test]
    fn test_bounds_span_all_segments() {
        let mut a = Wireframe::new();
        a.add_segment(DVec3::new(-1.0, 0.0, 0.0), DVec3::ZERO);
        a.add_segment(DVec3::ZERO, DVec3::new(0.0, 2.0, 3.0));

        assert_eq!(a.segment_count(), 2);
        assert_eq!(
            a.bounding_box(),
            Some((DVec3::new(-1.0, 0.0, 0.0), DVec3::new(0.0, 2.0, 3.0)))
        );
    }
}
