//! # Wireframe Options
//!
//! Tunables for the wireframe generator.

use crate::error::MeshError;
use config::constants::{ChartConfig, DEFAULT_HEIGHT_SCALE, LOOP_SEGMENTS};

/// Smallest loop polygon.
pub const MIN_LOOP_SEGMENTS: u32 = 3;

/// Options for [`generate_wireframe`](crate::generate_wireframe).
///
/// # Example
///
/// ```rust
/// use config::constants::ChartConfig;
/// use stitch_mesh::WireframeOptions;
///
/// let options = WireframeOptions::for_config(&ChartConfig::default()).with_connectors(false);
/// assert!(!options.connectors);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireframeOptions {
    /// Multiplier applied to every stitch height.
    pub height_scale: f64,
    /// Join each stitch head to the base of the next stitch in its row.
    pub connectors: bool,
    /// Edges in a chain/slip/ring loop.
    pub loop_segments: u32,
}

impl Default for WireframeOptions {
    fn default() -> Self {
        Self {
            height_scale: DEFAULT_HEIGHT_SCALE,
            connectors: true,
            loop_segments: LOOP_SEGMENTS,
        }
    }
}

impl WireframeOptions {
    /// Options matching a chart layout.
    pub fn for_config(config: &ChartConfig) -> Self {
        Self {
            height_scale: config.height_scale,
            ..Self::default()
        }
    }

    pub fn with_connectors(mut self, connectors: bool) -> Self {
        self.connectors = connectors;
        self
    }

    pub fn with_loop_segments(mut self, loop_segments: u32) -> Self {
        self.loop_segments = loop_segments;
        self
    }

    /// Reject options that would produce degenerate geometry.
    pub fn validate(&self) -> Result<(), MeshError> {
        if !(self.height_scale.is_finite() && self.height_scale > 0.0) {
            return Err(MeshError::InvalidHeightScale {
                value: self.height_scale,
            });
        }
        if self.loop_segments < MIN_LOOP_SEGMENTS {
            return Err(MeshError::TooFewLoopSegments {
                segments: self.loop_segments,
                min: MIN_LOOP_SEGMENTS,
            });
        }
        Ok(())
    }
}
