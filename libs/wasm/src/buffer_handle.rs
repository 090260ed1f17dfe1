//! # Wireframe Handle
//!
//! WASM-friendly wrapper for wireframe data that can be transferred to
//! JavaScript.

use stitch_mesh::Wireframe;
use wasm_bindgen::prelude::*;

/// A handle to a line-segment buffer that can be accessed from JavaScript.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const wireframe = render_wireframe("6x\n(x, v)*6", 1.0, 1.0, 0.02, 0.8, true);
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(wireframe.vertices(), 3));
/// const lines = new THREE.LineSegments(geometry, material);
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct WireframeHandle {
    /// Segment endpoints as [x0, y0, z0, x1, y1, z1, ...]
    vertices: Vec<f32>,
    /// Number of segments
    segment_count: u32,
}

#[wasm_bindgen]
impl WireframeHandle {
    /// Returns the number of line segments.
    #[wasm_bindgen(getter)]
    pub fn segment_count(&self) -> u32 {
        self.segment_count
    }

    /// Returns the number of points, two per segment.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.segment_count.saturating_mul(2)
    }

    /// Returns the segment endpoints as a Float32Array.
    ///
    /// Format: [x, y, z, x, y, z, ...]
    /// Length: segment_count * 6
    #[wasm_bindgen]
    pub fn vertices(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.vertices[..])
    }

    /// Returns true if nothing was drawn.
    #[wasm_bindgen]
    pub fn is_empty(&self) -> bool {
        self.segment_count == 0
    }
}

impl WireframeHandle {
    /// Creates a handle from a generated wireframe.
    pub fn from_wireframe(wireframe: &Wireframe) -> Self {
        Self {
            vertices: wireframe.vertex_buffer(),
            segment_count: u32::try_from(wireframe.segment_count()).unwrap_or(u32::MAX),
        }
    }

    /// Raw vertex data, for hosts without a JS runtime.
    pub fn vertex_data(&self) -> &[f32] {
        &self.vertices
    }
}
