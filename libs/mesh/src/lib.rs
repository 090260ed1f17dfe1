//! # Stitch Mesh
//!
//! Procedural line-segment geometry for laid-out stitch charts.
//!
//! ## Architecture
//!
//! ```text
//! StitchPosition[] → glyph per stitch → row connectors → Wireframe → f32 buffer
//! ```
//!
//! Pure Rust, no I/O. The vertex buffer is a flat list of point pairs, one
//! pair per segment, with no indices and no deduplication.
//!
//! ## Example
//!
//! ```rust
//! use config::constants::ChartConfig;
//! use stitch_layout::layout_spiral;
//! use stitch_mesh::{generate_wireframe, WireframeOptions};
//! use stitch_parser::parse_pattern;
//!
//! let config = ChartConfig::default();
//! let positions = layout_spiral(&parse_pattern("mr\n6x\n6inc").unwrap(), &config);
//! let wireframe = generate_wireframe(&positions, &WireframeOptions::for_config(&config)).unwrap();
//! assert_eq!(wireframe.vertex_buffer().len(), wireframe.segment_count() * 6);
//! ```

pub mod error;
pub mod generate;
pub mod glyph;
pub mod options;
pub mod wireframe;

pub use error::MeshError;
pub use generate::generate_wireframe;
pub use options::WireframeOptions;
pub use wireframe::Wireframe;
