//! # Stitch Layout
//!
//! Turns parsed stitches into chart coordinates and row-to-row topology.
//!
//! ## Layouts
//!
//! - [`spiral`]: rounds on concentric circles, climbing in `z`
//! - [`oval`]: stadium-shaped rounds around a foundation chain
//! - [`topology`]: parent/child curves between adjacent rows
//!
//! ## Example
//!
//! ```rust
//! use config::constants::ChartConfig;
//! use stitch_layout::{connect_rows, layout_spiral};
//! use stitch_parser::parse_pattern;
//!
//! let stitches = parse_pattern("6x\n6inc").unwrap();
//! let positions = layout_spiral(&stitches, &ChartConfig::default());
//! assert_eq!(connect_rows(&positions).len(), 6);
//! ```

pub mod oval;
pub mod spiral;
pub mod topology;

pub use oval::{layout_oval_foundation, layout_oval_pattern, next_oval_row, OvalSide, ParsedOvalStitch};
pub use spiral::{layout_spiral, StitchPosition};
pub use topology::{connect, connect_rows, parent_indices, BezierConnection, ConnectionKind};

use std::collections::BTreeMap;

/// Group items by row in ascending row order, keeping input order in a row.
pub(crate) fn group_by_row<T>(items: &[T], row_of: impl Fn(&T) -> u32) -> BTreeMap<u32, Vec<&T>> {
    let mut rows: BTreeMap<u32, Vec<&T>> = BTreeMap::new();
    for item in items {
        rows.entry(row_of(item)).or_default().push(item);
    }
    rows
}
