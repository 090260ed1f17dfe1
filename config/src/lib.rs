//! # Config Crate
//!
//! Centralized configuration constants for the stitch chart pipeline.
//! Layout defaults, oval geometry, wireframe proportions and safety limits
//! are defined here so the parser, layout and mesh crates agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{ChartConfig, DEFAULT_BASE_RADIUS, EPSILON};
//!
//! let chart = ChartConfig::default();
//! assert!((chart.base_radius - DEFAULT_BASE_RADIUS).abs() < EPSILON);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values, no environment lookups
//! - **Chain Baseline**: Every length is expressed in chain heights

pub mod constants;
