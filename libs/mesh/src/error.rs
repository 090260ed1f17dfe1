//! # Mesh Errors
//!
//! Error types for wireframe generation.

use thiserror::Error;

/// Errors that can occur during wireframe generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Height scale is zero, negative or not finite
    #[error("Invalid height scale: {value}")]
    InvalidHeightScale { value: f64 },

    /// A loop polygon needs at least a triangle
    #[error("Too few loop segments: {segments} (min: {min})")]
    TooFewLoopSegments { segments: u32, min: u32 },

    /// Too many segments
    #[error("Too many segments: {count} (max: {max})")]
    TooManySegments { count: usize, max: usize },
}
