//! # Configuration Constants
//!
//! Centralized values shared across the stitch chart pipeline. All lengths are
//! measured in chain heights (a chain stitch is 1.0 tall).
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Spiral Layout**: Defaults for circular charts
//! - **Oval Layout**: Stadium foundation geometry
//! - **Wireframe**: Proportions of the procedural stitch symbols
//! - **Limits**: Safety bounds for pathological input

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// SPIRAL LAYOUT CONSTANTS
// =============================================================================

/// Radius of the first round.
pub const DEFAULT_BASE_RADIUS: f64 = 1.0;

/// Radial distance added per round.
pub const DEFAULT_ROW_SPACING: f64 = 1.0;

/// Height gained by every emitted stitch along the spiral.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_Z_INCREMENT;
///
/// // Six stitches climb six increments.
/// let top = 6.0 * DEFAULT_Z_INCREMENT;
/// assert!(top > 0.0);
/// ```
pub const DEFAULT_Z_INCREMENT: f64 = 0.02;

/// Multiplier applied to stitch heights when drawing symbols.
pub const DEFAULT_HEIGHT_SCALE: f64 = 0.8;

// =============================================================================
// OVAL LAYOUT CONSTANTS
// =============================================================================

/// Smallest foundation chain that produces an oval layout.
pub const MIN_OVAL_CHAIN: u32 = 3;

/// Distance between neighbouring stitches on a straight oval edge.
pub const OVAL_STITCH_SPACING: f64 = 1.0;

/// Half the distance between the top and bottom edges of the foundation.
/// Also the radius of both turn caps.
pub const OVAL_HALF_HEIGHT: f64 = 0.5;

/// Outward offset of each oval row from the previous row's bounding ellipse.
pub const OVAL_ROW_SPACING: f64 = 1.0;

// =============================================================================
// WIREFRAME CONSTANTS
// =============================================================================

/// Length of each head fork arm relative to the stem length.
pub const HEAD_FORK_RATIO: f64 = 0.2;

/// Half width of a wrap cross-bar.
pub const CROSSBAR_HALF_WIDTH: f64 = 0.15;

/// Total angle (radians) covered by the branches of an increase.
pub const FAN_SPREAD: f64 = 0.9;

/// Tangential spacing between the base points of a decrease.
pub const DECREASE_BASE_SPACING: f64 = 0.3;

/// Radius of the closed loop drawn for chains. Slip stitches use half.
pub const LOOP_RADIUS: f64 = 0.2;

/// Number of segments used to close a chain or slip loop.
///
/// # Example
///
/// ```rust
/// use config::constants::LOOP_SEGMENTS;
/// assert!(LOOP_SEGMENTS >= 3);
/// ```
pub const LOOP_SEGMENTS: u32 = 8;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of stitches a single pattern may materialize.
///
/// Repeat groups multiply, so `(x)*99999999` would otherwise allocate without
/// bound. Exceeding this aborts the whole parse.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_STITCHES;
/// assert!(MAX_STITCHES >= 10_000);
/// ```
pub const MAX_STITCHES: usize = 100_000;

/// Maximum number of line segments in one wireframe buffer.
pub const MAX_SEGMENTS: usize = 4_000_000;

/// Deepest group nesting the parser follows.
///
/// Openers past this depth are skipped like any other stray token.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_GROUP_DEPTH;
///
/// let depth = 3; // [(2x, v)*2, a]*3 nests twice
/// assert!(depth < MAX_GROUP_DEPTH);
/// ```
pub const MAX_GROUP_DEPTH: usize = 64;

/// Stack size in bytes for each new segment allocated by the `stacker` crate
/// while parsing nested groups.
pub const STACKER_STACK_SIZE_BYTES: usize = 1024 * 1024;

/// Remaining stack below which the parser grows a new segment.
pub const STACKER_RED_ZONE_BYTES: usize = 64 * 1024;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// =============================================================================
// CHART CONFIG
// =============================================================================

/// Parameters of the circular/spiral layout.
///
/// # Examples
/// ```
/// use config::constants::ChartConfig;
/// let config = ChartConfig::default();
/// assert!(config.z_increment > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartConfig {
    /// Radius of round 1.
    pub base_radius: f64,
    /// Radius added per round.
    pub row_spacing: f64,
    /// Height added per emitted stitch.
    pub z_increment: f64,
    /// Multiplier for stitch symbol heights.
    pub height_scale: f64,
}

impl ChartConfig {
    /// Builds a configuration, rejecting non-finite or non-positive values.
    ///
    /// # Examples
    /// ```
    /// use config::constants::ChartConfig;
    /// let cfg = ChartConfig::new(2.0, 1.5, 0.1, 1.0).expect("valid config");
    /// assert_eq!(cfg.base_radius, 2.0);
    /// ```
    pub fn new(
        base_radius: f64,
        row_spacing: f64,
        z_increment: f64,
        height_scale: f64,
    ) -> Result<Self, ConfigError> {
        check_positive("base_radius", base_radius)?;
        check_positive("row_spacing", row_spacing)?;
        check_positive("z_increment", z_increment)?;
        check_positive("height_scale", height_scale)?;
        Ok(Self {
            base_radius,
            row_spacing,
            z_increment,
            height_scale,
        })
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            base_radius: DEFAULT_BASE_RADIUS,
            row_spacing: DEFAULT_ROW_SPACING,
            z_increment: DEFAULT_Z_INCREMENT,
            height_scale: DEFAULT_HEIGHT_SCALE,
        }
    }
}

fn check_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when a length is zero, negative, NaN or infinite.
    NonPositive {
        /// Name of the offending field.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositive { field, value } => {
                write!(f, "{field} must be positive and finite: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
