//! # Configuration Constants
//!
//! Centralized values shared by the prism geometry pipeline.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Extrusion**: Default extrusion distance along the z axis
//! - **Schema Defaults**: Outlines used when the host supplies no vertices

use thiserror::Error;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// A triangle whose doubled area falls below this has no face normal.
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

/// Epsilon for vertex deduplication.
///
/// Side of the grid cells used to collapse vertices when a mesh is
/// finalized. Vertices rounding to the same cell merge.
///
/// # Example
///
/// ```rust
/// use config::constants::VERTEX_MERGE_EPSILON;
///
/// fn same_cell(v1: [f64; 3], v2: [f64; 3]) -> bool {
///     (0..3).all(|i| {
///         (v1[i] / VERTEX_MERGE_EPSILON).round() == (v2[i] / VERTEX_MERGE_EPSILON).round()
///     })
/// }
///
/// assert!(same_cell([0.0; 3], [0.0, 0.0, 1e-9]));
/// ```
pub const VERTEX_MERGE_EPSILON: f64 = 1e-8;

// =============================================================================
// EXTRUSION CONSTANTS
// =============================================================================

/// Distance the base outline is pushed along `-z` to form the far cap.
///
/// # Example
///
/// ```rust
/// use config::constants::EXTRUSION_LENGTH;
///
/// let front_z = 0.0;
/// let back_z = front_z - EXTRUSION_LENGTH;
/// assert_eq!(back_z, -2.0);
/// ```
pub const EXTRUSION_LENGTH: f64 = 2.0;

// =============================================================================
// SCHEMA DEFAULTS
// =============================================================================

/// Default outline for `t_prism`: a triangle centered on the origin.
///
/// # Example
///
/// ```rust
/// use config::constants::TRIANGULAR_PRISM_DEFAULT_VERTICES;
/// assert_eq!(TRIANGULAR_PRISM_DEFAULT_VERTICES.len(), 3);
/// ```
pub const TRIANGULAR_PRISM_DEFAULT_VERTICES: [&str; 3] = ["0 10 0", "-10 -10 0", "10 -10 0"];

/// Default outline for `r_prism`: a square of side 2 at `z = 1`.
///
/// The corners are listed row by row (bottom-left, bottom-right, top-left,
/// top-right), which is the order the rectangular face table expects.
///
/// # Example
///
/// ```rust
/// use config::constants::RECTANGULAR_PRISM_DEFAULT_VERTICES;
/// assert_eq!(RECTANGULAR_PRISM_DEFAULT_VERTICES.len(), 4);
/// ```
pub const RECTANGULAR_PRISM_DEFAULT_VERTICES: [&str; 4] =
    ["-1 -1 1", "1 -1 1", "-1 1 1", "1 1 1"];

// =============================================================================
// RUNTIME CONFIGURATION
// =============================================================================

/// Validated settings for a single prism build.
///
/// # Examples
/// ```
/// use config::constants::PrismConfig;
/// let config = PrismConfig::new(5.0, 1e-6).expect("valid config");
/// assert_eq!(config.extrusion_length, 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrismConfig {
    /// Distance between the front and back caps.
    pub extrusion_length: f64,
    /// Distance below which two vertices are merged during finalization.
    pub merge_tolerance: f64,
}

impl PrismConfig {
    /// Builds a configuration, rejecting non-positive or non-finite values.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{ConfigError, PrismConfig};
    /// assert_eq!(
    ///     PrismConfig::new(0.0, 1e-8).unwrap_err(),
    ///     ConfigError::InvalidExtrusionLength(0.0)
    /// );
    /// ```
    pub fn new(extrusion_length: f64, merge_tolerance: f64) -> Result<Self, ConfigError> {
        if !(extrusion_length.is_finite() && extrusion_length > 0.0) {
            return Err(ConfigError::InvalidExtrusionLength(extrusion_length));
        }
        if !(merge_tolerance.is_finite() && merge_tolerance >= 0.0) {
            return Err(ConfigError::InvalidMergeTolerance(merge_tolerance));
        }
        Ok(Self {
            extrusion_length,
            merge_tolerance,
        })
    }

    /// Returns a copy with a different extrusion length.
    ///
    /// # Examples
    /// ```
    /// use config::constants::PrismConfig;
    /// let config = PrismConfig::default().with_extrusion_length(4.0).unwrap();
    /// assert_eq!(config.extrusion_length, 4.0);
    /// ```
    pub fn with_extrusion_length(self, extrusion_length: f64) -> Result<Self, ConfigError> {
        Self::new(extrusion_length, self.merge_tolerance)
    }
}

impl Default for PrismConfig {
    fn default() -> Self {
        Self {
            extrusion_length: EXTRUSION_LENGTH,
            merge_tolerance: VERTEX_MERGE_EPSILON,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// Raised when the extrusion length is zero, negative or not finite.
    #[error("extrusion length must be positive and finite: {0}")]
    InvalidExtrusionLength(f64),
    /// Raised when the merge tolerance is negative or not finite.
    #[error("merge tolerance must be non-negative and finite: {0}")]
    InvalidMergeTolerance(f64),
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// Used to treat zero-area triangles as having no face normal.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
