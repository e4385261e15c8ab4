//! # Linear Extrusion
//!
//! Pushes a copy of the base outline along the -Z axis. The copy becomes the
//! back cap of the prism; the input points stay the front cap.

use crate::error::MeshError;
use glam::DVec3;

/// Extrudes `base` by `length` along -Z.
///
/// Returns a new buffer of `2 * base.len()` points: the untouched input
/// followed by copies with the same x and y and `z - length`. The caller's
/// slice is only borrowed.
///
/// # Example
///
/// ```rust
/// use prism_mesh::ops::extrude;
/// use glam::DVec3;
///
/// let points = extrude(&[DVec3::new(1.0, 2.0, 3.0)], 2.0).unwrap();
/// assert_eq!(points, vec![DVec3::new(1.0, 2.0, 3.0), DVec3::new(1.0, 2.0, 1.0)]);
/// ```
pub fn extrude(base: &[DVec3], length: f64) -> Result<Vec<DVec3>, MeshError> {
    if !(length.is_finite() && length > 0.0) {
        return Err(MeshError::InvalidExtrusionLength { length });
    }

    let offset = DVec3::new(0.0, 0.0, -length);
    let mut points = Vec::with_capacity(base.len() * 2);
    points.extend_from_slice(base);
    points.extend(base.iter().map(|p| *p + offset));
    Ok(points)
}
