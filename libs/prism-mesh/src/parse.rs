//! # Vertex Parsing
//!
//! Converts `"x y z"` coordinate strings from the host schema into points.

use crate::error::MeshError;
use glam::DVec3;

/// Parses one `"x y z"` string.
///
/// `index` is the position of `input` in its list and is only used for error
/// reporting. Tokens are separated by any run of whitespace.
///
/// # Example
///
/// ```rust
/// use prism_mesh::parse::parse_vertex;
/// use glam::DVec3;
///
/// assert_eq!(parse_vertex(0, "1 2 3").unwrap(), DVec3::new(1.0, 2.0, 3.0));
/// assert!(parse_vertex(0, "1 2").is_err());
/// ```
pub fn parse_vertex(index: usize, input: &str) -> Result<DVec3, MeshError> {
    let mut coords = [0.0; 3];
    let mut tokens = input.split_whitespace();

    for (axis, slot) in ["x", "y", "z"].iter().zip(coords.iter_mut()) {
        let token = tokens.next().ok_or_else(|| {
            MeshError::invalid_vertex(index, input, format!("missing {axis} coordinate"))
        })?;
        let value: f64 = token.parse().map_err(|_| {
            MeshError::invalid_vertex(index, input, format!("{axis} coordinate {token:?} is not a number"))
        })?;
        if !value.is_finite() {
            return Err(MeshError::invalid_vertex(
                index,
                input,
                format!("{axis} coordinate {token:?} is not finite"),
            ));
        }
        *slot = value;
    }

    if let Some(extra) = tokens.next() {
        return Err(MeshError::invalid_vertex(
            index,
            input,
            format!("unexpected extra token {extra:?}"),
        ));
    }

    Ok(DVec3::from_array(coords))
}

/// Parses a list of coordinate strings, preserving order.
///
/// Fails on the first malformed entry; no partial buffer is returned.
/// Duplicate or collinear points are accepted as-is.
///
/// # Example
///
/// ```rust
/// use prism_mesh::parse::parse_vertices;
///
/// let points = parse_vertices(&["0 10 0", "-10 -10 0", "10 -10 0"]).unwrap();
/// assert_eq!(points.len(), 3);
/// ```
pub fn parse_vertices<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<DVec3>, MeshError> {
    let points = inputs
        .iter()
        .enumerate()
        .map(|(index, input)| parse_vertex(index, input.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::trace!(count = points.len(), "parsed vertices");
    Ok(points)
}
