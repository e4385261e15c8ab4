//! # Prism Primitive
//!
//! Extrudes a base outline and closes it with the face table of its
//! [`PrismKind`].

use super::PrismKind;
use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::ops::{extrude, finalize};
use crate::parse::parse_vertices;
use config::constants::PrismConfig;
use glam::DVec3;

/// Builds the raw prism mesh for `kind` from its base outline.
///
/// The result has `2N` vertices and the kind's face table, with no derived
/// attributes; pass it through [`finalize`] before rendering.
///
/// # Errors
///
/// - [`MeshError::UnsupportedVertexCount`] if `base` does not have exactly
///   `kind.base_vertex_count()` points
/// - [`MeshError::InvalidExtrusionLength`] if `length` is not positive
///
/// # Example
///
/// ```rust
/// use prism_mesh::primitives::{build_prism, PrismKind};
/// use glam::DVec3;
///
/// let base = [DVec3::new(0.0, 10.0, 0.0), DVec3::new(-10.0, -10.0, 0.0), DVec3::new(10.0, -10.0, 0.0)];
/// let mesh = build_prism(PrismKind::Triangular, &base, 2.0).unwrap();
/// assert_eq!(mesh.vertex_count(), 6);
/// assert_eq!(mesh.triangle_count(), 8);
/// ```
pub fn build_prism(kind: PrismKind, base: &[DVec3], length: f64) -> Result<Mesh, MeshError> {
    if base.len() != kind.base_vertex_count() {
        return Err(MeshError::unsupported_vertex_count(kind, base.len()));
    }

    let vertices = extrude(base, length)?;
    let faces = kind.face_table();
    debug_assert!(
        faces.iter().flatten().all(|&i| (i as usize) < vertices.len()),
        "{kind} face table indexes past {} vertices",
        vertices.len()
    );

    tracing::debug!(%kind, length, "built prism");
    Ok(Mesh::from_parts(vertices, faces.to_vec()))
}

/// Builds a triangular prism (3 base points, 8 faces).
pub fn build_triangular_prism(base: &[DVec3], length: f64) -> Result<Mesh, MeshError> {
    build_prism(PrismKind::Triangular, base, length)
}

/// Builds a rectangular prism (4 base points, 12 faces).
pub fn build_rectangular_prism(base: &[DVec3], length: f64) -> Result<Mesh, MeshError> {
    build_prism(PrismKind::Rectangular, base, length)
}

/// Runs the whole pipeline: parse `vertices`, build, finalize.
///
/// # Example
///
/// ```rust
/// use prism_mesh::primitives::{build_from_strings, PrismKind};
/// use config::constants::PrismConfig;
///
/// let mesh = build_from_strings(
///     PrismKind::Rectangular,
///     PrismKind::Rectangular.default_vertices(),
///     &PrismConfig::default(),
/// )
/// .unwrap();
/// assert_eq!(mesh.triangle_count(), 12);
/// assert!(mesh.face_normals().is_some());
/// ```
pub fn build_from_strings<S: AsRef<str>>(
    kind: PrismKind,
    vertices: &[S],
    config: &PrismConfig,
) -> Result<Mesh, MeshError> {
    let base = parse_vertices(vertices)?;
    let mesh = build_prism(kind, &base, config.extrusion_length)?;
    Ok(finalize(mesh, config.merge_tolerance))
}
