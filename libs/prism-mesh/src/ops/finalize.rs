//! # Mesh Finalization
//!
//! Populates the attributes a renderer needs once the face table is in
//! place: bounding box, merged coincident vertices, face and vertex normals.

use crate::mesh::Mesh;

/// Finalizes a freshly built mesh.
///
/// Steps run in this order:
/// 1. bounding box
/// 2. merge vertices closer than `tolerance`
/// 3. face normals
/// 4. vertex normals
///
/// # Example
///
/// ```rust
/// use prism_mesh::{ops::finalize, Mesh};
/// use glam::DVec3;
///
/// let mesh = Mesh::from_parts(vec![DVec3::ZERO, DVec3::X, DVec3::Y], vec![[0, 1, 2]]);
/// let mesh = finalize(mesh, 1e-8);
/// assert_eq!(mesh.face_normals().unwrap()[0], DVec3::Z);
/// ```
pub fn finalize(mut mesh: Mesh, tolerance: f64) -> Mesh {
    let bounds = mesh.compute_bounding_box();
    let merged = mesh.merge_vertices(tolerance);
    mesh.compute_face_normals();
    mesh.compute_normals();

    debug_assert!(mesh.validate(), "finalized mesh references missing vertices");
    tracing::debug!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        merged,
        ?bounds,
        "finalized mesh"
    );
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::DVec3;

    #[test]
    fn test_finalize_populates_attributes() {
        let mesh = Mesh::from_parts(
            vec![DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z],
            vec![[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]],
        );
        let mesh = finalize(mesh, 1e-8);

        let bounds = mesh.bounding_box().unwrap();
        assert_eq!(bounds.min, DVec3::ZERO);
        assert_eq!(bounds.max, DVec3::ONE);
        assert_eq!(mesh.face_normals().unwrap().len(), 4);
        assert_eq!(mesh.normals().unwrap().len(), 4);
        for n in mesh.face_normals().unwrap() {
            assert_relative_eq!(n.length(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_finalize_merges_coincident_points() {
        // Two triangles sharing an edge, each with its own copy of it.
        let mesh = Mesh::from_parts(
            vec![DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::X, DVec3::Y, DVec3::ONE],
            vec![[0, 1, 2], [3, 5, 4]],
        );
        let mesh = finalize(mesh, 1e-8);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangles(), &[[0, 1, 2], [1, 3, 2]]);
        assert_eq!(mesh.face_normals().unwrap().len(), 2);
    }

    #[test]
    fn test_finalize_empty_mesh() {
        let mesh = finalize(Mesh::new(), 1e-8);
        assert!(mesh.is_empty());
        assert_eq!(mesh.bounding_box(), None);
        assert_eq!(mesh.face_normals(), Some(&[][..]));
    }
}
