//! # Mesh Data Structure
//!
//! Core mesh representation with vertices, triangles and the attributes
//! derived at finalization (bounding box, face normals, vertex normals).

use std::collections::HashMap;

use config::constants::approx_zero;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: DVec3,
    pub max: DVec3,
}

impl BoundingBox {
    /// Computes the box enclosing `points`, or `None` when there are none.
    pub fn from_points(points: &[DVec3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)));
        Some(Self { min, max })
    }

    /// Extent along each axis.
    #[inline]
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    #[inline]
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Returns true if `point` lies inside or on the box.
    pub fn contains(&self, point: DVec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

/// A triangle mesh with vertices and indices.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the WASM boundary for GPU rendering.
///
/// # Example
///
/// ```rust
/// use prism_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
    /// Cached bounding box, set by `compute_bounding_box`
    bounds: Option<BoundingBox>,
    /// One unit normal per triangle
    face_normals: Option<Vec<DVec3>>,
    /// One unit normal per vertex
    normals: Option<Vec<DVec3>>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh from an owned vertex buffer and triangle list.
    pub fn from_parts(vertices: Vec<DVec3>, triangles: Vec<[u32; 3]>) -> Self {
        Self {
            vertices,
            triangles,
            ..Self::default()
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        self.invalidate();
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
        self.invalidate();
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Returns the per-face normals, if computed.
    pub fn face_normals(&self) -> Option<&[DVec3]> {
        self.face_normals.as_deref()
    }

    /// Returns the vertex normals, if computed.
    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    // Derived attributes go stale whenever the buffers change.
    fn invalidate(&mut self) {
        self.bounds = None;
        self.face_normals = None;
        self.normals = None;
    }

    /// Returns the axis-aligned bounding box, `None` for an empty mesh.
    ///
    /// Uses the cached box from [`Mesh::compute_bounding_box`] when present.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.bounds.or_else(|| BoundingBox::from_points(&self.vertices))
    }

    /// Computes and caches the bounding box.
    pub fn compute_bounding_box(&mut self) -> Option<BoundingBox> {
        self.bounds = BoundingBox::from_points(&self.vertices);
        self.bounds
    }

    /// Computes and sets one unit normal per triangle from its winding.
    ///
    /// Triangles whose doubled area is within
    /// [`EPSILON`](config::constants::EPSILON) of zero get [`DVec3::ZERO`].
    pub fn compute_face_normals(&mut self) {
        let normals: Vec<DVec3> = self
            .triangles
            .iter()
            .map(|tri| {
                let cross = self.triangle_cross(tri);
                if approx_zero(cross.length()) {
                    DVec3::ZERO
                } else {
                    cross.normalize()
                }
            })
            .collect();
        self.face_normals = Some(normals);
    }

    /// Computes and sets area-weighted normals for each vertex.
    pub fn compute_normals(&mut self) {
        let mut normals = vec![DVec3::ZERO; self.vertices.len()];

        for tri in &self.triangles {
            let normal = self.triangle_cross(tri);
            normals[tri[0] as usize] += normal;
            normals[tri[1] as usize] += normal;
            normals[tri[2] as usize] += normal;
        }

        // Normalize
        for normal in &mut normals {
            *normal = normal.normalize_or_zero();
        }

        self.normals = Some(normals);
    }

    /// Merges vertices that fall into the same `tolerance`-sized grid cell.
    ///
    /// The first vertex of each cell survives, triangles are re-indexed and
    /// triangles that collapse onto a repeated index are dropped. A tolerance
    /// of zero merges only exactly equal positions. Returns the number of
    /// vertices removed.
    ///
    /// Cells are cubes of side `tolerance`, so two points up to
    /// `sqrt(3) * tolerance` apart can merge, while two points closer than
    /// `tolerance` stay apart when they straddle a cell boundary.
    pub fn merge_vertices(&mut self, tolerance: f64) -> usize {
        let mut cells: HashMap<[u64; 3], u32> = HashMap::with_capacity(self.vertices.len());
        let mut remap = Vec::with_capacity(self.vertices.len());
        let mut unique = Vec::with_capacity(self.vertices.len());

        for v in &self.vertices {
            let key = cell_key(*v, tolerance);
            let index = *cells.entry(key).or_insert_with(|| {
                unique.push(*v);
                (unique.len() - 1) as u32
            });
            remap.push(index);
        }

        let removed = self.vertices.len() - unique.len();
        if removed == 0 {
            return 0;
        }

        let bounds = self.bounds;
        self.vertices = unique;
        self.triangles = self
            .triangles
            .iter()
            .map(|&tri| tri.map(|i| remap[i as usize]))
            .filter(|[a, b, c]| a != b && b != c && a != c)
            .collect();
        self.invalidate();
        // Survivors are a subset of the old vertices, so the box still holds.
        self.bounds = bounds;
        removed
    }

    fn triangle_cross(&self, tri: &[u32; 3]) -> DVec3 {
        let v0 = self.vertices[tri[0] as usize];
        let v1 = self.vertices[tri[1] as usize];
        let v2 = self.vertices[tri[2] as usize];
        (v1 - v0).cross(v2 - v0)
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All triangle indices are valid
    /// - No triangle repeats an index
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        self.triangles.iter().all(|tri| {
            tri.iter().all(|&i| i < vertex_count)
                && tri[0] != tri[1]
                && tri[1] != tri[2]
                && tri[0] != tri[2]
        })
    }

    /// Signed volume enclosed by the mesh, summed over tetrahedra spanned by
    /// each triangle and the origin.
    ///
    /// Positive when the triangles wind counter-clockwise seen from outside.
    pub fn signed_volume(&self) -> f64 {
        self.triangles
            .iter()
            .map(|tri| {
                let v0 = self.vertices[tri[0] as usize];
                let v1 = self.vertices[tri[1] as usize];
                let v2 = self.vertices[tri[2] as usize];
                v0.dot(v1.cross(v2)) / 6.0
            })
            .sum()
    }

    /// Returns true if every undirected edge is shared by exactly two triangles.
    pub fn is_closed(&self) -> bool {
        let mut edges: HashMap<(u32, u32), usize> = HashMap::new();
        for (a, b) in self.directed_edges() {
            *edges.entry((a.min(b), a.max(b))).or_default() += 1;
        }
        !edges.is_empty() && edges.values().all(|&count| count == 2)
    }

    /// Returns true if every directed edge occurs once and is matched by its
    /// reverse, i.e. neighbouring triangles agree on winding.
    pub fn is_consistently_oriented(&self) -> bool {
        let mut edges: HashMap<(u32, u32), usize> = HashMap::new();
        for edge in self.directed_edges() {
            *edges.entry(edge).or_default() += 1;
        }
        !edges.is_empty()
            && edges
                .iter()
                .all(|(&(a, b), &count)| count == 1 && edges.get(&(b, a)) == Some(&1))
    }

    /// Indices of vertices not referenced by any triangle.
    pub fn orphan_vertices(&self) -> Vec<u32> {
        let mut used = vec![false; self.vertices.len()];
        for &i in self.triangles.iter().flatten() {
            if let Some(slot) = used.get_mut(i as usize) {
                *slot = true;
            }
        }
        used.into_iter()
            .enumerate()
            .filter(|&(_, used)| !used)
            .map(|(i, _)| i as u32)
            .collect()
    }

    fn directed_edges(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.triangles
            .iter()
            .flat_map(|&[a, b, c]| [(a, b), (b, c), (c, a)])
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        flatten_f32(&self.vertices)
    }

    /// Exports triangle indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Exports vertex normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Option<Vec<f32>> {
        self.normals.as_deref().map(flatten_f32)
    }

    /// Exports face normals as f32 array, one triple per triangle.
    pub fn face_normals_f32(&self) -> Option<Vec<f32>> {
        self.face_normals.as_deref().map(flatten_f32)
    }
}

fn flatten_f32(points: &[DVec3]) -> Vec<f32> {
    let mut result = Vec::with_capacity(points.len() * 3);
    for p in points {
        result.push(p.x as f32);
        result.push(p.y as f32);
        result.push(p.z as f32);
    }
    result
}

// Keys on the bits of the rounded cell so no coordinate range saturates.
// Cells that overflow to infinity fall back to the exact position.
fn cell_key(v: DVec3, tolerance: f64) -> [u64; 3] {
    let scaled = (v / tolerance).round();
    let cell = if tolerance > 0.0 && scaled.is_finite() { scaled } else { v };
    // `+ 0.0` folds -0.0 into 0.0 so both hash alike.
    cell.to_array().map(|c| (c + 0.0).to_bits())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_tetrahedron() -> Mesh {
        Mesh::from_parts(
            vec![DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z],
            vec![[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]],
        )
    }

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
        assert_eq!(mesh.bounding_box(), None);
    }

    #[test]
    fn test_mesh_add_vertex() {
        let mut mesh = Mesh::new();
        let idx = mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(idx, 0);
        assert_eq!(mesh.vertex_count(), 1);
        assert_eq!(mesh.vertex(0), DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_mesh_add_triangle() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        mesh.add_triangle(0, 1, 2);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.triangle(0), [0, 1, 2]);
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(-1.0, -2.0, -3.0));
        mesh.add_vertex(DVec3::new(4.0, 5.0, 6.0));
        let bounds = mesh.bounding_box().unwrap();
        assert_eq!(bounds.min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(bounds.max, DVec3::new(4.0, 5.0, 6.0));
        assert_eq!(bounds.size(), DVec3::new(5.0, 7.0, 9.0));
        assert_eq!(bounds.center(), DVec3::new(1.5, 1.5, 1.5));
        assert!(bounds.contains(DVec3::ZERO));
        assert!(!bounds.contains(DVec3::splat(10.0)));
    }

    #[test]
    fn test_cached_bounding_box_resets_on_edit() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        assert!(mesh.compute_bounding_box().is_some());
        mesh.add_vertex(DVec3::splat(2.0));
        assert_eq!(mesh.bounding_box().unwrap().max, DVec3::splat(2.0));
    }

    #[test]
    fn test_mesh_validate_valid() {
        assert!(unit_tetrahedron().validate());
    }

    #[test]
    fn test_mesh_validate_invalid_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_triangle(0, 1, 2); // Invalid indices
        assert!(!mesh.validate());
    }

    #[test]
    fn test_mesh_validate_repeated_index() {
        let mesh = Mesh::from_parts(vec![DVec3::ZERO, DVec3::X], vec![[0, 1, 1]]);
        assert!(!mesh.validate());
    }

    #[test]
    fn test_face_normals_follow_winding() {
        let mut mesh = unit_tetrahedron();
        mesh.compute_face_normals();
        let normals = mesh.face_normals().unwrap();
        assert_eq!(normals.len(), 4);
        assert_eq!(normals[0], DVec3::NEG_Z);
        assert_eq!(normals[1], DVec3::NEG_Y);
        assert_eq!(normals[2], DVec3::NEG_X);
        assert_relative_eq!(normals[3].length(), 1.0, epsilon = 1e-12);
        assert!(normals[3].x > 0.0 && normals[3].y > 0.0 && normals[3].z > 0.0);
    }

    #[test]
    fn test_vertex_normals_are_unit() {
        let mut mesh = unit_tetrahedron();
        mesh.compute_normals();
        for n in mesh.normals().unwrap() {
            assert_relative_eq!(n.length(), 1.0, epsilon = 1e-12);
        }
        assert_eq!(mesh.normals_f32().unwrap().len(), 12);
    }

    #[test]
    fn test_signed_volume_of_tetrahedron() {
        assert_relative_eq!(unit_tetrahedron().signed_volume(), 1.0 / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_closed_and_oriented() {
        let mesh = unit_tetrahedron();
        assert!(mesh.is_closed());
        assert!(mesh.is_consistently_oriented());
        assert!(mesh.orphan_vertices().is_empty());
    }

    #[test]
    fn test_flipped_face_breaks_orientation_only() {
        let mut triangles = unit_tetrahedron().triangles().to_vec();
        triangles[3] = [1, 3, 2];
        let mesh = Mesh::from_parts(unit_tetrahedron().vertices().to_vec(), triangles);
        assert!(mesh.is_closed());
        assert!(!mesh.is_consistently_oriented());
    }

    #[test]
    fn test_open_mesh_is_not_closed() {
        let mesh = Mesh::from_parts(vec![DVec3::ZERO, DVec3::X, DVec3::Y], vec![[0, 1, 2]]);
        assert!(!mesh.is_closed());
        assert!(!Mesh::new().is_closed());
    }

    #[test]
    fn test_orphan_vertices() {
        let mesh = Mesh::from_parts(
            vec![DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z],
            vec![[0, 1, 2]],
        );
        assert_eq!(mesh.orphan_vertices(), vec![3]);
    }

    #[test]
    fn test_merge_vertices_collapses_duplicates() {
        let mut mesh = Mesh::from_parts(
            vec![DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::new(1.0, 0.0, 1e-12)],
            vec![[0, 1, 2], [0, 3, 2], [1, 3, 2]],
        );
        let removed = mesh.merge_vertices(1e-8);
        assert_eq!(removed, 1);
        assert_eq!(mesh.vertex_count(), 3);
        // The last triangle referenced both copies of the same point.
        assert_eq!(mesh.triangles(), &[[0, 1, 2], [0, 1, 2]]);
    }

    #[test]
    fn test_merge_vertices_exact_only_with_zero_tolerance() {
        let mut mesh = Mesh::from_parts(
            vec![DVec3::ZERO, DVec3::new(-0.0, 0.0, 0.0), DVec3::new(0.0, 0.0, 1e-12)],
            vec![],
        );
        assert_eq!(mesh.merge_vertices(0.0), 1);
        assert_eq!(mesh.vertex_count(), 2);
    }

    #[test]
    fn test_merge_vertices_keeps_large_coordinates_apart() {
        // Cell indices here exceed i64::MAX at the default tolerance.
        let base = [
            DVec3::new(1e11, 0.0, 0.0),
            DVec3::new(2e11, 0.0, 0.0),
            DVec3::new(1e11, 1.0, 0.0),
            DVec3::new(2e11, 1.0, 0.0),
        ];
        let mut vertices = base.to_vec();
        vertices.extend(base.iter().map(|p| *p - DVec3::new(0.0, 0.0, 2.0)));
        let mut mesh = Mesh::from_parts(vertices, vec![[0, 3, 2], [0, 1, 3], [4, 5, 6]]);

        assert_eq!(mesh.merge_vertices(1e-8), 0);
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.triangle_count(), 3);
    }

    #[test]
    fn test_merge_vertices_still_joins_large_duplicates() {
        let mut mesh = Mesh::from_parts(
            vec![DVec3::splat(1e11), DVec3::splat(1e11), DVec3::splat(-1e11)],
            vec![],
        );
        assert_eq!(mesh.merge_vertices(1e-8), 1);
        assert_eq!(mesh.vertices(), &[DVec3::splat(1e11), DVec3::splat(-1e11)]);
    }

    #[test]
    fn test_merge_vertices_overflowing_cells_use_exact_positions() {
        let mut mesh = Mesh::from_parts(
            vec![DVec3::splat(f64::MAX), DVec3::splat(f64::MAX / 2.0)],
            vec![],
        );
        assert_eq!(mesh.merge_vertices(1e-8), 0);
    }

    #[test]
    fn test_face_normal_of_sliver_is_zero() {
        // Doubled area 1e-12 is below EPSILON.
        let mut mesh = Mesh::from_parts(
            vec![DVec3::ZERO, DVec3::X, DVec3::new(0.0, 1e-12, 0.0)],
            vec![[0, 1, 2]],
        );
        mesh.compute_face_normals();
        assert_eq!(mesh.face_normals().unwrap(), &[DVec3::ZERO]);
    }

    #[test]
    fn test_merge_vertices_noop_keeps_mesh() {
        let mut mesh = unit_tetrahedron();
        mesh.compute_face_normals();
        assert_eq!(mesh.merge_vertices(1e-8), 0);
        assert!(mesh.face_normals().is_some());
    }

    #[test]
    fn test_export_buffers() {
        let mesh = unit_tetrahedron();
        assert_eq!(mesh.vertices_f32().len(), 12);
        assert_eq!(&mesh.vertices_f32()[3..6], &[1.0f32, 0.0, 0.0]);
        assert_eq!(mesh.indices_u32()[..3], [0, 2, 1]);
        assert_eq!(mesh.normals_f32(), None);
        assert_eq!(mesh.face_normals_f32(), None);
    }
}
