//! # Mesh Handle
//!
//! WASM-friendly wrapper for mesh data that can be transferred to JavaScript.

use prism_mesh::Mesh;
use wasm_bindgen::prelude::*;

/// A handle to finalized prism buffers.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const mesh = build_geometry("t_prism", "{}");
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(mesh.vertices(), 3));
/// geometry.setAttribute('normal', new THREE.BufferAttribute(mesh.normals(), 3));
/// geometry.setIndex(new THREE.BufferAttribute(mesh.indices(), 1));
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq)]
pub struct MeshHandle {
    /// Vertex positions as [x, y, z, x, y, z, ...]
    vertices: Vec<f32>,
    /// Triangle indices as [i0, i1, i2, i0, i1, i2, ...]
    indices: Vec<u32>,
    /// Vertex normals as [nx, ny, nz, ...]
    normals: Vec<f32>,
    /// Face normals, one triple per triangle
    face_normals: Vec<f32>,
    /// [min_x, min_y, min_z, max_x, max_y, max_z]
    bounding_box: Vec<f32>,
    vertex_count: u32,
    triangle_count: u32,
}

#[wasm_bindgen]
impl MeshHandle {
    /// Returns the number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Returns the number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        self.triangle_count
    }

    /// Returns the vertex positions as a Float32Array.
    ///
    /// Length: vertex_count * 3
    pub fn vertices(&self) -> Vec<f32> {
        self.vertices.clone()
    }

    /// Returns the triangle indices as a Uint32Array.
    ///
    /// Length: triangle_count * 3
    pub fn indices(&self) -> Vec<u32> {
        self.indices.clone()
    }

    /// Returns the vertex normals as a Float32Array.
    pub fn normals(&self) -> Vec<f32> {
        self.normals.clone()
    }

    /// Returns the face normals as a Float32Array.
    ///
    /// Length: triangle_count * 3
    pub fn face_normals(&self) -> Vec<f32> {
        self.face_normals.clone()
    }

    /// Returns `[min_x, min_y, min_z, max_x, max_y, max_z]`, empty for an
    /// empty mesh.
    pub fn bounding_box(&self) -> Vec<f32> {
        self.bounding_box.clone()
    }

    /// Returns true if the mesh is empty.
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }
}

impl MeshHandle {
    /// Creates a MeshHandle from a finalized Mesh.
    pub fn from_mesh(mesh: &Mesh) -> Self {
        let bounding_box: Vec<f32> = mesh
            .bounding_box()
            .map(|b| {
                [b.min, b.max]
                    .iter()
                    .flat_map(|p| p.to_array())
                    .map(|c| c as f32)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            vertices: mesh.vertices_f32(),
            indices: mesh.indices_u32(),
            normals: mesh.normals_f32().unwrap_or_default(),
            face_normals: mesh.face_normals_f32().unwrap_or_default(),
            bounding_box,
            vertex_count: mesh.vertex_count() as u32,
            triangle_count: mesh.triangle_count() as u32,
        }
    }
}
