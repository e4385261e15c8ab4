//! # Prism Mesh
//!
//! Closed prism solids for WebXR scene geometry. A flat outline given as
//! `"x y z"` strings is extruded along -Z and closed with a fixed face table.
//!
//! ## Architecture
//!
//! ```text
//! strings → parse → extrude → face table → finalize → Mesh
//! ```
//!
//! ## Shapes
//!
//! - **t_prism**: 3 outline points, 6 vertices, 8 triangles
//! - **r_prism**: 4 outline points, 8 vertices, 12 triangles
//!
//! ## Usage
//!
//! ```rust
//! use prism_mesh::{build_from_strings, PrismKind};
//! use config::constants::PrismConfig;
//!
//! let mesh = build_from_strings(
//!     PrismKind::Triangular,
//!     &["0 10 0", "-10 -10 0", "10 -10 0"],
//!     &PrismConfig::default(),
//! )?;
//! assert_eq!(mesh.vertex_count(), 6);
//! assert_eq!(mesh.triangle_count(), 8);
//! # Ok::<(), prism_mesh::MeshError>(())
//! ```

pub mod error;
pub mod mesh;
pub mod ops;
pub mod parse;
pub mod primitives;

pub use error::MeshError;
pub use mesh::{BoundingBox, Mesh};
pub use primitives::{build_from_strings, build_prism, PrismKind};
