//! # Mesh Operations
//!
//! - **extrude**: Duplicate a base outline along -Z
//! - **finalize**: Bounding box, vertex merge and normals for a built mesh

pub mod extrude;
pub mod finalize;

pub use extrude::extrude;
pub use finalize::finalize;
