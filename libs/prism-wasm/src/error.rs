//! # Adapter Errors

use prism_mesh::MeshError;
use thiserror::Error;

/// Errors raised while turning host data into a mesh.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// The host asked for a geometry name that is not registered
    #[error("Unknown geometry {name:?} (registered: {registered})")]
    UnknownGeometry { name: String, registered: String },

    /// The schema data is not valid JSON for a geometry schema
    #[error("Invalid schema data: {0}")]
    InvalidSchema(#[from] serde_json::Error),

    /// Mesh construction failed
    #[error(transparent)]
    Mesh(#[from] MeshError),
}

impl AdapterError {
    /// Creates an unknown geometry error listing the registered names.
    pub fn unknown_geometry(name: impl Into<String>) -> Self {
        Self::UnknownGeometry {
            name: name.into(),
            registered: crate::registered_geometry_names().join(", "),
        }
    }
}
