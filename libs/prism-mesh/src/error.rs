//! # Mesh Errors
//!
//! Error types for prism construction.

use crate::primitives::PrismKind;
use config::constants::ConfigError;
use thiserror::Error;

/// Errors that can occur while building a prism mesh.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// A coordinate string could not be parsed into a point
    #[error("Invalid vertex #{index} {input:?}: {reason} (expected \"x y z\")")]
    InvalidVertex {
        index: usize,
        input: String,
        reason: String,
    },

    /// The base outline has the wrong number of points for the prism kind
    #[error("Unsupported vertex count for {kind}: expected {expected}, got {actual}")]
    UnsupportedVertexCount {
        kind: PrismKind,
        expected: usize,
        actual: usize,
    },

    /// Extrusion length is zero, negative or not finite
    #[error("Invalid extrusion length: {length} (must be positive and finite)")]
    InvalidExtrusionLength { length: f64 },

    /// Invalid pipeline configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl MeshError {
    /// Creates an invalid vertex error.
    pub fn invalid_vertex(index: usize, input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidVertex {
            index,
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Creates an unsupported vertex count error for `kind`.
    pub fn unsupported_vertex_count(kind: PrismKind, actual: usize) -> Self {
        Self::UnsupportedVertexCount {
            kind,
            expected: kind.base_vertex_count(),
            actual,
        }
    }
}
