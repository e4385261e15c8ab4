//! # Primitives
//!
//! Prism solids built from a flat outline: the outline is extruded along -Z
//! and closed with a fixed face table per [`PrismKind`].

pub mod face_tables;
pub mod prism;


pub use face_tables::{RECTANGULAR_PRISM_FACES, TRIANGULAR_PRISM_FACES};
pub use prism::{build_from_strings, build_prism, build_rectangular_prism, build_triangular_prism};

use config::constants::{RECTANGULAR_PRISM_DEFAULT_VERTICES, TRIANGULAR_PRISM_DEFAULT_VERTICES};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The prism shapes that can be built.
///
/// Serialized with the geometry names the host registers them under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrismKind {
    /// Three base points, eight faces.
    #[serde(rename = "t_prism")]
    Triangular,
    /// Four base points, twelve faces.
    #[serde(rename = "r_prism")]
    Rectangular,
}

impl PrismKind {
    /// All kinds, in registration order.
    pub const ALL: [PrismKind; 2] = [PrismKind::Triangular, PrismKind::Rectangular];

    /// Number of outline points the face table is written for.
    pub const fn base_vertex_count(self) -> usize {
        match self {
            PrismKind::Triangular => 3,
            PrismKind::Rectangular => 4,
        }
    }

    /// Vertex count after extrusion.
    pub const fn vertex_count(self) -> usize {
        self.base_vertex_count() * 2
    }

    /// Fixed triangle table closing the extruded buffer.
    pub const fn face_table(self) -> &'static [[u32; 3]] {
        match self {
            PrismKind::Triangular => &TRIANGULAR_PRISM_FACES,
            PrismKind::Rectangular => &RECTANGULAR_PRISM_FACES,
        }
    }

    /// Name the geometry is registered under in the host scene.
    pub const fn name(self) -> &'static str {
        match self {
            PrismKind::Triangular => "t_prism",
            PrismKind::Rectangular => "r_prism",
        }
    }

    /// Looks a kind up by its registered name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Outline used when the host supplies no vertices.
    pub const fn default_vertices(self) -> &'static [&'static str] {
        match self {
            PrismKind::Triangular => &TRIANGULAR_PRISM_DEFAULT_VERTICES,
            PrismKind::Rectangular => &RECTANGULAR_PRISM_DEFAULT_VERTICES,
        }
    }
}

impl fmt::Display for PrismKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
