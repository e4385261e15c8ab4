//! # Geometry Registry
//!
//! The geometries the scene host can instantiate, with their schema
//! defaults, and the schema data the host passes on instantiation.

use prism_mesh::PrismKind;
use serde::{Deserialize, Serialize};

/// A geometry the host can instantiate by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryDefinition {
    /// Name used in scene markup, e.g. `geometry="primitive: t_prism"`.
    pub name: &'static str,
    pub kind: PrismKind,
    /// Outline used when the schema data has no `vertices`.
    pub default_vertices: &'static [&'static str],
}

impl GeometryDefinition {
    const fn for_kind(kind: PrismKind) -> Self {
        Self {
            name: kind.name(),
            kind,
            default_vertices: kind.default_vertices(),
        }
    }
}

/// Every registered geometry, in registration order.
pub static GEOMETRIES: [GeometryDefinition; 2] = [
    GeometryDefinition::for_kind(PrismKind::Triangular),
    GeometryDefinition::for_kind(PrismKind::Rectangular),
];

/// Finds a registered geometry by name.
///
/// # Examples
/// ```
/// use prism_wasm::lookup_geometry;
/// assert_eq!(lookup_geometry("r_prism").unwrap().default_vertices.len(), 4);
/// assert!(lookup_geometry("sphere").is_none());
/// ```
pub fn lookup_geometry(name: &str) -> Option<&'static GeometryDefinition> {
    let kind = PrismKind::from_name(name)?;
    GEOMETRIES.iter().find(|definition| definition.kind == kind)
}

/// Component data supplied by the host for one geometry instance.
///
/// # Examples
/// ```
/// use prism_wasm::GeometrySchema;
/// let schema: GeometrySchema = serde_json::from_str(r#"{"vertices": ["1 2 3"]}"#).unwrap();
/// assert_eq!(schema.vertices.unwrap(), vec!["1 2 3".to_string()]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometrySchema {
    /// Outline as `"x y z"` strings; `None` selects the definition defaults.
    pub vertices: Option<Vec<String>>,
}

impl GeometrySchema {
    /// Parses schema JSON; blank input is treated as an empty object.
    pub fn from_json(data: &str) -> Result<Self, serde_json::Error> {
        if data.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(data)
    }

    /// Outline for `definition`, falling back to its defaults.
    pub fn resolve_vertices(&self, definition: &GeometryDefinition) -> Vec<String> {
        match &self.vertices {
            Some(vertices) => vertices.clone(),
            None => definition
                .default_vertices
                .iter()
                .map(|v| (*v).to_string())
                .collect(),
        }
    }
}
