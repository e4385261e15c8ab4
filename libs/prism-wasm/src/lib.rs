//! WASM-facing entry points for the prism geometries.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. It replaces per-geometry plugin registration with explicit
//! factories: the host names a registered geometry, passes its component data
//! as JSON and receives finalized buffers. Native tests use
//! `build_geometry_internal`, which exposes Rust error types directly.
//!
//! ```
//! let mesh = prism_wasm::build_geometry_internal("t_prism", "{}").unwrap();
//! assert_eq!(mesh.vertex_count(), 6);
//! assert_eq!(mesh.triangle_count(), 8);
//! ```

use config::constants::{PrismConfig, EXTRUSION_LENGTH};
use prism_mesh::build_from_strings;
use wasm_bindgen::prelude::*;

mod error;
mod mesh_handle;
mod registry;

pub use error::AdapterError;
pub use mesh_handle::MeshHandle;
pub use registry::{lookup_geometry, GeometryDefinition, GeometrySchema, GEOMETRIES};

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "prism_wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Returns the default distance between the front and back caps.
///
/// # Examples
/// ```
/// assert_eq!(prism_wasm::extrusion_length(), 2.0);
/// ```
#[wasm_bindgen]
pub fn extrusion_length() -> f64 {
    EXTRUSION_LENGTH
}

/// Names of every registered geometry.
///
/// # Examples
/// ```
/// assert_eq!(prism_wasm::registered_geometry_names(), vec!["t_prism", "r_prism"]);
/// ```
#[wasm_bindgen]
pub fn registered_geometry_names() -> Vec<String> {
    GEOMETRIES.iter().map(|g| g.name.to_string()).collect()
}

/// Builds the named geometry from the host's component data.
///
/// `schema_json` is the component data as JSON, e.g.
/// `{"vertices": ["0 1 0", "-1 -1 0", "1 -1 0"]}`. A missing `vertices`
/// field, `{}` or an empty string selects the geometry's defaults.
///
/// # Errors
/// Returns a JavaScript error value containing a human-readable message for
/// unknown names, malformed JSON, malformed coordinates or a wrong vertex
/// count.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // try {
/// //   const mesh = build_geometry("r_prism", JSON.stringify(data));
/// //   console.log("Vertices:", mesh.vertex_count);
/// // } catch (error) {
/// //   console.error("Geometry failed:", error);
/// // }
/// ```
#[wasm_bindgen]
pub fn build_geometry(name: &str, schema_json: &str) -> Result<MeshHandle, JsValue> {
    build_geometry_internal(name, schema_json).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Host-independent implementation of [`build_geometry`].
pub fn build_geometry_internal(name: &str, schema_json: &str) -> Result<MeshHandle, AdapterError> {
    let definition = lookup_geometry(name).ok_or_else(|| AdapterError::unknown_geometry(name))?;
    let schema = GeometrySchema::from_json(schema_json)?;
    build_with_schema(definition, &schema, &PrismConfig::default())
}

/// Builds `definition` from already-decoded schema data and a custom config.
///
/// # Examples
/// ```
/// use config::constants::PrismConfig;
/// use prism_wasm::{build_with_schema, lookup_geometry, GeometrySchema};
///
/// let definition = lookup_geometry("r_prism").unwrap();
/// let config = PrismConfig::default().with_extrusion_length(4.0).unwrap();
/// let mesh = build_with_schema(definition, &GeometrySchema::default(), &config).unwrap();
/// assert_eq!(mesh.bounding_box()[2], -3.0);
/// ```
pub fn build_with_schema(
    definition: &GeometryDefinition,
    schema: &GeometrySchema,
    config: &PrismConfig,
) -> Result<MeshHandle, AdapterError> {
    let vertices = schema.resolve_vertices(definition);
    tracing::debug!(
        geometry = definition.name,
        defaults = schema.vertices.is_none(),
        "building geometry"
    );
    let mesh = build_from_strings(definition.kind, &vertices, config)?;
    Ok(MeshHandle::from_mesh(&mesh))
}
