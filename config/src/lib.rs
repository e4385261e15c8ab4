//! # Config Crate
//!
//! Centralized configuration constants for the prism geometry pipeline.
//! Extrusion defaults, tolerances and the schema default outlines live here
//! so the core and the host adapter agree on a single value.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{PrismConfig, EXTRUSION_LENGTH, VERTEX_MERGE_EPSILON};
//!
//! let config = PrismConfig::default();
//! assert_eq!(config.extrusion_length, EXTRUSION_LENGTH);
//! assert_eq!(config.merge_tolerance, VERTEX_MERGE_EPSILON);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Validated**: Runtime overrides go through [`constants::PrismConfig::new`]

pub mod constants;

#[cfg(test)]
mod tests;
