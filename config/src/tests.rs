//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

#[test]
fn test_vertex_merge_epsilon_larger_than_epsilon() {
    assert!(
        VERTEX_MERGE_EPSILON >= EPSILON,
        "VERTEX_MERGE_EPSILON should be >= EPSILON"
    );
}

// =============================================================================
// EXTRUSION TESTS
// =============================================================================

#[test]
fn test_extrusion_length_default() {
    assert_eq!(EXTRUSION_LENGTH, 2.0);
}

// =============================================================================
// SCHEMA DEFAULT TESTS
// =============================================================================

#[test]
fn test_default_outlines_have_three_coordinates() {
    for vertex in TRIANGULAR_PRISM_DEFAULT_VERTICES
        .iter()
        .chain(RECTANGULAR_PRISM_DEFAULT_VERTICES.iter())
    {
        assert_eq!(vertex.split_whitespace().count(), 3, "bad default {vertex:?}");
    }
}

#[test]
fn test_rectangular_default_is_unit_square_plane() {
    // All corners share z = 1
    for vertex in RECTANGULAR_PRISM_DEFAULT_VERTICES {
        assert!(vertex.ends_with(" 1"));
    }
}

// =============================================================================
// APPROX_ZERO TESTS
// =============================================================================

#[test]
fn test_approx_zero_exact_zero() {
    assert!(approx_zero(0.0));
}

#[test]
fn test_approx_zero_within_epsilon() {
    let small = EPSILON / 2.0;
    assert!(approx_zero(small));
    assert!(approx_zero(-small));
}

#[test]
fn test_approx_zero_non_zero_values() {
    assert!(!approx_zero(1.0));
    assert!(!approx_zero(-1.0));
    assert!(!approx_zero(0.1));
}
