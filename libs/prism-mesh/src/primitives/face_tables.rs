//! # Face Tables
//!
//! Index triples closing an extruded outline. Indices `[0, N)` are the front
//! cap (the input outline), `[N, 2N)` the back cap, where back `i + N` is the
//! extruded copy of front `i`.
//!
//! The tables are kept exactly as the scene content was authored against;
//! they are data, not output of a general prism triangulation.

/// Triangular prism over `[A, B, C, A', B', C']`.
pub const TRIANGULAR_PRISM_FACES: [[u32; 3]; 8] = [
    // front
    [0, 1, 2],
    // right
    [1, 5, 2],
    [5, 1, 4],
    // back
    // NOTE: winds the same way as the front cap, so it faces into the solid.
    [3, 4, 5],
    // top
    [5, 3, 0],
    [0, 2, 5],
    // bottom
    [3, 1, 0],
    [3, 4, 1],
];

/// Rectangular prism over corners listed row by row:
/// `[bottom-left, bottom-right, top-left, top-right]` plus their copies.
pub const RECTANGULAR_PRISM_FACES: [[u32; 3]; 12] = [
    // front
    [0, 3, 2],
    [0, 1, 3],
    // right
    [1, 7, 3],
    [1, 5, 7],
    // back
    [5, 6, 7],
    [5, 4, 6],
    // left
    [4, 2, 6],
    [4, 0, 2],
    // top
    [2, 7, 6],
    [2, 3, 7],
    // bottom
    [4, 1, 0],
    [4, 5, 1],
];
