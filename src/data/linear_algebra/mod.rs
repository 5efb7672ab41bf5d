//! # Linear algebra primitives
//!
//! Vectors of a fixed, validated length that can represent a sub-range of a larger index space,
//! and square upper triangular matrices built from them.

pub mod error;
pub mod matrix;
pub mod ops;
pub mod vector;

/// Largest length any single vector can have.
pub const MAX_SIZE: usize = 100_000_000;
/// Largest order a triangular matrix can have.
pub const MAX_MATRIX_SIZE: usize = 10_000;
