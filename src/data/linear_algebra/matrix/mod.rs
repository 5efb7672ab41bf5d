//! # Matrix types
//!
//! Square matrices that only store their upper triangle.
pub use upper_triangular::UpperTriangular as TriangularMatrix;

mod upper_triangular;
