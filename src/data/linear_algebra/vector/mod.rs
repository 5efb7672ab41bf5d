//! # Vector types
//!
//! Vectors with a length that is fixed and validated at creation, addressed through a range of
//! indices that doesn't need to start at zero.
pub use bounded::Bounded as BoundedVector;

mod bounded;
