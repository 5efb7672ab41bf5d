//! # Storing of numeric containers in memory
//!
//! This module provides the data structures of this crate: linear algebra primitives in
//! `linear_algebra` and generic sequence containers in `collections`.

pub mod collections;
pub mod linear_algebra;
