//! # Upper triangular matrices
//!
//! Square upper triangular matrices stored row by row in bounds-checked vectors, such that only
//! the upper triangle takes up memory. Next to these, a singly-linked list and a bounded stack
//! built on top of it.
#![warn(missing_docs)]

pub mod data;
