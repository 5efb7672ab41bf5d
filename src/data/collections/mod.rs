//! # Sequence containers
//!
//! A singly-linked list that only changes at its head, and a stack of bounded capacity built on
//! top of it. These don't depend on the linear algebra types and vice versa.
pub use list::{Iter, LinkedList};
pub use stack::BoundedStack;

pub mod error;
mod list;
mod stack;
