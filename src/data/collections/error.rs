//! # Error reporting for sequence containers
use thiserror::Error;

/// Shorthand for results of operations on sequence containers.
pub type Result<T> = std::result::Result<T, CollectionError>;

/// Ways in which an operation on a bounded container can fail.
#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum CollectionError {
    /// A bounded container needs room for at least one element.
    #[error("capacity should be at least 1")]
    InvalidCapacity,
    /// Pushing onto a container that already holds `capacity` elements.
    #[error("container is full, capacity is {capacity}")]
    Full {
        /// Maximum number of elements of the container.
        capacity: usize,
    },
    /// Taking an element from a container without any.
    #[error("container is empty")]
    Empty,
}
