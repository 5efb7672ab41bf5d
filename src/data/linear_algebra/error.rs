//! # Error reporting for vectors and matrices
//!
//! All of these are contract violations by the caller: the library doesn't recover from them, it
//! returns them as soon as they are detected, without having changed any of the operands.
use thiserror::Error;

/// Shorthand for results of operations on vectors and matrices.
pub type Result<T> = std::result::Result<T, LinearAlgebraError>;

/// Kinds of failure of construction, indexing and arithmetic.
#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum LinearAlgebraError {
    /// A length or order of zero, or one above the maximum, was requested at construction.
    #[error("invalid size {size}: should be at least 1 and at most {max}")]
    InvalidSize {
        /// Requested length or order.
        size: usize,
        /// Largest value that would have been accepted.
        max: usize,
    },
    /// An index outside of the `start..end` range of a vector or matrix.
    #[error("index {index} out of range {start}..{end}")]
    OutOfRange {
        /// Index that was used.
        index: usize,
        /// First valid index.
        start: usize,
        /// One past the last valid index.
        end: usize,
    },
    /// The two operands of an arithmetic operation have a different length or order.
    #[error("size mismatch: left operand has size {left}, right operand has size {right}")]
    SizeMismatch {
        /// Length or order of the left operand.
        left: usize,
        /// Length or order of the right operand.
        right: usize,
    },
}

impl LinearAlgebraError {
    /// Check a requested length or order against its bounds.
    ///
    /// # Arguments
    ///
    /// * `size`: Requested length or order.
    /// * `max`: Largest acceptable value.
    pub(crate) fn check_size(size: usize, max: usize) -> Result<()> {
        if size == 0 || size > max {
            Err(LinearAlgebraError::InvalidSize { size, max })
        } else {
            Ok(())
        }
    }

    /// Check a requested length for a vector whose first index is `start_index`.
    ///
    /// Besides the bounds of `check_size`, the indices `start_index..start_index + size` need to
    /// be representable.
    pub(crate) fn check_size_from(size: usize, start_index: usize, max: usize) -> Result<()> {
        Self::check_size(size, max)?;

        match start_index.checked_add(size) {
            Some(_) => Ok(()),
            None => Err(LinearAlgebraError::InvalidSize { size, max: usize::MAX - start_index }),
        }
    }

    /// Check that two operands have the same length or order.
    pub(crate) fn check_same_size(left: usize, right: usize) -> Result<()> {
        if left == right {
            Ok(())
        } else {
            Err(LinearAlgebraError::SizeMismatch { left, right })
        }
    }
}
