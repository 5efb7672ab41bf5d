//! # Bounded vector
//!
//! Wrapping a `Vec` such that it has a fixed, validated size, and is indexed by the range
//! `start_index..start_index + len`. The offset allows a vector to hold only the trailing part of
//! a conceptually longer vector, like a row of an upper triangular matrix.
use std::fmt;
use std::fmt::Display;
use std::ops::{Add, Index, IndexMut, Sub};
use std::slice::Iter;

use itertools::Itertools;
use num_traits::Zero;

use crate::data::linear_algebra::error::{LinearAlgebraError, Result};
use crate::data::linear_algebra::MAX_SIZE;
use crate::data::linear_algebra::ops::{Additive, Element};

/// Uses a `Vec` as underlying data structure. Length is fixed at creation.
#[derive(Debug)]
pub struct Bounded<F> {
    data: Vec<F>,
    start_index: usize,
}

impl<F: Element> Bounded<F> {
    /// Create a new vector from values.
    ///
    /// # Arguments
    ///
    /// * `data`: Values of the vector, the first one lives at `start_index`.
    /// * `start_index`: Lowest valid index.
    ///
    /// # Errors
    ///
    /// `InvalidSize` if `data` is empty or longer than `MAX_SIZE`, or if the last index would not
    /// fit in a `usize`.
    pub fn new(data: Vec<F>, start_index: usize) -> Result<Self> {
        LinearAlgebraError::check_size_from(data.len(), start_index, MAX_SIZE)?;

        Ok(Self { data, start_index, })
    }

    /// Create a vector with all values being equal to a given value.
    ///
    /// # Arguments
    ///
    /// * `value`: The value which all elements of this vector are equal to.
    /// * `len`: Length of the vector, number of elements.
    pub fn constant(value: F, len: usize) -> Result<Self> {
        LinearAlgebraError::check_size(len, MAX_SIZE)?;

        Ok(Self { data: vec![value; len], start_index: 0, })
    }

    /// Create a vector of zeros, indexed from `0`.
    pub fn zeros(len: usize) -> Result<Self>
    where
        F: Zero,
    {
        Self::zeros_from(len, 0)
    }

    /// Create a vector of zeros, indexed from `start_index`.
    ///
    /// # Arguments
    ///
    /// * `len`: Number of values stored.
    /// * `start_index`: Lowest valid index.
    ///
    /// # Errors
    ///
    /// `InvalidSize` if `len` is zero or larger than `MAX_SIZE`, or if the last index would not fit
    /// in a `usize`.
    pub fn zeros_from(len: usize, start_index: usize) -> Result<Self>
    where
        F: Zero,
    {
        LinearAlgebraError::check_size_from(len, start_index, MAX_SIZE)?;

        Ok(Self { data: vec![F::zero(); len], start_index, })
    }

    /// Translate a global index into an index in `data`.
    fn data_index(&self, i: usize) -> Result<usize> {
        if (self.start_index..self.end_index()).contains(&i) {
            Ok(i - self.start_index)
        } else {
            Err(LinearAlgebraError::OutOfRange {
                index: i,
                start: self.start_index,
                end: self.end_index(),
            })
        }
    }

    /// Retrieve the value at an index.
    ///
    /// # Errors
    ///
    /// `OutOfRange` unless `start_index() <= i < end_index()`.
    pub fn get(&self, i: usize) -> Result<&F> {
        let data_index = self.data_index(i)?;

        Ok(&self.data[data_index])
    }

    /// Retrieve a mutable reference to the value at an index.
    ///
    /// # Errors
    ///
    /// `OutOfRange` unless `start_index() <= i < end_index()`.
    pub fn get_mut(&mut self, i: usize) -> Result<&mut F> {
        let data_index = self.data_index(i)?;

        Ok(&mut self.data[data_index])
    }

    /// Set the value at index `i` to `value`.
    pub fn set(&mut self, i: usize, value: F) -> Result<()> {
        *self.get_mut(i)? = value;

        Ok(())
    }

    /// Element-wise sum of two vectors of equal length.
    ///
    /// The result is indexed like `self`. Offsets are not used to align the operands, only the
    /// positions within the stored values are.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` if the lengths differ.
    pub fn add(&self, other: &Self) -> Result<Self>
    where
        F: Additive,
    {
        self.zip_with(other, |left, right| left.clone() + right)
    }

    /// Element-wise difference of two vectors of equal length.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` if the lengths differ.
    pub fn subtract(&self, other: &Self) -> Result<Self>
    where
        F: Additive,
    {
        self.zip_with(other, |left, right| left.clone() - right)
    }

    fn zip_with(&self, other: &Self, operation: impl Fn(&F, &F) -> F) -> Result<Self> {
        LinearAlgebraError::check_same_size(self.len(), other.len())?;

        Ok(Self {
            data: self.data.iter().zip_eq(&other.data)
                .map(|(left, right)| operation(left, right))
                .collect(),
            start_index: self.start_index,
        })
    }

    /// Replace length, offset and values of this vector by those of `other`.
    ///
    /// Existing storage is reused where possible.
    pub fn assign(&mut self, other: &Self) {
        self.clone_from(other);
    }
}

impl<F> Bounded<F> {
    /// The number of values stored in this vector.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`, construction rejects empty vectors.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Lowest valid index.
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// One past the highest valid index.
    pub fn end_index(&self) -> usize {
        self.start_index + self.data.len()
    }

    /// Iterate over the values of this vector.
    pub fn iter(&self) -> Iter<'_, F> {
        self.data.iter()
    }

    /// Iterate over the values of this vector, together with their (global) index.
    pub fn iter_indexed(&self) -> impl Iterator<Item = (usize, &F)> {
        (self.start_index..self.end_index()).zip(self.data.iter())
    }
}

impl<F: Clone> Clone for Bounded<F> {
    fn clone(&self) -> Self {
        Self { data: self.data.clone(), start_index: self.start_index, }
    }

    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
        self.start_index = source.start_index;
    }
}

/// Vectors are equal when their values are, the offset doesn't matter.
impl<F: PartialEq> PartialEq for Bounded<F> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || self.data == other.data
    }
}

impl<F: Eq> Eq for Bounded<F> {}

impl<F: Element> Index<usize> for Bounded<F> {
    type Output = F;

    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<F: Element> IndexMut<usize> for Bounded<F> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<'a, F: Additive> Add for &'a Bounded<F> {
    type Output = Result<Bounded<F>>;

    fn add(self, rhs: Self) -> Self::Output {
        Bounded::add(self, rhs)
    }
}

impl<'a, F: Additive> Sub for &'a Bounded<F> {
    type Output = Result<Bounded<F>>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(rhs)
    }
}

impl<F: Display> Display for Bounded<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.data.iter().join(" "))
    }
}
