//! # Upper triangular matrix
//!
//! A square matrix of order `n` is stored as `n` rows of decreasing length: row `i` is a
//! `BoundedVector` of length `n - i` starting at index `i`, so it holds columns `i..n` only. The
//! values below the diagonal are not stored and are zero.
//!
//! Indexing a matrix gives a row, indexing that row gives a value. The row checks the column
//! index against its own range, which is how cells below the diagonal are rejected.
use std::fmt;
use std::fmt::Display;
use std::iter;
use std::ops::{Add, Index, IndexMut, Mul, Sub};
use std::slice::Iter;

use itertools::Itertools;
use log::{debug, trace};
use num_traits::{One, Zero};

use crate::data::linear_algebra::error::{LinearAlgebraError, Result};
use crate::data::linear_algebra::MAX_MATRIX_SIZE;
use crate::data::linear_algebra::ops::{Additive, Element, Ring};
use crate::data::linear_algebra::vector::BoundedVector;

/// Row major, rows are stored from the diagonal onwards. Order is fixed at creation, but can be
/// changed by assigning another matrix.
#[derive(Debug)]
pub struct UpperTriangular<F> {
    rows: Vec<BoundedVector<F>>,
}

impl<F: Element> UpperTriangular<F> {
    /// Create a matrix of zeros.
    ///
    /// # Arguments
    ///
    /// * `order`: Number of rows and columns.
    ///
    /// # Errors
    ///
    /// `InvalidSize` if `order` is zero or larger than `MAX_MATRIX_SIZE`.
    pub fn zeros(order: usize) -> Result<Self>
    where
        F: Zero,
    {
        LinearAlgebraError::check_size(order, MAX_MATRIX_SIZE)?;

        let rows = (0..order)
            .map(|i| BoundedVector::zeros_from(order - i, i))
            .collect::<Result<_>>()?;

        Ok(Self { rows, })
    }

    /// Create a matrix of order `order` with ones on the diagonal and zeros above it.
    pub fn identity(order: usize) -> Result<Self>
    where
        F: Zero + One,
    {
        let mut matrix = Self::zeros(order)?;
        for (i, row) in matrix.rows.iter_mut().enumerate() {
            row.set(i, F::one())?;
        }

        Ok(matrix)
    }

    /// Create a matrix from the values on and above the diagonal.
    ///
    /// # Arguments
    ///
    /// * `rows`: Row `i` contains the values of columns `i` up to the order, so the first row
    /// determines the order of the matrix and each next row is one shorter.
    ///
    /// # Errors
    ///
    /// `InvalidSize` if there are no rows or too many of them, `SizeMismatch` if a row has the
    /// wrong length.
    pub fn from_rows(rows: Vec<Vec<F>>) -> Result<Self> {
        let order = rows.len();
        LinearAlgebraError::check_size(order, MAX_MATRIX_SIZE)?;

        let rows = rows.into_iter()
            .enumerate()
            .map(|(i, row)| {
                LinearAlgebraError::check_same_size(row.len(), order - i)?;
                BoundedVector::new(row, i)
            })
            .collect::<Result<_>>()?;

        Ok(Self { rows, })
    }

    fn check_row(&self, i: usize) -> Result<()> {
        if i < self.order() {
            Ok(())
        } else {
            Err(LinearAlgebraError::OutOfRange { index: i, start: 0, end: self.order() })
        }
    }

    /// Get row `i` of this matrix.
    ///
    /// The row is indexed by column, and only contains columns `i` up to the order.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `i` is not below the order.
    pub fn row(&self, i: usize) -> Result<&BoundedVector<F>> {
        self.check_row(i)?;

        Ok(&self.rows[i])
    }

    /// Get a mutable reference to row `i` of this matrix.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `i` is not below the order.
    pub fn row_mut(&mut self, i: usize) -> Result<&mut BoundedVector<F>> {
        self.check_row(i)?;

        Ok(&mut self.rows[i])
    }

    /// Get the value at coordinate (`i`, `j`).
    ///
    /// # Errors
    ///
    /// `OutOfRange` unless `i <= j < order`.
    pub fn get(&self, i: usize, j: usize) -> Result<&F> {
        self.row(i)?.get(j)
    }

    /// Get a mutable reference to the value at coordinate (`i`, `j`).
    pub fn get_mut(&mut self, i: usize, j: usize) -> Result<&mut F> {
        self.row_mut(i)?.get_mut(j)
    }

    /// Set the value at coordinate (`i`, `j`) to `value`.
    pub fn set(&mut self, i: usize, j: usize, value: F) -> Result<()> {
        self.row_mut(i)?.set(j, value)
    }

    /// Replace order and values of this matrix by those of `other`.
    ///
    /// The order of this matrix doesn't need to match, it becomes that of `other`.
    pub fn assign(&mut self, other: &Self) {
        self.clone_from(other);
    }

    /// Sum of two matrices of the same order.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` if the orders differ.
    pub fn add(&self, other: &Self) -> Result<Self>
    where
        F: Additive,
    {
        self.combine_rows(other, BoundedVector::add)
    }

    /// Difference of two matrices of the same order.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` if the orders differ.
    pub fn subtract(&self, other: &Self) -> Result<Self>
    where
        F: Additive,
    {
        self.combine_rows(other, BoundedVector::subtract)
    }

    fn combine_rows(
        &self,
        other: &Self,
        operation: impl Fn(&BoundedVector<F>, &BoundedVector<F>) -> Result<BoundedVector<F>>,
    ) -> Result<Self> {
        LinearAlgebraError::check_same_size(self.order(), other.order())?;

        let rows = self.rows.iter().zip_eq(&other.rows)
            .map(|(left, right)| operation(left, right))
            .collect::<Result<_>>()?;

        Ok(Self { rows, })
    }

    /// Matrix product of two matrices of the same order.
    ///
    /// Value (`i`, `j`) of the product is the sum of `self[i][k] * other[k][j]` over `i <= k <= j`,
    /// the only terms in which neither factor lies below a diagonal.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` if the orders differ.
    pub fn multiply(&self, other: &Self) -> Result<Self>
    where
        F: Ring,
    {
        LinearAlgebraError::check_same_size(self.order(), other.order())?;
        trace!("Multiplying two triangular matrices of order {}", self.order());

        let rows = self.rows.iter()
            .map(|left| {
                let i = left.start_index();
                let values = (i..self.order())
                    .map(|j| {
                        let mut total = F::zero();
                        for k in i..=j {
                            total += left[k].clone() * &other.rows[k][j];
                        }
                        total
                    })
                    .collect();
                BoundedVector::new(values, i)
            })
            .collect::<Result<_>>()?;

        Ok(Self { rows, })
    }

    /// Iterate over all stored values with their coordinates, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &F)> {
        self.rows.iter()
            .enumerate()
            .flat_map(|(i, row)| row.iter_indexed().map(move |(j, value)| (i, j, value)))
    }
}

impl<F> UpperTriangular<F> {
    /// Number of rows and columns of this matrix.
    pub fn order(&self) -> usize {
        self.rows.len()
    }

    /// Iterate over the rows of this matrix.
    pub fn rows(&self) -> Iter<'_, BoundedVector<F>> {
        self.rows.iter()
    }
}

impl<F: Clone> Clone for UpperTriangular<F> {
    fn clone(&self) -> Self {
        Self { rows: self.rows.clone(), }
    }

    fn clone_from(&mut self, source: &Self) {
        if self.order() != source.order() {
            debug!("Changing order of triangular matrix from {} to {}", self.order(), source.order());
        }

        self.rows.truncate(source.order());
        for (row, source_row) in self.rows.iter_mut().zip(&source.rows) {
            row.clone_from(source_row);
        }
        let present = self.rows.len();
        self.rows.extend(source.rows[present..].iter().cloned());
    }
}

impl<F: PartialEq> PartialEq for UpperTriangular<F> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || self.rows == other.rows
    }
}

impl<F: Eq> Eq for UpperTriangular<F> {}

impl<F: Element> Index<usize> for UpperTriangular<F> {
    type Output = BoundedVector<F>;

    fn index(&self, index: usize) -> &Self::Output {
        match self.row(index) {
            Ok(row) => row,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<F: Element> IndexMut<usize> for UpperTriangular<F> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.row_mut(index) {
            Ok(row) => row,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<'a, F: Additive> Add for &'a UpperTriangular<F> {
    type Output = Result<UpperTriangular<F>>;

    fn add(self, rhs: Self) -> Self::Output {
        UpperTriangular::add(self, rhs)
    }
}

impl<'a, F: Additive> Sub for &'a UpperTriangular<F> {
    type Output = Result<UpperTriangular<F>>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(rhs)
    }
}

impl<'a, F: Ring> Mul for &'a UpperTriangular<F> {
    type Output = Result<UpperTriangular<F>>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(rhs)
    }
}

impl<F: Display> Display for UpperTriangular<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rendered = self.rows.iter()
            .map(|row| row.iter().map(ToString::to_string).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let width = rendered.iter().flatten().map(String::len).max().unwrap_or(0);

        for (i, row) in rendered.iter().enumerate() {
            let line = iter::repeat_n(String::new(), i)
                .chain(row.iter().cloned())
                .map(|value| format!("{:>width$}", value, width = width))
                .join(" ");
            writeln!(f, "{}", line)?;
        }

        Ok(())
    }
}
