//! # Number operations
//!
//! Vectors and matrices are generic over their element type. Storing values needs little, doing
//! arithmetic with them needs a bit more. These traits collect the requirements, and are
//! implemented for every type that satisfies them: machine integers, floats and the rational
//! types of `relp_num` alike.
use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Mul, Sub};

use num_traits::Zero;

/// Element of a `BoundedVector` or `TriangularMatrix`.
pub trait Element: PartialEq + Clone + Display + Debug {}

impl<T: PartialEq + Clone + Display + Debug> Element for T {}

/// Element that can be added and subtracted element-wise.
pub trait Additive:
    Element +
    for<'r> Add<&'r Self, Output=Self> +
    for<'r> Sub<&'r Self, Output=Self>
{}

impl<T> Additive for T
where
    T: Element + for<'r> Add<&'r T, Output=T> + for<'r> Sub<&'r T, Output=T>,
{}

/// Element that can be used to compute a matrix product.
pub trait Ring:
    Additive +
    Zero +
    AddAssign +
    for<'r> Mul<&'r Self, Output=Self>
{}

impl<T> Ring for T
where
    T: Additive + Zero + AddAssign + for<'r> Mul<&'r T, Output=T>,
{}
