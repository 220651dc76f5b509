//! List utilities built from [`functional`](crate::functional).
//!
//! Generic over the element type, so they work for [`Scalar`](crate::Scalar)
//! as well as integers or any `Copy` type implementing the needed operator.

use core::ops::{Add, Mul, Neg};

use crate::functional::{map, reduce, zip_with};

/// Negates every element.
#[must_use]
pub fn neg_list<T>(l: &[T]) -> Vec<T>
where
    T: Neg<Output = T> + Copy,
{
    map(l.iter().copied(), Neg::neg)
}

/// Adds two lists element-wise, truncating to the shorter one.
#[must_use]
pub fn add_lists<T>(l1: &[T], l2: &[T]) -> Vec<T>
where
    T: Add<Output = T> + Copy,
{
    zip_with(l1.iter().copied(), l2.iter().copied(), Add::add)
}

/// Sums a list. The empty sum is `T::default()`.
#[must_use]
pub fn sum<T>(l: &[T]) -> T
where
    T: Add<Output = T> + Default + Copy,
{
    reduce(l.iter().copied(), Add::add)
}

/// Multiplies a list together.
///
/// Shares [`reduce`]'s empty default, so `prod::<f64>(&[]) == 0.0`.
#[must_use]
pub fn prod<T>(l: &[T]) -> T
where
    T: Mul<Output = T> + Default + Copy,
{
    reduce(l.iter().copied(), Mul::mul)
}
