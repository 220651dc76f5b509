//! Small higher-order functions over sequences.
//!
//! All three consume their input once, so any finite `IntoIterator` works,
//! not just slices. Results are freshly allocated `Vec`s.

/// Applies `f` to every element of `seq`, preserving order and length.
///
/// # Example
/// ```
/// use briny_ops::{functional::map, scalar::neg};
/// assert_eq!(map([1.0, 2.0, 3.0], neg), vec![-1.0, -2.0, -3.0]);
/// ```
pub fn map<I, U, F>(seq: I, f: F) -> Vec<U>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> U,
{
    seq.into_iter().map(f).collect()
}

/// Combines `seq1` and `seq2` element-wise with `f`.
///
/// Stops at the end of the shorter sequence; the rest of the longer one is
/// silently dropped.
///
/// # Example
/// ```
/// use briny_ops::{functional::zip_with, scalar::add};
/// assert_eq!(zip_with([1.0, 2.0, 3.0], [4.0, 5.0], add), vec![5.0, 7.0]);
/// ```
pub fn zip_with<A, B, U, F>(seq1: A, seq2: B, mut f: F) -> Vec<U>
where
    A: IntoIterator,
    B: IntoIterator,
    F: FnMut(A::Item, B::Item) -> U,
{
    seq1.into_iter()
        .zip(seq2)
        .map(|(a, b)| f(a, b))
        .collect()
}

/// Folds `seq` left to right, seeded by its first element.
///
/// An empty sequence yields `T::default()` (`0.0` for scalars) whatever `f`
/// is, so the product of an empty sequence is `0.0`, not `1.0`.
///
/// # Example
/// ```
/// use briny_ops::{functional::reduce, scalar::mul};
/// assert_eq!(reduce([2.0, 3.0, 4.0], mul), 24.0);
/// assert_eq!(reduce(Vec::<f64>::new(), mul), 0.0);
/// ```
pub fn reduce<I, F>(seq: I, f: F) -> I::Item
where
    I: IntoIterator,
    I::Item: Default,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    seq.into_iter().reduce(f).unwrap_or_default()
}
