//! Derivative helpers for reverse-mode differentiation.
//!
//! # Backward Helpers
//!
//! Each `*_back` function takes the forward input `x` and the upstream
//! derivative `d` and returns `d * f'(x)` for its primitive. They are the
//! building blocks a backward pass calls once it has recorded `x` during the
//! forward pass.
//!
//! ## Forward/Backward Pairs
//!
//! [`add`], [`mul`], [`relu`], [`log`] and [`inv`] follow the usual autograd pattern:
//! 1. **Forward Pass** computes the output scalar.
//! 2. **Backward Pass** is returned as a closure capturing only the forward inputs.
//!
//! The closures implement `Fn`, so they can be called more than once. Nothing
//! is accumulated; the caller decides what to do with the returned derivatives.

use crate::{OpError, Result, Scalar, scalar};

/// If `$f = \log$`, computes `$d \times f'(x)$` as `d / x`.
///
/// This is `1 / x`, not the `1 / (x + EPS)` that exactly matches the shifted
/// forward [`scalar::log`]. The two differ by a relative `EPS / x`, which is
/// negligible except for inputs close to zero.
///
/// # Panics
/// Panics with [`OpError::DivisionByZero`] if `x == 0`.
#[must_use]
pub fn log_back(x: Scalar, d: Scalar) -> Scalar {
    try_log_back(x, d).unwrap_or_else(|err| err.raise())
}

/// Checked [`log_back`].
///
/// # Errors
/// Returns [`OpError::DivisionByZero`] if `x == 0`.
pub fn try_log_back(x: Scalar, d: Scalar) -> Result<Scalar> {
    if x == 0.0 {
        return Err(OpError::DivisionByZero { op: "log_back" });
    }
    Ok(d / x)
}

/// If `$f(x) = 1/x$`, computes `$d \times f'(x) = -d / x^2$`.
///
/// # Panics
/// Panics with [`OpError::DivisionByZero`] if `x == 0`.
#[must_use]
pub fn inv_back(x: Scalar, d: Scalar) -> Scalar {
    try_inv_back(x, d).unwrap_or_else(|err| err.raise())
}

/// Checked [`inv_back`].
///
/// # Errors
/// Returns [`OpError::DivisionByZero`] if `x == 0`.
pub fn try_inv_back(x: Scalar, d: Scalar) -> Result<Scalar> {
    if x == 0.0 {
        return Err(OpError::DivisionByZero { op: "inv_back" });
    }
    Ok(-d / (x * x))
}

/// If `$f = \text{relu}$`, computes `$d \times f'(x)$`.
///
/// Returns `0` for `x < 0` and `d` otherwise. At `x == 0` the sub-gradient
/// taken is `1`, even though [`scalar::relu`] itself maps `0` to `0`.
#[inline]
#[must_use]
pub fn relu_back(x: Scalar, d: Scalar) -> Scalar {
    if x < 0.0 { 0.0 } else { d }
}

/// Computes `x + y`, with a backward pass mapping `d` to `(d, d)`.
///
/// # Example
/// ```
/// let (y, back) = briny_ops::backprop::add(2.0, 3.0);
/// assert_eq!(y, 5.0);
/// assert_eq!(back(1.0), (1.0, 1.0));
/// ```
#[must_use]
pub fn add(x: Scalar, y: Scalar) -> (Scalar, impl Fn(Scalar) -> (Scalar, Scalar)) {
    let out = scalar::add(x, y);
    let back = move |d: Scalar| (d, d);
    (out, back)
}

/// Computes `x * y`, with a backward pass mapping `d` to `(d * y, d * x)`.
#[must_use]
pub fn mul(x: Scalar, y: Scalar) -> (Scalar, impl Fn(Scalar) -> (Scalar, Scalar)) {
    let out = scalar::mul(x, y);
    let back = move |d: Scalar| (scalar::mul(d, y), scalar::mul(d, x));
    (out, back)
}

/// Applies [`scalar::relu`], with a backward pass through [`relu_back`].
#[must_use]
pub fn relu(x: Scalar) -> (Scalar, impl Fn(Scalar) -> Scalar) {
    (scalar::relu(x), move |d: Scalar| relu_back(x, d))
}

/// Applies [`scalar::log`], with a backward pass through [`log_back`].
///
/// # Example
/// ```
/// let (y, back) = briny_ops::backprop::log(2.0);
/// assert!((y - 2.0_f64.ln()).abs() < 1e-6);
/// assert_eq!(back(1.0), 0.5);
/// ```
///
/// # Panics
/// The forward pass panics like [`scalar::log`], the backward pass like [`log_back`].
#[must_use]
pub fn log(x: Scalar) -> (Scalar, impl Fn(Scalar) -> Scalar) {
    (scalar::log(x), move |d: Scalar| log_back(x, d))
}

/// Applies [`scalar::inv`], with a backward pass through [`inv_back`].
///
/// # Panics
/// Panics like [`scalar::inv`] if `x == 0`.
#[must_use]
pub fn inv(x: Scalar) -> (Scalar, impl Fn(Scalar) -> Scalar) {
    (scalar::inv(x), move |d: Scalar| inv_back(x, d))
}
