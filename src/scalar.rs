//! Scalar primitives.
//!
//! Arithmetic, comparison, activation and transcendental functions over
//! [`Scalar`]. Comparisons return `1.0` / `0.0` rather than `bool` so their
//! results can flow straight back into arithmetic.
//!
//! ## Domain faults
//!
//! [`inv`] and [`log`] are undefined for some inputs. The unchecked versions
//! panic there; the `try_*` versions return the fault as an [`OpError`].

use crate::{OpError, Result, Scalar};

/// Shift added to the input of [`log`] so that `log(0.0)` is finite.
pub const EPS: Scalar = 1e-6;

/// Absolute tolerance used by [`is_close`].
pub const CLOSE_TOLERANCE: Scalar = 1e-2;

/// `$f(x, y) = x * y$`
#[inline]
#[must_use]
pub fn mul(x: Scalar, y: Scalar) -> Scalar {
    x * y
}

/// `$f(x) = x$`
#[inline]
#[must_use]
pub fn id(x: Scalar) -> Scalar {
    x
}

/// `$f(x, y) = x + y$`
#[inline]
#[must_use]
pub fn add(x: Scalar, y: Scalar) -> Scalar {
    x + y
}

/// `$f(x) = -x$`
#[inline]
#[must_use]
pub fn neg(x: Scalar) -> Scalar {
    -x
}

/// `1.0` if `x < y`, else `0.0`.
#[inline]
#[must_use]
pub fn lt(x: Scalar, y: Scalar) -> Scalar {
    if x < y { 1.0 } else { 0.0 }
}

/// `1.0` if `x == y` exactly, else `0.0`.
#[inline]
#[must_use]
pub fn eq(x: Scalar, y: Scalar) -> Scalar {
    if x == y { 1.0 } else { 0.0 }
}

/// `x` if `x > y`, else `y`. Ties resolve to `y`.
#[inline]
#[must_use]
pub fn max(x: Scalar, y: Scalar) -> Scalar {
    if x > y { x } else { y }
}

/// Returns `true` if `|x - y| < 1e-2`.
///
/// The tolerance is absolute, so it is too loose for tiny magnitudes and too
/// strict for huge ones.
#[inline]
#[must_use]
pub fn is_close(x: Scalar, y: Scalar) -> bool {
    (x - y).abs() < CLOSE_TOLERANCE
}

/// Logistic sigmoid: `$f(x) = \frac{1}{1 + e^{-x}}$`.
///
/// Evaluated as `1 / (1 + e^{-x})` for `x >= 0` and as `e^x / (1 + e^x)` for
/// `x < 0`, so the exponent handed to `exp` is never positive and cannot
/// overflow.
///
/// # Example
/// ```
/// use briny_ops::scalar::sigmoid;
/// assert_eq!(sigmoid(0.0), 0.5);
/// assert!(sigmoid(-1000.0) >= 0.0);
/// ```
#[must_use]
pub fn sigmoid(x: Scalar) -> Scalar {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// Rectified linear unit: `x` if `x > 0`, else `0`.
#[inline]
#[must_use]
pub fn relu(x: Scalar) -> Scalar {
    if x > 0.0 { x } else { 0.0 }
}

/// `$f(x) = e^x$`
#[inline]
#[must_use]
pub fn exp(x: Scalar) -> Scalar {
    x.exp()
}

/// `$f(x) = \ln(x + \epsilon)$` with `$\epsilon$` = [`EPS`].
///
/// The shift keeps `log(0.0)` finite and biases every other input slightly.
///
/// # Panics
/// Panics with [`OpError::Domain`] if `x + EPS <= 0`. Use [`try_log`] to get
/// the fault as a value.
#[must_use]
pub fn log(x: Scalar) -> Scalar {
    try_log(x).unwrap_or_else(|err| err.raise())
}

/// Checked [`log`].
///
/// # Errors
/// Returns [`OpError::Domain`] if `x + EPS <= 0`.
pub fn try_log(x: Scalar) -> Result<Scalar> {
    let shifted = x + EPS;
    if shifted <= 0.0 {
        return Err(OpError::Domain { op: "log", x });
    }
    Ok(shifted.ln())
}

/// `$f(x) = 1 / x$`
///
/// # Panics
/// Panics with [`OpError::DivisionByZero`] if `x == 0`.
#[must_use]
pub fn inv(x: Scalar) -> Scalar {
    try_inv(x).unwrap_or_else(|err| err.raise())
}

/// Checked [`inv`].
///
/// # Errors
/// Returns [`OpError::DivisionByZero`] if `x == 0`.
pub fn try_inv(x: Scalar) -> Result<Scalar> {
    if x == 0.0 {
        return Err(OpError::DivisionByZero { op: "inv" });
    }
    Ok(1.0 / x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparisons_encode_as_floats() {
        assert_eq!(lt(1.0, 2.0), 1.0);
        assert_eq!(lt(2.0, 2.0), 0.0);
        assert_eq!(eq(2.0, 2.0), 1.0);
        assert_eq!(eq(2.0, 2.0 + 1e-12), 0.0);
    }

    #[test]
    fn max_ties_resolve_to_second_argument() {
        assert_eq!(max(3.0, 1.0), 3.0);
        assert_eq!(max(1.0, 3.0), 3.0);
        // 0.0 == -0.0, so the tie picks y
        assert!(max(0.0, -0.0).is_sign_negative());
    }

    #[test]
    fn is_close_boundary() {
        assert!(is_close(1.0, 1.005));
        assert!(!is_close(1.0, 1.02));
        assert!(!is_close(0.0, CLOSE_TOLERANCE));
    }

    #[test]
    fn sigmoid_branches() {
        assert_eq!(sigmoid(0.0), 0.5);
        assert!((sigmoid(2.0) - 0.880_797_077_977_882_3).abs() < 1e-12);
        assert!((sigmoid(-2.0) - 0.119_202_922_022_117_6).abs() < 1e-12);
        assert_eq!(sigmoid(-800.0), 0.0);
        assert_eq!(sigmoid(800.0), 1.0);
        assert!(!sigmoid(-1e308).is_nan());
    }

    #[test]
    fn relu_is_strict_at_zero() {
        assert_eq!(relu(0.0), 0.0);
        assert_eq!(relu(-0.0), 0.0);
        assert!(relu(-0.0).is_sign_positive());
        assert_eq!(relu(2.5), 2.5);
        assert_eq!(relu(-2.5), 0.0);
    }

    #[test]
    fn log_applies_epsilon_shift() {
        assert_eq!(log(0.0), EPS.ln());
        assert_eq!(log(1.0), (1.0 + EPS).ln());
        assert!(log(0.0).is_finite());
    }

    #[test]
    fn try_log_rejects_shifted_nonpositive_inputs() {
        assert_eq!(try_log(-1.0), Err(OpError::Domain { op: "log", x: -1.0 }));
        assert!(try_log(-EPS).is_err());
        assert!(try_log(0.0).is_ok());
    }

    #[test]
    #[should_panic(expected = "inv: division by zero")]
    fn inv_panics_at_zero() {
        let _ = inv(0.0);
    }

    #[test]
    #[should_panic(expected = "inv: division by zero")]
    fn inv_panics_at_negative_zero() {
        let _ = inv(-0.0);
    }

    #[test]
    #[should_panic(expected = "log: input -1 is outside the domain")]
    fn log_panics_below_shifted_domain() {
        let _ = log(-1.0);
    }

    #[test]
    fn exp_reference_values() {
        assert_eq!(exp(0.0), 1.0);
        assert!((exp(1.0) - core::f64::consts::E).abs() < 1e-15);
        assert_eq!(exp(Scalar::NEG_INFINITY), 0.0);
        assert!((exp(-2.0) - 0.135_335_283_236_612_7).abs() < 1e-15);
    }

    #[test]
    fn try_inv_rejects_zero() {
        assert_eq!(try_inv(0.0), Err(OpError::DivisionByZero { op: "inv" }));
        assert_eq!(try_inv(-0.0), Err(OpError::DivisionByZero { op: "inv" }));
        assert_eq!(try_inv(4.0), Ok(0.25));
    }
}
