//! briny_ops: scalar operators and derivative helpers for autodiff in Rust.
//!
//! The primitive layer underneath an automatic-differentiation engine: plain
//! functions over a single float type, with no tensors and no graph.
//!
//! # Features
//!
//! - Arithmetic, comparison and activation primitives, including a
//!   numerically stable sigmoid.
//! - Backward helpers (`*_back`) computing each primitive's chain-rule term.
//! - Generic `map` / `zip_with` / `reduce` and list utilities built on them.
//! - Checked `try_*` operators for the points where the math is undefined;
//!   the unchecked ones panic there.
//!
//! # Modules
//!
//! - [`scalar`] - Forward primitives.
//! - [`backprop`] - Backward helpers and forward/backward pairs.
//! - [`functional`] - Higher-order functions over sequences.
//! - [`lists`] - `neg_list`, `add_lists`, `sum`, `prod`.
//! - [`error`] - The [`OpError`] domain fault.
//!
//! # Example
//!
//! ```rust
//! use briny_ops::{backprop::inv_back, lists::sum, scalar::sigmoid};
//!
//! assert_eq!(sigmoid(0.0), 0.5);
//! assert_eq!(inv_back(2.0, 1.0), -0.25);
//! assert_eq!(sum(&[1.0, 2.0, 3.0]), 6.0);
//! ```

pub mod backprop;
pub mod error;
pub mod functional;
pub mod lists;
pub mod scalar;

pub use error::{OpError, Result};

/// The float every operator works in (`f64`).
pub type Scalar = f64;
