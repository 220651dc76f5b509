//! Error types for operator domain faults.

use thiserror::Error;

use crate::Scalar;

/// A domain fault raised by a scalar operator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OpError {
    /// The operator divided by an input equal to zero.
    #[error("{op}: division by zero")]
    DivisionByZero {
        /// Name of the faulting operator.
        op: &'static str,
    },

    /// The input lies outside the operator's domain.
    #[error("{op}: input {x} is outside the domain")]
    Domain {
        /// Name of the faulting operator.
        op: &'static str,
        /// The offending input.
        x: Scalar,
    },
}

impl OpError {
    /// Name of the operator that raised this fault.
    #[must_use]
    pub fn op(&self) -> &'static str {
        match self {
            Self::DivisionByZero { op } | Self::Domain { op, .. } => op,
        }
    }

    /// Logs the fault and panics with its message.
    pub(crate) fn raise(self) -> ! {
        log::error!("{self}");
        panic!("{self}");
    }
}

/// Result alias for checked operators.
pub type Result<T> = core::result::Result<T, OpError>;
