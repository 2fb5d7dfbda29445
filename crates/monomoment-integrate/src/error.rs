//! Errors raised by moment computation.

use std::fmt;

use thiserror::Error;

/// Which of the two bound vectors an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoundSide {
    /// The lower bounds, `x_min`.
    Lower,
    /// The upper bounds, `x_max`.
    Upper,
}

impl fmt::Display for BoundSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundSide::Lower => f.write_str("x_min"),
            BoundSide::Upper => f.write_str("x_max"),
        }
    }
}

/// Errors that can occur while computing a moment.
///
/// All checks run before any result is built, so an error never leaves a
/// partial result behind.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum MomentError {
    /// A bound vector does not have one entry per exponent.
    #[error("{side} has {found} entries but the exponent vector has {expected}")]
    LengthMismatch {
        /// The offending bound vector.
        side: BoundSide,
        /// Length of the exponent vector.
        expected: usize,
        /// Length of the bound vector.
        found: usize,
    },

    /// An exponent is negative or too large for the power rule.
    #[error("exponent {exponent} in dimension {dimension} is unsupported")]
    UnsupportedExponent {
        /// Index of the offending dimension.
        dimension: usize,
        /// The exponent as given.
        exponent: i64,
    },

    /// A floating-point bound is NaN or infinite.
    #[error("{side}[{dimension}] is not finite: {value}")]
    NonFiniteBound {
        /// The bound vector holding the value.
        side: BoundSide,
        /// Index of the offending dimension.
        dimension: usize,
        /// The value as given.
        value: f64,
    },

    /// A bound symbol has the same name as an integration variable.
    #[error("bound symbol `{name}` collides with an integration variable")]
    VariableCollision {
        /// The shared name.
        name: String,
    },

    /// The integrand is not a product of a power of the variable and
    /// factors free of it.
    #[error("integrand is not a power product in `{variable}`")]
    NotPowerProduct {
        /// Name of the integration variable.
        variable: String,
    },
}
