//! Monomials with an explicit exponent vector.
//!
//! A monomial `x_0^k_0 * x_1^k_1 * ... * x_(n-1)^k_(n-1)` is stored as its
//! exponent vector. Unlike bit-packed layouts this places no limit on the
//! number of variables, which is the box dimension here.

use std::fmt;

use monomoment_core::{ExprArena, ExprHandle};
use monomoment_integers::Rational;
use smallvec::SmallVec;

use crate::error::MomentError;
use crate::power_rule::integrate_power;

/// Largest exponent accepted; keeps `k + 1` representable.
pub const MAX_EXPONENT: u32 = u32::MAX - 1;

/// A monomial in `num_vars` variables.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Monomial(SmallVec<[u32; 4]>);

impl Monomial {
    /// Creates a monomial from exponents.
    #[must_use]
    pub fn from_exponents(exps: &[u32]) -> Self {
        Self(SmallVec::from_slice(exps))
    }

    /// Creates a monomial from signed exponents, rejecting any that are
    /// negative or above [`MAX_EXPONENT`].
    ///
    /// # Errors
    ///
    /// Returns [`MomentError::UnsupportedExponent`] naming the first
    /// offending dimension.
    pub fn from_order(order: &[i64]) -> Result<Self, MomentError> {
        order
            .iter()
            .enumerate()
            .map(|(dimension, &exponent)| {
                u32::try_from(exponent)
                    .ok()
                    .filter(|&k| k <= MAX_EXPONENT)
                    .ok_or(MomentError::UnsupportedExponent { dimension, exponent })
            })
            .collect::<Result<SmallVec<_>, _>>()
            .map(Self)
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.0.len()
    }

    /// Returns the exponent of variable `i` (zero past the last variable).
    #[must_use]
    pub fn exponent(&self, i: usize) -> u32 {
        self.0.get(i).copied().unwrap_or(0)
    }

    /// Returns all exponents.
    #[must_use]
    pub fn exponents(&self) -> &[u32] {
        &self.0
    }

    /// Computes the total degree.
    #[must_use]
    pub fn total_degree(&self) -> u64 {
        self.0.iter().map(|&e| u64::from(e)).sum()
    }

    /// Integrates with respect to variable `i`.
    ///
    /// Returns the antiderivative monomial and its coefficient, or `None` if
    /// `i` is out of range or the exponent would overflow.
    #[must_use]
    pub fn antiderivative(&self, i: usize) -> Option<(Self, Rational)> {
        let (next, coeff) = integrate_power(*self.0.get(i)?)?;
        let mut exps = self.0.clone();
        exps[i] = next;
        Some((Self(exps), coeff))
    }

    /// Builds the monomial as an expression, naming variable `i` with
    /// `name(i)`.
    pub fn to_expr(&self, arena: &mut ExprArena, name: impl Fn(usize) -> String) -> ExprHandle {
        let factors: SmallVec<[ExprHandle; 4]> = self
            .0
            .iter()
            .enumerate()
            .map(|(i, &e)| {
                let x = arena.symbol(&name(i));
                arena.pow(x, e)
            })
            .collect();
        arena.mul(factors)
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (i, &e) in self.0.iter().enumerate() {
            if e == 0 {
                continue;
            }
            if !first {
                f.write_str("*")?;
            }
            first = false;
            match e {
                1 => write!(f, "x_{i}")?,
                _ => write!(f, "x_{i}^{e}")?,
            }
        }
        if first {
            f.write_str("1")?;
        }
        Ok(())
    }
}
