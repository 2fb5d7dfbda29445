//! Moments of monomials over boxes.
//!
//! The moment of `x_0^k_0 * ... * x_(n-1)^k_(n-1)` over
//! `[x_min[0], x_max[0]] x ... x [x_min[n-1], x_max[n-1]]` is
//!
//! ```text
//! ∏ᵢ (x_max[i]^(kᵢ+1) - x_min[i]^(kᵢ+1)) / (kᵢ + 1)
//! ```
//!
//! With zero dimensions the integrand is the empty product and the
//! moment is 1.

use monomoment_core::{ExprArena, ExprHandle};
use monomoment_integers::Rational;
use num_traits::One;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::bound::Bound;
use crate::error::{BoundSide, MomentError};
use crate::monomial::Monomial;
use crate::options::{MomentOptions, MomentStrategy};
use crate::power_rule::{definite_power, definite_power_exact, integrate_definite_monomial};

/// Checks that both bound vectors match the exponent vector and that every
/// exponent is supported.
fn validate(order: &[i64], lower: usize, upper: usize) -> Result<Monomial, MomentError> {
    let expected = order.len();
    for (side, found) in [(BoundSide::Lower, lower), (BoundSide::Upper, upper)] {
        if found != expected {
            return Err(MomentError::LengthMismatch {
                side,
                expected,
                found,
            });
        }
    }
    Monomial::from_order(order)
}

/// Computes moments into an expression arena.
///
/// ```ignore
/// let mut arena = ExprArena::new();
/// let mut calc = MomentCalculator::new(&mut arena);
/// let m = calc.compute(&[1, 2], &["a".into(), 0.into()], &["b".into(), 1.into()])?;
/// ```
pub struct MomentCalculator<'a> {
    arena: &'a mut ExprArena,
    options: MomentOptions,
}

impl<'a> MomentCalculator<'a> {
    /// Creates a calculator with default options.
    pub fn new(arena: &'a mut ExprArena) -> Self {
        Self::with_options(arena, MomentOptions::default())
    }

    /// Creates a calculator with custom options.
    pub fn with_options(arena: &'a mut ExprArena, options: MomentOptions) -> Self {
        Self { arena, options }
    }

    /// Returns the options in use.
    #[must_use]
    pub fn options(&self) -> &MomentOptions {
        &self.options
    }

    /// Computes the moment of the monomial with exponents `order` over the
    /// box `[x_min, x_max]`.
    ///
    /// Numeric bounds fold to a single `Number`; symbolic bounds stay free
    /// in the result.
    ///
    /// # Errors
    ///
    /// - [`MomentError::LengthMismatch`] if a bound vector's length differs
    ///   from `order.len()`
    /// - [`MomentError::UnsupportedExponent`] for negative exponents
    /// - [`MomentError::VariableCollision`] with the iterated strategy, if a
    ///   bound symbol is named like an integration variable
    pub fn compute(
        &mut self,
        order: &[i64],
        x_min: &[Bound],
        x_max: &[Bound],
    ) -> Result<ExprHandle, MomentError> {
        let monomial = validate(order, x_min.len(), x_max.len())?;
        debug!(
            dimensions = monomial.num_vars(),
            degree = monomial.total_degree(),
            strategy = ?self.options.strategy,
            "computing moment"
        );

        match self.options.strategy {
            MomentStrategy::Factored => Ok(self.factored(&monomial, x_min, x_max)),
            MomentStrategy::Iterated => self.iterated(&monomial, x_min, x_max),
        }
    }

    fn factored(&mut self, monomial: &Monomial, x_min: &[Bound], x_max: &[Bound]) -> ExprHandle {
        let mut factors: SmallVec<[ExprHandle; 4]> = SmallVec::with_capacity(monomial.num_vars());
        for (i, (&k, (lo, hi))) in monomial
            .exponents()
            .iter()
            .zip(x_min.iter().zip(x_max))
            .enumerate()
        {
            let lo = lo.to_expr(self.arena);
            let hi = hi.to_expr(self.arena);
            let factor = definite_power(self.arena, k, lo, hi);
            trace!(dimension = i, exponent = k, factor = %self.arena.display(factor), "integrated");
            factors.push(factor);
        }
        self.arena.mul(factors)
    }

    fn iterated(
        &mut self,
        monomial: &Monomial,
        x_min: &[Bound],
        x_max: &[Bound],
    ) -> Result<ExprHandle, MomentError> {
        let n = monomial.num_vars();
        let names: Vec<String> = (0..n).map(|i| self.options.variable_name(i)).collect();

        if let Some(name) = x_min
            .iter()
            .chain(x_max)
            .filter_map(Bound::as_symbol)
            .find(|s| names.iter().any(|v| v == s))
        {
            return Err(MomentError::VariableCollision {
                name: name.to_owned(),
            });
        }

        let mut integrand = monomial.to_expr(self.arena, |i| names[i].clone());
        trace!(integrand = %self.arena.display(integrand), "built monomial");

        for (i, (lo, hi)) in x_min.iter().zip(x_max).enumerate() {
            let var = self.arena.intern_symbol(&names[i]);
            let lo = lo.to_expr(self.arena);
            let hi = hi.to_expr(self.arena);
            integrand = integrate_definite_monomial(self.arena, integrand, var, lo, hi)?;
            trace!(variable = %names[i], partial = %self.arena.display(integrand), "integrated");
        }

        Ok(integrand)
    }
}

/// Computes a moment with default options.
///
/// # Errors
///
/// See [`MomentCalculator::compute`].
pub fn moment(
    arena: &mut ExprArena,
    order: &[i64],
    x_min: &[Bound],
    x_max: &[Bound],
) -> Result<ExprHandle, MomentError> {
    MomentCalculator::new(arena).compute(order, x_min, x_max)
}

/// Computes a moment with custom options.
///
/// # Errors
///
/// See [`MomentCalculator::compute`].
pub fn moment_with_options(
    arena: &mut ExprArena,
    order: &[i64],
    x_min: &[Bound],
    x_max: &[Bound],
    options: MomentOptions,
) -> Result<ExprHandle, MomentError> {
    MomentCalculator::with_options(arena, options).compute(order, x_min, x_max)
}

/// Computes a moment over numeric bounds, without an arena.
///
/// # Errors
///
/// Returns [`MomentError::LengthMismatch`] or
/// [`MomentError::UnsupportedExponent`] as [`MomentCalculator::compute`].
pub fn moment_exact(
    order: &[i64],
    x_min: &[Rational],
    x_max: &[Rational],
) -> Result<Rational, MomentError> {
    let monomial = validate(order, x_min.len(), x_max.len())?;
    debug!(dimensions = monomial.num_vars(), "computing exact moment");

    let mut product = Rational::one();
    for ((&k, lo), hi) in monomial.exponents().iter().zip(x_min).zip(x_max) {
        product = product * definite_power_exact(k, lo, hi);
    }
    Ok(product)
}

/// Computes a moment over `f64` bounds.
///
/// Each bound is converted to the rational it represents exactly, the
/// moment is computed exactly and rounded once at the end.
///
/// # Errors
///
/// Returns [`MomentError::NonFiniteBound`] for NaN or infinite bounds,
/// otherwise as [`moment_exact`].
pub fn moment_f64(order: &[i64], x_min: &[f64], x_max: &[f64]) -> Result<f64, MomentError> {
    validate(order, x_min.len(), x_max.len())?;

    let convert = |side: BoundSide, values: &[f64]| -> Result<Vec<Rational>, MomentError> {
        values
            .iter()
            .enumerate()
            .map(|(dimension, &value)| {
                Rational::try_from_f64(value).ok_or(MomentError::NonFiniteBound {
                    side,
                    dimension,
                    value,
                })
            })
            .collect()
    };
    let lo = convert(BoundSide::Lower, x_min)?;
    let hi = convert(BoundSide::Upper, x_max)?;

    moment_exact(order, &lo, &hi).map(|m| m.to_f64())
}

#[cfg(test)]
mod tests {
    use monomoment_core::Bindings;

    use super::*;

    fn q(n: i64, d: i64) -> Rational {
        Rational::from_i64(n, d)
    }

    fn nums(values: &[i64]) -> Vec<Bound> {
        values.iter().map(|&v| Bound::from(v)).collect()
    }

    fn iterated() -> MomentOptions {
        MomentOptions {
            strategy: MomentStrategy::Iterated,
            ..Default::default()
        }
    }

    #[test]
    fn test_unit_interval_linear() {
        assert_eq!(moment_f64(&[1], &[0.0], &[1.0]), Ok(0.5));
    }

    #[test]
    fn test_constant_integrand() {
        assert_eq!(moment_f64(&[0], &[2.0], &[5.0]), Ok(3.0));
    }

    #[test]
    fn test_empty_product() {
        assert_eq!(moment_exact(&[], &[], &[]), Ok(Rational::one()));
        assert_eq!(moment_f64(&[], &[], &[]), Ok(1.0));

        let mut arena = ExprArena::new();
        let m = moment(&mut arena, &[], &[], &[]).unwrap();
        assert!(arena.get(m).is_one());
    }

    #[test]
    fn test_length_mismatch() {
        assert_eq!(
            moment_f64(&[1, 2], &[0.0], &[1.0, 1.0]),
            Err(MomentError::LengthMismatch {
                side: BoundSide::Lower,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            moment_exact(&[1], &[q(0, 1)], &[]),
            Err(MomentError::LengthMismatch {
                side: BoundSide::Upper,
                expected: 1,
                found: 0
            })
        );
    }

    #[test]
    fn test_negative_exponent() {
        assert_eq!(
            moment_f64(&[-1], &[1.0], &[2.0]),
            Err(MomentError::UnsupportedExponent {
                dimension: 0,
                exponent: -1
            })
        );
    }

    #[test]
    fn test_non_finite_bound() {
        assert_eq!(
            moment_f64(&[1], &[0.0], &[f64::INFINITY]),
            Err(MomentError::NonFiniteBound {
                side: BoundSide::Upper,
                dimension: 0,
                value: f64::INFINITY
            })
        );
        assert!(moment_f64(&[1], &[f64::NAN], &[1.0]).is_err());
    }

    #[test]
    fn test_two_dimensional_exact() {
        // ∫₀¹∫₀² x y² dy dx = 1/2 * 8/3
        let m = moment_exact(&[1, 2], &[q(0, 1), q(0, 1)], &[q(1, 1), q(2, 1)]).unwrap();
        assert_eq!(m, q(4, 3));
    }

    #[test]
    fn test_numeric_bounds_fold() {
        let mut arena = ExprArena::new();
        let m = moment(&mut arena, &[1, 2], &nums(&[0, 0]), &nums(&[1, 2])).unwrap();
        assert_eq!(arena.as_number(m), Some(&q(4, 3)));
    }

    #[test]
    fn test_symbolic_bounds() {
        let mut arena = ExprArena::new();
        let m = moment(
            &mut arena,
            &[2],
            &[Bound::symbol("a")],
            &[Bound::symbol("b")],
        )
        .unwrap();
        assert_eq!(arena.display(m).to_string(), "(b^3 - a^3)/3");
        assert_eq!(arena.free_symbols(m), vec!["a".to_owned(), "b".to_owned()]);
    }

    #[test]
    fn test_mixed_bounds_evaluate() {
        let mut arena = ExprArena::new();
        let m = moment(
            &mut arena,
            &[1, 0],
            &[Bound::from(0), Bound::symbol("c")],
            &[Bound::symbol("b"), Bound::from(4)],
        )
        .unwrap();

        let mut bindings = Bindings::new();
        bindings.insert("b".to_owned(), q(2, 1));
        bindings.insert("c".to_owned(), q(1, 1));
        // (2²/2) * (4 - 1)
        assert_eq!(arena.evaluate(m, &bindings), Ok(q(6, 1)));
    }

    #[test]
    fn test_degenerate_symbolic_interval() {
        let mut arena = ExprArena::new();
        let c = Bound::symbol("c");
        let m = moment(&mut arena, &[3], &[c.clone()], &[c]).unwrap();
        assert!(arena.get(m).is_zero());
    }

    #[test]
    fn test_iterated_matches_factored() {
        let x_min = [Bound::symbol("a"), Bound::from(0), Bound::symbol("e")];
        let x_max = [Bound::symbol("b"), Bound::from(3), Bound::from(1)];
        let order = [2, 1, 3];

        let mut arena = ExprArena::new();
        let factored = moment(&mut arena, &order, &x_min, &x_max).unwrap();
        let iterated = moment_with_options(&mut arena, &order, &x_min, &x_max, iterated()).unwrap();

        assert_eq!(factored, iterated);
    }

    #[test]
    fn test_variable_collision() {
        let mut arena = ExprArena::new();
        let err = moment_with_options(
            &mut arena,
            &[1, 1],
            &[Bound::from(0), Bound::from(0)],
            &[Bound::symbol("x_0"), Bound::from(1)],
            iterated(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            MomentError::VariableCollision {
                name: "x_0".to_owned()
            }
        );

        // Factored never names the integration variables.
        let ok = moment(
            &mut arena,
            &[1, 1],
            &[Bound::from(0), Bound::from(0)],
            &[Bound::symbol("x_0"), Bound::from(1)],
        );
        assert!(ok.is_ok());
    }

    #[test]
    fn test_failure_interns_nothing() {
        let mut arena = ExprArena::new();
        let result = moment(&mut arena, &[1, -2], &nums(&[0, 0]), &nums(&[1, 1]));
        assert!(result.is_err());
        assert!(arena.is_empty());
    }

    #[test]
    fn test_large_exponent_is_exact() {
        // ∫₀² x⁹⁹ dx = 2¹⁰⁰ / 100
        let m = moment_exact(&[99], &[q(0, 1)], &[q(2, 1)]).unwrap();
        assert_eq!(m, Rational::from(monomoment_integers::Integer::new(2).pow(100)) * q(1, 100));
    }
}
