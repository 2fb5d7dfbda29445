//! The power rule for monomials.
//!
//! For a single variable,
//!
//! ∫ xᵏ dx = xᵏ⁺¹ / (k + 1)
//!
//! and the definite integral over [a, b] is (bᵏ⁺¹ - aᵏ⁺¹) / (k + 1).
//! Only non-negative integer k are handled; k = -1 would need a logarithm.

use monomoment_core::{ExprArena, ExprHandle, ExprNode, SymbolId};
use monomoment_integers::Rational;
use smallvec::SmallVec;

use crate::error::MomentError;

/// Applies the power rule to `x^k`.
///
/// Returns the exponent and coefficient of the antiderivative,
/// `(k + 1, 1/(k + 1))`, or `None` if `k + 1` overflows.
#[must_use]
pub fn integrate_power(k: u32) -> Option<(u32, Rational)> {
    let next = k.checked_add(1)?;
    Some((next, Rational::from(next).recip()))
}

/// Computes `∫ₐᵇ xᵏ dx` exactly.
///
/// # Panics
///
/// Panics if `k == u32::MAX`; callers validate exponents first.
#[must_use]
pub fn definite_power_exact(k: u32, lo: &Rational, hi: &Rational) -> Rational {
    let (next, coeff) = integrate_power(k).expect("exponent validated below u32::MAX");
    (hi.pow(next) - lo.pow(next)) * coeff
}

/// Builds `∫ₐᵇ xᵏ dx` as an expression.
///
/// Numeric bounds fold to a single literal; equal bounds fold to zero.
///
/// # Panics
///
/// Panics if `k == u32::MAX`; callers validate exponents first.
pub fn definite_power(arena: &mut ExprArena, k: u32, lo: ExprHandle, hi: ExprHandle) -> ExprHandle {
    let (next, coeff) = integrate_power(k).expect("exponent validated below u32::MAX");
    let upper = arena.pow(hi, next);
    let lower = arena.pow(lo, next);
    let diff = arena.sub(upper, lower);
    let c = arena.number(coeff);
    arena.mul(smallvec::smallvec![c, diff])
}

/// Integrates `integrand` with respect to `var` over `[lo, hi]`.
///
/// The integrand must be a product in which exactly one factor is `var`
/// or a power of `var` and all other factors are free of `var`; a
/// product with no such factor is treated as `var^0`. The antiderivative
/// replaces the dependent factor in place.
///
/// # Errors
///
/// Returns [`MomentError::NotPowerProduct`] for any other integrand shape.
pub fn integrate_definite_monomial(
    arena: &mut ExprArena,
    integrand: ExprHandle,
    var: SymbolId,
    lo: ExprHandle,
    hi: ExprHandle,
) -> Result<ExprHandle, MomentError> {
    if let ExprNode::Neg(inner) = *arena.get(integrand) {
        let result = integrate_definite_monomial(arena, inner, var, lo, hi)?;
        return Ok(arena.neg(result));
    }

    let mut factors: SmallVec<[ExprHandle; 4]> = match arena.get(integrand) {
        ExprNode::Mul(args) => args.clone(),
        _ => smallvec::smallvec![integrand],
    };

    let not_power_product = |arena: &ExprArena| MomentError::NotPowerProduct {
        variable: arena.symbol_name(var).unwrap_or_default().to_owned(),
    };

    let mut dependent: Option<(usize, u32)> = None;
    for (i, &factor) in factors.iter().enumerate() {
        if !arena.depends_on(factor, var) {
            continue;
        }
        let k = match arena.get(factor) {
            ExprNode::Symbol(_) => 1,
            ExprNode::Pow { base, exp } if matches!(arena.get(*base), ExprNode::Symbol(id) if *id == var) => *exp,
            _ => return Err(not_power_product(arena)),
        };
        if dependent.replace((i, k)).is_some() {
            return Err(not_power_product(arena));
        }
    }

    match dependent {
        Some((i, k)) => {
            if k == u32::MAX {
                return Err(not_power_product(arena));
            }
            factors[i] = definite_power(arena, k, lo, hi);
        }
        None => factors.push(definite_power(arena, 0, lo, hi)),
    }

    Ok(arena.mul(factors))
}
