//! Moment computation for Monomoment.
//!
//! This crate computes the definite integral of a monomial
//! `x_0^k_0 * ... * x_(n-1)^k_(n-1)` over a box
//! `[x_min[0], x_max[0]] x ... x [x_min[n-1], x_max[n-1]]`.
//!
//! # Quick Start
//!
//! ```ignore
//! use monomoment_core::ExprArena;
//! use monomoment_integrate::{moment, moment_f64, Bound};
//!
//! // Numeric: ∫₀¹ x dx = 1/2
//! let half = moment_f64(&[1], &[0.0], &[1.0])?;
//!
//! // Symbolic: ∫ₐᵇ x² dx = (b³ - a³)/3
//! let mut arena = ExprArena::new();
//! let m = moment(&mut arena, &[2], &[Bound::symbol("a")], &[Bound::symbol("b")])?;
//! println!("{}", arena.display(m));
//! ```
//!
//! # Method
//!
//! The integrand separates into single-variable powers and the domain is a
//! box, so the n-dimensional integral is the product of n one-dimensional
//! integrals, each given by the power rule:
//!
//! ```text
//! ∫ₐᵇ xᵏ dx = (bᵏ⁺¹ - aᵏ⁺¹) / (k + 1)
//! ```
//!
//! [`MomentStrategy::Iterated`] instead integrates the full monomial one
//! variable at a time and is kept as an independent cross-check.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bound;
pub mod error;
pub mod moment;
pub mod monomial;
pub mod options;
pub mod power_rule;

#[cfg(test)]
mod proptests;

pub use bound::Bound;
pub use error::{BoundSide, MomentError};
pub use moment::{moment, moment_exact, moment_f64, moment_with_options, MomentCalculator};
pub use monomial::Monomial;
pub use options::{MomentOptions, MomentStrategy};
pub use power_rule::{definite_power, definite_power_exact, integrate_definite_monomial, integrate_power};
