//! # Monomoment
//!
//! Exact moments of monomials over axis-aligned boxes.
//!
//! The moment of `x_0^k_0 * ... * x_(n-1)^k_(n-1)` over the box
//! `[x_min[0], x_max[0]] x ... x [x_min[n-1], x_max[n-1]]` is computed in
//! closed form. Numeric bounds give exact rationals; symbolic bounds give
//! a small expression in the bound parameters.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use monomoment::prelude::*;
//!
//! // ∫₀¹ x dx
//! assert_eq!(moment_f64(&[1], &[0.0], &[1.0])?, 0.5);
//!
//! // ∫ₐᵇ∫₀¹ x² y dy dx = (b³ - a³)/6
//! let mut arena = ExprArena::new();
//! let m = moment(&mut arena, &[2, 1], &["a".into(), 0.into()], &["b".into(), 1.into()])?;
//! println!("{}", arena.display(m));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use monomoment_core as core;
pub use monomoment_integers as integers;
pub use monomoment_integrate as integrate;

pub use monomoment_integrate::{moment, moment_exact, moment_f64, moment_with_options};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use monomoment_core::{Bindings, EvalError, ExprArena, ExprHandle, ExprNode};
    pub use monomoment_integers::{Integer, Rational};
    pub use monomoment_integrate::{
        moment, moment_exact, moment_f64, moment_with_options, Bound, BoundSide, MomentCalculator,
        MomentError, MomentOptions, MomentStrategy, Monomial,
    };
}
