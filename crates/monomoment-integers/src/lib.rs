//! # monomoment-integers
//!
//! Arbitrary precision integer and rational arithmetic for Monomoment.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Arbitrary precision rationals (`Rational`), always in lowest terms
//!
//! Moments of high-degree monomials overflow machine words quickly
//! (`b^(k+1)` for modest `b` and `k`), so every exact result is carried
//! in these types and only rounded to `f64` on request.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod ops;

pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use rational::Rational;
