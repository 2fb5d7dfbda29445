//! # monomoment-core
//!
//! Expression engine for symbolic moment results.
//!
//! This crate provides:
//! - Arena-allocated expression storage with hash-consing
//! - Type-safe expression handles
//! - Folding constructors that keep numeric sub-terms collapsed
//! - Evaluation, substitution and printing of expressions
//!
//! ## Design Principles
//!
//! - **Hash-Consing**: every structurally unique expression is stored once,
//!   so handle equality is structural equality
//! - **Exact Numbers**: numeric leaves are arbitrary precision rationals
//! - **Zero-Cost Handles**: 32-bit indices instead of pointers

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arena;
pub mod display;
pub mod error;
pub mod eval;
pub mod expr;
pub mod handle;
pub mod intern;

#[cfg(test)]
mod proptests;

pub use arena::ExprArena;
pub use error::EvalError;
pub use eval::Bindings;
pub use expr::{ExprNode, SymbolId};
pub use handle::ExprHandle;
