//! Errors raised while working with expressions.

use thiserror::Error;

/// Errors that can occur while evaluating an expression.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A symbol in the expression has no value in the bindings.
    #[error("no value bound for symbol `{0}`")]
    UnboundSymbol(String),
}
