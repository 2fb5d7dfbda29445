//! Integration bounds.

use std::fmt;

use monomoment_core::{ExprArena, ExprHandle};
use monomoment_integers::Rational;

/// One integration limit: an exact number or a named parameter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Bound {
    /// An exact rational value.
    Number(Rational),
    /// A symbolic parameter left free in the result.
    Symbol(String),
}

impl Bound {
    /// Creates a symbolic bound.
    #[must_use]
    pub fn symbol(name: impl Into<String>) -> Self {
        Bound::Symbol(name.into())
    }

    /// Creates a numeric bound holding the exact value of `value`.
    ///
    /// Returns `None` for NaN and infinities.
    #[must_use]
    pub fn try_from_f64(value: f64) -> Option<Self> {
        Rational::try_from_f64(value).map(Bound::Number)
    }

    /// Returns the value if the bound is numeric.
    #[must_use]
    pub fn as_number(&self) -> Option<&Rational> {
        match self {
            Bound::Number(r) => Some(r),
            Bound::Symbol(_) => None,
        }
    }

    /// Returns the name if the bound is symbolic.
    #[must_use]
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Bound::Number(_) => None,
            Bound::Symbol(name) => Some(name),
        }
    }

    /// Interns the bound as an expression.
    pub fn to_expr(&self, arena: &mut ExprArena) -> ExprHandle {
        match self {
            Bound::Number(r) => arena.number(r.clone()),
            Bound::Symbol(name) => arena.symbol(name),
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Number(r) => write!(f, "{r}"),
            Bound::Symbol(name) => f.write_str(name),
        }
    }
}

impl From<Rational> for Bound {
    fn from(value: Rational) -> Self {
        Bound::Number(value)
    }
}

impl From<i64> for Bound {
    fn from(value: i64) -> Self {
        Bound::Number(Rational::from(value))
    }
}

impl From<i32> for Bound {
    fn from(value: i32) -> Self {
        Bound::Number(Rational::from(value))
    }
}

impl From<&str> for Bound {
    fn from(name: &str) -> Self {
        Bound::symbol(name)
    }
}

impl From<String> for Bound {
    fn from(name: String) -> Self {
        Bound::Symbol(name)
    }
}
