//! Expression node types.

use monomoment_integers::Rational;
use num_traits::{One, Zero};
use smallvec::SmallVec;

use crate::handle::ExprHandle;

/// Unique identifier for a symbol within one arena.
pub type SymbolId = u32;

/// Argument list of a sum or product.
pub type Args = SmallVec<[ExprHandle; 4]>;

/// An expression node stored in the arena.
///
/// Nodes built through the arena constructors are kept in a folded form:
/// sums and products have at least two arguments and are never nested in a
/// node of the same kind, a product carries at most one numeric factor (in
/// first position), a sum at most one numeric term (in last position), and
/// powers have an exponent of at least 2 and a non-numeric base.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExprNode {
    /// An exact rational literal.
    Number(Rational),

    /// A named symbol (an integration variable or a bound parameter).
    Symbol(SymbolId),

    /// Sum of expressions: a + b + c + ...
    Add(Args),

    /// Product of expressions: a * b * c * ...
    Mul(Args),

    /// Power with a non-negative integer exponent: base^exp.
    Pow {
        /// The base of the power.
        base: ExprHandle,
        /// The exponent.
        exp: u32,
    },

    /// Negation: -expr.
    Neg(ExprHandle),
}

impl ExprNode {
    /// Returns the numeric value if this is a literal.
    #[must_use]
    pub fn as_number(&self) -> Option<&Rational> {
        match self {
            ExprNode::Number(r) => Some(r),
            _ => None,
        }
    }

    /// Returns true if this is the literal zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.as_number().is_some_and(Zero::is_zero)
    }

    /// Returns true if this is the literal one.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.as_number().is_some_and(One::is_one)
    }

    /// Returns the children of this node.
    #[must_use]
    pub fn children(&self) -> Args {
        match self {
            ExprNode::Number(_) | ExprNode::Symbol(_) => SmallVec::new(),
            ExprNode::Add(args) | ExprNode::Mul(args) => args.clone(),
            ExprNode::Pow { base, .. } => smallvec::smallvec![*base],
            ExprNode::Neg(arg) => smallvec::smallvec![*arg],
        }
    }
}
