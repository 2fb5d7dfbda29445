//! Type-safe expression handles.
//!
//! Handles are 32-bit indices into an [`ExprArena`](crate::ExprArena).
//! A handle is only meaningful for the arena that produced it.

use std::fmt;

/// A handle to an expression in the arena.
///
/// Two handles from the same arena are equal if and only if they point to
/// structurally identical expressions.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExprHandle(u32);

impl ExprHandle {
    /// Creates a handle from a raw arena index.
    #[must_use]
    pub(crate) const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw index of this handle.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ExprHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Expr({})", self.0)
    }
}
