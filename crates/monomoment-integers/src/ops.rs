//! Operator boilerplate shared by the number wrappers.
//!
//! Every wrapper is a newtype over a `dashu` value, so each binary operator
//! forwards to the inner value for the owned/owned, owned/borrowed and
//! borrowed/borrowed combinations.

macro_rules! forward_binop {
    ($wrapper:ident, $trait:ident, $method:ident) => {
        impl std::ops::$trait for $wrapper {
            type Output = $wrapper;

            fn $method(self, rhs: $wrapper) -> $wrapper {
                $wrapper(std::ops::$trait::$method(self.0, rhs.0))
            }
        }

        impl std::ops::$trait<&$wrapper> for $wrapper {
            type Output = $wrapper;

            fn $method(self, rhs: &$wrapper) -> $wrapper {
                $wrapper(std::ops::$trait::$method(self.0, &rhs.0))
            }
        }

        impl std::ops::$trait for &$wrapper {
            type Output = $wrapper;

            fn $method(self, rhs: &$wrapper) -> $wrapper {
                $wrapper(std::ops::$trait::$method(&self.0, &rhs.0))
            }
        }
    };
}

macro_rules! forward_neg {
    ($wrapper:ident) => {
        impl std::ops::Neg for $wrapper {
            type Output = $wrapper;

            fn neg(self) -> $wrapper {
                $wrapper(-self.0)
            }
        }

        impl std::ops::Neg for &$wrapper {
            type Output = $wrapper;

            fn neg(self) -> $wrapper {
                $wrapper(-&self.0)
            }
        }
    };
}

pub(crate) use forward_binop;
pub(crate) use forward_neg;
