//! Property-based tests for exact arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::One;
    use proptest::prelude::*;

    use crate::{Integer, Rational};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn small_rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    proptest! {
        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn rational_distributive(a in small_rational(), b in small_rational(), c in small_rational()) {
            prop_assert_eq!(&a * &(&b + &c), &a * &b + &a * &c);
        }

        #[test]
        fn rational_multiplicative_inverse(n in non_zero_int(), d in non_zero_int()) {
            let a = Rational::from_i64(n, d);
            prop_assert!((&a * &a.recip()).is_one());
        }

        #[test]
        fn rational_denominator_positive(n in small_int(), d in non_zero_int()) {
            let a = Rational::from_i64(n, d);
            prop_assert!(!a.denominator().is_negative());
            prop_assert_eq!(a.signum(), (n.signum() * d.signum()) as i8);
        }

        #[test]
        fn rational_pow_is_repeated_product(a in small_rational(), k in 0u32..6) {
            let mut expected = Rational::one();
            for _ in 0..k {
                expected = expected * &a;
            }
            prop_assert_eq!(a.pow(k), expected);
        }

        #[test]
        fn f64_conversion_roundtrips(x in -1.0e6f64..1.0e6f64) {
            let r = Rational::try_from_f64(x).unwrap();
            prop_assert_eq!(r.to_f64(), x);
        }
    }
}
