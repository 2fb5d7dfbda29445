//! Property-based tests for moment computation.

#[cfg(test)]
mod tests {
    use monomoment_core::{Bindings, ExprArena};
    use monomoment_integers::Rational;
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::{moment, moment_exact, moment_with_options, Bound, MomentOptions, MomentStrategy};

    fn small_rational() -> impl Strategy<Value = Rational> {
        (-20i64..20, 1i64..8).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    fn exponent() -> impl Strategy<Value = i64> {
        0i64..6
    }

    /// A box of 0 to 4 dimensions with exponents.
    fn boxed_monomial() -> impl Strategy<Value = (Vec<i64>, Vec<Rational>, Vec<Rational>)> {
        (0usize..=4).prop_flat_map(|n| {
            (
                proptest::collection::vec(exponent(), n),
                proptest::collection::vec(small_rational(), n),
                proptest::collection::vec(small_rational(), n),
            )
        })
    }

    proptest! {
        #[test]
        fn moment_separates_into_factors(
            a in exponent(), b in exponent(),
            x0 in small_rational(), x1 in small_rational(),
            y0 in small_rational(), y1 in small_rational(),
        ) {
            let joint = moment_exact(&[a, b], &[x0.clone(), y0.clone()], &[x1.clone(), y1.clone()]).unwrap();
            let fx = moment_exact(&[a], &[x0], &[x1]).unwrap();
            let fy = moment_exact(&[b], &[y0], &[y1]).unwrap();
            prop_assert_eq!(joint, fx * fy);
        }

        #[test]
        fn zero_width_interval_gives_zero(k in exponent(), c in small_rational()) {
            let m = moment_exact(&[k], &[c.clone()], &[c]).unwrap();
            prop_assert!(m.is_zero());
        }

        #[test]
        fn swapping_bounds_negates(k in exponent(), lo in small_rational(), hi in small_rational()) {
            let forward = moment_exact(&[k], &[lo.clone()], &[hi.clone()]).unwrap();
            let backward = moment_exact(&[k], &[hi], &[lo]).unwrap();
            prop_assert_eq!(forward, -backward);
        }

        #[test]
        fn strategies_agree_on_numeric_boxes((order, lo, hi) in boxed_monomial()) {
            let x_min: Vec<Bound> = lo.iter().cloned().map(Bound::from).collect();
            let x_max: Vec<Bound> = hi.iter().cloned().map(Bound::from).collect();
            let options = MomentOptions { strategy: MomentStrategy::Iterated, ..Default::default() };

            let mut arena = ExprArena::new();
            let factored = moment(&mut arena, &order, &x_min, &x_max).unwrap();
            let iterated = moment_with_options(&mut arena, &order, &x_min, &x_max, options).unwrap();
            let exact = moment_exact(&order, &lo, &hi).unwrap();

            prop_assert_eq!(arena.as_number(factored), Some(&exact));
            prop_assert_eq!(arena.as_number(iterated), Some(&exact));
        }

        #[test]
        fn symbolic_result_evaluates_to_exact_moment((order, lo, hi) in boxed_monomial()) {
            let n = order.len();
            let x_min: Vec<Bound> = (0..n).map(|i| Bound::symbol(format!("lo{i}"))).collect();
            let x_max: Vec<Bound> = (0..n).map(|i| Bound::symbol(format!("hi{i}"))).collect();

            let mut bindings = Bindings::new();
            for i in 0..n {
                bindings.insert(format!("lo{i}"), lo[i].clone());
                bindings.insert(format!("hi{i}"), hi[i].clone());
            }

            let mut arena = ExprArena::new();
            let exact = moment_exact(&order, &lo, &hi).unwrap();
            for strategy in [MomentStrategy::Factored, MomentStrategy::Iterated] {
                let options = MomentOptions { strategy, ..Default::default() };
                let m = moment_with_options(&mut arena, &order, &x_min, &x_max, options).unwrap();
                prop_assert_eq!(arena.evaluate(m, &bindings).unwrap(), exact.clone());
            }
        }
    }
}
