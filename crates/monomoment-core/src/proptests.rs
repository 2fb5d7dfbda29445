//! Property-based tests for the folding constructors.

#[cfg(test)]
mod tests {
    use monomoment_integers::Rational;
    use proptest::prelude::*;

    use crate::{Bindings, ExprArena};

    fn small_rational() -> impl Strategy<Value = Rational> {
        (-50i64..50, 1i64..20).prop_map(|(n, d)| Rational::from_i64(n, d))
    }

    proptest! {
        #[test]
        fn difference_of_equal_powers_folds_to_zero(k in 0u32..8) {
            let mut arena = ExprArena::new();
            let c = arena.symbol("c");
            let p = arena.pow(c, k);
            let diff = arena.sub(p, p);
            prop_assert!(arena.get(diff).is_zero());
        }

        #[test]
        fn substitution_agrees_with_evaluation(
            a in small_rational(),
            b in small_rational(),
            k in 0u32..6,
        ) {
            let mut arena = ExprArena::new();
            let x = arena.symbol("x");
            let y = arena.symbol("y");
            let xk = arena.pow(x, k + 1);
            let yk = arena.pow(y, k + 1);
            let diff = arena.sub(yk, xk);
            let expr = arena.div_number(diff, &Rational::from(k + 1));

            let mut bindings = Bindings::new();
            bindings.insert("x".to_owned(), a.clone());
            bindings.insert("y".to_owned(), b.clone());
            let evaluated = arena.evaluate(expr, &bindings).unwrap();

            let x_id = arena.symbol_id("x").unwrap();
            let y_id = arena.symbol_id("y").unwrap();
            let a_h = arena.number(a);
            let b_h = arena.number(b);
            let partial = arena.substitute(expr, x_id, a_h);
            let folded = arena.substitute(partial, y_id, b_h);

            prop_assert_eq!(arena.as_number(folded), Some(&evaluated));
        }

        #[test]
        fn numeric_sum_and_product_fold(a in small_rational(), b in small_rational()) {
            let mut arena = ExprArena::new();
            let ha = arena.number(a.clone());
            let hb = arena.number(b.clone());
            let sum = arena.add(smallvec::smallvec![ha, hb]);
            let prod = arena.mul(smallvec::smallvec![ha, hb]);
            prop_assert_eq!(arena.as_number(sum), Some(&(&a + &b)));
            prop_assert_eq!(arena.as_number(prod), Some(&(&a * &b)));
        }
    }
}
