//! Moment Examples
//!
//! Areas, centroids and inertia of boxes computed as monomial moments.
//!
//! Run with: cargo run -p monomoment --example moment_examples
//! Set `RUST_LOG=monomoment_integrate=trace` to follow each integration.

use monomoment::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn q(n: i64, d: i64) -> Rational {
    Rational::from_i64(n, d)
}

fn main() -> Result<(), MomentError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    info!("running moment examples");

    println!("=== Numeric moments ===\n");
    numeric_examples()?;

    println!("\n=== Symbolic moments ===\n");
    symbolic_examples()?;

    println!("\n=== Monomials ===\n");
    monomial_examples()?;

    Ok(())
}

fn numeric_examples() -> Result<(), MomentError> {
    // Area of [0, 2] x [0, 3]
    let area = moment_exact(&[0, 0], &[q(0, 1), q(0, 1)], &[q(2, 1), q(3, 1)])?;
    println!("area of [0,2]x[0,3]            = {area}");

    // First moment in x, then the centroid
    let mx = moment_exact(&[1, 0], &[q(0, 1), q(0, 1)], &[q(2, 1), q(3, 1)])?;
    println!("centroid x of [0,2]x[0,3]      = {}", mx / area);

    // Second moment of the unit cube about the x_0 = 0 plane
    let ixx = moment_f64(&[2, 0, 0], &[0.0; 3], &[1.0; 3])?;
    println!("∫ x_0² over the unit cube      = {ixx}");

    Ok(())
}

fn symbolic_examples() -> Result<(), MomentError> {
    let mut arena = ExprArena::new();

    let m = moment(&mut arena, &[2], &["a".into()], &["b".into()])?;
    info!(nodes = arena.len(), "interned symbolic moment");
    println!("∫ₐᵇ x² dx                      = {}", arena.display(m));

    let m = moment(
        &mut arena,
        &[1, 2],
        &[0.into(), "h0".into()],
        &["w".into(), "h1".into()],
    )?;
    println!("∫₀ʷ∫_h0^h1 x y² dy dx          = {}", arena.display(m));

    let mut bindings = Bindings::new();
    bindings.insert("w".to_owned(), q(2, 1));
    bindings.insert("h0".to_owned(), q(0, 1));
    bindings.insert("h1".to_owned(), q(3, 1));
    match arena.evaluate(m, &bindings) {
        Ok(value) => println!("  at w = 2, h0 = 0, h1 = 3     = {value}"),
        Err(err) => println!("  evaluation failed: {err}"),
    }

    let options = MomentOptions {
        strategy: MomentStrategy::Iterated,
        ..Default::default()
    };
    let it = moment_with_options(&mut arena, &[1, 2], &[0.into(), "h0".into()], &["w".into(), "h1".into()], options)?;
    println!("  iterated strategy agrees     = {}", it == m);

    Ok(())
}

fn monomial_examples() -> Result<(), MomentError> {
    let m = Monomial::from_order(&[3, 0, 1])?;
    println!("monomial                       = {m}");
    println!("total degree                   = {}", m.total_degree());
    if let Some((anti, coeff)) = m.antiderivative(0) {
        println!("∫ d x_0                        = {coeff} * {anti}");
    }

    match Monomial::from_order(&[1, -1]) {
        Ok(_) => println!("unexpected success"),
        Err(err) => println!("x_0 * x_1^-1                   : {err}"),
    }

    Ok(())
}
