//! Infix printing of expressions.
//!
//! Output uses `+ - * / ^` with the usual precedence, e.g.
//! `(b^3 - a^3)/3` or `x_0^2*x_1`. Parentheses are emitted only where
//! precedence requires them.

use std::fmt;

use monomoment_integers::Rational;
use num_traits::One;

use crate::arena::ExprArena;
use crate::expr::ExprNode;
use crate::handle::ExprHandle;

const PREC_ADD: u8 = 1;
const PREC_MUL: u8 = 2;
const PREC_POW: u8 = 3;
const PREC_ATOM: u8 = 4;

/// A displayable view of an expression.
///
/// Created by [`ExprArena::display`].
pub struct DisplayExpr<'a> {
    arena: &'a ExprArena,
    expr: ExprHandle,
}

impl ExprArena {
    /// Returns a value implementing `Display` for `expr`.
    #[must_use]
    pub fn display(&self, expr: ExprHandle) -> DisplayExpr<'_> {
        DisplayExpr { arena: self, expr }
    }
}

impl fmt::Display for DisplayExpr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self.arena, self.expr, 0))
    }
}

fn parenthesize(text: String, prec: u8, parent: u8) -> String {
    if prec < parent {
        format!("({text})")
    } else {
        text
    }
}

fn render(arena: &ExprArena, expr: ExprHandle, parent: u8) -> String {
    match arena.get(expr) {
        ExprNode::Number(r) => {
            let prec = if r.is_negative() {
                PREC_ADD
            } else if r.is_integer() {
                PREC_ATOM
            } else {
                PREC_MUL
            };
            parenthesize(r.to_string(), prec, parent)
        }
        ExprNode::Symbol(id) => arena.symbol_name(*id).unwrap_or("?").to_owned(),
        ExprNode::Add(args) => {
            let mut out = String::new();
            for (i, &term) in args.iter().enumerate() {
                let (negative, body) = render_term(arena, term);
                match (i, negative) {
                    (0, true) => out.push('-'),
                    (0, false) => {}
                    (_, true) => out.push_str(" - "),
                    (_, false) => out.push_str(" + "),
                }
                out.push_str(&body);
            }
            parenthesize(out, PREC_ADD, parent)
        }
        ExprNode::Mul(args) => {
            let text = match arena.as_number(args[0]) {
                Some(c) if c.is_negative() => {
                    format!("-{}", render_product(arena, &c.abs(), &args[1..]))
                }
                Some(c) => render_product(arena, c, &args[1..]),
                None => render_product(arena, &Rational::one(), args),
            };
            parenthesize(text, PREC_MUL, parent)
        }
        ExprNode::Pow { base, exp } => {
            let text = format!("{}^{exp}", render(arena, *base, PREC_ATOM));
            parenthesize(text, PREC_POW, parent)
        }
        ExprNode::Neg(arg) => {
            let text = format!("-{}", render(arena, *arg, PREC_MUL));
            parenthesize(text, PREC_ADD, parent)
        }
    }
}

/// Renders one summand, reporting its sign separately so sums read as
/// `a - b` rather than `a + -b`.
fn render_term(arena: &ExprArena, term: ExprHandle) -> (bool, String) {
    match arena.get(term) {
        ExprNode::Neg(arg) => (true, render(arena, *arg, PREC_MUL)),
        ExprNode::Number(r) if r.is_negative() => (true, r.abs().to_string()),
        ExprNode::Mul(args) => match arena.as_number(args[0]) {
            Some(c) if c.is_negative() => (true, render_product(arena, &c.abs(), &args[1..])),
            _ => (false, render(arena, term, PREC_MUL)),
        },
        _ => (false, render(arena, term, PREC_MUL)),
    }
}

/// Renders `coeff * factors` with a non-negative coefficient, writing a
/// fractional coefficient `p/q` as `p*factors/q`.
fn render_product(arena: &ExprArena, coeff: &Rational, factors: &[ExprHandle]) -> String {
    let mut body = factors
        .iter()
        .map(|&f| render(arena, f, PREC_MUL + 1))
        .collect::<Vec<_>>()
        .join("*");

    let numerator = coeff.numerator();
    let denominator = coeff.denominator();
    if !numerator.is_one() {
        body = if body.is_empty() {
            numerator.to_string()
        } else {
            format!("{numerator}*{body}")
        };
    }
    if body.is_empty() {
        body.push('1');
    }
    if !denominator.is_one() {
        body = format!("{body}/{denominator}");
    }
    body
}
