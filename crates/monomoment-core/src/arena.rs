//! Arena storage and folding constructors.
//!
//! All expressions live contiguously in one `Vec`, with hash-consing
//! ensuring each unique expression is stored exactly once. The public
//! constructors fold numbers and trivial identities as they go, so a
//! computation over purely numeric inputs ends in a single `Number` node.

use hashbrown::HashMap;
use monomoment_integers::Rational;
use num_traits::{One, Zero};
use smallvec::SmallVec;

use crate::expr::{Args, ExprNode, SymbolId};
use crate::handle::ExprHandle;
use crate::intern::InternTable;

/// The main arena for storing expressions.
#[derive(Debug, Default)]
pub struct ExprArena {
    nodes: Vec<ExprNode>,
    intern_map: HashMap<ExprNode, ExprHandle>,
    symbols: InternTable<String>,
}

impl ExprArena {
    /// Creates a new empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns a node as-is, returning its handle.
    ///
    /// No folding is applied; prefer the typed constructors.
    ///
    /// # Panics
    ///
    /// Panics if the arena already holds `u32::MAX` nodes.
    pub fn intern(&mut self, node: ExprNode) -> ExprHandle {
        if let Some(&handle) = self.intern_map.get(&node) {
            return handle;
        }

        let index = u32::try_from(self.nodes.len()).expect("arena capacity exceeded");
        let handle = ExprHandle::new(index);
        self.nodes.push(node.clone());
        self.intern_map.insert(node, handle);
        handle
    }

    /// Gets the node at the given handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle did not come from this arena.
    #[must_use]
    pub fn get(&self, handle: ExprHandle) -> &ExprNode {
        &self.nodes[handle.index() as usize]
    }

    /// Returns the numeric value of the expression if it is a literal.
    #[must_use]
    pub fn as_number(&self, handle: ExprHandle) -> Option<&Rational> {
        self.get(handle).as_number()
    }

    /// Interns a symbol name, returning its ID.
    pub fn intern_symbol(&mut self, name: &str) -> SymbolId {
        match self.symbols.get_id(name) {
            Some(id) => id,
            None => self.symbols.intern(name.to_owned()),
        }
    }

    /// Looks up the ID of a symbol without interning it.
    #[must_use]
    pub fn symbol_id(&self, name: &str) -> Option<SymbolId> {
        self.symbols.get_id(name)
    }

    /// Gets the name of a symbol by its ID.
    #[must_use]
    pub fn symbol_name(&self, id: SymbolId) -> Option<&str> {
        self.symbols.get(id).map(String::as_str)
    }

    /// Returns the number of nodes in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the arena is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // === Atoms ===

    /// Creates a rational literal.
    pub fn number(&mut self, value: Rational) -> ExprHandle {
        self.intern(ExprNode::Number(value))
    }

    /// Creates an integer literal.
    pub fn integer(&mut self, value: i64) -> ExprHandle {
        self.number(Rational::from(value))
    }

    /// Creates a symbol expression.
    pub fn symbol(&mut self, name: &str) -> ExprHandle {
        let id = self.intern_symbol(name);
        self.intern(ExprNode::Symbol(id))
    }

    // === Compound expressions ===

    /// Creates a sum, collecting numeric terms and like terms.
    ///
    /// Terms that differ only by a numeric factor are merged, so
    /// `a^3 + (-a^3)` folds to `0`.
    pub fn add(&mut self, args: impl Into<Args>) -> ExprHandle {
        let mut constant = Rational::zero();
        let mut cores: Vec<(ExprHandle, Rational)> = Vec::new();

        let args: Args = args.into();
        let mut pending: Vec<ExprHandle> = args.into_iter().rev().collect();
        while let Some(term) = pending.pop() {
            if let ExprNode::Add(inner) = self.get(term) {
                pending.extend(inner.iter().rev().copied());
                continue;
            }

            match self.split_coefficient(term) {
                (c, None) => constant = constant + c,
                (c, Some(core)) => match cores.iter_mut().find(|(h, _)| *h == core) {
                    Some((_, acc)) => *acc = &*acc + &c,
                    None => cores.push((core, c)),
                },
            }
        }

        let mut terms: Args = SmallVec::new();
        for (core, c) in cores {
            if c.is_zero() {
                continue;
            }
            let coeff = self.number(c);
            terms.push(self.mul(smallvec::smallvec![coeff, core]));
        }
        if !constant.is_zero() {
            terms.push(self.number(constant));
        }

        match terms.len() {
            0 => self.integer(0),
            1 => terms[0],
            _ => self.intern(ExprNode::Add(terms)),
        }
    }

    /// Creates a product, multiplying numeric factors together.
    ///
    /// A zero factor collapses the product to `0`; a coefficient of `-1`
    /// is expressed as a negation.
    pub fn mul(&mut self, args: impl Into<Args>) -> ExprHandle {
        let mut coeff = Rational::one();
        let mut factors: Args = SmallVec::new();

        let args: Args = args.into();
        let mut pending: Vec<ExprHandle> = args.into_iter().rev().collect();
        while let Some(factor) = pending.pop() {
            match self.get(factor) {
                ExprNode::Number(r) => coeff = coeff * r,
                ExprNode::Neg(inner) => {
                    coeff = -coeff;
                    pending.push(*inner);
                }
                ExprNode::Mul(inner) => pending.extend(inner.iter().rev().copied()),
                _ => factors.push(factor),
            }
        }

        if coeff.is_zero() {
            return self.integer(0);
        }

        let product = match factors.len() {
            0 => return self.number(coeff),
            1 => factors[0],
            _ => self.intern(ExprNode::Mul(factors.clone())),
        };

        if coeff.is_one() {
            product
        } else if (-&coeff).is_one() {
            self.intern(ExprNode::Neg(product))
        } else {
            let c = self.number(coeff);
            factors.insert(0, c);
            self.intern(ExprNode::Mul(factors))
        }
    }

    /// Creates a power with a non-negative integer exponent.
    pub fn pow(&mut self, base: ExprHandle, exp: u32) -> ExprHandle {
        match exp {
            0 => return self.integer(1),
            1 => return base,
            _ => {}
        }

        match self.get(base).clone() {
            ExprNode::Number(r) => self.number(r.pow(exp)),
            ExprNode::Pow { base: inner, exp: e } => match e.checked_mul(exp) {
                Some(combined) => self.pow(inner, combined),
                None => self.intern(ExprNode::Pow { base, exp }),
            },
            ExprNode::Neg(inner) => {
                let p = self.pow(inner, exp);
                if exp % 2 == 0 {
                    p
                } else {
                    self.neg(p)
                }
            }
            _ => self.intern(ExprNode::Pow { base, exp }),
        }
    }

    /// Creates a negation.
    pub fn neg(&mut self, arg: ExprHandle) -> ExprHandle {
        let minus_one = self.integer(-1);
        self.mul(smallvec::smallvec![minus_one, arg])
    }

    /// Creates the difference `a - b`.
    pub fn sub(&mut self, a: ExprHandle, b: ExprHandle) -> ExprHandle {
        let neg_b = self.neg(b);
        self.add(smallvec::smallvec![a, neg_b])
    }

    /// Divides an expression by a non-zero rational.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    pub fn div_number(&mut self, numerator: ExprHandle, divisor: &Rational) -> ExprHandle {
        let factor = self.number(divisor.recip());
        self.mul(smallvec::smallvec![factor, numerator])
    }

    /// Splits a term into its numeric coefficient and non-numeric core.
    ///
    /// Literals have no core; `Neg(x)` and `Mul[c, ...]` expose their sign
    /// and coefficient.
    fn split_coefficient(&mut self, term: ExprHandle) -> (Rational, Option<ExprHandle>) {
        match self.get(term).clone() {
            ExprNode::Number(r) => (r, None),
            ExprNode::Neg(inner) => {
                let (c, core) = self.split_coefficient(inner);
                (-c, core)
            }
            ExprNode::Mul(args) => match self.get(args[0]).as_number().cloned() {
                Some(c) => {
                    let rest: Args = args[1..].iter().copied().collect();
                    let core = if rest.len() == 1 {
                        rest[0]
                    } else {
                        self.intern(ExprNode::Mul(rest))
                    };
                    (c, Some(core))
                }
                None => (Rational::one(), Some(term)),
            },
            _ => (Rational::one(), Some(term)),
        }
    }
}
