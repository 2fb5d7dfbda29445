//! Evaluation and substitution.
//!
//! Symbolic moment results keep caller-supplied bound parameters free.
//! These routines bind them to numbers or replace them with other
//! expressions after the fact.

use hashbrown::{HashMap, HashSet};
use monomoment_integers::Rational;
use num_traits::{One, Zero};
use smallvec::SmallVec;

use crate::arena::ExprArena;
use crate::error::EvalError;
use crate::expr::{ExprNode, SymbolId};
use crate::handle::ExprHandle;

/// Values assigned to symbols, keyed by symbol name.
pub type Bindings = HashMap<String, Rational>;

impl ExprArena {
    /// Evaluates an expression exactly, using `bindings` for every symbol.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::UnboundSymbol`] if a symbol has no binding.
    pub fn evaluate(&self, expr: ExprHandle, bindings: &Bindings) -> Result<Rational, EvalError> {
        let mut cache = HashMap::new();
        self.evaluate_cached(expr, bindings, &mut cache)
    }

    fn evaluate_cached(
        &self,
        expr: ExprHandle,
        bindings: &Bindings,
        cache: &mut HashMap<ExprHandle, Rational>,
    ) -> Result<Rational, EvalError> {
        if let Some(value) = cache.get(&expr) {
            return Ok(value.clone());
        }

        let value = match self.get(expr) {
            ExprNode::Number(r) => r.clone(),
            ExprNode::Symbol(id) => {
                let name = self.symbol_name(*id).unwrap_or_default();
                bindings
                    .get(name)
                    .cloned()
                    .ok_or_else(|| EvalError::UnboundSymbol(name.to_owned()))?
            }
            ExprNode::Add(args) => {
                let mut sum = Rational::zero();
                for &arg in args {
                    sum = sum + self.evaluate_cached(arg, bindings, cache)?;
                }
                sum
            }
            ExprNode::Mul(args) => {
                let mut product = Rational::one();
                for &arg in args {
                    product = product * self.evaluate_cached(arg, bindings, cache)?;
                }
                product
            }
            ExprNode::Pow { base, exp } => self.evaluate_cached(*base, bindings, cache)?.pow(*exp),
            ExprNode::Neg(arg) => -self.evaluate_cached(*arg, bindings, cache)?,
        };

        cache.insert(expr, value.clone());
        Ok(value)
    }

    /// Replaces every occurrence of `symbol` in `expr` with `replacement`.
    ///
    /// The result is rebuilt through the folding constructors, so
    /// substituting numbers collapses numeric sub-terms.
    pub fn substitute(
        &mut self,
        expr: ExprHandle,
        symbol: SymbolId,
        replacement: ExprHandle,
    ) -> ExprHandle {
        let mut cache = HashMap::new();
        self.substitute_cached(expr, symbol, replacement, &mut cache)
    }

    fn substitute_cached(
        &mut self,
        expr: ExprHandle,
        symbol: SymbolId,
        replacement: ExprHandle,
        cache: &mut HashMap<ExprHandle, ExprHandle>,
    ) -> ExprHandle {
        if let Some(&done) = cache.get(&expr) {
            return done;
        }

        let result = match self.get(expr).clone() {
            ExprNode::Symbol(id) if id == symbol => replacement,
            ExprNode::Number(_) | ExprNode::Symbol(_) => expr,
            ExprNode::Add(args) => {
                let args: SmallVec<[ExprHandle; 4]> = args
                    .iter()
                    .map(|&a| self.substitute_cached(a, symbol, replacement, cache))
                    .collect();
                self.add(args)
            }
            ExprNode::Mul(args) => {
                let args: SmallVec<[ExprHandle; 4]> = args
                    .iter()
                    .map(|&a| self.substitute_cached(a, symbol, replacement, cache))
                    .collect();
                self.mul(args)
            }
            ExprNode::Pow { base, exp } => {
                let base = self.substitute_cached(base, symbol, replacement, cache);
                self.pow(base, exp)
            }
            ExprNode::Neg(arg) => {
                let arg = self.substitute_cached(arg, symbol, replacement, cache);
                self.neg(arg)
            }
        };

        cache.insert(expr, result);
        result
    }

    /// Returns true if `symbol` occurs anywhere in `expr`.
    #[must_use]
    pub fn depends_on(&self, expr: ExprHandle, symbol: SymbolId) -> bool {
        match self.get(expr) {
            ExprNode::Symbol(id) => *id == symbol,
            ExprNode::Number(_) => false,
            node => node.children().iter().any(|&c| self.depends_on(c, symbol)),
        }
    }

    /// Returns the names of the symbols occurring in `expr`, sorted.
    #[must_use]
    pub fn free_symbols(&self, expr: ExprHandle) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut stack = vec![expr];
        let mut ids = HashSet::new();

        while let Some(h) = stack.pop() {
            if !seen.insert(h) {
                continue;
            }
            match self.get(h) {
                ExprNode::Symbol(id) => {
                    ids.insert(*id);
                }
                node => stack.extend(node.children()),
            }
        }

        let mut names: Vec<String> = ids
            .into_iter()
            .filter_map(|id| self.symbol_name(id).map(str::to_owned))
            .collect();
        names.sort();
        names
    }
}
