use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::expr::{Expr, Symbol};
use crate::subst::substitute_all;

// Session bindings, kept in definition order. Rebinding a name replaces
// the value but keeps its original position.
#[derive(Debug, Clone, Default)]
pub struct Env {
    bindings: IndexMap<Symbol, Rc<Expr>>
}

impl Env {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, symbol: Symbol, value: Rc<Expr>) -> Option<Rc<Expr>> {
        self.bindings.insert(symbol, value)
    }

    pub fn get(&self, symbol: &Symbol) -> Option<&Rc<Expr>> {
        self.bindings.get(symbol)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, &Rc<Expr>)> {
        self.bindings.iter()
    }

    /// Substitutes every bound name into `expr`.
    pub fn resolve(&self, expr: &Rc<Expr>) -> Rc<Expr> {
        substitute_all(expr, &self.bindings)
    }
}

impl fmt::Display for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (symbol, value) in &self.bindings {
            writeln!(f, "{} = {}", symbol, value)?;
        }
        Ok(())
    }
}
