//! Lambda terms.
//!
//! Terms are immutable and shared through [`Rc`]. Every transformation in
//! this crate hands back the very same `Rc` when it changed nothing, so
//! "did anything happen?" is answered with [`Rc::ptr_eq`] instead of a
//! structural comparison. The evaluator relies on this to detect normal form.

use std::fmt;
use std::rc::Rc;

use crate::subst::substitute;

pub type Name = Rc<str>;

/// A variable introduced by an abstraction.
///
/// Two bound variables are the same only if both name and id match. Ids
/// come from a [`VarSupply`], so abstractions built through the same supply
/// never share a parameter, whatever their surface names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoundVar {
    name: Name,
    id: usize
}

impl BoundVar {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> usize {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    FreeVar(Name),
    BoundVar(BoundVar),
    App(Rc<Expr>, Rc<Expr>),
    Lambda(BoundVar, Rc<Expr>)
}

impl Expr {
    pub fn free(name: &str) -> Rc<Expr> {
        Rc::new(Expr::FreeVar(name.into()))
    }

    pub fn app(function: Rc<Expr>, argument: Rc<Expr>) -> Rc<Expr> {
        Rc::new(Expr::App(function, argument))
    }
}

/// Anything that can be substituted for: a free name or a bound variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Symbol {
    Free(Name),
    Bound(BoundVar)
}

impl Symbol {
    pub fn free(name: &str) -> Self {
        Symbol::Free(name.into())
    }

    pub fn name(&self) -> &str {
        match self {
            Symbol::Free(name) => name,
            Symbol::Bound(var) => var.name()
        }
    }

    /// Whether `expr` is an occurrence of this symbol.
    pub fn occurs_as(&self, expr: &Expr) -> bool {
        match (self, expr) {
            (Symbol::Free(a), Expr::FreeVar(b)) => a == b,
            (Symbol::Bound(a), Expr::BoundVar(b)) => a == b,
            _ => false
        }
    }

    /// Whether an abstraction over `param` rebinds this symbol.
    pub fn is_bound_by(&self, param: &BoundVar) -> bool {
        matches!(self, Symbol::Bound(var) if var == param)
    }

    pub fn to_expr(&self) -> Rc<Expr> {
        Rc::new(match self {
            Symbol::Free(name) => Expr::FreeVar(name.clone()),
            Symbol::Bound(var) => Expr::BoundVar(var.clone())
        })
    }
}

impl From<BoundVar> for Symbol {
    fn from(var: BoundVar) -> Self {
        Symbol::Bound(var)
    }
}

/// Mints bound variables with increasing ids.
#[derive(Debug, Default)]
pub struct VarSupply {
    last: usize
}

impl VarSupply {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fresh(&mut self, name: &str) -> BoundVar {
        self.last += 1;
        BoundVar { name: name.into(), id: self.last }
    }

    pub fn minted(&self) -> usize {
        self.last
    }
}

/// Builds `λsymbol.body`: a fresh parameter named after `symbol` replaces
/// every occurrence of `symbol` in `body` that is not already rebound.
pub fn make_abstraction(supply: &mut VarSupply, symbol: &Symbol, body: &Rc<Expr>) -> Rc<Expr> {
    let param = supply.fresh(symbol.name());
    let occurrence = Rc::new(Expr::BoundVar(param.clone()));
    let body = substitute(body, symbol, &occurrence);
    Rc::new(Expr::Lambda(param, body))
}

/// Curried `λp1 p2 .. pn.body`, where `pn` binds innermost.
pub fn make_lambda(supply: &mut VarSupply, params: &[Symbol], body: &Rc<Expr>) -> Rc<Expr> {
    params.iter().rev().fold(body.clone(), |body, param| {
        make_abstraction(supply, param, &body)
    })
}

/// `function a1 a2 .. an`, left-folded.
pub fn application<I>(function: &Rc<Expr>, args: I) -> Rc<Expr>
where
    I: IntoIterator<Item = Rc<Expr>>,
{
    args.into_iter().fold(function.clone(), Expr::app)
}

// Reuses `node` when both children are the ones it already holds.
pub fn rebuild_app(node: &Rc<Expr>, function: Rc<Expr>, argument: Rc<Expr>) -> Rc<Expr> {
    if let Expr::App(f, a) = &**node {
        if Rc::ptr_eq(f, &function) && Rc::ptr_eq(a, &argument) {
            return node.clone();
        }
    }
    Rc::new(Expr::App(function, argument))
}

pub fn rebuild_lambda(node: &Rc<Expr>, param: &BoundVar, body: Rc<Expr>) -> Rc<Expr> {
    if let Expr::Lambda(p, b) = &**node {
        if p == param && Rc::ptr_eq(b, &body) {
            return node.clone();
        }
    }
    Rc::new(Expr::Lambda(param.clone(), body))
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for BoundVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::FreeVar(name) => f.write_str(name),
            Expr::BoundVar(var) => write!(f, "{}", var),
            Expr::Lambda(param, body) => write!(f, "λ{}.{}", param, body),
            Expr::App(function, argument) => {
                match &**function {
                    Expr::Lambda(..) => write!(f, "({})", function)?,
                    _ => write!(f, "{}", function)?
                }
                match &**argument {
                    Expr::FreeVar(_) | Expr::BoundVar(_) => write!(f, " {}", argument),
                    _ => write!(f, " ({})", argument)
                }
            }
        }
    }
}
