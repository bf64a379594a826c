use std::rc::Rc;

use crate::expr::{rebuild_app, rebuild_lambda, BoundVar, Expr, Symbol, VarSupply};

/// Replaces every occurrence of `target` in `expr` by `replacement`.
///
/// An abstraction whose parameter is `target` rebinds it, so substitution
/// stops there. Nothing is renamed: `replacement` must not have free bound
/// variables that an abstraction in `expr` binds. Parameters minted by one
/// [`VarSupply`] guarantee that for freshly built terms and for closed
/// replacements; beta steps go through [`instantiate`] instead.
pub fn substitute(expr: &Rc<Expr>, target: &Symbol, replacement: &Rc<Expr>) -> Rc<Expr> {
    match &**expr {
        Expr::FreeVar(_) | Expr::BoundVar(_) => {
            if target.occurs_as(expr) {
                replacement.clone()
            } else {
                expr.clone()
            }
        }
        Expr::App(function, argument) => rebuild_app(
            expr,
            substitute(function, target, replacement),
            substitute(argument, target, replacement),
        ),
        // shadowing
        Expr::Lambda(param, _) if target.is_bound_by(param) => expr.clone(),
        Expr::Lambda(param, body) => {
            rebuild_lambda(expr, param, substitute(body, target, replacement))
        }
    }
}

/// Applies each binding in turn, in iteration order.
///
/// The bindings are expected to be independent of each other. A replacement
/// inserted by one binding is still visited by the bindings that follow it.
pub fn substitute_all<'a, I>(expr: &Rc<Expr>, bindings: I) -> Rc<Expr>
where
    I: IntoIterator<Item = (&'a Symbol, &'a Rc<Expr>)>,
{
    bindings.into_iter().fold(expr.clone(), |expr, (target, replacement)| {
        substitute(&expr, target, replacement)
    })
}

// Copies a term, giving every abstraction inside it a fresh parameter.
// Bound variables whose binder is outside the copy are left alone unless
// the scope already maps them.
struct Freshen<'s> {
    supply: &'s mut VarSupply,
    scope: Vec<(BoundVar, Rc<Expr>)>
}

impl<'s> Freshen<'s> {
    fn new(supply: &'s mut VarSupply) -> Self {
        Freshen { supply, scope: Vec::new() }
    }

    fn copy(&mut self, expr: &Rc<Expr>) -> Rc<Expr> {
        match &**expr {
            Expr::FreeVar(_) => expr.clone(),
            Expr::BoundVar(var) => {
                // innermost binder wins
                match self.scope.iter().rev().find(|(bound, _)| bound == var) {
                    Some((_, replacement)) => replacement.clone(),
                    None => expr.clone()
                }
            }
            Expr::App(function, argument) => {
                let function = self.copy(function);
                let argument = self.copy(argument);
                rebuild_app(expr, function, argument)
            }
            Expr::Lambda(param, body) => {
                let fresh = self.supply.fresh(param.name());
                let occurrence = Rc::new(Expr::BoundVar(fresh.clone()));
                self.scope.push((param.clone(), occurrence));
                let body = self.copy(body);
                self.scope.pop();
                Rc::new(Expr::Lambda(fresh, body))
            }
        }
    }
}

/// The body of `λparam.body` applied to `argument`.
///
/// Every abstraction of the body gets a fresh parameter while `argument`
/// is pasted in, so an abstraction from `argument` never ends up under
/// another one with the same parameter. With [`substitute`] it could, for
/// instance when a term is applied to itself, and reducing under the
/// outer one would then capture.
pub fn instantiate(
    body: &Rc<Expr>,
    param: &BoundVar,
    argument: &Rc<Expr>,
    supply: &mut VarSupply,
) -> Rc<Expr> {
    let mut freshen = Freshen::new(supply);
    freshen.scope.push((param.clone(), argument.clone()));
    freshen.copy(body)
}
