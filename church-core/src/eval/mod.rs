use std::rc::Rc;

use crate::expr::{rebuild_app, rebuild_lambda, Expr, VarSupply};
use crate::subst::instantiate;

pub const DEFAULT_STEP_LIMIT: usize = 1000;

/// Contracts the leftmost-outermost redex, if there is one.
///
/// Returns `expr` itself (the same `Rc`) when the term is in normal form.
/// At most one beta reduction happens per call: the argument of an
/// application is only looked at once its function has nothing left to do.
/// Binders copied by the contraction come from `supply`, which must be the
/// supply `expr` was built with.
pub fn step(expr: &Rc<Expr>, supply: &mut VarSupply) -> Rc<Expr> {
    match &**expr {
        Expr::FreeVar(_) | Expr::BoundVar(_) => expr.clone(),
        Expr::App(function, argument) => match &**function {
            Expr::Lambda(param, body) => instantiate(body, param, argument, supply),
            _ => {
                let stepped = step(function, supply);
                if Rc::ptr_eq(&stepped, function) {
                    let argument = step(argument, supply);
                    rebuild_app(expr, stepped, argument)
                } else {
                    rebuild_app(expr, stepped, argument.clone())
                }
            }
        },
        Expr::Lambda(param, body) => {
            let body = step(body, supply);
            rebuild_lambda(expr, param, body)
        }
    }
}

/// Outcome of a bounded reduction.
#[derive(Debug, Clone)]
pub struct Reduction {
    pub expr: Rc<Expr>,
    pub steps: usize,
    // false when the limit ran out first
    pub normal: bool
}

/// Steps `expr` until it stops changing or `limit` steps have been taken.
pub fn reduce(expr: &Rc<Expr>, limit: usize, supply: &mut VarSupply) -> Reduction {
    let mut current = expr.clone();
    for steps in 0..limit {
        let next = step(&current, supply);
        if Rc::ptr_eq(&next, &current) {
            log::trace!("normal form after {} steps", steps);
            return Reduction { expr: current, steps, normal: true };
        }
        log::trace!("step {}: {}", steps + 1, next);
        current = next;
    }
    log::debug!("no normal form within {} steps", limit);
    Reduction { expr: current, steps: limit, normal: false }
}

/// Reduces `expr` with a budget of `limit` steps. Running out of steps is
/// not an error; whatever the term looks like at that point is returned.
pub fn eval(expr: &Rc<Expr>, limit: usize, supply: &mut VarSupply) -> Rc<Expr> {
    reduce(expr, limit, supply).expr
}
