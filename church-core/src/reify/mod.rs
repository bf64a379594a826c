//! Reading Church-encoded data back out of reduced terms.
//!
//! Every decoder applies the candidate to free-variable markers, reduces the
//! result and inspects what comes out. The markers are free variables whose
//! names start with `#`.
//!
//! Marker names are ordinary identifiers to the lexer. A term that mentions
//! `#F` or one of the others itself can decode to the wrong value.

use std::fmt;
use std::rc::Rc;

use crate::eval::{eval, reduce};
use crate::expr::{application, Expr, VarSupply};

const TRUE_MARKER: &str = "#T";
const FALSE_MARKER: &str = "#F";
const SUCC_MARKER: &str = "#F";
const ZERO_MARKER: &str = "#Z";
const CONS_MARKER: &str = "#F";
const NIL_MARKER: &str = "#G";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Boolean,
    Integer,
    List
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Target::Boolean => "a boolean",
            Target::Integer => "an integer",
            Target::List => "a list"
        })
    }
}

/// The term did not have the shape of the requested encoding.
#[derive(Debug, Clone)]
pub struct DecodeError {
    target: Target,
    expr: Rc<Expr>
}

impl DecodeError {
    pub fn new(target: Target, expr: &Rc<Expr>) -> Self {
        DecodeError { target, expr: expr.clone() }
    }

    pub fn target(&self) -> Target {
        self.target
    }

    pub fn expr(&self) -> &Rc<Expr> {
        &self.expr
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Expression {} is not {}", self.expr, self.target)
    }
}

impl std::error::Error for DecodeError {}

pub type DecodeResult<T> = std::result::Result<T, DecodeError>;

/// `true` for `λt f.t`, `false` for `λt f.f`.
pub fn reify_bool(expr: &Rc<Expr>, limit: usize, supply: &mut VarSupply) -> DecodeResult<bool> {
    let t = Expr::free(TRUE_MARKER);
    let f = Expr::free(FALSE_MARKER);
    let result = eval(&application(expr, [t.clone(), f.clone()]), limit, supply);
    if result == t {
        Ok(true)
    } else if result == f {
        Ok(false)
    } else {
        Err(DecodeError::new(Target::Boolean, expr))
    }
}

/// `n` for `λf z.f (f .. (f z))` with `n` applications of `f`.
pub fn reify_int(expr: &Rc<Expr>, limit: usize, supply: &mut VarSupply) -> DecodeResult<usize> {
    let succ = Expr::free(SUCC_MARKER);
    let zero = Expr::free(ZERO_MARKER);
    let marked = application(expr, [succ.clone(), zero.clone()]);
    let mut current = eval(&marked, limit, supply);
    let mut total = 0;
    loop {
        let next = match &*current {
            Expr::App(function, argument) if *function == succ => argument.clone(),
            _ if current == zero => return Ok(total),
            _ => return Err(DecodeError::new(Target::Integer, expr))
        };
        total += 1;
        current = next;
    }
}

// Matches `((cons head) tail) nil`, a pair built by
// `λa b f.f a b` applied to the cons and nil markers.
fn match_cons<'e>(
    expr: &'e Expr,
    cons: &Rc<Expr>,
    nil: &Rc<Expr>,
) -> Option<(&'e Rc<Expr>, &'e Rc<Expr>)> {
    let (selected, gravestone) = match expr {
        Expr::App(function, argument) => (function, argument),
        _ => return None
    };
    if gravestone != nil {
        return None;
    }
    let (with_head, tail) = match &**selected {
        Expr::App(function, argument) => (function, argument),
        _ => return None
    };
    match &**with_head {
        Expr::App(selector, head) if selector == cons => Some((head, tail)),
        _ => None
    }
}

/// The elements of a cons list, undecoded. All cells are decoded out of one
/// budget of `limit` steps, so a list without an end fails instead of
/// being unwrapped forever.
pub fn reify_list(
    expr: &Rc<Expr>,
    limit: usize,
    supply: &mut VarSupply,
) -> DecodeResult<Vec<Rc<Expr>>> {
    let cons = Expr::free(CONS_MARKER);
    let nil = Expr::free(NIL_MARKER);
    let mut current = expr.clone();
    let mut budget = limit;
    let mut items = Vec::new();
    loop {
        if budget == 0 {
            log::debug!("list still going after {} steps", limit);
            return Err(DecodeError::new(Target::List, expr));
        }
        let marked = application(&current, [cons.clone(), nil.clone()]);
        let reduction = reduce(&marked, budget, supply);
        // an already stuck cell still costs one
        budget -= reduction.steps.max(1);
        if reduction.expr == nil {
            return Ok(items);
        }
        let tail = match match_cons(&reduction.expr, &cons, &nil) {
            Some((head, tail)) => {
                items.push(head.clone());
                tail.clone()
            }
            None => return Err(DecodeError::new(Target::List, expr))
        };
        current = tail;
    }
}

/// A decoded value, or the term itself when nothing fits.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(usize),
    Boolean(bool),
    List(Vec<Value>),
    Term(Rc<Expr>)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::List(items) => {
                write!(f, "[")?;
                let mut first = true;
                for item in items {
                    if first { write!(f, "{}", item)?; }
                    else { write!(f, ", {}", item)?; }
                    first = false;
                }
                write!(f, "]")
            }
            Value::Term(expr) => write!(f, "{}", expr)
        }
    }
}

/// Integer first, then boolean, then a list of best-effort elements.
///
/// The encodings overlap: `λt f.f` is both `false` and `0`, and comes out
/// as `0`.
pub fn reify_any(expr: &Rc<Expr>, limit: usize, supply: &mut VarSupply) -> Value {
    reify_int(expr, limit, supply)
        .map(Value::Integer)
        .or_else(|_| reify_bool(expr, limit, supply).map(Value::Boolean))
        .or_else(|_| reify_list_any(expr, limit, supply).map(Value::List))
        .unwrap_or_else(|_| Value::Term(expr.clone()))
}

/// A list whose elements are decoded with [`reify_any`].
pub fn reify_list_any(
    expr: &Rc<Expr>,
    limit: usize,
    supply: &mut VarSupply,
) -> DecodeResult<Vec<Value>> {
    let items = reify_list(expr, limit, supply)?;
    Ok(items.iter().map(|item| reify_any(item, limit, supply)).collect())
}

#[cfg(test)]
mod test;
