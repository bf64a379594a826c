use std::rc::Rc;

use church_parse::ast::{
    Expr as AstExpr,
    Statement as AstStatement,
};

use crate::expr::{make_lambda, Expr, Symbol, VarSupply};
use crate::session::Statement;

// Lowers the surface syntax into core terms. This is where binders get
// their fresh variables, so it needs the session's supply.
pub trait Transpile {
    type Output;

    fn transpile(&self, supply: &mut VarSupply) -> Self::Output;
}

impl Transpile for AstExpr<'_> {
    type Output = Rc<Expr>;

    fn transpile(&self, supply: &mut VarSupply) -> Rc<Expr> {
        match self {
            AstExpr::Symbol(name) => Expr::free(name),
            AstExpr::App(function, argument) => {
                let function = function.transpile(supply);
                let argument = argument.transpile(supply);
                Expr::app(function, argument)
            }
            AstExpr::Lambda(params, body) => {
                let body = body.transpile(supply);
                let params: Vec<Symbol> = params.iter().map(|p| Symbol::free(p)).collect();
                make_lambda(supply, &params, &body)
            }
        }
    }
}

impl Transpile for AstStatement<'_> {
    type Output = Statement;

    fn transpile(&self, supply: &mut VarSupply) -> Statement {
        match self {
            AstStatement::Binding(name, value) =>
                Statement::Binding(Symbol::free(name), value.transpile(supply)),
            AstStatement::Eval(expr, format) =>
                Statement::Eval(expr.transpile(supply), *format),
            AstStatement::Debug => Statement::Debug
        }
    }
}
