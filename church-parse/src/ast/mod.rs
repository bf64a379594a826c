mod expr;

pub use expr::*;

// How the result of an evaluation should be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Object,
    Integer,
    Boolean,
    List
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement<'src> {
    // name = expr
    Binding(&'src str, Expr<'src>),
    // expr, or :i / :b / :l expr
    Eval(Expr<'src>, Format),
    // :debug
    Debug
}
