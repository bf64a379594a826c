use std::fmt;

// Surface expressions, exactly as written. Names are still plain
// strings here: binders are resolved when the core transpiles them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr<'src> {
    Symbol(&'src str),
    App(Box<Expr<'src>>, Box<Expr<'src>>),
    // \a b c. body, parameters in source order
    Lambda(Vec<&'src str>, Box<Expr<'src>>)
}

impl<'src> Expr<'src> {
    pub fn app(function: Expr<'src>, argument: Expr<'src>) -> Self {
        Expr::App(Box::new(function), Box::new(argument))
    }

    pub fn lambda(params: Vec<&'src str>, body: Expr<'src>) -> Self {
        Expr::Lambda(params, Box::new(body))
    }
}

// Fully parenthesized, so the shape of the tree is visible.
impl fmt::Display for Expr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Symbol(name) => write!(f, "{}", name),
            Expr::App(function, argument) => write!(f, "({} {})", function, argument),
            Expr::Lambda(params, body) => write!(f, "(λ{}. {})", params.join(" "), body),
        }
    }
}
