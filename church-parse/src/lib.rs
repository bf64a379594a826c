use lalrpop_util::lalrpop_mod;
lalrpop_mod!(pub grammar); // synthesized by LALRPOP

pub mod ast;
pub mod error;
pub mod lexer;

pub use error::ParseError;
pub use lexer::Lexer;

use ast::{Expr, Statement};

/// Parses one input line into a statement.
pub fn parse_statement(src: &str) -> Result<Statement<'_>, ParseError> {
    let lexer = Lexer::new(src);
    let parser = grammar::StatementParser::new();
    let statement = parser.parse(src, lexer)?;
    log::debug!("AST: {:?}", statement);
    Ok(statement)
}

/// Parses a bare expression.
pub fn parse_expr(src: &str) -> Result<Expr<'_>, ParseError> {
    let lexer = Lexer::new(src);
    let parser = grammar::ExprParser::new();
    Ok(parser.parse(src, lexer)?)
}
