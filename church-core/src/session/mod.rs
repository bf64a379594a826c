use std::io::Write;
use std::rc::Rc;

pub use church_parse::ast::Format;

use crate::env::Env;
use crate::eval::{reduce, Reduction, DEFAULT_STEP_LIMIT};
use crate::expr::{Expr, Symbol, VarSupply};
use crate::prelude::PRELUDE;
use crate::reify::{reify_bool, reify_int, reify_list_any, Value};
use crate::transpile::Transpile;
use crate::{Error, Result};

#[derive(Debug, Clone)]
pub enum Statement {
    Binding(Symbol, Rc<Expr>),
    Eval(Rc<Expr>, Format),
    Debug
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    // Budget for every evaluation and every decoder
    pub step_limit: usize,
    pub prelude: bool
}

impl Default for Config {
    fn default() -> Self {
        Config { step_limit: DEFAULT_STEP_LIMIT, prelude: true }
    }
}

/// An evaluation session: the bindings made so far, and the supply their
/// bound variables came from.
pub struct Session {
    env: Env,
    supply: VarSupply,
    config: Config
}

impl Session {
    pub fn new(config: Config) -> Result<Self> {
        let mut session = Session {
            env: Env::new(),
            supply: VarSupply::new(),
            config
        };
        if config.prelude {
            session.load_prelude()?;
        }
        Ok(session)
    }

    pub fn env(&self) -> &Env {
        &self.env
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn load_prelude(&mut self) -> Result<()> {
        let mut sink = std::io::sink();
        for line in PRELUDE.lines() {
            self.run_line(line, &mut sink)?;
        }
        log::debug!("prelude loaded, {} bindings", self.env.len());
        Ok(())
    }

    /// Parses one line. Blank lines have no statement.
    pub fn parse(&mut self, line: &str) -> Result<Option<Statement>> {
        if line.trim().is_empty() {
            return Ok(None);
        }
        let ast = church_parse::parse_statement(line)?;
        Ok(Some(ast.transpile(&mut self.supply)))
    }

    pub fn run_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<()> {
        match self.parse(line)? {
            Some(statement) => self.execute(statement, out),
            None => Ok(())
        }
    }

    /// Runs `src` line by line. A failing line is handed to `on_error`
    /// together with its 1-based line number, and the rest still runs.
    pub fn run_source<W, F>(&mut self, src: &str, out: &mut W, mut on_error: F)
    where
        W: Write,
        F: FnMut(usize, Error),
    {
        for (index, line) in src.lines().enumerate() {
            if let Err(e) = self.run_line(line, out) {
                on_error(index + 1, e);
            }
        }
    }

    pub fn execute<W: Write>(&mut self, statement: Statement, out: &mut W) -> Result<()> {
        let limit = self.config.step_limit;
        match statement {
            Statement::Binding(symbol, expr) => {
                let resolved = self.env.resolve(&expr);
                let reduction = self.normalize(&resolved);
                // no normal form within the budget: keep the resolved term
                let value = if reduction.normal { reduction.expr } else { resolved };
                log::debug!("{} bound", symbol);
                self.env.insert(symbol, value);
            }
            Statement::Eval(expr, format) => {
                let resolved = self.env.resolve(&expr);
                let value = self.normalize(&resolved).expr;
                let supply = &mut self.supply;
                match format {
                    Format::Object => writeln!(out, "{}", value)?,
                    Format::Integer => writeln!(out, "{}", reify_int(&value, limit, supply)?)?,
                    Format::Boolean => writeln!(out, "{}", reify_bool(&value, limit, supply)?)?,
                    Format::List => {
                        let items = reify_list_any(&value, limit, supply)?;
                        writeln!(out, "{}", Value::List(items))?
                    }
                }
            }
            Statement::Debug => write!(out, "{}", self.env)?
        }
        Ok(())
    }

    fn normalize(&mut self, resolved: &Rc<Expr>) -> Reduction {
        let reduction = reduce(resolved, self.config.step_limit, &mut self.supply);
        log::debug!("reduced in {} steps (normal form: {})", reduction.steps, reduction.normal);
        reduction
    }
}
