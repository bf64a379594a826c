pub mod util;
pub mod expr;
pub mod subst;
pub mod eval;
pub mod reify;
pub mod env;
pub mod transpile;
pub mod session;
pub mod prelude;

pub use util::error::{Error, ErrorKind, Result};
pub use session::{Config, Format, Session, Statement};
