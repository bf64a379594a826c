use std::error::Error as _;
use std::io;

use test_log::test;

use super::error::{Error, ErrorKind};
use crate::expr::Expr;
use crate::reify::{DecodeError, Target};

#[test]
fn io_errors_keep_their_message() {
    let e = Error::from(io::Error::new(io::ErrorKind::NotFound, "no history"));
    assert_eq!(e.kind(), ErrorKind::IO);
    assert_eq!(e.to_string(), "i/o error: no history");
    assert!(e.source().is_some());
    assert!(e.parse_error().is_none());
}

#[test]
fn errors_built_with_a_kind() {
    let e = Error::with_kind(ErrorKind::IO, "history file is locked");
    assert_eq!(e.kind(), ErrorKind::IO);
    assert_eq!(e.to_string(), "i/o error: history file is locked");
}

#[test]
fn parse_and_decode_errors() {
    let parse = church_parse::parse_statement("(").unwrap_err();
    let e = Error::from(parse.clone());
    assert_eq!(e.kind(), ErrorKind::Parse);
    assert_eq!(e.parse_error(), Some(&parse));
    assert!(e.to_string().starts_with("parse error: unexpected end of input"));

    let e = Error::from(DecodeError::new(Target::Boolean, &Expr::free("x")));
    assert_eq!(e.kind(), ErrorKind::Decode);
    assert_eq!(e.to_string(), "Expression x is not a boolean");
    assert!(e.decode_error().is_some());
}
