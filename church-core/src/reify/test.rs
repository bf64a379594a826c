use std::rc::Rc;

use test_log::test;

use super::*;
use crate::eval::DEFAULT_STEP_LIMIT;
use crate::expr::VarSupply;
use crate::transpile::Transpile;

const TRUE: &str = r"(\x _.x)";
const FALSE: &str = r"(\_ y.y)";
const CONS: &str = r"(\a b f.f a b)";
const NIL: &str = r"(\_ y.y)";

fn term(supply: &mut VarSupply, src: &str) -> Rc<Expr> {
    church_parse::parse_expr(src).unwrap().transpile(supply)
}

fn numeral(n: usize) -> String {
    format!(r"(\f z.{}z{})", "f (".repeat(n), ")".repeat(n))
}

fn list(items: &[String]) -> String {
    items.iter().rev().fold(NIL.to_string(), |tail, head| {
        format!("({} {} {})", CONS, head, tail)
    })
}

#[test]
fn integers_round_trip() {
    let mut supply = VarSupply::new();
    for n in 0..=20 {
        let expr = term(&mut supply, &numeral(n));
        assert_eq!(reify_int(&expr, DEFAULT_STEP_LIMIT, &mut supply).unwrap(), n);
    }
}

#[test]
fn integer_after_reduction() {
    let mut supply = VarSupply::new();
    let plus = r"(\m n f z.m f (n f z))";
    let expr = term(&mut supply, &format!("{} {} {}", plus, numeral(2), numeral(3)));
    assert_eq!(reify_int(&expr, DEFAULT_STEP_LIMIT, &mut supply).unwrap(), 5);
}

#[test]
fn booleans_round_trip() {
    let mut supply = VarSupply::new();
    assert!(reify_bool(&term(&mut supply, TRUE), DEFAULT_STEP_LIMIT, &mut supply).unwrap());
    assert!(!reify_bool(&term(&mut supply, FALSE), DEFAULT_STEP_LIMIT, &mut supply).unwrap());
}

#[test]
fn numeral_is_not_a_boolean() {
    let mut supply = VarSupply::new();
    for n in [1, 2, 5] {
        let expr = term(&mut supply, &numeral(n));
        let err = reify_bool(&expr, DEFAULT_STEP_LIMIT, &mut supply).unwrap_err();
        assert_eq!(err.target(), Target::Boolean);
        assert!(Rc::ptr_eq(err.expr(), &expr));
    }
}

#[test]
fn free_variable_is_not_an_integer() {
    let mut supply = VarSupply::new();
    let expr = Expr::free("undefinedSymbol");
    let err = reify_int(&expr, DEFAULT_STEP_LIMIT, &mut supply).unwrap_err();
    assert_eq!(err.target(), Target::Integer);
    assert_eq!(err.to_string(), "Expression undefinedSymbol is not an integer");
}

#[test]
fn wrong_successor_is_not_an_integer() {
    let mut supply = VarSupply::new();
    // applies something other than f
    let expr = term(&mut supply, r"\f z.g z");
    assert!(reify_int(&expr, DEFAULT_STEP_LIMIT, &mut supply).is_err());
}

#[test]
fn lists_round_trip() {
    let mut supply = VarSupply::new();
    let empty = term(&mut supply, NIL);
    assert!(reify_list(&empty, DEFAULT_STEP_LIMIT, &mut supply).unwrap().is_empty());

    let expr = term(&mut supply, &list(&[numeral(1), numeral(2)]));
    let items = reify_list(&expr, DEFAULT_STEP_LIMIT, &mut supply).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(reify_int(&items[0], DEFAULT_STEP_LIMIT, &mut supply).unwrap(), 1);
    assert_eq!(reify_int(&items[1], DEFAULT_STEP_LIMIT, &mut supply).unwrap(), 2);

    let values = reify_list_any(&expr, DEFAULT_STEP_LIMIT, &mut supply).unwrap();
    assert_eq!(Value::List(values).to_string(), "[1, 2]");
}

#[test]
fn list_shape_is_exact() {
    let mut supply = VarSupply::new();
    // a triple is not a cons cell
    let triple = term(&mut supply, r"\f.f a b c");
    assert_eq!(reify_list(&triple, DEFAULT_STEP_LIMIT, &mut supply).unwrap_err().target(), Target::List);
    // arguments in the wrong order
    let swapped = term(&mut supply, r"\f g.g f");
    assert!(reify_list(&swapped, DEFAULT_STEP_LIMIT, &mut supply).is_err());
    // a well formed head with a tail that is not a list
    let bad_tail = term(&mut supply, &format!("{} {} x", CONS, numeral(1)));
    assert!(reify_list(&bad_tail, DEFAULT_STEP_LIMIT, &mut supply).is_err());
}

#[test]
fn best_effort_values() {
    let mut supply = VarSupply::new();
    let check = |supply: &mut VarSupply, src: &str, printed: &str| {
        let expr = term(supply, src);
        assert_eq!(reify_any(&expr, DEFAULT_STEP_LIMIT, supply).to_string(), printed, "{}", src);
    };
    check(&mut supply, &numeral(7), "7");
    check(&mut supply, TRUE, "true");
    // false and zero share an encoding
    check(&mut supply, FALSE, "0");
    check(&mut supply, &list(&[TRUE.to_string(), numeral(3)]), "[true, 3]");
    check(&mut supply, &list(&[list(&[numeral(1)]), TRUE.to_string()]), "[[1], true]");
    // identity applied to f and z is f z, which reads as 1
    check(&mut supply, r"\x.x", "1");
    check(&mut supply, r"\x.x x", "λx.x x");
}

#[test]
fn step_limit_applies_to_decoding() {
    let mut supply = VarSupply::new();
    let expr = term(&mut supply, &numeral(3));
    // applying the markers alone takes two steps
    assert!(reify_int(&expr, 1, &mut supply).is_err());
    assert_eq!(reify_int(&expr, 2, &mut supply).unwrap(), 3);
}

#[test]
fn endless_list_runs_out_of_budget() {
    let mut supply = VarSupply::new();
    let y = r"(\f.(\x.f (x x)) (\x.f (x x)))";
    let ones = term(&mut supply, &format!("{} ({} {})", y, CONS, numeral(1)));
    let err = reify_list(&ones, DEFAULT_STEP_LIMIT, &mut supply).unwrap_err();
    assert_eq!(err.target(), Target::List);
    assert!(reify_list_any(&ones, 50, &mut supply).is_err());
}

#[test]
fn list_cells_share_one_budget() {
    let mut supply = VarSupply::new();
    let expr = term(&mut supply, &list(&[numeral(1), numeral(2), numeral(3)]));
    assert_eq!(reify_list(&expr, DEFAULT_STEP_LIMIT, &mut supply).unwrap().len(), 3);
    // too few steps for the whole list
    assert!(reify_list(&expr, 4, &mut supply).is_err());
}
