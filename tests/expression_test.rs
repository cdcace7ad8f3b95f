mod common;
use common::*;
use zxbasic::mach::Runtime;

fn eval(expr: &str) -> f64 {
    let (r, s) = run(&format!("LET R={}", expr));
    assert_eq!(s, "");
    r.var("R")
}

#[test]
fn test_precedence() {
    assert_eq!(eval("2 + 3 * 4"), 14.0);
    assert_eq!(eval("(2 + 3) * 4"), 20.0);
    assert_eq!(eval("2 * 3 + 4 * 5"), 26.0);
    assert_eq!(eval("1 + 2 < 2 * 2"), 1.0);
}

#[test]
fn test_left_assoc() {
    assert_eq!(eval("1 - 2 - 3"), -4.0);
    assert_eq!(eval("8 / 2 / 2"), 2.0);
    assert_eq!(eval("1.5 / 2 * 3"), 2.25);
}

#[test]
fn test_comparisons() {
    assert_eq!(eval("5 > 3"), 1.0);
    assert_eq!(eval("5 > 9"), 0.0);
    assert_eq!(eval("2 = 2"), 1.0);
    assert_eq!(eval("2 <> 2"), 0.0);
    assert_eq!(eval("3 <= 3"), 1.0);
    assert_eq!(eval("3 >= 4"), 0.0);
}

#[test]
fn test_unary() {
    assert_eq!(eval("-(2 + 3)"), -5.0);
    assert_eq!(eval("4 * -2"), -8.0);
    assert_eq!(eval("SIN 0"), 0.0);
    assert_eq!(eval("COS(0) * 3"), 3.0);
    assert!((eval("SIN(3.14159265 / 2)") - 1.0).abs() < 1e-9);
}

#[test]
fn test_nested_parentheses() {
    assert_eq!(eval("((1 + 2) * (3 + 4)) - 1"), 20.0);
    assert_eq!(eval("2 * (3 + 4"), 14.0);
}

#[test]
fn test_variables_default_to_zero() {
    let (r, s) = run("LET A=NOPE + 1\nLET B=A * 10");
    assert_eq!(s, "");
    assert_eq!(r.var("A"), 1.0);
    assert_eq!(r.var("b"), 10.0);
}

#[test]
fn test_division_by_zero_is_not_an_error() {
    assert_eq!(eval("1 / 0"), f64::INFINITY);
    assert!(eval("0 / 0").is_nan());
}

#[test]
fn test_rnd() {
    let mut a = Runtime::new("LET X=RND\nLET Y=RND");
    let mut b = Runtime::new("LET X=RND\nLET Y=RND");
    a.seed(99);
    b.seed(99);
    exec(&mut a);
    exec(&mut b);
    assert_eq!(a.var("X"), b.var("X"));
    assert_ne!(a.var("X"), a.var("Y"));
    assert!((0.0..1.0).contains(&a.var("Y")));
}

#[test]
fn test_randomize() {
    let (a, _) = run("RANDOMIZE 5\nLET X=RND");
    let (b, _) = run("LET Y=RND\nRANDOMIZE 5\nLET X=RND");
    assert_eq!(a.var("X"), b.var("X"));
}

#[test]
fn test_syntax_errors() {
    let (_, s) = run("LET A=2 3");
    assert_eq!(s, "SYNTAX ERROR IN \"LET A=2 3\" (8..9); MISSING OPERATOR\n");
    let (_, s) = run("LET A=(1))");
    assert_eq!(
        s,
        "SYNTAX ERROR IN \"LET A=(1))\" (9..10); UNMATCHED RIGHT PARENTHESIS\n"
    );
    let (_, s) = run("LET A=2*");
    assert_eq!(s, "SYNTAX ERROR IN \"LET A=2*\" (7..8); MISSING OPERAND\n");
}
