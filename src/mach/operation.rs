use crate::error;
use crate::lang::{Error, Operator};

type Result<T> = std::result::Result<T, Error>;

/// ## Binary operators
///
/// Everything is an `f64`. Division by zero is not an error, it gives
/// infinity or NaN.

pub struct Operation {}

impl Operation {
    pub fn binary(op: Operator, lhs: f64, rhs: f64) -> Result<f64> {
        use Operator::*;
        match op {
            Plus => Ok(Operation::sum(lhs, rhs)),
            Minus => Ok(Operation::subtract(lhs, rhs)),
            Multiply => Ok(Operation::multiply(lhs, rhs)),
            Divide => Ok(Operation::divide(lhs, rhs)),
            Equal => Ok(Operation::truth(lhs == rhs)),
            NotEqual => Ok(Operation::truth(lhs != rhs)),
            Less => Ok(Operation::truth(lhs < rhs)),
            LessEqual => Ok(Operation::truth(lhs <= rhs)),
            Greater => Ok(Operation::truth(lhs > rhs)),
            GreaterEqual => Ok(Operation::truth(lhs >= rhs)),
            Negate | Sin | Cos | LParen | RParen => {
                Err(error!(SyntaxError; "NOT A BINARY OPERATOR"))
            }
        }
    }

    pub fn sum(lhs: f64, rhs: f64) -> f64 {
        lhs + rhs
    }

    pub fn subtract(lhs: f64, rhs: f64) -> f64 {
        lhs - rhs
    }

    pub fn multiply(lhs: f64, rhs: f64) -> f64 {
        lhs * rhs
    }

    pub fn divide(lhs: f64, rhs: f64) -> f64 {
        lhs / rhs
    }

    fn truth(b: bool) -> f64 {
        if b {
            1.0
        } else {
            0.0
        }
    }
}
