use crate::error;
use crate::lang::{Error, Operator};
use rand::Rng;

type Result<T> = std::result::Result<T, Error>;

pub struct Function {}

impl Function {
    pub fn unary(op: Operator, val: f64) -> Result<f64> {
        match op {
            Operator::Negate => Ok(Function::negate(val)),
            Operator::Sin => Ok(Function::sin(val)),
            Operator::Cos => Ok(Function::cos(val)),
            _ => Err(error!(SyntaxError; "NOT A FUNCTION")),
        }
    }

    pub fn negate(val: f64) -> f64 {
        -val
    }

    pub fn sin(val: f64) -> f64 {
        val.sin()
    }

    pub fn cos(val: f64) -> f64 {
        val.cos()
    }

    /// Uniform in `[0, 1)`. Drawn fresh on every call.
    pub fn rnd<R: Rng>(rng: &mut R) -> f64 {
        rng.gen::<f64>()
    }
}
