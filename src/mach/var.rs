use crate::error;
use crate::lang::Error;
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// Names are stored uppercase. Reading a name that was never assigned
/// gives zero.

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<Rc<str>, f64>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn fetch(&self, var_name: &str) -> f64 {
        self.vars.get(var_name).copied().unwrap_or(0.0)
    }

    pub fn store(&mut self, var_name: &Rc<str>, value: f64) -> Result<()> {
        if self.vars.len() > u16::MAX as usize && !self.vars.contains_key(var_name) {
            return Err(error!(OutOfMemory; "TOO MANY VARIABLES"));
        }
        self.vars.insert(var_name.clone(), value);
        Ok(())
    }
}
