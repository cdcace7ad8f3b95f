use crate::lang::LineNumber;
use std::rc::Rc;

/// Byte offset into the program source.
pub type Offset = usize;

/// What a statement asks the stepper to do instead of falling through.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    Goto(LineNumber),
    Gosub(LineNumber),
    Jump(Offset),
    Loop(ForLoop),
    /// Skip whatever follows on this physical line.
    EndOfLine,
}

/// A live `FOR` loop, keyed by its variable name.
#[derive(Debug, Clone, PartialEq)]
pub struct ForLoop {
    pub var: Rc<str>,
    pub step: f64,
    pub target: f64,
    /// First statement of the body. Filled in by the stepper.
    pub resume: Offset,
}

impl ForLoop {
    pub fn new(var: Rc<str>, step: f64, target: f64) -> ForLoop {
        ForLoop {
            var,
            step,
            target,
            resume: 0,
        }
    }

    /// A zero step never finishes.
    pub fn is_done(&self, value: f64) -> bool {
        (self.step > 0.0 && value > self.target) || (self.step < 0.0 && value < self.target)
    }
}
