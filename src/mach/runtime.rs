use super::{Context, Flow, Offset};
use crate::error;
use crate::lang::{line_number, Boundary, Error, LineNumber};
use crate::screen::Display;
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Statement stepper
///
/// Owns one program run. The host calls [`Runtime::execute`] repeatedly;
/// each call runs a bounded batch of statements and returns.

pub struct Runtime {
    source: Rc<str>,
    index: Offset,
    state: State,
    interrupted: bool,
    ctx: Context,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Running,
    Skipping(LineNumber),
    Halted,
    Stopped,
}

/// Result of one batch.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Running,
    Stopped,
    Errors(Error),
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new("")
    }
}

impl Runtime {
    pub fn new(source: &str) -> Runtime {
        Runtime::with_display(source, Display::new())
    }

    pub fn with_display(source: &str, display: Display) -> Runtime {
        let source: Rc<str> = source.into();
        Runtime {
            ctx: Context::new(source.clone(), display),
            source,
            index: 0,
            state: State::Running,
            interrupted: false,
        }
    }

    /// Make `RND` repeatable.
    pub fn seed(&mut self, seed: u64) {
        self.ctx.rng = StdRng::seed_from_u64(seed);
    }

    /// Ask the run to stop with a `BREAK` error at the next batch.
    pub fn interrupt(&mut self) {
        self.interrupted = true;
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, State::Running | State::Skipping(_))
    }

    pub fn display(&self) -> &Display {
        &self.ctx.display
    }

    pub fn display_mut(&mut self) -> &mut Display {
        &mut self.ctx.display
    }

    pub fn var(&self, name: &str) -> f64 {
        self.ctx.vars.fetch(&name.to_ascii_uppercase())
    }

    pub fn has_loop(&self, name: &str) -> bool {
        self.ctx.loops.contains_key(name.to_ascii_uppercase().as_str())
    }

    pub fn loop_count(&self) -> usize {
        self.ctx.loops.len()
    }

    pub fn return_depth(&self) -> usize {
        self.ctx.returns.len()
    }

    /// Run at most `speed` statements.
    pub fn execute(&mut self, speed: usize) -> Event {
        if std::mem::take(&mut self.interrupted) && self.is_running() {
            self.state = State::Halted;
            debug!("interrupted at offset {}", self.index);
            return Event::Errors(error!(Break));
        }
        for _ in 0..speed.max(1) {
            if !self.is_running() {
                break;
            }
            if let Err(error) = self.step() {
                self.state = State::Halted;
                debug!("halted: {}", error);
                return Event::Errors(error);
            }
        }
        if self.is_running() {
            Event::Running
        } else {
            Event::Stopped
        }
    }

    fn step(&mut self) -> Result<()> {
        let source = self.source.clone();
        let (text, boundary) = loop {
            if self.index >= source.len() {
                debug!("end of program");
                self.state = State::Stopped;
                return Ok(());
            }
            let boundary = Boundary::find(&source, self.index);
            let text = source[self.index..boundary.stop].trim();
            if let State::Skipping(goal) = self.state {
                match line_number(text) {
                    Some(number) if number >= goal => self.state = State::Running,
                    _ => {
                        self.index = boundary.newline + 1;
                        continue;
                    }
                }
            }
            break (text, boundary);
        };
        trace!("{}: {}", self.index, text);
        let flow = self
            .ctx
            .execute(text)
            .map_err(|e| e.in_statement(text))?;
        let next = boundary.stop + 1;
        match flow {
            None => self.index = next,
            Some(Flow::Goto(line)) => self.goto(line),
            Some(Flow::Gosub(line)) => {
                self.ctx
                    .returns
                    .push(next)
                    .map_err(|e| e.in_statement(text))?;
                self.goto(line);
            }
            Some(Flow::EndOfLine) => self.index = boundary.newline + 1,
            Some(Flow::Jump(offset)) => {
                debug!("jump to offset {}", offset);
                self.index = offset;
            }
            Some(Flow::Loop(mut for_loop)) => {
                for_loop.resume = next;
                debug!("loop {} resumes at offset {}", for_loop.var, next);
                self.ctx.loops.insert(for_loop.var.clone(), for_loop);
                self.index = next;
            }
        }
        Ok(())
    }

    fn goto(&mut self, line: LineNumber) {
        debug!("goto line {}", line);
        self.index = 0;
        self.state = if line >= 1 {
            State::Skipping(line)
        } else {
            State::Running
        };
    }
}
