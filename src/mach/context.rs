use super::command::{Args, Command};
use super::{evaluate, DataCursor, Flow, ForLoop, Offset, Stack, Var};
use crate::error;
use crate::lang::{group, lex, Error, Kind, Token};
use crate::screen::Display;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Run state
///
/// Everything one program run owns. Command handlers receive it by
/// mutable reference.

pub struct Context {
    pub(super) source: Rc<str>,
    pub vars: Var,
    pub loops: HashMap<Rc<str>, ForLoop>,
    pub returns: Stack<Offset>,
    pub display: Display,
    pub rng: StdRng,
    data: Option<DataCursor>,
}

impl Context {
    pub fn new(source: Rc<str>, display: Display) -> Context {
        Context {
            source,
            vars: Var::new(),
            loops: HashMap::new(),
            returns: Stack::new("GOSUB STACK OVERFLOW"),
            display,
            rng: StdRng::from_entropy(),
            data: None,
        }
    }

    pub fn evaluate(&mut self, tokens: &[Token]) -> Result<f64> {
        evaluate(tokens, &self.vars, &mut self.rng)
    }

    /// The DATA cursor, harvested from the whole program on first use.
    pub fn data(&mut self) -> Result<&mut DataCursor> {
        let cursor = match self.data.take() {
            Some(cursor) => cursor,
            None => DataCursor::harvest(&self.source)?,
        };
        Ok(self.data.insert(cursor))
    }

    /// Run one statement. Blank statements and bare line numbers do nothing.
    pub fn execute(&mut self, text: &str) -> Result<Option<Flow>> {
        let tokens = match lex(text) {
            Some(tokens) => tokens,
            None => return Ok(None),
        };
        let name = match &tokens[0].kind {
            Kind::Ident(name) => name,
            _ => return Err(error!(SyntaxError, ..&tokens[0].col; "EXPECTED COMMAND")),
        };
        let command = match Command::find(name) {
            Some(command) => command,
            None => return Err(error!(UnknownCommand, ..&tokens[0].col)),
        };
        let grouped = group(&tokens[1..], command.assigns);
        let args = Args::bind(self, command, &grouped, text)?;
        (command.handler)(self, &args)
    }
}
