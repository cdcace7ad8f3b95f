/*!
## Rust Machine Module

This Rust module evaluates expressions, binds command arguments and steps
through a program one statement at a time.

*/

mod command;
mod context;
mod data;
mod eval;
mod flow;
mod function;
mod operation;
mod runtime;
mod stack;
mod var;

pub use command::{Arg, Args, Command, Shape};
pub use context::Context;
pub use data::DataCursor;
pub use eval::evaluate;
pub use flow::{Flow, ForLoop, Offset};
pub use function::Function;
pub use operation::Operation;
pub use runtime::{Event, Runtime};
pub use stack::Stack;
pub use var::Var;
