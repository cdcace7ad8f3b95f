/*!
# Rust Language Module

This Rust module provides lexical analysis of statements, grouping of
argument tokens and construction of expression trees.

*/

#[macro_use]
mod error;
mod group;
mod lex;
mod line;
mod token;
mod tree;

pub use error::Error;
pub use error::ErrorCode;
pub use group::group;
pub use lex::lex;
pub use line::{line_number, Boundary};
pub use token::{Kind, Operator, Separator, Token, Word};
pub use tree::{Node, NodeId, Tree};

pub type Column = std::ops::Range<usize>;
pub type LineNumber = u16;

/// Largest line number a program line may carry. Only the first four
/// digits of a line are ever read.
pub const MAX_LINE_NUMBER: LineNumber = 9999;

/// Goto goal used by `STOP`. No line can satisfy it so the stepper skips
/// to the end of the program.
pub const STOP_LINE: LineNumber = MAX_LINE_NUMBER + 1;
