//! # ZX BASIC
//!
//! Run a program and keep what it drew.
//!

mod term;

fn main() -> anyhow::Result<()> {
    term::main()
}
