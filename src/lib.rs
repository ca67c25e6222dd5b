//! Tree-walking BrainFuck interpreter.
//!
//! Programs are parsed into an [`Ast`] once and run by an [`Interpreter`]
//! against a 256 cell circular [`Tape`]. Runs can be stopped from another
//! thread through a [`CancelToken`].

pub mod parser;
pub mod runnable;

pub use parser::{Ast, AstNode, MAX_NESTING, ParseError};
pub use runnable::{CancelToken, Interpreter, RunError, Status, TAPE_SIZE, Tape};
