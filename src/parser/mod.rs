mod ast;
mod error;

pub use self::ast::{Ast, AstNode, MAX_NESTING};
pub use self::error::ParseError;
