use std::io;

use thiserror::Error;

/// Reasons a program source can be rejected.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A `[` was still open when the source ran out.
    #[error("unexpected end of input: [ at byte {offset} is never closed")]
    UnexpectedEndOfInput { offset: usize },
    /// A `]` appeared with no enclosing `[`.
    #[error("unexpected ] at byte {offset}: no matching [")]
    UnexpectedLoopClose { offset: usize },
    /// Loops nested deeper than the parser accepts.
    #[error("[ at byte {offset} nests loops deeper than {limit} levels")]
    NestingTooDeep { offset: usize, limit: usize },
    #[error("failed to read program source")]
    Io(#[from] io::Error),
}
