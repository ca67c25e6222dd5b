use std::io;

use thiserror::Error;

use super::Status;

/// Failures raised while executing a program.
#[derive(Debug, Error)]
pub enum RunError {
    /// The input stream is exhausted. Swallowed by the read instruction and
    /// never returned from a run.
    #[error("end of input")]
    EndOfInput,
    #[error("I/O failure")]
    Io(#[from] io::Error),
    #[error("cancelled: {reason}")]
    Cancelled { reason: String },
    #[error("interpreter cannot run from the {0:?} state")]
    NotReady(Status),
}
