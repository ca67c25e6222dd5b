mod cancel;
mod error;
mod interpreter;
mod tape;
#[cfg(test)]
mod test_buffer;
#[cfg(test)]
pub use self::test_buffer::{FailingReader, FailingWriter, SharedBuffer};

pub use self::cancel::CancelToken;
pub use self::error::RunError;
pub use self::interpreter::{Interpreter, Status};
pub use self::tape::Tape;

/// Number of cells on the tape. One per value of the `u8` data pointer.
pub const TAPE_SIZE: usize = u8::MAX as usize + 1;
