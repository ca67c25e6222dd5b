use std::fmt;
use std::io::{self, Read, Write};

use super::{RunError, TAPE_SIZE};

/// Memory, data pointer and I/O streams for a single run.
pub struct Tape {
    memory: [u8; TAPE_SIZE],
    /// Data pointer. Wraps at the tape length, so it is always a valid index.
    pointer: u8,
    /// Reader used by brainfuck's , command
    io_read: Box<dyn Read>,
    /// Writer used by brainfuck's . command
    io_write: Box<dyn Write>,
}

impl Default for Tape {
    fn default() -> Self {
        Self::new(io::stdin(), io::stdout())
    }
}

impl fmt::Debug for Tape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tape")
            .field("memory", &self.memory)
            .field("pointer", &self.pointer)
            .finish_non_exhaustive()
    }
}

impl Tape {
    /// Zeroed tape with the pointer at cell 0, bound to the given streams.
    pub fn new<R, W>(io_read: R, io_write: W) -> Self
    where
        R: Read + 'static,
        W: Write + 'static,
    {
        Self {
            memory: [0u8; TAPE_SIZE],
            pointer: 0,
            io_read: Box::new(io_read),
            io_write: Box::new(io_write),
        }
    }

    #[must_use]
    pub fn memory(&self) -> &[u8; TAPE_SIZE] {
        &self.memory
    }

    #[must_use]
    pub fn pointer(&self) -> u8 {
        self.pointer
    }

    /// Value of the cell under the data pointer.
    #[must_use]
    pub fn current(&self) -> u8 {
        self.memory[usize::from(self.pointer)]
    }

    pub(crate) fn current_mut(&mut self) -> &mut u8 {
        &mut self.memory[usize::from(self.pointer)]
    }

    pub(crate) fn shift_right(&mut self) {
        self.pointer = self.pointer.wrapping_add(1);
    }

    pub(crate) fn shift_left(&mut self) {
        self.pointer = self.pointer.wrapping_sub(1);
    }

    /// Pull the next byte from the input.
    ///
    /// An exhausted input is `RunError::EndOfInput`, anything else is an I/O
    /// failure.
    pub(crate) fn read_byte(&mut self) -> Result<u8, RunError> {
        let mut buf = [0u8; 1];

        match self.io_read.read_exact(&mut buf) {
            Ok(()) => Ok(buf[0]),
            Err(error) if error.kind() == io::ErrorKind::UnexpectedEof => Err(RunError::EndOfInput),
            Err(error) => Err(error.into()),
        }
    }

    /// Push one byte to the output and flush it straight away.
    pub(crate) fn write_byte(&mut self, byte: u8) -> Result<(), RunError> {
        self.io_write.write_all(&[byte])?;
        self.io_write.flush()?;
        Ok(())
    }
}
