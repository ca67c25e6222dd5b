use super::{CancelToken, RunError, Tape};
use crate::parser::{Ast, AstNode};

/// Lifecycle of an interpreter. There are no transitions back to `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ready,
    Running,
    Completed,
    Cancelled,
    Failed,
}

/// Tree-walking brainfuck virtual machine.
///
/// Owns one tape for exactly one run.
#[derive(Debug)]
pub struct Interpreter {
    tape: Tape,
    status: Status,
}

impl Interpreter {
    #[must_use]
    pub fn new(tape: Tape) -> Self {
        Self {
            tape,
            status: Status::Ready,
        }
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    #[must_use]
    pub fn into_tape(self) -> Tape {
        self.tape
    }

    /// Execute `ast` against this interpreter's tape.
    ///
    /// `cancel` is checked before every top-level instruction and before every
    /// loop iteration at any depth.
    ///
    /// # Errors
    ///
    /// `Cancelled` once the token is signaled, `Io` when the output rejects a
    /// byte or the input fails, and `NotReady` if this interpreter has already
    /// run. Running out of input is not an error.
    pub fn run(&mut self, ast: &Ast, cancel: &CancelToken) -> Result<(), RunError> {
        if self.status != Status::Ready {
            return Err(RunError::NotReady(self.status));
        }
        self.status = Status::Running;

        let result = ast.iter().try_for_each(|node| {
            cancel.check()?;
            self.execute(node, cancel)
        });

        self.status = match result {
            Ok(()) => Status::Completed,
            Err(RunError::Cancelled { .. }) => Status::Cancelled,
            Err(_) => Status::Failed,
        };

        result
    }

    /// Execute a single node, recursing into loop bodies.
    fn execute(&mut self, node: &AstNode, cancel: &CancelToken) -> Result<(), RunError> {
        match node {
            AstNode::Incr => {
                let cell = self.tape.current_mut();
                *cell = cell.wrapping_add(1);
            }
            AstNode::Decr => {
                let cell = self.tape.current_mut();
                *cell = cell.wrapping_sub(1);
            }
            AstNode::Next => self.tape.shift_right(),
            AstNode::Prev => self.tape.shift_left(),
            AstNode::Print => self.tape.write_byte(self.tape.current())?,
            AstNode::Read => match self.tape.read_byte() {
                Ok(byte) => *self.tape.current_mut() = byte,
                // Leave the cell as it was once the input is exhausted.
                Err(RunError::EndOfInput) => {}
                Err(error) => return Err(error),
            },
            AstNode::Loop(body) => {
                while self.tape.current() != 0 {
                    cancel.check()?;

                    for node in body {
                        self.execute(node, cancel)?;
                    }
                }
            }
        }

        Ok(())
    }
}
