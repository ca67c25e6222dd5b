use std::io::{self, BufReader, Read};
use std::iter::Enumerate;
use std::slice;

use super::ParseError;

/// Deepest loop nesting accepted by the parser.
///
/// Both parsing and execution recurse once per level, so this bounds their
/// stack use.
pub const MAX_NESTING: usize = 1024;

/// BrainFuck AST node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AstNode {
    /// Add one to the current memory cell.
    Incr,
    /// Remove one from the current memory cell.
    Decr,
    /// Shift the data pointer one cell to the right.
    Next,
    /// Shift the data pointer one cell to the left.
    Prev,
    /// Write the current memory cell to the output.
    Print,
    /// Read one byte from the input into the current memory cell.
    Read,
    /// Loop over the contained instructions while the current memory cell is
    /// not zero.
    Loop(Vec<AstNode>),
}

/// A fully parsed program: the top-level instruction sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ast {
    data: Vec<AstNode>,
}

impl Ast {
    /// Parse a complete program from a byte source.
    ///
    /// Bytes other than the eight instruction characters are comments and are
    /// skipped. Nothing is returned unless every bracket is balanced.
    ///
    /// # Errors
    ///
    /// `UnexpectedEndOfInput` for a `[` that is never closed,
    /// `UnexpectedLoopClose` for a `]` without an opening `[`, `NestingTooDeep`
    /// for loops nested past [`MAX_NESTING`], and `Io` if the source itself
    /// cannot be read.
    pub fn parse<R: Read>(source: R) -> Result<Self, ParseError> {
        let mut bytes = BufReader::new(source).bytes().enumerate();
        let data = Self::parse_sequence(&mut bytes, None, 0)?;

        Ok(Self { data })
    }

    /// Parse instructions until the loop opened at `open` is closed, or until
    /// the end of input when `open` is `None`. `depth` counts enclosing loops.
    fn parse_sequence<I>(
        bytes: &mut Enumerate<I>,
        open: Option<usize>,
        depth: usize,
    ) -> Result<Vec<AstNode>, ParseError>
    where
        I: Iterator<Item = io::Result<u8>>,
    {
        let mut nodes = Vec::new();

        while let Some((offset, byte)) = bytes.next() {
            let node = match byte? {
                b'+' => AstNode::Incr,
                b'-' => AstNode::Decr,
                b'>' => AstNode::Next,
                b'<' => AstNode::Prev,
                b'.' => AstNode::Print,
                b',' => AstNode::Read,
                b'[' if depth == MAX_NESTING => {
                    return Err(ParseError::NestingTooDeep {
                        offset,
                        limit: MAX_NESTING,
                    });
                }
                b'[' => AstNode::Loop(Self::parse_sequence(bytes, Some(offset), depth + 1)?),
                b']' => {
                    return match open {
                        Some(_) => Ok(nodes),
                        None => Err(ParseError::UnexpectedLoopClose { offset }),
                    };
                }
                // All other characters are comments and will be ignored
                _ => continue,
            };

            nodes.push(node);
        }

        match open {
            Some(offset) => Err(ParseError::UnexpectedEndOfInput { offset }),
            None => Ok(nodes),
        }
    }

    /// Number of top-level instructions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over the top-level instructions in program order.
    pub fn iter(&self) -> slice::Iter<'_, AstNode> {
        self.data.iter()
    }
}

impl<'a> IntoIterator for &'a Ast {
    type Item = &'a AstNode;
    type IntoIter = slice::Iter<'a, AstNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
