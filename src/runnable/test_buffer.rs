use std::cell::RefCell;
use std::io::{self, Read, Write};
use std::rc::Rc;

/// Writeable buffer that tracks what was written to it. Clones share the same
/// storage, so a test can keep one handle while the tape owns another.
#[derive(Clone, Default)]
pub struct SharedBuffer {
    inner: Rc<RefCell<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_contents(&self) -> Vec<u8> {
        self.inner.borrow().clone()
    }

    pub fn get_string_content(&self) -> String {
        String::from_utf8(self.get_contents()).expect("Data was invalid utf-8")
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> Result<usize, io::Error> {
        self.inner.borrow_mut().write(buf)
    }

    fn flush(&mut self) -> Result<(), io::Error> {
        self.inner.borrow_mut().flush()
    }
}

/// Writer that rejects every byte.
pub struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> Result<usize, io::Error> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> Result<(), io::Error> {
        Ok(())
    }
}

/// Reader that fails every read with something other than end of input.
pub struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> Result<usize, io::Error> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "source closed"))
    }
}
