pub mod parser;

pub use parser::{parse_line, ParsedLine, SplitMode};

use std::io::BufRead;

/// Pulls one command line at a time off an input stream.
pub struct InputReader<R> {
    inner: R,
    buf: String,
}

impl<R: BufRead> InputReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: String::new(),
        }
    }

    /// Returns the next line including its newline, or `None` once the
    /// stream is exhausted. A final line without a newline is still returned.
    pub fn read_line(&mut self) -> std::io::Result<Option<String>> {
        self.buf.clear();
        match self.inner.read_line(&mut self.buf)? {
            0 => Ok(None),
            _ => Ok(Some(std::mem::take(&mut self.buf))),
        }
    }
}
