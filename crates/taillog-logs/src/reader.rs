use std::io::BufRead;

use crate::error::TailError;

/// One raw input line, terminator included
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawLine {
    /// 1-based position in the input
    pub number: u64,
    pub bytes: Vec<u8>,
}

/// Splits a byte stream on `\n` without decoding it
pub struct LineReader<R> {
    inner: R,
    next_number: u64,
    done: bool,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            next_number: 1,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<RawLine, TailError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let number = self.next_number;
        let mut bytes = Vec::new();
        match self.inner.read_until(b'\n', &mut bytes) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                self.next_number += 1;
                Some(Ok(RawLine { number, bytes }))
            }
            Err(source) => {
                self.done = true;
                Some(Err(TailError::Read {
                    line: number,
                    source,
                }))
            }
        }
    }
}
