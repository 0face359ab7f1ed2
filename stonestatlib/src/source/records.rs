//! Lazy record stream over line-delimited input.
//!
//! Each physical line is trimmed; lines that are empty after trimming are
//! skipped entirely. No validation happens here, a malformed board is yielded
//! unchanged so the extractor can reject it.

use std::io::{BufRead, Lines};

use crate::Result;

/// Iterator over the trimmed, non-blank lines of a reader.
///
/// Only one line is held in memory at a time, so arbitrarily large inputs can
/// be streamed. The stream is single-pass.
pub struct Records<R> {
    lines: Lines<R>,
}

impl<R: BufRead> Records<R> {
    /// Wrap a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

impl<R: BufRead> Iterator for Records<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed.len() == line.len() {
                return Some(Ok(line));
            }
            return Some(Ok(trimmed.to_string()));
        }
    }
}

/// Stream the records of a buffered reader.
pub fn records<R: BufRead>(reader: R) -> Records<R> {
    Records::new(reader)
}
