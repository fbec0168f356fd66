//! Whitespace-separated token input.

use crate::error::{Err, Result};
use std::io::BufRead;
use std::str::FromStr;

/// A line-buffered reader yielding whitespace-separated tokens.
///
/// Tokens may be split across lines arbitrarily; the reader refills its line
/// buffer on demand and never looks ahead further than the current line.
pub struct TokenReader<R> {
    inner: R,
    line: String,
    cursor: usize,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            line: String::new(),
            cursor: 0,
        }
    }

    /// Return the next token.
    pub fn token(&mut self) -> Result<&str> {
        loop {
            let bytes = self.line.as_bytes();
            while self.cursor < bytes.len() && bytes[self.cursor].is_ascii_whitespace() {
                self.cursor += 1;
            }
            if self.cursor == self.line.len() {
                if !self.refill()? {
                    return Err(Err::UnexpectedEof);
                }
                continue;
            }
            let start = self.cursor;
            let bytes = self.line.as_bytes();
            while self.cursor < bytes.len() && !bytes[self.cursor].is_ascii_whitespace() {
                self.cursor += 1;
            }
            return Ok(&self.line[start..self.cursor]);
        }
    }

    /// Parse the next token as a `T`.
    pub fn value<T: FromStr>(&mut self) -> Result<T> {
        let token = self.token()?;
        token
            .parse()
            .map_err(|_| Err::BadToken(String::from(token)))
    }

    fn refill(&mut self) -> Result<bool> {
        self.line.clear();
        self.cursor = 0;
        Ok(self.inner.read_line(&mut self.line)? > 0)
    }
}
