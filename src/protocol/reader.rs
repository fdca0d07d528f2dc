//! Lazy whitespace-token reader.
//!
//! Pulls input one line at a time so that a turn can be decided as soon as
//! its last token has arrived; it never reads ahead into the next turn.

use std::collections::VecDeque;
use std::io::BufRead;
use std::str::FromStr;

use super::error::ProtocolError;

/// Splits a line-oriented stream into whitespace-separated tokens.
pub struct TokenReader<R> {
    inner: R,
    pending: VecDeque<String>,
    line: String,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(inner: R) -> Self {
        TokenReader {
            inner,
            pending: VecDeque::new(),
            line: String::new(),
        }
    }

    /// Ensures at least one token is buffered. Returns false at end of input.
    fn fill(&mut self) -> Result<bool, ProtocolError> {
        while self.pending.is_empty() {
            self.line.clear();
            if self.inner.read_line(&mut self.line)? == 0 {
                return Ok(false);
            }
            self.pending
                .extend(self.line.split_whitespace().map(str::to_string));
        }
        Ok(true)
    }

    /// Returns true once the stream holds no further tokens.
    pub fn at_end(&mut self) -> Result<bool, ProtocolError> {
        Ok(!self.fill()?)
    }

    /// Returns the next token, describing what was `expected` if none is left.
    pub fn token(&mut self, expected: &'static str) -> Result<String, ProtocolError> {
        if !self.fill()? {
            return Err(ProtocolError::UnexpectedEnd(expected));
        }
        self.pending
            .pop_front()
            .ok_or(ProtocolError::UnexpectedEnd(expected))
    }

    /// Reads and parses the next token as a number.
    pub fn number<T: FromStr>(&mut self, expected: &'static str) -> Result<T, ProtocolError> {
        let token = self.token(expected)?;
        token.parse::<T>().map_err(|_| ProtocolError::InvalidNumber {
            expected,
            found: token,
        })
    }

    /// Reads a `0`/`1` flag; any non-zero value is true.
    pub fn flag(&mut self, expected: &'static str) -> Result<bool, ProtocolError> {
        Ok(self.number::<i64>(expected)? != 0)
    }
}
