//! Whitespace-delimited token reading over a line-oriented input.
//!
//! Tokens may be spread across lines. When a token fails to parse, the rest
//! of its line is discarded so the next prompt starts on fresh input. Bytes
//! that are not UTF-8 become replacement characters, so such a line reads as
//! malformed tokens rather than an I/O failure.

use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::str::FromStr;

/// Result of reading one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input<T> {
    /// A well-formed value.
    Value(T),
    /// The token did not parse; the remainder of its line was dropped.
    Invalid,
    /// Input is exhausted.
    Eof,
}

pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> io::Result<Option<String>> {
        let mut line = Vec::new();
        while self.pending.is_empty() {
            line.clear();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_owned),
            );
        }
        Ok(self.pending.pop_front())
    }

    /// Reads and parses the next token.
    pub fn read<T: FromStr>(&mut self) -> io::Result<Input<T>> {
        let Some(token) = self.next_token()? else {
            return Ok(Input::Eof);
        };
        match token.parse() {
            Ok(value) => Ok(Input::Value(value)),
            Err(_) => {
                tracing::debug!(%token, "discarding malformed input");
                self.pending.clear();
                Ok(Input::Invalid)
            }
        }
    }
}
