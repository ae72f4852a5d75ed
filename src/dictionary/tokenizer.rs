//! Whitespace tokenizer for word-list sources.
//!
//! Splits a buffered reader into maximal runs of bytes that are not ASCII
//! whitespace. Line breaks are ordinary whitespace; the line number is kept
//! only for diagnostics. No validation happens here: bytes that are not
//! valid UTF-8 are decoded lossily, so the trie rejects the token instead of
//! the whole source failing to read.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// A single token read from a word list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token text, with invalid UTF-8 replaced by U+FFFD
    pub text: String,
    /// 1-based line the token was read from
    pub line: usize,
}

/// Iterator over the whitespace-delimited tokens of a reader.
///
/// Yields `Err` once if the reader fails and ends afterwards.
#[derive(Debug)]
pub struct WordTokens<R> {
    reader: R,
    buffer: Vec<u8>,
    line: usize,
    pending: VecDeque<String>,
    finished: bool,
}

impl<R: BufRead> WordTokens<R> {
    /// Creates a tokenizer over `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::new(),
            line: 0,
            pending: VecDeque::new(),
            finished: false,
        }
    }
}

impl<R: BufRead> Iterator for WordTokens<R> {
    type Item = io::Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(text) = self.pending.pop_front() {
                return Some(Ok(Token {
                    text,
                    line: self.line,
                }));
            }
            if self.finished {
                return None;
            }

            self.buffer.clear();
            match self.reader.read_until(b'\n', &mut self.buffer) {
                Ok(0) => {
                    self.finished = true;
                }
                Ok(_) => {
                    self.line += 1;
                    self.pending.extend(
                        self.buffer
                            .split(u8::is_ascii_whitespace)
                            .filter(|token| !token.is_empty())
                            .map(|token| String::from_utf8_lossy(token).into_owned()),
                    );
                }
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            }
        }
    }
}
