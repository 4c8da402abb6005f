//! # Token Reader
//!
//! Whitespace-delimited tokens from an interactive stream.
//!
//! Several answers may be typed on one line (`1 2` answers both the choice
//! and the quantity prompt). When an answer is rejected, the rest of its line
//! is thrown away with [`TokenReader::discard_line`] so that stale tokens do
//! not answer the next prompt.

use std::collections::VecDeque;
use std::io::{self, BufRead};

pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        TokenReader {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, reading more lines as needed. `None` at end of input.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut buf = Vec::new();
            if self.reader.read_until(b'\n', &mut buf)? == 0 {
                return Ok(None);
            }
            let line = String::from_utf8_lossy(&buf);
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Drops whatever is left of the current line.
    pub fn discard_line(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_tokens_span_lines() {
        let mut reader = TokenReader::new(Cursor::new("1 2\n\n  3\t4\n5"));
        let mut tokens = Vec::new();
        while let Some(token) = reader.next_token().unwrap() {
            tokens.push(token);
        }
        assert_eq!(tokens, ["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_discard_line_only_drops_current_line() {
        let mut reader = TokenReader::new(Cursor::new("x 9 9\n3\n"));
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("x"));
        reader.discard_line();
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("3"));
        assert_eq!(reader.next_token().unwrap(), None);
    }

    #[test]
    fn test_invalid_utf8_is_not_fatal() {
        let mut reader = TokenReader::new(Cursor::new(vec![0xff, b' ', b'0', b'\n']));
        assert!(reader.next_token().unwrap().is_some());
        assert_eq!(reader.next_token().unwrap().as_deref(), Some("0"));
    }
}
