//! # Token Console
//!
//! Whitespace-tokenized console I/O for the session loop.
//!
//! The operator types tokens, not structured lines: an item name and its
//! quantity may share a line or arrive on separate lines, and the till
//! treats both the same. `Console` buffers whatever `BufRead` yields and
//! hands out one token at a time, which is exactly the granularity every
//! prompt in the session works at.
//!
//! Both handles are injected, so tests drive a full session from a string
//! and capture everything the operator would see.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Tokenized reader plus prompt writer over arbitrary I/O handles.
#[derive(Debug)]
pub struct Console<R, W> {
    reader: R,
    writer: W,
    tokens: VecDeque<String>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps a reader/writer pair.
    pub fn new(reader: R, writer: W) -> Self {
        Console {
            reader,
            writer,
            tokens: VecDeque::new(),
        }
    }

    /// Returns the next whitespace-separated token, or `None` at end of
    /// input.
    ///
    /// Blank lines are skipped; a line with several tokens feeds several
    /// calls.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.tokens.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.tokens
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.tokens.pop_front())
    }

    /// Writes a prompt without a trailing newline and flushes, then reads
    /// the next token.
    pub fn prompt_token(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;
        self.next_token()
    }

    /// Writes one line of output.
    pub fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{text}")
    }

    /// Writes pre-formatted text (e.g. a rendered receipt) verbatim.
    pub fn write_text(&mut self, text: &str) -> io::Result<()> {
        write!(self.writer, "{text}")?;
        self.writer.flush()
    }

    /// Consumes the console and returns the writer. Tests use this to
    /// inspect everything the operator would have seen.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console_over(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_tokens_split_within_a_line() {
        let mut console = console_over("Egg 2\n");
        assert_eq!(console.next_token().unwrap().as_deref(), Some("Egg"));
        assert_eq!(console.next_token().unwrap().as_deref(), Some("2"));
        assert_eq!(console.next_token().unwrap(), None);
    }

    #[test]
    fn test_tokens_across_lines_and_blank_lines() {
        let mut console = console_over("Egg\n\n  2  \nEND\n");
        assert_eq!(console.next_token().unwrap().as_deref(), Some("Egg"));
        assert_eq!(console.next_token().unwrap().as_deref(), Some("2"));
        assert_eq!(console.next_token().unwrap().as_deref(), Some("END"));
        assert_eq!(console.next_token().unwrap(), None);
    }

    #[test]
    fn test_eof_is_none_repeatedly() {
        let mut console = console_over("");
        assert_eq!(console.next_token().unwrap(), None);
        assert_eq!(console.next_token().unwrap(), None);
    }

    #[test]
    fn test_prompt_token_writes_prompt() {
        let mut console = console_over("admin\n");
        let token = console.prompt_token("Enter username: ").unwrap();
        assert_eq!(token.as_deref(), Some("admin"));
        assert_eq!(String::from_utf8(console.writer).unwrap(), "Enter username: ");
    }
}
