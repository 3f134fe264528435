//! Line-oriented console
//!
//! Wraps any reader/writer pair so the session can run against stdio or an
//! in-memory buffer.

use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Prompting line reader plus output sink
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console over the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Show `prompt` and read one line.
    ///
    /// Returns `Ok(None)` at end of input. The trailing line terminator
    /// (`\n` or `\r\n`) is stripped; nothing else is.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.writer.write_all(prompt.as_bytes())?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// Write a message followed by a newline
    pub fn println(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.writer, "{}", message)?;
        self.writer.flush()
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}
