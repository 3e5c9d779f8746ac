//! Line-based terminal I/O
//!
//! Wraps any buffered reader and writer so the session can run against
//! stdin/stdout or in-memory buffers alike.

use crate::error::{AssistantError, Result};
use std::io::{BufRead, Write};
use tracing::trace;

/// Synchronous line input source and output sink
#[derive(Debug)]
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write `prompt` and block for the next line.
    ///
    /// Returns `Ok(None)` at end of input. The line terminator is stripped and
    /// bytes that are not valid UTF-8 become replacement characters.
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.output
            .write_all(prompt.as_bytes())
            .and_then(|()| self.output.flush())
            .map_err(|e| AssistantError::terminal("write prompt", e))?;

        let mut buf = Vec::new();
        let bytes = self
            .input
            .read_until(b'\n', &mut buf)
            .map_err(|e| AssistantError::terminal("read line", e))?;

        if bytes == 0 {
            trace!("End of input");
            return Ok(None);
        }

        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Write one line of output
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}")
            .and_then(|()| self.output.flush())
            .map_err(|e| AssistantError::terminal("write line", e))
    }

    /// Consume the terminal and hand back its output sink
    pub fn into_output(self) -> W {
        self.output
    }
}
