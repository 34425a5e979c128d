//! # homerules-adapter-console
//!
//! Line-oriented terminal adapter implementing the
//! [`Console`](homerules_app::ports::Console) port.
//!
//! Prompts ending in a space are written on the same line as the answer
//! (`"... from 0-23: "`); other prompts get a line of their own
//! (`"... Y/N"`). Output is flushed before every read so prompts appear
//! even when stdout is block buffered.
//!
//! ## Dependency rule
//!
//! Depends on `homerules-app` (port traits) and `homerules-domain` only.

mod error;

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use homerules_app::ports::Console;
use homerules_domain::error::HomeRulesError;

pub use error::ConsoleError;

/// [`Console`] over a buffered reader and a writer.
pub struct StdioConsole<R, W> {
    reader: R,
    writer: W,
}

impl StdioConsole<BufReader<Stdin>, Stdout> {
    /// Console bound to the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdioConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the writer, e.g. to inspect captured output.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn prompt(&mut self, prompt: &str) -> Result<(), ConsoleError> {
        if prompt.ends_with(' ') {
            write!(self.writer, "{prompt}")?;
        } else {
            writeln!(self.writer, "{prompt}")?;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>, ConsoleError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            tracing::debug!("console input closed");
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

impl<R: BufRead, W: Write> Console for StdioConsole<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>, HomeRulesError> {
        self.prompt(prompt)?;
        Ok(self.read_line()?)
    }

    fn say(&mut self, line: &str) -> Result<(), HomeRulesError> {
        writeln!(self.writer, "{line}").map_err(ConsoleError::from)?;
        Ok(())
    }
}
