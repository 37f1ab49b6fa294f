//! Console writer implementations

use crate::core::{LogWriter, Result};
use std::io::{self, Write};

/// Writes lines to stdout.
pub struct ConsoleWriter;

impl ConsoleWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl LogWriter for ConsoleWriter {
    fn write_line(&mut self, line: &str) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", line)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        io::stdout().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

/// Writes lines to stderr. The default fallback stream for the triggering
/// error on critical shutdown.
pub struct StderrWriter;

impl StderrWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StderrWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl LogWriter for StderrWriter {
    fn write_line(&mut self, line: &str) -> Result<()> {
        let stderr = io::stderr();
        let mut handle = stderr.lock();
        writeln!(handle, "{}", line)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "stderr"
    }
}
