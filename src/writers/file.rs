//! File writer implementation

use crate::core::{LogWriter, LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

pub struct FileWriter {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl FileWriter {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::file_writer(path.display().to_string(), e.to_string()))?;

        Ok(Self {
            writer: BufWriter::new(file),
            path,
        })
    }

    fn io_error(&self, err: std::io::Error) -> LoggerError {
        LoggerError::file_writer(self.path.display().to_string(), err.to_string())
    }
}

impl LogWriter for FileWriter {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.writer
            .write_all(line.as_bytes())
            .and_then(|()| self.writer.write_all(b"\n"))
            .map_err(|e| self.io_error(e))
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(|e| self.io_error(e))?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileWriter {
    fn drop(&mut self) {
        // Ensure all buffered lines reach disk
        let _ = self.writer.flush();
    }
}
