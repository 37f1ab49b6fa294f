//! In-memory writer capturing lines for inspection

use crate::core::{LogWriter, Result};
use parking_lot::Mutex;
use std::sync::Arc;

/// Captures every line into shared memory. Clones share the same buffer, so
/// a clone kept outside the logger observes what the mediator wrote.
#[derive(Clone, Default)]
pub struct MemoryWriter {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line written so far.
    pub fn contents(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }
}

impl LogWriter for MemoryWriter {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.lines.lock().push(line.to_string());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
