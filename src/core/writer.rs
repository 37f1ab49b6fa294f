//! Writer trait for log output destinations

use super::error::Result;

/// A line-oriented sink. Only the mediator thread ever calls it, so
/// implementations need `Send` but no internal locking.
pub trait LogWriter: Send {
    fn write_line(&mut self, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
