//! Writer implementations

pub mod console;
pub mod file;
pub mod memory;

pub use console::{ConsoleWriter, StderrWriter};
pub use file::FileWriter;
pub use memory::MemoryWriter;

// Re-export the trait writers implement
pub use crate::core::LogWriter;
