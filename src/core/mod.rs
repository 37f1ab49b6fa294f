//! Core logger types and traits

pub mod error;
pub mod logger;
pub(crate) mod mediator;
pub mod payload;
pub mod severity;
pub(crate) mod signals;
pub mod terminator;
pub mod writer;

pub use error::{LoggerError, Result};
pub use logger::{Logger, LoggerBuilder, DEFAULT_CHANNEL_CAPACITY};
pub use payload::{BoxedError, LogPayload};
pub use severity::Severity;
pub use terminator::{ProcessTerminator, Terminator, EXIT_FAILURE, EXIT_SUCCESS};
pub use writer::LogWriter;
