//! # sevlog
//!
//! A severity-based, concurrency-safe logging façade. Producers emit
//! messages at one of five severities without blocking on I/O or on each
//! other; a single mediator thread serializes output, applies formatting,
//! and owns process-lifecycle decisions.
//!
//! ## Features
//!
//! - **Back-pressure, not loss**: bounded severity channels block producers
//!   at capacity instead of dropping events
//! - **Single consumer**: all writer access happens on one mediator thread,
//!   so concurrent callers need no locks
//! - **Lifecycle control**: critical errors, explicit exit requests and OS
//!   termination signals all drain through one shutdown sequence with a
//!   deterministic exit status
//!
//! ## Example
//!
//! ```no_run
//! use sevlog::prelude::*;
//!
//! let logger = Logger::start(ConsoleWriter::new()).unwrap();
//! logger.info("Server started");
//! logger.warning("low disk space");
//! // An orderly shutdown: the mediator reports uptime and exits with 0.
//! logger.request_exit();
//! ```

pub mod core;
pub mod macros;
pub mod writers;

pub mod prelude {
    pub use crate::core::{
        BoxedError, LogPayload, LogWriter, Logger, LoggerBuilder, LoggerError, ProcessTerminator,
        Result, Severity, Terminator, DEFAULT_CHANNEL_CAPACITY, EXIT_FAILURE, EXIT_SUCCESS,
    };
    pub use crate::writers::{ConsoleWriter, FileWriter, MemoryWriter, StderrWriter};
}

pub use crate::core::{
    BoxedError, LogPayload, LogWriter, Logger, LoggerBuilder, LoggerError, ProcessTerminator,
    Result, Severity, Terminator, DEFAULT_CHANNEL_CAPACITY, EXIT_FAILURE, EXIT_SUCCESS,
};
pub use crate::writers::{ConsoleWriter, FileWriter, MemoryWriter, StderrWriter};
