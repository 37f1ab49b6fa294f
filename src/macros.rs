//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`.
//!
//! # Examples
//!
//! ```
//! use sevlog::prelude::*;
//! use sevlog::info;
//!
//! let logger = Logger::builder()
//!     .writer(MemoryWriter::new())
//!     .register_signals(false)
//!     .start()
//!     .unwrap();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message at an explicit severity with automatic formatting.
///
/// # Examples
///
/// ```
/// # use sevlog::prelude::*;
/// # let logger = Logger::builder()
/// #     .writer(MemoryWriter::new())
/// #     .register_signals(false)
/// #     .start()
/// #     .unwrap();
/// use sevlog::log;
/// log!(logger, Severity::Info, "Simple message");
/// log!(logger, Severity::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.log($severity, format!($($arg)+))
    };
}

/// Log a debug-severity message.
///
/// # Examples
///
/// ```
/// # use sevlog::prelude::*;
/// # let logger = Logger::builder()
/// #     .writer(MemoryWriter::new())
/// #     .register_signals(false)
/// #     .start()
/// #     .unwrap();
/// use sevlog::debug;
/// debug!(logger, "Debug information");
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

/// Log an info-severity message.
///
/// # Examples
///
/// ```
/// # use sevlog::prelude::*;
/// # let logger = Logger::builder()
/// #     .writer(MemoryWriter::new())
/// #     .register_signals(false)
/// #     .start()
/// #     .unwrap();
/// use sevlog::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a warning-severity message.
///
/// # Examples
///
/// ```
/// # use sevlog::prelude::*;
/// # let logger = Logger::builder()
/// #     .writer(MemoryWriter::new())
/// #     .register_signals(false)
/// #     .start()
/// #     .unwrap();
/// use sevlog::warning;
/// warning!(logger, "Low disk space");
/// warning!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warning, $($arg)+)
    };
}

/// Log an error-severity message.
///
/// # Examples
///
/// ```
/// # use sevlog::prelude::*;
/// # let logger = Logger::builder()
/// #     .writer(MemoryWriter::new())
/// #     .register_signals(false)
/// #     .start()
/// #     .unwrap();
/// use sevlog::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Log a critical-severity message. The mediator escalates this to shutdown
/// with a non-zero exit status.
///
/// # Examples
///
/// ```no_run
/// # use sevlog::prelude::*;
/// # let logger = Logger::start(ConsoleWriter::new()).unwrap();
/// use sevlog::critical;
/// critical!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Critical, $($arg)+)
    };
}
