//! Logger handle and builder

use chrono::{DateTime, Utc};
use crossbeam_channel::bounded;
use std::thread;

use super::error::{LoggerError, Result};
use super::mediator::{Inputs, Mediator, Senders};
use super::payload::LogPayload;
use super::severity::Severity;
use super::signals;
use super::terminator::{ProcessTerminator, Terminator};
use super::writer::LogWriter;
use crate::writers::StderrWriter;

/// Capacity of each severity channel before producers block.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// A cloneable handle to the logging context. All severity calls are
/// fire-and-forget: the write happens later on the mediator thread, and
/// nothing is ever propagated back to the producer.
///
/// Construct one per process. Each handle spawns its own mediator and
/// (by default) registers its own signal listener, so multiple contexts
/// would race on process exit.
#[derive(Clone)]
pub struct Logger {
    start: DateTime<Utc>,
    senders: Senders,
}

impl Logger {
    /// Create a builder for configuring the logging context.
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Start a logging context over `writer` with default settings.
    ///
    /// # Example
    /// ```no_run
    /// use sevlog::prelude::*;
    ///
    /// let logger = Logger::start(ConsoleWriter::new()).unwrap();
    /// logger.info("Server started");
    /// ```
    pub fn start<W: LogWriter + 'static>(writer: W) -> Result<Logger> {
        Self::builder().writer(writer).start()
    }

    /// Enqueue a payload at the given severity. Blocks only once that
    /// severity's channel holds a full backlog (back-pressure, never loss).
    pub fn log(&self, severity: Severity, payload: impl Into<LogPayload>) {
        let sender = match severity {
            Severity::Critical => &self.senders.crit,
            Severity::Error => &self.senders.err,
            Severity::Warning => &self.senders.warn,
            Severity::Info => &self.senders.info,
            Severity::Debug => &self.senders.debug,
        };
        // A send after shutdown finds the receivers gone; ignored.
        let _ = sender.send(payload.into());
    }

    /// Log a critical failure. The mediator escalates this to shutdown with
    /// a non-zero exit status.
    #[inline]
    pub fn critical(&self, payload: impl Into<LogPayload>) {
        self.log(Severity::Critical, payload);
    }

    #[inline]
    pub fn error(&self, payload: impl Into<LogPayload>) {
        self.log(Severity::Error, payload);
    }

    #[inline]
    pub fn warning(&self, payload: impl Into<LogPayload>) {
        self.log(Severity::Warning, payload);
    }

    #[inline]
    pub fn info(&self, payload: impl Into<LogPayload>) {
        self.log(Severity::Info, payload);
    }

    #[inline]
    pub fn debug(&self, payload: impl Into<LogPayload>) {
        self.log(Severity::Debug, payload);
    }

    /// Request an orderly shutdown with a zero exit status. The slot holds a
    /// single pending request; a second call while one is pending is a no-op.
    pub fn request_exit(&self) {
        let _ = self.senders.exit.try_send(());
    }

    /// The recorded initialization time.
    pub fn start_time(&self) -> DateTime<Utc> {
        self.start
    }
}

/// Builder for constructing a [`Logger`] with a fluent API
///
/// # Example
/// ```no_run
/// use sevlog::prelude::*;
///
/// let logger = Logger::builder()
///     .writer(ConsoleWriter::new())
///     .channel_capacity(100)
///     .use_colors(true)
///     .start()
///     .unwrap();
/// logger.warning("low disk space");
/// ```
pub struct LoggerBuilder {
    writer: Option<Box<dyn LogWriter>>,
    fallback: Box<dyn LogWriter>,
    capacity: usize,
    use_colors: bool,
    terminator: Box<dyn Terminator>,
    register_signals: bool,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            writer: None,
            fallback: Box::new(StderrWriter::new()),
            capacity: DEFAULT_CHANNEL_CAPACITY,
            use_colors: true,
            terminator: Box::new(ProcessTerminator),
            register_signals: true,
        }
    }

    /// Set the base writer. Required.
    #[must_use = "builder methods return a new value"]
    pub fn writer<W: LogWriter + 'static>(mut self, writer: W) -> Self {
        self.writer = Some(Box::new(writer));
        self
    }

    /// Set the fallback stream for the triggering error on critical
    /// shutdown. Defaults to stderr.
    #[must_use = "builder methods return a new value"]
    pub fn fallback<W: LogWriter + 'static>(mut self, fallback: W) -> Self {
        self.fallback = Box::new(fallback);
        self
    }

    /// Set the per-severity channel capacity. Producers block once a channel
    /// holds this many pending events.
    #[must_use = "builder methods return a new value"]
    pub fn channel_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Enable or disable color-wrapped severity tags.
    #[must_use = "builder methods return a new value"]
    pub fn use_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Replace the process-exit capability. Tests inject a recording
    /// terminator here so the shutdown sequence can run without ending the
    /// test process.
    #[must_use = "builder methods return a new value"]
    pub fn terminator<T: Terminator + 'static>(mut self, terminator: T) -> Self {
        self.terminator = Box::new(terminator);
        self
    }

    /// Enable or disable SIGINT/SIGTERM registration. Defaults to enabled.
    #[must_use = "builder methods return a new value"]
    pub fn register_signals(mut self, register: bool) -> Self {
        self.register_signals = register;
        self
    }

    /// Construct the channels, register signal handling, record the start
    /// time and launch the mediator thread.
    pub fn start(self) -> Result<Logger> {
        let writer = self
            .writer
            .ok_or_else(|| LoggerError::config("LoggerBuilder", "a base writer is required"))?;
        if self.capacity == 0 {
            return Err(LoggerError::config(
                "LoggerBuilder",
                "channel capacity must be non-zero",
            ));
        }

        let (crit_tx, crit_rx) = bounded(self.capacity);
        let (err_tx, err_rx) = bounded(self.capacity);
        let (warn_tx, warn_rx) = bounded(self.capacity);
        let (info_tx, info_rx) = bounded(self.capacity);
        let (debug_tx, debug_rx) = bounded(self.capacity);
        let (exit_tx, exit_rx) = bounded(1);
        let (sig_tx, sig_rx) = bounded(1);

        if self.register_signals {
            signals::spawn_listener(sig_tx.clone())?;
        }

        let senders = Senders {
            crit: crit_tx,
            err: err_tx,
            warn: warn_tx,
            info: info_tx,
            debug: debug_tx,
            exit: exit_tx,
            signals: sig_tx,
        };
        let inputs = Inputs {
            crit: crit_rx,
            err: err_rx,
            warn: warn_rx,
            info: info_rx,
            debug: debug_rx,
            exit: exit_rx,
            signals: sig_rx,
        };

        let start = Utc::now();
        let mediator = Mediator {
            writer,
            fallback: self.fallback,
            start,
            terminator: self.terminator,
            use_colors: self.use_colors,
            _keepalive: senders.clone(),
        };
        thread::Builder::new()
            .name("sevlog-mediator".into())
            .spawn(move || mediator.run(inputs))?;

        Ok(Logger { start, senders })
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writers::MemoryWriter;

    struct NoopTerminator;

    impl Terminator for NoopTerminator {
        fn exit(&self, _code: i32) {}
    }

    #[test]
    fn test_builder_requires_writer() {
        let result = Logger::builder().start();
        assert!(matches!(
            result,
            Err(LoggerError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_builder_rejects_zero_capacity() {
        let result = Logger::builder()
            .writer(MemoryWriter::new())
            .channel_capacity(0)
            .register_signals(false)
            .start();
        assert!(matches!(
            result,
            Err(LoggerError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_start_time_is_recorded() {
        let before = Utc::now();
        let logger = Logger::builder()
            .writer(MemoryWriter::new())
            .register_signals(false)
            .start()
            .unwrap();
        let after = Utc::now();

        assert!(logger.start_time() >= before);
        assert!(logger.start_time() <= after);
    }

    #[test]
    fn test_handle_is_cloneable() {
        let logger = Logger::builder()
            .writer(MemoryWriter::new())
            .use_colors(false)
            .register_signals(false)
            .start()
            .unwrap();
        let other = logger.clone();
        assert_eq!(logger.start_time(), other.start_time());
        other.info("from the clone");
    }

    #[test]
    fn test_request_exit_twice_is_a_noop() {
        let logger = Logger::builder()
            .writer(MemoryWriter::new())
            .terminator(NoopTerminator)
            .register_signals(false)
            .start()
            .unwrap();
        // The slot holds one pending request; the second must not block.
        logger.request_exit();
        logger.request_exit();
    }
}
