//! Single-consumer mediator loop and shutdown sequencer
//!
//! The mediator owns the writer, the fallback stream, the start timestamp
//! and the terminator. Producers only ever touch the sender side of the
//! bounded channels, which makes concurrent logging race-free without any
//! locking around the writer.

use chrono::{DateTime, Utc};
use colored::{Color, Colorize};
use crossbeam_channel::{select, Receiver, Sender};

use super::payload::LogPayload;
use super::severity::Severity;
use super::signals::SignalEvent;
use super::terminator::{Terminator, EXIT_FAILURE, EXIT_SUCCESS};
use super::writer::LogWriter;

const INTSIGNAL_TAG: &str = "INTSIGNAL";
const INTSIGNAL_COLOR: Color = Color::Magenta;

/// Receiver side of every mediator input.
pub(crate) struct Inputs {
    pub crit: Receiver<LogPayload>,
    pub err: Receiver<LogPayload>,
    pub warn: Receiver<LogPayload>,
    pub info: Receiver<LogPayload>,
    pub debug: Receiver<LogPayload>,
    pub exit: Receiver<()>,
    pub signals: Receiver<SignalEvent>,
}

/// Sender side of every mediator input. A clone lives inside the mediator
/// so its receivers never observe disconnection; the loop ends only through
/// the shutdown sequencer.
#[derive(Clone)]
pub(crate) struct Senders {
    pub crit: Sender<LogPayload>,
    pub err: Sender<LogPayload>,
    pub warn: Sender<LogPayload>,
    pub info: Sender<LogPayload>,
    pub debug: Sender<LogPayload>,
    pub exit: Sender<()>,
    pub signals: Sender<SignalEvent>,
}

pub(crate) struct Mediator {
    pub writer: Box<dyn LogWriter>,
    pub fallback: Box<dyn LogWriter>,
    pub start: DateTime<Utc>,
    pub terminator: Box<dyn Terminator>,
    pub use_colors: bool,
    /// Keeps every input channel connected for the life of the loop.
    pub _keepalive: Senders,
}

impl Mediator {
    /// Consume events until a shutdown trigger arrives. Exactly one event is
    /// handled to completion per iteration; per-channel FIFO is preserved,
    /// cross-channel interleaving is not specified beyond shutdown triggers
    /// winning over simultaneously-ready log traffic.
    pub(crate) fn run(mut self, inputs: Inputs) {
        loop {
            // Shutdown triggers take priority over ready log events.
            if let Ok(payload) = inputs.crit.try_recv() {
                self.handle_critical(payload);
                return;
            }
            if inputs.exit.try_recv().is_ok() {
                self.shutdown(None);
                return;
            }
            if let Ok(signal) = inputs.signals.try_recv() {
                self.handle_signal(signal);
                return;
            }

            select! {
                recv(inputs.crit) -> msg => {
                    if let Ok(payload) = msg {
                        self.handle_critical(payload);
                        return;
                    }
                }
                recv(inputs.err) -> msg => {
                    if let Ok(payload) = msg {
                        self.write_event(Severity::Error, &payload);
                    }
                }
                recv(inputs.warn) -> msg => {
                    if let Ok(payload) = msg {
                        self.write_event(Severity::Warning, &payload);
                    }
                }
                recv(inputs.info) -> msg => {
                    if let Ok(payload) = msg {
                        self.write_event(Severity::Info, &payload);
                    }
                }
                recv(inputs.debug) -> msg => {
                    if let Ok(payload) = msg {
                        self.write_event(Severity::Debug, &payload);
                    }
                }
                recv(inputs.exit) -> msg => {
                    if msg.is_ok() {
                        self.shutdown(None);
                        return;
                    }
                }
                recv(inputs.signals) -> msg => {
                    if let Ok(signal) = msg {
                        self.handle_signal(signal);
                        return;
                    }
                }
            }
        }
    }

    /// Write a non-terminal event. A write failure is reported to stderr and
    /// the loop keeps serving the channels.
    fn write_event(&mut self, severity: Severity, payload: &LogPayload) {
        let line = self.format_line(
            severity.to_str(),
            severity.color_code(),
            &payload.to_message(),
        );
        if let Err(e) = self.writer.write_line(&line) {
            eprintln!("[LOGGER ERROR] writer '{}' failed: {}", self.writer.name(), e);
        }
    }

    fn handle_critical(&mut self, payload: LogPayload) {
        let line = self.format_line(
            Severity::Critical.to_str(),
            Severity::Critical.color_code(),
            &payload.to_message(),
        );
        self.shutdown(Some(line));
    }

    fn handle_signal(&mut self, signal: SignalEvent) {
        let line = self.format_line(INTSIGNAL_TAG, INTSIGNAL_COLOR, signal.name());
        if let Err(e) = self.writer.write_line(&line) {
            eprintln!("[LOGGER ERROR] writer '{}' failed: {}", self.writer.name(), e);
        }
        self.shutdown(None);
    }

    fn format_line(&self, tag: &str, color: Color, message: &str) -> String {
        if self.use_colors {
            format!("{} {}", tag.color(color), message)
        } else {
            format!("{} {}", tag, message)
        }
    }

    /// Terminal sequence. No exit path skips a step: the triggering error
    /// (if any) goes to the fallback stream, then the stop and elapsed-time
    /// lines go to the main writer, then the terminator runs.
    fn shutdown(&mut self, error: Option<String>) {
        let mut code = EXIT_SUCCESS;
        if let Some(line) = error {
            if let Err(e) = self.fallback.write_line(&line) {
                eprintln!(
                    "[LOGGER ERROR] fallback '{}' failed: {}",
                    self.fallback.name(),
                    e
                );
            }
            let _ = self.fallback.flush();
            code = EXIT_FAILURE;
        }

        if let Err(e) = self.writer.write_line("Server stopped") {
            eprintln!("[LOGGER ERROR] writer '{}' failed: {}", self.writer.name(), e);
        }

        let elapsed = (Utc::now() - self.start).to_std().unwrap_or_default();
        if let Err(e) = self
            .writer
            .write_line(&format!("Server ran for {:?}", elapsed))
        {
            eprintln!("[LOGGER ERROR] writer '{}' failed: {}", self.writer.name(), e);
        }

        if let Err(e) = self.writer.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }

        self.terminator.exit(code);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writers::MemoryWriter;
    use crossbeam_channel::bounded;
    use signal_hook::consts::SIGINT;
    use std::thread;
    use std::time::Duration;

    struct RecordingTerminator {
        tx: Sender<i32>,
    }

    impl Terminator for RecordingTerminator {
        fn exit(&self, code: i32) {
            let _ = self.tx.try_send(code);
        }
    }

    struct Harness {
        senders: Senders,
        writer: MemoryWriter,
        fallback: MemoryWriter,
        exit_rx: Receiver<i32>,
    }

    fn spawn_mediator() -> Harness {
        let (crit_tx, crit_rx) = bounded(8);
        let (err_tx, err_rx) = bounded(8);
        let (warn_tx, warn_rx) = bounded(8);
        let (info_tx, info_rx) = bounded(8);
        let (debug_tx, debug_rx) = bounded(8);
        let (exit_tx, exit_rx) = bounded(1);
        let (sig_tx, sig_rx) = bounded(1);
        let (code_tx, code_rx) = bounded(1);

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

        let writer = MemoryWriter::new();
        let fallback = MemoryWriter::new();
        let mediator = Mediator {
            writer: Box::new(writer.clone()),
            fallback: Box::new(fallback.clone()),
            start: Utc::now(),
            terminator: Box::new(RecordingTerminator { tx: code_tx }),
            use_colors: false,
            _keepalive: senders.clone(),
        };
        thread::spawn(move || mediator.run(inputs));

        Harness {
            senders,
            writer,
            fallback,
            exit_rx: code_rx,
        }
    }

    #[test]
    fn test_non_terminal_event_keeps_loop_alive() {
        let h = spawn_mediator();
        h.senders.err.send(LogPayload::from("boom")).unwrap();
        h.senders.info.send(LogPayload::from("still here")).unwrap();

        let deadline = std::time::Instant::now() + Duration::from_secs(2);
        while h.writer.len() < 2 && std::time::Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }

        let lines = h.writer.contents();
        assert!(lines.contains(&"ERROR boom".to_string()));
        assert!(lines.contains(&"INFO still here".to_string()));
        assert!(h.exit_rx.try_recv().is_err(), "loop must not exit");
    }

    #[test]
    fn test_signal_writes_tag_then_exits_zero() {
        let h = spawn_mediator();
        h.senders.signals.send(SignalEvent(SIGINT)).unwrap();

        let code = h.exit_rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert_eq!(code, EXIT_SUCCESS);

        let lines = h.writer.contents();
        assert_eq!(lines[0], "INTSIGNAL SIGINT");
        assert_eq!(lines[1], "Server stopped");
        assert!(lines[2].starts_with("Server ran for "));
        assert!(h.fallback.is_empty());
    }

    #[test]
    fn test_critical_routes_error_to_fallback() {
        let h = spawn_mediator();
        h.senders
            .crit
            .send(LogPayload::from("state corrupted"))
            .unwrap();

        let code = h.exit_rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert_eq!(code, EXIT_FAILURE);
        assert_eq!(h.fallback.contents(), vec!["CRITICAL state corrupted"]);

        let lines = h.writer.contents();
        assert_eq!(lines[0], "Server stopped");
        assert!(lines[1].starts_with("Server ran for "));
    }

    #[test]
    fn test_colored_line_still_contains_tag_and_message() {
        let h = spawn_mediator();
        // Whether or not the tag carries ANSI codes, both parts must appear.
        let mediator_line = {
            let m = Mediator {
                writer: Box::new(MemoryWriter::new()),
                fallback: Box::new(MemoryWriter::new()),
                start: Utc::now(),
                terminator: Box::new(RecordingTerminator {
                    tx: bounded(1).0,
                }),
                use_colors: true,
                _keepalive: h.senders.clone(),
            };
            m.format_line("WARNING", Color::Yellow, "low disk space")
        };
        assert!(mediator_line.contains("WARNING"));
        assert!(mediator_line.ends_with("low disk space"));
    }
}
