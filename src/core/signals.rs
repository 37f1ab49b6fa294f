//! OS termination-signal listener
//!
//! Registers interest in SIGINT and SIGTERM and forwards each received
//! signal into a single-slot channel consumed by the mediator.

use crossbeam_channel::Sender;
use signal_hook::consts::{SIGINT, SIGTERM};
use signal_hook::iterator::Signals;
use std::thread;

use super::error::{LoggerError, Result};

/// A received termination signal, by raw number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SignalEvent(pub i32);

impl SignalEvent {
    pub fn name(&self) -> &'static str {
        match self.0 {
            SIGINT => "SIGINT",
            SIGTERM => "SIGTERM",
            _ => "UNKNOWN",
        }
    }
}

/// Spawn the listener thread forwarding SIGINT/SIGTERM into `tx`.
pub(crate) fn spawn_listener(tx: Sender<SignalEvent>) -> Result<()> {
    let mut signals = Signals::new([SIGINT, SIGTERM]).map_err(LoggerError::SignalRegistration)?;
    thread::Builder::new()
        .name("sevlog-signals".into())
        .spawn(move || {
            for sig in signals.forever() {
                // A full slot means a signal is already pending and shutdown
                // is in motion; extra signals are dropped.
                let _ = tx.try_send(SignalEvent(sig));
            }
        })?;
    Ok(())
}
