//! Injectable process-exit capability
//!
//! The mediator never calls `std::process::exit` directly; it goes through
//! this trait so the shutdown path can run inside tests without ending the
//! test process.

/// Exit status for normal shutdown (explicit exit request or OS signal).
pub const EXIT_SUCCESS: i32 = 0;
/// Exit status for critical-error shutdown.
pub const EXIT_FAILURE: i32 = 1;

pub trait Terminator: Send {
    fn exit(&self, code: i32);
}

/// Terminates the current process with the given status code.
pub struct ProcessTerminator;

impl Terminator for ProcessTerminator {
    fn exit(&self, code: i32) {
        std::process::exit(code);
    }
}
