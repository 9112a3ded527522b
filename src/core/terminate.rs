//! Process termination after a fatal log line

use parking_lot::Mutex;

/// Exit status used by fatal logging
pub const FATAL_EXIT_CODE: i32 = 1;

/// Ends the process once a fatal line has been dispatched
pub trait Terminator: Send + Sync {
    fn terminate(&self, code: i32);
}

/// Calls `std::process::exit`; no destructors or cleanup hooks run
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExit;

impl Terminator for ProcessExit {
    fn terminate(&self, code: i32) {
        std::process::exit(code);
    }
}

/// Records exit requests instead of exiting
///
/// Lets tests exercise fatal logging in-process.
///
/// # Example
///
/// ```
/// use request_logger::{RecordingTerminator, Terminator};
///
/// let terminator = RecordingTerminator::new();
/// terminator.terminate(1);
/// assert_eq!(terminator.exit_codes(), vec![1]);
/// ```
#[derive(Debug, Default)]
pub struct RecordingTerminator {
    codes: Mutex<Vec<i32>>,
}

impl RecordingTerminator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exit codes requested so far, oldest first
    pub fn exit_codes(&self) -> Vec<i32> {
        self.codes.lock().clone()
    }
}

impl Terminator for RecordingTerminator {
    fn terminate(&self, code: i32) {
        self.codes.lock().push(code);
    }
}
