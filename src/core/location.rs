//! Caller location reporting
//!
//! Logging calls are `#[track_caller]`, so the `std::panic::Location` of the
//! user's call site is always available. A [`Locator`] decides whether and how
//! it shows up in the output.

use std::fmt;
use std::panic::Location;

/// Source position rendered as `file:line`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    pub file: String,
    pub line: u32,
}

impl CallSite {
    /// Base name of `path` (either separator) and `line`
    pub fn new(path: &str, line: u32) -> Self {
        let file = path.rsplit(['/', '\\']).next().unwrap_or(path);
        Self {
            file: file.to_string(),
            line,
        }
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Resolves the call site that a log line is attributed to
pub trait Locator: Send + Sync {
    fn locate(&self, caller: &'static Location<'static>) -> Option<CallSite>;
}

/// Reports the base file name and line of the logging call
#[derive(Debug, Clone, Copy, Default)]
pub struct FileLine;

impl Locator for FileLine {
    fn locate(&self, caller: &'static Location<'static>) -> Option<CallSite> {
        Some(CallSite::new(caller.file(), caller.line()))
    }
}

/// Omits the location segment entirely
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocation;

impl Locator for NoLocation {
    fn locate(&self, _caller: &'static Location<'static>) -> Option<CallSite> {
        None
    }
}
