//! # Request Logger
//!
//! Request-scoped leveled logging. A log identifier is bound once to a
//! request [`Context`]; every line logged with that context carries it,
//! together with the severity and the caller's `file:line`.
//!
//! ```text
//! 2025/01/08 10:30:45.123456 |INFO|handler.rs:42|log_id=job_x8Kd02Qa|count=7
//! ```
//!
//! ## Features
//!
//! - **Context binding**: random or timestamp id suffixes on immutable contexts
//! - **printf-style templates**: `%d %s %v %t %f ...` with inline error markers
//! - **Pluggable sink**: any closure, or the timestamped stderr default
//! - **Testable fatal**: process exit sits behind an injectable terminator
//!
//! ## Example
//!
//! ```
//! use request_logger::{infof, with_log_id, Context};
//!
//! let ctx = with_log_id(&Context::background(), "job");
//! infof!(&ctx, "count=%d", 7);
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        format_template, log_id, setup_sink, sprintf, with_explicit_log_id, with_log_id, Arg,
        CallSite, Context, LogIdStrategy, LogLevel, Logger, LoggerBuilder, LoggerConfig,
        LoggerError, LoggerMetrics, Profile, Result, Sink, Terminator, TimestampFormat,
    };
    pub use crate::sinks::StreamSink;
}

pub use crate::core::{
    debugf, errorf, fatalf, format_template, global, infof, log_id, random_token, setup_sink,
    sprintf, warnf, with_explicit_log_id, with_log_id, Arg, CallSite, Context, FileLine,
    LogIdStrategy, LogLevel, Locator, Logger, LoggerBuilder, LoggerConfig, LoggerError,
    LoggerMetrics, NoLocation, ProcessExit, Profile, RecordingTerminator, Result, Sink,
    Terminator, TimestampFormat, DEFAULT_SUFFIX_LEN, FATAL_EXIT_CODE, LOG_ID_KEY,
};
pub use sinks::StreamSink;
