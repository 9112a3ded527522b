//! Core logger types and traits

pub mod config;
pub mod context;
pub mod error;
pub mod global;
pub mod location;
pub mod log_id;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod printf;
pub mod sink;
pub mod terminate;
pub mod timestamp;

pub use config::{LoggerConfig, Profile};
pub use context::Context;
pub use error::{LoggerError, Result};
pub use global::{debugf, errorf, fatalf, global, infof, setup_sink, warnf};
pub use location::{CallSite, FileLine, Locator, NoLocation};
pub use log_id::{
    log_id, random_token, with_explicit_log_id, with_log_id, LogIdStrategy, DEFAULT_SUFFIX_LEN,
    LOG_ID_KEY,
};
pub use log_level::LogLevel;
pub use logger::{format_template, Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use printf::{sprintf, Arg};
pub use sink::Sink;
pub use terminate::{ProcessExit, RecordingTerminator, Terminator, FATAL_EXIT_CODE};
pub use timestamp::TimestampFormat;
