//! Logging macros with variadic printf-style arguments.
//!
//! Each argument is converted with [`Arg::from`](crate::Arg), so integers,
//! floats, booleans, chars and strings can be passed directly. Wrap other
//! values with [`Arg::display`](crate::Arg::display) or
//! [`Arg::debug`](crate::Arg::debug).
//!
//! Without a `logger:` prefix the macros use the global logger.
//!
//! # Examples
//!
//! ```
//! use request_logger::prelude::*;
//! use request_logger::{infof, warnf};
//!
//! let ctx = with_log_id(None, "example");
//!
//! // Global logger
//! infof!(&ctx, "this is information message, %d", 1234);
//!
//! // Explicit logger
//! let logger = Logger::builder().caller_location(false).build();
//! warnf!(logger: logger, &ctx, "this is warning message, %t", false);
//! ```

/// Log at an explicit level with formatting.
///
/// ```
/// # use request_logger::prelude::*;
/// use request_logger::logf;
/// let logger = Logger::new();
/// logf!(logger, LogLevel::Error, None, "Error code: %d", 500);
/// ```
#[macro_export]
macro_rules! logf {
    ($logger:expr, $level:expr, $ctx:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.log($level, $ctx, $template, &[$($crate::Arg::from($arg)),*])
    };
}

/// Log a debug-level message.
///
/// ```
/// # use request_logger::prelude::*;
/// use request_logger::debugf;
/// debugf!(None, "Counter value: %d", 10);
/// ```
#[macro_export]
macro_rules! debugf {
    (logger: $logger:expr, $ctx:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::logf!($logger, $crate::LogLevel::Debug, $ctx, $template $(, $arg)*)
    };
    ($ctx:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::debugf($ctx, $template, &[$($crate::Arg::from($arg)),*])
    };
}

/// Log an info-level message.
///
/// ```
/// # use request_logger::prelude::*;
/// use request_logger::infof;
/// let ctx = with_log_id(None, "job");
/// infof!(&ctx, "Processing %d items", 100);
/// ```
#[macro_export]
macro_rules! infof {
    (logger: $logger:expr, $ctx:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::logf!($logger, $crate::LogLevel::Info, $ctx, $template $(, $arg)*)
    };
    ($ctx:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::infof($ctx, $template, &[$($crate::Arg::from($arg)),*])
    };
}

/// Log a warning-level message.
///
/// ```
/// # use request_logger::prelude::*;
/// use request_logger::warnf;
/// warnf!(None, "Retry attempt %d of %d", 3, 5);
/// ```
#[macro_export]
macro_rules! warnf {
    (logger: $logger:expr, $ctx:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::logf!($logger, $crate::LogLevel::Warn, $ctx, $template $(, $arg)*)
    };
    ($ctx:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::warnf($ctx, $template, &[$($crate::Arg::from($arg)),*])
    };
}

/// Log an error-level message.
///
/// ```
/// # use request_logger::prelude::*;
/// use request_logger::errorf;
/// errorf!(None, "Error code: %d, message: %s", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! errorf {
    (logger: $logger:expr, $ctx:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::logf!($logger, $crate::LogLevel::Error, $ctx, $template $(, $arg)*)
    };
    ($ctx:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::errorf($ctx, $template, &[$($crate::Arg::from($arg)),*])
    };
}

/// Log a fatal-level message, then terminate.
///
/// With the global logger this exits the process with status 1.
///
/// ```no_run
/// use request_logger::fatalf;
/// fatalf!(None, "Unable to recover from error: %s", "disk full");
/// ```
#[macro_export]
macro_rules! fatalf {
    (logger: $logger:expr, $ctx:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::logf!($logger, $crate::LogLevel::Fatal, $ctx, $template $(, $arg)*)
    };
    ($ctx:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::fatalf($ctx, $template, &[$($crate::Arg::from($arg)),*])
    };
}
