//! Process-wide logger used by the free functions and macros
//!
//! The global logger uses the standard profile (random 8-character id
//! suffixes, `file:line` on every line). Its sink is the only mutable part:
//! [`setup_sink`] replaces it at any time, and the first log call installs the
//! stderr default when nothing was set. Both paths go through a lock, so
//! concurrent first use and concurrent replacement are safe; call
//! `setup_sink` early, before other threads log, to have every line routed
//! through it.

use super::{context::Context, logger::Logger, printf::Arg, sink::Sink};
use once_cell::sync::Lazy;

static GLOBAL: Lazy<Logger> = Lazy::new(Logger::new);

/// The process-wide logger
pub fn global() -> &'static Logger {
    &GLOBAL
}

/// Route every subsequent global log call through `sink`
///
/// # Example
///
/// ```
/// use request_logger::{setup_sink, sprintf, Arg};
///
/// setup_sink(|template: &str, args: &[Arg]| {
///     println!("{}", sprintf(template, args));
/// });
/// ```
pub fn setup_sink<S: Sink + 'static>(sink: S) {
    GLOBAL.set_sink(sink);
}

#[track_caller]
pub fn debugf<'a>(ctx: impl Into<Option<&'a Context>>, template: &str, args: &[Arg]) {
    GLOBAL.debug(ctx, template, args);
}

#[track_caller]
pub fn infof<'a>(ctx: impl Into<Option<&'a Context>>, template: &str, args: &[Arg]) {
    GLOBAL.info(ctx, template, args);
}

#[track_caller]
pub fn warnf<'a>(ctx: impl Into<Option<&'a Context>>, template: &str, args: &[Arg]) {
    GLOBAL.warn(ctx, template, args);
}

#[track_caller]
pub fn errorf<'a>(ctx: impl Into<Option<&'a Context>>, template: &str, args: &[Arg]) {
    GLOBAL.error(ctx, template, args);
}

/// Log at fatal level and exit the process with status 1
#[track_caller]
pub fn fatalf<'a>(ctx: impl Into<Option<&'a Context>>, template: &str, args: &[Arg]) {
    GLOBAL.fatal(ctx, template, args);
}
