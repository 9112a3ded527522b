//! Main logger implementation

use super::{
    config::{LoggerConfig, Profile},
    context::Context,
    error::Result,
    location::{CallSite, FileLine, Locator, NoLocation},
    log_id::{find_log_id, LogIdStrategy},
    log_level::LogLevel,
    metrics::LoggerMetrics,
    printf::Arg,
    sink::Sink,
    terminate::{ProcessExit, Terminator, FATAL_EXIT_CODE},
    timestamp::TimestampFormat,
};
use crate::sinks::StreamSink;
use parking_lot::RwLock;
use std::panic::Location;
use std::sync::Arc;

/// Build the template handed to the sink
///
/// `|LEVEL|file:line|log_id=<id>|<template>`; the location and log id
/// segments are left out when absent.
///
/// ```
/// use request_logger::{format_template, CallSite, LogLevel};
///
/// let site = CallSite::new("src/main.rs", 12);
/// assert_eq!(
///     format_template(LogLevel::Info, Some(&site), Some("job_Ab3"), "count=%d"),
///     "|INFO|main.rs:12|log_id=job_Ab3|count=%d"
/// );
/// assert_eq!(format_template(LogLevel::Warn, None, None, "x"), "|WARN|x");
/// ```
pub fn format_template(
    level: LogLevel,
    site: Option<&CallSite>,
    log_id: Option<&str>,
    template: &str,
) -> String {
    let mut out = String::with_capacity(template.len() + 48);
    out.push('|');
    out.push_str(level.to_str());
    out.push('|');
    if let Some(site) = site {
        out.push_str(&site.to_string());
        out.push('|');
    }
    if let Some(id) = log_id {
        out.push_str("log_id=");
        out.push_str(id);
        out.push('|');
    }
    out.push_str(template);
    out
}

/// Formats leveled lines and dispatches them to a sink
///
/// The sink slot starts empty; the first dispatch installs a
/// [`StreamSink`] on stderr unless one was set. Replacing the sink is
/// last-write-wins and there is no way back to the empty state.
pub struct Logger {
    sink: RwLock<Option<Arc<dyn Sink>>>,
    log_id_strategy: LogIdStrategy,
    locator: Arc<dyn Locator>,
    terminator: Arc<dyn Terminator>,
    timestamp_format: TimestampFormat,
    metrics: LoggerMetrics,
}

impl Logger {
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&LoggerConfig::default())
    }

    /// Build from `config`
    ///
    /// A custom timestamp pattern that fails [`LoggerConfig::validate`] is
    /// reported on stderr and replaced by the default format. Use
    /// [`LoggerBuilder::try_build`] to get the error instead.
    #[must_use]
    pub fn from_config(config: &LoggerConfig) -> Self {
        let locator: Arc<dyn Locator> = if config.caller_location {
            Arc::new(FileLine)
        } else {
            Arc::new(NoLocation)
        };

        let timestamp_format = match config.validate() {
            Ok(()) => config.timestamp_format.clone(),
            Err(e) => {
                eprintln!("[LOGGER ERROR] {}; using the default timestamp format", e);
                TimestampFormat::default()
            }
        };

        Self {
            sink: RwLock::new(None),
            log_id_strategy: config.log_id,
            locator,
            terminator: Arc::new(ProcessExit),
            timestamp_format,
            metrics: LoggerMetrics::new(),
        }
    }

    /// Install `sink`, replacing the current one
    pub fn set_sink<S: Sink + 'static>(&self, sink: S) {
        self.set_shared_sink(Arc::new(sink));
    }

    /// Install a sink that is also held elsewhere
    pub fn set_shared_sink(&self, sink: Arc<dyn Sink>) {
        *self.sink.write() = Some(sink);
    }

    /// Whether a sink has been set or lazily installed
    pub fn has_sink(&self) -> bool {
        self.sink.read().is_some()
    }

    pub fn log_id_strategy(&self) -> LogIdStrategy {
        self.log_id_strategy
    }

    /// Derive a child of `parent` with an id generated by this logger's strategy
    pub fn with_log_id<'a>(
        &self,
        parent: impl Into<Option<&'a Context>>,
        base_label: &str,
    ) -> Context {
        self.log_id_strategy.bind(parent, base_label)
    }

    /// Get the logger metrics
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        match self.sink.read().as_ref() {
            Some(sink) => sink.flush(),
            None => Ok(()),
        }
    }

    /// Format and dispatch one line
    ///
    /// For [`LogLevel::Fatal`] the configured terminator runs after the sink
    /// has been written and flushed.
    #[track_caller]
    pub fn log<'a>(
        &self,
        level: LogLevel,
        ctx: impl Into<Option<&'a Context>>,
        template: &str,
        args: &[Arg],
    ) {
        let site = self.locator.locate(Location::caller());
        let line = format_template(level, site.as_ref(), find_log_id(ctx.into()), template);
        let sink = self.current_sink();

        self.dispatch(&*sink, level, &line, args);

        if level.is_terminal() {
            if let Err(e) = sink.flush() {
                eprintln!("[LOGGER ERROR] Sink '{}' flush failed: {}", sink.name(), e);
            }
            self.terminator.terminate(FATAL_EXIT_CODE);
        }
    }

    #[track_caller]
    #[inline]
    pub fn debug<'a>(&self, ctx: impl Into<Option<&'a Context>>, template: &str, args: &[Arg]) {
        self.log(LogLevel::Debug, ctx, template, args);
    }

    #[track_caller]
    #[inline]
    pub fn info<'a>(&self, ctx: impl Into<Option<&'a Context>>, template: &str, args: &[Arg]) {
        self.log(LogLevel::Info, ctx, template, args);
    }

    #[track_caller]
    #[inline]
    pub fn warn<'a>(&self, ctx: impl Into<Option<&'a Context>>, template: &str, args: &[Arg]) {
        self.log(LogLevel::Warn, ctx, template, args);
    }

    #[track_caller]
    #[inline]
    pub fn error<'a>(&self, ctx: impl Into<Option<&'a Context>>, template: &str, args: &[Arg]) {
        self.log(LogLevel::Error, ctx, template, args);
    }

    /// Log at fatal level, then terminate (exit status 1 by default)
    #[track_caller]
    #[inline]
    pub fn fatal<'a>(&self, ctx: impl Into<Option<&'a Context>>, template: &str, args: &[Arg]) {
        self.log(LogLevel::Fatal, ctx, template, args);
    }

    fn current_sink(&self) -> Arc<dyn Sink> {
        if let Some(sink) = self.sink.read().as_ref() {
            return Arc::clone(sink);
        }

        // Re-check under the write lock so only one default is installed
        let mut slot = self.sink.write();
        Arc::clone(slot.get_or_insert_with(|| self.default_sink()))
    }

    fn default_sink(&self) -> Arc<dyn Sink> {
        Arc::new(StreamSink::stderr().with_timestamp_format(self.timestamp_format.clone()))
    }

    /// Write through the sink with panic isolation; failures are reported
    /// on stderr and counted, never propagated to the caller.
    fn dispatch(&self, sink: &dyn Sink, level: LogLevel, line: &str, args: &[Arg]) {
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            sink.write(line, args)
        }));

        match result {
            Ok(Ok(())) => {
                self.metrics.record_logged(level);
            }
            Ok(Err(e)) => {
                eprintln!("[LOGGER ERROR] Sink '{}' failed: {}", sink.name(), e);
                self.metrics.record_write_failure();
            }
            Err(panic_info) => {
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                eprintln!("[LOGGER CRITICAL] Sink '{}' panicked: {}", sink.name(), panic_msg);
                self.metrics.record_write_failure();
            }
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use request_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .profile(Profile::Timestamped)
///     .sink(|template: &str, args: &[Arg]| {
///         eprintln!("{}", sprintf(template, args));
///     })
///     .build();
///
/// let ctx = logger.with_log_id(None, "batch");
/// logger.info(&ctx, "rows=%d", &[Arg::from(10)]);
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    sink: Option<Arc<dyn Sink>>,
    locator: Option<Arc<dyn Locator>>,
    terminator: Option<Arc<dyn Terminator>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            sink: None,
            locator: None,
            terminator: None,
        }
    }

    /// Replace all configuration values
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    /// Apply a preset
    #[must_use = "builder methods return a new value"]
    pub fn profile(self, profile: Profile) -> Self {
        self.config(profile.config())
    }

    #[must_use = "builder methods return a new value"]
    pub fn log_id_strategy(mut self, strategy: LogIdStrategy) -> Self {
        self.config.log_id = strategy;
        self
    }

    /// Include or drop the `file:line` segment
    #[must_use = "builder methods return a new value"]
    pub fn caller_location(mut self, include: bool) -> Self {
        self.config.caller_location = include;
        self
    }

    /// Use a custom locator; overrides `caller_location`
    #[must_use = "builder methods return a new value"]
    pub fn locator<L: Locator + 'static>(mut self, locator: L) -> Self {
        self.locator = Some(Arc::new(locator));
        self
    }

    /// Timestamp format of the lazily installed default sink
    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.config.timestamp_format = format;
        self
    }

    /// Install a sink up front instead of the lazy default
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn shared_sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Replace process exit after fatal lines
    #[must_use = "builder methods return a new value"]
    pub fn terminator(mut self, terminator: Arc<dyn Terminator>) -> Self {
        self.terminator = Some(terminator);
        self
    }

    /// Build the Logger, failing on invalid configuration
    pub fn try_build(self) -> Result<Logger> {
        self.config.validate()?;
        Ok(self.build())
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let mut logger = Logger::from_config(&self.config);

        if let Some(locator) = self.locator {
            logger.locator = locator;
        }
        if let Some(terminator) = self.terminator {
            logger.terminator = terminator;
        }
        if let Some(sink) = self.sink {
            logger.set_shared_sink(sink);
        }

        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
