//! Timestamped line writer, the default sink

use crate::core::{sprintf, Arg, Result, Sink, TimestampFormat};
use chrono::Utc;
use parking_lot::Mutex;
use std::io::{self, Write};

/// Renders the template with its arguments and writes
/// `<timestamp> <rendered>` as one line to the wrapped writer.
///
/// `StreamSink::stderr()` is what a logger installs when no sink was set.
pub struct StreamSink<W: Write + Send> {
    writer: Mutex<W>,
    timestamp_format: TimestampFormat,
}

impl StreamSink<io::Stderr> {
    /// Sink on the process's standard logging stream
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write + Send> StreamSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            timestamp_format: TimestampFormat::default(),
        }
    }

    /// Set the timestamp format for this sink
    ///
    /// # Examples
    ///
    /// ```
    /// use request_logger::{StreamSink, TimestampFormat};
    ///
    /// let sink = StreamSink::stderr()
    ///     .with_timestamp_format(TimestampFormat::Iso8601Micros);
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn timestamp_format(&self) -> &TimestampFormat {
        &self.timestamp_format
    }

    /// Unwrap the underlying writer
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn render_line(&self, template: &str, args: &[Arg]) -> String {
        format!(
            "{} {}",
            self.timestamp_format.format(&Utc::now()),
            sprintf(template, args)
        )
    }
}

impl<W: Write + Send> Sink for StreamSink<W> {
    fn write(&self, template: &str, args: &[Arg]) -> Result<()> {
        let line = self.render_line(template, args);
        let mut writer = self.writer.lock();
        writeln!(writer, "{}", line)?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "stream"
    }
}
