//! Logger metrics for observability
//!
//! Counts lines per level and sink failures.

use super::log_level::LogLevel;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for logger observability
///
/// # Example
///
/// ```
/// use request_logger::{LoggerMetrics, LogLevel};
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_logged(LogLevel::Info);
/// metrics.record_write_failure();
///
/// assert_eq!(metrics.total_logged(), 1);
/// assert_eq!(metrics.write_failures(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Lines accepted by the sink, indexed by level
    logged: [AtomicU64; 5],

    /// Lines the sink failed to write (error or panic)
    write_failures: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            logged: [
                AtomicU64::new(0),
                AtomicU64::new(0),
                AtomicU64::new(0),
                AtomicU64::new(0),
                AtomicU64::new(0),
            ],
            write_failures: AtomicU64::new(0),
        }
    }

    /// Lines written at `level`
    #[inline]
    pub fn logged(&self, level: LogLevel) -> u64 {
        self.logged[level as usize].load(Ordering::Relaxed)
    }

    /// Lines written at any level
    pub fn total_logged(&self) -> u64 {
        self.logged.iter().map(|c| c.load(Ordering::Relaxed)).sum()
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    /// Record a written line; returns the previous count for `level`
    #[inline]
    pub fn record_logged(&self, level: LogLevel) -> u64 {
        self.logged[level as usize].fetch_add(1, Ordering::Relaxed)
    }

    /// Record a failed write; returns the previous count
    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Failure rate as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if nothing has been dispatched.
    pub fn failure_rate(&self) -> f64 {
        let failed = self.write_failures() as f64;
        let total = self.total_logged() as f64 + failed;
        if total == 0.0 {
            0.0
        } else {
            (failed / total) * 100.0
        }
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        for counter in &self.logged {
            counter.store(0, Ordering::Relaxed);
        }
        self.write_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        let snapshot = Self::new();
        for level in LogLevel::ALL {
            snapshot.logged[level as usize].store(self.logged(level), Ordering::Relaxed);
        }
        snapshot
            .write_failures
            .store(self.write_failures(), Ordering::Relaxed);
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.total_logged(), 0);
        assert_eq!(metrics.write_failures(), 0);
        for level in LogLevel::ALL {
            assert_eq!(metrics.logged(level), 0);
        }
    }

    #[test]
    fn test_metrics_per_level() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.record_logged(LogLevel::Warn), 0); // Returns previous value
        metrics.record_logged(LogLevel::Warn);
        metrics.record_logged(LogLevel::Fatal);

        assert_eq!(metrics.logged(LogLevel::Warn), 2);
        assert_eq!(metrics.logged(LogLevel::Fatal), 1);
        assert_eq!(metrics.logged(LogLevel::Info), 0);
        assert_eq!(metrics.total_logged(), 3);
    }

    #[test]
    fn test_metrics_failure_rate() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.failure_rate(), 0.0);

        for _ in 0..90 {
            metrics.record_logged(LogLevel::Info);
        }
        for _ in 0..10 {
            metrics.record_write_failure();
        }

        let rate = metrics.failure_rate();
        assert!((9.9..=10.1).contains(&rate), "Failure rate was {}", rate);
    }

    #[test]
    fn test_metrics_reset_and_snapshot() {
        let metrics = LoggerMetrics::new();
        metrics.record_logged(LogLevel::Debug);
        metrics.record_write_failure();

        let snapshot = metrics.clone();
        metrics.reset();

        assert_eq!(metrics.total_logged(), 0);
        assert_eq!(metrics.write_failures(), 0);
        assert_eq!(snapshot.logged(LogLevel::Debug), 1);
        assert_eq!(snapshot.write_failures(), 1);
    }
}
