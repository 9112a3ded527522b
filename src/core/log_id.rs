//! Binding log identifiers to request contexts
//!
//! A log identifier is a caller-supplied base label joined by `_` to a
//! generated suffix (`job_x8Kd02Qa`, or `job_1736332245123456789` with the
//! timestamp strategy). It is stored once in a derived [`Context`] and read
//! back by every logging call made with that context.

use super::context::Context;
use super::error::LoggerError;
use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reserved context key holding the log identifier
pub const LOG_ID_KEY: &str = "__log_id__";

/// Length of the random suffix generated by [`with_log_id`]
pub const DEFAULT_SUFFIX_LEN: usize = 8;

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

// Private wrapper so foreign values stored under LOG_ID_KEY are ignored.
#[derive(Debug, Clone)]
struct LogId(String);

/// How the suffix of a generated log identifier is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogIdStrategy {
    /// Uniformly drawn alphanumeric characters (not cryptographically secure)
    Random { len: usize },
    /// Current Unix time in nanoseconds, as decimal digits
    Timestamp,
}

impl Default for LogIdStrategy {
    fn default() -> Self {
        LogIdStrategy::Random {
            len: DEFAULT_SUFFIX_LEN,
        }
    }
}

impl LogIdStrategy {
    /// Produce a fresh suffix
    pub fn suffix(&self) -> String {
        match self {
            LogIdStrategy::Random { len } => random_token(*len),
            LogIdStrategy::Timestamp => timestamp_token(),
        }
    }

    /// Join `base_label` and a fresh suffix with `_`
    pub fn generate(&self, base_label: &str) -> String {
        format!("{}_{}", base_label, self.suffix())
    }

    /// Derive a child of `parent` carrying a freshly generated log id
    pub fn bind<'a>(&self, parent: impl Into<Option<&'a Context>>, base_label: &str) -> Context {
        with_explicit_log_id(parent, &self.generate(base_label))
    }
}

impl fmt::Display for LogIdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogIdStrategy::Random { len } if *len == DEFAULT_SUFFIX_LEN => write!(f, "random"),
            LogIdStrategy::Random { len } => write!(f, "random:{}", len),
            LogIdStrategy::Timestamp => write!(f, "timestamp"),
        }
    }
}

impl FromStr for LogIdStrategy {
    type Err = LoggerError;

    /// Accepts `random`, `random:<len>` and `timestamp`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        match lower.split_once(':') {
            None if lower == "random" => Ok(LogIdStrategy::default()),
            None if lower == "timestamp" => Ok(LogIdStrategy::Timestamp),
            Some(("random", len)) => len
                .parse()
                .map(|len| LogIdStrategy::Random { len })
                .map_err(|_| {
                    LoggerError::config(
                        "LogIdStrategy",
                        format!("Invalid suffix length: '{}'", len),
                    )
                }),
            _ => Err(LoggerError::config(
                "LogIdStrategy",
                format!("Unknown strategy: '{}'", s),
            )),
        }
    }
}

/// Generate `len` characters drawn uniformly from `[0-9a-zA-Z]`
pub fn random_token(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

fn timestamp_token() -> String {
    let now = Utc::now();
    now.timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_micros())
        .to_string()
}

/// Derive a child context whose log id is `base_label` plus a random
/// 8-character suffix. An absent parent is replaced by an empty root.
pub fn with_log_id<'a>(parent: impl Into<Option<&'a Context>>, base_label: &str) -> Context {
    LogIdStrategy::default().bind(parent, base_label)
}

/// Derive a child context carrying `log_id` exactly as given
pub fn with_explicit_log_id<'a>(parent: impl Into<Option<&'a Context>>, log_id: &str) -> Context {
    match parent.into() {
        Some(ctx) => ctx.with_value(LOG_ID_KEY, LogId(log_id.to_string())),
        None => Context::background().with_value(LOG_ID_KEY, LogId(log_id.to_string())),
    }
}

/// Log id bound to `ctx`, or an empty string when there is none
pub fn log_id<'a>(ctx: impl Into<Option<&'a Context>>) -> String {
    find_log_id(ctx.into()).unwrap_or_default().to_string()
}

pub(crate) fn find_log_id(ctx: Option<&Context>) -> Option<&str> {
    ctx?.value::<LogId>(LOG_ID_KEY).map(|id| id.0.as_str())
}

impl Context {
    /// Shorthand for [`with_log_id`] on this context
    #[must_use]
    pub fn with_log_id(&self, base_label: &str) -> Context {
        with_log_id(self, base_label)
    }

    /// Shorthand for [`with_explicit_log_id`] on this context
    #[must_use]
    pub fn with_explicit_log_id(&self, log_id: &str) -> Context {
        with_explicit_log_id(self, log_id)
    }

    /// Shorthand for [`log_id`] on this context
    pub fn log_id(&self) -> String {
        log_id(self)
    }
}
