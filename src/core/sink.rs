//! Sink trait for final formatting and output

use super::{error::Result, printf::Arg};

/// Receives the built template (`|LEVEL|file:line|log_id=...|user template`)
/// and the caller's original arguments, and performs the final substitution
/// and write.
///
/// Any `Fn(&str, &[Arg]) + Send + Sync` closure is a sink.
pub trait Sink: Send + Sync {
    fn write(&self, template: &str, args: &[Arg]) -> Result<()>;

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> Sink for F
where
    F: Fn(&str, &[Arg]) + Send + Sync,
{
    fn write(&self, template: &str, args: &[Arg]) -> Result<()> {
        self(template, args);
        Ok(())
    }

    fn name(&self) -> &str {
        "fn"
    }
}
