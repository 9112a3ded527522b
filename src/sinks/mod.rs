//! Sink implementations

pub mod stream;

pub use stream::StreamSink;

pub use crate::core::Sink;
