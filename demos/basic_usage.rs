//! Basic request logger usage example
//!
//! Binds a log id to a context and logs at every level through the global
//! logger. The last call is fatal and exits with status 1.
//!
//! Run with: cargo run --example basic_usage

use request_logger::prelude::*;
use request_logger::{debugf, errorf, fatalf, infof, warnf};
use std::io;

fn main() {
    println!("=== Request Logger - Basic Usage Example ===\n");

    let ctx = with_log_id(&Context::background(), "example");
    println!("Bound log id: {}\n", log_id(&ctx));

    infof!(&ctx, "this is information message, %d", 1234);
    warnf!(&ctx, "this is warning message, %t", false);
    debugf!(&ctx, "this is debug message, %v", Arg::debug(&ctx));

    let err = io::Error::new(io::ErrorKind::Other, "bye guys");
    errorf!(&ctx, "this is error message, %v", Arg::display(&err));

    // Lines from an unbound context carry no log_id segment
    infof!(None, "no request in scope");

    // A dedicated logger with its own sink and the timestamped profile
    let logger = Logger::builder()
        .profile(Profile::Timestamped)
        .sink(|template: &str, args: &[Arg]| println!("[custom] {}", sprintf(template, args)))
        .build();
    let job = logger.with_log_id(&ctx, "batch");
    infof!(logger: logger, &job, "processed %d rows in %.2fs", 512, 1.375);

    fatalf!(&ctx, "this is fatal message, %f", 3.14);
}
