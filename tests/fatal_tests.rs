//! Fatal logging ends the process
//!
//! Each test re-runs itself as a child process (selected with an environment
//! variable) so the real exit path can be observed without ending the test
//! runner.

use request_logger::prelude::*;
use request_logger::fatalf;
use std::fs::File;
use std::process::{Command, Output};

const CHILD_ENV: &str = "REQUEST_LOGGER_FATAL_CHILD";
const LOG_PATH_ENV: &str = "REQUEST_LOGGER_FATAL_LOG";

fn run_child(test_name: &str, extra_env: &[(&str, &str)]) -> Output {
    let exe = std::env::current_exe().expect("test binary path");
    let mut command = Command::new(exe);
    command
        .args(["--exact", test_name, "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, test_name);
    for (key, value) in extra_env {
        command.env(key, value);
    }
    command.output().expect("Failed to spawn child test process")
}

fn is_child(test_name: &str) -> bool {
    std::env::var(CHILD_ENV).map(|v| v == test_name).unwrap_or(false)
}

#[test]
fn test_global_fatalf_exits_with_status_one() {
    const NAME: &str = "test_global_fatalf_exits_with_status_one";
    if is_child(NAME) {
        let ctx = with_explicit_log_id(None, "example_fatal");
        fatalf!(&ctx, "this is fatal message, %f", 3.14);
        // Unreachable when fatalf exits; a zero status fails the parent.
        std::process::exit(0);
    }

    let output = run_child(NAME, &[]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("|FATAL|fatal_tests.rs:"), "stderr: {}", stderr);
    assert!(
        stderr.contains("|log_id=example_fatal|this is fatal message, 3.140000"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn test_logger_fatal_writes_line_before_exit() {
    const NAME: &str = "test_logger_fatal_writes_line_before_exit";
    if is_child(NAME) {
        let path = std::env::var(LOG_PATH_ENV).expect("log path");
        let file = File::create(path).expect("create log file");
        let logger = Logger::builder()
            .caller_location(false)
            .sink(StreamSink::new(std::io::BufWriter::new(file)))
            .build();
        logger.info(None, "before", &[]);
        logger.fatal(None, "last words %d", &[Arg::from(42)]);
        std::process::exit(0);
    }

    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("fatal.log");
    let log_path = log_file.to_str().expect("utf8 path");

    let output = run_child(NAME, &[(LOG_PATH_ENV, log_path)]);
    assert_eq!(output.status.code(), Some(1));

    let content = std::fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with(" |INFO|before"));
    assert!(lines[1].ends_with(" |FATAL|last words 42"));
}
