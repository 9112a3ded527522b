//! Tests for the process-wide logger
//!
//! The global sink is shared by every test in this binary, so everything
//! touching it lives in a single test.

use parking_lot::Mutex;
use request_logger::{
    debugf, errorf, global, infof, setup_sink, warnf, with_log_id, Arg, Context, LogLevel,
};
use std::sync::Arc;

#[test]
fn test_setup_sink_routes_all_global_calls() {
    let captured: Arc<Mutex<Vec<(String, Vec<Arg>)>>> = Arc::new(Mutex::new(Vec::new()));
    let sink_captured = Arc::clone(&captured);
    setup_sink(move |template: &str, args: &[Arg]| {
        sink_captured.lock().push((template.to_string(), args.to_vec()));
    });
    assert!(global().has_sink());

    let ctx = with_log_id(&Context::background(), "job");
    let id = ctx.log_id();

    infof!(&ctx, "count=%d", 7);
    warnf!(&ctx, "flag=%t", false);
    debugf!(None, "unbound %s", "ctx");
    errorf!(&Context::background(), "bye %v", Arg::display(&"guys"));
    request_logger::infof(&ctx, "direct", &[]);

    let captured = captured.lock();
    assert_eq!(captured.len(), 5);

    assert!(captured[0].0.starts_with("|INFO|global_tests.rs:"));
    assert!(captured[0].0.ends_with(&format!("|log_id={}|count=%d", id)));
    assert_eq!(captured[0].1, vec![Arg::Int(7)]);

    assert!(captured[1].0.starts_with("|WARN|"));
    assert_eq!(captured[1].1, vec![Arg::Bool(false)]);

    assert!(captured[2].0.starts_with("|DEBUG|"));
    assert!(!captured[2].0.contains("log_id="));

    assert!(captured[3].0.starts_with("|ERROR|"));
    assert!(!captured[3].0.contains("log_id="));

    assert!(captured[4].0.ends_with(&format!("|log_id={}|direct", id)));

    assert_eq!(global().metrics().logged(LogLevel::Info), 2);
}
