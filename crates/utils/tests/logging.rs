//! Runs in its own test binary so the global subscriber does not clash
//! with `#[traced_test]` in the unit tests.

use profile_follow_utils::logging::{LoggingError, init_tracing};

#[test]
fn second_init_reports_error_instead_of_panicking() {
    init_tracing("debug").expect("first init should install the subscriber");

    let second = init_tracing("debug");

    assert!(matches!(second, Err(LoggingError::Init(_))));
    tracing::info!("logging still works after a rejected init");
}
