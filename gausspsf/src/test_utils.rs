//! Shared helpers for unit tests.

#[track_caller]
pub(crate) fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected}, got {actual} (|diff| = {:.3e}, tol = {tol:.1e})",
        (actual - expected).abs()
    );
}

/// Evenly spaced coordinates `start, start + step, ...`.
pub(crate) fn axis(start: f64, step: f64, len: usize) -> Vec<f64> {
    (0..len).map(|i| start + step * i as f64).collect()
}

pub(crate) fn init_logging() {
    common::log_setup::init_test_logging();
}
