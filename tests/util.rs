#![allow(unused)]

// Shared tolerance helpers for the integration suites.
//
// Differences are scaled by max(1, |expected|): relative above 1, absolute below. NaN must
// match NaN and infinities must match in sign.

fn check(label: &str, got: f64, expect: f64, tol: f64) {
    if expect.is_nan() {
        assert!(got.is_nan(), "{label}expected NaN, got {got}");
        return;
    }
    if expect.is_infinite() {
        assert!(
            got == expect,
            "{label}expected {expect}, got {got}"
        );
        return;
    }
    let scale = expect.abs().max(1.0);
    assert!(
        (got - expect).abs() <= tol * scale,
        "{label}got {got}, expect {expect} (tol={tol})"
    );
}

pub fn assert_close(got: f64, expect: f64, tol: f64) {
    check("", got, expect, tol);
}

pub fn assert_slice_close(got: &[f64], expect: &[f64], tol: f64) {
    assert_eq!(got.len(), expect.len(), "len mismatch");
    for (i, (&g, &e)) in got.iter().zip(expect).enumerate() {
        check(&format!("idx {i}: "), g, e, tol);
    }
}

/// Purely relative comparison, for tail probabilities far below 1.
pub fn assert_rel_close(got: f64, expect: f64, tol: f64) {
    assert!(
        (got - expect).abs() <= tol * expect.abs(),
        "got {got}, expect {expect} (rel tol={tol})"
    );
}
