//! Tests for the verify command.

use crate::support::*;

#[test]
fn test_verify_rejects_missing_executable() {
    let t = Test::new();

    let output = t.verify("missing.exe");
    assert_failure(&output);
    assert_stderr_contains(&output, "does not exist");
}

#[cfg(not(windows))]
#[test]
fn test_verify_is_unsupported() {
    let t = Test::new();
    t.executable("app.exe");

    let output = t.verify("app.exe");
    assert_failure(&output);
    assert_stderr_contains(&output, "not supported on this platform");
    assert_stderr_contains(&output, "run verify on Windows");
}
