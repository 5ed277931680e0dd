//! Tests for error handling and CLI flags.

use crate::support::*;

#[test]
fn test_help() {
    let t = Test::new();

    let output = t.run(&["--help"]);
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("cert"));
    assert!(out.contains("sign"));
    assert!(out.contains("verify"));
}

#[test]
fn test_no_command_fails() {
    let t = Test::new();

    let output = t.run(&[]);
    assert!(!output.status.success());
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.run(&["unknown-command"]);
    assert!(!output.status.success());
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.run(&["--version"]);
    assert_success(&output);
    assert_stdout_contains(&output, "code-sign");
}

#[test]
fn test_completions_bash() {
    let t = Test::new();

    let output = t.run(&["completions", "bash"]);
    assert_success(&output);
    assert_stdout_contains(&output, "code-sign");
}

#[test]
fn test_completions_unknown_shell() {
    let t = Test::new();

    let output = t.run(&["completions", "tcsh"]);
    assert!(!output.status.success());
}

#[test]
fn test_errors_go_to_stderr() {
    let t = Test::new();

    let output = t.verify("missing.exe");
    assert_failure(&output);
    assert!(stdout(&output).is_empty());
    assert_stderr_contains(&output, "✗");
}
