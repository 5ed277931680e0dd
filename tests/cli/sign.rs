//! Tests for the sign command.

use crate::support::*;

#[test]
fn test_sign_rejects_missing_executable() {
    let t = Test::new();
    t.bundle("my.crt", FAKE_PFX, PASSWORD);

    let output = t.sign("missing.exe", "my.crt");
    assert_failure(&output);
    assert_stderr_contains(&output, "missing.exe does not exist");
}

#[test]
fn test_sign_rejects_missing_certificate() {
    let t = Test::new();
    t.executable("app.exe");

    let output = t.sign("app.exe", "nope.crt");
    assert_failure(&output);
    assert_stderr_contains(&output, "nope.crt does not exist");
}

#[test]
fn test_sign_requires_certificate_source() {
    let t = Test::new();
    t.executable("app.exe");

    let output = t.run(&["sign", "app.exe"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "--cert");
    assert_stderr_contains(&output, ENV_CRTPASS);
}

#[test]
fn test_sign_ignores_half_configured_environment() {
    let t = Test::new();
    t.executable("app.exe");

    let output = t
        .cmd()
        .env(ENV_CRT, FAKE_PFX_B64)
        .args(["sign", "app.exe"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "no certificate given");
}

#[test]
fn test_sign_rejects_corrupt_certificate() {
    let t = Test::new();
    t.executable("app.exe");
    t.write("bad.crt", b"not base64!!");
    t.write("bad.crtpass", PASSWORD.as_bytes());

    let output = t.sign("app.exe", "bad.crt");
    assert_failure(&output);
    assert_stderr_contains(&output, "cannot load secrets from");
    assert_stderr_contains(&output, "base64");
}

#[test]
fn test_sign_rejects_wrong_extension() {
    let t = Test::new();
    t.executable("app.exe");
    t.write("cert.pfx", FAKE_PFX_B64.as_bytes());

    let output = t.sign("app.exe", "cert.pfx");
    assert_failure(&output);
    assert_stderr_contains(&output, "instead of expected \".crt\"");
}

#[test]
fn test_sign_rejects_missing_password_file() {
    let t = Test::new();
    t.executable("app.exe");
    t.write("lonely.crt", FAKE_PFX_B64.as_bytes());

    let output = t.sign("app.exe", "lonely.crt");
    assert_failure(&output);
    assert_stderr_contains(&output, "lonely.crtpass");
}

#[cfg(not(windows))]
#[test]
fn test_sign_with_certificate_is_no_op() {
    let t = Test::new();
    t.executable("app.exe");
    t.bundle("my.crt", FAKE_PFX, PASSWORD);

    let output = t.sign("app.exe", "my.crt");
    assert_success(&output);
    assert_stdout_contains(&output, "nothing signed");
    assert_eq!(
        std::fs::read(t.path("app.exe")).unwrap(),
        FAKE_EXECUTABLE
    );
    assert_eq!(t.entries(), vec!["app.exe", "my.crt", "my.crtpass"]);
}

#[cfg(not(windows))]
#[test]
fn test_sign_with_environment_defaults() {
    let t = Test::new();
    t.executable("app.exe");

    let output = t
        .cmd()
        .env(ENV_CRT, FAKE_PFX_B64)
        .env(ENV_CRTPASS, PASSWORD)
        .args(["sign", "app.exe"])
        .output()
        .unwrap();
    assert_success(&output);
}

#[test]
fn test_sign_rejects_corrupt_environment_default() {
    let t = Test::new();
    t.executable("app.exe");

    let output = t
        .cmd()
        .env(ENV_CRT, "not base64!!")
        .env(ENV_CRTPASS, PASSWORD)
        .args(["sign", "app.exe"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "base64");
}

#[cfg(not(windows))]
#[test]
fn test_sign_resolves_absolute_paths() {
    let t = Test::new();
    let exe = t.executable("app.exe");
    let paths = t.bundle("my.crt", FAKE_PFX, PASSWORD);

    let output = t
        .cmd()
        .current_dir(std::env::temp_dir())
        .args([
            "sign",
            exe.to_str().unwrap(),
            "-c",
            paths.certificate_path.to_str().unwrap(),
        ])
        .output()
        .unwrap();
    assert_success(&output);
}
