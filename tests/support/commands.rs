//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a code-sign command isolated from the caller's environment.
    ///
    /// Returns a Command configured with:
    /// - Current directory set to the test directory
    /// - Default-secret and log variables removed
    /// - Colors disabled
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("code-sign").expect("failed to find code-sign binary");
        cmd.current_dir(self.dir.path());
        cmd.env_remove(super::ENV_CRT);
        cmd.env_remove(super::ENV_CRTPASS);
        cmd.env_remove("CODE_SIGN_LOG");
        cmd.env("NO_COLOR", "1");
        cmd
    }

    /// Run code-sign with `args`.
    pub fn run(&self, args: &[&str]) -> Output {
        self.cmd()
            .args(args)
            .output()
            .expect("failed to run code-sign")
    }

    /// Shortcut for `code-sign info`.
    pub fn info(&self) -> Output {
        self.run(&["info"])
    }

    /// Shortcut for `code-sign cert`.
    pub fn cert(&self, path: &str) -> Output {
        self.run(&["cert", path])
    }

    /// Shortcut for `code-sign sign --cert`.
    pub fn sign(&self, executable: &str, cert: &str) -> Output {
        self.run(&["sign", executable, "--cert", cert])
    }

    /// Shortcut for `code-sign verify`.
    pub fn verify(&self, executable: &str) -> Output {
        self.run(&["verify", executable])
    }
}
