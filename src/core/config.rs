//! Process configuration.
//!
//! An [`AppConfig`] is built once at startup from the host platform and then
//! passed by reference to every component. Tests build alternate
//! configurations directly.

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::platform::ToolLocator;
use crate::error::Result;

/// Whether signing operations actually run on this host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Generation and signing are skipped; verification is unsupported.
    NoOp,
    /// The native signing tool is available.
    Functional,
}

impl Mode {
    /// Pick the mode for a host platform identifier such as `std::env::consts::OS`.
    pub fn detect(os: &str) -> Self {
        if os.eq_ignore_ascii_case("windows") {
            Mode::Functional
        } else {
            Mode::NoOp
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::NoOp => write!(f, "no-op"),
            Mode::Functional => write!(f, "functional"),
        }
    }
}

/// Immutable configuration for one process run.
#[derive(Debug, Clone, Serialize)]
pub struct AppConfig {
    pub mode: Mode,
    /// Base directory relative paths are resolved against.
    pub cwd: PathBuf,
    /// Certificate generation helper script.
    pub helper_path: PathBuf,
    /// PowerShell used to run the helper.
    pub powershell_path: PathBuf,
    /// Signing tool executable.
    pub signtool_path: PathBuf,
    pub timestamp_url: String,
    pub certificate_ext: String,
    pub password_ext: String,
    /// Prefix of the default-secrets environment variables.
    pub env_prefix: String,
    /// CPU architecture of the signing tool.
    pub arch: String,
    /// Subject of generated certificates.
    pub subject: String,
}

impl AppConfig {
    /// Detect the mode from `os` and build the matching configuration.
    ///
    /// # Errors
    ///
    /// Returns `ToolError::NotFound` if the platform supports signing but the
    /// signing tool cannot be located.
    pub fn detect(cwd: PathBuf, os: &str, locator: &dyn ToolLocator) -> Result<Self> {
        match Mode::detect(os) {
            Mode::Functional => Self::functional(cwd, locator),
            Mode::NoOp => {
                debug!(os, "signing unavailable on this platform, running as no-op");
                Ok(Self::no_op(cwd))
            }
        }
    }

    /// Configuration with inert placeholder locations.
    pub fn no_op(cwd: PathBuf) -> Self {
        Self {
            mode: Mode::NoOp,
            cwd,
            helper_path: PathBuf::from(constants::NO_OP_HELPER_PATH),
            powershell_path: PathBuf::from(constants::POWERSHELL),
            signtool_path: PathBuf::from(constants::NO_OP_SIGNTOOL_PATH),
            timestamp_url: constants::NO_OP_TIMESTAMP_URL.to_string(),
            certificate_ext: constants::CERTIFICATE_EXT.to_string(),
            password_ext: constants::PASSWORD_EXT.to_string(),
            env_prefix: constants::ENV_PREFIX.to_string(),
            arch: constants::SIGNTOOL_ARCH.to_string(),
            subject: constants::CERTIFICATE_SUBJECT.to_string(),
        }
    }

    /// Configuration for a signing-capable host.
    ///
    /// The helper script is expected next to the running executable.
    ///
    /// # Errors
    ///
    /// Returns `ToolError::NotFound` if the signing tool cannot be located.
    pub fn functional(cwd: PathBuf, locator: &dyn ToolLocator) -> Result<Self> {
        let arch = constants::SIGNTOOL_ARCH.to_string();
        let signtool_path = locator.locate(constants::SIGNTOOL_FILE_NAME, &arch)?;
        debug!(path = %signtool_path.display(), "found signing tool");

        let helper_path = std::env::current_exe()?
            .parent()
            .map(|dir| dir.join(constants::HELPER_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(constants::HELPER_FILE_NAME));

        let powershell_path = which::which(constants::POWERSHELL)
            .unwrap_or_else(|_| PathBuf::from(constants::POWERSHELL));

        Ok(Self {
            mode: Mode::Functional,
            cwd,
            helper_path,
            powershell_path,
            signtool_path,
            timestamp_url: constants::TIMESTAMP_URL.to_string(),
            certificate_ext: constants::CERTIFICATE_EXT.to_string(),
            password_ext: constants::PASSWORD_EXT.to_string(),
            env_prefix: constants::ENV_PREFIX.to_string(),
            arch,
            subject: constants::CERTIFICATE_SUBJECT.to_string(),
        })
    }

    pub fn is_no_op(&self) -> bool {
        self.mode == Mode::NoOp
    }

    /// Resolve `path` against the configured working directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.cwd.join(path)
    }

    /// Name of the default certificate environment variable.
    pub fn certificate_env_var(&self) -> String {
        format!("{}{}", self.env_prefix, constants::ENV_CERTIFICATE_SUFFIX)
    }

    /// Name of the default password environment variable.
    pub fn password_env_var(&self) -> String {
        format!("{}{}", self.env_prefix, constants::ENV_PASSWORD_SUFFIX)
    }
}
