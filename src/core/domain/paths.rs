//! Secrets pair paths.
//!
//! A certificate path `X.crt` names a pair of sibling files: the base64
//! certificate at `X.crt` and the password at `X.crtpass`.

use std::path::{Path, PathBuf};

use crate::core::config::AppConfig;
use crate::error::{Result, ValidationError};

/// Certificate and password file locations of one secrets pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretsPaths {
    pub certificate_path: PathBuf,
    pub password_path: PathBuf,
}

impl SecretsPaths {
    /// Derive the pair from a certificate path.
    ///
    /// The extension of `certificate_path` must equal the configured
    /// certificate extension exactly (case-sensitive). The password path
    /// keeps the stem and swaps in the password extension.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Extension` on any other extension.
    pub fn parse(config: &AppConfig, certificate_path: &Path) -> Result<Self> {
        let actual = extension_of(certificate_path);
        if actual != config.certificate_ext {
            return Err(ValidationError::Extension {
                path: certificate_path.to_path_buf(),
                actual,
                expected: config.certificate_ext.clone(),
            }
            .into());
        }

        let password_ext = config.password_ext.trim_start_matches('.');
        Ok(Self {
            certificate_path: certificate_path.to_path_buf(),
            password_path: certificate_path.with_extension(password_ext),
        })
    }

    /// First file of the pair that is already present, if any.
    pub fn any_exists(&self) -> Option<&Path> {
        [&self.certificate_path, &self.password_path]
            .into_iter()
            .find(|p| p.exists())
            .map(PathBuf::as_path)
    }
}

/// Extension including the leading dot, or `""` when there is none.
fn extension_of(path: &Path) -> String {
    match path.extension() {
        Some(ext) => format!(".{}", ext.to_string_lossy()),
        None => String::new(),
    }
}
