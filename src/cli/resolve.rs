//! Argument resolution for CLI commands.
//!
//! Turns raw paths and the environment into validated inputs before any
//! signing work starts.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::config::AppConfig;
use crate::core::domain::SecretsBundle;
use crate::core::store;
use crate::error::{Result, StoreError, ValidationError};

/// Resolve `path` against the working directory and require a regular file.
///
/// # Errors
///
/// Returns `ValidationError::FileNotFound` if nothing usable is there.
pub fn existing_file(config: &AppConfig, path: &Path) -> Result<PathBuf> {
    let resolved = config.resolve(path);
    if !resolved.is_file() {
        return Err(ValidationError::FileNotFound(resolved).into());
    }
    Ok(resolved)
}

/// Default secrets from `<prefix>CRT` and `<prefix>CRTPASS`.
///
/// Only used when both variables are set.
///
/// # Errors
///
/// Returns `StoreError::Decode` if the certificate variable is not base64.
pub fn default_secrets<F>(config: &AppConfig, lookup: F) -> Result<Option<SecretsBundle>>
where
    F: Fn(&str) -> Option<String>,
{
    let crt_var = config.certificate_env_var();
    let pass_var = config.password_env_var();

    match (lookup(&crt_var), lookup(&pass_var)) {
        (Some(b64_certificate), Some(password)) => {
            debug!(variable = %crt_var, "using default secrets from environment");
            store::decode(&b64_certificate, &password).map(Some)
        }
        _ => Ok(None),
    }
}

/// Secrets for signing: the `--cert` bundle if given, else the environment default.
///
/// # Errors
///
/// Returns `ValidationError::FileNotFound` for a missing `--cert` file,
/// `StoreError::Load` if the bundle cannot be loaded and
/// `ValidationError::MissingCertificate` when neither source is available.
pub fn secrets<F>(config: &AppConfig, cert: Option<&Path>, lookup: F) -> Result<SecretsBundle>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(cert) = cert {
        let path = existing_file(config, cert)?;
        return store::load(config, &path).map_err(|source| {
            StoreError::Load {
                path,
                source: Box::new(source),
            }
            .into()
        });
    }

    default_secrets(config, lookup)?.ok_or_else(|| {
        ValidationError::MissingCertificate {
            crt_var: config.certificate_env_var(),
            pass_var: config.password_env_var(),
        }
        .into()
    })
}

/// Read a variable from the process environment.
pub fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}
