//! Certificate generation, signing and verification.
//!
//! Each operation is a single linear flow around one external process. In
//! no-op mode generation and signing return immediately without touching the
//! filesystem, and verification fails.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::TempDir;
use tracing::{debug, info};
use uuid::Uuid;

use crate::core::config::AppConfig;
use crate::core::constants;
use crate::core::domain::{SecretsBundle, SecretsPaths};
use crate::core::runner::{Invocation, ProcessRunner};
use crate::core::store;
use crate::error::{Error, Result, StoreError};

/// Runs the signing workflow against one configuration.
pub struct Signer<'a, R: ProcessRunner> {
    config: &'a AppConfig,
    runner: &'a R,
}

impl<'a, R: ProcessRunner> Signer<'a, R> {
    pub fn new(config: &'a AppConfig, runner: &'a R) -> Self {
        Self { config, runner }
    }

    /// Generate a self-signed certificate and a fresh password and save them
    /// as the secrets pair named by `certificate_path`.
    ///
    /// Returns the written paths, or `None` in no-op mode.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Extension` for a bad path,
    /// `StoreError::AlreadyExists` if either output exists and `force` is not
    /// set, and `ToolError` if the helper fails.
    pub fn generate_certificate(
        &self,
        certificate_path: &Path,
        force: bool,
    ) -> Result<Option<SecretsPaths>> {
        if self.config.is_no_op() {
            debug!("no-op mode, skipping certificate generation");
            return Ok(None);
        }

        let paths = SecretsPaths::parse(self.config, certificate_path)?;
        if !force {
            if let Some(existing) = paths.any_exists() {
                return Err(StoreError::AlreadyExists(existing.to_path_buf()).into());
            }
        }

        let password = generate_password();
        let scratch = TempDir::new()?;
        let pfx_path = scratch.path().join(constants::SCRATCH_PFX_NAME);

        let invocation = Invocation::new(&self.config.powershell_path)
            .args(["-NoProfile", "-Command"])
            .arg(&self.config.helper_path)
            .arg("-PfxPath")
            .arg(&pfx_path)
            .arg("-Subject")
            .arg(format!("\"{}\"", self.config.subject))
            .args(["-Password", "(", "ConvertTo-SecureString", "-String"])
            .secret_arg(&password)
            .args(["-Force", "-AsPlainText", ")"]);
        self.runner.run(&invocation)?;

        let certificate = fs::read(&pfx_path).map_err(|source| StoreError::Read {
            path: pfx_path.clone(),
            source,
        })?;
        let bundle = SecretsBundle::new(certificate, password);
        store::save(&bundle, &paths, force)?;

        info!(
            certificate = %paths.certificate_path.display(),
            fingerprint = %bundle.fingerprint(),
            "generated certificate"
        );
        Ok(Some(paths))
    }

    /// Sign `executable_path` with the certificate in `bundle`.
    ///
    /// The decoded certificate only exists on disk inside a scratch directory
    /// for the duration of the call. Every call re-signs.
    ///
    /// Returns `false` in no-op mode.
    ///
    /// # Errors
    ///
    /// Returns `ToolError` if the signing tool fails.
    pub fn sign_executable(&self, bundle: &SecretsBundle, executable_path: &Path) -> Result<bool> {
        if self.config.is_no_op() {
            debug!("no-op mode, skipping signing");
            return Ok(false);
        }

        let scratch = TempDir::new()?;
        let pfx_path = scratch.path().join(constants::SCRATCH_PFX_NAME);
        write_private(&pfx_path, bundle.certificate()).map_err(|source| StoreError::Write {
            path: pfx_path.clone(),
            source,
        })?;

        let invocation = Invocation::new(&self.config.signtool_path)
            .args(["sign", "/f"])
            .arg(&pfx_path)
            .arg("/p")
            .secret_arg(bundle.password())
            .arg("/tr")
            .arg(&self.config.timestamp_url)
            .args([
                "/td",
                constants::DIGEST_ALGORITHM,
                "/fd",
                constants::DIGEST_ALGORITHM,
            ])
            .arg(executable_path);
        self.runner.run(&invocation)?;

        info!(
            executable = %executable_path.display(),
            fingerprint = %bundle.fingerprint(),
            "signed executable"
        );
        Ok(true)
    }

    /// Verify the signature of `executable_path` in strict mode.
    ///
    /// # Errors
    ///
    /// Returns `Error::Unsupported` in no-op mode and `ToolError` if the
    /// signature does not verify.
    pub fn verify_executable(&self, executable_path: &Path) -> Result<()> {
        if self.config.is_no_op() {
            return Err(Error::Unsupported(format!(
                "verification requires {}",
                constants::SIGNTOOL_FILE_NAME
            )));
        }

        let invocation = Invocation::new(&self.config.signtool_path)
            .args(["verify", "/pa", "/v"])
            .arg(executable_path);
        self.runner.run(&invocation)?;

        info!(executable = %executable_path.display(), "signature verified");
        Ok(())
    }
}

/// Random token protecting a generated certificate: 32 lowercase hex digits.
pub fn generate_password() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Create `path` readable only by the owner and write `contents`.
fn write_private(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    file.write_all(contents)?;
    file.sync_all()
}
