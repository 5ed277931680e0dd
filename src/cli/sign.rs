//! Sign command - sign an executable.

use std::path::Path;

use crate::cli::{output, resolve};
use crate::core::config::AppConfig;
use crate::core::runner::SystemRunner;
use crate::core::signer::Signer;
use crate::error::Result;

/// Sign the executable at `path` with the `--cert` bundle or the default secrets.
///
/// Both inputs are validated before the signing tool runs.
pub fn execute(config: &AppConfig, path: &Path, cert: Option<&Path>) -> Result<()> {
    let executable = resolve::existing_file(config, path)?;
    let secrets = resolve::secrets(config, cert, resolve::env_lookup)?;

    if Signer::new(config, &SystemRunner).sign_executable(&secrets, &executable)? {
        output::success(&format!("signed {}", output::path(&executable)));
        output::kv("fingerprint", secrets.fingerprint());
    } else {
        output::dimmed("signing is not available on this platform, nothing signed");
    }
    Ok(())
}
