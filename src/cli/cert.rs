//! Cert command - generate a certificate and password pair.

use std::path::Path;

use crate::cli::output;
use crate::core::config::AppConfig;
use crate::core::runner::SystemRunner;
use crate::core::signer::Signer;
use crate::error::Result;

/// Generate a secrets pair at `path`.
pub fn execute(config: &AppConfig, path: &Path, force: bool) -> Result<()> {
    let certificate_path = config.resolve(path);

    match Signer::new(config, &SystemRunner).generate_certificate(&certificate_path, force)? {
        Some(paths) => {
            output::success("generated certificate");
            output::kv("certificate", output::path(&paths.certificate_path));
            output::kv("password", output::path(&paths.password_path));
        }
        None => output::dimmed("signing is not available on this platform, nothing generated"),
    }
    Ok(())
}
