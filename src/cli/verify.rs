//! Verify command - check the signature of an executable.

use std::path::Path;

use crate::cli::{output, resolve};
use crate::core::config::AppConfig;
use crate::core::runner::SystemRunner;
use crate::core::signer::Signer;
use crate::error::Result;

pub fn execute(config: &AppConfig, path: &Path) -> Result<()> {
    let executable = resolve::existing_file(config, path)?;
    Signer::new(config, &SystemRunner).verify_executable(&executable)?;
    output::success(&format!("verified {}", output::path(&executable)));
    Ok(())
}
