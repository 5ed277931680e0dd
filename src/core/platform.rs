//! Signing tool discovery.
//!
//! The Windows SDK installs one `signtool.exe` per SDK version and CPU
//! architecture under `%ProgramFiles(x86)%\Windows Kits\10\bin`. Discovery
//! walks that tree once at startup.

use std::path::{Path, PathBuf};

use tracing::trace;
use walkdir::WalkDir;

use crate::core::constants;
use crate::error::{Result, ToolError};

/// Finds an external tool binary for a CPU architecture.
pub trait ToolLocator {
    /// Absolute path of `file_name` inside a directory named `arch`.
    ///
    /// # Errors
    ///
    /// Returns `ToolError::NotFound` if no match exists.
    fn locate(&self, file_name: &str, arch: &str) -> Result<PathBuf>;
}

/// Searches a Windows SDK binaries directory.
#[derive(Debug, Clone)]
pub struct SdkLocator {
    root: Option<PathBuf>,
}

impl SdkLocator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    /// Locator rooted at the SDK directory under `%ProgramFiles(x86)%`.
    ///
    /// When the variable is not set the locator has no root and every
    /// lookup fails.
    pub fn from_env() -> Self {
        let root = std::env::var_os(constants::PROGRAM_FILES_ENV).map(|program_files| {
            constants::WINDOWS_KITS_BIN
                .iter()
                .fold(PathBuf::from(program_files), |dir, part| dir.join(part))
        });
        Self { root }
    }
}

impl ToolLocator for SdkLocator {
    fn locate(&self, file_name: &str, arch: &str) -> Result<PathBuf> {
        let root = self.root.as_ref().ok_or_else(|| {
            ToolError::NotFound(format!(
                "{} (%{}% is not set)",
                file_name,
                constants::PROGRAM_FILES_ENV
            ))
        })?;
        trace!(root = %root.display(), file_name, arch, "searching for tool");

        // Walk in reverse name order so the newest SDK version wins and the
        // result does not depend on enumeration order. Unreadable entries are
        // skipped.
        WalkDir::new(root)
            .sort_by(|a, b| b.file_name().cmp(a.file_name()))
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .find(|entry| {
                let name_matches = entry
                    .file_name()
                    .to_string_lossy()
                    .eq_ignore_ascii_case(file_name);
                let arch_matches = entry
                    .path()
                    .parent()
                    .and_then(Path::file_name)
                    .map(|dir| dir.to_string_lossy().eq_ignore_ascii_case(arch))
                    .unwrap_or(false);
                name_matches && arch_matches
            })
            .map(|entry| entry.into_path())
            .ok_or_else(|| ToolError::NotFound(file_name.to_string()).into())
    }
}
