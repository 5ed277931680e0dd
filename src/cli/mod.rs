//! Command-line interface.

pub mod cert;
pub mod completions;
pub mod info;
pub mod output;
pub mod resolve;
pub mod sign;
pub mod verify;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::config::AppConfig;

/// code-sign - generate code-signing bundles and sign executables.
#[derive(Parser)]
#[command(
    name = "code-sign",
    about = "Generate code-signing certificates and sign executables",
    version,
    after_help = "Signing only runs on Windows. Elsewhere `cert` and `sign` do nothing."
)]
pub struct Cli {
    /// Show debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Show configuration and diagnostic information
    Info {
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Extra arguments, echoed back
        rest: Vec<String>,
    },

    /// Generate certificate and password
    Cert {
        /// Certificate path (must end in .crt)
        #[arg(value_name = "CERTIFICATE_PATH")]
        path: PathBuf,
        /// Overwrite existing output files
        #[arg(short, long, overrides_with = "no_force")]
        force: bool,
        /// Refuse to overwrite existing output files (default)
        #[arg(long, overrides_with = "force")]
        no_force: bool,
    },

    /// Sign executable
    Sign {
        /// Executable to sign
        #[arg(value_name = "EXECUTABLE_PATH")]
        path: PathBuf,
        /// Certificate path; defaults to the secrets in the environment
        #[arg(short, long, value_name = "CERTIFICATE_PATH")]
        cert: Option<PathBuf>,
    },

    /// Verify executable
    Verify {
        /// Executable to verify
        #[arg(value_name = "EXECUTABLE_PATH")]
        path: PathBuf,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command, config: &AppConfig) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Info { json, rest } => info::execute(config, &rest, json),
        Cert { path, force, .. } => cert::execute(config, &path, force),
        Sign { path, cert } => sign::execute(config, &path, cert.as_deref()),
        Verify { path } => verify::execute(config, &path),
        Completions { shell } => completions::execute(shell),
    }
}
