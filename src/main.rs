//! code-sign - generate code-signing bundles and sign executables.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use code_sign::cli::output;
use code_sign::cli::{execute, Cli};
use code_sign::core::config::AppConfig;
use code_sign::core::constants;
use code_sign::core::platform::SdkLocator;
use code_sign::error::{Error, StoreError, ToolError, ValidationError};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("code_sign=debug")
        } else {
            EnvFilter::new("code_sign=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time().with_writer(std::io::stderr))
        .init();

    let result = std::env::current_dir()
        .map_err(Error::from)
        .and_then(|cwd| AppConfig::detect(cwd, std::env::consts::OS, &SdkLocator::from_env()))
        .and_then(|config| execute(cli.command, &config));

    if let Err(e) = result {
        output::error(&e.to_string());
        if let Some(hint) = suggestion(&e) {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}

fn suggestion(e: &Error) -> Option<&'static str> {
    match e {
        Error::Store(StoreError::AlreadyExists(_)) => Some("pass --force to overwrite"),
        Error::Validation(ValidationError::Extension { .. }) => {
            Some("certificate paths must end in .crt")
        }
        Error::Tool(ToolError::NotFound(_)) => Some("install the Windows SDK signing tools"),
        Error::Unsupported(_) => Some("run verify on Windows"),
        _ => None,
    }
}
