//! Info command - show configuration and diagnostics.

use serde::Serialize;

use crate::cli::{output, resolve};
use crate::core::config::AppConfig;
use crate::error::Result;

/// Everything `info` reports.
#[derive(Debug, Serialize)]
struct Report<'a> {
    #[serde(flatten)]
    config: &'a AppConfig,
    argv: Vec<String>,
    rest: &'a [String],
    /// Whether both default-secret variables are set.
    default_secrets: bool,
}

/// Print the current configuration.
pub fn execute(config: &AppConfig, rest: &[String], json: bool) -> Result<()> {
    let report = Report {
        config,
        argv: std::env::args_os()
            .skip(1)
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect(),
        rest,
        default_secrets: resolve::env_lookup(&config.certificate_env_var()).is_some()
            && resolve::env_lookup(&config.password_env_var()).is_some(),
    };

    if json {
        output::data(&serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    output::kv("mode", config.mode);
    output::kv("cwd", config.cwd.display());
    output::kv("argv", format!("{:?}", report.argv));
    output::kv("rest", format!("{:?}", report.rest));
    output::kv("helper_path", config.helper_path.display());
    output::kv("signtool_path", config.signtool_path.display());
    output::kv("timestamp_url", &config.timestamp_url);
    output::kv(
        "default_secrets",
        if report.default_secrets {
            "environment"
        } else {
            "none (--cert required)"
        },
    );
    Ok(())
}
