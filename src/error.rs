//! Error types for code-sign.
//!
//! Errors are grouped by the layer that detects them. Every group converts
//! into the top-level [`Error`] so callers can propagate with `?`.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Tool(#[from] ToolError),

    /// Operation has no fallback outside a signing-capable platform.
    #[error("not supported on this platform: {0}")]
    Unsupported(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Rejected user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("extension of path {path} was \"{actual}\" instead of expected \"{expected}\"")]
    Extension {
        path: PathBuf,
        actual: String,
        expected: String,
    },

    #[error("file {0} does not exist")]
    FileNotFound(PathBuf),

    #[error("no certificate given: pass --cert or set both {crt_var} and {pass_var}")]
    MissingCertificate { crt_var: String, pass_var: String },
}

/// Failures reading or writing a secrets pair.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("certificate is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("{0} already exists")]
    AlreadyExists(PathBuf),

    #[error("cannot load secrets from {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },
}

/// Failures of the external helper or signing tool.
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("could not find {0}")]
    NotFound(String),

    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} failed with {}", exit_code(.code))]
    ProcessFailed { program: String, code: Option<i32> },
}

fn exit_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

impl Error {
    /// True if this error is a decode failure, possibly wrapped in a load failure.
    pub fn is_decode(&self) -> bool {
        match self {
            Error::Store(StoreError::Decode(_)) => true,
            Error::Store(StoreError::Load { source, .. }) => source.is_decode(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
