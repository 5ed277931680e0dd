//! External process invocation.
//!
//! The certificate helper and the signing tool are opaque executables. They
//! are started through a [`ProcessRunner`] so tests can substitute a fake.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::process::Command;

use tracing::debug;

use crate::error::{Result, ToolError};

/// One argument of an [`Invocation`].
#[derive(Clone, PartialEq, Eq)]
enum Arg {
    Plain(OsString),
    /// Passed to the process verbatim but never displayed.
    Secret(OsString),
}

/// A program and its arguments.
#[derive(Clone, PartialEq, Eq)]
pub struct Invocation {
    program: OsString,
    args: Vec<Arg>,
}

impl Invocation {
    pub fn new(program: impl AsRef<OsStr>) -> Self {
        Self {
            program: program.as_ref().to_os_string(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(Arg::Plain(arg.as_ref().to_os_string()));
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        for arg in args {
            self = self.arg(arg);
        }
        self
    }

    /// Add an argument that must not show up in logs or error messages.
    pub fn secret_arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(Arg::Secret(arg.as_ref().to_os_string()));
        self
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    /// Program name for messages.
    pub fn program_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }

    /// Arguments as passed to the process, secrets included.
    pub fn raw_args(&self) -> impl Iterator<Item = &OsStr> {
        self.args.iter().map(|arg| match arg {
            Arg::Plain(s) | Arg::Secret(s) => s.as_os_str(),
        })
    }

    /// Position of the first argument equal to `flag`.
    pub fn position(&self, flag: &str) -> Option<usize> {
        self.raw_args().position(|arg| arg == flag)
    }

    /// Argument following `flag`, if any.
    pub fn value_of(&self, flag: &str) -> Option<&OsStr> {
        let idx = self.position(flag)?;
        self.raw_args().nth(idx + 1)
    }

    fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.raw_args());
        cmd
    }
}

/// Redacted command line.
impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            match arg {
                Arg::Plain(s) => write!(f, " {}", s.to_string_lossy())?,
                Arg::Secret(_) => write!(f, " ***")?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invocation({})", self)
    }
}

/// Runs an external process to completion.
pub trait ProcessRunner {
    /// Run `invocation`, blocking until it exits.
    ///
    /// # Errors
    ///
    /// Returns `ToolError::Spawn` if the process cannot be started and
    /// `ToolError::ProcessFailed` if it exits unsuccessfully.
    fn run(&self, invocation: &Invocation) -> Result<()>;
}

/// Runs processes with inherited stdio. No timeout is applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<()> {
        debug!(command = %invocation, "running");

        let status = invocation
            .to_command()
            .status()
            .map_err(|source| ToolError::Spawn {
                program: invocation.program_name(),
                source,
            })?;

        if !status.success() {
            return Err(ToolError::ProcessFailed {
                program: invocation.program_name(),
                code: status.code(),
            }
            .into());
        }

        debug!(program = %invocation.program_name(), "finished");
        Ok(())
    }
}
