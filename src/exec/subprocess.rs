//! Blocking subprocess execution behind the [`ProcessRunner`] seam

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use crate::error::{hints, OrchestratorError};

/// Result of a subprocess execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded (exit code 0)
    pub success: bool,

    /// Process exit code
    pub exit_code: i32,

    /// Execution duration
    pub duration: Duration,
}

impl CommandResult {
    /// Create a CommandResult from an exit status
    pub fn from_status(status: ExitStatus, duration: Duration) -> Self {
        Self {
            success: status.success(),
            exit_code: exit_code_of(status),
            duration,
        }
    }

    /// A result with the given exit code and no measured duration
    #[cfg(test)]
    pub fn with_code(exit_code: i32) -> Self {
        Self {
            success: exit_code == 0,
            exit_code,
            duration: Duration::ZERO,
        }
    }
}

/// Exit code of a finished process; a signal-terminated process maps to `128 + signal`
fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

/// Runs an external program to completion
pub trait ProcessRunner {
    /// Run `program` with `args`, blocking until it exits.
    ///
    /// Stdio is inherited. A non-zero exit is reported through the returned
    /// [`CommandResult`], not as an error; errors mean the process never ran.
    fn run(&self, program: &Path, args: &[OsString]) -> Result<CommandResult, OrchestratorError>;
}

/// Runs real processes with inherited stdio
#[derive(Debug, Default)]
pub struct SystemRunner {
    verbose: bool,
}

impl SystemRunner {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Resolve a bare program name on PATH; paths are used as given
    fn resolve(program: &Path) -> Result<PathBuf, OrchestratorError> {
        if program.components().count() > 1 {
            return Ok(program.to_path_buf());
        }

        which::which(program).map_err(|_| {
            OrchestratorError::missing_tool(program.display().to_string(), hints::cmake())
        })
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &Path, args: &[OsString]) -> Result<CommandResult, OrchestratorError> {
        let resolved = Self::resolve(program)?;
        let start = Instant::now();

        let mut cmd = Command::new(&resolved);
        cmd.args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        if self.verbose {
            eprintln!("Running: {:?}", cmd);
        }

        let status = cmd.status().map_err(|source| OrchestratorError::Spawn {
            program: resolved.display().to_string(),
            source,
        })?;

        let result = CommandResult::from_status(status, start.elapsed());
        if self.verbose {
            eprintln!(
                "Finished {} in {:.2?} (exit code {})",
                program.display(),
                result.duration,
                result.exit_code
            );
        }

        Ok(result)
    }
}
