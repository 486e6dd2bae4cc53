//! Command-execution capability for the workflow layer.
//!
//! The workflow never spawns processes directly; it goes through the
//! [`CommandRunner`] trait so tests can substitute a deterministic fake
//! and callers can swap the interpreter.

use std::process::Command;

use tracing::debug;

use crate::error::OcrMatchError;

/// The fully-collected result of one external command.
#[derive(Clone, Debug, Default)]
pub struct CommandOutput {
    /// Everything the command wrote to standard output.
    pub stdout: String,

    /// Everything the command wrote to standard error.
    pub stderr: String,

    /// Process exit status; `-1` when the process was terminated by a
    /// signal and no status is available.
    pub status: i32,
}

impl CommandOutput {
    /// Returns true for a zero exit status.
    #[inline]
    pub fn success(&self) -> bool {
        self.status == 0
    }
}

/// Capability to run one command text synchronously to completion.
///
/// Implementations must drain both output streams fully before waiting
/// for process exit; waiting first deadlocks once either pipe buffer
/// fills.
pub trait CommandRunner {
    /// Runs `command` and returns its collected output.
    fn run(&self, command: &str) -> Result<CommandOutput, OcrMatchError>;
}

/// Runs command text through a PowerShell interpreter.
#[derive(Clone, Debug)]
pub struct PowerShellRunner {
    program: String,
}

impl PowerShellRunner {
    /// A runner using the conventional `powershell.exe` on PATH.
    pub fn new() -> Self {
        Self::with_program("powershell.exe")
    }

    /// A runner using a specific interpreter binary (e.g. `pwsh`).
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for PowerShellRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for PowerShellRunner {
    fn run(&self, command: &str) -> Result<CommandOutput, OcrMatchError> {
        debug!(program = %self.program, "dispatching command");

        // output() drains stdout and stderr concurrently before waiting
        // on exit, which is what keeps a chatty script from deadlocking
        // against a full pipe buffer.
        let output = Command::new(&self.program)
            .args(["-ExecutionPolicy", "Bypass", "-NoProfile", "-Command"])
            .arg(command)
            .output()
            .map_err(|source| OcrMatchError::CommandSpawn {
                program: self.program.clone(),
                source,
            })?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            status: output.status.code().unwrap_or(-1),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_tracks_status() {
        let ok = CommandOutput {
            status: 0,
            ..Default::default()
        };
        assert!(ok.success());

        let failed = CommandOutput {
            status: 2,
            ..Default::default()
        };
        assert!(!failed.success());
    }

    #[test]
    fn test_missing_interpreter_is_a_spawn_error() {
        let runner = PowerShellRunner::with_program("definitely-not-a-real-shell");
        let err = runner.run("Write-Output hi").expect_err("spawn should fail");
        assert!(matches!(err, OcrMatchError::CommandSpawn { .. }));
    }
}
