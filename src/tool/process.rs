//! Process execution.

use super::{ProcessArguments, ToolSettings};
use crate::error::{Result, WarpError};
use std::path::Path;
use std::process::{Command, Stdio};

/// Outcome of a finished process.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code, or -1 when the process was terminated by a signal
    pub exit_code: i32,
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
}

impl ProcessOutput {
    /// Returns true when the process exited with code 0.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Spawns a program and waits for it to finish.
pub trait ProcessRunner {
    /// Runs `program` to completion with the given arguments.
    ///
    /// Only a failure to start the process is an error; any exit code is
    /// reported through [`ProcessOutput`].
    fn run(
        &self,
        program: &Path,
        arguments: &ProcessArguments,
        settings: &ToolSettings,
    ) -> Result<ProcessOutput>;
}

/// [`ProcessRunner`] backed by [`std::process::Command`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemProcessRunner;

impl ProcessRunner for SystemProcessRunner {
    fn run(
        &self,
        program: &Path,
        arguments: &ProcessArguments,
        settings: &ToolSettings,
    ) -> Result<ProcessOutput> {
        let mut command = Command::new(program);
        command
            .args(arguments.to_args())
            .envs(&settings.environment_variables)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if let Some(dir) = &settings.working_directory {
            command.current_dir(dir);
        }

        let output = command.output().map_err(|error| WarpError::CommandFailed {
            command: program.display().to_string(),
            error,
        })?;

        let result = ProcessOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        for line in result.stdout.lines() {
            log::debug!("{}", line);
        }
        for line in result.stderr.lines() {
            if result.success() {
                log::debug!("{}", line);
            } else {
                log::warn!("{}", line);
            }
        }

        Ok(result)
    }
}
