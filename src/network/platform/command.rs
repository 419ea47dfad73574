//! External process execution for interface-status utilities.

use std::io;
use std::process::Command;

use crate::network::ProbeError;

/// Captured result of running an external command to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Whether the process exited with a zero status.
    pub success: bool,
    /// Exit code, if the process exited normally.
    pub status: Option<i32>,
    /// Standard output, lossily decoded as UTF-8.
    pub stdout: String,
    /// Standard error, lossily decoded as UTF-8.
    pub stderr: String,
}

impl CommandOutput {
    /// Output of a process that exited with status 0.
    #[must_use]
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            status: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Output of a process that exited with a non-zero status.
    #[must_use]
    pub fn failure(status: i32, stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            status: Some(status),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }
}

/// Runs an external program synchronously and captures its output.
///
/// Abstracted so that probes can be tested without the real utility.
pub trait CommandRunner: Send + Sync {
    /// Runs `program` with `args`, blocking until it exits.
    ///
    /// A non-zero exit is **not** an error at this level; it is reported
    /// through [`CommandOutput::success`].
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::NotFound`] if the program cannot be located,
    /// or [`ProbeError::Spawn`] if it cannot be started.
    fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput, ProbeError>;
}

/// Production runner backed by [`std::process::Command`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput, ProbeError> {
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => ProbeError::NotFound {
                    program: program.to_string(),
                },
                _ => ProbeError::Spawn {
                    program: program.to_string(),
                    source: e,
                },
            })?;

        Ok(CommandOutput {
            success: output.status.success(),
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_maps_to_not_found() {
        let result = SystemRunner.run("ipnotify-definitely-missing-tool", &[]);

        assert!(matches!(
            result,
            Err(ProbeError::NotFound { ref program }) if program == "ipnotify-definitely-missing-tool"
        ));
    }

    #[cfg(unix)]
    #[test]
    fn captures_stdout_of_successful_command() {
        let output = SystemRunner
            .run("echo", &["inet 203.0.113.7".to_string()])
            .unwrap();

        assert!(output.success);
        assert_eq!(output.status, Some(0));
        assert_eq!(output.stdout.trim(), "inet 203.0.113.7");
    }

    #[cfg(unix)]
    #[test]
    fn captures_stderr_and_status_of_failing_command() {
        let output = SystemRunner
            .run(
                "sh",
                &["-c".to_string(), "echo 'Device not found' >&2; exit 1".to_string()],
            )
            .unwrap();

        assert!(!output.success);
        assert_eq!(output.status, Some(1));
        assert_eq!(output.stderr.trim(), "Device not found");
    }
}
