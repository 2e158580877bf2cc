//! External command execution.
//!
//! Commands are described by a [`CommandSpec`] (program plus argument list)
//! and launched directly, never through a shell string.

use crate::error::{Result, StarterError};
use std::fmt;
use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use super::interrupt::InterruptGuard;

/// A program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// `<program> --version`
    pub fn version_probe(program: &str) -> Self {
        Self::new(program, ["--version"])
    }

    /// `<package_manager> run <script>`
    pub fn script(package_manager: &str, script: &str) -> Self {
        Self::new(package_manager, ["run", script])
    }

    fn to_command(&self, cwd: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).current_dir(cwd);
        cmd
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Result of a command run with captured output.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            exit_code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
            duration: Duration::ZERO,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>) -> Self {
        Self {
            exit_code,
            stdout: String::new(),
            stderr: String::new(),
            duration: Duration::ZERO,
            success: false,
        }
    }
}

/// How a command attached to the terminal ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Exited with status 0.
    Completed,
    /// Exited non-zero, or was killed by a signal other than SIGINT.
    Failed { code: Option<i32> },
    /// Stopped with Ctrl+C.
    Interrupted,
}

/// Launches external commands.
///
/// The real implementation is [`SystemRunner`]; tests use
/// [`MockRunner`](super::MockRunner).
pub trait CommandRunner {
    /// Run a command with stdout and stderr captured.
    ///
    /// Returns `MissingExecutable` when the program is not on PATH.
    fn probe(&mut self, spec: &CommandSpec, cwd: &Path) -> Result<CommandResult>;

    /// Run a command attached to the terminal and wait for it.
    ///
    /// Ctrl+C while the command runs stops the command, not the caller.
    fn run(&mut self, spec: &CommandSpec, cwd: &Path) -> Result<RunOutcome>;
}

/// Runs commands as child processes of this one.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

fn spawn_error(spec: &CommandSpec, err: std::io::Error) -> StarterError {
    if err.kind() == ErrorKind::NotFound {
        StarterError::MissingExecutable {
            program: spec.program.clone(),
            install_hint: None,
        }
    } else {
        StarterError::Io(err)
    }
}

#[cfg(unix)]
fn killed_by_sigint(status: &ExitStatus) -> bool {
    use std::os::unix::process::ExitStatusExt;
    status.signal() == Some(libc::SIGINT)
}

#[cfg(not(unix))]
fn killed_by_sigint(_status: &ExitStatus) -> bool {
    false
}

impl CommandRunner for SystemRunner {
    fn probe(&mut self, spec: &CommandSpec, cwd: &Path) -> Result<CommandResult> {
        let start = Instant::now();
        let output = spec
            .to_command(cwd)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| spawn_error(spec, e))?;

        let result = CommandResult {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            duration: start.elapsed(),
            success: output.status.success(),
        };
        tracing::debug!(
            "Probe `{}` exited with {:?} in {:?}",
            spec,
            result.exit_code,
            result.duration
        );
        Ok(result)
    }

    fn run(&mut self, spec: &CommandSpec, cwd: &Path) -> Result<RunOutcome> {
        let guard = InterruptGuard::install();
        let start = Instant::now();

        let mut child = spec
            .to_command(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| spawn_error(spec, e))?;

        let status = child.wait()?;
        tracing::debug!("`{}` exited with {} after {:?}", spec, status, start.elapsed());

        if status.success() {
            Ok(RunOutcome::Completed)
        } else if guard.interrupted() || killed_by_sigint(&status) {
            Ok(RunOutcome::Interrupted)
        } else {
            Ok(RunOutcome::Failed {
                code: status.code(),
            })
        }
    }
}
