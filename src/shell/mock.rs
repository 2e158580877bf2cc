//! Mock command runner for testing.
//!
//! `MockRunner` implements [`CommandRunner`] without launching anything. It
//! records every command it is asked to probe or run, and answers with
//! pre-configured results.
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use webapp_starter::shell::{CommandRunner, CommandSpec, MockRunner, RunOutcome};
//!
//! let mut runner = MockRunner::new();
//! runner.queue_run_outcome(RunOutcome::Interrupted);
//!
//! let spec = CommandSpec::script("npm", "dev");
//! let outcome = runner.run(&spec, Path::new(".")).unwrap();
//!
//! assert_eq!(outcome, RunOutcome::Interrupted);
//! assert_eq!(runner.run_lines(), vec!["npm run dev".to_string()]);
//! ```

use std::collections::{HashMap, VecDeque};
use std::path::Path;

use crate::error::{Result, StarterError};

use super::command::{CommandResult, CommandRunner, CommandSpec, RunOutcome};

/// Configured answer for a probed program.
#[derive(Debug, Clone)]
enum ProbeResponse {
    Result(CommandResult),
    NotFound,
}

/// Command runner that records invocations instead of spawning processes.
///
/// Probes of unconfigured programs succeed with empty output. Runs pop from
/// the outcome queue and default to [`RunOutcome::Completed`] once it is
/// empty.
#[derive(Debug, Default)]
pub struct MockRunner {
    probe_responses: HashMap<String, ProbeResponse>,
    run_outcomes: VecDeque<RunOutcome>,
    probed: Vec<CommandSpec>,
    ran: Vec<CommandSpec>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer probes of `program` with a successful result printing `stdout`.
    pub fn set_probe_output(&mut self, program: &str, stdout: &str) {
        self.probe_responses.insert(
            program.to_string(),
            ProbeResponse::Result(CommandResult::success(stdout)),
        );
    }

    /// Answer probes of `program` with a non-zero exit.
    pub fn set_probe_failure(&mut self, program: &str, exit_code: i32) {
        self.probe_responses.insert(
            program.to_string(),
            ProbeResponse::Result(CommandResult::failure(Some(exit_code))),
        );
    }

    /// Answer probes of `program` with a non-zero exit that wrote `stderr`.
    pub fn set_probe_stderr(&mut self, program: &str, exit_code: i32, stderr: &str) {
        let mut result = CommandResult::failure(Some(exit_code));
        result.stderr = stderr.to_string();
        self.probe_responses
            .insert(program.to_string(), ProbeResponse::Result(result));
    }

    /// Pretend `program` is not on PATH.
    pub fn set_missing(&mut self, program: &str) {
        self.probe_responses
            .insert(program.to_string(), ProbeResponse::NotFound);
    }

    /// Queue the outcome of the next `run` call.
    pub fn queue_run_outcome(&mut self, outcome: RunOutcome) {
        self.run_outcomes.push_back(outcome);
    }

    /// Commands passed to `probe`, in order.
    pub fn probed(&self) -> &[CommandSpec] {
        &self.probed
    }

    /// Commands passed to `run`, in order.
    pub fn ran(&self) -> &[CommandSpec] {
        &self.ran
    }

    /// Commands passed to `run`, rendered as command lines.
    pub fn run_lines(&self) -> Vec<String> {
        self.ran.iter().map(|spec| spec.to_string()).collect()
    }
}

impl CommandRunner for MockRunner {
    fn probe(&mut self, spec: &CommandSpec, _cwd: &Path) -> Result<CommandResult> {
        self.probed.push(spec.clone());
        match self.probe_responses.get(&spec.program) {
            Some(ProbeResponse::Result(result)) => Ok(result.clone()),
            Some(ProbeResponse::NotFound) => Err(StarterError::MissingExecutable {
                program: spec.program.clone(),
                install_hint: None,
            }),
            None => Ok(CommandResult::success("")),
        }
    }

    fn run(&mut self, spec: &CommandSpec, _cwd: &Path) -> Result<RunOutcome> {
        self.ran.push(spec.clone());
        Ok(self.run_outcomes.pop_front().unwrap_or(RunOutcome::Completed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_probe_succeeds() {
        let mut runner = MockRunner::new();
        let result = runner
            .probe(&CommandSpec::version_probe("node"), Path::new("."))
            .unwrap();
        assert!(result.success);
        assert_eq!(runner.probed().len(), 1);
    }

    #[test]
    fn missing_program_errors() {
        let mut runner = MockRunner::new();
        runner.set_missing("npm");
        let result = runner.probe(&CommandSpec::version_probe("npm"), Path::new("."));
        assert!(matches!(result, Err(StarterError::MissingExecutable { .. })));
    }

    #[test]
    fn run_outcomes_are_consumed_in_order() {
        let mut runner = MockRunner::new();
        runner.queue_run_outcome(RunOutcome::Failed { code: Some(1) });
        let spec = CommandSpec::script("npm", "lint");

        assert_eq!(
            runner.run(&spec, Path::new(".")).unwrap(),
            RunOutcome::Failed { code: Some(1) }
        );
        assert_eq!(
            runner.run(&spec, Path::new(".")).unwrap(),
            RunOutcome::Completed
        );
        assert_eq!(runner.ran().len(), 2);
    }
}
