//! Startup gates for the target project.
//!
//! [`EnvironmentChecker`] runs two gates before the menu opens:
//!
//! 1. [`check_prerequisites`](EnvironmentChecker::check_prerequisites):
//!    project directory, runtime, package manager, manifest, environment
//!    file. Strictly in that order, stopping at the first failure.
//! 2. [`check_dependencies`](EnvironmentChecker::check_dependencies): installs
//!    dependencies when the install directory is missing. An existing
//!    directory counts as installed; it is never compared against the
//!    manifest.

use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;

use crate::config::StarterConfig;
use crate::error::{Result, StarterError};
use crate::shell::{CommandRunner, CommandSpec, RunOutcome};
use crate::ui::UserInterface;

static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"v?(\d+\.\d+(?:\.\d+)?(?:[-+][0-9A-Za-z.-]+)?)").expect("version regex is valid")
});

/// Pull a version number out of `--version` output.
///
/// Falls back to the first non-empty line when nothing looks like a version.
pub fn extract_version(output: &str) -> Option<String> {
    if let Some(caps) = VERSION_REGEX.captures(output) {
        return Some(caps[1].to_string());
    }
    output
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(String::from)
}

/// How the dependency gate was satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyStatus {
    /// The install directory was already there.
    AlreadyInstalled,
    /// The package manager's install command ran and succeeded.
    Installed,
}

/// Runs the prerequisite and dependency gates.
pub struct EnvironmentChecker<'a> {
    config: &'a StarterConfig,
}

impl<'a> EnvironmentChecker<'a> {
    pub fn new(config: &'a StarterConfig) -> Self {
        Self { config }
    }

    /// Run every prerequisite check, reporting the first failure.
    ///
    /// Returns `false` on failure; the error and any remediation hint have
    /// already been shown.
    pub fn check_prerequisites(
        &self,
        runner: &mut dyn CommandRunner,
        ui: &mut dyn UserInterface,
    ) -> bool {
        ui.info("Checking prerequisites...");
        match self.verify_prerequisites(runner, ui) {
            Ok(()) => true,
            Err(e) => {
                report_failure(ui, &e);
                false
            }
        }
    }

    /// Install dependencies if needed, reporting a failure.
    pub fn check_dependencies(
        &self,
        runner: &mut dyn CommandRunner,
        ui: &mut dyn UserInterface,
    ) -> bool {
        match self.ensure_dependencies(runner, ui) {
            Ok(_) => true,
            Err(e) => {
                report_failure(ui, &e);
                false
            }
        }
    }

    /// Prerequisite checks as a `Result`, short-circuiting on the first error.
    pub fn verify_prerequisites(
        &self,
        runner: &mut dyn CommandRunner,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let project_dir = self.config.project_dir();
        if !project_dir.is_dir() {
            return Err(StarterError::MissingDirectory {
                path: project_dir.to_path_buf(),
            });
        }
        ui.success(&format!("Project directory: {}", project_dir.display()));

        let install_hint = format!(
            "Install {} from {}",
            self.config.runtime, self.config.runtime_install_url
        );
        self.probe_version(&self.config.runtime, Some(install_hint), runner, ui)?;
        self.probe_version(&self.config.package_manager, None, runner, ui)?;

        self.verify_file(
            &self.config.manifest,
            self.config.manifest_path(),
            None,
            ui,
        )?;
        let env_hint = format!(
            "Create {} with the project's service credentials",
            self.config.env_file
        );
        self.verify_file(
            &self.config.env_file,
            self.config.env_path(),
            Some(env_hint),
            ui,
        )?;

        tracing::debug!("All prerequisites satisfied for {}", project_dir.display());
        Ok(())
    }

    /// Dependency gate as a `Result`.
    pub fn ensure_dependencies(
        &self,
        runner: &mut dyn CommandRunner,
        ui: &mut dyn UserInterface,
    ) -> Result<DependencyStatus> {
        let install_path = self.config.install_path();
        if install_path.exists() {
            ui.success("Dependencies are ready");
            return Ok(DependencyStatus::AlreadyInstalled);
        }

        ui.warning(&format!("{} does not exist", self.config.install_dir));
        ui.info("Installing dependencies...");

        let spec = CommandSpec::new(&self.config.package_manager, ["install"]);
        tracing::debug!("Running `{}` in {}", spec, self.config.project_dir.display());

        let outcome = runner
            .run(&spec, self.config.project_dir())
            .map_err(|e| StarterError::DependencyInstallFailure {
                message: e.to_string(),
            })?;

        match outcome {
            RunOutcome::Completed => {
                ui.success("Dependencies installed");
                Ok(DependencyStatus::Installed)
            }
            RunOutcome::Failed { code } => Err(StarterError::DependencyInstallFailure {
                message: StarterError::CommandFailed {
                    command: spec.to_string(),
                    code,
                }
                .to_string(),
            }),
            RunOutcome::Interrupted => Err(StarterError::DependencyInstallFailure {
                message: format!("`{}` was interrupted", spec),
            }),
        }
    }

    fn probe_version(
        &self,
        program: &str,
        install_hint: Option<String>,
        runner: &mut dyn CommandRunner,
        ui: &mut dyn UserInterface,
    ) -> Result<String> {
        let spec = CommandSpec::version_probe(program);
        let mut spinner = ui.start_spinner(&format!("Checking {}...", program));

        let result = match runner.probe(&spec, self.config.project_dir()) {
            Ok(result) => result,
            Err(StarterError::MissingExecutable { program, .. }) => {
                spinner.clear();
                return Err(StarterError::MissingExecutable {
                    program,
                    install_hint,
                });
            }
            Err(e) => {
                spinner.clear();
                return Err(e);
            }
        };

        if !result.success {
            spinner.clear();
            tracing::debug!("`{}` stderr: {}", spec, result.stderr.trim());
            let detail = result
                .stderr
                .lines()
                .map(str::trim)
                .find(|line| !line.is_empty())
                .map(String::from);
            return Err(StarterError::ExecutableMisbehaving {
                program: program.to_string(),
                code: result.exit_code,
                detail,
            });
        }

        let version = extract_version(&result.stdout).unwrap_or_else(|| "unknown".to_string());
        spinner.finish_success(&format!("{} version: {}", program, version));
        Ok(version)
    }

    fn verify_file(
        &self,
        name: &str,
        path: PathBuf,
        hint: Option<String>,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        if !path.is_file() {
            return Err(StarterError::MissingFile {
                label: name.to_string(),
                path,
                hint,
            });
        }
        ui.success(&format!("{} found", name));
        Ok(())
    }
}

fn report_failure(ui: &mut dyn UserInterface, err: &StarterError) {
    tracing::debug!("Startup check failed: {:?}", err);
    ui.error(&err.to_string());
    if let Some(hint) = err.hint() {
        ui.show_hint(&hint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::MockRunner;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn complete_project() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), r#"{"name": "app"}"#).unwrap();
        fs::write(temp.path().join(".env.local"), "SUPABASE_URL=x\n").unwrap();
        temp
    }

    fn healthy_runner() -> MockRunner {
        let mut runner = MockRunner::new();
        runner.set_probe_output("node", "v20.11.0\n");
        runner.set_probe_output("npm", "10.2.4\n");
        runner
    }

    #[test]
    fn extract_version_strips_leading_v() {
        assert_eq!(extract_version("v20.11.0\n").as_deref(), Some("20.11.0"));
    }

    #[test]
    fn extract_version_keeps_prerelease_suffix() {
        assert_eq!(
            extract_version("11.0.0-pre.1\n").as_deref(),
            Some("11.0.0-pre.1")
        );
    }

    #[test]
    fn extract_version_falls_back_to_first_line() {
        assert_eq!(
            extract_version("\n  nightly build\n").as_deref(),
            Some("nightly build")
        );
        assert!(extract_version("   \n").is_none());
    }

    #[test]
    fn prerequisites_pass_for_complete_project() {
        let temp = complete_project();
        let config = StarterConfig::for_project(temp.path());
        let mut runner = healthy_runner();
        let mut ui = MockUI::new();

        assert!(EnvironmentChecker::new(&config).check_prerequisites(&mut runner, &mut ui));
        assert_eq!(runner.probed().len(), 2);
        assert!(ui.has_success("package.json found"));
        assert!(ui.has_success(".env.local found"));
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn configured_env_file_is_checked_at_its_config_path() {
        let temp = complete_project();
        fs::create_dir(temp.path().join("config")).unwrap();
        let mut config = StarterConfig::for_project(temp.path());
        config.env_file = "config/.env.local".to_string();
        let mut runner = healthy_runner();
        let mut ui = MockUI::new();

        let result = EnvironmentChecker::new(&config).verify_prerequisites(&mut runner, &mut ui);
        match result {
            Err(StarterError::MissingFile { path, .. }) => assert_eq!(path, config.env_path()),
            other => panic!("expected missing env file, got {:?}", other),
        }

        fs::write(config.env_path(), "").unwrap();
        let mut ui = MockUI::new();
        assert!(EnvironmentChecker::new(&config).check_prerequisites(&mut runner, &mut ui));
        assert!(ui.has_success("config/.env.local found"));
    }

    #[test]
    fn probe_reports_extracted_version() {
        let temp = complete_project();
        let config = StarterConfig::for_project(temp.path());
        let mut runner = healthy_runner();
        let mut ui = MockUI::new();

        let checker = EnvironmentChecker::new(&config);
        let version = checker
            .probe_version("node", None, &mut runner, &mut ui)
            .unwrap();
        assert_eq!(version, "20.11.0");
        assert_eq!(ui.spinners(), &["Checking node...".to_string()]);
    }

    #[test]
    fn missing_directory_fails_before_any_probe() {
        let temp = TempDir::new().unwrap();
        let config = StarterConfig::for_project(temp.path().join("missing"));
        let mut runner = healthy_runner();
        let mut ui = MockUI::new();

        assert!(!EnvironmentChecker::new(&config).check_prerequisites(&mut runner, &mut ui));
        assert!(runner.probed().is_empty());
        assert!(runner.ran().is_empty());
        assert!(ui.has_error("Project directory not found"));
    }

    #[test]
    fn missing_runtime_shows_install_url() {
        let temp = complete_project();
        let config = StarterConfig::for_project(temp.path());
        let mut runner = MockRunner::new();
        runner.set_missing("node");
        let mut ui = MockUI::new();

        assert!(!EnvironmentChecker::new(&config).check_prerequisites(&mut runner, &mut ui));
        assert!(ui.has_error("node is not installed"));
        assert!(ui.has_hint("https://nodejs.org"));
        // npm is never probed after node fails
        assert_eq!(runner.probed().len(), 1);
    }

    #[test]
    fn misbehaving_package_manager_fails() {
        let temp = complete_project();
        let config = StarterConfig::for_project(temp.path());
        let mut runner = MockRunner::new();
        runner.set_probe_output("node", "v20.11.0");
        runner.set_probe_failure("npm", 1);
        let mut ui = MockUI::new();

        let result = EnvironmentChecker::new(&config).verify_prerequisites(&mut runner, &mut ui);
        assert!(matches!(
            result,
            Err(StarterError::ExecutableMisbehaving { ref program, code: Some(1), .. }) if program == "npm"
        ));
    }

    #[test]
    fn misbehaving_probe_shows_first_stderr_line() {
        let temp = complete_project();
        let config = StarterConfig::for_project(temp.path());
        let mut runner = MockRunner::new();
        runner.set_probe_output("node", "v20.11.0");
        runner.set_probe_stderr("npm", 1, "\nnpm ERR! broken install\nat line 2\n");
        let mut ui = MockUI::new();

        assert!(!EnvironmentChecker::new(&config).check_prerequisites(&mut runner, &mut ui));
        assert!(ui.has_error("npm is not working correctly (exit code 1)"));
        assert_eq!(ui.hints(), &["npm ERR! broken install".to_string()]);
    }

    #[test]
    fn missing_manifest_fails() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".env.local"), "").unwrap();
        let config = StarterConfig::for_project(temp.path());
        let mut runner = healthy_runner();
        let mut ui = MockUI::new();

        assert!(!EnvironmentChecker::new(&config).check_prerequisites(&mut runner, &mut ui));
        assert!(ui.has_error("package.json not found"));
    }

    #[test]
    fn missing_env_file_fails_after_earlier_checks_pass() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), "{}").unwrap();
        let config = StarterConfig::for_project(temp.path());
        let mut runner = healthy_runner();
        let mut ui = MockUI::new();

        assert!(!EnvironmentChecker::new(&config).check_prerequisites(&mut runner, &mut ui));

        assert!(ui.has_success("Project directory"));
        let probed: Vec<String> = runner.probed().iter().map(|s| s.to_string()).collect();
        assert_eq!(probed, vec!["node --version", "npm --version"]);
        assert!(ui.has_success("package.json found"));
        assert!(ui.has_error(".env.local not found"));
        assert!(ui.has_hint("Create .env.local"));
    }

    #[test]
    fn existing_install_dir_skips_install() {
        let temp = complete_project();
        fs::create_dir(temp.path().join("node_modules")).unwrap();
        let config = StarterConfig::for_project(temp.path());
        let mut runner = MockRunner::new();
        let mut ui = MockUI::new();

        let checker = EnvironmentChecker::new(&config);
        assert!(checker.check_dependencies(&mut runner, &mut ui));
        assert!(runner.ran().is_empty());
        assert!(runner.probed().is_empty());
    }

    #[test]
    fn missing_install_dir_runs_install() {
        let temp = complete_project();
        let config = StarterConfig::for_project(temp.path());
        let mut runner = MockRunner::new();
        let mut ui = MockUI::new();

        let status = EnvironmentChecker::new(&config)
            .ensure_dependencies(&mut runner, &mut ui)
            .unwrap();
        assert_eq!(status, DependencyStatus::Installed);
        assert_eq!(runner.run_lines(), vec!["npm install".to_string()]);
        assert!(ui.has_warning("node_modules does not exist"));
    }

    #[test]
    fn failed_install_fails_gate() {
        let temp = complete_project();
        let config = StarterConfig::for_project(temp.path());
        let mut runner = MockRunner::new();
        runner.queue_run_outcome(RunOutcome::Failed { code: Some(1) });
        let mut ui = MockUI::new();

        assert!(!EnvironmentChecker::new(&config).check_dependencies(&mut runner, &mut ui));
        assert!(ui.has_error("Dependency install failed"));
    }

    #[test]
    fn interrupted_install_fails_gate() {
        let temp = complete_project();
        let config = StarterConfig::for_project(temp.path());
        let mut runner = MockRunner::new();
        runner.queue_run_outcome(RunOutcome::Interrupted);
        let mut ui = MockUI::new();

        let result = EnvironmentChecker::new(&config).ensure_dependencies(&mut runner, &mut ui);
        assert!(matches!(
            result,
            Err(StarterError::DependencyInstallFailure { .. })
        ));
    }

    #[test]
    fn configured_package_manager_is_used_for_install() {
        let temp = complete_project();
        let mut config = StarterConfig::for_project(temp.path());
        config.package_manager = "pnpm".to_string();
        let mut runner = MockRunner::new();
        let mut ui = MockUI::new();

        EnvironmentChecker::new(&config)
            .ensure_dependencies(&mut runner, &mut ui)
            .unwrap();
        assert_eq!(runner.run_lines(), vec!["pnpm install".to_string()]);
    }
}
