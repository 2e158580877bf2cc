//! Startup sequence: header, gates, menu.

use crate::config::StarterConfig;
use crate::menu::Dispatcher;
use crate::requirements::EnvironmentChecker;
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

pub const BANNER: &str = "Web App Starter";

/// Exit code when the user quits or input ends.
pub const EXIT_OK: i32 = 0;
/// Exit code when a prerequisite or dependency gate fails.
pub const EXIT_GATE_FAILED: i32 = 1;

/// The launcher for one project.
pub struct App {
    config: StarterConfig,
}

impl App {
    pub fn new(config: StarterConfig) -> Self {
        Self { config }
    }

    /// Run the gates and then the menu, returning the process exit code.
    ///
    /// The menu is never shown unless both gates pass.
    pub fn run(&self, runner: &mut dyn CommandRunner, ui: &mut dyn UserInterface) -> i32 {
        ui.show_header(BANNER);

        let checker = EnvironmentChecker::new(&self.config);
        if !checker.check_prerequisites(runner, ui) {
            ui.error("Prerequisite check failed");
            return EXIT_GATE_FAILED;
        }
        if !checker.check_dependencies(runner, ui) {
            ui.error("Dependency check failed");
            return EXIT_GATE_FAILED;
        }
        ui.success("System is ready");

        tracing::debug!("Entering menu for {}", self.config.project_dir().display());
        Dispatcher::new(&self.config).run(runner, ui);
        EXIT_OK
    }
}
