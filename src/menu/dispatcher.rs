//! The interactive menu loop.
//!
//! The loop is a small state machine:
//!
//! ```text
//! AwaitingChoice ──(command item)──▶ ExecutingCommand ──▶ AwaitingChoice
//!       │        ──(info item)─────▶ ShowingInfo ───────▶ AwaitingChoice
//!       └────────(quit / end of input / Ctrl+C)─────────▶ Terminated
//! ```
//!
//! Only the user ends the loop, by quitting or by Ctrl+C at a prompt. Failed
//! commands, interrupted commands and unreadable manifests are reported and
//! the menu comes back.

use crate::config::StarterConfig;
use crate::error::StarterError;
use crate::shell::{CommandRunner, RunOutcome};
use crate::ui::UserInterface;

use super::choice::{LintVariant, MenuChoice, TestVariant};
use super::info::show_project_info;
use super::plan::{CommandPlan, Selection};

pub const MENU_TITLE: &str = "Choose a startup mode:";
pub const CHOICE_PROMPT: &str = "Enter your choice (1-9)";
const CONTINUE_PROMPT: &str = "Press Enter to continue...";
pub const FAREWELL: &str = "Goodbye!";

/// Where the menu loop is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchState {
    AwaitingChoice,
    ExecutingCommand(CommandPlan),
    ShowingInfo,
    Terminated,
}

/// How a command plan ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanOutcome {
    Completed,
    Failed,
    Interrupted,
}

/// Runs the menu loop against a project.
pub struct Dispatcher<'a> {
    config: &'a StarterConfig,
}

impl<'a> Dispatcher<'a> {
    pub fn new(config: &'a StarterConfig) -> Self {
        Self { config }
    }

    /// Run the loop until the user quits or input ends.
    pub fn run(&self, runner: &mut dyn CommandRunner, ui: &mut dyn UserInterface) {
        let mut state = DispatchState::AwaitingChoice;
        while state != DispatchState::Terminated {
            state = self.step(state, runner, ui);
        }
        tracing::debug!("Menu loop terminated");
    }

    /// Perform one transition.
    pub fn step(
        &self,
        state: DispatchState,
        runner: &mut dyn CommandRunner,
        ui: &mut dyn UserInterface,
    ) -> DispatchState {
        match state {
            DispatchState::AwaitingChoice => self.await_choice(ui),
            DispatchState::ExecutingCommand(plan) => {
                self.execute_plan(&plan, runner, ui);
                DispatchState::AwaitingChoice
            }
            DispatchState::ShowingInfo => self.show_info(ui),
            DispatchState::Terminated => DispatchState::Terminated,
        }
    }

    fn await_choice(&self, ui: &mut dyn UserInterface) -> DispatchState {
        ui.show_menu(MENU_TITLE, &MenuChoice::entries());

        let input = match ui.read_line(CHOICE_PROMPT) {
            Ok(Some(input)) => input,
            Ok(None) => {
                tracing::debug!("End of input at menu prompt");
                return farewell(ui);
            }
            Err(StarterError::InputInterrupted) => {
                tracing::debug!("Interrupted at menu prompt");
                return farewell(ui);
            }
            Err(e) => {
                ui.error(&format!("Could not read input: {}", e));
                return DispatchState::Terminated;
            }
        };

        let Some(choice) = MenuChoice::parse(&input) else {
            tracing::debug!("Rejected menu input {:?}", input);
            ui.error("Invalid choice! Please choose from 1-9.");
            return DispatchState::AwaitingChoice;
        };

        let Some(selection) = self.resolve(choice, ui) else {
            tracing::debug!("Interrupted at sub-prompt");
            return farewell(ui);
        };

        match selection {
            Selection::Quit => farewell(ui),
            Selection::ProjectInfo => DispatchState::ShowingInfo,
            selection => match CommandPlan::for_selection(selection, &self.config.package_manager)
            {
                Some(plan) => DispatchState::ExecutingCommand(plan),
                None => DispatchState::AwaitingChoice,
            },
        }
    }

    /// Ask the sub-question for items that have one.
    ///
    /// Returns `None` when the user pressed Ctrl+C at the sub-prompt.
    fn resolve(&self, choice: MenuChoice, ui: &mut dyn UserInterface) -> Option<Selection> {
        let selection = match choice {
            MenuChoice::Tests => {
                ui.info("Run tests");
                let answer = read_sub_choice(TestVariant::PROMPT, ui)?;
                Selection::Tests(TestVariant::parse(&answer))
            }
            MenuChoice::Lint => {
                ui.info("Check and fix code");
                let answer = read_sub_choice(LintVariant::PROMPT, ui)?;
                Selection::Lint(LintVariant::parse(&answer))
            }
            other => Selection::from_choice(other),
        };
        Some(selection)
    }

    /// Run each step of a plan, stopping at the first that does not complete.
    pub fn execute_plan(
        &self,
        plan: &CommandPlan,
        runner: &mut dyn CommandRunner,
        ui: &mut dyn UserInterface,
    ) -> PlanOutcome {
        ui.info(&plan.title);
        for note in &plan.notes {
            ui.show_hint(note);
        }
        ui.info(&format!("{}...", plan.description));
        ui.show_hint("Press Ctrl+C to stop");

        for step in &plan.steps {
            tracing::debug!("Dispatching `{}`", step);
            match runner.run(step, self.config.project_dir()) {
                Ok(RunOutcome::Completed) => {}
                Ok(RunOutcome::Failed { code }) => {
                    let err = StarterError::CommandFailed {
                        command: step.to_string(),
                        code,
                    };
                    ui.error(&err.to_string());
                    return PlanOutcome::Failed;
                }
                Ok(RunOutcome::Interrupted) => {
                    let err = StarterError::Interrupted {
                        command: step.to_string(),
                    };
                    ui.warning(&err.to_string());
                    return PlanOutcome::Interrupted;
                }
                Err(e) => {
                    ui.error(&e.to_string());
                    if let Some(hint) = e.hint() {
                        ui.show_hint(&hint);
                    }
                    return PlanOutcome::Failed;
                }
            }
        }

        ui.success(&format!("{} finished", plan.title));
        PlanOutcome::Completed
    }

    fn show_info(&self, ui: &mut dyn UserInterface) -> DispatchState {
        if let Err(e) = show_project_info(self.config, ui) {
            ui.error(&e.to_string());
        }
        if ui.is_interactive() {
            if let Err(StarterError::InputInterrupted) = ui.read_line(CONTINUE_PROMPT) {
                return farewell(ui);
            }
        }
        DispatchState::AwaitingChoice
    }
}

/// Unreadable or missing input selects the fallback variant; Ctrl+C is `None`.
fn read_sub_choice(prompt: &str, ui: &mut dyn UserInterface) -> Option<String> {
    match ui.read_line(prompt) {
        Ok(answer) => Some(answer.unwrap_or_default()),
        Err(StarterError::InputInterrupted) => None,
        Err(e) => {
            tracing::debug!("Sub-prompt read failed: {}", e);
            Some(String::new())
        }
    }
}

fn farewell(ui: &mut dyn UserInterface) -> DispatchState {
    ui.message(FAREWELL);
    DispatchState::Terminated
}
