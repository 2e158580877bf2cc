//! The table from menu selections to commands.

use crate::shell::CommandSpec;

use super::choice::{LintVariant, MenuChoice, TestVariant};

pub const APP_URL: &str = "http://localhost:5173";
pub const DATABASE_DASHBOARD_URL: &str = "http://localhost:54323";
pub const SHOWCASE_URL: &str = "http://localhost:6006";

/// A fully resolved menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    DevServer,
    FullDev,
    BuildPreview,
    Database,
    Tests(TestVariant),
    Showcase,
    Lint(LintVariant),
    ProjectInfo,
    Quit,
}

/// What to run for a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandPlan {
    /// Heading shown before anything runs.
    pub title: String,
    /// Status line shown right before the first command.
    pub description: String,
    /// Extra lines such as the URL the service will listen on.
    pub notes: Vec<String>,
    /// Run in order; a step that does not complete stops the plan.
    pub steps: Vec<CommandSpec>,
}

impl CommandPlan {
    fn single(
        title: &str,
        description: &str,
        notes: &[String],
        package_manager: &str,
        script: &str,
    ) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            notes: notes.to_vec(),
            steps: vec![CommandSpec::script(package_manager, script)],
        }
    }

    /// The plan for a selection, or `None` for items that run nothing.
    pub fn for_selection(selection: Selection, package_manager: &str) -> Option<Self> {
        let pm = package_manager;
        let plan = match selection {
            Selection::DevServer => Self::single(
                "Start web app (development mode)",
                "Starting development server",
                &[format!("App will run at: {}", APP_URL)],
                pm,
                "dev",
            ),
            Selection::FullDev => Self::single(
                "Start web app + database",
                "Starting full development environment",
                &[
                    format!("App: {}", APP_URL),
                    format!("Database: {}", DATABASE_DASHBOARD_URL),
                ],
                pm,
                "dev:full",
            ),
            Selection::BuildPreview => Self {
                title: "Build and preview".to_string(),
                description: "Building and starting preview".to_string(),
                notes: Vec::new(),
                steps: vec![
                    CommandSpec::script(pm, "build"),
                    CommandSpec::script(pm, "preview"),
                ],
            },
            Selection::Database => Self::single(
                "Start database",
                "Starting Supabase database",
                &[format!("Database dashboard: {}", DATABASE_DASHBOARD_URL)],
                pm,
                "db:start",
            ),
            Selection::Tests(variant) => Self::single(
                "Run tests",
                variant.description(),
                &[],
                pm,
                variant.script(),
            ),
            Selection::Showcase => Self::single(
                "Start Storybook",
                "Starting Storybook",
                &[format!("Storybook will run at: {}", SHOWCASE_URL)],
                pm,
                "storybook",
            ),
            Selection::Lint(variant) => Self::single(
                "Check and fix code",
                variant.description(),
                &[],
                pm,
                variant.script(),
            ),
            Selection::ProjectInfo | Selection::Quit => return None,
        };
        Some(plan)
    }

    /// The steps rendered as command lines.
    pub fn command_lines(&self) -> Vec<String> {
        self.steps.iter().map(|step| step.to_string()).collect()
    }
}

impl Selection {
    /// The selection for an item that needs no sub-choice.
    ///
    /// Tests and lint resolve to their fallback variants here.
    pub fn from_choice(choice: MenuChoice) -> Self {
        match choice {
            MenuChoice::DevServer => Self::DevServer,
            MenuChoice::FullDev => Self::FullDev,
            MenuChoice::BuildPreview => Self::BuildPreview,
            MenuChoice::Database => Self::Database,
            MenuChoice::Tests => Self::Tests(TestVariant::Default),
            MenuChoice::Showcase => Self::Showcase,
            MenuChoice::Lint => Self::Lint(LintVariant::Check),
            MenuChoice::ProjectInfo => Self::ProjectInfo,
            MenuChoice::Quit => Self::Quit,
        }
    }
}
