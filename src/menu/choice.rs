//! Menu selections.

use crate::ui::MenuEntry;

/// A top-level menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    DevServer,
    FullDev,
    BuildPreview,
    Database,
    Tests,
    Showcase,
    Lint,
    ProjectInfo,
    Quit,
}

impl MenuChoice {
    /// Every item, in menu order.
    pub const ALL: [MenuChoice; 9] = [
        Self::DevServer,
        Self::FullDev,
        Self::BuildPreview,
        Self::Database,
        Self::Tests,
        Self::Showcase,
        Self::Lint,
        Self::ProjectInfo,
        Self::Quit,
    ];

    /// What the user types to pick this item.
    pub fn key(self) -> &'static str {
        match self {
            Self::DevServer => "1",
            Self::FullDev => "2",
            Self::BuildPreview => "3",
            Self::Database => "4",
            Self::Tests => "5",
            Self::Showcase => "6",
            Self::Lint => "7",
            Self::ProjectInfo => "8",
            Self::Quit => "9",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::DevServer => "Start web app (development)",
            Self::FullDev => "Start web app + database (full dev)",
            Self::BuildPreview => "Build and preview (production)",
            Self::Database => "Start database only",
            Self::Tests => "Run tests",
            Self::Showcase => "Run Storybook",
            Self::Lint => "Check and fix code (lint)",
            Self::ProjectInfo => "Show project info",
            Self::Quit => "Quit",
        }
    }

    /// Match trimmed input against the item keys.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL.into_iter().find(|choice| choice.key() == input)
    }

    /// The full menu as UI rows.
    pub fn entries() -> Vec<MenuEntry<'static>> {
        Self::ALL
            .iter()
            .map(|choice| MenuEntry {
                key: choice.key(),
                label: choice.label(),
            })
            .collect()
    }
}

/// Which test suite to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestVariant {
    Unit,
    EndToEnd,
    All,
    /// The project's plain `test` script, used for any other answer.
    Default,
}

impl TestVariant {
    pub const PROMPT: &'static str = "Choose test type (1: Unit, 2: E2E, 3: All)";

    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => Self::Unit,
            "2" => Self::EndToEnd,
            "3" => Self::All,
            _ => Self::Default,
        }
    }

    pub fn script(self) -> &'static str {
        match self {
            Self::Unit => "test:unit",
            Self::EndToEnd => "test:e2e",
            Self::All => "test:all",
            Self::Default => "test",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Unit => "Running unit tests",
            Self::EndToEnd => "Running E2E tests",
            Self::All => "Running all tests",
            Self::Default => "Running tests",
        }
    }
}

/// Which lint action to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintVariant {
    /// Also used for any unrecognized answer.
    Check,
    Fix,
    Format,
}

impl LintVariant {
    pub const PROMPT: &'static str = "Choose action (1: Check, 2: Fix, 3: Format)";

    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "2" => Self::Fix,
            "3" => Self::Format,
            _ => Self::Check,
        }
    }

    pub fn script(self) -> &'static str {
        match self {
            Self::Check => "lint",
            Self::Fix => "lint:fix",
            Self::Format => "format",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Check => "Checking code",
            Self::Fix => "Fixing code",
            Self::Format => "Formatting code",
        }
    }
}
