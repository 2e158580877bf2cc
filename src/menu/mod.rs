//! The interactive command menu.
//!
//! - [`choice`] - menu items and the test/lint sub-choices
//! - [`plan`] - the table from selections to commands
//! - [`dispatcher`] - the menu loop
//! - [`info`] - the project info view

pub mod choice;
pub mod dispatcher;
pub mod info;
pub mod plan;

pub use choice::{LintVariant, MenuChoice, TestVariant};
pub use dispatcher::{DispatchState, Dispatcher, PlanOutcome, FAREWELL};
pub use info::show_project_info;
pub use plan::{CommandPlan, Selection};
