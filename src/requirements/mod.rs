//! Prerequisite and dependency checks for the target project.

pub mod checker;

pub use checker::{extract_version, DependencyStatus, EnvironmentChecker};
