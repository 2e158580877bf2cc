//! Error types for webapp-starter.
//!
//! This module defines [`StarterError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Startup gate failures (directory, executables, files, dependency
//!   install) abort the process with exit status 1
//! - Failures inside the menu loop are reported and the loop resumes
//! - Use `anyhow::Error` (via `StarterError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for webapp-starter operations.
#[derive(Debug, Error)]
pub enum StarterError {
    /// The configured project directory does not exist.
    #[error("Project directory not found: {path}")]
    MissingDirectory { path: PathBuf },

    /// An executable could not be found on PATH.
    #[error("{program} is not installed")]
    MissingExecutable {
        program: String,
        install_hint: Option<String>,
    },

    /// An executable was found but its version probe exited non-zero.
    ///
    /// `detail` is the first line the probe wrote to stderr.
    #[error("{program} is not working correctly ({})", describe_exit(.code))]
    ExecutableMisbehaving {
        program: String,
        code: Option<i32>,
        detail: Option<String>,
    },

    /// A required project file is missing.
    #[error("{label} not found: {path}")]
    MissingFile {
        label: String,
        path: PathBuf,
        hint: Option<String>,
    },

    /// Installing dependencies failed.
    #[error("Dependency install failed: {message}")]
    DependencyInstallFailure { message: String },

    /// A dispatched command exited non-zero.
    #[error("`{command}` failed with {}", describe_exit(.code))]
    CommandFailed { command: String, code: Option<i32> },

    /// A dispatched command was stopped with Ctrl+C.
    #[error("Command stopped by user: {command}")]
    Interrupted { command: String },

    /// Ctrl+C while a prompt was waiting for input.
    #[error("Input interrupted")]
    InputInterrupted,

    /// The dependency manifest could not be read or parsed.
    #[error("Could not read {path}: {message}")]
    ManifestParseFailure { path: PathBuf, message: String },

    /// The optional config file is malformed.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Render an optional exit code for messages.
pub fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by a signal)".to_string(),
    }
}

impl StarterError {
    /// Remediation hint to show below the error, if there is one.
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::MissingExecutable { install_hint, .. } => install_hint.clone(),
            Self::MissingFile { hint, .. } => hint.clone(),
            Self::ExecutableMisbehaving { detail, .. } => detail.clone(),
            Self::MissingDirectory { .. } => {
                Some("Pass --project <DIR> or set STARTER_PROJECT_DIR".to_string())
            }
            _ => None,
        }
    }
}

/// Result type alias for webapp-starter operations.
pub type Result<T> = std::result::Result<T, StarterError>;
