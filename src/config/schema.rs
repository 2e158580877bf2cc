//! Configuration types.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Dependencies whose versions are shown in the project info view.
pub const DEFAULT_KEY_DEPENDENCIES: &[&str] = &[
    "react",
    "next",
    "vite",
    "@supabase/supabase-js",
    "react-router-dom",
];

/// Resolved, immutable configuration for one run.
///
/// Built once at startup and shared by reference with the checker and the
/// dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub struct StarterConfig {
    /// Root of the web project. Every external command runs here.
    pub project_dir: PathBuf,
    /// Dependency manifest file name, relative to `project_dir`.
    pub manifest: String,
    /// Environment file name, relative to `project_dir`.
    pub env_file: String,
    /// Runtime executable probed with `--version`.
    pub runtime: String,
    /// Package manager executable used for every menu command.
    pub package_manager: String,
    /// Directory the package manager installs dependencies into.
    pub install_dir: String,
    /// Where to get the runtime when it is missing.
    pub runtime_install_url: String,
    /// Dependencies listed in the project info view.
    pub key_dependencies: Vec<String>,
}

impl StarterConfig {
    /// Default configuration for a project directory.
    pub fn for_project(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            manifest: "package.json".to_string(),
            env_file: ".env.local".to_string(),
            runtime: "node".to_string(),
            package_manager: "npm".to_string(),
            install_dir: "node_modules".to_string(),
            runtime_install_url: "https://nodejs.org".to_string(),
            key_dependencies: DEFAULT_KEY_DEPENDENCIES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.project_dir.join(&self.manifest)
    }

    pub fn env_path(&self) -> PathBuf {
        self.project_dir.join(&self.env_file)
    }

    pub fn install_path(&self) -> PathBuf {
        self.project_dir.join(&self.install_dir)
    }

    /// Apply the values set in a config file.
    pub fn merge(mut self, file: ConfigFile) -> Self {
        if let Some(v) = file.manifest {
            self.manifest = v;
        }
        if let Some(v) = file.env_file {
            self.env_file = v;
        }
        if let Some(v) = file.runtime {
            self.runtime = v;
        }
        if let Some(v) = file.package_manager {
            self.package_manager = v;
        }
        if let Some(v) = file.install_dir {
            self.install_dir = v;
        }
        if let Some(v) = file.runtime_install_url {
            self.runtime_install_url = v;
        }
        if let Some(v) = file.key_dependencies {
            self.key_dependencies = v;
        }
        self
    }
}

/// Contents of `.webapp-starter.yml`. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub manifest: Option<String>,
    pub env_file: Option<String>,
    pub runtime: Option<String>,
    pub package_manager: Option<String>,
    pub install_dir: Option<String>,
    pub runtime_install_url: Option<String>,
    pub key_dependencies: Option<Vec<String>>,
}
