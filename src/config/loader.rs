//! Configuration file discovery and loading.

use crate::config::schema::{ConfigFile, StarterConfig};
use crate::error::{Result, StarterError};
use std::fs;
use std::path::Path;

/// Name of the optional per-project config file.
pub const CONFIG_FILE_NAME: &str = ".webapp-starter.yml";

/// Parse YAML content into a [`ConfigFile`].
///
/// An empty document is treated as an empty config.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ConfigFile> {
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }
    serde_yaml::from_str(content).map_err(|e| StarterError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Build the run configuration for a project directory.
///
/// Starts from the defaults and applies `.webapp-starter.yml` when the
/// project contains one. A missing project directory is not an error here;
/// the prerequisite check reports it.
pub fn load_config(project_dir: &Path) -> Result<StarterConfig> {
    let defaults = StarterConfig::for_project(project_dir);
    let path = project_dir.join(CONFIG_FILE_NAME);

    if !path.is_file() {
        tracing::debug!("No config file at {}, using defaults", path.display());
        return Ok(defaults);
    }

    let content = fs::read_to_string(&path)?;
    let file = parse_config(&content, &path)?;
    tracing::debug!("Loaded config overrides from {}", path.display());
    Ok(defaults.merge(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_without_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config(temp.path()).unwrap();
        assert_eq!(config, StarterConfig::for_project(temp.path()));
    }

    #[test]
    fn load_for_missing_directory_uses_defaults() {
        let config = load_config(Path::new("/definitely/not/here")).unwrap();
        assert_eq!(config.project_dir, Path::new("/definitely/not/here"));
    }

    #[test]
    fn load_applies_file_overrides() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "package_manager: pnpm\nenv_file: .env\n",
        )
        .unwrap();

        let config = load_config(temp.path()).unwrap();
        assert_eq!(config.package_manager, "pnpm");
        assert_eq!(config.env_file, ".env");
        assert_eq!(config.manifest, "package.json");
    }

    #[test]
    fn load_empty_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "\n").unwrap();
        let config = load_config(temp.path()).unwrap();
        assert_eq!(config.runtime, "node");
    }

    #[test]
    fn load_invalid_yaml_fails() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "runtime: [unclosed").unwrap();

        let result = load_config(temp.path());
        assert!(matches!(result, Err(StarterError::ConfigParseError { .. })));
    }
}
