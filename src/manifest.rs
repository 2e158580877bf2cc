//! Dependency manifest (`package.json`) reading.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use crate::error::{Result, StarterError};

/// The parts of `package.json` shown in the project info view.
///
/// Script and dependency order follows the file. Metadata fields keep
/// whatever JSON type the file uses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageManifest {
    pub name: Option<Value>,
    pub version: Option<Value>,
    pub description: Option<Value>,
    #[serde(default)]
    pub scripts: Map<String, Value>,
    #[serde(default)]
    pub dependencies: Map<String, Value>,
}

/// Render a manifest value the way `package.json` authors wrote it.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// `null` counts as absent.
fn field_text(value: &Option<Value>) -> Option<String> {
    match value {
        None | Some(Value::Null) => None,
        Some(value) => Some(value_text(value)),
    }
}

impl PackageManifest {
    /// Read and parse a manifest file.
    ///
    /// Both IO and JSON errors become `ManifestParseFailure`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| StarterError::ManifestParseFailure {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::parse(&content, path)
    }

    /// Parse manifest JSON. `source_path` is only used in errors.
    pub fn parse(content: &str, source_path: &Path) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| StarterError::ManifestParseFailure {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn name(&self) -> Option<String> {
        field_text(&self.name)
    }

    pub fn version(&self) -> Option<String> {
        field_text(&self.version)
    }

    pub fn description(&self) -> Option<String> {
        field_text(&self.description)
    }

    /// Every script as `(name, command)`.
    pub fn scripts(&self) -> Vec<(&str, String)> {
        self.scripts
            .iter()
            .map(|(name, command)| (name.as_str(), value_text(command)))
            .collect()
    }

    /// Dependencies named in `allowlist` that the manifest declares, as
    /// `(name, version)`, in allowlist order.
    pub fn key_dependencies<'a>(&self, allowlist: &'a [String]) -> Vec<(&'a str, String)> {
        allowlist
            .iter()
            .filter_map(|name| {
                self.dependencies
                    .get(name)
                    .map(|version| (name.as_str(), value_text(version)))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_KEY_DEPENDENCIES;
    use tempfile::TempDir;

    fn allowlist() -> Vec<String> {
        DEFAULT_KEY_DEPENDENCIES.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_reads_metadata() {
        let manifest = PackageManifest::parse(
            r#"{"name": "qatalog-login", "version": "0.1.0", "description": "Login app"}"#,
            Path::new("package.json"),
        )
        .unwrap();
        assert_eq!(manifest.name().as_deref(), Some("qatalog-login"));
        assert_eq!(manifest.version().as_deref(), Some("0.1.0"));
        assert_eq!(manifest.description().as_deref(), Some("Login app"));
        assert!(manifest.scripts.is_empty());
    }

    #[test]
    fn scripts_keep_file_order() {
        let manifest = PackageManifest::parse(
            r#"{"scripts": {"dev": "vite", "build": "vite build", "analyze": "x"}}"#,
            Path::new("package.json"),
        )
        .unwrap();
        let names: Vec<&str> = manifest.scripts().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["dev", "build", "analyze"]);
    }

    #[test]
    fn key_dependencies_filters_by_allowlist() {
        let manifest = PackageManifest::parse(
            r#"{"dependencies": {"lodash": "4.17.21", "react": "18.0.0", "vite": "^5.0.0"}}"#,
            Path::new("package.json"),
        )
        .unwrap();
        let allowlist = allowlist();
        let deps = manifest.key_dependencies(&allowlist);
        assert_eq!(
            deps,
            vec![
                ("react", "18.0.0".to_string()),
                ("vite", "^5.0.0".to_string())
            ]
        );
    }

    #[test]
    fn non_string_values_are_rendered_as_json() {
        let manifest = PackageManifest::parse(
            r#"{"scripts": {"odd": 5}}"#,
            Path::new("package.json"),
        )
        .unwrap();
        assert_eq!(manifest.scripts(), vec![("odd", "5".to_string())]);
    }

    #[test]
    fn non_string_metadata_is_rendered() {
        let manifest = PackageManifest::parse(
            r#"{"name": "app", "version": 1, "description": null}"#,
            Path::new("package.json"),
        )
        .unwrap();
        assert_eq!(manifest.version().as_deref(), Some("1"));
        assert_eq!(manifest.description(), None);
    }

    #[test]
    fn malformed_json_is_parse_failure() {
        let result = PackageManifest::parse("{ not json", Path::new("package.json"));
        assert!(matches!(
            result,
            Err(StarterError::ManifestParseFailure { .. })
        ));
    }

    #[test]
    fn missing_file_is_parse_failure() {
        let temp = TempDir::new().unwrap();
        let result = PackageManifest::load(&temp.path().join("package.json"));
        assert!(matches!(
            result,
            Err(StarterError::ManifestParseFailure { .. })
        ));
    }

    #[test]
    fn load_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("package.json");
        fs::write(&path, r#"{"name": "app"}"#).unwrap();
        let manifest = PackageManifest::load(&path).unwrap();
        assert_eq!(manifest.name().as_deref(), Some("app"));
    }
}
