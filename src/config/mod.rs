//! Run configuration.
//!
//! - Schema definitions in [`schema`]
//! - File loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use webapp_starter::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".webapp-starter.yml"), "package_manager: pnpm").unwrap();
//!
//! let config = load_config(temp.path()).unwrap();
//! assert_eq!(config.package_manager, "pnpm");
//! assert_eq!(config.runtime, "node");
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_config, parse_config, CONFIG_FILE_NAME};
pub use schema::{ConfigFile, StarterConfig, DEFAULT_KEY_DEPENDENCIES};
