//! webapp-starter - an interactive launcher for a web project's npm scripts.
//!
//! On startup the launcher checks that the project directory, the Node.js
//! toolchain, `package.json` and `.env.local` are all present, installs
//! dependencies when `node_modules` is missing, and then offers a numbered
//! menu of development commands.
//!
//! # Modules
//!
//! - [`app`] - Startup sequence tying the gates to the menu
//! - [`cli`] - Command-line arguments
//! - [`config`] - Project settings and the optional config file
//! - [`error`] - Error types and result aliases
//! - [`manifest`] - `package.json` reading
//! - [`menu`] - Menu items, command plans and the menu loop
//! - [`requirements`] - Prerequisite and dependency gates
//! - [`shell`] - Child process execution
//! - [`ui`] - Terminal output, prompts and spinners
//!
//! # Example
//!
//! ```
//! use webapp_starter::menu::{CommandPlan, MenuChoice, Selection};
//!
//! let choice = MenuChoice::parse("3").unwrap();
//! let plan = CommandPlan::for_selection(Selection::from_choice(choice), "npm").unwrap();
//! assert_eq!(plan.command_lines(), vec!["npm run build", "npm run preview"]);
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod manifest;
pub mod menu;
pub mod requirements;
pub mod shell;
pub mod ui;

pub use error::{Result, StarterError};
