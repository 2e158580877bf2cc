//! Command-line interface for the starter.
//!
//! The binary takes no subcommands; see [`args::Cli`] for the flags.

pub mod args;

pub use args::Cli;
