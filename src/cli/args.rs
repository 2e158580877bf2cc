//! CLI argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// Check a web project's toolchain and launch its npm scripts from a menu.
#[derive(Debug, Parser)]
#[command(name = "webapp-starter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the project root (defaults to the current directory)
    #[arg(short, long, env = "STARTER_PROJECT_DIR")]
    pub project: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// The project root, falling back to `cwd`.
    pub fn project_dir(&self, cwd: PathBuf) -> PathBuf {
        self.project.clone().unwrap_or(cwd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::parse_from([
            "webapp-starter",
            "--project",
            "/srv/app",
            "--no-color",
            "--debug",
        ]);
        assert_eq!(cli.project, Some(PathBuf::from("/srv/app")));
        assert!(cli.no_color);
        assert!(cli.debug);
    }

    #[test]
    fn project_defaults_to_cwd() {
        let cli = Cli::parse_from(["webapp-starter", "-p", "site"]);
        assert_eq!(cli.project_dir(PathBuf::from("/tmp")), PathBuf::from("site"));

        let cli = Cli {
            project: None,
            no_color: false,
            debug: false,
        };
        assert_eq!(cli.project_dir(PathBuf::from("/tmp")), PathBuf::from("/tmp"));
    }

    #[test]
    fn rejects_unknown_arguments() {
        assert!(Cli::try_parse_from(["webapp-starter", "run"]).is_err());
    }
}
