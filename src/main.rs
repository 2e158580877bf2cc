//! webapp-starter entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use webapp_starter::app::App;
use webapp_starter::cli::Cli;
use webapp_starter::config::load_config;
use webapp_starter::menu::FAREWELL;
use webapp_starter::shell::{ExitOnInterrupt, SystemRunner};
use webapp_starter::ui::create_ui;

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("webapp_starter=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("webapp_starter=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("webapp-starter starting with args: {:?}", cli);

    let project_dir = cli.project_dir(std::env::current_dir().unwrap_or_default());
    let mut ui = create_ui(cli.no_color);

    let config = match load_config(&project_dir) {
        Ok(config) => config,
        Err(e) => {
            ui.error(&e.to_string());
            return ExitCode::from(1);
        }
    };

    // Ctrl+C outside a running command ends the launcher normally.
    let _exit_guard = ExitOnInterrupt::install(FAREWELL);
    let mut runner = SystemRunner::new();
    let code = App::new(config).run(&mut runner, ui.as_mut());
    ExitCode::from(code as u8)
}
