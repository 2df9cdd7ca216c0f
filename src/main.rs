//! unknown-sdk CLI entry point.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use unknown_sdk::cli::{Cli, CommandDispatcher};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so JSON output on stdout stays parseable.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("unknown_sdk=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("unknown_sdk=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("unknown-sdk starting with args: {:?}", cli);

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let dispatcher = match &cli.config {
        Some(path) => CommandDispatcher::new(path.clone()),
        None => {
            let project_root = cli
                .project
                .as_ref()
                .cloned()
                .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());
            CommandDispatcher::for_project(&project_root)
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let code = match dispatcher.dispatch(&cli, &mut out) {
        Ok(result) => result.exit_code as u8,
        Err(e) => {
            let _ = out.flush();
            eprintln!("Error: {}", e);
            1
        }
    };
    let _ = out.flush();
    ExitCode::from(code)
}
