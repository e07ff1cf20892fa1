//! resdir CLI entry point.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use resdir::cli::{Cli, CommandDispatcher, Output, Theme};
use resdir::ResourceDir;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("resdir=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("resdir=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("resdir starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }
    let theme = if cli.no_color || !console::Term::stdout().features().colors_supported() {
        Theme::plain()
    } else {
        Theme::new()
    };
    let out = Output::new(theme, cli.quiet);

    let mut dir = ResourceDir::new();
    if let Some(base_dir) = &cli.base_dir {
        dir = dir.with_base_dir(base_dir.clone());
    }

    let dispatcher = CommandDispatcher::new(Arc::new(dir));

    match dispatcher.dispatch(&cli, &out).await {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            out.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
