//! flutter-hooks CLI entry point.

use clap::Parser;
use flutter_hooks::cli::{Cli, CommandDispatcher};
use flutter_hooks::ui::report_error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level comes from `RUST_LOG`, defaulting to warnings only so a hook
/// run prints nothing beyond the tool's own output. Logs go to stderr.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("flutter_hooks=warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    tracing::debug!("flutter-hooks starting with args: {:?}", cli);

    let dispatcher = CommandDispatcher::new();

    let code = match dispatcher.dispatch(cli.command) {
        Ok(result) => result.exit_code,
        Err(e) => {
            if e.is_reported() {
                report_error(&e.to_string());
            } else {
                tracing::debug!("{}", e);
            }
            e.exit_code()
        }
    };

    // Exit codes are passed through untruncated, which `ExitCode` cannot do
    // on Windows.
    std::process::exit(code);
}
