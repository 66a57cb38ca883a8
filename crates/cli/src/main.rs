//! Hotelier CLI

use std::{error::Error, io, process};

use hotelier_app::context::AppContext;
use tracing::error;

use crate::config::Cli;

mod commands;
mod config;
mod errors;
mod observability;
mod render;

/// Hotelier CLI entry point
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let cli = Cli::load().unwrap_or_else(|error| error.exit());

    if let Err(error) = observability::init(&cli.logging) {
        report(&error);
        process::exit(1);
    }

    let context = match AppContext::from_backend(cli.api.backend()) {
        Ok(context) => context.with_search_debounce(cli.api.search_debounce()),
        Err(init_error) => {
            error!(error = ?init_error, "failed to build application context");
            report(&init_error);
            process::exit(1);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();

    let result = commands::run(
        cli.command,
        &context,
        &mut stdin.lock(),
        &mut stdout.lock(),
    )
    .await;

    if let Err(command_error) = result {
        error!(error = %command_error, "command failed");
        report(&command_error);
        process::exit(1);
    }
}

#[expect(
    clippy::print_stderr,
    reason = "errors are reported to the user whatever the log level"
)]
fn report(error: &dyn Error) {
    let mut message = format!("Error: {error}");
    let mut source = error.source();

    while let Some(cause) = source {
        message.push_str(&format!(": {cause}"));
        source = cause.source();
    }

    eprintln!("{message}");
}
