//! Genvy - declarative .env file generation with reproducible secrets.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use genvy::cli::output;
use genvy::cli::{execute, Cli};
use genvy::error::Error;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("GENVY_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("genvy=debug")
        } else {
            EnvFilter::new("genvy=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli.environment) {
        output::error(&e.to_string());
        // Domain errors carry a complete message on their own; unexpected
        // I/O or JSON failures also get the technical details.
        if matches!(e, Error::Io(_) | Error::Json(_)) {
            output::diagnostic(&format!("{:?}", e));
        }
        std::process::exit(1);
    }
}
