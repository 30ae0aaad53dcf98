//! shortuuid - generate, encode and decode concise UUIDs from the shell.
//!
//! With no subcommand, prints one random short UUID.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

use commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Prefer RUST_LOG, fall back to --log-level / SHORTUUID_LOG_LEVEL.
    // Logs go to stderr so stdout only carries identifiers.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| cli.log_level().into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = cli.run() {
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
