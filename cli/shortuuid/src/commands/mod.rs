//! CLI commands.

mod alphabet;
mod codec;
mod generate;

use anyhow::Result;
use clap::{Parser, Subcommand};
use shortuuid::Codec;
use tracing::debug;

use crate::config::Config;
use crate::output::OutputFormat;

/// shortuuid - concise, unambiguous, URL-safe UUIDs.
#[derive(Debug, Parser)]
#[command(name = "shortuuid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Symbols to encode with (deduplicated and sorted).
    #[arg(long, global = true, env = "SHORTUUID_ALPHABET")]
    alphabet: Option<String>,

    /// Output format (text or json).
    #[arg(long, global = true, env = "SHORTUUID_FORMAT", default_value = "text")]
    format: String,

    /// Log level when RUST_LOG is unset (trace, debug, info, warn, error).
    #[arg(long, global = true, env = "SHORTUUID_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate short UUIDs (random, or derived from a name).
    Uuid(generate::UuidCommand),

    /// Generate random tokens of a fixed length.
    Random(generate::RandomCommand),

    /// Encode a UUID into its short form.
    Encode(codec::EncodeCommand),

    /// Decode a short form back into a UUID.
    Decode(codec::DecodeCommand),

    /// Show the alphabet in canonical order.
    Alphabet(alphabet::AlphabetCommand),

    /// Show how many symbols a value of N bytes needs.
    Length(alphabet::LengthCommand),
}

impl Cli {
    /// Log filter directive used when RUST_LOG is unset.
    pub fn log_level(&self) -> String {
        self.log_level.clone()
    }

    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let config = Config {
            alphabet: self.alphabet,
            format: self.format,
        };

        let ctx = CommandContext {
            codec: config.codec()?,
            format: config.output_format()?,
        };
        debug!(
            alphabet_len = ctx.codec.alphabet().len(),
            format = ?ctx.format,
            "configuration loaded"
        );

        match self.command {
            Some(Commands::Uuid(cmd)) => cmd.run(ctx),
            Some(Commands::Random(cmd)) => cmd.run(ctx),
            Some(Commands::Encode(cmd)) => cmd.run(ctx),
            Some(Commands::Decode(cmd)) => cmd.run(ctx),
            Some(Commands::Alphabet(cmd)) => cmd.run(ctx),
            Some(Commands::Length(cmd)) => cmd.run(ctx),
            None => generate::UuidCommand::default().run(ctx),
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub codec: Codec,
    pub format: OutputFormat,
}
