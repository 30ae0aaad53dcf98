//! Configuration resolved from flags and environment.
//!
//! clap merges `--alphabet`/`SHORTUUID_ALPHABET` and
//! `--format`/`SHORTUUID_FORMAT`; this module turns the raw strings into a
//! validated codec and output format.

use anyhow::{Context, Result};
use shortuuid::Codec;

use crate::error::CliError;
use crate::output::OutputFormat;

/// CLI configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Alphabet symbols, or `None` for the default alphabet.
    pub alphabet: Option<String>,

    /// Output format name.
    pub format: String,
}

impl Config {
    /// Build the codec for this configuration.
    pub fn codec(&self) -> Result<Codec> {
        match &self.alphabet {
            Some(symbols) => Codec::with_alphabet(symbols)
                .map_err(CliError::from)
                .context("Invalid --alphabet / SHORTUUID_ALPHABET"),
            None => Ok(Codec::default()),
        }
    }

    /// Parse the output format name.
    pub fn output_format(&self) -> Result<OutputFormat> {
        match self.format.to_ascii_lowercase().as_str() {
            "text" | "" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::UnknownFormat(other.to_string()).into()),
        }
    }
}
