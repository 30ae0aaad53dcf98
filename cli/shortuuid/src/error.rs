//! Error handling and display for the CLI.

use colored::Colorize;
use shortuuid::CodecError;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Unknown output format '{0}' (expected text or json)")]
    UnknownFormat(String),

    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "Error:".red().bold(), err);

    if let Some(hint) = hint_for(err) {
        eprintln!("\n{}", format!("Hint: {hint}").yellow());
    }
}

fn hint_for(err: &anyhow::Error) -> Option<&'static str> {
    let codec_err = err.downcast_ref::<CodecError>().or_else(|| {
        match err.downcast_ref::<CliError>() {
            Some(CliError::Codec(inner)) => Some(inner),
            _ => None,
        }
    })?;

    match codec_err {
        CodecError::InvalidAlphabet => {
            Some("Provide at least two distinct symbols via --alphabet or SHORTUUID_ALPHABET.")
        }
        CodecError::InvalidCharacter { .. } => Some(
            "Decode with the same alphabet the value was encoded with (see `shortuuid alphabet`).",
        ),
        CodecError::InvalidInput { .. } => Some(
            "Expected a UUID such as 3b1f8b40-222c-4a6e-b77e-779d5a94e21c, or a short UUID that fits in 128 bits.",
        ),
    }
}
