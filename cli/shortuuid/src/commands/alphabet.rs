//! Alphabet inspection commands.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use shortuuid::{Codec, UUID_BYTES};

use crate::output::print_single;

use super::CommandContext;

/// Show the configured alphabet.
#[derive(Debug, Args)]
pub struct AlphabetCommand {}

#[derive(Debug, Serialize)]
struct AlphabetView<'a> {
    alphabet: &'a str,
    size: usize,
    uuid_length: usize,
}

impl AlphabetCommand {
    fn view<'a>(&self, codec: &'a Codec) -> AlphabetView<'a> {
        AlphabetView {
            alphabet: codec.get_alphabet(),
            size: codec.alphabet().len(),
            uuid_length: codec.length(),
        }
    }

    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let view = self.view(&ctx.codec);
        print_single(&view, view.alphabet, ctx.format);
        Ok(())
    }
}

/// Show the encoded length for a byte count.
#[derive(Debug, Args)]
pub struct LengthCommand {
    /// Number of bytes to size for (16 = one UUID).
    #[arg(long, default_value_t = UUID_BYTES)]
    bytes: usize,
}

#[derive(Debug, Serialize)]
struct LengthView {
    bytes: usize,
    length: usize,
}

impl LengthCommand {
    fn view(&self, codec: &Codec) -> LengthView {
        LengthView {
            bytes: self.bytes,
            length: codec.encoded_length(self.bytes),
        }
    }

    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let view = self.view(&ctx.codec);
        print_single(&view, &view.length.to_string(), ctx.format);
        Ok(())
    }
}
