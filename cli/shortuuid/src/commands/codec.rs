//! Encode and decode commands.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use shortuuid::{parse_uuid, Codec, DigitOrder, Uuid};

use crate::error::CliError;
use crate::output::print_single;

use super::CommandContext;

/// Encode a UUID.
#[derive(Debug, Args)]
pub struct EncodeCommand {
    /// UUID in hyphenated, simple, braced or URN form.
    uuid: String,

    /// Pad to this many symbols (default: full UUID width; 0 disables).
    #[arg(long)]
    pad_length: Option<usize>,
}

#[derive(Debug, Serialize)]
struct EncodeView {
    uuid: Uuid,
    short: String,
}

impl EncodeCommand {
    fn view(&self, codec: &Codec) -> Result<EncodeView> {
        let uuid = parse_uuid(&self.uuid).map_err(CliError::from)?;

        let short = match self.pad_length {
            Some(pad_length) => codec.encode_padded(&uuid, pad_length),
            None => codec.encode(&uuid),
        };

        Ok(EncodeView { uuid, short })
    }

    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let view = self.view(&ctx.codec)?;
        print_single(&view, &view.short, ctx.format);
        Ok(())
    }
}

/// Decode a short UUID.
#[derive(Debug, Args)]
pub struct DecodeCommand {
    /// Short UUID to decode.
    short: String,

    /// Read the older least-significant-digit-first format.
    #[arg(long)]
    legacy: bool,
}

#[derive(Debug, Serialize)]
struct DecodeView {
    short: String,
    uuid: Uuid,
    legacy: bool,
}

impl DecodeCommand {
    fn view(&self, codec: &Codec) -> Result<DecodeView> {
        let order = if self.legacy {
            DigitOrder::Legacy
        } else {
            DigitOrder::MostSignificantFirst
        };
        let uuid = codec
            .decode_with(&self.short, order)
            .map_err(CliError::from)?;

        Ok(DecodeView {
            short: self.short.clone(),
            uuid,
            legacy: self.legacy,
        })
    }

    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let view = self.view(&ctx.codec)?;
        print_single(&view, &view.uuid.to_string(), ctx.format);
        Ok(())
    }
}
