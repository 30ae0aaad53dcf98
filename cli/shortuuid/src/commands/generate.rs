//! Generator commands (short UUIDs and random tokens).

use anyhow::Result;
use clap::Args;
use shortuuid::Codec;

use crate::output::print_values;

use super::CommandContext;

/// Generate short UUIDs.
#[derive(Debug, Default, Args)]
pub struct UuidCommand {
    /// Derive a name-based UUID instead of a random one.
    ///
    /// Names starting with http:// or https:// use the URL namespace,
    /// anything else the DNS namespace.
    #[arg(long)]
    name: Option<String>,

    /// Pad to this many symbols (default: full UUID width; 0 disables).
    #[arg(long)]
    pad_length: Option<usize>,

    /// How many values to print.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    count: Option<u32>,
}

impl UuidCommand {
    fn values(&self, codec: &Codec) -> Vec<String> {
        let name = self.name.as_deref();
        (0..self.count.unwrap_or(1))
            .map(|_| match self.pad_length {
                Some(pad_length) => codec.uuid_padded(name, pad_length),
                None => codec.uuid(name),
            })
            .collect()
    }

    pub fn run(self, ctx: CommandContext) -> Result<()> {
        print_values(&self.values(&ctx.codec), ctx.format);
        Ok(())
    }
}

/// Generate random tokens.
#[derive(Debug, Args)]
pub struct RandomCommand {
    /// Token length in symbols (default: full UUID width).
    #[arg(long, short)]
    length: Option<usize>,

    /// How many values to print.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    count: Option<u32>,
}

impl RandomCommand {
    fn values(&self, codec: &Codec) -> Vec<String> {
        (0..self.count.unwrap_or(1))
            .map(|_| codec.random(self.length))
            .collect()
    }

    pub fn run(self, ctx: CommandContext) -> Result<()> {
        print_values(&self.values(&ctx.codec), ctx.format);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shortuuid::{DigitOrder, Uuid};

    #[test]
    fn test_uuid_defaults() {
        let codec = Codec::default();
        let values = UuidCommand::default().values(&codec);
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].len(), 22);
        assert!(codec.decode(&values[0]).is_ok());
    }

    #[test]
    fn test_uuid_named_is_deterministic() {
        let codec = Codec::default();
        let cmd = UuidCommand {
            name: Some("example.com".to_string()),
            count: Some(3),
            ..Default::default()
        };
        let values = cmd.values(&codec);
        assert_eq!(values.len(), 3);
        assert!(values.iter().all(|v| v == &values[0]));
        assert_eq!(
            codec.decode_with(&values[0], DigitOrder::default()).unwrap(),
            Uuid::new_v5(&Uuid::NAMESPACE_DNS, b"example.com")
        );
    }

    #[test]
    fn test_uuid_url_name_and_padding() {
        let codec = Codec::default();
        let cmd = UuidCommand {
            name: Some("https://example.com/".to_string()),
            pad_length: Some(26),
            count: None,
        };
        let values = cmd.values(&codec);
        assert_eq!(values[0].len(), 26);
        assert_eq!(
            codec.decode(&values[0]).unwrap(),
            Uuid::new_v5(&Uuid::NAMESPACE_URL, b"https://example.com/")
        );
    }

    #[test]
    fn test_uuid_random_values_differ() {
        let cmd = UuidCommand {
            count: Some(5),
            ..Default::default()
        };
        let mut values = cmd.values(&Codec::default());
        values.sort();
        values.dedup();
        assert_eq!(values.len(), 5);
    }

    #[test]
    fn test_random_length_and_count() {
        let codec = Codec::with_alphabet("ab").unwrap();
        let cmd = RandomCommand {
            length: Some(12),
            count: Some(4),
        };
        let values = cmd.values(&codec);
        assert_eq!(values.len(), 4);
        for value in &values {
            assert_eq!(value.len(), 12);
            assert!(value.chars().all(|c| c == 'a' || c == 'b'));
        }
    }

    #[test]
    fn test_random_default_length() {
        let cmd = RandomCommand {
            length: None,
            count: None,
        };
        let values = cmd.values(&Codec::default());
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].len(), 22);
    }

    #[test]
    fn test_values_json() {
        let cmd = RandomCommand {
            length: Some(5),
            count: Some(2),
        };
        let json = serde_json::to_value(cmd.values(&Codec::default())).unwrap();
        let array = json.as_array().unwrap();
        assert_eq!(array.len(), 2);
        assert!(array.iter().all(|v| v.as_str().map(str::len) == Some(5)));
    }
}
