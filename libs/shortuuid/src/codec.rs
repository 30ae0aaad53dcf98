//! Conversion between 128-bit UUIDs and strings over an [`Alphabet`].
//!
//! Encodings are written most-significant digit first and padded on the
//! left with the alphabet's lowest symbol. Strings produced by releases that
//! wrote the least-significant digit first can still be read with
//! [`DigitOrder::Legacy`].

use rand::RngCore;
use tracing::debug;
use uuid::Uuid;

use crate::alphabet::Alphabet;
use crate::error::CodecError;

/// Which end of an encoded string holds the most significant digit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DigitOrder {
    /// Current format: the first symbol is the most significant digit.
    #[default]
    MostSignificantFirst,
    /// Older format: the first symbol is the least significant digit.
    ///
    /// Strings written before the digit-order change need this mode to
    /// decode to the original UUID.
    Legacy,
}

/// Encodes and decodes UUIDs using a configurable alphabet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Codec {
    alphabet: Alphabet,
}

impl Codec {
    /// Creates a codec over `alphabet`.
    #[must_use]
    pub fn new(alphabet: Alphabet) -> Self {
        tracing::trace!(alphabet_len = alphabet.len(), "codec created");
        Self { alphabet }
    }

    /// Creates a codec over the alphabet built from `symbols`.
    pub fn with_alphabet(symbols: &str) -> Result<Self, CodecError> {
        Ok(Self::new(Alphabet::new(symbols)?))
    }

    /// Returns the current alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns the canonical symbols of the current alphabet.
    pub fn get_alphabet(&self) -> &str {
        self.alphabet.as_str()
    }

    /// Replaces the alphabet.
    ///
    /// On error the previous alphabet stays in place.
    pub fn set_alphabet(&mut self, symbols: &str) -> Result<(), CodecError> {
        let alphabet = Alphabet::new(symbols)?;
        debug!(
            alphabet_len = alphabet.len(),
            uuid_length = alphabet.uuid_length(),
            "alphabet replaced"
        );
        self.alphabet = alphabet;
        Ok(())
    }

    /// Length of a padded UUID encoding in the current alphabet.
    #[must_use]
    pub fn length(&self) -> usize {
        self.alphabet.uuid_length()
    }

    /// Number of symbols needed to represent any value of `num_bytes` bytes.
    #[must_use]
    pub fn encoded_length(&self, num_bytes: usize) -> usize {
        self.alphabet.required_length(num_bytes)
    }

    /// Encodes `uuid`, padded to [`length`](Self::length).
    #[must_use]
    pub fn encode(&self, uuid: &Uuid) -> String {
        self.encode_int(uuid.as_u128(), None)
    }

    /// Encodes `uuid`, padded to at least `pad_length` symbols.
    ///
    /// A `pad_length` of zero disables padding, so the nil UUID encodes to
    /// an empty string.
    #[must_use]
    pub fn encode_padded(&self, uuid: &Uuid, pad_length: usize) -> String {
        self.encode_int(uuid.as_u128(), Some(pad_length))
    }

    /// Encodes a raw 128-bit value. `None` pads to the default length.
    #[must_use]
    pub fn encode_int(&self, value: u128, pad_length: Option<usize>) -> String {
        let padding = pad_length.unwrap_or_else(|| self.length());
        self.render(&to_digits(&value.to_be_bytes(), self.alphabet.len()), padding)
    }

    /// Parses UUID text and encodes it with default padding.
    ///
    /// Accepts the hyphenated, simple, braced and URN forms.
    pub fn encode_str(&self, text: &str) -> Result<String, CodecError> {
        Ok(self.encode(&parse_uuid(text)?))
    }

    /// Decodes a string written most-significant digit first.
    pub fn decode(&self, encoded: &str) -> Result<Uuid, CodecError> {
        self.decode_with(encoded, DigitOrder::MostSignificantFirst)
    }

    /// Decodes a string in the given digit order.
    ///
    /// Strings shorter than the padded length are read as having implicit
    /// leading zero digits. Values that do not fit in 128 bits are rejected
    /// with [`CodecError::InvalidInput`].
    pub fn decode_with(&self, encoded: &str, order: DigitOrder) -> Result<Uuid, CodecError> {
        let value = match order {
            DigitOrder::MostSignificantFirst => self.fold(encoded.chars())?,
            DigitOrder::Legacy => self.fold(encoded.chars().rev())?,
        };
        Ok(Uuid::from_u128(value))
    }

    fn fold(&self, mut symbols: impl Iterator<Item = char>) -> Result<u128, CodecError> {
        let base = self.alphabet.len() as u128;
        symbols.try_fold(0u128, |number, symbol| {
            let digit = self.alphabet.position_of(symbol)? as u128;
            number
                .checked_mul(base)
                .and_then(|n| n.checked_add(digit))
                .ok_or_else(|| CodecError::invalid_input("decoded value exceeds 128 bits"))
        })
    }

    /// Generates a short UUID.
    ///
    /// Without a name this is a random (version 4) UUID. A name starting
    /// with `http://` or `https://` (any case) is hashed in the URL
    /// namespace, any other name in the DNS namespace (version 5).
    #[must_use]
    pub fn uuid(&self, name: Option<&str>) -> String {
        self.encode(&generate_uuid(name))
    }

    /// Same as [`uuid`](Self::uuid) with an explicit pad length.
    #[must_use]
    pub fn uuid_padded(&self, name: Option<&str>, pad_length: usize) -> String {
        self.encode_padded(&generate_uuid(name), pad_length)
    }

    /// Generates a random string of exactly `length` symbols.
    ///
    /// Defaults to [`length`](Self::length). The bytes come from a
    /// cryptographically secure generator, but the result is a random
    /// token, not a UUID: short lengths collide far sooner than UUIDs do.
    #[must_use]
    pub fn random(&self, length: Option<usize>) -> String {
        let length = length.unwrap_or_else(|| self.length());
        let mut bytes = vec![0u8; length];
        rand::rng().fill_bytes(&mut bytes);

        // Keep the low-order digits; the leading ones are skewed by the
        // byte-to-base conversion and never start with zero.
        let mut digits = to_digits(&bytes, self.alphabet.len());
        digits.truncate(length);
        self.render(&digits, length)
    }

    /// Renders least-significant-first digits as a left-padded string.
    fn render(&self, digits: &[usize], padding: usize) -> String {
        let fill = padding.saturating_sub(digits.len());
        let mut output = String::with_capacity(fill + digits.len());
        output.extend(std::iter::repeat_n(self.alphabet.zero(), fill));
        output.extend(
            digits
                .iter()
                .rev()
                .filter_map(|&digit| self.alphabet.symbol(digit)),
        );
        output
    }
}

/// Parses UUID text from an untyped source such as a command line.
///
/// Surrounding whitespace is ignored; anything that is not a UUID in
/// hyphenated, simple, braced or URN form is [`CodecError::InvalidInput`].
pub fn parse_uuid(text: &str) -> Result<Uuid, CodecError> {
    Uuid::parse_str(text.trim())
        .map_err(|e| CodecError::invalid_input(format!("'{text}' is not a UUID: {e}")))
}

/// Creates the UUID behind [`Codec::uuid`].
fn generate_uuid(name: Option<&str>) -> Uuid {
    match name {
        None => Uuid::new_v4(),
        Some(name) if is_url(name) => Uuid::new_v5(&Uuid::NAMESPACE_URL, name.as_bytes()),
        Some(name) => Uuid::new_v5(&Uuid::NAMESPACE_DNS, name.as_bytes()),
    }
}

fn is_url(name: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        name.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// Converts a big-endian unsigned integer into base-`base` digits,
/// least significant first. Zero yields no digits.
fn to_digits(bytes: &[u8], base: usize) -> Vec<usize> {
    let base = base as u64;
    let mut number: Vec<u8> = bytes.iter().copied().skip_while(|&b| b == 0).collect();
    let mut digits = Vec::new();

    while !number.is_empty() {
        let mut remainder = 0u64;
        let mut quotient = Vec::with_capacity(number.len());
        for &byte in &number {
            let acc = (remainder << 8) | u64::from(byte);
            let q = acc / base;
            remainder = acc % base;
            // acc < base * 256, so q always fits in a byte
            if !quotient.is_empty() || q != 0 {
                quotient.push(q as u8);
            }
        }
        digits.push(remainder as usize);
        number = quotient;
    }

    digits
}
