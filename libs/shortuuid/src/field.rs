//! Default-value generator for stored short identifiers.
//!
//! An [`IdField`] describes a string column that is filled with a fresh
//! short UUID or random token when a record is created. It knows the
//! maximum length the column needs, and refuses configurations whose
//! declared `max_length` cannot hold what it generates.

use crate::codec::Codec;
use crate::error::FieldError;

/// Configuration for a generated identifier column.
#[derive(Debug, Clone)]
pub struct IdField {
    codec: Codec,
    prefix: String,
    length: Option<usize>,
    max_length: usize,
}

impl IdField {
    /// Starts building a field using the default alphabet.
    pub fn builder() -> IdFieldBuilder {
        IdFieldBuilder::default()
    }

    /// Returns the prefix prepended to every generated value.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the fixed random length, or `None` for UUID-backed values.
    pub fn length(&self) -> Option<usize> {
        self.length
    }

    /// Returns the column's maximum length in symbols.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Returns the alphabet generated values are drawn from.
    pub fn alphabet(&self) -> &str {
        self.codec.get_alphabet()
    }

    /// Generates a new value: the prefix followed by a random token of the
    /// configured length, or by a short UUID when no length was set.
    pub fn generate(&self) -> String {
        let body = match self.length {
            Some(length) => self.codec.random(Some(length)),
            None => self.codec.uuid(None),
        };
        format!("{}{}", self.prefix, body)
    }
}

/// Builder for [`IdField`].
#[derive(Debug, Clone, Default)]
pub struct IdFieldBuilder {
    alphabet: Option<String>,
    prefix: String,
    length: Option<usize>,
    max_length: Option<usize>,
}

impl IdFieldBuilder {
    /// Uses a custom alphabet.
    pub fn alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.alphabet = Some(alphabet.into());
        self
    }

    /// Sets the prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Generates random tokens of exactly `length` symbols instead of UUIDs.
    pub fn length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    /// Declares the column's maximum length.
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Validates the configuration.
    pub fn build(self) -> Result<IdField, FieldError> {
        let codec = match &self.alphabet {
            Some(symbols) => Codec::with_alphabet(symbols)?,
            None => Codec::default(),
        };

        let prefix_len = self.prefix.chars().count();
        let (kind, body_len) = match self.length {
            Some(0) => return Err(FieldError::ZeroLength),
            Some(length) => ("random", length),
            None => ("UUID", codec.length()),
        };
        let required = prefix_len + body_len;

        let max_length = match self.max_length {
            Some(max_length) if max_length < required => {
                return Err(FieldError::MaxLengthTooSmall { kind, required });
            }
            Some(max_length) => max_length,
            None => required,
        };

        Ok(IdField {
            codec,
            prefix: self.prefix,
            length: self.length,
            max_length,
        })
    }
}
