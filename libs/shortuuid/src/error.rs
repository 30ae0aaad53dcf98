//! Error types for alphabet validation, encoding and decoding.

use thiserror::Error;

/// Errors raised by the alphabet manager and the codec.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The alphabet has fewer than two distinct symbols.
    #[error("alphabet must contain more than one unique symbol")]
    InvalidAlphabet,

    /// A symbol is not part of the current alphabet.
    #[error("invalid character '{symbol}': not in the current alphabet")]
    InvalidCharacter { symbol: char },

    /// The input is outside the codec's domain.
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

impl CodecError {
    /// Creates an `InvalidInput` error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Returns true if this error was caused by a bad alphabet.
    pub fn is_alphabet_error(&self) -> bool {
        matches!(self, CodecError::InvalidAlphabet)
    }

    /// Returns the offending symbol for `InvalidCharacter`.
    pub fn symbol(&self) -> Option<char> {
        match self {
            CodecError::InvalidCharacter { symbol } => Some(*symbol),
            _ => None,
        }
    }
}

/// Errors raised when configuring an [`IdField`](crate::IdField).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The configured maximum length cannot hold a generated value.
    #[error("max_length too small to fit generated {kind} of length {required} (including prefix)")]
    MaxLengthTooSmall { kind: &'static str, required: usize },

    /// A fixed length of zero was requested.
    #[error("length must be greater than zero")]
    ZeroLength,

    /// The alphabet is invalid.
    #[error(transparent)]
    Codec(#[from] CodecError),
}
