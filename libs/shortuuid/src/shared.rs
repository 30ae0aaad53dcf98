//! Thread-safe codec handle and the process-wide compatibility API.
//!
//! [`SharedCodec`] publishes immutable [`Codec`] snapshots. Readers clone the
//! current `Arc` and work on it without holding the lock; replacing the
//! alphabet builds a new codec first and then swaps the pointer, so a reader
//! never sees a symbol list and index that disagree.

use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use tracing::debug;
use uuid::Uuid;

use crate::alphabet::Alphabet;
use crate::codec::{Codec, DigitOrder};
use crate::error::CodecError;

/// A codec that can be shared across threads and reconfigured in place.
#[derive(Debug, Default)]
pub struct SharedCodec {
    current: RwLock<Arc<Codec>>,
}

impl SharedCodec {
    /// Wraps `codec`.
    pub fn new(codec: Codec) -> Self {
        Self {
            current: RwLock::new(Arc::new(codec)),
        }
    }

    /// Returns the current codec snapshot.
    pub fn snapshot(&self) -> Arc<Codec> {
        // The guarded value is only ever replaced whole, so a poisoned lock
        // still holds a consistent snapshot.
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Replaces the alphabet for all later operations.
    pub fn set_alphabet(&self, symbols: &str) -> Result<(), CodecError> {
        let codec = Arc::new(Codec::new(Alphabet::new(symbols)?));
        debug!(alphabet_len = codec.alphabet().len(), "shared alphabet replaced");
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = codec;
        Ok(())
    }

    /// Returns the canonical symbols of the current alphabet.
    pub fn get_alphabet(&self) -> String {
        self.snapshot().get_alphabet().to_owned()
    }

    /// See [`Codec::encode`].
    pub fn encode(&self, uuid: &Uuid) -> String {
        self.snapshot().encode(uuid)
    }

    /// See [`Codec::encode_padded`].
    pub fn encode_padded(&self, uuid: &Uuid, pad_length: usize) -> String {
        self.snapshot().encode_padded(uuid, pad_length)
    }

    /// See [`Codec::decode_with`].
    pub fn decode(&self, encoded: &str, order: DigitOrder) -> Result<Uuid, CodecError> {
        self.snapshot().decode_with(encoded, order)
    }

    /// See [`Codec::uuid`].
    pub fn uuid(&self, name: Option<&str>) -> String {
        self.snapshot().uuid(name)
    }

    /// See [`Codec::uuid_padded`].
    pub fn uuid_padded(&self, name: Option<&str>, pad_length: usize) -> String {
        self.snapshot().uuid_padded(name, pad_length)
    }

    /// See [`Codec::random`].
    pub fn random(&self, length: Option<usize>) -> String {
        self.snapshot().random(length)
    }

    /// See [`Codec::encoded_length`].
    pub fn encoded_length(&self, num_bytes: usize) -> usize {
        self.snapshot().encoded_length(num_bytes)
    }
}

impl From<Codec> for SharedCodec {
    fn from(codec: Codec) -> Self {
        Self::new(codec)
    }
}

/// Process-wide functions backed by one lazily created [`SharedCodec`].
///
/// Prefer passing a [`Codec`] explicitly; these exist for callers that want
/// a drop-in module-level API.
pub mod global {
    use super::*;

    fn instance() -> &'static SharedCodec {
        static INSTANCE: OnceLock<SharedCodec> = OnceLock::new();
        INSTANCE.get_or_init(SharedCodec::default)
    }

    /// Encodes `uuid` with the global alphabet.
    pub fn encode(uuid: &Uuid) -> String {
        instance().encode(uuid)
    }

    /// Encodes `uuid` with the global alphabet, padded to `pad_length`.
    pub fn encode_padded(uuid: &Uuid, pad_length: usize) -> String {
        instance().encode_padded(uuid, pad_length)
    }

    /// Decodes `encoded` with the global alphabet.
    pub fn decode(encoded: &str, order: DigitOrder) -> Result<Uuid, CodecError> {
        instance().decode(encoded, order)
    }

    /// Generates a short UUID with the global alphabet.
    pub fn uuid(name: Option<&str>) -> String {
        instance().uuid(name)
    }

    /// Generates a short UUID with the global alphabet, padded to `pad_length`.
    pub fn uuid_padded(name: Option<&str>, pad_length: usize) -> String {
        instance().uuid_padded(name, pad_length)
    }

    /// Generates a random token with the global alphabet.
    pub fn random(length: Option<usize>) -> String {
        instance().random(length)
    }

    /// Returns the global alphabet.
    pub fn get_alphabet() -> String {
        instance().get_alphabet()
    }

    /// Replaces the global alphabet.
    pub fn set_alphabet(symbols: &str) -> Result<(), CodecError> {
        instance().set_alphabet(symbols)
    }

    /// Encoded length for `num_bytes` bytes in the global alphabet.
    pub fn encoded_length(num_bytes: usize) -> usize {
        instance().encoded_length(num_bytes)
    }
}
