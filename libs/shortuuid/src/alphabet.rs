//! Canonical symbol sets for base-N encoding.
//!
//! An [`Alphabet`] is the sorted, duplicate-free set of symbols a codec uses
//! as digits. Construction normalizes the input, so `"ba"`, `"ab"` and
//! `"aabb"` all produce the same alphabet and therefore the same encodings.
//!
//! The symbol list, the string form, the reverse index and the cached
//! UUID length are built together and never change afterwards. Replacing an
//! alphabet means building a new value.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

use crate::error::CodecError;

/// Default alphabet: digits and ASCII letters minus `0`, `1`, `I`, `O` and `l`.
pub const DEFAULT_ALPHABET: &str = "23456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Number of bytes in a UUID.
pub const UUID_BYTES: usize = 16;

/// An immutable, canonically ordered set of encoding symbols.
#[derive(Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
    text: String,
    index: HashMap<char, usize>,
    uuid_length: usize,
}

impl Alphabet {
    /// Builds an alphabet from the symbols of `symbols`.
    ///
    /// Duplicates are dropped and the remaining symbols are sorted by code
    /// point. Fails with [`CodecError::InvalidAlphabet`] when fewer than two
    /// distinct symbols remain.
    pub fn new(symbols: &str) -> Result<Self, CodecError> {
        Self::from_symbols(symbols.chars())
    }

    /// Builds an alphabet from any sequence of symbols.
    pub fn from_symbols<I>(symbols: I) -> Result<Self, CodecError>
    where
        I: IntoIterator<Item = char>,
    {
        let unique: BTreeSet<char> = symbols.into_iter().collect();
        if unique.len() < 2 {
            return Err(CodecError::InvalidAlphabet);
        }
        Ok(Self::from_canonical(unique.into_iter().collect()))
    }

    /// `symbols` must already be sorted and unique with at least two entries.
    fn from_canonical(symbols: Vec<char>) -> Self {
        let text: String = symbols.iter().collect();
        let index = symbols
            .iter()
            .enumerate()
            .map(|(position, &symbol)| (symbol, position))
            .collect();
        let uuid_length = required_length(symbols.len(), UUID_BYTES);

        Self {
            symbols,
            text,
            index,
            uuid_length,
        }
    }

    /// Returns the canonical symbol sequence.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the number of distinct symbols (the encoding base).
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true if the alphabet has no symbols.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns the symbol for a digit value, if in range.
    #[must_use]
    pub fn symbol(&self, position: usize) -> Option<char> {
        self.symbols.get(position).copied()
    }

    /// Returns the lowest-ordered symbol, which stands for digit zero.
    #[must_use]
    pub fn zero(&self) -> char {
        self.symbols[0]
    }

    /// Returns the digit value of `symbol`.
    pub fn position_of(&self, symbol: char) -> Result<usize, CodecError> {
        self.index
            .get(&symbol)
            .copied()
            .ok_or(CodecError::InvalidCharacter { symbol })
    }

    /// Returns true if `symbol` belongs to this alphabet.
    #[must_use]
    pub fn contains(&self, symbol: char) -> bool {
        self.index.contains_key(&symbol)
    }

    /// Returns the symbols in canonical order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Length of a fully padded UUID encoding in this alphabet.
    #[must_use]
    pub const fn uuid_length(&self) -> usize {
        self.uuid_length
    }

    /// Number of symbols needed to represent any value of `num_bytes` bytes.
    #[must_use]
    pub fn required_length(&self, num_bytes: usize) -> usize {
        required_length(self.symbols.len(), num_bytes)
    }
}

/// Smallest `L` such that `base^L >= 256^num_bytes`.
fn required_length(base: usize, num_bytes: usize) -> usize {
    let bits = num_bytes * 8;
    if base.is_power_of_two() {
        let bits_per_symbol = base.trailing_zeros() as usize;
        return bits.div_ceil(bits_per_symbol);
    }

    // log2(base) is irrational here, so the ratio never lands on an integer.
    let factor = 256f64.ln() / (base as f64).ln();
    (factor * num_bytes as f64).ceil() as usize
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::from_canonical(DEFAULT_ALPHABET.chars().collect())
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alphabet")
            .field("symbols", &self.text)
            .field("len", &self.symbols.len())
            .finish()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Alphabet {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Alphabet {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl serde::Serialize for Alphabet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> serde::Deserialize<'de> for Alphabet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(&s).map_err(serde::de::Error::custom)
    }
}
