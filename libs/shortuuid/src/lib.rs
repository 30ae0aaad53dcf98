//! # shortuuid
//!
//! Concise, unambiguous, URL-safe UUIDs.
//!
//! A UUID is a 128-bit number; this crate writes it in base N, where N is the
//! size of a configurable alphabet. The default alphabet has 57 symbols and
//! leaves out characters that are easy to confuse (`0`, `1`, `I`, `O`, `l`),
//! giving 22-character identifiers such as `CXc85b4rqinB7s5J52TRYb`.
//!
//! ## Design Principles
//!
//! - An alphabet is a *set*: input order and duplicates do not matter, so
//!   every process configured with the same symbols encodes identically
//! - Encodings are padded to a fixed width per alphabet and decode back to
//!   the exact UUID
//! - Alphabets are immutable values; reconfiguring swaps in a new one
//!
//! ## Example
//!
//! ```
//! use shortuuid::{Codec, Uuid};
//!
//! let codec = Codec::default();
//! let uuid = Uuid::parse_str("3b1f8b40-222c-4a6e-b77e-779d5a94e21c").unwrap();
//! let short = codec.encode(&uuid);
//! assert_eq!(short, "CXc85b4rqinB7s5J52TRYb");
//! assert_eq!(codec.decode(&short).unwrap(), uuid);
//! ```

mod alphabet;
mod codec;
mod error;
mod field;
mod shared;

pub use alphabet::{Alphabet, DEFAULT_ALPHABET, UUID_BYTES};
pub use codec::{parse_uuid, Codec, DigitOrder};
pub use error::{CodecError, FieldError};
pub use field::{IdField, IdFieldBuilder};
pub use shared::{global, SharedCodec};

/// Re-export uuid for consumers that need raw UUID operations
pub use uuid::Uuid;
