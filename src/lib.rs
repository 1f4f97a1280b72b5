//! # tokenkit
//!
//! Cheap, uniformly distributed random tokens for API keys, verification
//! codes and trace identifiers.
//!
//! ## Features
//!
//! - Base64 and base62 random strings, optionally prefixed
//! - Four and six digit zero-padded numeric codes
//! - UUIDs and hyphen-free trace ids
//! - Injectable randomness for reproducible tokens
//! - JSON-configurable token policies
//!
//! ## Not for secrets
//!
//! The default source is a fast pseudo-random generator. Tokens are uniform
//! over their alphabet but carry no unpredictability guarantee; do not use
//! them as passwords, session secrets or cryptographic keys.
//!
//! ## Example
//!
//! ```
//! use tokenkit::{TokenGenerator, SeededRandom, V4Uuids};
//!
//! let key = tokenkit::random_base62_with_prefix("sk_", 32).unwrap();
//! assert_eq!(key.len(), 32);
//!
//! // Reproducible tokens from a seeded source
//! let a = TokenGenerator::with_sources(SeededRandom::new(7), V4Uuids);
//! let b = TokenGenerator::with_sources(SeededRandom::new(7), V4Uuids);
//! assert_eq!(a.random_base64(16).unwrap(), b.random_base64(16).unwrap());
//! ```

pub mod error;
pub mod generate;
pub mod policy;
pub mod source;

// Re-export main types
pub use error::{TokenError, Result};
pub use generate::{Alphabet, TokenGenerator, default_generator};
pub use policy::{TokenFormat, TokenPolicy};
pub use source::{RandomSource, ThreadRandom, SeededRandom, OsRandom, UuidSource, V4Uuids, FixedUuid};

/// Symbol indices cut from one 64-bit word
pub const SYMBOLS_PER_WORD: usize = 10;

/// Six-digit code width
pub const SIX_DIGIT_CODE_WIDTH: usize = 6;

/// Four-digit code width
pub const FOUR_DIGIT_CODE_WIDTH: usize = 4;

/// Canonical UUID length
pub const UUID_LENGTH: usize = 36;

/// Trace id length (UUID without its four hyphens)
pub const TRACE_ID_LENGTH: usize = 32;

/// Random base64 string from the process-wide generator
pub fn random_base64(length: usize) -> Result<String> {
    default_generator().random_base64(length)
}

/// Random base62 string from the process-wide generator
pub fn random_base62(length: usize) -> Result<String> {
    default_generator().random_base62(length)
}

/// Prefixed base64 string of `total_length` characters
pub fn random_base64_with_prefix(prefix: &str, total_length: usize) -> Result<String> {
    default_generator().random_base64_with_prefix(prefix, total_length)
}

/// Prefixed base62 string of `total_length` characters
pub fn random_base62_with_prefix(prefix: &str, total_length: usize) -> Result<String> {
    default_generator().random_base62_with_prefix(prefix, total_length)
}

/// Six-digit numeric code
pub fn six_digit_code() -> Result<String> {
    default_generator().six_digit_code()
}

/// Four-digit numeric code
pub fn four_digit_code() -> Result<String> {
    default_generator().four_digit_code()
}

/// Prefixed six-digit numeric code
pub fn six_digit_code_with_prefix(prefix: &str) -> Result<String> {
    default_generator().six_digit_code_with_prefix(prefix)
}

/// Prefixed four-digit numeric code
pub fn four_digit_code_with_prefix(prefix: &str) -> Result<String> {
    default_generator().four_digit_code_with_prefix(prefix)
}

/// Random v4 UUID in hyphenated form
pub fn uuid() -> Result<String> {
    default_generator().uuid()
}

/// Random trace id
pub fn trace_id() -> Result<String> {
    default_generator().trace_id()
}
