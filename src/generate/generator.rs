//! The token generator value
//!
//! A [`TokenGenerator`] owns one word source and one UUID source. Every
//! operation borrows it immutably, so a single generator can serve many
//! threads at once.

use crate::source::{RandomSource, UuidSource, ThreadRandom, V4Uuids};

/// Generator for random strings, numeric codes and identifiers.
///
/// Not a security primitive: tokens are uniformly distributed but carry no
/// unpredictability guarantee beyond what the injected source provides.
#[derive(Debug, Clone, Default)]
pub struct TokenGenerator<R = ThreadRandom, U = V4Uuids> {
    /// Source of 64-bit words
    pub(crate) random: R,
    /// Source of UUIDs
    pub(crate) uuids: U,
}

/// Generator behind the crate-level convenience functions
static DEFAULT_GENERATOR: TokenGenerator = TokenGenerator::new();

/// Process-wide generator using the thread-local RNG and v4 UUIDs
pub fn default_generator() -> &'static TokenGenerator {
    &DEFAULT_GENERATOR
}

impl TokenGenerator {
    /// Generator with the default sources
    pub const fn new() -> Self {
        Self {
            random: ThreadRandom,
            uuids: V4Uuids,
        }
    }
}

impl<R: RandomSource, U: UuidSource> TokenGenerator<R, U> {
    /// Generator with explicit sources
    pub fn with_sources(random: R, uuids: U) -> Self {
        Self { random, uuids }
    }

    /// Replace the word source, keeping the UUID source
    pub fn with_random_source<R2: RandomSource>(self, random: R2) -> TokenGenerator<R2, U> {
        TokenGenerator {
            random,
            uuids: self.uuids,
        }
    }

    /// Replace the UUID source, keeping the word source
    pub fn with_uuid_source<U2: UuidSource>(self, uuids: U2) -> TokenGenerator<R, U2> {
        TokenGenerator {
            random: self.random,
            uuids,
        }
    }

    /// The word source
    pub fn random_source(&self) -> &R {
        &self.random
    }

    /// The UUID source
    pub fn uuid_source(&self) -> &U {
        &self.uuids
    }
}
