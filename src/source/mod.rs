//! Randomness sources consumed by the generators
//!
//! Generators never reach for a global RNG directly. They pull 64-bit words
//! from a [`RandomSource`] and UUIDs from a [`UuidSource`], both injected at
//! construction time so tests can substitute reproducible sources.
//!
//! None of these sources turn the generators into a secret-grade primitive.

mod random;
mod ids;
#[cfg(test)]
pub(crate) mod scripted;

pub use random::{RandomSource, ThreadRandom, SeededRandom, OsRandom};
pub use ids::{UuidSource, V4Uuids, FixedUuid};
