//! 64-bit word sources

use std::sync::Mutex;
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng, TryRngCore};
use crate::error::{TokenError, Result};

/// A uniformly distributed stream of 64-bit words.
///
/// Implementations must be safe to share between threads; callers hold
/// `&self` and never lock around a source.
pub trait RandomSource: Send + Sync {
    /// Draw the next word
    fn next_u64(&self) -> Result<u64>;
}

/// Thread-local generator from `rand`. The default source.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_u64(&self) -> Result<u64> {
        Ok(rand::rng().random())
    }
}

/// Reproducible source seeded from a single `u64`.
///
/// The same seed always yields the same word sequence, so tokens built from
/// it are reproducible. Concurrent callers are serialized by an internal lock.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    /// Create a source with a fixed seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_u64(&self) -> Result<u64> {
        let mut rng = self.rng.lock()
            .map_err(|e| TokenError::SourceUnavailable(format!("seeded source lock poisoned: {}", e)))?;
        Ok(rng.random())
    }
}

/// Words read straight from the operating system.
///
/// Unlike the other sources this one can fail; failures surface as
/// [`TokenError::SourceUnavailable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn next_u64(&self) -> Result<u64> {
        OsRng.try_next_u64().map_err(|e| {
            tracing::warn!("OS entropy source failed: {}", e);
            TokenError::SourceUnavailable(e.to_string())
        })
    }
}
