//! Scripted word source for unit tests

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use crate::error::{TokenError, Result};
use super::RandomSource;

/// Replays a fixed list of words, then fails with `SourceUnavailable`
#[derive(Debug)]
pub(crate) struct ScriptedWords {
    words: Mutex<VecDeque<u64>>,
    drawn: AtomicUsize,
}

impl ScriptedWords {
    pub(crate) fn new(words: &[u64]) -> Self {
        Self {
            words: Mutex::new(words.iter().copied().collect()),
            drawn: AtomicUsize::new(0),
        }
    }

    /// Number of words handed out so far
    pub(crate) fn drawn(&self) -> usize {
        self.drawn.load(Ordering::SeqCst)
    }
}

impl RandomSource for ScriptedWords {
    fn next_u64(&self) -> Result<u64> {
        let word = self.words.lock().unwrap().pop_front()
            .ok_or_else(|| TokenError::SourceUnavailable("script exhausted".to_string()))?;
        self.drawn.fetch_add(1, Ordering::SeqCst);
        Ok(word)
    }
}
