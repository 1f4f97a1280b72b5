//! Random symbol strings
//!
//! Each 64-bit word from the source is cut into ten 6-bit indices, lowest
//! bits first; the top 4 bits are dropped. A base64 string of length `n`
//! therefore costs exactly `ceil(n / 10)` words.
//!
//! Base62 reads the same index stream but skips every index `>= 62` and
//! takes the next one instead, pulling a fresh word when the current one is
//! spent. Out-of-range indices are never folded back into range.

use crate::error::{TokenError, Result};
use crate::source::{RandomSource, UuidSource};
use crate::SYMBOLS_PER_WORD;
use super::alphabet::Alphabet;
use super::generator::TokenGenerator;

/// Bits per symbol index
const INDEX_BITS: u32 = 6;

/// Mask selecting one index from the low bits of a word
const INDEX_MASK: u64 = (1 << INDEX_BITS) - 1;

/// Stream of 6-bit indices cut from source words
struct IndexStream<'a, R: ?Sized> {
    source: &'a R,
    word: u64,
    remaining: usize,
    words_drawn: usize,
}

impl<'a, R: RandomSource + ?Sized> IndexStream<'a, R> {
    fn new(source: &'a R) -> Self {
        Self {
            source,
            word: 0,
            remaining: 0,
            words_drawn: 0,
        }
    }

    fn next_index(&mut self) -> Result<usize> {
        if self.remaining == 0 {
            self.word = self.source.next_u64()?;
            self.remaining = SYMBOLS_PER_WORD;
            self.words_drawn += 1;
        }
        let index = (self.word & INDEX_MASK) as usize;
        self.word >>= INDEX_BITS;
        self.remaining -= 1;
        Ok(index)
    }
}

/// Length left for the random part once `prefix` is placed
fn suffix_length(prefix: &str, total_length: usize) -> Result<usize> {
    let prefix_length = prefix.chars().count();
    total_length.checked_sub(prefix_length).ok_or_else(|| {
        tracing::warn!(prefix_length, total_length, "prefix longer than requested token");
        TokenError::InvalidArgument(format!(
            "total length {} is shorter than the {}-character prefix",
            total_length, prefix_length
        ))
    })
}

impl<R: RandomSource, U: UuidSource> TokenGenerator<R, U> {
    /// Random string of `length` symbols from `alphabet`
    pub fn random_symbols(&self, alphabet: Alphabet, length: usize) -> Result<String> {
        let table = alphabet.symbols();
        let mut stream = IndexStream::new(&self.random);
        let mut token = String::with_capacity(length);
        let mut rejected = 0usize;

        while token.len() < length {
            let index = stream.next_index()?;
            match table.get(index) {
                Some(&symbol) => token.push(symbol as char),
                None => rejected += 1,
            }
        }

        if rejected > 0 {
            tracing::trace!(rejected, words = stream.words_drawn, "skipped out-of-range indices");
        }
        tracing::debug!(alphabet = alphabet.name(), length, "generated random string");
        Ok(token)
    }

    /// Random string of `length` characters over the 64-symbol alphabet
    ///
    /// # Example
    /// ```
    /// let token = tokenkit::default_generator().random_base64(10).unwrap();
    /// assert_eq!(token.len(), 10);
    /// ```
    pub fn random_base64(&self, length: usize) -> Result<String> {
        self.random_symbols(Alphabet::Base64, length)
    }

    /// Random string of `length` characters over the 62-symbol alphabet
    pub fn random_base62(&self, length: usize) -> Result<String> {
        self.random_symbols(Alphabet::Base62, length)
    }

    /// `prefix` followed by base64 symbols, `total_length` characters in all.
    ///
    /// Fails with [`TokenError::InvalidArgument`] when the prefix alone is
    /// longer than `total_length`.
    pub fn random_base64_with_prefix(&self, prefix: &str, total_length: usize) -> Result<String> {
        self.prefixed_symbols(Alphabet::Base64, prefix, total_length)
    }

    /// `prefix` followed by base62 symbols, `total_length` characters in all.
    ///
    /// # Example
    /// ```
    /// let key = tokenkit::default_generator().random_base62_with_prefix("sk_", 24).unwrap();
    /// assert!(key.starts_with("sk_"));
    /// assert_eq!(key.len(), 24);
    /// ```
    pub fn random_base62_with_prefix(&self, prefix: &str, total_length: usize) -> Result<String> {
        self.prefixed_symbols(Alphabet::Base62, prefix, total_length)
    }

    fn prefixed_symbols(&self, alphabet: Alphabet, prefix: &str, total_length: usize) -> Result<String> {
        let length = suffix_length(prefix, total_length)?;
        let suffix = self.random_symbols(alphabet, length)?;
        Ok(format!("{}{}", prefix, suffix))
    }
}
