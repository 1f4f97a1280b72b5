//! Zero-padded numeric codes
//!
//! Codes cover the whole range for their width, top value included:
//! `000000`..=`999999` and `0000`..=`9999`.

use crate::error::Result;
use crate::source::{RandomSource, UuidSource};
use crate::{SIX_DIGIT_CODE_WIDTH, FOUR_DIGIT_CODE_WIDTH};
use super::generator::TokenGenerator;

/// Uniform integer in `[0, bound)`.
///
/// Words below `2^64 mod bound` are redrawn so that the accepted range is
/// an exact multiple of `bound`.
fn uniform_below<R: RandomSource + ?Sized>(source: &R, bound: u64) -> Result<u64> {
    let threshold = bound.wrapping_neg() % bound;
    loop {
        let word = source.next_u64()?;
        if word >= threshold {
            return Ok(word % bound);
        }
    }
}

impl<R: RandomSource, U: UuidSource> TokenGenerator<R, U> {
    fn numeric_code(&self, width: usize) -> Result<String> {
        let bound = 10u64.pow(width as u32);
        let value = uniform_below(&self.random, bound)?;
        tracing::debug!(width, "generated numeric code");
        Ok(format!("{:0width$}", value, width = width))
    }

    /// Six decimal digits, zero-padded
    ///
    /// # Example
    /// ```
    /// let code = tokenkit::default_generator().six_digit_code().unwrap();
    /// assert_eq!(code.len(), 6);
    /// assert!(code.chars().all(|c| c.is_ascii_digit()));
    /// ```
    pub fn six_digit_code(&self) -> Result<String> {
        self.numeric_code(SIX_DIGIT_CODE_WIDTH)
    }

    /// Four decimal digits, zero-padded
    pub fn four_digit_code(&self) -> Result<String> {
        self.numeric_code(FOUR_DIGIT_CODE_WIDTH)
    }

    /// `prefix` immediately followed by a six-digit code
    pub fn six_digit_code_with_prefix(&self, prefix: &str) -> Result<String> {
        Ok(format!("{}{}", prefix, self.six_digit_code()?))
    }

    /// `prefix` immediately followed by a four-digit code
    pub fn four_digit_code_with_prefix(&self, prefix: &str) -> Result<String> {
        Ok(format!("{}{}", prefix, self.four_digit_code()?))
    }
}
