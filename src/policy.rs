//! Token policies
//!
//! A [`TokenPolicy`] names one kind of token an application hands out, such
//! as "API keys are `sk_` plus base62, 40 characters", and can be kept in a
//! JSON configuration file:
//!
//! ```json
//! { "format": "base62", "prefix": "sk_", "length": 40 }
//! ```

use serde::{Deserialize, Serialize};
use crate::error::{TokenError, Result};
use crate::generate::TokenGenerator;
use crate::source::{RandomSource, UuidSource};

/// Shape of the random part of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenFormat {
    /// 64-symbol random string
    Base64,
    /// 62-symbol random string
    Base62,
    /// Six decimal digits
    SixDigit,
    /// Four decimal digits
    FourDigit,
    /// Hyphenated UUID
    Uuid,
    /// UUID without hyphens
    TraceId,
}

impl TokenFormat {
    /// Whether the format takes an explicit total length
    pub fn has_variable_length(self) -> bool {
        matches!(self, TokenFormat::Base64 | TokenFormat::Base62)
    }
}

/// Description of a token type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPolicy {
    /// Random part format
    pub format: TokenFormat,
    /// Literal prefix, placed verbatim before the random part
    #[serde(default)]
    pub prefix: String,
    /// Total length in characters, prefix included (string formats only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
}

impl TokenPolicy {
    /// Policy without prefix or length
    pub fn new(format: TokenFormat) -> Self {
        Self {
            format,
            prefix: String::new(),
            length: None,
        }
    }

    /// Set the prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the total length
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    /// Parse and validate a policy from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let policy: TokenPolicy = serde_json::from_str(json)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Check that length and format agree
    pub fn validate(&self) -> Result<()> {
        match (self.format.has_variable_length(), self.length) {
            (true, None) => Err(TokenError::InvalidArgument(format!(
                "{:?} policy requires a length",
                self.format
            ))),
            (true, Some(length)) if length < self.prefix.chars().count() => {
                Err(TokenError::InvalidArgument(format!(
                    "length {} is shorter than prefix {:?}",
                    length, self.prefix
                )))
            }
            (false, Some(_)) => Err(TokenError::InvalidArgument(format!(
                "{:?} policy has a fixed length",
                self.format
            ))),
            _ => Ok(()),
        }
    }
}

impl<R: RandomSource, U: UuidSource> TokenGenerator<R, U> {
    /// Generate a token described by `policy`
    pub fn generate(&self, policy: &TokenPolicy) -> Result<String> {
        policy.validate()?;
        let prefix = policy.prefix.as_str();

        match (policy.format, policy.length) {
            (TokenFormat::Base64, Some(length)) => self.random_base64_with_prefix(prefix, length),
            (TokenFormat::Base62, Some(length)) => self.random_base62_with_prefix(prefix, length),
            (TokenFormat::SixDigit, _) => self.six_digit_code_with_prefix(prefix),
            (TokenFormat::FourDigit, _) => self.four_digit_code_with_prefix(prefix),
            (TokenFormat::Uuid, _) => Ok(format!("{}{}", prefix, self.uuid()?)),
            (TokenFormat::TraceId, _) => Ok(format!("{}{}", prefix, self.trace_id()?)),
            (format, None) => Err(TokenError::InvalidArgument(format!(
                "{:?} policy requires a length",
                format
            ))),
        }
    }
}
