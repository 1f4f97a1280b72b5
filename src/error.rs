//! Error types for token generation

use thiserror::Error;

/// Main error type for token generation
#[derive(Error, Debug)]
pub enum TokenError {
    /// Caller supplied an argument the operation cannot honor
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The random or UUID source could not produce a value
    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    /// A token policy document could not be parsed
    #[error("Invalid policy: {0}")]
    InvalidPolicy(String),
}

impl From<serde_json::Error> for TokenError {
    fn from(err: serde_json::Error) -> Self {
        TokenError::InvalidPolicy(err.to_string())
    }
}

/// Result type alias for token operations
pub type Result<T> = std::result::Result<T, TokenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TokenError::InvalidArgument("prefix longer than total length".to_string());
        assert_eq!(err.to_string(), "Invalid argument: prefix longer than total length");

        let err = TokenError::SourceUnavailable("entropy".to_string());
        assert!(err.to_string().contains("entropy"));

        let err = TokenError::InvalidPolicy("missing field".to_string());
        assert!(err.to_string().starts_with("Invalid policy"));
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let token_err: TokenError = json_err.into();
        match token_err {
            TokenError::InvalidPolicy(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected InvalidPolicy"),
        }
    }
}
