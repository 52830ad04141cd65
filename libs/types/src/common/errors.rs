//! Error types for order code generation and identifier validation
//!
//! Every failure in this workspace is a caller error: a non-positive sequence,
//! a non-positive width, a configuration that cannot produce well-formed codes,
//! or an input whose encoding would overflow. None of them are retryable.

use thiserror::Error;

/// Errors that can occur during typed ID validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// ID value is null/zero when non-null required
    #[error("ID cannot be null/zero")]
    NullId,
}

/// Errors raised while building order codes and trade numbers
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodeError {
    /// Sequence must be strictly positive
    #[error("sequence must be positive, got {sequence}")]
    InvalidSequence { sequence: i64 },

    /// Pad width must be strictly positive
    #[error("width must be positive, got {width}")]
    InvalidWidth { width: i64 },

    /// Only non-negative values have a fixed-width decimal form
    #[error("value must not be negative, got {value}")]
    NegativeValue { value: i64 },

    /// Arithmetic on an input would leave the representable range
    #[error("overflow while computing {context}")]
    Overflow { context: &'static str },

    /// A millisecond timestamp chrono cannot represent
    #[error("timestamp {millis}ms is outside the representable date range")]
    TimestampOutOfRange { millis: i64 },

    /// Creator configuration rejected at construction
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Input does not have the layout produced by the trade number encoder
    #[error("malformed trade number '{input}': {reason}")]
    MalformedTradeNo { input: String, reason: &'static str },
}

impl CodeError {
    /// Shorthand for configuration failures
    pub fn config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CodeError::InvalidSequence { sequence: -10 }.to_string(),
            "sequence must be positive, got -10"
        );
        assert_eq!(
            CodeError::InvalidWidth { width: 0 }.to_string(),
            "width must be positive, got 0"
        );
        assert_eq!(ValidationError::NullId.to_string(), "ID cannot be null/zero");
    }
}
