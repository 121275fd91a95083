//! Error types for the exact-arithmetic value layer.
//!
//! Every variant is a precondition violation: callers handed the library a
//! malformed value. None of them is retried internally and there are no
//! partial results.

use thiserror::Error;

/// Errors raised by the value types in this crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypesError {
    #[error("fraction denominator must be non-zero")]
    ZeroDenominator,

    #[error("cannot invert a zero-valued fraction")]
    InvertZero,

    #[error("division by a zero-valued fraction")]
    DivisionByZero,

    #[error("currency mismatch: {left} vs {right}")]
    CurrencyMismatch { left: String, right: String },

    #[error("raw amount out of range for uint256: {value}")]
    AmountOverflow { value: String },

    #[error("invalid decimal amount string: {input}")]
    InvalidDecimalString { input: String },

    #[error("price base amount must be non-zero")]
    ZeroBaseAmount,
}
