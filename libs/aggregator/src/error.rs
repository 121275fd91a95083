//! Error types for trade quoting and call encoding.

use smartswap_types::TypesError;
use thiserror::Error;

/// Errors raised by the quote engine and the call-parameter encoders.
///
/// Every variant is a fail-fast precondition failure validated before any
/// monetary arithmetic or address resolution runs; none is retried and
/// there is never a partial result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AggregatorError {
    /// The aggregator contract cannot take the chain's native asset on both
    /// sides of a trade.
    #[error("trade has the native asset on both sides")]
    EtherInOut,

    #[error("slippage tolerance must be non-negative")]
    InvalidSlippageTolerance,

    #[error("fee percent must be non-negative")]
    InvalidFeePercent,

    #[error("ttl must be strictly positive")]
    InvalidTtl,

    #[error(transparent)]
    Types(#[from] TypesError),
}
