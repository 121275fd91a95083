//! # SmartSwap Aggregator - Trade Quoting & Call Encoding
//!
//! Derives worst-case execution bounds for a quoted trade and encodes them
//! into the exact argument list the SmartSwap settlement contract expects.
//!
//! ## Pipeline
//!
//! ```text
//! CurrencyAmount pair + routing metadata
//!         │ TradeQuote::new            (execution price derived once)
//!         ▼
//! TradeQuote ── minimum_amount_out / maximum_amount_in / worst_execution_price
//!         │ swap_call_parameters       (single wall-clock read for ttl)
//!         ▼
//! CallParameters { methodName, args, value }
//! ```
//!
//! ## Guarantees
//!
//! - Exact fraction arithmetic end to end; the only rounding is truncation
//!   toward zero, applied once per multiplicative stage (fee first, then
//!   slippage).
//! - Fail-fast precondition validation: native-asset exclusivity, ttl
//!   positivity, and tolerance/fee sign checks run before any monetary
//!   arithmetic or address resolution.
//! - Everything is an immutable value computation; all functions are safe
//!   to call concurrently without coordination.
//!
//! ## Example
//!
//! ```rust
//! use smartswap_aggregator::{swap_call_parameters, Deadline, SwapOptions, TradeQuote};
//! use smartswap_types::{Currency, CurrencyAmount, Percent, Token};
//!
//! let token_out = Currency::from(Token::new(
//!     10000,
//!     "0x0000000000000000000000000000000000000001",
//!     18,
//! ));
//! let trade = TradeQuote::new(
//!     CurrencyAmount::from_raw_amount(Currency::native(10000), 100u64)?,
//!     CurrencyAmount::from_raw_amount(token_out, 100u64)?,
//!     vec!["0x1".to_string()],
//!     0,
//! )?;
//! let params = swap_call_parameters(
//!     &trade,
//!     &SwapOptions {
//!         allowed_slippage: Percent::new(5, 100)?,
//!         fee_percent: Percent::new(5, 100)?,
//!         deadline: Deadline::Ttl(1800),
//!     },
//! )?;
//! assert_eq!(params.method_name, "swap");
//! assert_eq!(params.value, "0x64"); // native input rides along as value
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod call_params;
pub mod encode;
pub mod error;
pub mod trade;

pub use call_params::{
    get_expected_return_call_parameters, swap_call_parameters, swap_call_parameters_at, CallArg,
    CallParameters, Deadline, GetExpectedReturnOptions, SwapOptions, ADDRESS_ZERO, ZERO_HEX,
};
pub use encode::{to_hex, to_hex_amount, to_hex_u64, to_wei_base, to_wei_base10, to_wei_base16};
pub use error::AggregatorError;
pub use trade::TradeQuote;
