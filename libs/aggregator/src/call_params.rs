//! Call-parameter encoding for the SmartSwap aggregator contract.
//!
//! Pure functions that turn a [`TradeQuote`] plus caller options into the
//! method name, ordered argument list, and native value the contract
//! dispatcher expects. Arguments are canonical hex strings; the
//! distribution array passes through untouched.

use chrono::Utc;
use serde::Serialize;
use smartswap_types::{Currency, CurrencyAmount, Percent};
use tracing::debug;

use crate::encode::{to_hex_amount, to_hex_u64, to_wei_base16};
use crate::error::AggregatorError;
use crate::trade::TradeQuote;

/// Hex literal for a zero value transfer.
pub const ZERO_HEX: &str = "0x0";

/// Sentinel the contract uses in place of an address for the native asset.
pub const ADDRESS_ZERO: &str = "0x0000000000000000000000000000000000000000";

/// Decimal scale at which the contract consumes the fee ratio.
const FEE_PERCENT_DECIMALS: u32 = 18;

/// One positional argument: a scalar hex string or an array of them.
///
/// Serializes untagged so the JSON form is the `(string | string[])[]`
/// shape contract-call tooling expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CallArg {
    Value(String),
    Array(Vec<String>),
}

/// The fully encoded call: no identity, no lifecycle, just the values to
/// forward to a contract-call encoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallParameters {
    /// The method to call on the aggregator contract.
    pub method_name: String,
    /// Ordered, hex-encoded positional arguments.
    pub args: Vec<CallArg>,
    /// Native value to send with the call, in hex.
    pub value: String,
}

/// When the encoded swap stops being valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deadline {
    /// Relative time-to-live in seconds, resolved against a single wall
    /// clock read at encoding time. Must be strictly positive.
    Ttl(u64),
    /// Absolute unix timestamp, for callers that do not want local time
    /// involved.
    At(u64),
}

/// Options for encoding a swap call.
#[derive(Debug, Clone)]
pub struct SwapOptions {
    /// How far the execution price may move unfavorably before the contract
    /// reverts.
    pub allowed_slippage: Percent,
    /// Aggregator fee deducted from proceeds.
    pub fee_percent: Percent,
    pub deadline: Deadline,
}

/// Options for encoding a `getExpectedReturn` query.
#[derive(Debug, Clone, Copy)]
pub struct GetExpectedReturnOptions {
    /// How many pieces the router may split the trade into.
    pub parts: u64,
    /// Routing/execution bitmask, bit semantics defined by the contract.
    pub flags: u64,
}

fn resolve_address(currency: &Currency) -> String {
    currency.address().unwrap_or(ADDRESS_ZERO).to_string()
}

/// Encodes a `swap` call for the given trade.
///
/// Reads the wall clock exactly once when the deadline is a [`Deadline::Ttl`];
/// every other input is taken from the arguments. See
/// [`swap_call_parameters_at`] for the clock-free seam.
pub fn swap_call_parameters(
    trade: &TradeQuote,
    options: &SwapOptions,
) -> Result<CallParameters, AggregatorError> {
    // Single consistent timestamp snapshot for the whole encoding.
    let now = u64::try_from(Utc::now().timestamp()).unwrap_or(0);
    swap_call_parameters_at(trade, options, now)
}

/// Encodes a `swap` call resolving relative deadlines against `now_unix`.
pub fn swap_call_parameters_at(
    trade: &TradeQuote,
    options: &SwapOptions,
    now_unix: u64,
) -> Result<CallParameters, AggregatorError> {
    let ether_in = trade.input_amount().currency().is_native();
    let ether_out = trade.output_amount().currency().is_native();
    // The aggregator does not support ether on both sides.
    if ether_in && ether_out {
        return Err(AggregatorError::EtherInOut);
    }
    if matches!(options.deadline, Deadline::Ttl(0)) {
        return Err(AggregatorError::InvalidTtl);
    }

    let amount_in = to_hex_amount(
        &trade.maximum_amount_in(&options.allowed_slippage, &options.fee_percent)?,
    );
    let min_return = to_hex_amount(
        &trade.minimum_amount_out(&options.allowed_slippage, &options.fee_percent)?,
    );
    let from_token = resolve_address(trade.input_amount().currency());
    let dest_token = resolve_address(trade.output_amount().currency());
    let flags = to_hex_u64(trade.flags());
    let fee_percent = to_wei_base16(&options.fee_percent, FEE_PERCENT_DECIMALS);
    let deadline = match options.deadline {
        // Saturate rather than wrap: a wrapped sum would encode a deadline
        // in the past.
        Deadline::Ttl(ttl) => to_hex_u64(now_unix.saturating_add(ttl)),
        Deadline::At(at) => to_hex_u64(at),
    };
    let value = if ether_in {
        amount_in.clone()
    } else {
        ZERO_HEX.to_string()
    };

    debug!(
        %from_token,
        %dest_token,
        %amount_in,
        %min_return,
        %deadline,
        "encoded swap call parameters"
    );

    Ok(CallParameters {
        method_name: "swap".to_string(),
        args: vec![
            CallArg::Value(from_token),
            CallArg::Value(dest_token),
            CallArg::Value(amount_in),
            CallArg::Value(min_return),
            CallArg::Array(trade.distribution().to_vec()),
            CallArg::Value(flags),
            CallArg::Value(deadline),
            CallArg::Value(fee_percent),
        ],
        value,
    })
}

/// Encodes a `getExpectedReturn` query for a prospective trade.
pub fn get_expected_return_call_parameters(
    amount_in: &CurrencyAmount,
    currency_out: &Currency,
    options: &GetExpectedReturnOptions,
) -> Result<CallParameters, AggregatorError> {
    let ether_in = amount_in.currency().is_native();
    let ether_out = currency_out.is_native();
    if ether_in && ether_out {
        return Err(AggregatorError::EtherInOut);
    }

    let amount = to_hex_amount(amount_in);
    let from_token = resolve_address(amount_in.currency());
    let dest_token = resolve_address(currency_out);
    let parts = to_hex_u64(options.parts);
    let flags = to_hex_u64(options.flags);
    let value = if ether_in {
        amount.clone()
    } else {
        ZERO_HEX.to_string()
    };

    debug!(%from_token, %dest_token, %amount, %parts, %flags, "encoded getExpectedReturn call parameters");

    Ok(CallParameters {
        method_name: "getExpectedReturn".to_string(),
        args: vec![
            CallArg::Value(from_token),
            CallArg::Value(dest_token),
            CallArg::Value(amount),
            CallArg::Value(parts),
            CallArg::Value(flags),
        ],
        value,
    })
}
