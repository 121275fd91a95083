//! Hex and fixed-point rendering for contract call arguments.
//!
//! The hex format is a compatibility contract with the settlement tooling:
//! lowercase ASCII, `0x` prefix, minimal width. Zero encodes as `0x0`,
//! never `0x00`.

use num_bigint::BigInt;
use smartswap_types::{CurrencyAmount, Percent};

/// Canonical hex encoding of a non-negative integer.
#[must_use]
pub fn to_hex(value: &BigInt) -> String {
    // BigInt's LowerHex is minimal-width lowercase; amounts reaching this
    // point are range-checked non-negative.
    format!("{:#x}", value)
}

/// Hex encoding of a currency amount's raw integer quotient.
#[must_use]
pub fn to_hex_amount(amount: &CurrencyAmount) -> String {
    to_hex(amount.raw())
}

/// Hex encoding of a plain machine integer (flags, parts, deadlines).
#[must_use]
pub fn to_hex_u64(value: u64) -> String {
    format!("{value:#x}")
}

/// Scales a ratio to a fixed-point integer at `decimals` places:
/// `floor(numerator * 10^decimals / denominator)`. Exact integer math for
/// any scale; the swap contract consumes ratios at 18 decimals.
#[must_use]
pub fn to_wei_base(percent: &Percent, decimals: u32) -> BigInt {
    let fraction = percent.as_fraction();
    let scaled = fraction.numerator() * BigInt::from(10u8).pow(decimals);
    scaled / fraction.denominator()
}

/// [`to_wei_base`] rendered as a decimal string.
#[must_use]
pub fn to_wei_base10(percent: &Percent, decimals: u32) -> String {
    to_wei_base(percent, decimals).to_string()
}

/// [`to_wei_base`] rendered as canonical hex.
#[must_use]
pub fn to_wei_base16(percent: &Percent, decimals: u32) -> String {
    to_hex(&to_wei_base(percent, decimals))
}
