//! An integer raw amount bound to a currency's decimal scale.

use core::fmt;

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::currency::Currency;
use crate::error::TypesError;
use crate::fraction::Fraction;

/// Largest raw amount the settlement contract can accept (Solidity uint256).
static UINT256_MAX: Lazy<BigInt> = Lazy::new(|| (BigInt::one() << 256u32) - 1);

/// A quantity of a specific currency, stored as the raw integer amount in
/// the currency's smallest indivisible unit.
///
/// Construction range-checks the raw value against `[0, 2^256 - 1]`; every
/// arithmetic result goes back through that check. Scalar multiplication and
/// division by a dimensionless [`Fraction`] floor the result to an integer
/// raw quotient, so no sub-unit dust is ever carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[must_use]
pub struct CurrencyAmount {
    currency: Currency,
    raw: BigInt,
}

impl CurrencyAmount {
    /// Creates an amount from a raw integer quantity.
    ///
    /// Fails with [`TypesError::AmountOverflow`] when the value is negative
    /// or exceeds the uint256 maximum.
    pub fn from_raw_amount(
        currency: Currency,
        raw: impl Into<BigInt>,
    ) -> Result<Self, TypesError> {
        let raw = raw.into();
        if raw.is_negative() || raw > *UINT256_MAX {
            return Err(TypesError::AmountOverflow {
                value: raw.to_string(),
            });
        }
        Ok(Self { currency, raw })
    }

    /// Parses a human-readable decimal string such as `"1.5"`, scales it by
    /// `10^decimals` and floors to the raw integer amount.
    pub fn from_decimal_str(currency: Currency, input: &str) -> Result<Self, TypesError> {
        let invalid = || TypesError::InvalidDecimalString {
            input: input.to_string(),
        };

        let (whole, frac) = match input.split_once('.') {
            Some((w, f)) => (w, f),
            None => (input, ""),
        };
        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        let whole_ok = whole.is_empty() || whole.chars().all(|c| c.is_ascii_digit());
        let frac_ok = frac.chars().all(|c| c.is_ascii_digit());
        if !whole_ok || !frac_ok {
            return Err(invalid());
        }

        let decimals = currency.decimals() as usize;
        // Scale the fractional digits to exactly `decimals` places, dropping
        // (flooring away) anything beyond the currency's resolution.
        let frac = if frac.len() > decimals {
            &frac[..decimals]
        } else {
            frac
        };
        let mut digits = String::with_capacity(whole.len() + decimals);
        digits.push_str(whole);
        digits.push_str(frac);
        for _ in frac.len()..decimals {
            digits.push('0');
        }
        if digits.is_empty() {
            digits.push('0');
        }
        let raw: BigInt = digits.parse().map_err(|_| invalid())?;
        Self::from_raw_amount(currency, raw)
    }

    /// The currency this amount is denominated in.
    #[must_use]
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// The raw integer amount.
    #[must_use]
    pub fn raw(&self) -> &BigInt {
        &self.raw
    }

    /// Returns `true` if the raw amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    /// The amount as an exact fraction of whole currency units
    /// (`raw / 10^decimals`).
    pub fn as_fraction(&self) -> Fraction {
        // The scale is a positive power of ten, never zero.
        Fraction::new(self.raw.clone(), self.decimal_scale())
            .expect("10^decimals is non-zero")
    }

    fn decimal_scale(&self) -> BigInt {
        BigInt::from(10u8).pow(u32::from(self.currency.decimals()))
    }

    fn require_same_currency(&self, other: &Self) -> Result<(), TypesError> {
        if self.currency != other.currency {
            return Err(TypesError::CurrencyMismatch {
                left: self.currency.to_string(),
                right: other.currency.to_string(),
            });
        }
        Ok(())
    }

    /// Adds two amounts of the identical currency.
    pub fn add(&self, other: &Self) -> Result<Self, TypesError> {
        self.require_same_currency(other)?;
        Self::from_raw_amount(self.currency.clone(), &self.raw + &other.raw)
    }

    /// Subtracts an amount of the identical currency.
    pub fn sub(&self, other: &Self) -> Result<Self, TypesError> {
        self.require_same_currency(other)?;
        Self::from_raw_amount(self.currency.clone(), &self.raw - &other.raw)
    }

    /// Scales by a dimensionless fraction, flooring to an integer raw amount.
    pub fn mul_fraction(&self, fraction: &Fraction) -> Result<Self, TypesError> {
        let scaled = Fraction::from_integer(self.raw.clone()).mul(fraction);
        Self::from_raw_amount(self.currency.clone(), scaled.quotient())
    }

    /// Divides by a dimensionless fraction, flooring to an integer raw amount.
    pub fn div_fraction(&self, fraction: &Fraction) -> Result<Self, TypesError> {
        let scaled = Fraction::from_integer(self.raw.clone()).div(fraction)?;
        Self::from_raw_amount(self.currency.clone(), scaled.quotient())
    }

    /// Renders the amount in whole currency units, truncating, with
    /// insignificant trailing zeros removed.
    #[must_use]
    pub fn to_exact(&self) -> String {
        let decimals = usize::from(self.currency.decimals());
        let fixed = self.as_fraction().to_fixed(decimals);
        if decimals == 0 {
            return fixed;
        }
        let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
        trimmed.to_string()
    }
}

impl fmt::Display for CurrencyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.to_exact(), self.currency)
    }
}
