//! Exchange rates between two currencies.

use core::fmt;

use num_bigint::BigInt;
use num_traits::Zero;
use serde::Serialize;

use crate::currency::Currency;
use crate::error::TypesError;
use crate::fraction::Fraction;

/// A quote-per-base exchange rate.
///
/// Constructed from raw on-chain amounts; the stored scalar is already
/// adjusted by each side's decimal scale,
/// `scalar = (quote_raw * 10^base_decimals) / (base_raw * 10^quote_decimals)`,
/// so it reads as the human price of one whole base unit in whole quote
/// units. The fraction stays unreduced like everything else in this crate.
#[derive(Debug, Clone, Serialize)]
#[must_use]
pub struct Price {
    base_currency: Currency,
    quote_currency: Currency,
    scalar: Fraction,
}

impl Price {
    /// Creates a price from raw base and quote amounts.
    ///
    /// Fails with [`TypesError::ZeroBaseAmount`] when `base_raw` is zero; a
    /// rate against nothing is meaningless.
    pub fn new(
        base_currency: Currency,
        quote_currency: Currency,
        base_raw: impl Into<BigInt>,
        quote_raw: impl Into<BigInt>,
    ) -> Result<Self, TypesError> {
        let base_raw = base_raw.into();
        let quote_raw = quote_raw.into();
        if base_raw.is_zero() {
            return Err(TypesError::ZeroBaseAmount);
        }
        let base_scale = BigInt::from(10u8).pow(u32::from(base_currency.decimals()));
        let quote_scale = BigInt::from(10u8).pow(u32::from(quote_currency.decimals()));
        let scalar = Fraction::new(quote_raw * base_scale, base_raw * quote_scale)?;
        Ok(Self {
            base_currency,
            quote_currency,
            scalar,
        })
    }

    #[must_use]
    pub fn base_currency(&self) -> &Currency {
        &self.base_currency
    }

    #[must_use]
    pub fn quote_currency(&self) -> &Currency {
        &self.quote_currency
    }

    /// The decimal-adjusted rate as an exact fraction.
    #[must_use]
    pub fn as_fraction(&self) -> &Fraction {
        &self.scalar
    }

    /// Swaps base and quote.
    ///
    /// Fails with [`TypesError::InvertZero`] when the rate is zero (a zero
    /// quote amount cannot be a denominator).
    pub fn invert(&self) -> Result<Self, TypesError> {
        Ok(Self {
            base_currency: self.quote_currency.clone(),
            quote_currency: self.base_currency.clone(),
            scalar: self.scalar.invert()?,
        })
    }

    /// Chains two rates: `A/B * B/C = A-priced-in-C`.
    ///
    /// Fails with [`TypesError::CurrencyMismatch`] unless this price's quote
    /// currency is the other price's base currency.
    pub fn mul(&self, other: &Self) -> Result<Self, TypesError> {
        if self.quote_currency != other.base_currency {
            return Err(TypesError::CurrencyMismatch {
                left: self.quote_currency.to_string(),
                right: other.base_currency.to_string(),
            });
        }
        Ok(Self {
            base_currency: self.base_currency.clone(),
            quote_currency: other.quote_currency.clone(),
            scalar: self.scalar.mul(&other.scalar),
        })
    }

    /// Renders the rate with `places` decimal digits, truncating.
    #[must_use]
    pub fn to_fixed(&self, places: usize) -> String {
        self.scalar.to_fixed(places)
    }
}

impl PartialEq for Price {
    fn eq(&self, other: &Self) -> bool {
        self.base_currency == other.base_currency
            && self.quote_currency == other.quote_currency
            && self.scalar == other.scalar
    }
}

impl Eq for Price {}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} per {}",
            self.to_fixed(6),
            self.quote_currency,
            self.base_currency
        )
    }
}
