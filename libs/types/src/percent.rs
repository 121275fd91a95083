//! Ratio-typed wrapper over [`Fraction`].

use core::fmt;

use num_bigint::BigInt;
use serde::Serialize;

use crate::error::TypesError;
use crate::fraction::Fraction;

/// A parts-per-whole ratio such as a slippage tolerance or a protocol fee.
///
/// `Percent` carries exactly the numerator/denominator the caller supplied
/// (5% is `Percent::new(5, 100)`, 30 bps is `Percent::new(30, 10_000)`); it
/// is never pre-scaled. Arithmetic stays within `Percent` so ratio values do
/// not silently decay into bare fractions. Negative values are
/// representable; operations that consume a tolerance or fee reject them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[must_use]
pub struct Percent(Fraction);

impl Percent {
    /// Creates a percent from a numerator/denominator pair.
    pub fn new(
        numerator: impl Into<BigInt>,
        denominator: impl Into<BigInt>,
    ) -> Result<Self, TypesError> {
        Ok(Self(Fraction::new(numerator, denominator)?))
    }

    /// A zero ratio.
    pub fn zero() -> Self {
        Self(Fraction::from_integer(0))
    }

    /// The underlying fraction.
    #[must_use]
    pub fn as_fraction(&self) -> &Fraction {
        &self.0
    }

    /// Ratio addition, staying within `Percent`.
    pub fn add(&self, other: &Self) -> Self {
        Self(self.0.add(&other.0))
    }

    /// Ratio subtraction, staying within `Percent`.
    pub fn sub(&self, other: &Self) -> Self {
        Self(self.0.sub(&other.0))
    }

    /// Returns `true` if the ratio is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Cross-multiplied comparison, delegating to [`Fraction`].
    #[must_use]
    pub fn less_than(&self, other: &Self) -> bool {
        self.0.less_than(&other.0)
    }

    /// Cross-multiplied comparison, delegating to [`Fraction`].
    #[must_use]
    pub fn greater_than(&self, other: &Self) -> bool {
        self.0.greater_than(&other.0)
    }

    /// Cross-multiplied equality, delegating to [`Fraction`].
    #[must_use]
    pub fn equal_to(&self, other: &Self) -> bool {
        self.0.equal_to(&other.0)
    }
}

impl From<Fraction> for Percent {
    fn from(fraction: Fraction) -> Self {
        Self(fraction)
    }
}

impl fmt::Display for Percent {
    /// Renders the ratio scaled to a human percentage, e.g. `5/100` as "5".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scaled = self.0.mul(&Fraction::from_integer(100));
        write!(f, "{}", scaled.to_fixed(2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pct(n: i64, d: i64) -> Percent {
        Percent::new(n, d).unwrap()
    }

    #[test]
    fn add_returns_percent() {
        let sum = pct(1, 100).add(&pct(2, 100));
        assert!(sum.equal_to(&pct(3, 100)));
    }

    #[test]
    fn sub_can_go_negative() {
        let diff = pct(1, 100).sub(&pct(3, 100));
        assert!(diff.is_negative());
        assert!(diff.equal_to(&pct(-2, 100)));
    }

    #[test]
    fn comparisons_cross_multiply() {
        // 5/100 == 500/10000 despite different denominators.
        assert!(pct(5, 100).equal_to(&pct(500, 10_000)));
        assert!(pct(1, 100).less_than(&pct(30, 1_000)));
        assert!(pct(5, 100).greater_than(&pct(1, 100)));
    }

    #[test]
    fn zero_is_not_negative() {
        assert!(!Percent::zero().is_negative());
        assert!(pct(-1, 100).is_negative());
    }

    #[test]
    fn display_scales_to_percentage() {
        assert_eq!(pct(5, 100).to_string(), "5.00");
        assert_eq!(pct(30, 10_000).to_string(), "0.30");
    }
}
