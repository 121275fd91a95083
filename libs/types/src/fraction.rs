//! Arbitrary-precision signed rational arithmetic.
//!
//! `Fraction` is the foundation of every monetary computation in the SDK.
//! Values are stored as a numerator/denominator pair of [`BigInt`]s and are
//! deliberately **not** reduced to lowest terms: intermediate results stay
//! unreduced, so equality and ordering always cross-multiply instead of
//! assuming canonical form. All operations are exact integer math; there is
//! no floating point anywhere on this path.
//!
//! Rounding is explicit and single-direction: [`Fraction::quotient`] and
//! [`Fraction::to_fixed`] truncate toward zero. There is no round-to-nearest.

use core::cmp::Ordering;
use core::fmt;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use serde::Serialize;

use crate::error::TypesError;

/// An immutable rational number with arbitrary-precision integer parts.
///
/// Invariants maintained by every constructor and operation:
/// - the denominator is non-zero;
/// - the denominator is positive (the sign lives in the numerator), which
///   keeps cross-multiplied comparison valid.
///
/// The pair is never reduced by GCD.
#[derive(Debug, Clone, Serialize)]
#[must_use]
pub struct Fraction {
    numerator: BigInt,
    denominator: BigInt,
}

impl Fraction {
    /// Creates a fraction from a numerator and denominator.
    ///
    /// Fails with [`TypesError::ZeroDenominator`] when `denominator` is zero.
    pub fn new(
        numerator: impl Into<BigInt>,
        denominator: impl Into<BigInt>,
    ) -> Result<Self, TypesError> {
        let numerator = numerator.into();
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(TypesError::ZeroDenominator);
        }
        Ok(Self::normalized(numerator, denominator))
    }

    /// Creates a whole-number fraction with denominator 1.
    pub fn from_integer(numerator: impl Into<BigInt>) -> Self {
        Self {
            numerator: numerator.into(),
            denominator: BigInt::one(),
        }
    }

    /// Moves the denominator's sign into the numerator. The denominator is
    /// known non-zero at every call site.
    fn normalized(numerator: BigInt, denominator: BigInt) -> Self {
        if denominator.is_negative() {
            Self {
                numerator: -numerator,
                denominator: -denominator,
            }
        } else {
            Self {
                numerator,
                denominator,
            }
        }
    }

    /// The (possibly negative) numerator.
    #[must_use]
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    /// The (always positive) denominator.
    #[must_use]
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// Returns `true` if the value is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Returns `true` if the value is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    /// Exact sum. The result is unreduced.
    pub fn add(&self, other: &Self) -> Self {
        Self::normalized(
            &self.numerator * &other.denominator + &other.numerator * &self.denominator,
            &self.denominator * &other.denominator,
        )
    }

    /// Exact difference. The result is unreduced.
    pub fn sub(&self, other: &Self) -> Self {
        Self::normalized(
            &self.numerator * &other.denominator - &other.numerator * &self.denominator,
            &self.denominator * &other.denominator,
        )
    }

    /// Exact product. The result is unreduced.
    pub fn mul(&self, other: &Self) -> Self {
        Self::normalized(
            &self.numerator * &other.numerator,
            &self.denominator * &other.denominator,
        )
    }

    /// Exact quotient of two fractions.
    ///
    /// Fails with [`TypesError::DivisionByZero`] when `other` is zero.
    pub fn div(&self, other: &Self) -> Result<Self, TypesError> {
        if other.numerator.is_zero() {
            return Err(TypesError::DivisionByZero);
        }
        Ok(Self::normalized(
            &self.numerator * &other.denominator,
            &self.denominator * &other.numerator,
        ))
    }

    /// Swaps numerator and denominator.
    ///
    /// Fails with [`TypesError::InvertZero`] when the numerator is zero,
    /// since the result would have a zero denominator.
    pub fn invert(&self) -> Result<Self, TypesError> {
        if self.numerator.is_zero() {
            return Err(TypesError::InvertZero);
        }
        Ok(Self::normalized(
            self.denominator.clone(),
            self.numerator.clone(),
        ))
    }

    /// Integer part of the value, truncated toward zero.
    ///
    /// This is the single rounding policy used for on-chain raw amounts.
    #[must_use]
    pub fn quotient(&self) -> BigInt {
        &self.numerator / &self.denominator
    }

    /// Fractional remainder after [`Fraction::quotient`], as a fraction over
    /// the same denominator.
    pub fn remainder(&self) -> Self {
        Self {
            numerator: &self.numerator % &self.denominator,
            denominator: self.denominator.clone(),
        }
    }

    /// Renders the value as a decimal string with exactly `places` digits
    /// after the point, truncating toward zero. Pure integer math.
    #[must_use]
    pub fn to_fixed(&self, places: usize) -> String {
        let scale = BigInt::from(10u8).pow(places as u32);
        let scaled = (self.numerator.magnitude() * scale.magnitude()) / self.denominator.magnitude();
        let scaled = BigInt::from(scaled);
        let (int_part, frac_part) = scaled.div_rem(&scale);
        let sign = if self.numerator.is_negative() && !scaled.is_zero() {
            "-"
        } else {
            ""
        };
        if places == 0 {
            format!("{sign}{int_part}")
        } else {
            format!("{sign}{int_part}.{frac:0>width$}", frac = frac_part, width = places)
        }
    }

    /// Cross-multiplied strict ordering: `self < other`.
    #[must_use]
    pub fn less_than(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Less
    }

    /// Cross-multiplied strict ordering: `self > other`.
    #[must_use]
    pub fn greater_than(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Greater
    }

    /// Cross-multiplied equality; `1/2 == 2/4` even though neither side is
    /// reduced.
    #[must_use]
    pub fn equal_to(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        // Denominators are positive, so cross-multiplication preserves order.
        &self.numerator * &other.denominator == &other.numerator * &self.denominator
    }
}

impl Eq for Fraction {}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }
}

impl From<BigInt> for Fraction {
    fn from(numerator: BigInt) -> Self {
        Self::from_integer(numerator)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::new(n, d).unwrap()
    }

    #[test]
    fn zero_denominator_rejected() {
        assert_eq!(Fraction::new(1, 0).unwrap_err(), TypesError::ZeroDenominator);
    }

    #[test]
    fn from_integer_has_unit_denominator() {
        let f = Fraction::from_integer(7);
        assert_eq!(f.numerator(), &BigInt::from(7));
        assert_eq!(f.denominator(), &BigInt::from(1));
    }

    #[test]
    fn negative_denominator_sign_moves_to_numerator() {
        let f = frac(1, -2);
        assert_eq!(f.numerator(), &BigInt::from(-1));
        assert_eq!(f.denominator(), &BigInt::from(2));
        assert!(f.is_negative());
    }

    #[test]
    fn unreduced_equality_cross_multiplies() {
        assert_eq!(frac(1, 2), frac(2, 4));
        assert_eq!(frac(-3, 9), frac(-1, 3));
        assert_ne!(frac(1, 2), frac(2, 3));
    }

    #[test]
    fn add_keeps_exact_value() {
        let sum = frac(1, 2).add(&frac(1, 3));
        assert_eq!(sum, frac(5, 6));
        // Unreduced: 1/2 + 2/4 stays as 8/8, not 1/1 canonical form.
        let sum = frac(1, 2).add(&frac(2, 4));
        assert_eq!(sum.numerator(), &BigInt::from(8));
        assert_eq!(sum.denominator(), &BigInt::from(8));
        assert_eq!(sum, Fraction::from_integer(1));
    }

    #[test]
    fn sub_crosses_zero() {
        assert_eq!(frac(1, 3).sub(&frac(1, 2)), frac(-1, 6));
    }

    #[test]
    fn mul_and_div_are_inverse() {
        let a = frac(3, 7);
        let b = frac(5, 11);
        assert_eq!(a.mul(&b).div(&b).unwrap(), a);
    }

    #[test]
    fn div_by_zero_fraction_fails() {
        assert_eq!(
            frac(1, 2).div(&frac(0, 5)).unwrap_err(),
            TypesError::DivisionByZero
        );
    }

    #[test]
    fn invert_zero_fails() {
        assert_eq!(frac(0, 5).invert().unwrap_err(), TypesError::InvertZero);
    }

    #[test]
    fn invert_negative_keeps_positive_denominator() {
        let inv = frac(-2, 3).invert().unwrap();
        assert_eq!(inv, frac(-3, 2));
        assert!(inv.denominator() > &BigInt::from(0));
    }

    #[test]
    fn quotient_truncates_toward_zero() {
        assert_eq!(frac(7, 2).quotient(), BigInt::from(3));
        assert_eq!(frac(-7, 2).quotient(), BigInt::from(-3));
        assert_eq!(frac(1, 2).quotient(), BigInt::from(0));
    }

    #[test]
    fn remainder_plus_quotient_reconstructs() {
        let f = frac(7, 3);
        let rebuilt = Fraction::from_integer(f.quotient()).add(&f.remainder());
        assert_eq!(rebuilt, f);
    }

    #[test]
    fn to_fixed_truncates() {
        assert_eq!(frac(1, 3).to_fixed(4), "0.3333");
        assert_eq!(frac(2, 3).to_fixed(4), "0.6666");
        assert_eq!(frac(5, 2).to_fixed(2), "2.50");
        assert_eq!(frac(5, 2).to_fixed(0), "2");
        assert_eq!(frac(-1, 8).to_fixed(3), "-0.125");
    }

    #[test]
    fn to_fixed_tiny_negative_truncates_to_zero() {
        // -1/3000 at 3 places truncates to magnitude zero, rendered unsigned.
        assert_eq!(frac(-1, 3000).to_fixed(3), "0.000");
    }

    #[test]
    fn ordering_is_sign_aware() {
        assert!(frac(-1, 2).less_than(&frac(1, 3)));
        assert!(frac(1, 2).greater_than(&frac(1, 3)));
        assert!(frac(2, 4).equal_to(&frac(1, 2)));
        // The sign-normalized denominator keeps this correct.
        assert!(frac(1, -2).less_than(&frac(0, 1)));
    }

    proptest! {
        #[test]
        fn invert_twice_is_identity(n in 1i64..=1_000_000, d in 1i64..=1_000_000) {
            let f = frac(n, d);
            let back = f.invert().unwrap().invert().unwrap();
            prop_assert!(back.equal_to(&f));
        }

        #[test]
        fn add_then_sub_round_trips(
            an in -1_000i64..=1_000, ad in 1i64..=1_000,
            bn in -1_000i64..=1_000, bd in 1i64..=1_000,
        ) {
            let a = frac(an, ad);
            let b = frac(bn, bd);
            prop_assert!(a.add(&b).sub(&b).equal_to(&a));
        }
    }
}
