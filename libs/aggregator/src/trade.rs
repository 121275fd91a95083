//! Trade quotes and worst-case execution bounds.

use num_bigint::BigInt;
use num_traits::One;
use smartswap_types::{CurrencyAmount, Fraction, Percent, Price};
use tracing::debug;

use crate::error::AggregatorError;

/// A quoted trade against the aggregator: an input amount, the output the
/// routing engine expects for it, and the routing metadata the settlement
/// contract needs to reproduce that route.
///
/// Everything is fixed at construction. The execution price is derived once
/// from the two amounts and cached; it is a computed view, never settable.
/// The quote does not account for other trades moving the price first;
/// that is exactly what the slippage tolerance bound is for.
#[derive(Debug, Clone)]
#[must_use]
pub struct TradeQuote {
    input_amount: CurrencyAmount,
    output_amount: CurrencyAmount,
    execution_price: Price,
    distribution: Vec<String>,
    flags: u64,
}

impl TradeQuote {
    /// Builds a quote from already-routed amounts.
    ///
    /// Fails with [`AggregatorError::EtherInOut`] when both sides are the
    /// chain's native asset, which the aggregator contract cannot settle.
    pub fn new(
        input_amount: CurrencyAmount,
        output_amount: CurrencyAmount,
        distribution: Vec<String>,
        flags: u64,
    ) -> Result<Self, AggregatorError> {
        if input_amount.currency().is_native() && output_amount.currency().is_native() {
            return Err(AggregatorError::EtherInOut);
        }
        let execution_price = Price::new(
            input_amount.currency().clone(),
            output_amount.currency().clone(),
            input_amount.raw().clone(),
            output_amount.raw().clone(),
        )?;
        Ok(Self {
            input_amount,
            output_amount,
            execution_price,
            distribution,
            flags,
        })
    }

    #[must_use]
    pub fn input_amount(&self) -> &CurrencyAmount {
        &self.input_amount
    }

    #[must_use]
    pub fn output_amount(&self) -> &CurrencyAmount {
        &self.output_amount
    }

    /// Output per input, derived at construction.
    #[must_use]
    pub fn execution_price(&self) -> &Price {
        &self.execution_price
    }

    /// Per-route allocation vector, passed through to the contract untouched.
    #[must_use]
    pub fn distribution(&self) -> &[String] {
        &self.distribution
    }

    /// Routing/execution bitmask, passed through to the contract untouched.
    #[must_use]
    pub fn flags(&self) -> u64 {
        self.flags
    }

    fn validate_adjustments(
        slippage_tolerance: &Percent,
        fee_percent: &Percent,
    ) -> Result<(), AggregatorError> {
        // Order matters for observable behavior: slippage first, then fee.
        if slippage_tolerance.is_negative() {
            return Err(AggregatorError::InvalidSlippageTolerance);
        }
        if fee_percent.is_negative() {
            return Err(AggregatorError::InvalidFeePercent);
        }
        Ok(())
    }

    /// The least output the trade may settle for under the given tolerance
    /// and fee.
    ///
    /// The protocol fee is deducted first, then the slippage buffer, each as
    /// a separate `floor(amount * 1/(1+p))` stage. Two flooring steps, not
    /// one combined fraction: the on-chain deduction happens in two stages
    /// and the bound must match it to the unit. With both ratios zero the
    /// identity multiplication reproduces the output amount exactly.
    pub fn minimum_amount_out(
        &self,
        slippage_tolerance: &Percent,
        fee_percent: &Percent,
    ) -> Result<CurrencyAmount, AggregatorError> {
        Self::validate_adjustments(slippage_tolerance, fee_percent)?;

        let one = Fraction::from_integer(BigInt::one());
        let fee_divisor = one.add(fee_percent.as_fraction()).invert()?;
        let fee_adjusted = self.output_amount.mul_fraction(&fee_divisor)?;

        let slippage_divisor = one.add(slippage_tolerance.as_fraction()).invert()?;
        let minimum = fee_adjusted.mul_fraction(&slippage_divisor)?;

        debug!(
            output = %self.output_amount.raw(),
            fee_adjusted = %fee_adjusted.raw(),
            minimum = %minimum.raw(),
            "computed minimum amount out"
        );
        Ok(minimum)
    }

    /// The most input the trade may spend.
    ///
    /// The aggregator's accounting treats the input side as fixed once
    /// quoted; both adjustments are absorbed on the output side, so this
    /// validates its arguments for parity with [`Self::minimum_amount_out`]
    /// and returns the input amount unchanged. Downstream encoding depends
    /// on this exact value.
    pub fn maximum_amount_in(
        &self,
        slippage_tolerance: &Percent,
        fee_percent: &Percent,
    ) -> Result<CurrencyAmount, AggregatorError> {
        Self::validate_adjustments(slippage_tolerance, fee_percent)?;
        Ok(self.input_amount.clone())
    }

    /// Execution price in the worst case the bounds still allow: maximum
    /// input against minimum output.
    pub fn worst_execution_price(
        &self,
        slippage_tolerance: &Percent,
        fee_percent: &Percent,
    ) -> Result<Price, AggregatorError> {
        let max_in = self.maximum_amount_in(slippage_tolerance, fee_percent)?;
        let min_out = self.minimum_amount_out(slippage_tolerance, fee_percent)?;
        Ok(Price::new(
            self.input_amount.currency().clone(),
            self.output_amount.currency().clone(),
            max_in.raw().clone(),
            min_out.raw().clone(),
        )?)
    }
}
