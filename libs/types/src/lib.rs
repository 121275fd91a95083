//! # SmartSwap Types - Exact-Arithmetic Value Layer
//!
//! Foundation crate for the SmartSwap SDK: arbitrary-precision rational
//! numbers and the currency-aware value types built on top of them. Every
//! monetary quantity in the SDK flows through these types, so the layer has
//! one job above all others: never lose precision. All amounts are integer
//! denominated on-chain and any rounding error here is real money.
//!
//! ## Design Principles
//!
//! - **No floating point**: every operation is exact integer math on
//!   [`num_bigint::BigInt`].
//! - **Explicit rounding**: the only rounding policy is truncation toward
//!   zero, exposed as [`Fraction::quotient`]; there is no round-to-nearest.
//! - **Unreduced fractions**: intermediate values are never reduced to
//!   lowest terms, so equality and ordering always cross-multiply.
//! - **Immutable value types**: every operation returns a new value; nothing
//!   here carries shared mutable state, so all types are freely usable
//!   across threads.
//!
//! ## Layering
//!
//! ```text
//! Fraction ──► Percent
//!     │
//!     ├──────► CurrencyAmount ──► (smartswap-aggregator) TradeQuote
//!     └──────► Price
//! ```

pub mod currency;
pub mod currency_amount;
pub mod error;
pub mod fraction;
pub mod percent;
pub mod price;

pub use currency::{Currency, NativeCurrency, Token};
pub use currency_amount::CurrencyAmount;
pub use error::TypesError;
pub use fraction::Fraction;
pub use percent::Percent;
pub use price::Price;
