//! Currency metadata: on-chain tokens and the chain's native asset.
//!
//! The SDK only consumes this metadata; resolving it (symbol lookups,
//! checksum validation, token lists) belongs to external collaborators.
//! Identity is structural: natives compare equal per chain, tokens compare
//! by `(chain_id, address)` exactly as stored.

use core::fmt;
use core::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// The chain's base asset. Has no contract address; call encoding
/// substitutes the zero-address sentinel for it.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct NativeCurrency {
    pub chain_id: u64,
    pub decimals: u8,
    pub symbol: Option<String>,
}

impl PartialEq for NativeCurrency {
    /// One native asset per chain; decimals and symbol are metadata.
    fn eq(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id
    }
}

impl Hash for NativeCurrency {
    /// Hashes exactly the identity fields `PartialEq` compares.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain_id.hash(state);
    }
}

/// An ERC-20 style token contract.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct Token {
    pub chain_id: u64,
    pub address: String,
    pub decimals: u8,
    pub symbol: Option<String>,
}

impl Token {
    pub fn new(chain_id: u64, address: impl Into<String>, decimals: u8) -> Self {
        Self {
            chain_id,
            address: address.into(),
            decimals,
            symbol: None,
        }
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }
}

impl PartialEq for Token {
    /// Token identity is chain + address; symbol and decimals are metadata.
    fn eq(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id && self.address == other.address
    }
}

impl Hash for Token {
    /// Hashes exactly the identity fields `PartialEq` compares.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain_id.hash(state);
        self.address.hash(state);
    }
}

/// Either the native asset or a token, discriminated at runtime.
///
/// Amount arithmetic checks this identity on every binary operation in
/// place of a compile-time currency parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    Native(NativeCurrency),
    Token(Token),
}

impl Currency {
    /// The chain's native asset with the conventional 18 decimals.
    pub fn native(chain_id: u64) -> Self {
        Self::Native(NativeCurrency {
            chain_id,
            decimals: 18,
            symbol: None,
        })
    }

    #[must_use]
    pub fn is_native(&self) -> bool {
        matches!(self, Self::Native(_))
    }

    #[must_use]
    pub fn chain_id(&self) -> u64 {
        match self {
            Self::Native(n) => n.chain_id,
            Self::Token(t) => t.chain_id,
        }
    }

    #[must_use]
    pub fn decimals(&self) -> u8 {
        match self {
            Self::Native(n) => n.decimals,
            Self::Token(t) => t.decimals,
        }
    }

    /// The contract address, or `None` for the native asset.
    #[must_use]
    pub fn address(&self) -> Option<&str> {
        match self {
            Self::Native(_) => None,
            Self::Token(t) => Some(&t.address),
        }
    }

    #[must_use]
    pub fn symbol(&self) -> Option<&str> {
        match self {
            Self::Native(n) => n.symbol.as_deref(),
            Self::Token(t) => t.symbol.as_deref(),
        }
    }
}

impl From<Token> for Currency {
    fn from(token: Token) -> Self {
        Self::Token(token)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native(n) => {
                write!(f, "{}@native:{}", n.symbol.as_deref().unwrap_or("NATIVE"), n.chain_id)
            }
            Self::Token(t) => write!(
                f,
                "{}@{}:{}",
                t.symbol.as_deref().unwrap_or("TOKEN"),
                t.address,
                t.chain_id
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR_1: &str = "0x0000000000000000000000000000000000000001";
    const ADDR_2: &str = "0x0000000000000000000000000000000000000002";

    #[test]
    fn token_identity_ignores_metadata() {
        let a = Token::new(10000, ADDR_1, 18).with_symbol("t0");
        let b = Token::new(10000, ADDR_1, 6);
        assert_eq!(a, b);
    }

    #[test]
    fn token_identity_respects_chain_and_address() {
        let a = Token::new(10000, ADDR_1, 18);
        assert_ne!(a, Token::new(10000, ADDR_2, 18));
        assert_ne!(a, Token::new(10001, ADDR_1, 18));
    }

    #[test]
    fn natives_equal_per_chain() {
        assert_eq!(Currency::native(10000), Currency::native(10000));
        assert_ne!(Currency::native(10000), Currency::native(10001));
    }

    #[test]
    fn native_identity_ignores_metadata() {
        let plain = Currency::native(10000);
        let labelled = Currency::Native(NativeCurrency {
            chain_id: 10000,
            decimals: 18,
            symbol: Some("BCH".to_string()),
        });
        assert_eq!(plain, labelled);
    }

    #[test]
    fn equal_currencies_hash_equal() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(Currency::from(Token::new(10000, ADDR_1, 18).with_symbol("t0")));
        set.insert(Currency::native(10000));

        // Metadata-differing twins of both entries must still be found.
        assert!(set.contains(&Currency::from(Token::new(10000, ADDR_1, 6))));
        assert!(set.contains(&Currency::Native(NativeCurrency {
            chain_id: 10000,
            decimals: 18,
            symbol: Some("BCH".to_string()),
        })));
        assert!(!set.contains(&Currency::from(Token::new(10000, ADDR_2, 18))));
    }

    #[test]
    fn native_never_equals_token() {
        let token = Currency::from(Token::new(10000, ADDR_1, 18));
        assert_ne!(Currency::native(10000), token);
    }

    #[test]
    fn accessors() {
        let native = Currency::native(10000);
        assert!(native.is_native());
        assert_eq!(native.decimals(), 18);
        assert_eq!(native.address(), None);

        let token = Currency::from(Token::new(10000, ADDR_1, 6).with_symbol("USDC"));
        assert!(!token.is_native());
        assert_eq!(token.decimals(), 6);
        assert_eq!(token.address(), Some(ADDR_1));
        assert_eq!(token.symbol(), Some("USDC"));
    }

    #[test]
    fn serde_round_trip() {
        let token = Currency::from(Token::new(10000, ADDR_1, 18).with_symbol("t0"));
        let json = serde_json::to_string(&token).unwrap();
        let back: Currency = serde_json::from_str(&json).unwrap();
        assert_eq!(token, back);
    }
}
