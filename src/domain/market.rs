//! Base/quote precision pair for a single order book

use alloy_primitives::U256;

use super::decimals::{self, DecimalsError};

/// Decimal precision of a market's base and quote tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Market {
    pub base_decimals: u8,
    pub quote_decimals: u8,
}

impl Market {
    pub fn new(base_decimals: u8, quote_decimals: u8) -> Self {
        Self {
            base_decimals,
            quote_decimals,
        }
    }

    pub fn base_to_universal(&self, amount: U256) -> Result<U256, DecimalsError> {
        decimals::to_universal_amount(amount, self.base_decimals)
    }

    pub fn base_from_universal(&self, amount: U256) -> Result<U256, DecimalsError> {
        decimals::from_universal_amount(amount, self.base_decimals)
    }

    pub fn quote_to_universal(&self, amount: U256) -> Result<U256, DecimalsError> {
        decimals::to_universal_amount(amount, self.quote_decimals)
    }

    pub fn quote_from_universal(&self, amount: U256) -> Result<U256, DecimalsError> {
        decimals::from_universal_amount(amount, self.quote_decimals)
    }

    /// Quote-per-base price in universal precision
    pub fn price_to_universal(&self, price: U256) -> Result<U256, DecimalsError> {
        decimals::to_universal_price(price, self.base_decimals, self.quote_decimals)
    }

    pub fn price_from_universal(&self, price: U256) -> Result<U256, DecimalsError> {
        decimals::from_universal_price(price, self.base_decimals, self.quote_decimals)
    }
}
