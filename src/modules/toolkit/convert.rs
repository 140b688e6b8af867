//! Amount and price conversion between native and universal precision

use std::str::FromStr;

use alloy_primitives::U256;
use anyhow::{Context, Result};

use super::ToolResult;
use crate::domain::decimals::{self, UNIVERSAL_DECIMALS};
use crate::domain::Market;

/// Which way a price is converted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceDirection {
    ToUniversal,
    FromUniversal,
}

/// Human-readable amount to native and universal integers
pub fn to_universal(value: &str, native_decimals: u8) -> Result<ToolResult> {
    let value = value.trim();
    let native = decimals::parse_native_amount(value, native_decimals)
        .with_context(|| format!("parse '{}' with {} decimals", value, native_decimals))?;
    let universal = decimals::to_universal_amount(native, native_decimals)?;

    Ok(ToolResult::new("To universal")
        .add("input", value)
        .add("decimals", native_decimals.to_string())
        .add("native", native.to_string())
        .add("universal", universal.to_string()))
}

/// Universal integer back to native integer and human-readable amount
pub fn from_universal(raw: &str, native_decimals: u8) -> Result<ToolResult> {
    let universal = parse_raw(raw)?;
    let native = decimals::from_universal_amount(universal, native_decimals)?;
    let formatted = decimals::format_native_amount(native, native_decimals)?;

    let mut result = ToolResult::new("From universal")
        .add("universal", universal.to_string())
        .add("decimals", native_decimals.to_string())
        .add("native", native.to_string())
        .add("amount", formatted);

    // Precision dropped on the way down is worth surfacing
    let restored = decimals::to_universal_amount(native, native_decimals)?;
    if restored != universal {
        result = result.add("dust", (universal - restored).to_string());
    }
    Ok(result)
}

/// Rescale a quote-per-base price for a market
pub fn price(raw: &str, market: Market, direction: PriceDirection) -> Result<ToolResult> {
    let input = parse_raw(raw)?;
    let (native, universal) = match direction {
        PriceDirection::ToUniversal => (input, market.price_to_universal(input)?),
        PriceDirection::FromUniversal => (market.price_from_universal(input)?, input),
    };
    let human = decimals::format_native_amount(native, market.quote_decimals)?;

    Ok(ToolResult::new("Price")
        .add("base decimals", market.base_decimals.to_string())
        .add("quote decimals", market.quote_decimals.to_string())
        .add("native", native.to_string())
        .add(format!("universal ({})", UNIVERSAL_DECIMALS), universal.to_string())
        .add("quote per base", human))
}

/// Parse a raw integer, decimal or 0x-prefixed hex
fn parse_raw(raw: &str) -> Result<U256> {
    let raw = raw.trim().replace('_', "");
    U256::from_str(&raw).with_context(|| format!("invalid integer: {}", raw))
}
