//! Decimal conversion between native token precision and the 18-decimal
//! universal precision used by the CLOB contract.
//!
//! Amounts and prices are rescaled by exact powers of ten. Down-scaling
//! truncates toward zero, matching `CLOB._convertToUniversal` and friends
//! on-chain, so a round trip through a token with more than 18 decimals
//! drops the remainder.

use std::cmp::Ordering;

use alloy_primitives::utils::{format_units, parse_units, ParseUnits, UnitsError};
use alloy_primitives::U256;
use thiserror::Error;

/// Universal decimal standard used by the CLOB contract
pub const UNIVERSAL_DECIMALS: u8 = 18;

/// Errors produced while scaling, parsing or formatting amounts
#[derive(Debug, Error)]
pub enum DecimalsError {
    /// Up-scaling left the `uint256` range
    #[error("{value} scaled by 10^{exponent} overflows uint256")]
    Overflow { value: U256, exponent: u8 },

    /// Native amounts are unsigned
    #[error("negative amount: {0}")]
    Negative(String),

    /// More significant fractional digits than the token can hold
    #[error("{value} has more than {decimals} significant fractional digits")]
    ExcessPrecision { value: String, decimals: u8 },

    /// Parse/format failure from the units helpers
    #[error(transparent)]
    Units(#[from] UnitsError),
}

/// Convert amount from native decimals to universal 18-decimal format
pub fn to_universal_amount(amount: U256, native_decimals: u8) -> Result<U256, DecimalsError> {
    rescale(amount, native_decimals, UNIVERSAL_DECIMALS)
}

/// Convert amount from universal 18-decimal format back to native decimals
pub fn from_universal_amount(
    universal_amount: U256,
    native_decimals: u8,
) -> Result<U256, DecimalsError> {
    rescale(universal_amount, UNIVERSAL_DECIMALS, native_decimals)
}

/// Convert a price (quote units per 1 base unit) to universal format.
///
/// Only the quote side carries precision in a price, so `base_decimals` is
/// accepted for call-site symmetry and does not affect the result.
pub fn to_universal_price(
    native_price: U256,
    _base_decimals: u8,
    quote_decimals: u8,
) -> Result<U256, DecimalsError> {
    rescale(native_price, quote_decimals, UNIVERSAL_DECIMALS)
}

/// Convert a price from universal format back to the quote token's precision
pub fn from_universal_price(
    universal_price: U256,
    _base_decimals: u8,
    quote_decimals: u8,
) -> Result<U256, DecimalsError> {
    rescale(universal_price, UNIVERSAL_DECIMALS, quote_decimals)
}

/// Parse a human-readable amount (e.g. `"1.5"`) into native units.
///
/// Trailing zeros past the token's precision are accepted; any other digit
/// there is rejected rather than truncated.
pub fn parse_native_amount(value: &str, decimals: u8) -> Result<U256, DecimalsError> {
    if has_excess_precision(value, decimals) {
        return Err(DecimalsError::ExcessPrecision {
            value: value.to_string(),
            decimals,
        });
    }
    match parse_units(value, decimals)? {
        ParseUnits::U256(amount) => Ok(amount),
        ParseUnits::I256(amount) if amount.is_negative() => {
            Err(DecimalsError::Negative(value.to_string()))
        }
        ParseUnits::I256(amount) => Ok(amount.into_raw()),
    }
}

/// Render native units as a minimal decimal string (`"1.5"`, `"2.0"`)
pub fn format_native_amount(amount: U256, decimals: u8) -> Result<String, DecimalsError> {
    let formatted = format_units(amount, decimals)?;
    Ok(trim_fraction(&formatted))
}

/// Parse a human-readable amount directly into universal format
pub fn parse_to_universal_amount(value: &str, native_decimals: u8) -> Result<U256, DecimalsError> {
    let native = parse_native_amount(value, native_decimals)?;
    to_universal_amount(native, native_decimals)
}

/// Format a universal amount as a human-readable string in native precision
pub fn format_universal_amount(
    universal_amount: U256,
    native_decimals: u8,
) -> Result<String, DecimalsError> {
    let native = from_universal_amount(universal_amount, native_decimals)?;
    format_native_amount(native, native_decimals)
}

fn rescale(value: U256, from: u8, to: u8) -> Result<U256, DecimalsError> {
    match from.cmp(&to) {
        Ordering::Equal => Ok(value),
        Ordering::Less => scale_up(value, to - from),
        Ordering::Greater => Ok(scale_down(value, from - to)),
    }
}

fn scale_up(value: U256, exponent: u8) -> Result<U256, DecimalsError> {
    if value.is_zero() {
        return Ok(U256::ZERO);
    }
    pow10(exponent)
        .and_then(|factor| value.checked_mul(factor))
        .ok_or(DecimalsError::Overflow { value, exponent })
}

fn scale_down(value: U256, exponent: u8) -> U256 {
    // A divisor past uint256 range is larger than any value.
    match pow10(exponent) {
        Some(divisor) => value / divisor,
        None => U256::ZERO,
    }
}

fn pow10(exponent: u8) -> Option<U256> {
    U256::from(10u8).checked_pow(U256::from(exponent))
}

fn has_excess_precision(value: &str, decimals: u8) -> bool {
    value.split_once('.').is_some_and(|(_, fraction)| {
        fraction
            .chars()
            .skip(decimals as usize)
            .any(|c| c.is_ascii_digit() && c != '0')
    })
}

fn trim_fraction(formatted: &str) -> String {
    match formatted.split_once('.') {
        Some((integer, fraction)) => {
            let fraction = fraction.trim_end_matches('0');
            if fraction.is_empty() {
                format!("{integer}.0")
            } else {
                format!("{integer}.{fraction}")
            }
        }
        None => format!("{formatted}.0"),
    }
}
