//! Property-based tests for the decimal conversion helpers.
//!
//! 1. **Identity** at 18 decimals.
//! 2. **Exact round trip** below 18 decimals.
//! 3. **Truncation** above 18 decimals, round trip rounds down.
//! 4. **Monotonicity** of every scaling function.
//! 5. **Price base-independence**.

use alloy_primitives::U256;
use proptest::prelude::*;

use super::decimals::{
    from_universal_amount, from_universal_price, to_universal_amount, to_universal_price,
    UNIVERSAL_DECIMALS,
};

fn pow10(exponent: u8) -> U256 {
    U256::from(10u8).pow(U256::from(exponent))
}

fn any_u256() -> impl Strategy<Value = U256> {
    any::<[u64; 4]>().prop_map(U256::from_limbs)
}

proptest! {
    #[test]
    fn identity_at_universal(amount in any_u256()) {
        prop_assert_eq!(to_universal_amount(amount, UNIVERSAL_DECIMALS).unwrap(), amount);
        prop_assert_eq!(from_universal_amount(amount, UNIVERSAL_DECIMALS).unwrap(), amount);
    }

    #[test]
    fn round_trip_below_universal(amount in any::<u128>(), decimals in 0u8..18) {
        let amount = U256::from(amount);
        let universal = to_universal_amount(amount, decimals).unwrap();
        prop_assert_eq!(from_universal_amount(universal, decimals).unwrap(), amount);
    }

    #[test]
    fn truncation_above_universal(amount in any_u256(), decimals in 19u8..=120) {
        let universal = to_universal_amount(amount, decimals).unwrap();
        let exponent = decimals - UNIVERSAL_DECIMALS;
        let expected = if exponent > 77 { U256::ZERO } else { amount / pow10(exponent) };
        prop_assert_eq!(universal, expected);
    }

    #[test]
    fn round_trip_above_universal_rounds_down(amount in any::<u128>(), decimals in 19u8..=36) {
        let amount = U256::from(amount);
        let divisor = pow10(decimals - UNIVERSAL_DECIMALS);
        let universal = to_universal_amount(amount, decimals).unwrap();
        let back = from_universal_amount(universal, decimals).unwrap();
        prop_assert_eq!(back, (amount / divisor) * divisor);
        prop_assert!(back <= amount);
    }

    #[test]
    fn scaling_is_monotonic(a in any::<u128>(), b in any::<u128>(), decimals in 0u8..=36) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let (lo, hi) = (U256::from(lo), U256::from(hi));
        prop_assert!(to_universal_amount(lo, decimals).unwrap() <= to_universal_amount(hi, decimals).unwrap());
        prop_assert!(from_universal_amount(lo, decimals).unwrap() <= from_universal_amount(hi, decimals).unwrap());
        prop_assert!(to_universal_price(lo, 8, decimals).unwrap() <= to_universal_price(hi, 8, decimals).unwrap());
        prop_assert!(from_universal_price(lo, 8, decimals).unwrap() <= from_universal_price(hi, 8, decimals).unwrap());
    }

    #[test]
    fn price_ignores_base(price in any::<u128>(), base in any::<u8>(), quote in 0u8..=36) {
        let price = U256::from(price);
        prop_assert_eq!(
            to_universal_price(price, base, quote).unwrap(),
            to_universal_price(price, 0, quote).unwrap()
        );
        prop_assert_eq!(
            from_universal_price(price, base, quote).unwrap(),
            from_universal_price(price, 0, quote).unwrap()
        );
    }
}
