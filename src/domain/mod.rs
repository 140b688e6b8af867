//! Domain layer - pure exchange arithmetic and contract models

pub mod abi;
pub mod decimals;
pub mod market;

#[cfg(test)]
mod proptest_properties;

pub use market::Market;
