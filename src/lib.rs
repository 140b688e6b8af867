//! Monaco SDK: contract ABIs and decimal conversion for the Monaco order book.
//!
//! The CLOB contract keeps every token amount at 18 decimals internally.
//! [`domain::decimals`] converts between that universal precision and each
//! token's native precision with the same truncation the contract applies,
//! and [`infrastructure::AbiScanner`] loads the exchange's contract ABIs
//! from compiled artifacts.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod modules;

pub use alloy_json_abi::JsonAbi;
pub use alloy_primitives::U256;

pub use domain::abi::{AbiRegistry, Contract, FunctionSignature};
pub use domain::decimals::{
    format_native_amount, format_universal_amount, from_universal_amount, from_universal_price,
    parse_native_amount, parse_to_universal_amount, to_universal_amount, to_universal_price,
    DecimalsError, UNIVERSAL_DECIMALS,
};
pub use domain::Market;
pub use infrastructure::abi::{AbiError, AbiScanner, ContractAbis};
