//! Infrastructure layer - file system integrations
//!
//! This layer contains:
//! - Contract ABI artifact scanning using walkdir and alloy-json-abi

pub mod abi;

pub use abi::{AbiScanner, ContractAbis};
