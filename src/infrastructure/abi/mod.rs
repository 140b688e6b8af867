//! ABI infrastructure - artifact discovery and `JsonAbi` loading

mod bundle;
mod scanner;

pub use bundle::{AbiError, ContractAbis};
pub use scanner::AbiScanner;
