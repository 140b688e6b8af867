//! Exchange contract identities and the selector registry
//!
//! The descriptors themselves are `alloy_json_abi::JsonAbi` values owned by
//! the infrastructure loader; this module only names the contracts and
//! indexes their functions.

mod contract;
mod registry;

pub use contract::Contract;
pub use registry::{AbiRegistry, FunctionSignature, ParamSpec};
