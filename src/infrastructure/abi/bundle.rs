//! Loaded contract ABIs, passed through as `JsonAbi`

use std::collections::BTreeMap;
use std::path::PathBuf;

use alloy_json_abi::JsonAbi;
use alloy_primitives::keccak256;
use thiserror::Error;

use crate::domain::abi::{AbiRegistry, Contract, FunctionSignature, ParamSpec};

#[derive(Debug, Error)]
pub enum AbiError {
    #[error("no ABI loaded for {0}")]
    Missing(Contract),
}

/// The exchange's contract descriptors, keyed by contract
#[derive(Debug, Default, Clone)]
pub struct ContractAbis {
    abis: BTreeMap<Contract, JsonAbi>,
    sources: BTreeMap<Contract, PathBuf>,
    /// Number of candidate artifact files read
    pub scanned_files: usize,
    /// Per-file load errors
    pub errors: Vec<String>,
}

impl ContractAbis {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a contract's ABI; an already loaded contract is kept
    pub fn insert(&mut self, contract: Contract, abi: JsonAbi, source: PathBuf) -> bool {
        if self.abis.contains_key(&contract) {
            return false;
        }
        self.abis.insert(contract, abi);
        self.sources.insert(contract, source);
        true
    }

    pub fn get(&self, contract: Contract) -> Option<&JsonAbi> {
        self.abis.get(&contract)
    }

    pub fn require(&self, contract: Contract) -> Result<&JsonAbi, AbiError> {
        self.get(contract).ok_or(AbiError::Missing(contract))
    }

    /// Artifact file the contract's ABI was read from
    pub fn source(&self, contract: Contract) -> Option<&PathBuf> {
        self.sources.get(&contract)
    }

    pub fn loaded(&self) -> impl Iterator<Item = Contract> + '_ {
        self.abis.keys().copied()
    }

    pub fn missing(&self) -> Vec<Contract> {
        Contract::ALL
            .into_iter()
            .filter(|contract| !self.abis.contains_key(contract))
            .collect()
    }

    /// Index every loaded function by selector
    pub fn registry(&self) -> AbiRegistry {
        let mut registry = AbiRegistry::new();
        for (contract, abi) in &self.abis {
            for function in abi.functions() {
                let signature = function.signature();
                let selector = compute_selector(&signature);

                let inputs = function
                    .inputs
                    .iter()
                    .map(|input| ParamSpec {
                        name: input.name.clone(),
                        kind: input.ty.to_string(),
                    })
                    .collect();

                registry.insert(FunctionSignature {
                    selector,
                    name: function.name.clone(),
                    signature,
                    inputs,
                    contract: *contract,
                });
            }
        }
        registry
    }
}

/// Compute the 4-byte function selector from a signature
pub(crate) fn compute_selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}
