//! ABI registry - exchange function signatures by selector

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::Contract;

/// A function parameter specification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamSpec {
    /// Parameter name (may be empty)
    pub name: String,
    /// Solidity type (e.g., "address", "uint256", "(uint256,address)")
    pub kind: String,
}

/// A function signature with the contract that declares it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionSignature {
    /// 4-byte function selector
    pub selector: [u8; 4],
    pub name: String,
    /// Full signature string (e.g., "placeOrder(uint256,bool)")
    pub signature: String,
    pub inputs: Vec<ParamSpec>,
    pub contract: Contract,
}

impl FunctionSignature {
    /// Get selector as hex string
    pub fn selector_hex(&self) -> String {
        format!("0x{}", hex::encode(self.selector))
    }
}

/// Registry of exchange functions indexed by selector
#[derive(Debug, Default, Clone)]
pub struct AbiRegistry {
    functions: HashMap<[u8; 4], FunctionSignature>,
}

impl AbiRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a function signature
    ///
    /// Note: First function for a given selector wins (no overwrite). The
    /// same function is often inherited by several contracts.
    pub fn insert(&mut self, function: FunctionSignature) {
        self.functions.entry(function.selector).or_insert(function);
    }

    /// Look up a function by selector
    pub fn lookup(&self, selector: [u8; 4]) -> Option<&FunctionSignature> {
        self.functions.get(&selector)
    }

    /// Look up a function by selector hex string (e.g., "0xa9059cbb")
    pub fn lookup_hex(&self, selector_hex: &str) -> Option<&FunctionSignature> {
        let selector_hex = selector_hex.trim();
        let normalized = selector_hex
            .strip_prefix("0x")
            .or_else(|| selector_hex.strip_prefix("0X"))
            .unwrap_or(selector_hex);

        if normalized.len() != 8 {
            return None;
        }

        let bytes = hex::decode(normalized).ok()?;
        let selector: [u8; 4] = bytes.try_into().ok()?;
        self.lookup(selector)
    }

    /// Functions declared by one contract, sorted by signature
    pub fn functions_of(&self, contract: Contract) -> Vec<&FunctionSignature> {
        let mut functions: Vec<_> = self
            .functions
            .values()
            .filter(|function| function.contract == contract)
            .collect();
        functions.sort_by(|a, b| a.signature.cmp(&b.signature));
        functions
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub fn functions(&self) -> impl Iterator<Item = &FunctionSignature> {
        self.functions.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transfer(contract: Contract) -> FunctionSignature {
        FunctionSignature {
            selector: [0xa9, 0x05, 0x9c, 0xbb],
            name: "transfer".to_string(),
            signature: "transfer(address,uint256)".to_string(),
            inputs: vec![
                ParamSpec {
                    name: "to".to_string(),
                    kind: "address".to_string(),
                },
                ParamSpec {
                    name: "amount".to_string(),
                    kind: "uint256".to_string(),
                },
            ],
            contract,
        }
    }

    #[test]
    fn test_registry_insert_lookup() {
        let mut registry = AbiRegistry::new();
        registry.insert(transfer(Contract::Vault));

        assert_eq!(registry.len(), 1);
        assert!(registry.lookup([0xa9, 0x05, 0x9c, 0xbb]).is_some());
        assert!(registry.lookup_hex("0xa9059cbb").is_some());
        assert!(registry.lookup_hex("A9059CBB").is_some());
        assert!(registry.lookup_hex("0xdeadbeef").is_none());
        assert!(registry.lookup_hex("0xa9059c").is_none());
        assert!(registry.lookup_hex("0xzz059cbb").is_none());
    }

    #[test]
    fn test_first_wins() {
        let mut registry = AbiRegistry::new();
        registry.insert(transfer(Contract::Vault));
        registry.insert(transfer(Contract::Clob));

        assert_eq!(registry.len(), 1);
        let found = registry.lookup([0xa9, 0x05, 0x9c, 0xbb]).unwrap();
        assert_eq!(found.contract, Contract::Vault);
        assert!(registry.functions_of(Contract::Clob).is_empty());
        assert_eq!(registry.functions_of(Contract::Vault).len(), 1);
    }

    #[test]
    fn test_signature_json() {
        let json = serde_json::to_string(&transfer(Contract::SymphonyAdapter)).unwrap();
        assert!(json.contains(r#""contract":"SymphonyAdapter""#));

        let parsed: FunctionSignature = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.contract, Contract::SymphonyAdapter);
        assert_eq!(parsed.selector, [0xa9, 0x05, 0x9c, 0xbb]);
    }

    #[test]
    fn test_selector_hex() {
        assert_eq!(transfer(Contract::Book).selector_hex(), "0xa9059cbb");
    }
}
