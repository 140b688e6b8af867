//! Contract ABI inspection: loaded contracts, raw descriptors, selectors

use anyhow::{Context, Result};

use super::ToolResult;
use crate::domain::abi::Contract;
use crate::infrastructure::ContractAbis;

/// Summary of which contract ABIs were found
pub fn list(abis: &ContractAbis) -> ToolResult {
    let mut result = ToolResult::new("Contract ABIs");
    for contract in Contract::ALL {
        let status = match (abis.get(contract), abis.source(contract)) {
            (Some(abi), Some(source)) => format!(
                "{} functions, {} events ({})",
                abi.functions().count(),
                abi.events().count(),
                source.display()
            ),
            (Some(abi), None) => format!("{} functions", abi.functions().count()),
            _ => "missing".to_string(),
        };
        result = result.add(contract.artifact_name(), status);
    }
    for error in &abis.errors {
        result = result.add("error", error.clone());
    }
    result
}

/// The contract's descriptor as pretty JSON, unchanged
pub fn show(abis: &ContractAbis, contract: Contract) -> Result<String> {
    let abi = abis.require(contract)?;
    serde_json::to_string_pretty(abi).context("serialize ABI")
}

/// Resolve a 4-byte selector against every loaded contract
pub fn selector(abis: &ContractAbis, selector_hex: &str) -> Result<ToolResult> {
    let registry = abis.registry();
    let function = registry
        .lookup_hex(selector_hex)
        .with_context(|| format!("selector {} not found in loaded ABIs", selector_hex.trim()))?;

    let mut result = ToolResult::new("Selector")
        .add("selector", function.selector_hex())
        .add("contract", function.contract.to_string())
        .add("signature", function.signature.clone());
    for (idx, input) in function.inputs.iter().enumerate() {
        let name = if input.name.trim().is_empty() {
            format!("arg{}", idx)
        } else {
            input.name.clone()
        };
        result = result.add(name, input.kind.clone());
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use alloy_json_abi::JsonAbi;

    use super::*;

    fn book_abi() -> JsonAbi {
        serde_json::from_str(
            r#"[
                {"type":"function","name":"transfer","stateMutability":"nonpayable",
                 "inputs":[{"name":"to","type":"address"},{"name":"","type":"uint256"}],
                 "outputs":[]}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_list_marks_missing() {
        let mut abis = ContractAbis::new();
        abis.insert(Contract::Book, book_abi(), PathBuf::from("out/Book.json"));

        let result = list(&abis);
        assert_eq!(result.get("CLOB"), Some("missing"));
        assert_eq!(
            result.get("Book"),
            Some("1 functions, 0 events (out/Book.json)")
        );
    }

    #[test]
    fn test_selector_lookup() {
        let mut abis = ContractAbis::new();
        abis.insert(Contract::Book, book_abi(), PathBuf::from("Book.json"));

        let result = selector(&abis, "0xa9059cbb").unwrap();
        assert_eq!(result.get("contract"), Some("Book"));
        assert_eq!(result.get("to"), Some("address"));
        assert_eq!(result.get("arg1"), Some("uint256"));
        assert!(selector(&abis, "0x095ea7b3").is_err());
    }

    #[test]
    fn test_show_missing_contract() {
        let abis = ContractAbis::new();
        assert!(show(&abis, Contract::State).is_err());
    }

    #[test]
    fn test_show_passes_abi_through() {
        let mut abis = ContractAbis::new();
        abis.insert(Contract::Book, book_abi(), PathBuf::from("Book.json"));
        let json = show(&abis, Contract::Book).unwrap();
        let reparsed: JsonAbi = serde_json::from_str(&json).unwrap();
        assert_eq!(reparsed, book_abi());
    }
}
