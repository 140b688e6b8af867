//! ABI artifact scanner - finds the exchange contracts' compiled ABIs

use std::fs;
use std::path::Path;

use alloy_json_abi::JsonAbi;
use anyhow::{bail, Context};
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::ContractAbis;
use crate::domain::abi::Contract;

/// Artifacts larger than this are not ABI files
const MAX_ARTIFACT_BYTES: u64 = 5 * 1024 * 1024;

/// ABI artifact scanner
pub struct AbiScanner;

impl AbiScanner {
    /// Walk `root` and load the first `<Contract>.json` found for each contract.
    ///
    /// Works on Foundry `out/`, Hardhat `artifacts/` and flat directories of
    /// raw ABI arrays. Unreadable files are recorded in `errors`.
    pub fn scan(root: impl AsRef<Path>) -> ContractAbis {
        let root = root.as_ref();
        let mut abis = ContractAbis::new();

        for entry in WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !Self::is_ignored_dir(e.path()))
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    abis.errors.push(err.to_string());
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let Some(contract) = Self::artifact_contract(path) else {
                continue;
            };
            if abis.get(contract).is_some() {
                continue;
            }

            match entry.metadata() {
                Ok(meta) if meta.len() > MAX_ARTIFACT_BYTES => continue,
                Ok(_) => {}
                Err(err) => {
                    abis.errors.push(format!("{}: {}", path.display(), err));
                    continue;
                }
            }

            abis.scanned_files += 1;

            match Self::load_abi_file(path) {
                Ok(abi) => {
                    debug!(
                        %contract,
                        path = %path.display(),
                        functions = abi.functions().count(),
                        "loaded contract ABI"
                    );
                    abis.insert(contract, abi, path.to_path_buf());
                }
                Err(err) => {
                    warn!(%contract, path = %path.display(), "skipping artifact: {err:#}");
                    abis.errors.push(format!("{}: {:#}", path.display(), err));
                }
            }
        }

        abis
    }

    /// Load a single ABI file: a raw ABI array or an artifact with an `abi` field
    pub fn load_abi_file(path: &Path) -> anyhow::Result<JsonAbi> {
        let content =
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        let value: serde_json::Value = serde_json::from_str(&content)?;

        let abi_value = if value.is_array() {
            value
        } else if let Some(abi) = value.get("abi") {
            abi.clone()
        } else {
            bail!("no ABI found in artifact");
        };

        let abi: JsonAbi = serde_json::from_value(abi_value).context("invalid ABI")?;
        Ok(abi)
    }

    /// Which contract a `<Name>.json` file holds, if any
    fn artifact_contract(path: &Path) -> Option<Contract> {
        if path.extension().and_then(|s| s.to_str()) != Some("json") {
            return None;
        }
        path.file_stem()
            .and_then(|s| s.to_str())
            .and_then(Contract::from_artifact_name)
    }

    /// Check if a path should be ignored
    fn is_ignored_dir(path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .map(|name| {
                matches!(
                    name,
                    ".git" | "target" | "node_modules" | "cache" | "build-info"
                )
            })
            .unwrap_or(false)
    }
}
