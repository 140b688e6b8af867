//! The on-chain contracts that make up the exchange

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A Monaco contract whose ABI the SDK exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Contract {
    Clob,
    Book,
    State,
    Vault,
    SymphonyAdapter,
}

impl Contract {
    pub const ALL: [Contract; 5] = [
        Contract::Clob,
        Contract::Book,
        Contract::State,
        Contract::Vault,
        Contract::SymphonyAdapter,
    ];

    /// Compiled artifact name (file stem of `<name>.json`)
    pub fn artifact_name(&self) -> &'static str {
        match self {
            Contract::Clob => "CLOB",
            Contract::Book => "Book",
            Contract::State => "State",
            Contract::Vault => "Vault",
            Contract::SymphonyAdapter => "SymphonyAdapter",
        }
    }

    /// Match an artifact name exactly, as compilers emit it
    pub fn from_artifact_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|contract| contract.artifact_name() == name)
    }
}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.artifact_name())
    }
}

impl FromStr for Contract {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|contract| contract.artifact_name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| {
                let known: Vec<_> = Self::ALL.iter().map(|c| c.artifact_name()).collect();
                format!("unknown contract '{}', expected one of {}", s, known.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_names() {
        assert_eq!(Contract::from_artifact_name("CLOB"), Some(Contract::Clob));
        assert_eq!(
            Contract::from_artifact_name("SymphonyAdapter"),
            Some(Contract::SymphonyAdapter)
        );
        assert_eq!(Contract::from_artifact_name("clob"), None);
        assert_eq!(Contract::from_artifact_name("ERC20"), None);
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("clob".parse::<Contract>(), Ok(Contract::Clob));
        assert_eq!(" vault ".parse::<Contract>(), Ok(Contract::Vault));
        assert!("router".parse::<Contract>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for contract in Contract::ALL {
            assert_eq!(contract.to_string().parse::<Contract>(), Ok(contract));
        }
    }
}
