use std::{fmt, str::FromStr};

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

use crate::{ChainId, error::IdParseError};

/// CAIP-10 chain-qualified account identifier.
///
/// Format: "namespace:reference:address"
/// (e.g., "eip155:31337:0x5FbDB2315678afecb367f032d93F642f64180aa3").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountId {
    chain_id: ChainId,
    address: Address,
}

impl AccountId {
    pub fn new(chain_id: ChainId, address: Address) -> Self {
        Self { chain_id, address }
    }

    pub fn chain_id(&self) -> &ChainId {
        &self.chain_id
    }

    pub fn address(&self) -> Address {
        self.address
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chain_id, self.address)
    }
}

impl FromStr for AccountId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (chain, address) = s.rsplit_once(':').ok_or_else(|| {
            IdParseError::Format(format!("expected 'namespace:reference:address': {s}"))
        })?;

        let chain_id: ChainId = chain.parse()?;
        let address = address
            .parse::<Address>()
            .map_err(|_| IdParseError::Address(address.to_string()))?;

        Ok(Self::new(chain_id, address))
    }
}

impl TryFrom<String> for AccountId {
    type Error = IdParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AccountId> for String {
    fn from(value: AccountId) -> Self {
        value.to_string()
    }
}
