use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::IdParseError;

/// CAIP-2 chain identifier.
///
/// Format: "namespace:reference" (e.g., "eip155:1", "eip155:31337").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChainId {
    namespace: String,
    reference: String,
}

impl ChainId {
    pub fn new(namespace: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            reference: reference.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Parse the numeric chain id from the reference.
    /// E.g., "eip155:31337" -> 31337. Returns None for non-numeric references.
    pub fn reference_u64(&self) -> Option<u64> {
        self.reference.parse().ok()
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.reference)
    }
}

impl FromStr for ChainId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (namespace, reference) = s
            .split_once(':')
            .ok_or_else(|| IdParseError::Format(format!("expected 'namespace:reference': {s}")))?;

        if namespace.is_empty() {
            return Err(IdParseError::ChainNamespace(s.to_string()));
        }
        if reference.is_empty() || reference.contains(':') {
            return Err(IdParseError::ChainReference(s.to_string()));
        }

        Ok(Self::new(namespace, reference))
    }
}

impl TryFrom<String> for ChainId {
    type Error = IdParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ChainId> for String {
    fn from(value: ChainId) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn parses_namespace_and_reference() {
        let chain_id: ChainId = "eip155:31337".parse().unwrap();
        assert_eq!(chain_id.namespace(), "eip155");
        assert_eq!(chain_id.reference(), "31337");
        assert_eq!(chain_id.reference_u64(), Some(31337));
    }

    #[test]
    fn display_round_trips() {
        let chain_id: ChainId = "eip155:1".parse().unwrap();
        assert_eq!(chain_id.to_string().parse::<ChainId>().unwrap(), chain_id);
    }

    #[test]
    fn rejects_missing_reference() {
        assert!("eip155".parse::<ChainId>().is_err());
        assert!("eip155:".parse::<ChainId>().is_err());
        assert!(":31337".parse::<ChainId>().is_err());
    }

    #[test]
    fn rejects_extra_separator() {
        assert!("eip155:1:2".parse::<ChainId>().is_err());
    }
}
