use std::{fmt, str::FromStr};

use alloy::primitives::{Address, FixedBytes, U256, hex, keccak256};
use serde::{Deserialize, Serialize};

use crate::{
    ChainId,
    error::{IdParseError, TranslationError},
};

/// Asset namespace tags supported by the protocol.
///
/// Each namespace maps 1:1 onto an on-chain `bytes4` asset class id; the
/// mapping lives in [`AssetNamespace::class_id`] and is the single source of
/// truth for both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetNamespace {
    Erc20,
    Erc721,
    Erc1155,
}

impl AssetNamespace {
    /// All namespaces the protocol defines. Exhaustive by construction:
    /// adding a variant without extending this list is a compile error in
    /// the completeness test below.
    pub const ALL: [AssetNamespace; 3] = [
        AssetNamespace::Erc20,
        AssetNamespace::Erc721,
        AssetNamespace::Erc1155,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetNamespace::Erc20 => "erc20",
            AssetNamespace::Erc721 => "erc721",
            AssetNamespace::Erc1155 => "erc1155",
        }
    }

    /// The contract-level asset class id: `bytes4(keccak256(<token standard>))`.
    pub fn class_id(&self) -> FixedBytes<4> {
        let preimage: &[u8] = match self {
            AssetNamespace::Erc20 => b"ERC20",
            AssetNamespace::Erc721 => b"ERC721",
            AssetNamespace::Erc1155 => b"ERC1155",
        };
        FixedBytes::<4>::from_slice(&keccak256(preimage)[..4])
    }

    /// Reverse lookup against the class id table.
    pub fn from_class_id(class_id: FixedBytes<4>) -> Result<Self, TranslationError> {
        Self::ALL
            .into_iter()
            .find(|namespace| namespace.class_id() == class_id)
            .ok_or_else(|| TranslationError::UnknownAssetClass(hex::encode(class_id)))
    }
}

impl fmt::Display for AssetNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetNamespace {
    type Err = TranslationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "erc20" => Ok(AssetNamespace::Erc20),
            "erc721" => Ok(AssetNamespace::Erc721),
            "erc1155" => Ok(AssetNamespace::Erc1155),
            _ => Err(TranslationError::UnknownNamespace(s.to_string())),
        }
    }
}

/// CAIP-19 asset type descriptor: a token contract qualified by chain and
/// namespace.
///
/// Format: "namespace:reference/asset_namespace:address"
/// (e.g., "eip155:31337/erc721:0x4C2F...").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AssetType {
    chain_id: ChainId,
    namespace: AssetNamespace,
    reference: Address,
}

impl AssetType {
    pub fn new(chain_id: ChainId, namespace: AssetNamespace, reference: Address) -> Self {
        Self {
            chain_id,
            namespace,
            reference,
        }
    }

    pub fn chain_id(&self) -> &ChainId {
        &self.chain_id
    }

    pub fn namespace(&self) -> AssetNamespace {
        self.namespace
    }

    pub fn reference(&self) -> Address {
        self.reference
    }

    /// Qualify this asset type with a token id.
    pub fn with_token_id(&self, token_id: U256) -> AssetId {
        AssetId::new(self.clone(), token_id)
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}:{}", self.chain_id, self.namespace, self.reference)
    }
}

impl FromStr for AssetType {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (chain, asset) = s
            .split_once('/')
            .ok_or_else(|| IdParseError::Format(format!("expected 'chain/asset': {s}")))?;
        let chain_id: ChainId = chain.parse()?;

        let (namespace, reference) = asset
            .split_once(':')
            .ok_or_else(|| IdParseError::Format(format!("expected 'namespace:address': {asset}")))?;
        let namespace: AssetNamespace = namespace
            .parse()
            .map_err(|_| IdParseError::AssetNamespace(namespace.to_string()))?;
        let reference = reference
            .parse::<Address>()
            .map_err(|_| IdParseError::Address(reference.to_string()))?;

        Ok(Self::new(chain_id, namespace, reference))
    }
}

impl TryFrom<String> for AssetType {
    type Error = IdParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AssetType> for String {
    fn from(value: AssetType) -> Self {
        value.to_string()
    }
}

/// CAIP-19 asset identifier: an asset type plus a token id.
///
/// Format: "namespace:reference/asset_namespace:address/token_id".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AssetId {
    asset_type: AssetType,
    token_id: U256,
}

impl AssetId {
    pub fn new(asset_type: AssetType, token_id: U256) -> Self {
        Self {
            asset_type,
            token_id,
        }
    }

    pub fn asset_type(&self) -> &AssetType {
        &self.asset_type
    }

    pub fn chain_id(&self) -> &ChainId {
        self.asset_type.chain_id()
    }

    pub fn namespace(&self) -> AssetNamespace {
        self.asset_type.namespace()
    }

    pub fn reference(&self) -> Address {
        self.asset_type.reference()
    }

    pub fn token_id(&self) -> U256 {
        self.token_id
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.asset_type, self.token_id)
    }
}

impl FromStr for AssetId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (asset_type, token_id) = s
            .rsplit_once('/')
            .ok_or_else(|| IdParseError::Format(format!("expected 'asset/token_id': {s}")))?;
        let asset_type: AssetType = asset_type.parse()?;
        let token_id = U256::from_str_radix(token_id, 10)
            .map_err(|_| IdParseError::TokenId(token_id.to_string()))?;

        Ok(Self::new(asset_type, token_id))
    }
}

impl TryFrom<String> for AssetId {
    type Error = IdParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AssetId> for String {
    fn from(value: AssetId) -> Self {
        value.to_string()
    }
}

/// A concrete asset reference passed into listing operations: an asset id
/// plus the listed value (token count; 1 for ERC-721).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub id: AssetId,
    pub value: U256,
}

impl Asset {
    pub fn new(id: AssetId, value: U256) -> Self {
        Self { id, value }
    }

    /// Single ERC-721 token owned by `collection` on the account's chain.
    pub fn erc721(collection: &crate::AccountId, token_id: U256) -> Self {
        let asset_type = AssetType::new(
            collection.chain_id().clone(),
            AssetNamespace::Erc721,
            collection.address(),
        );
        Self::new(asset_type.with_token_id(token_id), U256::from(1))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use alloy::primitives::fixed_bytes;

    use super::*;

    const ADDRESS: &str = "0x4C2F7092C2aE51D986bEFEe378e50BD4dB99C901";

    #[test]
    fn class_ids_round_trip_for_every_namespace() {
        for namespace in AssetNamespace::ALL {
            let class_id = namespace.class_id();
            assert_eq!(AssetNamespace::from_class_id(class_id).unwrap(), namespace);
        }
    }

    #[test]
    fn class_ids_are_stable() {
        // bytes4(keccak256(<token standard>)).
        assert_eq!(AssetNamespace::Erc20.class_id(), fixed_bytes!("0x8ae85d84"));
        assert_eq!(AssetNamespace::Erc721.class_id(), fixed_bytes!("0x73ad2146"));
        assert_eq!(AssetNamespace::Erc1155.class_id(), fixed_bytes!("0x973bb640"));
    }

    #[test]
    fn class_ids_are_distinct() {
        let ids: Vec<_> = AssetNamespace::ALL.iter().map(|n| n.class_id()).collect();
        for (i, id) in ids.iter().enumerate() {
            for other in &ids[i + 1..] {
                assert_ne!(id, other);
            }
        }
    }

    #[test]
    fn unknown_class_id_is_rejected() {
        let result = AssetNamespace::from_class_id(FixedBytes::<4>::from([0xde, 0xad, 0xbe, 0xef]));
        assert!(matches!(result, Err(TranslationError::UnknownAssetClass(_))));
    }

    #[test]
    fn namespace_string_round_trips() {
        for namespace in AssetNamespace::ALL {
            assert_eq!(
                namespace.as_str().parse::<AssetNamespace>().unwrap(),
                namespace
            );
        }
        assert!("erc777".parse::<AssetNamespace>().is_err());
    }

    #[test]
    fn asset_type_parses_and_round_trips() {
        let asset_type: AssetType = format!("eip155:31337/erc721:{ADDRESS}").parse().unwrap();
        assert_eq!(asset_type.namespace(), AssetNamespace::Erc721);
        assert_eq!(asset_type.reference(), ADDRESS.parse::<Address>().unwrap());
        assert_eq!(
            asset_type.to_string().parse::<AssetType>().unwrap(),
            asset_type
        );
    }

    #[test]
    fn asset_id_parses_and_round_trips() {
        let asset_id: AssetId = format!("eip155:31337/erc721:{ADDRESS}/42").parse().unwrap();
        assert_eq!(asset_id.token_id(), U256::from(42));
        assert_eq!(asset_id.to_string().parse::<AssetId>().unwrap(), asset_id);
    }

    #[test]
    fn asset_id_rejects_non_numeric_token_id() {
        assert!(
            format!("eip155:31337/erc721:{ADDRESS}/abc")
                .parse::<AssetId>()
                .is_err()
        );
    }

    #[test]
    fn erc721_asset_has_value_one() {
        let collection: crate::AccountId = format!("eip155:31337:{ADDRESS}").parse().unwrap();
        let asset = Asset::erc721(&collection, U256::from(7));
        assert_eq!(asset.value, U256::from(1));
        assert_eq!(asset.id.namespace(), AssetNamespace::Erc721);
        assert_eq!(asset.id.token_id(), U256::from(7));
    }
}
