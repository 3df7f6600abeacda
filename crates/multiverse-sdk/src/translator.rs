use alloy::{
    primitives::{Address, Bytes, U256},
    sol_types::SolValue,
};
use multiverse_domain::{
    AccountId, Asset, AssetId, AssetNamespace, AssetType, ChainId, TranslationError,
};

use crate::contracts;

/// Bidirectional mapping between chain-qualified identifiers and the raw
/// encodings the contracts expect.
///
/// Pure and deterministic; every failure here surfaces before any external
/// call is made.
#[derive(Debug, Clone)]
pub struct AddressTranslator {
    chain_id: ChainId,
}

impl AddressTranslator {
    pub fn new(chain_id: ChainId) -> Self {
        Self { chain_id }
    }

    pub fn chain_id(&self) -> &ChainId {
        &self.chain_id
    }

    fn ensure_same_chain(&self, chain_id: &ChainId) -> Result<(), TranslationError> {
        if chain_id != &self.chain_id {
            return Err(TranslationError::ChainMismatch {
                expected: self.chain_id.to_string(),
                actual: chain_id.to_string(),
            });
        }
        Ok(())
    }

    /// Extract the raw address from a chain-qualified account identifier.
    /// An identifier from another chain context is rejected, never silently
    /// unwrapped.
    pub fn account_id_to_address(&self, account_id: &AccountId) -> Result<Address, TranslationError> {
        self.ensure_same_chain(account_id.chain_id())?;
        Ok(account_id.address())
    }

    /// Extract the contract address from an asset type descriptor.
    pub fn asset_type_to_address(&self, asset_type: &AssetType) -> Result<Address, TranslationError> {
        self.ensure_same_chain(asset_type.chain_id())?;
        Ok(asset_type.reference())
    }

    pub fn asset_id_to_address(&self, asset_id: &AssetId) -> Result<Address, TranslationError> {
        self.ensure_same_chain(asset_id.chain_id())?;
        Ok(asset_id.reference())
    }

    /// Qualify a raw address with this translator's chain context.
    pub fn address_to_account_id(&self, address: Address) -> AccountId {
        AccountId::new(self.chain_id.clone(), address)
    }

    pub fn address_to_asset_type(&self, address: Address, namespace: AssetNamespace) -> AssetType {
        AssetType::new(self.chain_id.clone(), namespace, address)
    }

    /// Build an asset type descriptor from its parts. Round-trip consistent
    /// with [`AddressTranslator::asset_type_to_address`].
    pub fn create_asset_type(account_id: &AccountId, namespace: AssetNamespace) -> AssetType {
        AssetType::new(account_id.chain_id().clone(), namespace, account_id.address())
    }

    pub fn create_asset_id(
        account_id: &AccountId,
        namespace: AssetNamespace,
        token_id: U256,
    ) -> AssetId {
        Self::create_asset_type(account_id, namespace).with_token_id(token_id)
    }

    /// Encode an asset id into the contract-level `(class, data)` pair,
    /// where `data` is `abi.encode(address, tokenId)`.
    pub fn encode_asset_id(&self, asset_id: &AssetId) -> Result<contracts::AssetId, TranslationError> {
        self.ensure_same_chain(asset_id.chain_id())?;
        Ok(contracts::AssetId {
            class: asset_id.namespace().class_id(),
            data: (asset_id.reference(), asset_id.token_id())
                .abi_encode()
                .into(),
        })
    }

    pub fn encode_asset(&self, asset: &Asset) -> Result<contracts::Asset, TranslationError> {
        Ok(contracts::Asset {
            id: self.encode_asset_id(&asset.id)?,
            value: asset.value,
        })
    }

    /// Decode a contract-level asset back into a chain-qualified reference,
    /// validating the class id against the namespace table.
    pub fn decode_asset(&self, asset: &contracts::Asset) -> Result<Asset, TranslationError> {
        let namespace = AssetNamespace::from_class_id(asset.id.class)?;
        let (address, token_id) = <(Address, U256)>::abi_decode(&asset.id.data)
            .map_err(|e| TranslationError::AssetData(e.to_string()))?;

        let asset_type = AssetType::new(self.chain_id.clone(), namespace, address);
        Ok(Asset::new(asset_type.with_token_id(token_id), asset.value))
    }

    /// Init data for deploying a warper preset over an original asset:
    /// `abi.encode(original, metahub)`.
    pub fn encode_warper_preset_init_data(
        &self,
        original: &AssetType,
        metahub: &AccountId,
    ) -> Result<Bytes, TranslationError> {
        let original = self.asset_type_to_address(original)?;
        let metahub = self.account_id_to_address(metahub)?;
        Ok((original, metahub).abi_encode().into())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    const ADDRESS: &str = "0x4C2F7092C2aE51D986bEFEe378e50BD4dB99C901";

    fn translator() -> AddressTranslator {
        AddressTranslator::new("eip155:31337".parse().unwrap())
    }

    fn local_account() -> AccountId {
        format!("eip155:31337:{ADDRESS}").parse().unwrap()
    }

    #[test]
    fn extracts_address_from_matching_chain() {
        let address = translator().account_id_to_address(&local_account()).unwrap();
        assert_eq!(address, ADDRESS.parse::<Address>().unwrap());
    }

    #[test]
    fn rejects_account_from_other_chain() {
        let foreign: AccountId = format!("eip155:1:{ADDRESS}").parse().unwrap();
        assert!(matches!(
            translator().account_id_to_address(&foreign),
            Err(TranslationError::ChainMismatch { .. })
        ));
    }

    #[test]
    fn rejects_asset_type_from_other_chain() {
        let foreign: AssetType = format!("eip155:100/erc721:{ADDRESS}").parse().unwrap();
        assert!(translator().asset_type_to_address(&foreign).is_err());
    }

    #[test]
    fn create_asset_type_round_trips_with_extraction() {
        let asset_type =
            AddressTranslator::create_asset_type(&local_account(), AssetNamespace::Erc721);
        assert_eq!(
            translator().asset_type_to_address(&asset_type).unwrap(),
            local_account().address()
        );
        assert_eq!(asset_type.namespace(), AssetNamespace::Erc721);
    }

    #[test]
    fn asset_encoding_round_trips() {
        let translator = translator();
        let asset_id =
            AddressTranslator::create_asset_id(&local_account(), AssetNamespace::Erc721, U256::from(42));
        let asset = Asset::new(asset_id, U256::from(1));

        let encoded = translator.encode_asset(&asset).unwrap();
        assert_eq!(encoded.id.class, AssetNamespace::Erc721.class_id());

        let decoded = translator.decode_asset(&encoded).unwrap();
        assert_eq!(decoded, asset);
    }

    #[test]
    fn decoding_unknown_class_fails() {
        let translator = translator();
        let asset_id =
            AddressTranslator::create_asset_id(&local_account(), AssetNamespace::Erc721, U256::from(1));
        let mut encoded = translator
            .encode_asset(&Asset::new(asset_id, U256::from(1)))
            .unwrap();
        encoded.id.class = [0xde, 0xad, 0xbe, 0xef].into();

        assert!(matches!(
            translator.decode_asset(&encoded),
            Err(TranslationError::UnknownAssetClass(_))
        ));
    }

    #[test]
    fn warper_preset_init_data_encodes_both_addresses() {
        let translator = translator();
        let original =
            AddressTranslator::create_asset_type(&local_account(), AssetNamespace::Erc721);
        let data = translator
            .encode_warper_preset_init_data(&original, &local_account())
            .unwrap();
        // Two address words.
        assert_eq!(data.len(), 64);
    }
}
