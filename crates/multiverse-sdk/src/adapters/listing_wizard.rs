use alloy::{network::Ethereum, primitives::U256, providers::PendingTransactionBuilder};
use multiverse_domain::{AccountId, AssetListingParams, ListingTerms, TranslationError};

use crate::{
    adapters::encode_listing_terms,
    contracts::{self, ListingWizard},
    error::SdkError,
    provider::SdkProvider,
    resolver::ContractResolver,
    translator::AddressTranslator,
};

/// Adapter for the listing wizard contract.
pub struct ListingWizardAdapter {
    contract: ListingWizard::ListingWizardInstance<SdkProvider>,
    translator: AddressTranslator,
}

impl ListingWizardAdapter {
    pub(crate) fn new(
        resolver: &ContractResolver,
        account_id: &AccountId,
    ) -> Result<Self, SdkError> {
        Ok(Self {
            contract: resolver.resolve_listing_wizard(account_id)?,
            translator: resolver.translator().clone(),
        })
    }

    /// Creates a listing of the given assets in the universe, registering
    /// the pricing terms alongside.
    pub async fn create_listing_with_terms(
        &self,
        universe_id: U256,
        params: &AssetListingParams,
        terms: &ListingTerms,
    ) -> Result<PendingTransactionBuilder<Ethereum>, SdkError> {
        let assets = encode_assets(&self.translator, params)?;
        let listing_params = encode_listing_params(&self.translator, params)?;

        Ok(self
            .contract
            .createListingWithTerms(
                universe_id,
                assets,
                listing_params,
                encode_listing_terms(terms),
                U256::from(params.max_lock_period),
                params.immediate_payout,
            )
            .send()
            .await?)
    }
}

fn encode_assets(
    translator: &AddressTranslator,
    params: &AssetListingParams,
) -> Result<Vec<contracts::Asset>, TranslationError> {
    params
        .assets
        .iter()
        .map(|asset| translator.encode_asset(asset))
        .collect()
}

fn encode_listing_params(
    translator: &AddressTranslator,
    params: &AssetListingParams,
) -> Result<contracts::ListingParams, TranslationError> {
    Ok(contracts::ListingParams {
        lister: translator.account_id_to_address(&params.params.lister)?,
        configurator: translator.account_id_to_address(&params.params.configurator)?,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use alloy::primitives::Address;
    use multiverse_domain::{Asset, AssetNamespace, ListingParams};

    use super::*;

    const COLLECTION: &str = "0x4C2F7092C2aE51D986bEFEe378e50BD4dB99C901";
    const LISTER: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

    fn translator() -> AddressTranslator {
        AddressTranslator::new("eip155:31337".parse().unwrap())
    }

    fn sample_params() -> AssetListingParams {
        let collection: AccountId = format!("eip155:31337:{COLLECTION}").parse().unwrap();
        AssetListingParams {
            assets: vec![Asset::erc721(&collection, U256::from(1))],
            params: ListingParams {
                lister: format!("eip155:31337:{LISTER}").parse().unwrap(),
                configurator: AccountId::new("eip155:31337".parse().unwrap(), Address::ZERO),
            },
            max_lock_period: 7 * 24 * 3600,
            immediate_payout: true,
        }
    }

    #[test]
    fn assets_encode_with_erc721_class() {
        let assets = encode_assets(&translator(), &sample_params()).unwrap();
        assert_eq!(assets.len(), 1);
        assert_eq!(assets[0].id.class, AssetNamespace::Erc721.class_id());
        assert_eq!(assets[0].value, U256::from(1));
    }

    #[test]
    fn listing_params_extract_both_addresses() {
        let encoded = encode_listing_params(&translator(), &sample_params()).unwrap();
        assert_eq!(encoded.lister, LISTER.parse::<Address>().unwrap());
        assert_eq!(encoded.configurator, Address::ZERO);
    }

    #[test]
    fn lister_from_other_chain_fails_before_submission() {
        let mut params = sample_params();
        params.params.lister = format!("eip155:1:{LISTER}").parse().unwrap();

        assert!(matches!(
            encode_listing_params(&translator(), &params),
            Err(TranslationError::ChainMismatch { .. })
        ));
    }
}
