use alloy::{
    network::Ethereum,
    primitives::{B256, U256},
    providers::PendingTransactionBuilder,
};
use multiverse_domain::{
    AccountId, AssetId, AssetNamespace, RentalAgreement, RentalStatus, RentingEstimationParams,
    RentingParams, TranslationError,
};

use crate::{
    adapters::encode_listing_terms,
    contracts::{self, RentingManager},
    error::SdkError,
    provider::SdkProvider,
    resolver::ContractResolver,
    translator::AddressTranslator,
};

/// Fees quoted for a prospective rental, as returned by the contract.
pub use crate::contracts::RentalFees;

/// Adapter for the renting manager contract: rent estimation and execution
/// plus the read-side rental queries.
pub struct RentingManagerAdapter {
    contract: RentingManager::RentingManagerInstance<SdkProvider>,
    translator: AddressTranslator,
}

impl RentingManagerAdapter {
    pub(crate) fn new(
        resolver: &ContractResolver,
        account_id: &AccountId,
    ) -> Result<Self, SdkError> {
        Ok(Self {
            contract: resolver.resolve_renting_manager(account_id)?,
            translator: resolver.translator().clone(),
        })
    }

    /// Quote the total cost of renting under the given parameters.
    pub async fn estimate_rent(
        &self,
        params: &RentingEstimationParams,
    ) -> Result<RentalFees, SdkError> {
        let renting_params = encode_estimation_params(&self.translator, params)?;
        Ok(self.contract.estimateRent(renting_params).call().await?)
    }

    /// Execute a rental. `max_payment_amount` equal to a prior estimate's
    /// total always passes translation; the contract may still revert for
    /// its own reasons.
    pub async fn rent(
        &self,
        params: &RentingParams,
    ) -> Result<PendingTransactionBuilder<Ethereum>, SdkError> {
        let renting_params = encode_renting_params(&self.translator, params)?;
        Ok(self
            .contract
            .rent(
                renting_params,
                params.token_quote.clone(),
                params.token_quote_signature.clone(),
                params.max_payment_amount,
            )
            .send()
            .await?)
    }

    pub async fn user_rental_count(&self, renter: &AccountId) -> Result<U256, SdkError> {
        let address = self.translator.account_id_to_address(renter)?;
        Ok(self.contract.userRentalCount(address).call().await?)
    }

    pub async fn rental_agreement(&self, rental_id: U256) -> Result<RentalAgreement, SdkError> {
        let agreement = self.contract.rentalAgreementInfo(rental_id).call().await?;
        Ok(decode_agreement(&self.translator, agreement)?)
    }

    pub async fn user_rental_agreements(
        &self,
        renter: &AccountId,
        offset: U256,
        limit: U256,
    ) -> Result<Vec<RentalAgreement>, SdkError> {
        let address = self.translator.account_id_to_address(renter)?;
        let result = self
            .contract
            .userRentalAgreements(address, offset, limit)
            .call()
            .await?;

        result
            .agreements
            .into_iter()
            .map(|agreement| decode_agreement(&self.translator, agreement).map_err(SdkError::from))
            .collect()
    }

    pub async fn collection_rented_value(
        &self,
        collection_id: B256,
        renter: &AccountId,
    ) -> Result<U256, SdkError> {
        let address = self.translator.account_id_to_address(renter)?;
        Ok(self
            .contract
            .collectionRentedValue(collection_id, address)
            .call()
            .await?)
    }

    /// Current rental availability of the asset, relabeled through the
    /// status table. An unrecognized code from the contract is an error.
    pub async fn asset_rental_status(&self, asset_id: &AssetId) -> Result<RentalStatus, SdkError> {
        let encoded = self.translator.encode_asset_id(asset_id)?;
        let code = self.contract.assetRentalStatus(encoded).call().await?;
        Ok(RentalStatus::try_from(code)?)
    }
}

fn encode_estimation_params(
    translator: &AddressTranslator,
    params: &RentingEstimationParams,
) -> Result<contracts::RentingParams, TranslationError> {
    Ok(contracts::RentingParams {
        listingId: params.listing_id,
        warper: translator.asset_type_to_address(&params.warper)?,
        renter: translator.account_id_to_address(&params.renter)?,
        rentalPeriod: params.rental_period,
        paymentToken: translator.asset_type_to_address(&params.payment_token)?,
        listingTermsId: params.listing_terms_id,
        selectedConfiguratorListingTerms: encode_listing_terms(
            &params.selected_configurator_listing_terms,
        ),
    })
}

fn encode_renting_params(
    translator: &AddressTranslator,
    params: &RentingParams,
) -> Result<contracts::RentingParams, TranslationError> {
    Ok(contracts::RentingParams {
        listingId: params.listing_id,
        warper: translator.asset_type_to_address(&params.warper)?,
        renter: translator.account_id_to_address(&params.renter)?,
        rentalPeriod: params.rental_period,
        paymentToken: translator.asset_type_to_address(&params.payment_token)?,
        listingTermsId: params.listing_terms_id,
        selectedConfiguratorListingTerms: encode_listing_terms(
            &params.selected_configurator_listing_terms,
        ),
    })
}

fn decode_agreement(
    translator: &AddressTranslator,
    agreement: contracts::RentalAgreement,
) -> Result<RentalAgreement, TranslationError> {
    Ok(RentalAgreement {
        warped_assets: agreement
            .warpedAssets
            .iter()
            .map(|asset| translator.decode_asset(asset))
            .collect::<Result<_, _>>()?,
        universe_id: agreement.universeId,
        warper: translator.address_to_asset_type(agreement.warper, AssetNamespace::Erc721),
        collection_id: agreement.collectionId,
        renter: translator.address_to_account_id(agreement.renter),
        start_time: agreement.startTime,
        end_time: agreement.endTime,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::sync::Arc;

    use alloy::{
        primitives::{Address, Bytes},
        providers::{Provider, ProviderBuilder, mock::Asserter},
        sol_types::SolValue,
    };
    use multiverse_domain::ListingTerms;

    use super::*;

    const WARPER: &str = "0x4C2F7092C2aE51D986bEFEe378e50BD4dB99C901";
    const RENTER: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";
    const TOKEN: &str = "0x0000000000000000000000000000000000000010";

    fn translator() -> AddressTranslator {
        AddressTranslator::new("eip155:31337".parse().unwrap())
    }

    fn estimation_params() -> RentingEstimationParams {
        RentingEstimationParams {
            warper: format!("eip155:31337/erc721:{WARPER}").parse().unwrap(),
            renter: format!("eip155:31337:{RENTER}").parse().unwrap(),
            payment_token: format!("eip155:31337/erc20:{TOKEN}").parse().unwrap(),
            listing_id: U256::from(1),
            rental_period: 3 * 3600,
            listing_terms_id: U256::from(1),
            selected_configurator_listing_terms: ListingTerms::none(),
        }
    }

    #[test]
    fn estimation_params_translate_every_identifier() {
        let encoded = encode_estimation_params(&translator(), &estimation_params()).unwrap();
        assert_eq!(encoded.warper, WARPER.parse::<Address>().unwrap());
        assert_eq!(encoded.renter, RENTER.parse::<Address>().unwrap());
        assert_eq!(encoded.paymentToken, TOKEN.parse::<Address>().unwrap());
        assert_eq!(encoded.rentalPeriod, 3 * 3600);
    }

    #[test]
    fn rent_params_with_estimated_total_pass_translation() {
        // Mirrors estimate-then-rent: the payment ceiling plays no part in
        // translation, so any estimate total is accepted here.
        let estimate_total = U256::from(12_345);
        let base = estimation_params();
        let params = RentingParams {
            warper: base.warper,
            renter: base.renter,
            payment_token: base.payment_token,
            listing_id: base.listing_id,
            rental_period: base.rental_period,
            listing_terms_id: base.listing_terms_id,
            selected_configurator_listing_terms: base.selected_configurator_listing_terms,
            max_payment_amount: estimate_total,
            token_quote: Bytes::new(),
            token_quote_signature: Bytes::new(),
        };

        assert!(encode_renting_params(&translator(), &params).is_ok());
    }

    #[test]
    fn renter_from_other_chain_fails_before_submission() {
        let mut params = estimation_params();
        params.renter = format!("eip155:1:{RENTER}").parse().unwrap();

        assert!(matches!(
            encode_estimation_params(&translator(), &params),
            Err(TranslationError::ChainMismatch { .. })
        ));
    }

    fn mocked_adapter(asserter: &Asserter) -> RentingManagerAdapter {
        let provider = ProviderBuilder::new().connect_mocked_client(asserter.clone());
        let resolver = ContractResolver::new(
            Arc::new(provider.erased()),
            "eip155:31337".parse().unwrap(),
        );
        let manager: AccountId = format!("eip155:31337:{TOKEN}").parse().unwrap();
        RentingManagerAdapter::new(&resolver, &manager).unwrap()
    }

    fn status_word(code: u8) -> Bytes {
        U256::from(code).abi_encode().into()
    }

    #[tokio::test]
    async fn asset_status_moves_from_none_to_rented() {
        let asserter = Asserter::new();
        asserter.push_success(&status_word(0));
        asserter.push_success(&status_word(2));

        let adapter = mocked_adapter(&asserter);
        let asset_id: AssetId = format!("eip155:31337/erc721:{WARPER}/1").parse().unwrap();

        assert_eq!(
            adapter.asset_rental_status(&asset_id).await.unwrap(),
            RentalStatus::None
        );
        assert_eq!(
            adapter.asset_rental_status(&asset_id).await.unwrap(),
            RentalStatus::Rented
        );
    }

    #[tokio::test]
    async fn unrecognized_status_code_from_contract_errors() {
        let asserter = Asserter::new();
        asserter.push_success(&status_word(9));

        let adapter = mocked_adapter(&asserter);
        let asset_id: AssetId = format!("eip155:31337/erc721:{WARPER}/1").parse().unwrap();

        assert!(matches!(
            adapter.asset_rental_status(&asset_id).await,
            Err(SdkError::Translation(TranslationError::UnknownStatusCode(9)))
        ));
    }

    #[test]
    fn agreements_decode_back_into_qualified_identifiers() {
        let translator = translator();
        let collection: AccountId = format!("eip155:31337:{WARPER}").parse().unwrap();
        let asset = multiverse_domain::Asset::erc721(&collection, U256::from(1));
        let encoded_asset = translator.encode_asset(&asset).unwrap();

        let agreement = contracts::RentalAgreement {
            warpedAssets: vec![encoded_asset],
            universeId: U256::from(1),
            warper: WARPER.parse().unwrap(),
            collectionId: B256::ZERO,
            renter: RENTER.parse().unwrap(),
            startTime: 100,
            endTime: 200,
        };

        let decoded = decode_agreement(&translator, agreement).unwrap();
        assert_eq!(decoded.renter.to_string(), format!("eip155:31337:{RENTER}"));
        assert_eq!(decoded.warped_assets, vec![asset]);
        assert_eq!(decoded.start_time, 100);
        assert_eq!(decoded.end_time, 200);
    }
}
