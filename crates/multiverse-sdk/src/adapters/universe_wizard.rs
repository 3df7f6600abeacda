use alloy::{
    network::Ethereum,
    primitives::{Address, B256, Bytes},
    providers::PendingTransactionBuilder,
};
use multiverse_domain::{
    AccountId, AssetType, TaxTerms, TranslationError, UniverseParams, WarperPresetId,
    WarperRegistrationParams,
};

use crate::{
    adapters::encode_tax_terms,
    contracts::{self, UniverseWizard},
    error::SdkError,
    provider::SdkProvider,
    resolver::ContractResolver,
    translator::AddressTranslator,
};

/// Adapter for the universe wizard contract: universe creation, optionally
/// combined with warper deployment or registration.
pub struct UniverseWizardAdapter {
    contract: UniverseWizard::UniverseWizardInstance<SdkProvider>,
    translator: AddressTranslator,
}

impl UniverseWizardAdapter {
    pub(crate) fn new(
        resolver: &ContractResolver,
        account_id: &AccountId,
    ) -> Result<Self, SdkError> {
        Ok(Self {
            contract: resolver.resolve_universe_wizard(account_id)?,
            translator: resolver.translator().clone(),
        })
    }

    /// Creates a new universe. This includes minting a new universe NFT,
    /// where the transaction sender becomes the universe owner.
    pub async fn setup_universe(
        &self,
        params: &UniverseParams,
    ) -> Result<PendingTransactionBuilder<Ethereum>, SdkError> {
        let universe_params = encode_universe_params(&self.translator, params)?;
        Ok(self.contract.setupUniverse(universe_params).send().await?)
    }

    /// Creates a new universe, deploys a warper from the given preset and
    /// registers it to the universe under the given tax terms.
    pub async fn setup_universe_and_create_warper_from_preset_and_register(
        &self,
        universe_params: &UniverseParams,
        warper_tax_terms: &TaxTerms,
        registration_params: &WarperRegistrationParams,
        preset_id: WarperPresetId,
        warper_init_data: Bytes,
    ) -> Result<PendingTransactionBuilder<Ethereum>, SdkError> {
        let universe_params = encode_universe_params(&self.translator, universe_params)?;
        Ok(self
            .contract
            .setupUniverseAndWarper(
                universe_params,
                encode_tax_terms(warper_tax_terms),
                Address::ZERO,
                encode_registration_params(registration_params),
                preset_id.id(),
                warper_init_data,
            )
            .send()
            .await?)
    }

    /// Creates a new universe and registers an already-deployed warper to it.
    pub async fn setup_universe_and_register_existing_warper(
        &self,
        universe_params: &UniverseParams,
        warper: &AssetType,
        warper_tax_terms: &TaxTerms,
        registration_params: &WarperRegistrationParams,
    ) -> Result<PendingTransactionBuilder<Ethereum>, SdkError> {
        let universe_params = encode_universe_params(&self.translator, universe_params)?;
        let warper_address = self.translator.asset_type_to_address(warper)?;
        Ok(self
            .contract
            .setupUniverseAndWarper(
                universe_params,
                encode_tax_terms(warper_tax_terms),
                warper_address,
                encode_registration_params(registration_params),
                B256::ZERO,
                Bytes::new(),
            )
            .send()
            .await?)
    }
}

fn encode_universe_params(
    translator: &AddressTranslator,
    params: &UniverseParams,
) -> Result<contracts::UniverseParams, TranslationError> {
    Ok(contracts::UniverseParams {
        name: params.name.clone(),
        paymentTokens: params
            .payment_tokens
            .iter()
            .map(|token| translator.account_id_to_address(token))
            .collect::<Result<_, _>>()?,
    })
}

fn encode_registration_params(
    params: &WarperRegistrationParams,
) -> contracts::WarperRegistrationParams {
    contracts::WarperRegistrationParams {
        name: params.name.clone(),
        universeId: params.universe_id,
        paused: params.paused,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use alloy::primitives::U256;

    use super::*;

    const TOKEN_A: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";
    const TOKEN_B: &str = "0x4C2F7092C2aE51D986bEFEe378e50BD4dB99C901";

    fn translator() -> AddressTranslator {
        AddressTranslator::new("eip155:31337".parse().unwrap())
    }

    #[test]
    fn universe_params_are_forwarded_unchanged_in_order() {
        let params = UniverseParams {
            name: "Test Universe".to_string(),
            payment_tokens: vec![
                format!("eip155:31337:{TOKEN_A}").parse().unwrap(),
                format!("eip155:31337:{TOKEN_B}").parse().unwrap(),
            ],
        };

        let encoded = encode_universe_params(&translator(), &params).unwrap();
        assert_eq!(encoded.name, "Test Universe");
        assert_eq!(
            encoded.paymentTokens,
            vec![
                TOKEN_A.parse::<Address>().unwrap(),
                TOKEN_B.parse::<Address>().unwrap()
            ]
        );
    }

    #[test]
    fn payment_token_from_other_chain_fails_before_submission() {
        let params = UniverseParams {
            name: "Test Universe".to_string(),
            payment_tokens: vec![format!("eip155:1:{TOKEN_A}").parse().unwrap()],
        };

        assert!(matches!(
            encode_universe_params(&translator(), &params),
            Err(TranslationError::ChainMismatch { .. })
        ));
    }

    #[test]
    fn registration_params_map_field_by_field() {
        let params = WarperRegistrationParams {
            name: "Warper".to_string(),
            universe_id: U256::ZERO,
            paused: false,
        };

        let encoded = encode_registration_params(&params);
        assert_eq!(encoded.name, "Warper");
        assert_eq!(encoded.universeId, U256::ZERO);
        assert!(!encoded.paused);
    }
}
