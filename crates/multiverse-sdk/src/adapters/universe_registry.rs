use alloy::primitives::U256;
use multiverse_domain::AccountId;

use crate::{
    contracts::UniverseRegistry,
    error::SdkError,
    provider::SdkProvider,
    resolver::ContractResolver,
    translator::AddressTranslator,
};

/// Universe properties as recorded by the registry, with payment tokens
/// re-qualified as chain-scoped account identifiers.
#[derive(Debug, Clone)]
pub struct UniverseInfo {
    pub name: String,
    pub payment_tokens: Vec<AccountId>,
}

/// Read-side adapter for the universe registry contract.
pub struct UniverseRegistryAdapter {
    contract: UniverseRegistry::UniverseRegistryInstance<SdkProvider>,
    translator: AddressTranslator,
}

impl UniverseRegistryAdapter {
    pub(crate) fn new(
        resolver: &ContractResolver,
        account_id: &AccountId,
    ) -> Result<Self, SdkError> {
        Ok(Self {
            contract: resolver.resolve_universe_registry(account_id)?,
            translator: resolver.translator().clone(),
        })
    }

    pub async fn universe(&self, universe_id: U256) -> Result<UniverseInfo, SdkError> {
        let info = self.contract.universe(universe_id).call().await?;
        Ok(UniverseInfo {
            name: info.name,
            payment_tokens: info
                .paymentTokens
                .into_iter()
                .map(|address| self.translator.address_to_account_id(address))
                .collect(),
        })
    }

    pub async fn is_universe_owner(
        &self,
        universe_id: U256,
        account_id: &AccountId,
    ) -> Result<bool, SdkError> {
        let address = self.translator.account_id_to_address(account_id)?;
        Ok(self
            .contract
            .isUniverseOwner(universe_id, address)
            .call()
            .await?)
    }
}
