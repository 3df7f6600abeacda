use multiverse_domain::{AccountId, ChainId, TranslationError};

use crate::{
    contracts::{
        ListingWizard, RentingManager, UniverseRegistry, UniverseWizard, WarperManager,
        WarperPresetFactory,
    },
    provider::SdkProvider,
    translator::AddressTranslator,
};

/// Maps a chain-qualified contract address onto a typed contract instance.
///
/// Constructor-injected into adapters so the translation logic stays
/// testable in isolation from any live network.
#[derive(Debug, Clone)]
pub struct ContractResolver {
    provider: SdkProvider,
    translator: AddressTranslator,
}

impl ContractResolver {
    pub fn new(provider: SdkProvider, chain_id: ChainId) -> Self {
        Self {
            provider,
            translator: AddressTranslator::new(chain_id),
        }
    }

    pub fn translator(&self) -> &AddressTranslator {
        &self.translator
    }

    pub fn resolve_universe_wizard(
        &self,
        account_id: &AccountId,
    ) -> Result<UniverseWizard::UniverseWizardInstance<SdkProvider>, TranslationError> {
        let address = self.translator.account_id_to_address(account_id)?;
        Ok(UniverseWizard::new(address, self.provider.clone()))
    }

    pub fn resolve_universe_registry(
        &self,
        account_id: &AccountId,
    ) -> Result<UniverseRegistry::UniverseRegistryInstance<SdkProvider>, TranslationError> {
        let address = self.translator.account_id_to_address(account_id)?;
        Ok(UniverseRegistry::new(address, self.provider.clone()))
    }

    pub fn resolve_listing_wizard(
        &self,
        account_id: &AccountId,
    ) -> Result<ListingWizard::ListingWizardInstance<SdkProvider>, TranslationError> {
        let address = self.translator.account_id_to_address(account_id)?;
        Ok(ListingWizard::new(address, self.provider.clone()))
    }

    pub fn resolve_renting_manager(
        &self,
        account_id: &AccountId,
    ) -> Result<RentingManager::RentingManagerInstance<SdkProvider>, TranslationError> {
        let address = self.translator.account_id_to_address(account_id)?;
        Ok(RentingManager::new(address, self.provider.clone()))
    }

    pub fn resolve_warper_preset_factory(
        &self,
        account_id: &AccountId,
    ) -> Result<WarperPresetFactory::WarperPresetFactoryInstance<SdkProvider>, TranslationError>
    {
        let address = self.translator.account_id_to_address(account_id)?;
        Ok(WarperPresetFactory::new(address, self.provider.clone()))
    }

    pub fn resolve_warper_manager(
        &self,
        account_id: &AccountId,
    ) -> Result<WarperManager::WarperManagerInstance<SdkProvider>, TranslationError> {
        let address = self.translator.account_id_to_address(account_id)?;
        Ok(WarperManager::new(address, self.provider.clone()))
    }
}
