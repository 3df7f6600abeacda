use alloy::{
    network::Ethereum,
    primitives::U256,
    providers::PendingTransactionBuilder,
};
use multiverse_domain::{AccountId, AssetType};

use crate::{
    contracts::WarperManager,
    error::SdkError,
    provider::SdkProvider,
    resolver::ContractResolver,
    translator::AddressTranslator,
};

/// On-chain registration record of a warper.
#[derive(Debug, Clone)]
pub struct RegisteredWarper {
    pub name: String,
    pub universe_id: U256,
    pub paused: bool,
}

/// Adapter for the warper manager contract.
pub struct WarperManagerAdapter {
    contract: WarperManager::WarperManagerInstance<SdkProvider>,
    translator: AddressTranslator,
}

impl WarperManagerAdapter {
    pub(crate) fn new(
        resolver: &ContractResolver,
        account_id: &AccountId,
    ) -> Result<Self, SdkError> {
        Ok(Self {
            contract: resolver.resolve_warper_manager(account_id)?,
            translator: resolver.translator().clone(),
        })
    }

    pub async fn warper_info(&self, warper: &AssetType) -> Result<RegisteredWarper, SdkError> {
        let address = self.translator.asset_type_to_address(warper)?;
        let info = self.contract.warperInfo(address).call().await?;
        Ok(RegisteredWarper {
            name: info.name,
            universe_id: info.universeId,
            paused: info.paused,
        })
    }

    pub async fn universe_warper_count(&self, universe_id: U256) -> Result<U256, SdkError> {
        Ok(self.contract.universeWarperCount(universe_id).call().await?)
    }

    pub async fn pause_warper(
        &self,
        warper: &AssetType,
    ) -> Result<PendingTransactionBuilder<Ethereum>, SdkError> {
        let address = self.translator.asset_type_to_address(warper)?;
        Ok(self.contract.pauseWarper(address).send().await?)
    }

    pub async fn unpause_warper(
        &self,
        warper: &AssetType,
    ) -> Result<PendingTransactionBuilder<Ethereum>, SdkError> {
        let address = self.translator.asset_type_to_address(warper)?;
        Ok(self.contract.unpauseWarper(address).send().await?)
    }
}
