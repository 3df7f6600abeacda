use alloy::{
    network::Ethereum,
    primitives::B256,
    providers::{PendingTransactionBuilder, Provider},
    sol_types::SolEvent,
};
use multiverse_domain::{
    AccountId, AssetNamespace, AssetType, TranslationError, WarperPresetId,
};

use crate::{
    contracts::{self, WarperPresetFactory},
    error::SdkError,
    provider::SdkProvider,
    resolver::ContractResolver,
    translator::AddressTranslator,
};

/// A registered warper preset, with the implementation re-qualified as a
/// chain-scoped account identifier.
#[derive(Debug, Clone)]
pub struct WarperPresetInfo {
    pub id: WarperPresetId,
    pub implementation: AccountId,
    pub enabled: bool,
}

/// Adapter for the warper preset factory contract.
pub struct WarperPresetFactoryAdapter {
    contract: WarperPresetFactory::WarperPresetFactoryInstance<SdkProvider>,
    translator: AddressTranslator,
}

impl WarperPresetFactoryAdapter {
    pub(crate) fn new(
        resolver: &ContractResolver,
        account_id: &AccountId,
    ) -> Result<Self, SdkError> {
        Ok(Self {
            contract: resolver.resolve_warper_preset_factory(account_id)?,
            translator: resolver.translator().clone(),
        })
    }

    /// Deploys a new warper from the preset over the original asset.
    pub async fn deploy_preset(
        &self,
        preset_id: WarperPresetId,
        original: &AssetType,
        metahub: &AccountId,
    ) -> Result<PendingTransactionBuilder<Ethereum>, SdkError> {
        let init_data = self
            .translator
            .encode_warper_preset_init_data(original, metahub)?;
        Ok(self
            .contract
            .deployPreset(preset_id.id(), init_data)
            .send()
            .await?)
    }

    /// Looks up the warper deployed by the given transaction, if any, by
    /// decoding the factory's deployment event from the receipt.
    pub async fn find_warper_by_deployment_transaction(
        &self,
        tx_hash: B256,
    ) -> Result<Option<AssetType>, SdkError> {
        let receipt = self
            .contract
            .provider()
            .get_transaction_receipt(tx_hash)
            .await
            .map_err(SdkError::get_receipt)?;

        let Some(receipt) = receipt else {
            return Ok(None);
        };

        for log in receipt.logs() {
            if let Ok(decoded) = WarperPresetFactory::WarperPresetDeployed::decode_log(log.as_ref())
            {
                let warper = self
                    .translator
                    .address_to_asset_type(decoded.data.warper, AssetNamespace::Erc721);
                return Ok(Some(warper));
            }
        }

        Ok(None)
    }

    pub async fn preset(&self, preset_id: WarperPresetId) -> Result<WarperPresetInfo, SdkError> {
        let preset = self.contract.preset(preset_id.id()).call().await?;
        Ok(decode_preset(&self.translator, preset)?)
    }

    pub async fn presets(&self) -> Result<Vec<WarperPresetInfo>, SdkError> {
        let presets = self.contract.presets().call().await?;
        presets
            .into_iter()
            .map(|preset| decode_preset(&self.translator, preset).map_err(SdkError::from))
            .collect()
    }

    pub async fn enable_preset(
        &self,
        preset_id: WarperPresetId,
    ) -> Result<PendingTransactionBuilder<Ethereum>, SdkError> {
        Ok(self.contract.enablePreset(preset_id.id()).send().await?)
    }

    pub async fn disable_preset(
        &self,
        preset_id: WarperPresetId,
    ) -> Result<PendingTransactionBuilder<Ethereum>, SdkError> {
        Ok(self.contract.disablePreset(preset_id.id()).send().await?)
    }

    pub async fn preset_enabled(&self, preset_id: WarperPresetId) -> Result<bool, SdkError> {
        Ok(self.contract.presetEnabled(preset_id.id()).call().await?)
    }
}

fn decode_preset(
    translator: &AddressTranslator,
    preset: contracts::WarperPreset,
) -> Result<WarperPresetInfo, TranslationError> {
    Ok(WarperPresetInfo {
        id: WarperPresetId::from_id(preset.id)?,
        implementation: translator.address_to_account_id(preset.implementation),
        enabled: preset.enabled,
    })
}
