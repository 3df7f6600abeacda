use alloy::{
    network::Ethereum,
    providers::PendingTransactionBuilder,
    rpc::types::TransactionReceipt,
};
use multiverse_domain::{AccountId, ChainId};

use crate::{
    adapters::{
        ListingWizardAdapter, RentingManagerAdapter, UniverseRegistryAdapter,
        UniverseWizardAdapter, WarperManagerAdapter, WarperPresetFactoryAdapter,
    },
    config::ChainConfig,
    error::SdkError,
    provider::initialize_provider,
    resolver::ContractResolver,
    translator::AddressTranslator,
};

/// Entry point for the SDK: holds the validated configuration and a shared
/// provider, and hands out one adapter per contract family.
///
/// Adapters are cheap to construct; callers resolve them per contract address
/// rather than caching them here.
pub struct Multiverse {
    config: ChainConfig,
    resolver: ContractResolver,
}

impl Multiverse {
    /// Connects to the configured chain and verifies it serves the expected
    /// chain id before handing the instance out.
    pub async fn init(config: ChainConfig) -> Result<Self, SdkError> {
        let provider = initialize_provider(&config).await?;
        let resolver = ContractResolver::new(provider, config.chain_id().clone());

        tracing::info!(
            chain_id = %config.chain_id(),
            signer = %config.signer_address(),
            "Multiverse SDK initialized"
        );

        Ok(Self { config, resolver })
    }

    pub fn chain_id(&self) -> &ChainId {
        self.config.chain_id()
    }

    pub fn translator(&self) -> &AddressTranslator {
        self.resolver.translator()
    }

    pub fn universe_wizard(
        &self,
        account_id: &AccountId,
    ) -> Result<UniverseWizardAdapter, SdkError> {
        UniverseWizardAdapter::new(&self.resolver, account_id)
    }

    pub fn universe_registry(
        &self,
        account_id: &AccountId,
    ) -> Result<UniverseRegistryAdapter, SdkError> {
        UniverseRegistryAdapter::new(&self.resolver, account_id)
    }

    pub fn listing_wizard(
        &self,
        account_id: &AccountId,
    ) -> Result<ListingWizardAdapter, SdkError> {
        ListingWizardAdapter::new(&self.resolver, account_id)
    }

    pub fn renting_manager(
        &self,
        account_id: &AccountId,
    ) -> Result<RentingManagerAdapter, SdkError> {
        RentingManagerAdapter::new(&self.resolver, account_id)
    }

    pub fn warper_preset_factory(
        &self,
        account_id: &AccountId,
    ) -> Result<WarperPresetFactoryAdapter, SdkError> {
        WarperPresetFactoryAdapter::new(&self.resolver, account_id)
    }

    pub fn warper_manager(&self, account_id: &AccountId) -> Result<WarperManagerAdapter, SdkError> {
        WarperManagerAdapter::new(&self.resolver, account_id)
    }

    /// Await the receipt for a pending transaction with configured
    /// confirmations/timeout.
    pub async fn await_receipt(
        &self,
        pending_tx: PendingTransactionBuilder<Ethereum>,
    ) -> Result<TransactionReceipt, SdkError> {
        let pending_tx = pending_tx
            .with_required_confirmations(self.config.tx_confirmations())
            .with_timeout(self.config.tx_receipt_timeout());

        match pending_tx.get_receipt().await {
            Ok(receipt) => Ok(receipt),
            Err(err) => {
                tracing::error!("Failed to retrieve transaction receipt: {:?}", err);
                Err(SdkError::ReceiptFailed {
                    reason: err.to_string(),
                })
            }
        }
    }
}
