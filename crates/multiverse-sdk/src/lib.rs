//! Thin, typed client for the Multiverse NFT-rental protocol.
//!
//! The SDK translates chain-qualified identifiers into the raw encodings the
//! protocol contracts expect, forwards calls through `alloy`-generated
//! bindings, and returns contract results re-qualified against the configured
//! chain. Translation failures surface before any network traffic; contract
//! results are otherwise passed through unchanged.

mod adapters;
mod config;
mod config_error;
mod contracts;
mod error;
mod multiverse;
mod provider;
mod resolver;
mod translator;
mod wallets;

pub use adapters::{
    ListingWizardAdapter, RegisteredWarper, RentingManagerAdapter, UniverseInfo,
    UniverseRegistryAdapter, UniverseWizardAdapter, WarperManagerAdapter,
    WarperPresetFactoryAdapter, WarperPresetInfo,
};
pub use config::{ChainConfig, ChainConfigRaw};
pub use config_error::ConfigError;
pub use contracts::RentalFees;
pub use error::SdkError;
pub use multiverse::Multiverse;
pub use provider::{SdkProvider, initialize_provider, initialize_provider_with_wallet};
pub use resolver::ContractResolver;
pub use translator::AddressTranslator;
pub use wallets::{signer_from_private_key, wallet_from_private_key};

pub use multiverse_domain as domain;
