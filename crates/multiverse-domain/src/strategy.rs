use alloy::primitives::{B256, FixedBytes, hex, keccak256};

use crate::error::TranslationError;

fn strategy_id(preimage: &[u8]) -> FixedBytes<4> {
    FixedBytes::<4>::from_slice(&keccak256(preimage)[..4])
}

/// Listing pricing strategies known to the protocol.
///
/// The `bytes4` id is derived from the strategy's registered name, exactly
/// as the contracts compute it; [`ListingStrategy::id`] is the only table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingStrategy {
    FixedRate,
    FixedRateWithReward,
}

impl ListingStrategy {
    pub const ALL: [ListingStrategy; 2] =
        [ListingStrategy::FixedRate, ListingStrategy::FixedRateWithReward];

    pub fn id(&self) -> FixedBytes<4> {
        match self {
            ListingStrategy::FixedRate => strategy_id(b"FIXED_RATE_LISTING"),
            ListingStrategy::FixedRateWithReward => {
                strategy_id(b"FIXED_RATE_LISTING_WITH_REWARD")
            }
        }
    }

    pub fn from_id(id: FixedBytes<4>) -> Result<Self, TranslationError> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.id() == id)
            .ok_or_else(|| TranslationError::UnknownListingStrategy(hex::encode(id)))
    }
}

/// Tax strategies attachable to a universe-warper pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaxStrategy {
    FixedRate,
    FixedRateWithReward,
}

impl TaxStrategy {
    pub const ALL: [TaxStrategy; 2] = [TaxStrategy::FixedRate, TaxStrategy::FixedRateWithReward];

    pub fn id(&self) -> FixedBytes<4> {
        match self {
            TaxStrategy::FixedRate => strategy_id(b"FIXED_RATE_TAX"),
            TaxStrategy::FixedRateWithReward => strategy_id(b"FIXED_RATE_TAX_WITH_REWARD"),
        }
    }

    pub fn from_id(id: FixedBytes<4>) -> Result<Self, TranslationError> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.id() == id)
            .ok_or_else(|| TranslationError::UnknownTaxStrategy(hex::encode(id)))
    }
}

/// Warper preset implementations registered with the preset factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarperPresetId {
    Erc721ConfigurablePreset,
}

impl WarperPresetId {
    pub const ALL: [WarperPresetId; 1] = [WarperPresetId::Erc721ConfigurablePreset];

    pub fn id(&self) -> B256 {
        match self {
            WarperPresetId::Erc721ConfigurablePreset => keccak256(b"ERC721ConfigurablePreset"),
        }
    }

    pub fn from_id(id: B256) -> Result<Self, TranslationError> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.id() == id)
            .ok_or_else(|| TranslationError::UnknownWarperPreset(hex::encode(id)))
    }
}
