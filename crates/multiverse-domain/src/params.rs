use alloy::primitives::{Bytes, U256};

use crate::{AccountId, Asset, AssetType, ListingTerms};

/// Universe properties and initial configuration.
#[derive(Debug, Clone)]
pub struct UniverseParams {
    pub name: String,
    /// Payment tokens accepted by the universe, in the order they should be
    /// registered.
    pub payment_tokens: Vec<AccountId>,
}

/// Listing ownership and delegation parameters.
#[derive(Debug, Clone)]
pub struct ListingParams {
    pub lister: AccountId,
    pub configurator: AccountId,
}

/// Assets and locking terms for a new listing.
#[derive(Debug, Clone)]
pub struct AssetListingParams {
    pub assets: Vec<Asset>,
    pub params: ListingParams,
    pub max_lock_period: u32,
    pub immediate_payout: bool,
}

/// Warper registration properties.
#[derive(Debug, Clone)]
pub struct WarperRegistrationParams {
    pub name: String,
    pub universe_id: U256,
    pub paused: bool,
}

/// Inputs for a rent cost estimation.
#[derive(Debug, Clone)]
pub struct RentingEstimationParams {
    pub warper: AssetType,
    pub renter: AccountId,
    pub payment_token: AssetType,
    pub listing_id: U256,
    pub rental_period: u32,
    pub listing_terms_id: U256,
    pub selected_configurator_listing_terms: ListingTerms,
}

/// Inputs for a rent execution. Mirrors the estimation parameters plus the
/// payment ceiling and the token quote obtained off-chain.
#[derive(Debug, Clone)]
pub struct RentingParams {
    pub warper: AssetType,
    pub renter: AccountId,
    pub payment_token: AssetType,
    pub listing_id: U256,
    pub rental_period: u32,
    pub listing_terms_id: U256,
    pub selected_configurator_listing_terms: ListingTerms,
    pub max_payment_amount: U256,
    pub token_quote: Bytes,
    pub token_quote_signature: Bytes,
}
