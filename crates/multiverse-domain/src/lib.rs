mod account_id;
mod asset;
mod chain_id;
mod error;
mod params;
mod rental;
mod strategy;
mod terms;

pub use account_id::AccountId;
pub use asset::{Asset, AssetId, AssetNamespace, AssetType};
pub use chain_id::ChainId;
pub use error::{IdParseError, TranslationError};
pub use params::{
    AssetListingParams, ListingParams, RentingEstimationParams, RentingParams, UniverseParams,
    WarperRegistrationParams,
};
pub use rental::{RentalAgreement, RentalStatus};
pub use strategy::{ListingStrategy, TaxStrategy, WarperPresetId};
pub use terms::{ListingTerms, TaxTerms};
