//! One adapter per contract family.
//!
//! Uniform pattern: hold one resolved contract instance plus the address
//! translator; translate every embedded identifier, invoke exactly one
//! contract entry point, return the raw result unchanged. No batching,
//! retrying, or caching; adapters keep no per-call state, so concurrent
//! invocation is safe by construction.

mod listing_wizard;
mod renting_manager;
mod universe_registry;
mod universe_wizard;
mod warper_manager;
mod warper_preset_factory;

pub use listing_wizard::ListingWizardAdapter;
pub use renting_manager::RentingManagerAdapter;
pub use universe_registry::{UniverseInfo, UniverseRegistryAdapter};
pub use universe_wizard::UniverseWizardAdapter;
pub use warper_manager::{RegisteredWarper, WarperManagerAdapter};
pub use warper_preset_factory::{WarperPresetFactoryAdapter, WarperPresetInfo};

use multiverse_domain::{ListingTerms, TaxTerms};

use crate::contracts;

pub(crate) fn encode_listing_terms(terms: &ListingTerms) -> contracts::ListingTerms {
    contracts::ListingTerms {
        strategyId: terms.strategy_id,
        strategyData: terms.strategy_data.clone(),
    }
}

pub(crate) fn encode_tax_terms(terms: &TaxTerms) -> contracts::TaxTerms {
    contracts::TaxTerms {
        strategyId: terms.strategy_id,
        strategyData: terms.strategy_data.clone(),
    }
}
