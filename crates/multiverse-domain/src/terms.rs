use alloy::{
    primitives::{Bytes, FixedBytes, U256},
    sol_types::SolValue,
};

use crate::{
    error::TranslationError,
    strategy::{ListingStrategy, TaxStrategy},
};

/// Strategy-tagged pricing terms attached to a listing.
///
/// `strategy_data` carries the ABI-encoded parameters of the tagged
/// strategy; the constructors below are the only place the encoding lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingTerms {
    pub strategy_id: FixedBytes<4>,
    pub strategy_data: Bytes,
}

impl ListingTerms {
    /// Empty terms, used where the configurator has not selected any.
    pub fn none() -> Self {
        Self {
            strategy_id: FixedBytes::ZERO,
            strategy_data: Bytes::new(),
        }
    }

    pub fn fixed_rate(base_rate: U256) -> Self {
        Self {
            strategy_id: ListingStrategy::FixedRate.id(),
            strategy_data: base_rate.abi_encode().into(),
        }
    }

    pub fn fixed_rate_with_reward(base_rate: U256, reward_percent: U256) -> Self {
        Self {
            strategy_id: ListingStrategy::FixedRateWithReward.id(),
            strategy_data: (base_rate, reward_percent).abi_encode().into(),
        }
    }

    /// Resolve the tagged strategy, failing on ids outside the fixed table.
    pub fn strategy(&self) -> Result<ListingStrategy, TranslationError> {
        ListingStrategy::from_id(self.strategy_id)
    }
}

/// Strategy-tagged fee terms attached to a universe-warper pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxTerms {
    pub strategy_id: FixedBytes<4>,
    pub strategy_data: Bytes,
}

impl TaxTerms {
    pub fn fixed_rate(tax_rate: U256) -> Self {
        Self {
            strategy_id: TaxStrategy::FixedRate.id(),
            strategy_data: tax_rate.abi_encode().into(),
        }
    }

    pub fn fixed_rate_with_reward(tax_rate: U256, reward_rate: U256) -> Self {
        Self {
            strategy_id: TaxStrategy::FixedRateWithReward.id(),
            strategy_data: (tax_rate, reward_rate).abi_encode().into(),
        }
    }

    pub fn strategy(&self) -> Result<TaxStrategy, TranslationError> {
        TaxStrategy::from_id(self.strategy_id)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn fixed_rate_terms_carry_the_strategy_id() {
        let terms = ListingTerms::fixed_rate(U256::from(100));
        assert_eq!(terms.strategy().unwrap(), ListingStrategy::FixedRate);
        assert_eq!(
            terms.strategy_data,
            Bytes::from(U256::from(100).abi_encode())
        );
    }

    #[test]
    fn reward_terms_encode_both_rates() {
        let terms = ListingTerms::fixed_rate_with_reward(U256::from(100), U256::from(5));
        assert_eq!(
            terms.strategy().unwrap(),
            ListingStrategy::FixedRateWithReward
        );
        // Two uint256 words.
        assert_eq!(terms.strategy_data.len(), 64);
    }

    #[test]
    fn tax_terms_resolve_their_strategy() {
        let terms = TaxTerms::fixed_rate_with_reward(U256::from(3), U256::from(2));
        assert_eq!(terms.strategy().unwrap(), TaxStrategy::FixedRateWithReward);
    }

    #[test]
    fn empty_terms_do_not_resolve() {
        assert!(ListingTerms::none().strategy().is_err());
    }
}
