use alloy::primitives::{B256, U256};

use crate::{AccountId, Asset, AssetType, error::TranslationError};

/// Rental availability as reported by the renting manager contract.
///
/// A read-only projection of external state: the numeric code returned by
/// the contract is relabeled through [`TryFrom<u8>`] and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RentalStatus {
    None,
    Available,
    Rented,
}

impl RentalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RentalStatus::None => "none",
            RentalStatus::Available => "available",
            RentalStatus::Rented => "rented",
        }
    }
}

impl TryFrom<u8> for RentalStatus {
    type Error = TranslationError;

    /// Relabels the contract's status enum. The table is exhaustive for the
    /// protocol version in use; an unrecognized code is an error, never a
    /// silent default.
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(RentalStatus::None),
            1 => Ok(RentalStatus::Available),
            2 => Ok(RentalStatus::Rented),
            other => Err(TranslationError::UnknownStatusCode(other)),
        }
    }
}

impl From<RentalStatus> for u8 {
    fn from(status: RentalStatus) -> Self {
        match status {
            RentalStatus::None => 0,
            RentalStatus::Available => 1,
            RentalStatus::Rented => 2,
        }
    }
}

/// The on-chain record of an active rental, translated back into
/// chain-qualified identifiers.
#[derive(Debug, Clone)]
pub struct RentalAgreement {
    pub warped_assets: Vec<Asset>,
    pub universe_id: U256,
    pub warper: AssetType,
    pub collection_id: B256,
    pub renter: AccountId,
    pub start_time: u32,
    pub end_time: u32,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn status_codes_relabel_totally_and_injectively() {
        let labels: Vec<_> = (0u8..=2)
            .map(|code| RentalStatus::try_from(code).unwrap())
            .collect();
        assert_eq!(
            labels,
            vec![
                RentalStatus::None,
                RentalStatus::Available,
                RentalStatus::Rented
            ]
        );

        for (code, status) in labels.iter().enumerate() {
            assert_eq!(u8::from(*status), code as u8);
        }
    }

    #[test]
    fn unsupported_status_code_errors() {
        assert!(matches!(
            RentalStatus::try_from(3),
            Err(TranslationError::UnknownStatusCode(3))
        ));
    }

    #[test]
    fn status_labels() {
        assert_eq!(RentalStatus::None.as_str(), "none");
        assert_eq!(RentalStatus::Available.as_str(), "available");
        assert_eq!(RentalStatus::Rented.as_str(), "rented");
    }
}
