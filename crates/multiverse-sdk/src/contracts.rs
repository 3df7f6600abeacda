//! Inline bindings for the deployed protocol contracts.
//!
//! Struct encodings and method signatures must exactly match the deployed
//! contract version in use; version pinning is an operational discipline,
//! not logic in this layer.

// Generated bindings include methods with many parameters; allow for this module.
#![allow(clippy::too_many_arguments)]

use alloy::sol;

sol! {
    #[derive(Debug)]
    struct UniverseParams {
        string name;
        address[] paymentTokens;
    }

    #[derive(Debug)]
    struct UniverseInfo {
        string name;
        address[] paymentTokens;
    }

    #[derive(Debug)]
    struct TaxTerms {
        bytes4 strategyId;
        bytes strategyData;
    }

    #[derive(Debug)]
    struct ListingTerms {
        bytes4 strategyId;
        bytes strategyData;
    }

    #[derive(Debug)]
    struct ListingParams {
        address lister;
        address configurator;
    }

    #[derive(Debug)]
    struct AssetId {
        bytes4 class;
        bytes data;
    }

    #[derive(Debug)]
    struct Asset {
        AssetId id;
        uint256 value;
    }

    #[derive(Debug)]
    struct WarperRegistrationParams {
        string name;
        uint256 universeId;
        bool paused;
    }

    #[derive(Debug)]
    struct RentingParams {
        uint256 listingId;
        address warper;
        address renter;
        uint32 rentalPeriod;
        address paymentToken;
        uint256 listingTermsId;
        ListingTerms selectedConfiguratorListingTerms;
    }

    #[derive(Debug)]
    struct RentalFees {
        uint256 total;
        uint256 protocolFee;
        uint256 listerBaseFee;
        uint256 listerPremium;
        uint256 universeBaseFee;
        uint256 universePremium;
    }

    #[derive(Debug)]
    struct RentalAgreement {
        Asset[] warpedAssets;
        uint256 universeId;
        address warper;
        bytes32 collectionId;
        address renter;
        uint32 startTime;
        uint32 endTime;
    }

    #[derive(Debug)]
    struct WarperPreset {
        bytes32 id;
        address implementation;
        bool enabled;
    }

    #[derive(Debug)]
    struct WarperInfo {
        uint256 universeId;
        string name;
        bool paused;
    }

    #[derive(Debug)]
    #[sol(rpc)]
    contract UniverseWizard {
        function setupUniverse(UniverseParams calldata universeParams)
            external
            returns (uint256 universeId);

        function setupUniverseAndWarper(
            UniverseParams calldata universeParams,
            TaxTerms calldata warperTaxTerms,
            address existingWarperAddress,
            WarperRegistrationParams calldata warperRegistrationParams,
            bytes32 warperPresetId,
            bytes calldata warperInitData
        ) external returns (uint256 universeId, address warperAddress);
    }

    #[derive(Debug)]
    #[sol(rpc)]
    contract UniverseRegistry {
        function universe(uint256 universeId) external view returns (UniverseInfo memory info);

        function isUniverseOwner(uint256 universeId, address account)
            external
            view
            returns (bool);
    }

    #[derive(Debug)]
    #[sol(rpc)]
    contract ListingWizard {
        function createListingWithTerms(
            uint256 universeId,
            Asset[] calldata assets,
            ListingParams calldata listingParams,
            ListingTerms calldata listingTerms,
            uint256 maxLockPeriod,
            bool immediatePayout
        ) external returns (uint256 listingId, uint256 listingTermsId);
    }

    #[derive(Debug)]
    #[sol(rpc)]
    contract RentingManager {
        function estimateRent(RentingParams calldata rentingParams)
            external
            view
            returns (RentalFees memory fees);

        function rent(
            RentingParams calldata rentingParams,
            bytes calldata tokenQuote,
            bytes calldata tokenQuoteSignature,
            uint256 maxPaymentAmount
        ) external returns (uint256 rentalId);

        function userRentalCount(address renter) external view returns (uint256 count);

        function rentalAgreementInfo(uint256 rentalId)
            external
            view
            returns (RentalAgreement memory agreement);

        function userRentalAgreements(address renter, uint256 offset, uint256 limit)
            external
            view
            returns (uint256[] memory rentalIds, RentalAgreement[] memory agreements);

        function collectionRentedValue(bytes32 collectionId, address renter)
            external
            view
            returns (uint256 value);

        function assetRentalStatus(AssetId calldata assetId)
            external
            view
            returns (uint8 status);
    }

    #[derive(Debug)]
    #[sol(rpc)]
    contract WarperPresetFactory {
        event WarperPresetDeployed(bytes32 indexed presetId, address indexed warper);

        function deployPreset(bytes32 presetId, bytes calldata initData)
            external
            returns (address warper);

        function preset(bytes32 presetId) external view returns (WarperPreset memory);

        function presets() external view returns (WarperPreset[] memory);

        function enablePreset(bytes32 presetId) external;

        function disablePreset(bytes32 presetId) external;

        function presetEnabled(bytes32 presetId) external view returns (bool);
    }

    #[derive(Debug)]
    #[sol(rpc)]
    contract WarperManager {
        function warperInfo(address warper) external view returns (WarperInfo memory info);

        function universeWarperCount(uint256 universeId)
            external
            view
            returns (uint256 count);

        function pauseWarper(address warper) external;

        function unpauseWarper(address warper) external;
    }
}
