use thiserror::Error;

/// Errors produced while parsing CAIP-style identifier strings.
#[derive(Debug, Error)]
pub enum IdParseError {
    #[error("Invalid identifier format: {0}")]
    Format(String),
    #[error("Invalid chain namespace: {0}")]
    ChainNamespace(String),
    #[error("Invalid chain reference: {0}")]
    ChainReference(String),
    #[error("Invalid address: {0}")]
    Address(String),
    #[error("Invalid asset namespace: {0}")]
    AssetNamespace(String),
    #[error("Invalid token id: {0}")]
    TokenId(String),
}

/// Errors raised by the translation layer before any contract call is made.
///
/// Every variant is local and fatal to the single call that produced it;
/// nothing is submitted to the chain once translation has failed.
#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("Identifier chain mismatch: expected '{expected}', got '{actual}'")]
    ChainMismatch { expected: String, actual: String },

    #[error("Invalid asset type: {0}")]
    InvalidAssetType(String),

    #[error("Unknown asset class id 0x{0}")]
    UnknownAssetClass(String),

    #[error("Unknown asset namespace '{0}'")]
    UnknownNamespace(String),

    #[error("Unknown rental status code {0}")]
    UnknownStatusCode(u8),

    #[error("Unknown listing strategy id 0x{0}")]
    UnknownListingStrategy(String),

    #[error("Unknown tax strategy id 0x{0}")]
    UnknownTaxStrategy(String),

    #[error("Unknown warper preset id 0x{0}")]
    UnknownWarperPreset(String),

    #[error("Asset data decoding failed: {0}")]
    AssetData(String),
}
