use alloy::{
    contract::Error as ContractError,
    signers::local::LocalSignerError,
    transports::{RpcError, TransportErrorKind},
};
use multiverse_domain::TranslationError;

/// SDK-level error taxonomy.
///
/// Translation failures are raised synchronously before any external call.
/// Contract and transport failures are carried through unmodified; this
/// layer performs no interpretation, retry, or recovery of them.
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    #[error("Contract error: {0}")]
    Contract(#[from] ContractError),

    #[error(transparent)]
    Translation(#[from] TranslationError),

    #[error("Invalid private key (length: {key_length})")]
    InvalidPrivateKey {
        key_length: usize,
        #[source]
        source: LocalSignerError,
    },

    #[error("RPC connection failed after trying {attempts} endpoint(s)")]
    RpcConnectionFailed { attempts: usize },

    #[error("Chain id mismatch: configured '{expected}', endpoint reports {actual}")]
    ChainIdMismatch { expected: String, actual: u64 },

    #[error("Failed to get transaction receipt: {reason}")]
    GetReceipt {
        reason: String,
        #[source]
        source: Option<RpcError<TransportErrorKind>>,
    },

    #[error("Transaction receipt failed: {reason}")]
    ReceiptFailed { reason: String },
}

impl SdkError {
    /// Create a GetReceipt error with the underlying RPC error
    pub(crate) fn get_receipt(err: RpcError<TransportErrorKind>) -> Self {
        Self::GetReceipt {
            reason: err.to_string(),
            source: Some(err),
        }
    }
}
