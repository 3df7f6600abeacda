use std::time::Duration;

use alloy::signers::local::PrivateKeySigner;
use multiverse_domain::ChainId;
use serde::{Deserialize, Serialize};

use crate::config_error::ConfigError;

/// Configuration for the chain the SDK operates against.
///
/// **Secret handling**: the signer private key should be provided via
/// configuration (resolved at config load time) or the
/// `SIGNER_PRIVATE_KEY` environment variable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChainConfigRaw {
    /// CAIP-2 identifier of the target chain (e.g., "eip155:31337").
    /// Only the "eip155" namespace is supported.
    pub chain_id: ChainId,

    /// RPC endpoints for EVM JSON-RPC calls (supports HTTP and WebSocket).
    /// Multiple endpoints enable fallback if primary fails.
    #[serde(default)]
    pub rpc_endpoints: Vec<String>,

    /// Private key for the signing wallet.
    /// Set via SIGNER_PRIVATE_KEY env var or config file.
    pub signer_private_key: Option<String>,

    /// Address of the signing wallet (20-byte EVM address).
    /// If omitted, it will be derived from the private key.
    pub signer_address: Option<String>,

    /// Number of confirmations to wait for when fetching transaction receipts.
    pub tx_confirmations: u64,

    /// Timeout for waiting on transaction receipts in milliseconds.
    /// Set to 0 to disable the timeout.
    pub tx_receipt_timeout_ms: u64,
}

impl ChainConfigRaw {
    /// Ensures the signer private key is set.
    pub fn ensure_signer_private_key(&self) -> Result<(), ConfigError> {
        if self.signer_private_key.is_none() {
            return Err(ConfigError::MissingSecret(
                "SIGNER_PRIVATE_KEY env var or signer_private_key config required".to_string(),
            ));
        }
        Ok(())
    }

    /// Ensures at least one RPC endpoint is configured.
    pub fn ensure_rpc_endpoints(&self) -> Result<(), ConfigError> {
        if self.rpc_endpoints.is_empty() {
            return Err(ConfigError::InvalidConfig(
                "rpc_endpoints must include at least one endpoint".to_string(),
            ));
        }
        Ok(())
    }

    /// Ensures the configured chain is an EVM chain with a numeric reference.
    pub fn ensure_chain_id(&self) -> Result<(), ConfigError> {
        if self.chain_id.namespace() != "eip155" {
            return Err(ConfigError::InvalidConfig(format!(
                "unsupported chain namespace '{}': only 'eip155' chains are supported",
                self.chain_id.namespace()
            )));
        }
        if self.chain_id.reference_u64().is_none() {
            return Err(ConfigError::InvalidConfig(format!(
                "chain reference '{}' is not a numeric chain id",
                self.chain_id.reference()
            )));
        }
        Ok(())
    }

    pub fn resolve(self) -> Result<ChainConfig, ConfigError> {
        let config = self;
        config.ensure_chain_id()?;
        config.ensure_rpc_endpoints()?;
        config.ensure_signer_private_key()?;

        let signer_key = config.signer_private_key.clone().ok_or_else(|| {
            ConfigError::MissingSecret(
                "SIGNER_PRIVATE_KEY env var or signer_private_key config required".to_string(),
            )
        })?;
        let derived_address = derive_signer_address(&signer_key)?;

        let signer_address = match config.signer_address.as_deref() {
            Some(address) => {
                let parsed = address.parse::<alloy::primitives::Address>().map_err(|e| {
                    ConfigError::InvalidConfig(format!("invalid signer address '{address}': {e}"))
                })?;
                if parsed != derived_address {
                    return Err(ConfigError::InvalidConfig(format!(
                        "signer_address does not match derived address: provided={}, derived={}",
                        address, derived_address
                    )));
                }
                derived_address.to_checksum(None)
            }
            None => derived_address.to_checksum(None),
        };

        Ok(ChainConfig {
            chain_id: config.chain_id,
            rpc_endpoints: config.rpc_endpoints,
            signer_private_key: signer_key,
            signer_address,
            tx_confirmations: config.tx_confirmations,
            tx_receipt_timeout_ms: config.tx_receipt_timeout_ms,
        })
    }
}

/// Validated chain configuration produced by [`ChainConfigRaw::resolve`].
#[derive(Debug, Clone)]
pub struct ChainConfig {
    pub chain_id: ChainId,
    pub rpc_endpoints: Vec<String>,
    pub signer_private_key: String,
    pub signer_address: String,
    pub tx_confirmations: u64,
    pub tx_receipt_timeout_ms: u64,
}

impl ChainConfig {
    pub fn chain_id(&self) -> &ChainId {
        &self.chain_id
    }

    pub fn rpc_endpoints(&self) -> &Vec<String> {
        &self.rpc_endpoints
    }

    pub fn signer_private_key(&self) -> &str {
        &self.signer_private_key
    }

    pub fn signer_address(&self) -> &str {
        &self.signer_address
    }

    pub fn tx_confirmations(&self) -> u64 {
        self.tx_confirmations
    }

    pub fn tx_receipt_timeout(&self) -> Option<Duration> {
        if self.tx_receipt_timeout_ms == 0 {
            None
        } else {
            Some(Duration::from_millis(self.tx_receipt_timeout_ms))
        }
    }
}

fn derive_signer_address(
    private_key: &str,
) -> Result<alloy::primitives::Address, ConfigError> {
    let signer: PrivateKeySigner = private_key
        .parse()
        .map_err(|e| ConfigError::InvalidConfig(format!("invalid signer private key: {e}")))?;
    Ok(signer.address())
}
