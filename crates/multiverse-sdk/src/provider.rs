use std::{num::NonZeroUsize, sync::Arc};

use alloy::{
    network::{Ethereum, EthereumWallet},
    providers::{DynProvider, Provider, ProviderBuilder, WsConnect},
    rpc::client::RpcClient,
    transports::{
        BoxTransport, IntoBoxTransport,
        http::{Http, reqwest::Url},
        layers::FallbackLayer,
    },
};
use tower::ServiceBuilder;

use crate::{config::ChainConfig, error::SdkError, wallets::wallet_from_private_key};

/// Use Arc<DynProvider> for thread-safe sharing.
pub type SdkProvider = Arc<DynProvider<Ethereum>>;

/// Creates a provider with the given wallet and RPC endpoints.
/// Supports both HTTP and WebSocket endpoints with automatic failover.
pub async fn initialize_provider_with_wallet(
    rpc_endpoints: &[String],
    wallet: EthereumWallet,
) -> Result<SdkProvider, SdkError> {
    // Collect all valid transports (HTTP and WebSocket)
    let mut transports: Vec<BoxTransport> = Vec::new();
    let mut valid_endpoints = Vec::new();

    for endpoint in rpc_endpoints {
        if endpoint.starts_with("ws://") || endpoint.starts_with("wss://") {
            let ws_connect = WsConnect::new(endpoint);
            match RpcClient::connect_pubsub(ws_connect).await {
                Ok(client) => {
                    transports.push(client.transport().clone().into_box_transport());
                    valid_endpoints.push(endpoint.clone());
                    tracing::debug!("WebSocket RPC endpoint added: {}", endpoint);
                }
                Err(e) => {
                    tracing::warn!("Failed to connect to WebSocket RPC '{}': {}", endpoint, e);
                }
            }
        } else {
            match endpoint.parse::<Url>() {
                Ok(url) => {
                    transports.push(Http::new(url).into_box_transport());
                    valid_endpoints.push(endpoint.clone());
                    tracing::debug!("HTTP RPC endpoint added: {}", endpoint);
                }
                Err(e) => {
                    tracing::warn!("Invalid RPC URL '{}': {}", endpoint, e);
                }
            }
        }
    }

    if transports.is_empty() {
        return Err(SdkError::RpcConnectionFailed {
            attempts: rpc_endpoints.len(),
        });
    }

    // One active transport at a time: pure failover, ranked by latency and
    // success rate, falling back to the next transport only on failure.
    let fallback_layer = FallbackLayer::default().with_active_transport_count(NonZeroUsize::MIN);

    let transport = ServiceBuilder::new()
        .layer(fallback_layer)
        .service(transports);

    let client = RpcClient::builder().transport(transport, false);

    let provider = ProviderBuilder::new().wallet(wallet).connect_client(client);

    // Verify connectivity before handing the provider out.
    match provider.get_chain_id().await {
        Ok(chain_id) => {
            tracing::info!(
                "Provider initialized with {} RPC endpoint(s) (chain id: {}): {:?}",
                valid_endpoints.len(),
                chain_id,
                valid_endpoints
            );
            Ok(Arc::new(provider.erased()))
        }
        Err(e) => {
            tracing::error!("All RPC endpoints failed connectivity check: {}", e);
            Err(SdkError::RpcConnectionFailed {
                attempts: valid_endpoints.len(),
            })
        }
    }
}

/// Creates a provider using the signing wallet from config and verifies that
/// the endpoint serves the configured chain.
pub async fn initialize_provider(config: &ChainConfig) -> Result<SdkProvider, SdkError> {
    let wallet = wallet_from_private_key(config.signer_private_key())?;
    let provider = initialize_provider_with_wallet(config.rpc_endpoints(), wallet).await?;

    let reported = provider
        .get_chain_id()
        .await
        .map_err(|_| SdkError::RpcConnectionFailed {
            attempts: config.rpc_endpoints().len(),
        })?;

    // Resolved configs always carry a numeric eip155 reference.
    let expected = config.chain_id().reference_u64().unwrap_or_default();
    if reported != expected {
        return Err(SdkError::ChainIdMismatch {
            expected: config.chain_id().to_string(),
            actual: reported,
        });
    }

    Ok(provider)
}
