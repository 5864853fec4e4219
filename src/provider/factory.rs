// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Provider factory functions

use alloy_rpc_client::{ClientBuilder, RpcClient};
use alloy_transport_http::Http;

use crate::errors::RpcError;
use crate::transport::LoggingLayer;

use super::config::ProviderConfig;
use super::JsonRpcProvider;

/// Create a JSON-RPC client for a NEAR node
///
/// The HTTP transport is built on a `reqwest` client carrying the configured
/// timeout, so a hung node fails the call instead of blocking it.
///
/// # Errors
///
/// Returns an error if:
/// - The URL cannot be parsed
/// - The HTTP client cannot be built (e.g. TLS backend unavailable)
pub fn create_rpc_client(config: &ProviderConfig) -> Result<RpcClient, RpcError> {
    let url: url::Url = config
        .url
        .parse()
        .map_err(|e| RpcError::ProviderUrlInvalid(format!("{e}")))?;

    let http_client = reqwest::Client::builder()
        .timeout(config.timeout)
        .build()
        .map_err(|e| RpcError::ClientBuildFailed(e.to_string()))?;

    let transport = Http::with_client(http_client, url);
    let is_local = transport.guess_local();

    let client = if config.logging_enabled {
        ClientBuilder::default()
            .layer(LoggingLayer::new())
            .transport(transport, is_local)
    } else {
        ClientBuilder::default().transport(transport, is_local)
    };

    Ok(client)
}

/// Create a [`JsonRpcProvider`] for the configured network
///
/// # Examples
///
/// ```rust,no_run
/// use nearscan::provider::{create_http_provider, NearProvider, ProviderConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let provider = create_http_provider(ProviderConfig::mainnet())?;
/// let quote = provider.gas_price().await?;
/// println!("{} yocto/gas", quote.gas_price_yocto_per_gas);
/// # Ok(())
/// # }
/// ```
pub fn create_http_provider(config: ProviderConfig) -> Result<JsonRpcProvider, RpcError> {
    let client = create_rpc_client(&config)?;
    tracing::debug!(network = %config.network, url = %config.url, "Created NEAR RPC provider");
    Ok(JsonRpcProvider::new(config.network, client))
}
