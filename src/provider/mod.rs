// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! NEAR JSON-RPC providers
//!
//! The gas operations talk to a node through the [`NearProvider`] trait, so
//! they can be driven by the real [`JsonRpcProvider`] or by an in-memory
//! implementation in tests.
//!
//! This module provides:
//! - [`NearProvider`] - the two node calls the crate needs (`gas_price`, `status`)
//! - [`JsonRpcProvider`] - implementation over alloy's JSON-RPC client
//! - [`create_http_provider`] - build a provider from a [`ProviderConfig`]
//!
//! # Response decoding
//!
//! Node responses are decoded once, at this boundary, into partial views where
//! every field is optional. Missing required fields become
//! [`RpcError::MissingField`] rather than panics.

mod config;
mod factory;

pub use config::ProviderConfig;
pub use factory::{create_http_provider, create_rpc_client};

use alloy_rpc_client::RpcClient;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::Instrument;

use crate::errors::RpcError;
use crate::spans;
use crate::types::gas::GasPriceQuote;

/// Node summary from the `status` method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeStatus {
    /// nearcore release, e.g. `2.3.0`
    pub version: String,
    /// Build identifier, when reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<String>,
    pub protocol_version: u64,
    pub latest_block_height: u64,
}

/// Calls a NEAR node must answer for gas estimation and telemetry
#[async_trait]
pub trait NearProvider: Send + Sync {
    /// Network label, e.g. `mainnet`
    fn network(&self) -> &str;

    /// Current gas price for the latest block
    async fn gas_price(&self) -> Result<GasPriceQuote, RpcError>;

    /// Node version and chain head
    async fn status(&self) -> Result<NodeStatus, RpcError>;
}

/// [`NearProvider`] backed by an alloy [`RpcClient`]
#[derive(Debug, Clone)]
pub struct JsonRpcProvider {
    network: String,
    client: RpcClient,
}

impl JsonRpcProvider {
    pub fn new(network: impl Into<String>, client: RpcClient) -> Self {
        Self {
            network: network.into(),
            client,
        }
    }
}

#[async_trait]
impl NearProvider for JsonRpcProvider {
    fn network(&self) -> &str {
        &self.network
    }

    async fn gas_price(&self) -> Result<GasPriceQuote, RpcError> {
        // `[null]` asks for the price at the latest block
        let view = async {
            self.client
                .request::<_, GasPriceView>("gas_price", json!([null]))
                .await
        }
        .instrument(spans::rpc_gas_price(&self.network))
        .await
        .map_err(|e| RpcError::request_failed("gas_price", e))?;

        let price = view
            .gas_price
            .as_ref()
            .and_then(decimal_string)
            .ok_or_else(|| RpcError::missing_field("gas_price", "gas_price"))?;

        Ok(GasPriceQuote::new(&self.network, price))
    }

    async fn status(&self) -> Result<NodeStatus, RpcError> {
        let view = async {
            self.client
                .request::<_, StatusView>("status", json!([]))
                .await
        }
        .instrument(spans::rpc_status(&self.network))
        .await
        .map_err(|e| RpcError::request_failed("status", e))?;

        view.into_status()
    }
}

/// Partial `gas_price` result
#[derive(Debug, Deserialize)]
struct GasPriceView {
    gas_price: Option<Value>,
}

/// Partial `status` result
#[derive(Debug, Deserialize)]
pub(crate) struct StatusView {
    version: Option<VersionView>,
    protocol_version: Option<u64>,
    sync_info: Option<SyncInfoView>,
}

#[derive(Debug, Deserialize)]
struct VersionView {
    version: Option<String>,
    build: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SyncInfoView {
    latest_block_height: Option<u64>,
}

impl StatusView {
    pub(crate) fn into_status(self) -> Result<NodeStatus, RpcError> {
        let (version, build) = match self.version {
            Some(VersionView {
                version: Some(version),
                build,
            }) => (version, build),
            _ => return Err(RpcError::missing_field("status", "version.version")),
        };
        let protocol_version = self
            .protocol_version
            .ok_or_else(|| RpcError::missing_field("status", "protocol_version"))?;
        let latest_block_height = self
            .sync_info
            .and_then(|s| s.latest_block_height)
            .ok_or_else(|| RpcError::missing_field("status", "sync_info.latest_block_height"))?;

        Ok(NodeStatus {
            version,
            build,
            protocol_version,
            latest_block_height,
        })
    }
}

/// Accept the price as a JSON string or a bare integer
fn decimal_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
