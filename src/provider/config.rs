// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Provider configuration options

use std::time::Duration;

use crate::config::constants::{endpoints, timeouts};
use crate::config::{NearscanConfig, NetworkEndpoint};

/// Configuration for creating a NEAR JSON-RPC provider
///
/// # Example
///
/// ```rust
/// use nearscan::provider::ProviderConfig;
/// use std::time::Duration;
///
/// let config = ProviderConfig::new("mainnet", "https://rpc.mainnet.near.org")
///     .with_timeout(Duration::from_secs(2))
///     .with_logging();
/// assert!(config.logging_enabled);
/// ```
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Network label carried into quotes and errors
    pub network: String,
    /// RPC endpoint URL
    pub url: String,
    /// Request timeout duration
    pub timeout: Duration,
    /// Wrap the transport in [`LoggingLayer`](crate::transport::LoggingLayer)
    pub logging_enabled: bool,
}

impl ProviderConfig {
    /// Create a configuration with the default timeout and no logging layer
    #[must_use]
    pub fn new(network: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            network: network.into(),
            url: url.into(),
            timeout: timeouts::RPC_TIMEOUT,
            logging_enabled: false,
        }
    }

    /// Set request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enable per-call tracing of method and latency
    #[must_use]
    pub fn with_logging(mut self) -> Self {
        self.logging_enabled = true;
        self
    }

    /// Configuration for a network entry of a [`NearscanConfig`]
    #[must_use]
    pub fn for_network(config: &NearscanConfig, network: &NetworkEndpoint) -> Self {
        Self::new(&network.name, &network.rpc_url)
            .with_timeout(config.get_rpc_timeout(&network.name))
            .with_logging()
    }
}

/// Preset configurations for the public NEAR endpoints
impl ProviderConfig {
    #[must_use]
    pub fn mainnet() -> Self {
        Self::new("mainnet", endpoints::NEAR_MAINNET_RPC)
    }

    #[must_use]
    pub fn testnet() -> Self {
        Self::new("testnet", endpoints::NEAR_TESTNET_RPC)
    }
}
