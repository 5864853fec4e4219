// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for nearscan operations
//!
//! Endpoints, networks and per-request timeouts for every upstream source.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use nearscan::NearscanConfig;
//!
//! // Public NEAR RPC, CoinGecko, Etherscan, 5 second timeouts
//! let config = NearscanConfig::default();
//! assert_eq!(config.networks.len(), 2);
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use nearscan::NearscanConfigBuilder;
//! use std::time::Duration;
//!
//! let config = NearscanConfigBuilder::with_defaults()
//!     .primary_rpc_url("https://near.lava.build")
//!     .http_timeout(Duration::from_secs(2))
//!     .network_rpc_timeout("testnet", Duration::from_secs(1))
//!     .build();
//!
//! assert_eq!(config.get_rpc_timeout("testnet"), Duration::from_secs(1));
//! assert_eq!(config.get_rpc_timeout("mainnet"), Duration::from_secs(5));
//! ```

use std::time::Duration;

use self::constants::{endpoints, timeouts};

pub mod constants;

/// Label of the network that estimates and comparisons are priced against
pub const PRIMARY_NETWORK: &str = "mainnet";

/// Configuration for nearscan operations
///
/// Use [`NearscanConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone)]
pub struct NearscanConfig {
    /// Networks queried for gas snapshots; the one labelled
    /// [`PRIMARY_NETWORK`] also prices estimates and comparisons
    pub networks: Vec<NetworkEndpoint>,

    /// Fiat price feed base URL (CoinGecko `simple/price` compatible)
    pub price_feed_url: String,

    /// Reference-chain gas oracle URL (Etherscan `gasoracle` compatible)
    pub gas_oracle_url: String,

    /// Explorer REST API base URL
    pub explorer_url: String,

    /// Timeout for NEAR JSON-RPC requests
    /// Default: 5 seconds
    pub rpc_timeout: Duration,

    /// Timeout for REST feed requests
    /// Default: 5 seconds
    pub http_timeout: Duration,
}

/// A NEAR network and its RPC endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkEndpoint {
    /// Label used in results (`mainnet`, `testnet`)
    pub name: String,

    /// JSON-RPC URL
    pub rpc_url: String,

    /// Override RPC timeout for this network
    pub rpc_timeout: Option<Duration>,
}

impl NetworkEndpoint {
    pub fn new(name: impl Into<String>, rpc_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rpc_url: rpc_url.into(),
            rpc_timeout: None,
        }
    }
}

impl Default for NearscanConfig {
    fn default() -> Self {
        Self::with_public_endpoints()
    }
}

impl NearscanConfig {
    /// Config pointing at the public NEAR RPC nodes and public feeds
    pub fn with_public_endpoints() -> Self {
        Self {
            networks: vec![
                NetworkEndpoint::new("mainnet", endpoints::NEAR_MAINNET_RPC),
                NetworkEndpoint::new("testnet", endpoints::NEAR_TESTNET_RPC),
            ],
            price_feed_url: endpoints::COINGECKO_SIMPLE_PRICE.to_string(),
            gas_oracle_url: endpoints::ETHERSCAN_GAS_ORACLE.to_string(),
            explorer_url: endpoints::NEARBLOCKS_API.to_string(),
            rpc_timeout: timeouts::RPC_TIMEOUT,
            http_timeout: timeouts::HTTP_TIMEOUT,
        }
    }

    /// Public defaults overridden by environment variables
    ///
    /// Reads `.env` if present, then `NEAR_RPC_URL`, `NEAR_TESTNET_RPC_URL`,
    /// `PRICE_FEED_URL`, `GAS_ORACLE_URL`, `EXPLORER_URL`, `RPC_TIMEOUT_MS` and
    /// `HTTP_TIMEOUT_MS`. Unparseable timeouts are logged and ignored.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut builder = NearscanConfigBuilder::with_defaults();
        if let Ok(url) = dotenvy::var("NEAR_RPC_URL") {
            builder = builder.network_rpc_url("mainnet", url);
        }
        if let Ok(url) = dotenvy::var("NEAR_TESTNET_RPC_URL") {
            builder = builder.network_rpc_url("testnet", url);
        }
        if let Ok(url) = dotenvy::var("PRICE_FEED_URL") {
            builder = builder.price_feed_url(url);
        }
        if let Ok(url) = dotenvy::var("GAS_ORACLE_URL") {
            builder = builder.gas_oracle_url(url);
        }
        if let Ok(url) = dotenvy::var("EXPLORER_URL") {
            builder = builder.explorer_url(url);
        }
        if let Some(timeout) = duration_ms_var("RPC_TIMEOUT_MS") {
            builder = builder.rpc_timeout(timeout);
        }
        if let Some(timeout) = duration_ms_var("HTTP_TIMEOUT_MS") {
            builder = builder.http_timeout(timeout);
        }
        builder.build()
    }

    /// Endpoint for a network label
    pub fn network(&self, name: &str) -> Option<&NetworkEndpoint> {
        self.networks.iter().find(|n| n.name == name)
    }

    /// Endpoint used for estimates and comparisons
    ///
    /// Falls back to the first configured network when no network is
    /// labelled [`PRIMARY_NETWORK`].
    pub fn primary_network(&self) -> Option<&NetworkEndpoint> {
        self.network(PRIMARY_NETWORK).or_else(|| self.networks.first())
    }

    /// Effective RPC timeout for a network
    ///
    /// Returns the network override if set, otherwise the global default.
    pub fn get_rpc_timeout(&self, network: &str) -> Duration {
        self.network(network)
            .and_then(|n| n.rpc_timeout)
            .unwrap_or(self.rpc_timeout)
    }
}

fn duration_ms_var(key: &str) -> Option<Duration> {
    let raw = dotenvy::var(key).ok()?;
    match raw.trim().parse::<u64>() {
        Ok(ms) => Some(Duration::from_millis(ms)),
        Err(e) => {
            tracing::warn!(key, value = %raw, error = %e, "Ignoring invalid timeout");
            None
        }
    }
}

/// Builder for [`NearscanConfig`]
pub struct NearscanConfigBuilder {
    config: NearscanConfig,
}

impl Default for NearscanConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NearscanConfigBuilder {
    /// Create a builder with no networks and default feeds/timeouts
    pub fn new() -> Self {
        Self {
            config: NearscanConfig {
                networks: Vec::new(),
                ..NearscanConfig::with_public_endpoints()
            },
        }
    }

    /// Start from [`NearscanConfig::with_public_endpoints`]
    pub fn with_defaults() -> Self {
        Self {
            config: NearscanConfig::with_public_endpoints(),
        }
    }

    /// Add a network, or replace the URL of an existing one
    pub fn network_rpc_url(mut self, name: &str, rpc_url: impl Into<String>) -> Self {
        let rpc_url = rpc_url.into();
        match self.config.networks.iter_mut().find(|n| n.name == name) {
            Some(network) => network.rpc_url = rpc_url,
            None => self
                .config
                .networks
                .push(NetworkEndpoint::new(name, rpc_url)),
        }
        self
    }

    /// Set the RPC URL of the primary network
    pub fn primary_rpc_url(self, rpc_url: impl Into<String>) -> Self {
        self.network_rpc_url(PRIMARY_NETWORK, rpc_url)
    }

    /// Override the RPC timeout of one network (no-op for unknown networks)
    pub fn network_rpc_timeout(mut self, name: &str, timeout: Duration) -> Self {
        if let Some(network) = self.config.networks.iter_mut().find(|n| n.name == name) {
            network.rpc_timeout = Some(timeout);
        }
        self
    }

    pub fn price_feed_url(mut self, url: impl Into<String>) -> Self {
        self.config.price_feed_url = url.into();
        self
    }

    pub fn gas_oracle_url(mut self, url: impl Into<String>) -> Self {
        self.config.gas_oracle_url = url.into();
        self
    }

    pub fn explorer_url(mut self, url: impl Into<String>) -> Self {
        self.config.explorer_url = url.into();
        self
    }

    /// Set global RPC timeout
    pub fn rpc_timeout(mut self, timeout: Duration) -> Self {
        self.config.rpc_timeout = timeout;
        self
    }

    /// Set REST feed timeout
    pub fn http_timeout(mut self, timeout: Duration) -> Self {
        self.config.http_timeout = timeout;
        self
    }

    pub fn build(self) -> NearscanConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_networks() {
        let config = NearscanConfig::default();
        let names: Vec<_> = config.networks.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["mainnet", "testnet"]);
        assert_eq!(
            config.primary_network().unwrap().rpc_url,
            endpoints::NEAR_MAINNET_RPC
        );
    }

    #[test]
    fn test_builder_replaces_existing_network() {
        let config = NearscanConfigBuilder::with_defaults()
            .primary_rpc_url("http://localhost:3030")
            .build();
        assert_eq!(config.networks.len(), 2);
        assert_eq!(
            config.network("mainnet").unwrap().rpc_url,
            "http://localhost:3030"
        );
    }

    #[test]
    fn test_builder_new_starts_empty() {
        let config = NearscanConfigBuilder::new()
            .network_rpc_url("localnet", "http://localhost:3030")
            .build();
        assert_eq!(config.networks.len(), 1);
        // No "mainnet" label, so the first network is primary
        assert_eq!(config.primary_network().unwrap().name, "localnet");
    }

    #[test]
    fn test_network_timeout_override() {
        let config = NearscanConfigBuilder::with_defaults()
            .rpc_timeout(Duration::from_secs(3))
            .network_rpc_timeout("testnet", Duration::from_millis(750))
            .network_rpc_timeout("unknown", Duration::from_secs(1))
            .build();
        assert_eq!(config.get_rpc_timeout("testnet"), Duration::from_millis(750));
        assert_eq!(config.get_rpc_timeout("mainnet"), Duration::from_secs(3));
        assert_eq!(config.get_rpc_timeout("unknown"), Duration::from_secs(3));
    }

    #[test]
    fn test_empty_config_has_no_primary() {
        let config = NearscanConfigBuilder::new().build();
        assert!(config.primary_network().is_none());
    }
}
