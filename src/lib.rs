// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! # nearscan
//!
//! NEAR gas estimation and cross-chain cost comparison.
//!
//! nearscan reads NEAR's live gas price over JSON-RPC, converts it from
//! yoctoNEAR per gas into NEAR per Tgas, and combines it with fiat prices and
//! an Ethereum gas oracle to answer "what does this cost, and how does it
//! compare?".
//!
//! ## Operations
//!
//! - [`GasEstimator::estimate`] - Tgas and NEAR cost for a transaction kind
//! - [`optimize`] - Advisory scan of a transaction shape (no network)
//! - [`GasHistory::snapshots`] - Gas price per network (mainnet, testnet)
//! - [`CrossChainComparator::compare`] - USD cost of 1 Tgas vs a 21k-gas ETH transfer
//! - [`explorer`] - Network status, trending contracts, whale transfers, DeFi stats
//!
//! ## Failure policies
//!
//! The live NEAR gas price is the only upstream whose failure aborts an
//! operation ([`GasEstimationError::NetworkUnavailable`]). Fiat prices, the
//! reference gas oracle, per-network snapshots and explorer listings degrade:
//! they return a [`Fetched::Degraded`] holding a documented default and a
//! [`FetchFailure`] marker.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use nearscan::provider::{create_http_provider, ProviderConfig};
//! use nearscan::{GasEstimator, TransactionShape};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = create_http_provider(ProviderConfig::mainnet())?;
//! let estimator = GasEstimator::new(Arc::new(provider));
//!
//! let estimate = estimator
//!     .estimate("transfer", &TransactionShape::of_type("transfer"))
//!     .await?;
//! println!("{} Tgas ~ {} NEAR", estimate.estimated_tgas, estimate.estimated_cost_near);
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! [`NearscanConfig::from_env`] starts from the public endpoints and applies
//! overrides from the environment (or a `.env` file). Timeouts default to
//! five seconds per request and no request is ever retried.

pub mod bootstrap;
pub mod compare;
pub mod config;
pub mod errors;
pub mod explorer;
pub mod gas;
pub mod price;
pub mod provider;
pub mod reference;
pub mod transport;
pub mod types;
pub mod units;

mod feed;
mod spans;

pub use compare::{ComparisonResult, CrossChainComparator, NearCost, ReferenceCost};
pub use config::{NearscanConfig, NearscanConfigBuilder, NetworkEndpoint, PRIMARY_NETWORK};
pub use errors::{FeedError, GasEstimationError, NearscanError, RpcError};
pub use explorer::{DefiStats, ExplorerClient, TrendingContract, WhaleTransfer};
pub use gas::{
    base_tgas, optimize, GasEstimate, GasEstimator, GasHistory, GasOptimization, GasSnapshot,
    OptimizationRule, TxKind, ESTIMATE_ASSUMPTIONS, NO_ISSUES_RECOMMENDATION,
};
pub use price::{fetch_prices, CoinGeckoPriceSource, FiatPriceSource};
pub use provider::{JsonRpcProvider, NearProvider, NodeStatus};
pub use reference::{fetch_reference_gas_price, EtherscanGasOracle, ReferenceGasSource};
pub use types::fetched::{FetchFailure, Fetched};
pub use types::gas::GasPriceQuote;
pub use types::price::{FiatPrice, FiatPrices};
pub use types::transaction::TransactionShape;
