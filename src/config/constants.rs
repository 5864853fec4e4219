// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Well-known endpoints and constants
//!
//! This module centralizes magic constants used throughout nearscan so they
//! are discoverable and named, rather than scattered through the logic.

/// Default endpoints for the upstream data sources
pub mod endpoints {
    /// NEAR mainnet JSON-RPC
    pub const NEAR_MAINNET_RPC: &str = "https://rpc.mainnet.near.org";

    /// NEAR testnet JSON-RPC
    pub const NEAR_TESTNET_RPC: &str = "https://rpc.testnet.near.org";

    /// CoinGecko simple price API (query string is added per request)
    pub const COINGECKO_SIMPLE_PRICE: &str = "https://api.coingecko.com/api/v3/simple/price";

    /// Etherscan gas tracker oracle
    pub const ETHERSCAN_GAS_ORACLE: &str =
        "https://api.etherscan.io/api?module=gastracker&action=gasoracle";

    /// NearBlocks explorer REST API
    pub const NEARBLOCKS_API: &str = "https://api.nearblocks.io/v1";
}

/// Fiat feed symbol ids
pub mod symbols {
    /// NEAR token id on the price feed
    pub const NEAR: &str = "near";

    /// Ether id on the price feed
    pub const ETHEREUM: &str = "ethereum";
}

/// NEAR unit scales and gas accounting
pub mod units {
    /// Gas per Tgas (10^12)
    pub const GAS_PER_TGAS_EXP: i64 = 12;

    /// yoctoNEAR per NEAR (10^24)
    pub const YOCTO_PER_NEAR_EXP: i64 = 24;

    /// Decimal places for NEAR cost figures in estimates
    pub const COST_DECIMALS: i64 = 6;

    /// Decimal places for NEAR/Tgas and USD/Tgas figures
    pub const PER_TGAS_DECIMALS: i64 = 8;

    /// Decimal places for the reference-chain USD transfer cost
    pub const REFERENCE_USD_DECIMALS: i64 = 4;

    /// Decimal places for the cross-chain ratio
    pub const RATIO_DECIMALS: i64 = 2;
}

/// Gas estimation constants
pub mod estimation {
    /// Base Tgas for a transaction type missing from the classifier table.
    ///
    /// Equals the `function_call` cost: unknown kinds are most often contract
    /// calls, and over-estimating is safer than under-estimating.
    pub const DEFAULT_TX_TGAS: u64 = 30;

    /// Extra Tgas charged per action beyond the base transaction
    pub const EXTRA_TGAS_PER_ACTION: u64 = 5;
}

/// Reference chain (Ethereum) constants
pub mod reference {
    /// Gas price used when the gas oracle is unavailable, in gwei.
    ///
    /// An approximate price keeps the comparison meaningful; the result
    /// flags `used_fallback` whenever this value is used.
    pub const FALLBACK_REFERENCE_GAS_GWEI: f64 = 20.0;

    /// Gas used by a plain ETH transfer
    pub const SIMPLE_TRANSFER_GAS: u64 = 21_000;

    /// Wei per gwei exponent (gwei × 10^-9 = ETH)
    pub const GWEI_TO_ETH_EXP: i64 = 9;
}

/// Optimizer thresholds
pub mod optimizer {
    /// Argument payloads above this size trigger a recommendation
    pub const ARGS_SIZE_THRESHOLD_BYTES: u64 = 2048;

    /// Transactions batching fewer actions than this trigger a recommendation
    pub const MIN_BATCH_ACTIONS: u64 = 2;

    /// Rules that must fire for the higher savings tier
    pub const HIGH_SAVINGS_RULE_COUNT: usize = 3;

    /// Savings percent when at least [`HIGH_SAVINGS_RULE_COUNT`] rules fire.
    ///
    /// Coarse heuristic, not a measured figure.
    pub const HIGH_SAVINGS_PERCENT: u8 = 15;

    /// Savings percent otherwise. Coarse heuristic, not a measured figure.
    pub const BASE_SAVINGS_PERCENT: u8 = 8;
}

/// Timeouts
pub mod timeouts {
    use std::time::Duration;

    /// Default per-request timeout for NEAR JSON-RPC
    pub const RPC_TIMEOUT: Duration = Duration::from_secs(5);

    /// Default per-request timeout for REST feeds
    pub const HTTP_TIMEOUT: Duration = Duration::from_secs(5);
}
