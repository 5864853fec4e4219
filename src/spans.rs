// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for nearscan operations.
//!
//! Telemetry is kept out of business logic: instead of `#[instrument]`
//! attributes, each instrumented operation has a span helper here and the
//! operation attaches it to its future.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub async fn my_operation(&self, param: Type) -> Result<T> {
//!     async move {
//!         // Business logic here
//!     }
//!     .instrument(spans::my_operation(param_value))
//!     .await
//! }
//! ```

use tracing::{Level, Span};

/// Create span for a gas estimate.
///
/// Parent: None (root span for this operation)
/// Children: rpc_gas_price span
#[inline]
pub(crate) fn estimate_gas(tx_type: &str, action_count: u64) -> Span {
    tracing::span!(
        Level::INFO,
        "nearscan.estimate_gas",
        tx_type = %tx_type,
        action_count = action_count,
    )
}

/// Create span for a cross-chain cost comparison.
///
/// Parent: None (root span for this operation)
/// Children: rpc_gas_price, fetch_fiat_prices, fetch_reference_gas spans
#[inline]
pub(crate) fn compare_costs(network: &str) -> Span {
    tracing::span!(Level::INFO, "nearscan.compare_costs", network = %network)
}

/// Create span for collecting gas-price snapshots across networks.
///
/// Parent: None (root span for this operation)
/// Children: rpc_gas_price spans (one per network)
#[inline]
pub(crate) fn gas_history(network_count: usize) -> Span {
    tracing::span!(
        Level::INFO,
        "nearscan.gas_history",
        network_count = network_count,
    )
}

/// Create span for the `gas_price` RPC call.
#[inline]
pub(crate) fn rpc_gas_price(network: &str) -> Span {
    tracing::debug_span!("nearscan.rpc_gas_price", network = %network)
}

/// Create span for the `status` RPC call.
#[inline]
pub(crate) fn rpc_status(network: &str) -> Span {
    tracing::debug_span!("nearscan.rpc_status", network = %network)
}

/// Create span for a fiat price feed request.
#[inline]
pub(crate) fn fetch_fiat_prices(symbol_count: usize) -> Span {
    tracing::debug_span!("nearscan.fetch_fiat_prices", symbol_count = symbol_count)
}

/// Create span for a reference-chain gas oracle request.
#[inline]
pub(crate) fn fetch_reference_gas() -> Span {
    tracing::debug_span!("nearscan.fetch_reference_gas")
}

/// Create span for an explorer listing request.
#[inline]
pub(crate) fn fetch_explorer(resource: &'static str) -> Span {
    tracing::debug_span!("nearscan.fetch_explorer", resource = resource)
}
