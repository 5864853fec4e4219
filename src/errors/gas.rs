// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for gas estimation and cross-chain comparison.

use super::RpcError;

/// Errors that abort a gas estimate or a cross-chain comparison.
///
/// Only the live NEAR gas price can fail an operation. Every other upstream
/// (fiat prices, reference gas oracle) degrades to a default instead.
///
/// # Examples
///
/// ```rust,ignore
/// use nearscan::{GasEstimationError, GasEstimator, TransactionShape};
///
/// match estimator.estimate("transfer", &TransactionShape::default()).await {
///     Ok(estimate) => println!("{} NEAR", estimate.estimated_cost_near),
///     Err(GasEstimationError::NetworkUnavailable { network, .. }) => {
///         eprintln!("NEAR {network} RPC is down, no estimate available");
///     }
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum GasEstimationError {
    /// The live gas price could not be fetched from the NEAR node.
    #[error("NEAR {network} gas price unavailable")]
    NetworkUnavailable {
        /// Network label, e.g. `mainnet`
        network: String,
        /// The RPC failure
        #[source]
        source: RpcError,
    },
}

impl GasEstimationError {
    /// Create a `NetworkUnavailable` error for a network.
    pub fn network_unavailable(network: impl Into<String>, source: RpcError) -> Self {
        GasEstimationError::NetworkUnavailable {
            network: network.into(),
            source,
        }
    }
}
