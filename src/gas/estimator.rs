// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Gas cost estimation against the live network price
//!
//! An estimate needs exactly one network call, the primary network's current
//! gas price. If that call fails the estimate fails with
//! [`GasEstimationError::NetworkUnavailable`]; there is no fallback price.
//! Everything after the call is pure arithmetic, so a fixed fetched price
//! always gives the same estimate.
//!
//! ```text
//! estimated_tgas      = base_tgas(tx_type) + 5 * action_count
//! estimated_cost_near = round6(near_per_tgas(gas_price) * estimated_tgas)
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::Instrument;

use crate::config::constants::estimation::EXTRA_TGAS_PER_ACTION;
use crate::errors::GasEstimationError;
use crate::gas::classifier;
use crate::provider::NearProvider;
use crate::spans;
use crate::types::transaction::TransactionShape;
use crate::units;

/// Caveats attached to every estimate, in order
pub const ESTIMATE_ASSUMPTIONS: [&str; 2] = [
    "estimate is based on current mainnet gas price",
    "complex contract logic can increase final gas usage",
];

/// Result of [`GasEstimator::estimate`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasEstimate {
    pub tx_type: String,
    /// Base Tgas for the kind plus per-action surcharge
    pub estimated_tgas: u64,
    /// Live price the estimate was computed from, as returned by the node
    pub gas_price_yocto_per_gas: String,
    /// Cost in NEAR, rounded to 6 decimals
    pub estimated_cost_near: f64,
    pub assumptions: Vec<String>,
}

/// Prices transactions against a NEAR node's current gas price
#[derive(Clone)]
pub struct GasEstimator {
    provider: Arc<dyn NearProvider>,
}

impl std::fmt::Debug for GasEstimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GasEstimator")
            .field("network", &self.provider.network())
            .finish()
    }
}

impl GasEstimator {
    pub fn new(provider: Arc<dyn NearProvider>) -> Self {
        Self { provider }
    }

    /// Estimate Tgas and NEAR cost for a transaction
    ///
    /// `tx_type` selects the base cost and takes precedence over
    /// `shape.tx_type`; only `shape.action_count` is read from the shape.
    pub async fn estimate(
        &self,
        tx_type: &str,
        shape: &TransactionShape,
    ) -> Result<GasEstimate, GasEstimationError> {
        let network = self.provider.network().to_string();

        async move {
            let quote = self
                .provider
                .gas_price()
                .await
                .map_err(|e| GasEstimationError::network_unavailable(&network, e))?;

            let estimated_tgas = estimated_tgas(tx_type, shape.action_count);
            let estimated_cost_near = units::cost_for_tgas(quote.near_per_tgas(), estimated_tgas);

            tracing::debug!(
                estimated_tgas,
                estimated_cost_near,
                gas_price = %quote.gas_price_yocto_per_gas,
                "Gas estimate computed"
            );

            Ok::<_, GasEstimationError>(GasEstimate {
                tx_type: tx_type.to_string(),
                estimated_tgas,
                gas_price_yocto_per_gas: quote.gas_price_yocto_per_gas,
                estimated_cost_near,
                assumptions: ESTIMATE_ASSUMPTIONS.iter().map(|a| a.to_string()).collect(),
            })
        }
        .instrument(spans::estimate_gas(tx_type, shape.action_count))
        .await
    }
}

/// Tgas for a transaction kind with `action_count` additional actions
///
/// Saturates instead of overflowing on absurd action counts.
pub fn estimated_tgas(tx_type: &str, action_count: u64) -> u64 {
    classifier::base_tgas(tx_type)
        .saturating_add(EXTRA_TGAS_PER_ACTION.saturating_mul(action_count))
}
