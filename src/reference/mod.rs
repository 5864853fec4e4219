// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Reference-chain (Ethereum) gas price
//!
//! [`fetch_reference_gas_price`] never fails: an unreachable oracle or an
//! unusable value yields the fallback of 20 gwei, marked as degraded.

mod etherscan;

pub use etherscan::EtherscanGasOracle;

use async_trait::async_trait;
use tracing::Instrument;

use crate::config::constants::reference::FALLBACK_REFERENCE_GAS_GWEI;
use crate::errors::FeedError;
use crate::spans;
use crate::types::fetched::Fetched;

/// A source of the reference chain's proposed gas price
#[async_trait]
pub trait ReferenceGasSource: Send + Sync {
    /// Proposed gas price in gwei, finite and strictly positive
    async fn proposed_gas_price_gwei(&self) -> Result<f64, FeedError>;
}

/// Fetch the proposed reference gas price, falling back to 20 gwei
pub async fn fetch_reference_gas_price<S>(source: &S) -> Fetched<f64>
where
    S: ReferenceGasSource + ?Sized,
{
    let result = source
        .proposed_gas_price_gwei()
        .instrument(spans::fetch_reference_gas())
        .await
        .and_then(|gwei| {
            if gwei.is_finite() && gwei > 0.0 {
                Ok(gwei)
            } else {
                Err(FeedError::invalid_value("ProposeGasPrice", gwei))
            }
        });

    match result {
        Ok(gwei) => Fetched::Live(gwei),
        Err(e) => {
            let failure = e.failure();
            tracing::warn!(
                error = %e,
                %failure,
                fallback_gwei = FALLBACK_REFERENCE_GAS_GWEI,
                "Reference gas oracle unavailable, using fallback"
            );
            Fetched::degraded(FALLBACK_REFERENCE_GAS_GWEI, failure)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::fetched::FetchFailure;

    struct Fixed(f64);

    #[async_trait]
    impl ReferenceGasSource for Fixed {
        async fn proposed_gas_price_gwei(&self) -> Result<f64, FeedError> {
            Ok(self.0)
        }
    }

    struct Down;

    #[async_trait]
    impl ReferenceGasSource for Down {
        async fn proposed_gas_price_gwei(&self) -> Result<f64, FeedError> {
            Err(FeedError::BadStatus {
                endpoint: "etherscan",
                status: 502,
            })
        }
    }

    #[tokio::test]
    async fn test_live_value_passes_through() {
        assert_eq!(fetch_reference_gas_price(&Fixed(31.5)).await, Fetched::Live(31.5));
    }

    #[tokio::test]
    async fn test_unusable_values_fall_back() {
        for bad in [0.0, -4.0, f64::NAN, f64::INFINITY] {
            let fetched = fetch_reference_gas_price(&Fixed(bad)).await;
            assert_eq!(
                fetched,
                Fetched::degraded(20.0, FetchFailure::MalformedResponse),
                "input {bad}"
            );
        }
    }

    #[tokio::test]
    async fn test_unreachable_oracle_falls_back() {
        let fetched = fetch_reference_gas_price(&Down).await;
        assert_eq!(fetched, Fetched::degraded(20.0, FetchFailure::BadStatus));
    }
}
