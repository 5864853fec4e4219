// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! NEAR vs Ethereum cost comparison
//!
//! [`CrossChainComparator::compare`] issues three independent requests
//! concurrently and joins them before doing any arithmetic:
//!
//! | Input                 | On failure                                     |
//! |-----------------------|------------------------------------------------|
//! | NEAR gas price (RPC)  | whole comparison fails with `NetworkUnavailable` |
//! | NEAR/ETH USD prices   | USD figures are 0, ratio is `null`, `price_error` set |
//! | Ethereum gas (oracle) | 20 gwei fallback is used, `used_fallback` set |
//!
//! The ratio compares one 21,000-gas Ethereum transfer against one Tgas on
//! NEAR, both in USD. It is `null` whenever the NEAR side is zero.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::Instrument;

use crate::config::constants::reference::{GWEI_TO_ETH_EXP, SIMPLE_TRANSFER_GAS};
use crate::config::constants::symbols::{ETHEREUM, NEAR};
use crate::config::constants::units::{PER_TGAS_DECIMALS, RATIO_DECIMALS, REFERENCE_USD_DECIMALS};
use crate::errors::GasEstimationError;
use crate::price::{fetch_prices, FiatPriceSource};
use crate::provider::NearProvider;
use crate::reference::{fetch_reference_gas_price, ReferenceGasSource};
use crate::spans;
use crate::types::fetched::{FetchFailure, Fetched};
use crate::types::gas::GasPriceQuote;
use crate::types::price::FiatPrices;
use crate::units::round_half_away;

/// NEAR side of a comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearCost {
    pub gas_price_yocto_per_gas: String,
    /// USD for one Tgas, rounded to 8 decimals
    pub usd_per_tgas: f64,
    /// Set when the fiat feed failed and `usd_per_tgas` is a placeholder
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_error: Option<FetchFailure>,
}

/// Ethereum side of a comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceCost {
    pub gas_price_gwei: f64,
    /// USD for a 21,000-gas transfer, rounded to 4 decimals
    pub usd_per_simple_transfer_21k: f64,
    /// `gas_price_gwei` is the fallback constant, not a live oracle value
    pub used_fallback: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price_error: Option<FetchFailure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_error: Option<FetchFailure>,
}

/// Result of [`CrossChainComparator::compare`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub near: NearCost,
    pub ethereum: ReferenceCost,
    /// Ethereum transfer USD / NEAR Tgas USD, 2 decimals; `null` when NEAR is 0
    pub ratio_eth_simple_tx_to_near_1_tgas: Option<f64>,
}

/// Compares NEAR and Ethereum transaction costs in USD
#[derive(Clone)]
pub struct CrossChainComparator {
    provider: Arc<dyn NearProvider>,
    prices: Arc<dyn FiatPriceSource>,
    reference: Arc<dyn ReferenceGasSource>,
}

impl CrossChainComparator {
    pub fn new(
        provider: Arc<dyn NearProvider>,
        prices: Arc<dyn FiatPriceSource>,
        reference: Arc<dyn ReferenceGasSource>,
    ) -> Self {
        Self {
            provider,
            prices,
            reference,
        }
    }

    /// Run the comparison
    ///
    /// All three requests complete before the NEAR price result is inspected,
    /// so degraded feeds are still logged when the RPC call fails.
    pub async fn compare(&self) -> Result<ComparisonResult, GasEstimationError> {
        let network = self.provider.network().to_string();

        async {
            let (native, fiat, reference_gas) = tokio::join!(
                self.provider.gas_price(),
                fetch_prices(self.prices.as_ref(), &[NEAR, ETHEREUM]),
                fetch_reference_gas_price(self.reference.as_ref()),
            );

            let quote =
                native.map_err(|e| GasEstimationError::network_unavailable(&network, e))?;
            Ok::<_, GasEstimationError>(combine(quote, fiat, reference_gas))
        }
        .instrument(spans::compare_costs(&network))
        .await
    }
}

/// Pure arithmetic over the joined inputs
pub(crate) fn combine(
    quote: GasPriceQuote,
    fiat: Fetched<FiatPrices>,
    reference_gas: Fetched<f64>,
) -> ComparisonResult {
    let near_per_tgas = quote.near_per_tgas();
    let (gas_price_gwei, gas_price_error) = reference_gas.into_parts();

    let (near_usd_per_tgas, eth_usd_per_transfer, price_error) = match fiat {
        Fetched::Live(prices) => (
            near_per_tgas * prices.usd(NEAR),
            reference_transfer_usd(gas_price_gwei, prices.usd(ETHEREUM)),
            None,
        ),
        Fetched::Degraded { failure, .. } => (0.0, 0.0, Some(failure)),
    };

    let ratio = if near_usd_per_tgas.is_finite() && near_usd_per_tgas > 0.0 {
        let ratio = eth_usd_per_transfer / near_usd_per_tgas;
        ratio
            .is_finite()
            .then(|| round_half_away(ratio, RATIO_DECIMALS))
    } else {
        None
    };

    ComparisonResult {
        near: NearCost {
            gas_price_yocto_per_gas: quote.gas_price_yocto_per_gas,
            usd_per_tgas: round_half_away(near_usd_per_tgas, PER_TGAS_DECIMALS),
            price_error,
        },
        ethereum: ReferenceCost {
            gas_price_gwei,
            usd_per_simple_transfer_21k: round_half_away(
                eth_usd_per_transfer,
                REFERENCE_USD_DECIMALS,
            ),
            used_fallback: gas_price_error.is_some(),
            gas_price_error,
            price_error,
        },
        ratio_eth_simple_tx_to_near_1_tgas: ratio,
    }
}

/// USD cost of a 21,000-gas transfer at `gwei` per gas
fn reference_transfer_usd(gwei: f64, eth_usd: f64) -> f64 {
    gwei / 10f64.powi(GWEI_TO_ETH_EXP as i32) * SIMPLE_TRANSFER_GAS as f64 * eth_usd
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prices(near: f64, eth: f64) -> FiatPrices {
        let mut prices = FiatPrices::default();
        prices.insert(NEAR, near);
        prices.insert(ETHEREUM, eth);
        prices
    }

    #[test]
    fn test_live_inputs() {
        // 100_000_000 yocto/gas = 0.0001 NEAR/Tgas; at $5 that is $0.0005
        // 20 gwei * 21000 gas * $3000 = $1.26
        let result = combine(
            GasPriceQuote::new("mainnet", "100000000"),
            Fetched::Live(prices(5.0, 3000.0)),
            Fetched::Live(20.0),
        );
        assert_eq!(result.near.usd_per_tgas, 0.0005);
        assert_eq!(result.ethereum.usd_per_simple_transfer_21k, 1.26);
        assert_eq!(result.ratio_eth_simple_tx_to_near_1_tgas, Some(2520.0));
        assert!(!result.ethereum.used_fallback);
        assert_eq!(result.near.price_error, None);
    }

    #[test]
    fn test_zero_near_price_gives_null_ratio() {
        let result = combine(
            GasPriceQuote::new("mainnet", "100000000"),
            Fetched::Live(prices(0.0, 3000.0)),
            Fetched::Live(20.0),
        );
        assert_eq!(result.near.usd_per_tgas, 0.0);
        assert_eq!(result.ratio_eth_simple_tx_to_near_1_tgas, None);
    }

    #[test]
    fn test_degraded_prices_skip_arithmetic() {
        let result = combine(
            GasPriceQuote::new("mainnet", "100000000"),
            Fetched::degraded(prices(0.0, 0.0), FetchFailure::Timeout),
            Fetched::Live(25.0),
        );
        assert_eq!(result.near.price_error, Some(FetchFailure::Timeout));
        assert_eq!(result.ethereum.price_error, Some(FetchFailure::Timeout));
        assert_eq!(result.ethereum.gas_price_gwei, 25.0);
        assert_eq!(result.ethereum.usd_per_simple_transfer_21k, 0.0);
        assert_eq!(result.ratio_eth_simple_tx_to_near_1_tgas, None);
    }

    #[test]
    fn test_fallback_reference_gas_is_flagged() {
        let result = combine(
            GasPriceQuote::new("mainnet", "100000000"),
            Fetched::Live(prices(5.0, 3000.0)),
            Fetched::degraded(20.0, FetchFailure::BadStatus),
        );
        assert!(result.ethereum.used_fallback);
        assert_eq!(result.ethereum.gas_price_error, Some(FetchFailure::BadStatus));
        assert_eq!(result.ethereum.usd_per_simple_transfer_21k, 1.26);
    }

    #[test]
    fn test_null_ratio_serializes() {
        let result = combine(
            GasPriceQuote::new("mainnet", "0"),
            Fetched::Live(prices(5.0, 3000.0)),
            Fetched::Live(20.0),
        );
        let json = serde_json::to_value(&result).unwrap();
        assert!(json["ratio_eth_simple_tx_to_near_1_tgas"].is_null());
    }
}
