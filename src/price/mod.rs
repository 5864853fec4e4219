// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Fiat price lookup
//!
//! Prices come from any [`FiatPriceSource`]; [`CoinGeckoPriceSource`] is the
//! HTTP implementation. Callers normally go through [`fetch_prices`], which
//! applies the degrade-to-zero policy: a failed feed never fails the caller,
//! it yields every requested symbol at `0.0` plus a failure marker.
//!
//! # Example
//!
//! ```rust,no_run
//! use nearscan::price::{fetch_prices, CoinGeckoPriceSource};
//! use nearscan::{Fetched, NearscanConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let source = CoinGeckoPriceSource::from_config(&NearscanConfig::default())?;
//! match fetch_prices(&source, &["near", "ethereum"]).await {
//!     Fetched::Live(prices) => println!("NEAR = ${}", prices.usd("near")),
//!     Fetched::Degraded { failure, .. } => println!("prices unavailable: {failure}"),
//! }
//! # Ok(())
//! # }
//! ```

mod coingecko;

pub use coingecko::CoinGeckoPriceSource;

use std::collections::BTreeSet;

use async_trait::async_trait;
use tracing::Instrument;

use crate::errors::FeedError;
use crate::spans;
use crate::types::fetched::Fetched;
use crate::types::price::FiatPrices;

/// A feed of USD prices for symbol ids
///
/// One call covers every requested symbol. Implementations return an error
/// only for total failure; symbols the feed does not know map to `0.0`.
#[async_trait]
pub trait FiatPriceSource: Send + Sync {
    /// USD prices for `symbols` (sorted, deduplicated)
    async fn usd_prices(&self, symbols: &[String]) -> Result<FiatPrices, FeedError>;
}

/// Fetch USD prices, degrading to zero on failure
///
/// The result always contains every requested symbol.
pub async fn fetch_prices<S>(source: &S, symbols: &[&str]) -> Fetched<FiatPrices>
where
    S: FiatPriceSource + ?Sized,
{
    let symbols: Vec<String> = symbols
        .iter()
        .map(|s| s.to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let result = source
        .usd_prices(&symbols)
        .instrument(spans::fetch_fiat_prices(symbols.len()))
        .await;

    match result {
        Ok(mut prices) => {
            for symbol in &symbols {
                if !prices.contains(symbol) {
                    prices.insert(symbol.as_str(), 0.0);
                }
            }
            Fetched::Live(prices)
        }
        Err(e) => {
            let failure = e.failure();
            tracing::warn!(error = %e, %failure, "Fiat price feed unavailable, using zero prices");
            Fetched::degraded(FiatPrices::zeroed(symbols), failure)
        }
    }
}
