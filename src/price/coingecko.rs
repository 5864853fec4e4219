// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Map, Value};
use url::Url;

use super::FiatPriceSource;
use crate::config::NearscanConfig;
use crate::errors::FeedError;
use crate::feed;
use crate::types::price::FiatPrices;

const ENDPOINT: &str = "coingecko";

/// CoinGecko `simple/price` client
///
/// Issues one `GET <base>?ids=<a,b>&vs_currencies=usd` per lookup.
#[derive(Debug, Clone)]
pub struct CoinGeckoPriceSource {
    client: reqwest::Client,
    base_url: Url,
}

impl CoinGeckoPriceSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FeedError> {
        Ok(Self {
            client: feed::http_client(ENDPOINT, timeout)?,
            base_url: feed::parse_url(base_url)?,
        })
    }

    pub fn from_config(config: &NearscanConfig) -> Result<Self, FeedError> {
        Self::new(&config.price_feed_url, config.http_timeout)
    }

    fn request_url(&self, symbols: &[String]) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("ids", &symbols.join(","))
            .append_pair("vs_currencies", "usd");
        url
    }
}

/// USD price of one `{ "<id>": { "usd": 1.23 } }` entry
///
/// Numbers and numeric strings are accepted; a missing entry, a `null` entry
/// or any other shape reads as no price. One bad entry never affects the others.
fn usd_quote(body: &Map<String, Value>, symbol: &str) -> Option<f64> {
    match body.get(symbol)?.get("usd")? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Read every requested symbol from a decoded body, `0.0` when unusable
fn prices_from_body(body: &Map<String, Value>, symbols: &[String]) -> FiatPrices {
    let mut prices = FiatPrices::default();
    for symbol in symbols {
        let usd = usd_quote(body, symbol);
        if usd.is_none() {
            tracing::debug!(symbol = %symbol, "No USD price in feed response");
        }
        prices.insert(symbol.as_str(), usd.unwrap_or(0.0));
    }
    prices
}

#[async_trait]
impl FiatPriceSource for CoinGeckoPriceSource {
    async fn usd_prices(&self, symbols: &[String]) -> Result<FiatPrices, FeedError> {
        let url = self.request_url(symbols);
        // Only a body that is not a JSON object fails the whole lookup
        let body: Map<String, Value> = feed::get_json(&self.client, ENDPOINT, url).await?;
        Ok(prices_from_body(&body, symbols))
    }
}
