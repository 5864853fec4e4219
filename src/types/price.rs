// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Fiat (USD) prices keyed by feed symbol

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single USD price; `0.0` means unknown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FiatPrice {
    /// Feed symbol id, e.g. `near`
    pub symbol: String,
    /// Price in USD, never negative or non-finite
    pub usd_price: f64,
}

/// USD prices for a set of symbols
///
/// Values are sanitized on insert: negative or non-finite prices are stored
/// as `0.0`, so every value read back is safe to multiply.
///
/// # Example
/// ```
/// use nearscan::FiatPrices;
///
/// let mut prices = FiatPrices::default();
/// prices.insert("near", 5.25);
/// prices.insert("ethereum", f64::NAN);
/// assert_eq!(prices.usd("near"), 5.25);
/// assert_eq!(prices.usd("ethereum"), 0.0);
/// assert_eq!(prices.usd("missing"), 0.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FiatPrices(BTreeMap<String, f64>);

impl FiatPrices {
    /// Every symbol mapped to `0.0`
    pub fn zeroed<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(symbols.into_iter().map(|s| (s.into(), 0.0)).collect())
    }

    pub fn insert(&mut self, symbol: impl Into<String>, usd_price: f64) {
        let usd_price = if usd_price.is_finite() && usd_price > 0.0 {
            usd_price
        } else {
            0.0
        };
        self.0.insert(symbol.into(), usd_price);
    }

    /// Price for `symbol`, `0.0` when absent
    pub fn usd(&self, symbol: &str) -> f64 {
        self.0.get(symbol).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.0.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate as [`FiatPrice`] records in symbol order
    pub fn iter(&self) -> impl Iterator<Item = FiatPrice> + '_ {
        self.0.iter().map(|(symbol, usd_price)| FiatPrice {
            symbol: symbol.clone(),
            usd_price: *usd_price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed_covers_every_symbol() {
        let prices = FiatPrices::zeroed(["near", "ethereum"]);
        assert_eq!(prices.len(), 2);
        assert!(prices.contains("near"));
        assert_eq!(prices.usd("ethereum"), 0.0);
    }

    #[test]
    fn test_negative_price_sanitized() {
        let mut prices = FiatPrices::default();
        prices.insert("near", -3.0);
        prices.insert("ethereum", f64::INFINITY);
        assert_eq!(prices.usd("near"), 0.0);
        assert_eq!(prices.usd("ethereum"), 0.0);
    }

    #[test]
    fn test_iter_in_symbol_order() {
        let mut prices = FiatPrices::default();
        prices.insert("near", 2.0);
        prices.insert("ethereum", 3000.0);
        let symbols: Vec<_> = prices.iter().map(|p| p.symbol).collect();
        assert_eq!(symbols, vec!["ethereum", "near"]);
    }
}
