// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Gas price quote as reported by a NEAR node

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::units;

/// A live gas price read from a NEAR node
///
/// The price stays in the node's own decimal-string form (yoctoNEAR per gas)
/// so it can be echoed back to callers byte-for-byte. Conversions go through
/// [`units`] and never fail.
///
/// # Example
/// ```
/// use nearscan::GasPriceQuote;
///
/// let quote = GasPriceQuote::new("mainnet", "100000000");
/// assert_eq!(quote.near_per_tgas(), 0.0001);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GasPriceQuote {
    /// Network label (`mainnet`, `testnet`, ...)
    pub network: String,
    /// Price in yoctoNEAR per unit of gas, as a decimal string
    pub gas_price_yocto_per_gas: String,
    /// When the quote was taken
    pub captured_at: DateTime<Utc>,
}

impl GasPriceQuote {
    /// Create a quote captured now
    pub fn new(network: impl Into<String>, gas_price_yocto_per_gas: impl Into<String>) -> Self {
        Self::captured_at(network, gas_price_yocto_per_gas, Utc::now())
    }

    /// Create a quote with an explicit capture time
    pub fn captured_at(
        network: impl Into<String>,
        gas_price_yocto_per_gas: impl Into<String>,
        captured_at: DateTime<Utc>,
    ) -> Self {
        Self {
            network: network.into(),
            gas_price_yocto_per_gas: gas_price_yocto_per_gas.into(),
            captured_at,
        }
    }

    /// NEAR per Tgas for this quote (0 when the price string is unusable)
    pub fn near_per_tgas(&self) -> f64 {
        units::yocto_per_gas_to_near_per_tgas(&self.gas_price_yocto_per_gas)
    }
}
