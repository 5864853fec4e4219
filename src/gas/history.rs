// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Point-in-time gas price snapshots across networks

use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::Instrument;

use crate::config::constants::units::PER_TGAS_DECIMALS;
use crate::provider::NearProvider;
use crate::spans;
use crate::types::fetched::FetchFailure;
use crate::units;

/// One network's gas price at capture time, or the reason it is missing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasSnapshot {
    pub network: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price_yocto_per_gas: Option<String>,
    /// NEAR per Tgas, rounded to 8 decimals
    #[serde(skip_serializing_if = "Option::is_none")]
    pub near_per_tgas: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<FetchFailure>,
    pub captured_at: DateTime<Utc>,
}

impl GasSnapshot {
    pub fn is_available(&self) -> bool {
        self.error.is_none()
    }
}

/// Collects gas snapshots from a fixed list of networks
#[derive(Clone, Default)]
pub struct GasHistory {
    providers: Vec<Arc<dyn NearProvider>>,
}

impl GasHistory {
    pub fn new(providers: Vec<Arc<dyn NearProvider>>) -> Self {
        Self { providers }
    }

    pub fn networks(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.network()).collect()
    }

    /// Query every network concurrently
    ///
    /// Returns one entry per provider in provider order. A failing network
    /// yields an entry with `error` set and no price fields; it never affects
    /// the other entries.
    pub async fn snapshots(&self) -> Vec<GasSnapshot> {
        join_all(self.providers.iter().map(|provider| snapshot(provider.as_ref())))
            .instrument(spans::gas_history(self.providers.len()))
            .await
    }
}

async fn snapshot(provider: &dyn NearProvider) -> GasSnapshot {
    match provider.gas_price().await {
        Ok(quote) => GasSnapshot {
            network: quote.network.clone(),
            near_per_tgas: Some(units::round_half_away(
                quote.near_per_tgas(),
                PER_TGAS_DECIMALS,
            )),
            gas_price_yocto_per_gas: Some(quote.gas_price_yocto_per_gas),
            error: None,
            captured_at: quote.captured_at,
        },
        Err(e) => {
            let failure = e.failure();
            tracing::warn!(
                network = provider.network(),
                error = %e,
                %failure,
                "Gas snapshot unavailable"
            );
            GasSnapshot {
                network: provider.network().to_string(),
                gas_price_yocto_per_gas: None,
                near_per_tgas: None,
                error: Some(failure),
                captured_at: Utc::now(),
            }
        }
    }
}
