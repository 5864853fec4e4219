// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Pass-through network telemetry
//!
//! These fetchers report what an upstream says and never feed the gas
//! arithmetic. Every one of them degrades: a failure yields an empty or zeroed
//! record plus a [`FetchFailure`] marker.
//!
//! Listing endpoints are resolved relative to the configured explorer base URL
//! and decoded into partial views. An entry missing its identifying field is
//! dropped; other missing fields take their documented defaults.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::Instrument;
use url::Url;

use crate::config::NearscanConfig;
use crate::errors::FeedError;
use crate::feed;
use crate::provider::{NearProvider, NodeStatus};
use crate::spans;
use crate::types::fetched::Fetched;

const ENDPOINT: &str = "explorer";

const TRENDING_CONTRACTS_PATH: [&str; 2] = ["stats", "trending-contracts"];
const WHALE_TRANSFERS_PATH: [&str; 2] = ["txns", "whales"];
const DEFI_STATS_PATH: [&str; 2] = ["stats", "defi"];

/// Node version and chain head for a provider's network
///
/// Degrades to `None` when the `status` call fails.
pub async fn network_status<P>(provider: &P) -> Fetched<Option<NodeStatus>>
where
    P: NearProvider + ?Sized,
{
    match provider.status().await {
        Ok(status) => Fetched::Live(Some(status)),
        Err(e) => {
            let failure = e.failure();
            tracing::warn!(
                network = provider.network(),
                error = %e,
                %failure,
                "Network status unavailable"
            );
            Fetched::degraded(None, failure)
        }
    }
}

/// A contract ranked by recent activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendingContract {
    pub contract: String,
    /// Distinct callers over the last 24 hours, 0 when unreported
    pub users_24h: u64,
    /// Growth as reported upstream, e.g. `+15%`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub growth: Option<String>,
}

/// A large transfer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhaleTransfer {
    pub account: String,
    /// Amount as reported upstream, `"0"` when unreported
    pub amount: String,
    /// Transfer kind as reported upstream (`transfer`, `withdrawal`, ...)
    #[serde(rename = "type")]
    pub kind: String,
}

/// Aggregate DeFi figures
///
/// Amounts stay in the upstream's own string form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefiStats {
    pub total_tvl_near: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_protocol: Option<String>,
    pub stablecoin_volume_24h: String,
}

impl Default for DefiStats {
    fn default() -> Self {
        Self {
            total_tvl_near: "0".to_string(),
            top_protocol: None,
            stablecoin_volume_24h: "0".to_string(),
        }
    }
}

/// Client for an explorer-style REST API
#[derive(Debug, Clone)]
pub struct ExplorerClient {
    client: reqwest::Client,
    base_url: Url,
}

impl ExplorerClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FeedError> {
        let base_url = feed::parse_url(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(FeedError::UrlInvalid {
                url: base_url.to_string(),
                details: "cannot be a base URL".to_string(),
            });
        }
        Ok(Self {
            client: feed::http_client(ENDPOINT, timeout)?,
            base_url,
        })
    }

    pub fn from_config(config: &NearscanConfig) -> Result<Self, FeedError> {
        Self::new(&config.explorer_url, config.http_timeout)
    }

    /// Most active contracts; empty on failure
    pub async fn trending_contracts(&self) -> Fetched<Vec<TrendingContract>> {
        let result = self
            .list::<TrendingContractView>(&TRENDING_CONTRACTS_PATH)
            .instrument(spans::fetch_explorer("trending_contracts"))
            .await
            .map(|views| {
                views
                    .into_iter()
                    .filter_map(TrendingContractView::into_contract)
                    .collect()
            });
        degrade_to_default(result, "trending_contracts")
    }

    /// Recent large transfers; empty on failure
    pub async fn whale_transfers(&self) -> Fetched<Vec<WhaleTransfer>> {
        let result = self
            .list::<WhaleTransferView>(&WHALE_TRANSFERS_PATH)
            .instrument(spans::fetch_explorer("whale_transfers"))
            .await
            .map(|views| {
                views
                    .into_iter()
                    .filter_map(WhaleTransferView::into_transfer)
                    .collect()
            });
        degrade_to_default(result, "whale_transfers")
    }

    /// DeFi aggregates; zeroed on failure
    pub async fn defi_stats(&self) -> Fetched<DefiStats> {
        let result = async {
            let url = self.url_for(&DEFI_STATS_PATH);
            let view: DefiStatsView = feed::get_json(&self.client, ENDPOINT, url).await?;
            Ok::<_, FeedError>(view.into_stats())
        }
        .instrument(spans::fetch_explorer("defi_stats"))
        .await;
        degrade_to_default(result, "defi_stats")
    }

    async fn list<T: DeserializeOwned>(&self, path: &[&str]) -> Result<Vec<T>, FeedError> {
        let body: ListBody<T> = feed::get_json(&self.client, ENDPOINT, self.url_for(path)).await?;
        Ok(body.into_items())
    }

    fn url_for(&self, path: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Checked in `new`: the base URL always has path segments
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(path);
        }
        url
    }
}

fn degrade_to_default<T: Default>(
    result: Result<T, FeedError>,
    resource: &'static str,
) -> Fetched<T> {
    match result {
        Ok(value) => Fetched::Live(value),
        Err(e) => {
            let failure = e.failure();
            tracing::warn!(resource, error = %e, %failure, "Explorer data unavailable");
            Fetched::degraded(T::default(), failure)
        }
    }
}

/// A bare JSON array, or an object wrapping one
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ListBody<T> {
    Bare(Vec<T>),
    Wrapped {
        #[serde(alias = "contracts", alias = "txns", alias = "data", alias = "items")]
        results: Vec<T>,
    },
}

impl<T> ListBody<T> {
    fn into_items(self) -> Vec<T> {
        match self {
            ListBody::Bare(items) => items,
            ListBody::Wrapped { results } => results,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TrendingContractView {
    #[serde(alias = "contract_id", alias = "account_id")]
    contract: Option<String>,
    #[serde(alias = "users")]
    users_24h: Option<u64>,
    growth: Option<String>,
}

impl TrendingContractView {
    fn into_contract(self) -> Option<TrendingContract> {
        Some(TrendingContract {
            contract: self.contract?,
            users_24h: self.users_24h.unwrap_or(0),
            growth: self.growth,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WhaleTransferView {
    #[serde(alias = "account_id", alias = "signer_account_id")]
    account: Option<String>,
    amount: Option<String>,
    #[serde(rename = "type", alias = "kind")]
    kind: Option<String>,
}

impl WhaleTransferView {
    fn into_transfer(self) -> Option<WhaleTransfer> {
        Some(WhaleTransfer {
            account: self.account?,
            amount: self.amount.unwrap_or_else(|| "0".to_string()),
            kind: self.kind.unwrap_or_else(|| "transfer".to_string()),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DefiStatsView {
    total_tvl_near: Option<String>,
    top_protocol: Option<String>,
    stablecoin_volume_24h: Option<String>,
}

impl DefiStatsView {
    fn into_stats(self) -> DefiStats {
        let defaults = DefiStats::default();
        DefiStats {
            total_tvl_near: self.total_tvl_near.unwrap_or(defaults.total_tvl_near),
            top_protocol: self.top_protocol,
            stablecoin_volume_24h: self
                .stablecoin_volume_24h
                .unwrap_or(defaults.stablecoin_volume_24h),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_appends_segments() {
        let client =
            ExplorerClient::new("https://api.nearblocks.io/v1", Duration::from_secs(1)).unwrap();
        assert_eq!(
            client.url_for(&DEFI_STATS_PATH).as_str(),
            "https://api.nearblocks.io/v1/stats/defi"
        );

        let client =
            ExplorerClient::new("https://api.nearblocks.io/v1/", Duration::from_secs(1)).unwrap();
        assert_eq!(
            client.url_for(&WHALE_TRANSFERS_PATH).as_str(),
            "https://api.nearblocks.io/v1/txns/whales"
        );
    }

    #[test]
    fn test_cannot_be_base_rejected() {
        assert!(ExplorerClient::new("mailto:ops@example.com", Duration::from_secs(1)).is_err());
    }

    #[test]
    fn test_list_body_shapes() {
        let bare: ListBody<TrendingContractView> =
            serde_json::from_str(r#"[{"contract":"ref-finance.near","users_24h":1500}]"#).unwrap();
        assert_eq!(bare.into_items().len(), 1);

        let wrapped: ListBody<TrendingContractView> =
            serde_json::from_str(r#"{"contracts":[{"contract_id":"burrow.near"}]}"#).unwrap();
        let items = wrapped.into_items();
        let contract = items.into_iter().next().and_then(TrendingContractView::into_contract);
        assert_eq!(
            contract,
            Some(TrendingContract {
                contract: "burrow.near".to_string(),
                users_24h: 0,
                growth: None,
            })
        );
    }

    #[test]
    fn test_entries_without_identity_dropped() {
        let body: ListBody<WhaleTransferView> = serde_json::from_str(
            r#"[{"account":"whale1.near","amount":"1,000,000 NEAR","type":"transfer"},{"amount":"5"}]"#,
        )
        .unwrap();
        let transfers: Vec<_> = body
            .into_items()
            .into_iter()
            .filter_map(WhaleTransferView::into_transfer)
            .collect();
        assert_eq!(transfers.len(), 1);
        assert_eq!(transfers[0].account, "whale1.near");
    }

    #[test]
    fn test_defi_stats_defaults() {
        let view: DefiStatsView =
            serde_json::from_str(r#"{"top_protocol":"Ref Finance"}"#).unwrap();
        let stats = view.into_stats();
        assert_eq!(stats.total_tvl_near, "0");
        assert_eq!(stats.top_protocol.as_deref(), Some("Ref Finance"));
    }
}
