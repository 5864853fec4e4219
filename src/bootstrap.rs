// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line entry point
//!
//! `nearscan <command> [json]` runs one operation and prints its result as
//! JSON on stdout. `estimate` and `optimize` take an optional
//! [`TransactionShape`] as a JSON argument.

use std::sync::Arc;

use anyhow::{bail, Context};
use serde_json::Value;
use tracing::info;

use crate::compare::CrossChainComparator;
use crate::config::NearscanConfig;
use crate::explorer::{network_status, ExplorerClient};
use crate::gas::{optimize, GasEstimator, GasHistory};
use crate::price::CoinGeckoPriceSource;
use crate::provider::{create_http_provider, NearProvider, ProviderConfig};
use crate::reference::EtherscanGasOracle;
use crate::types::transaction::TransactionShape;

pub const USAGE: &str =
    "usage: nearscan <estimate|optimize|history|compare|status|trending|whales|defi> [json]";

/// A parsed CLI invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Estimate(TransactionShape),
    Optimize(TransactionShape),
    History,
    Compare,
    Status,
    Trending,
    Whales,
    Defi,
}

impl Command {
    /// Parse arguments, excluding the program name
    pub fn parse(args: &[String]) -> anyhow::Result<Self> {
        let Some(name) = args.first() else {
            bail!("missing command\n{USAGE}");
        };
        let shape = || -> anyhow::Result<TransactionShape> {
            match args.get(1) {
                Some(raw) => serde_json::from_str(raw).context("invalid transaction shape JSON"),
                None => Ok(TransactionShape::default()),
            }
        };

        let command = match name.as_str() {
            "estimate" => Command::Estimate(shape()?),
            "optimize" => Command::Optimize(shape()?),
            "history" => Command::History,
            "compare" => Command::Compare,
            "status" => Command::Status,
            "trending" => Command::Trending,
            "whales" => Command::Whales,
            "defi" => Command::Defi,
            other => bail!("unknown command `{other}`\n{USAGE}"),
        };
        Ok(command)
    }
}

/// Main entry point for the application.
pub async fn run() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = Command::parse(&args)?;
    let config = NearscanConfig::from_env();

    info!(command = ?command, "Running command");
    let output = execute(&config, command).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

/// Run a command against the configured endpoints
pub async fn execute(config: &NearscanConfig, command: Command) -> anyhow::Result<Value> {
    let output = match command {
        Command::Estimate(shape) => {
            let estimator = GasEstimator::new(primary_provider(config)?);
            let tx_type = shape.tx_type.clone();
            serde_json::to_value(estimator.estimate(&tx_type, &shape).await?)?
        }
        Command::Optimize(shape) => serde_json::to_value(optimize(&shape))?,
        Command::History => {
            let providers = config
                .networks
                .iter()
                .map(|network| provider_for(ProviderConfig::for_network(config, network)))
                .collect::<anyhow::Result<Vec<_>>>()?;
            serde_json::to_value(GasHistory::new(providers).snapshots().await)?
        }
        Command::Compare => {
            let comparator = CrossChainComparator::new(
                primary_provider(config)?,
                Arc::new(CoinGeckoPriceSource::from_config(config)?),
                Arc::new(EtherscanGasOracle::from_config(config)?),
            );
            serde_json::to_value(comparator.compare().await?)?
        }
        Command::Status => {
            let provider = primary_provider(config)?;
            serde_json::to_value(network_status(provider.as_ref()).await)?
        }
        Command::Trending => {
            serde_json::to_value(ExplorerClient::from_config(config)?.trending_contracts().await)?
        }
        Command::Whales => {
            serde_json::to_value(ExplorerClient::from_config(config)?.whale_transfers().await)?
        }
        Command::Defi => {
            serde_json::to_value(ExplorerClient::from_config(config)?.defi_stats().await)?
        }
    };
    Ok(output)
}

fn primary_provider(config: &NearscanConfig) -> anyhow::Result<Arc<dyn NearProvider>> {
    let network = config
        .primary_network()
        .context("no NEAR network configured")?;
    provider_for(ProviderConfig::for_network(config, network))
}

fn provider_for(config: ProviderConfig) -> anyhow::Result<Arc<dyn NearProvider>> {
    let network = config.network.clone();
    let provider = create_http_provider(config)
        .with_context(|| format!("failed to create provider for {network}"))?;
    Ok(Arc::new(provider))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse(&args(&["compare"])).unwrap(), Command::Compare);
        assert_eq!(Command::parse(&args(&["history"])).unwrap(), Command::History);
        assert_eq!(
            Command::parse(&args(&["optimize"])).unwrap(),
            Command::Optimize(TransactionShape::default())
        );
    }

    #[test]
    fn test_parse_shape_argument() {
        let raw = r#"{"type":"transfer","action_count":2}"#;
        let command = Command::parse(&args(&["estimate", raw])).unwrap();
        let Command::Estimate(shape) = command else {
            panic!("expected estimate");
        };
        assert_eq!(shape.tx_type, "transfer");
        assert_eq!(shape.action_count, 2);
    }

    #[test]
    fn test_parse_errors() {
        assert!(Command::parse(&[]).is_err());
        assert!(Command::parse(&args(&["launch"])).is_err());
        assert!(Command::parse(&args(&["estimate", "{not json"])).is_err());
    }

    #[tokio::test]
    async fn test_optimize_needs_no_network() {
        let config = crate::config::NearscanConfigBuilder::new().build();
        let output = execute(&config, Command::Optimize(TransactionShape::default()))
            .await
            .unwrap();
        assert_eq!(output["estimated_savings_percent"], 8);
    }

    #[tokio::test]
    async fn test_estimate_without_networks_fails() {
        let config = crate::config::NearscanConfigBuilder::new().build();
        let result = execute(&config, Command::Estimate(TransactionShape::default())).await;
        assert!(result.is_err());
    }
}
