// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use super::ReferenceGasSource;
use crate::config::NearscanConfig;
use crate::errors::FeedError;
use crate::feed;

const ENDPOINT: &str = "etherscan";
const FIELD: &str = "ProposeGasPrice";

/// Etherscan `gastracker/gasoracle` client
///
/// Any API key must already be part of the configured URL.
#[derive(Debug, Clone)]
pub struct EtherscanGasOracle {
    client: reqwest::Client,
    url: Url,
}

impl EtherscanGasOracle {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, FeedError> {
        Ok(Self {
            client: feed::http_client(ENDPOINT, timeout)?,
            url: feed::parse_url(url)?,
        })
    }

    pub fn from_config(config: &NearscanConfig) -> Result<Self, FeedError> {
        Self::new(&config.gas_oracle_url, config.http_timeout)
    }
}

#[derive(Debug, Deserialize)]
struct GasOracleResponse {
    #[serde(default)]
    result: Option<OracleResult>,
}

/// Etherscan puts an error message string in `result` when the call is rejected
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OracleResult {
    Prices(GasOracleView),
    Message(String),
}

#[derive(Debug, Deserialize)]
struct GasOracleView {
    #[serde(rename = "ProposeGasPrice", default)]
    propose_gas_price: Option<Value>,
}

impl GasOracleResponse {
    fn proposed_gwei(self) -> Result<f64, FeedError> {
        let raw = match self.result {
            Some(OracleResult::Prices(view)) => view.propose_gas_price,
            Some(OracleResult::Message(message)) => {
                return Err(FeedError::malformed(ENDPOINT, message));
            }
            None => None,
        }
        .ok_or_else(|| FeedError::malformed(ENDPOINT, format!("missing result.{FIELD}")))?;

        let gwei = match &raw {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };

        match gwei {
            Some(gwei) if gwei.is_finite() && gwei > 0.0 => Ok(gwei),
            _ => Err(FeedError::invalid_value(FIELD, raw)),
        }
    }
}

#[async_trait]
impl ReferenceGasSource for EtherscanGasOracle {
    async fn proposed_gas_price_gwei(&self) -> Result<f64, FeedError> {
        let response: GasOracleResponse =
            feed::get_json(&self.client, ENDPOINT, self.url.clone()).await?;
        response.proposed_gwei()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(body: &str) -> Result<f64, FeedError> {
        serde_json::from_str::<GasOracleResponse>(body)
            .expect("decodes")
            .proposed_gwei()
    }

    #[test]
    fn test_string_price() {
        let body = r#"{"status":"1","message":"OK","result":{"LastBlock":"1","SafeGasPrice":"11","ProposeGasPrice":"12.5","FastGasPrice":"14"}}"#;
        assert_eq!(decode(body).unwrap(), 12.5);
    }

    #[test]
    fn test_numeric_price() {
        assert_eq!(decode(r#"{"result":{"ProposeGasPrice":7}}"#).unwrap(), 7.0);
    }

    #[test]
    fn test_rejected_call_is_malformed() {
        let err = decode(r#"{"status":"0","message":"NOTOK","result":"Invalid API Key"}"#)
            .unwrap_err();
        assert!(matches!(err, FeedError::Malformed { .. }));
    }

    #[test]
    fn test_missing_field_is_malformed() {
        assert!(matches!(
            decode(r#"{"result":{"SafeGasPrice":"3"}}"#),
            Err(FeedError::Malformed { .. })
        ));
        assert!(matches!(decode("{}"), Err(FeedError::Malformed { .. })));
    }

    #[test]
    fn test_unusable_price_is_invalid() {
        for body in [
            r#"{"result":{"ProposeGasPrice":"0"}}"#,
            r#"{"result":{"ProposeGasPrice":"-1"}}"#,
            r#"{"result":{"ProposeGasPrice":"abc"}}"#,
            r#"{"result":{"ProposeGasPrice":null}}"#,
        ] {
            let err = decode(body).unwrap_err();
            assert!(
                matches!(err, FeedError::InvalidValue { .. } | FeedError::Malformed { .. }),
                "{body}"
            );
        }
    }
}
