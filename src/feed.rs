// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Shared plumbing for REST data feeds

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::errors::FeedError;

/// Build an HTTP client whose every request is bounded by `timeout`
pub(crate) fn http_client(
    endpoint: &'static str,
    timeout: Duration,
) -> Result<reqwest::Client, FeedError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|source| FeedError::Http { endpoint, source })
}

pub(crate) fn parse_url(raw: &str) -> Result<Url, FeedError> {
    Url::parse(raw).map_err(|e| FeedError::UrlInvalid {
        url: raw.to_string(),
        details: e.to_string(),
    })
}

/// GET `url` and decode the JSON body into `T`
///
/// Transport failures, non-2xx statuses and undecodable bodies map to
/// distinct [`FeedError`] variants so the degrade marker says which happened.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    endpoint: &'static str,
    url: Url,
) -> Result<T, FeedError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| FeedError::Http { endpoint, source })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FeedError::BadStatus {
            endpoint,
            status: status.as_u16(),
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(|source| FeedError::Http { endpoint, source })?;

    serde_json::from_slice(&body).map_err(|e| FeedError::malformed(endpoint, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url_rejects_garbage() {
        assert!(matches!(
            parse_url("::nope"),
            Err(FeedError::UrlInvalid { .. })
        ));
        assert!(parse_url("https://api.coingecko.com/api/v3/simple/price").is_ok());
    }
}
