// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for REST data feeds (fiat prices, gas oracle, explorer).

use crate::types::fetched::FetchFailure;

/// Errors that can occur while querying a REST data feed.
///
/// Feed errors are almost never surfaced to callers directly. The fetchers in
/// [`crate::price`], [`crate::reference`] and [`crate::explorer`] turn them into
/// a [`FetchFailure`] marker via [`FeedError::failure`] and substitute a default.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// The feed URL could not be built.
    #[error("Invalid feed URL {url}: {details}")]
    UrlInvalid {
        /// The URL that failed to parse
        url: String,
        /// Parser message
        details: String,
    },

    /// The HTTP request failed (connect, TLS, timeout, body read).
    #[error("Request to {endpoint} failed")]
    Http {
        /// Feed name, e.g. `coingecko`
        endpoint: &'static str,
        /// The underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// The feed answered with a non-success status code.
    #[error("{endpoint} responded with HTTP {status}")]
    BadStatus {
        /// Feed name
        endpoint: &'static str,
        /// HTTP status code
        status: u16,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("Malformed response from {endpoint}: {details}")]
    Malformed {
        /// Feed name
        endpoint: &'static str,
        /// Decoder message
        details: String,
    },

    /// A field decoded but its value is unusable (non-finite, zero, negative).
    #[error("Unusable value for {field}: {value}")]
    InvalidValue {
        /// Field name
        field: &'static str,
        /// The raw value as received
        value: String,
    },
}

impl FeedError {
    /// Create a `Malformed` error with details.
    pub fn malformed(endpoint: &'static str, details: impl Into<String>) -> Self {
        FeedError::Malformed {
            endpoint,
            details: details.into(),
        }
    }

    /// Create an `InvalidValue` error.
    pub fn invalid_value(field: &'static str, value: impl ToString) -> Self {
        FeedError::InvalidValue {
            field,
            value: value.to_string(),
        }
    }

    /// Failure marker used when this error is degraded instead of propagated.
    pub fn failure(&self) -> FetchFailure {
        match self {
            FeedError::Http { source, .. } if source.is_timeout() => FetchFailure::Timeout,
            FeedError::Http { .. } | FeedError::UrlInvalid { .. } => FetchFailure::HttpUnavailable,
            FeedError::BadStatus { .. } => FetchFailure::BadStatus,
            FeedError::Malformed { .. } | FeedError::InvalidValue { .. } => {
                FetchFailure::MalformedResponse
            }
        }
    }
}
