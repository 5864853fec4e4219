// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Degrade-to-default results
//!
//! Upstream feeds fail independently. Instead of catching the failure and
//! silently substituting zero, fetchers return a [`Fetched`] that carries the
//! substituted value together with a [`FetchFailure`] marker, so a degraded zero
//! can never be mistaken for real data without a visible branch.

use serde::{Deserialize, Serialize, Serializer};

/// Why a fetch was degraded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchFailure {
    /// NEAR JSON-RPC call failed
    RpcUnavailable,
    /// REST request failed before a response arrived
    HttpUnavailable,
    /// Request exceeded the configured timeout
    Timeout,
    /// Upstream answered with a non-success status
    BadStatus,
    /// Response body did not decode or held unusable values
    MalformedResponse,
}

impl FetchFailure {
    /// Stable marker string, identical to the serialized form
    pub const fn as_str(&self) -> &'static str {
        match self {
            FetchFailure::RpcUnavailable => "rpc_unavailable",
            FetchFailure::HttpUnavailable => "http_unavailable",
            FetchFailure::Timeout => "timeout",
            FetchFailure::BadStatus => "bad_status",
            FetchFailure::MalformedResponse => "malformed_response",
        }
    }
}

impl std::fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value that was either fetched live or substituted after a failure
///
/// # Example
///
/// ```
/// use nearscan::{FetchFailure, Fetched};
///
/// let price: Fetched<f64> = Fetched::degraded(0.0, FetchFailure::Timeout);
/// match price {
///     Fetched::Live(usd) => println!("NEAR = ${usd}"),
///     Fetched::Degraded { failure, .. } => println!("price unknown ({failure})"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    /// The upstream answered and the value is real
    Live(T),
    /// The upstream failed; `value` is the documented default
    Degraded {
        /// Substituted default
        value: T,
        /// What went wrong
        failure: FetchFailure,
    },
}

impl<T> Fetched<T> {
    /// Wrap a substituted default
    pub fn degraded(value: T, failure: FetchFailure) -> Self {
        Fetched::Degraded { value, failure }
    }

    /// The value, only if it was fetched live
    pub fn live(&self) -> Option<&T> {
        match self {
            Fetched::Live(value) => Some(value),
            Fetched::Degraded { .. } => None,
        }
    }

    /// The failure marker, if degraded
    pub fn failure(&self) -> Option<FetchFailure> {
        match self {
            Fetched::Live(_) => None,
            Fetched::Degraded { failure, .. } => Some(*failure),
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Fetched::Live(_))
    }

    /// Split into the value (live or substituted) and its marker
    pub fn into_parts(self) -> (T, Option<FetchFailure>) {
        match self {
            Fetched::Live(value) => (value, None),
            Fetched::Degraded { value, failure } => (value, Some(failure)),
        }
    }

    /// Transform the value, keeping the marker
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Fetched<U> {
        match self {
            Fetched::Live(value) => Fetched::Live(f(value)),
            Fetched::Degraded { value, failure } => Fetched::Degraded {
                value: f(value),
                failure,
            },
        }
    }
}

/// Serializes as `{ "data": ..., "error": "<marker>" }`, omitting `error` when live
impl<T: Serialize> Serialize for Fetched<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Wire<'a, T> {
            data: &'a T,
            #[serde(skip_serializing_if = "Option::is_none")]
            error: Option<FetchFailure>,
        }

        let wire = match self {
            Fetched::Live(value) => Wire {
                data: value,
                error: None,
            },
            Fetched::Degraded { value, failure } => Wire {
                data: value,
                error: Some(*failure),
            },
        };
        wire.serialize(serializer)
    }
}
