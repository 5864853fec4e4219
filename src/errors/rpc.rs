// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Shared RPC error types for NEAR JSON-RPC operations.
//!
//! This module provides error types for common failures that can occur when
//! talking to a NEAR node, independent of which operation issued the call.

use crate::types::fetched::FetchFailure;

/// Errors that can occur during NEAR JSON-RPC operations.
///
/// Transport failures (connection refused, TLS, timeouts) and JSON-RPC error
/// responses both surface as [`RpcError::RequestFailed`], carrying the method
/// name so logs show which call broke.
///
/// # Examples
///
/// ```rust
/// use nearscan::RpcError;
///
/// let error = RpcError::missing_field("status", "sync_info.latest_block_height");
/// assert_eq!(
///     error.to_string(),
///     "RPC response for status is missing sync_info.latest_block_height"
/// );
/// ```
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// The configured RPC URL could not be parsed.
    #[error("Invalid RPC URL: {0}")]
    ProviderUrlInvalid(String),

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build RPC client: {0}")]
    ClientBuildFailed(String),

    /// The RPC call failed in transport or returned a JSON-RPC error.
    #[error("RPC call {method} failed")]
    RequestFailed {
        /// The JSON-RPC method that was called (e.g. `gas_price`)
        method: String,
        /// The underlying transport error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The call succeeded but a required field was absent from the result.
    #[error("RPC response for {method} is missing {field}")]
    MissingField {
        /// The JSON-RPC method that was called
        method: String,
        /// Dotted path of the missing field
        field: String,
    },
}

impl RpcError {
    /// Helper to create a `RequestFailed` error from any error type.
    pub fn request_failed(
        method: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RpcError::RequestFailed {
            method: method.into(),
            source: Box::new(source),
        }
    }

    /// Helper to create a `MissingField` error.
    pub fn missing_field(method: impl Into<String>, field: impl Into<String>) -> Self {
        RpcError::MissingField {
            method: method.into(),
            field: field.into(),
        }
    }

    /// Failure marker used when this error is degraded instead of propagated.
    pub fn failure(&self) -> FetchFailure {
        match self {
            RpcError::MissingField { .. } => FetchFailure::MalformedResponse,
            _ => FetchFailure::RpcUnavailable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_keeps_method() {
        let err = RpcError::request_failed("gas_price", std::io::Error::other("refused"));
        assert_eq!(err.to_string(), "RPC call gas_price failed");
        assert_eq!(err.failure(), FetchFailure::RpcUnavailable);
    }

    #[test]
    fn test_missing_field_is_malformed() {
        let err = RpcError::missing_field("status", "version");
        assert_eq!(err.failure(), FetchFailure::MalformedResponse);
    }
}
