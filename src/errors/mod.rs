// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the nearscan library.
//!
//! This module follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained handling ([`RpcError`],
//!   [`FeedError`], [`GasEstimationError`])
//! - **Unified error type** ([`NearscanError`]) when you don't need to
//!   distinguish between error sources
//!
//! # Two failure policies
//!
//! Only [`GasEstimationError`] is ever returned from the public gas operations.
//! Feed failures never escape: they are converted into a
//! [`FetchFailure`](crate::FetchFailure) marker and carried inside
//! [`Fetched::Degraded`](crate::Fetched::Degraded) next to a safe default.
//!
//! ```rust,ignore
//! use nearscan::{NearscanError, CrossChainComparator};
//!
//! async fn run(comparator: &CrossChainComparator) -> Result<(), NearscanError> {
//!     let result = comparator.compare().await?;
//!     println!("{}", serde_json::to_string(&result).unwrap());
//!     Ok(())
//! }
//! ```

mod feed;
mod gas;
mod rpc;

pub use feed::FeedError;
pub use gas::GasEstimationError;
pub use rpc::RpcError;

/// Unified error type for all nearscan operations.
///
/// All module-specific error types convert to `NearscanError` via `From`, so
/// `?` propagates them naturally.
#[derive(Debug, thiserror::Error)]
pub enum NearscanError {
    /// Error from the NEAR JSON-RPC provider.
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),

    /// Error from a REST data feed.
    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),

    /// Error from gas estimation or comparison.
    #[error("Gas estimation error: {0}")]
    Gas(#[from] GasEstimationError),
}
