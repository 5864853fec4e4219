// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Gas domain for NEAR.
//!
//! ## Public API
//!
//! - [`GasEstimator`] - Tgas and NEAR cost for a transaction at the live price
//! - [`optimize`] - Rule-based advisory scan of a transaction shape
//! - [`GasHistory`] - Gas price snapshots across networks
//! - [`TxKind`] / [`base_tgas`] - Base Tgas per action kind
//!
//! ## Internal Modules
//!
//! - `classifier` - Fixed transaction-kind cost table
//! - `estimator` - Live-price estimation (propagates network failure)
//! - `optimizer` - Pure advisory rules
//! - `history` - Per-network snapshots (degrades per network)

pub mod classifier;
pub mod estimator;
pub mod history;
pub mod optimizer;

pub use classifier::{base_tgas, TxKind, UnknownTxKind};
pub use estimator::{estimated_tgas, GasEstimate, GasEstimator, ESTIMATE_ASSUMPTIONS};
pub use history::{GasHistory, GasSnapshot};
pub use optimizer::{optimize, GasOptimization, OptimizationRule, NO_ISSUES_RECOMMENDATION};
