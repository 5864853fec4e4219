// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Rule-based gas optimization advice
//!
//! [`optimize`] runs a fixed, ordered list of independent checks against a
//! [`TransactionShape`]. Each rule that fires contributes one recommendation,
//! and the output preserves rule order.
//!
//! `estimated_savings_percent` is a coarse two-tier heuristic (15 when three or
//! more rules fire, otherwise 8). It is not derived from any measurement and
//! should not be presented as one.

use serde::{Deserialize, Serialize};

use crate::config::constants::optimizer::{
    ARGS_SIZE_THRESHOLD_BYTES, BASE_SAVINGS_PERCENT, HIGH_SAVINGS_PERCENT,
    HIGH_SAVINGS_RULE_COUNT, MIN_BATCH_ACTIONS,
};
use crate::gas::classifier::TxKind;
use crate::types::transaction::TransactionShape;

/// Recommendation emitted when no rule fires
pub const NO_ISSUES_RECOMMENDATION: &str =
    "No obvious inefficiencies detected. Benchmark with representative inputs.";

/// Optimization checks, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimizationRule {
    /// Argument payload above [`ARGS_SIZE_THRESHOLD_BYTES`]
    LargePayload,
    /// Fewer than [`MIN_BATCH_ACTIONS`] batched actions
    UnbatchedActions,
    /// Nonzero attached deposit
    AttachedDeposit,
    /// State-changing function call
    FunctionCall,
}

impl OptimizationRule {
    /// Rules in the order they are evaluated and reported
    pub const ALL: [OptimizationRule; 4] = [
        OptimizationRule::LargePayload,
        OptimizationRule::UnbatchedActions,
        OptimizationRule::AttachedDeposit,
        OptimizationRule::FunctionCall,
    ];

    pub fn fires(self, shape: &TransactionShape) -> bool {
        match self {
            OptimizationRule::LargePayload => shape.args_size_bytes > ARGS_SIZE_THRESHOLD_BYTES,
            OptimizationRule::UnbatchedActions => shape.batch_actions < MIN_BATCH_ACTIONS,
            OptimizationRule::AttachedDeposit => shape.has_attached_deposit(),
            OptimizationRule::FunctionCall => {
                shape.tx_type.parse::<TxKind>() == Ok(TxKind::FunctionCall)
            }
        }
    }

    pub const fn recommendation(self) -> &'static str {
        match self {
            OptimizationRule::LargePayload => {
                "Reduce argument payload size (consider IDs/pointers instead of full objects)."
            }
            OptimizationRule::UnbatchedActions => {
                "Batch related actions to reduce fixed overhead."
            }
            OptimizationRule::AttachedDeposit => {
                "Review attached deposit and keep it minimal when possible."
            }
            OptimizationRule::FunctionCall => {
                "Mark methods as view where possible to avoid unnecessary state changes."
            }
        }
    }
}

/// Advisory result of [`optimize`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GasOptimization {
    pub tx_type: String,
    /// Coarse heuristic, see module docs
    pub estimated_savings_percent: u8,
    /// One entry per fired rule in rule order, or a single fallback entry
    pub recommendations: Vec<String>,
}

/// Scan a transaction shape for common inefficiencies
///
/// Pure and deterministic; never touches the network.
///
/// # Example
/// ```
/// use nearscan::{optimize, TransactionShape};
///
/// let shape = TransactionShape {
///     tx_type: "transfer".into(),
///     batch_actions: 2,
///     ..TransactionShape::default()
/// };
/// let advice = optimize(&shape);
/// assert_eq!(advice.recommendations.len(), 1);
/// assert_eq!(advice.estimated_savings_percent, 8);
/// ```
pub fn optimize(shape: &TransactionShape) -> GasOptimization {
    let fired: Vec<OptimizationRule> = OptimizationRule::ALL
        .into_iter()
        .filter(|rule| rule.fires(shape))
        .collect();

    let estimated_savings_percent = if fired.len() >= HIGH_SAVINGS_RULE_COUNT {
        HIGH_SAVINGS_PERCENT
    } else {
        BASE_SAVINGS_PERCENT
    };

    let recommendations = if fired.is_empty() {
        vec![NO_ISSUES_RECOMMENDATION.to_string()]
    } else {
        fired
            .iter()
            .map(|rule| rule.recommendation().to_string())
            .collect()
    };

    tracing::debug!(
        tx_type = %shape.tx_type,
        rules_fired = fired.len(),
        estimated_savings_percent,
        "Optimization scan complete"
    );

    GasOptimization {
        tx_type: shape.tx_type.clone(),
        estimated_savings_percent,
        recommendations,
    }
}
