// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Transaction type → base Tgas lookup
//!
//! A single immutable table of NEAR action kinds and their base Tgas cost.
//! Lookup is case-insensitive and total: unknown labels cost
//! [`DEFAULT_TX_TGAS`], the same as a function call.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::constants::estimation::DEFAULT_TX_TGAS;

/// Known NEAR transaction kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TxKind {
    Transfer,
    FunctionCall,
    Stake,
    AddKey,
    DeleteKey,
    DeleteAccount,
    DeployContract,
    CreateAccount,
}

impl TxKind {
    /// Every documented kind, in table order
    pub const ALL: [TxKind; 8] = [
        TxKind::Transfer,
        TxKind::FunctionCall,
        TxKind::Stake,
        TxKind::AddKey,
        TxKind::DeleteKey,
        TxKind::DeleteAccount,
        TxKind::DeployContract,
        TxKind::CreateAccount,
    ];

    /// Base Tgas before per-action surcharges
    pub const fn base_tgas(self) -> u64 {
        match self {
            TxKind::Transfer => 7,
            TxKind::FunctionCall => 30,
            TxKind::Stake => 20,
            TxKind::AddKey => 15,
            TxKind::DeleteKey => 10,
            TxKind::DeleteAccount => 10,
            TxKind::DeployContract => 80,
            TxKind::CreateAccount => 20,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            TxKind::Transfer => "transfer",
            TxKind::FunctionCall => "function_call",
            TxKind::Stake => "stake",
            TxKind::AddKey => "add_key",
            TxKind::DeleteKey => "delete_key",
            TxKind::DeleteAccount => "delete_account",
            TxKind::DeployContract => "deploy_contract",
            TxKind::CreateAccount => "create_account",
        }
    }
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for labels outside the table
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown transaction type: {0}")]
pub struct UnknownTxKind(pub String);

impl FromStr for TxKind {
    type Err = UnknownTxKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        TxKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == lowered)
            .ok_or_else(|| UnknownTxKind(s.to_string()))
    }
}

/// Base Tgas for a transaction type label
///
/// # Example
/// ```
/// use nearscan::gas::classifier::base_tgas;
///
/// assert_eq!(base_tgas("Transfer"), 7);
/// assert_eq!(base_tgas("unknown_type"), base_tgas("function_call"));
/// ```
pub fn base_tgas(tx_type: &str) -> u64 {
    tx_type
        .parse::<TxKind>()
        .map(TxKind::base_tgas)
        .unwrap_or(DEFAULT_TX_TGAS)
}
