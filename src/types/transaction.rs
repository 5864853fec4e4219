// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Caller-supplied transaction shape

use std::str::FromStr;

use bigdecimal::{BigDecimal, Zero};
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::gas::classifier::TxKind;

/// Structural description of a transaction, used by the estimator and optimizer
///
/// Every field has a default, so partial JSON input decodes:
///
/// ```
/// use nearscan::TransactionShape;
///
/// let shape: TransactionShape =
///     serde_json::from_str(r#"{ "type": "transfer", "actions": [{}, {}] }"#).unwrap();
/// assert_eq!(shape.tx_type, "transfer");
/// assert_eq!(shape.action_count, 2);
/// assert_eq!(shape.attached_deposit, "0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionShape {
    /// Action kind label, matched case-insensitively by the classifier
    #[serde(alias = "type")]
    pub tx_type: String,
    /// Number of actions beyond the base transaction; `actions: [...]` counts its items
    #[serde(alias = "actions", deserialize_with = "count_or_list")]
    pub action_count: u64,
    /// Serialized argument payload size
    #[serde(deserialize_with = "null_as_zero")]
    pub args_size_bytes: u64,
    /// Number of actions batched into this transaction
    #[serde(deserialize_with = "null_as_zero")]
    pub batch_actions: u64,
    /// Attached deposit in yoctoNEAR, as a decimal string
    #[serde(alias = "attached_deposit_yocto", deserialize_with = "string_or_number")]
    pub attached_deposit: String,
}

impl Default for TransactionShape {
    fn default() -> Self {
        Self {
            tx_type: TxKind::FunctionCall.as_str().to_string(),
            action_count: 0,
            args_size_bytes: 0,
            batch_actions: 0,
            attached_deposit: "0".to_string(),
        }
    }
}

impl TransactionShape {
    /// Shape with a given type and all other fields defaulted
    pub fn of_type(tx_type: impl Into<String>) -> Self {
        Self {
            tx_type: tx_type.into(),
            ..Self::default()
        }
    }

    /// Whether a nonzero deposit is attached
    ///
    /// Numeric strings are compared by value (`"0.0"` is zero). Blank strings
    /// count as no deposit; any other unparseable string counts as a deposit.
    pub fn has_attached_deposit(&self) -> bool {
        let raw = self.attached_deposit.trim();
        if raw.is_empty() {
            return false;
        }
        match BigDecimal::from_str(raw) {
            Ok(amount) => !amount.is_zero(),
            Err(_) => true,
        }
    }
}

fn count_or_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum CountOrList {
        Count(u64),
        List(Vec<serde_json::Value>),
    }

    match Option::<CountOrList>::deserialize(deserializer)? {
        None => Ok(0),
        Some(CountOrList::Count(n)) => Ok(n),
        Some(CountOrList::List(items)) => u64::try_from(items.len()).map_err(de::Error::custom),
    }
}

/// An explicit `null` counts as an absent field
fn null_as_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or(0))
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok("0".to_string()),
        other => Err(de::Error::custom(format!(
            "expected decimal string or number, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shape() {
        let shape = TransactionShape::default();
        assert_eq!(shape.tx_type, "function_call");
        assert!(!shape.has_attached_deposit());
    }

    #[test]
    fn test_decode_canonical_fields() {
        let shape: TransactionShape = serde_json::from_str(
            r#"{
                "tx_type": "function_call",
                "action_count": 3,
                "args_size_bytes": 3000,
                "batch_actions": 1,
                "attached_deposit": "500"
            }"#,
        )
        .unwrap();
        assert_eq!(shape.action_count, 3);
        assert_eq!(shape.args_size_bytes, 3000);
        assert!(shape.has_attached_deposit());
    }

    #[test]
    fn test_decode_numeric_deposit_alias() {
        let shape: TransactionShape =
            serde_json::from_str(r#"{ "attached_deposit_yocto": 1000000 }"#).unwrap();
        assert_eq!(shape.attached_deposit, "1000000");
        assert!(shape.has_attached_deposit());
    }

    #[test]
    fn test_null_fields_read_as_absent() {
        let shape: TransactionShape = serde_json::from_str(
            r#"{
                "args_size_bytes": null,
                "batch_actions": null,
                "action_count": null,
                "attached_deposit": null
            }"#,
        )
        .unwrap();
        assert_eq!(shape, TransactionShape::default());
    }

    #[test]
    fn test_deposit_zero_forms() {
        for raw in ["0", "0.0", "000", "", "  "] {
            let shape = TransactionShape {
                attached_deposit: raw.to_string(),
                ..TransactionShape::default()
            };
            assert!(!shape.has_attached_deposit(), "{raw:?} should be no deposit");
        }
    }

    #[test]
    fn test_unparseable_deposit_counts() {
        let shape = TransactionShape {
            attached_deposit: "1 NEAR".to_string(),
            ..TransactionShape::default()
        };
        assert!(shape.has_attached_deposit());
    }
}
