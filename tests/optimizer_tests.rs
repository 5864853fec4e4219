// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the advisory gas optimizer and transaction classifier

use nearscan::{
    base_tgas, optimize, OptimizationRule, TransactionShape, TxKind, NO_ISSUES_RECOMMENDATION,
};

#[test]
fn test_all_rules_fire_in_documented_order() {
    let shape = TransactionShape {
        tx_type: "function_call".to_string(),
        action_count: 0,
        args_size_bytes: 3000,
        batch_actions: 0,
        attached_deposit: "500".to_string(),
    };

    let advice = optimize(&shape);

    assert_eq!(advice.tx_type, "function_call");
    assert_eq!(advice.estimated_savings_percent, 15);
    assert_eq!(
        advice.recommendations,
        vec![
            "Reduce argument payload size (consider IDs/pointers instead of full objects).",
            "Batch related actions to reduce fixed overhead.",
            "Review attached deposit and keep it minimal when possible.",
            "Mark methods as view where possible to avoid unnecessary state changes.",
        ]
    );
}

#[test]
fn test_no_rules_gives_single_fallback() {
    let shape = TransactionShape {
        tx_type: "transfer".to_string(),
        batch_actions: 2,
        ..TransactionShape::default()
    };

    let advice = optimize(&shape);

    assert_eq!(advice.recommendations, vec![NO_ISSUES_RECOMMENDATION]);
    assert_eq!(advice.estimated_savings_percent, 8);
}

#[test]
fn test_two_rules_stay_in_base_tier() {
    let shape = TransactionShape {
        tx_type: "transfer".to_string(),
        args_size_bytes: 4096,
        batch_actions: 1,
        ..TransactionShape::default()
    };

    let advice = optimize(&shape);

    assert_eq!(advice.recommendations.len(), 2);
    assert_eq!(
        advice.recommendations[0],
        OptimizationRule::LargePayload.recommendation()
    );
    assert_eq!(
        advice.recommendations[1],
        OptimizationRule::UnbatchedActions.recommendation()
    );
    assert_eq!(advice.estimated_savings_percent, 8);
}

#[test]
fn test_payload_threshold_is_exclusive() {
    let at_threshold = TransactionShape {
        tx_type: "transfer".to_string(),
        args_size_bytes: 2048,
        batch_actions: 2,
        ..TransactionShape::default()
    };
    assert!(!OptimizationRule::LargePayload.fires(&at_threshold));

    let over = TransactionShape {
        args_size_bytes: 2049,
        ..at_threshold
    };
    assert!(OptimizationRule::LargePayload.fires(&over));
}

#[test]
fn test_zero_deposit_forms_do_not_fire() {
    for deposit in ["0", "0.0", "000", ""] {
        let shape = TransactionShape {
            attached_deposit: deposit.to_string(),
            ..TransactionShape::default()
        };
        assert!(
            !OptimizationRule::AttachedDeposit.fires(&shape),
            "deposit {deposit:?}"
        );
    }
}

#[test]
fn test_optimize_is_idempotent() {
    let shape: TransactionShape = serde_json::from_str(
        r#"{"type":"FUNCTION_CALL","args_size_bytes":5000,"attached_deposit_yocto":1}"#,
    )
    .unwrap();

    let first = serde_json::to_string(&optimize(&shape)).unwrap();
    let second = serde_json::to_string(&optimize(&shape)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_classifier_table_is_total() {
    assert_eq!(base_tgas("unknown_type"), base_tgas("function_call"));
    assert_eq!(base_tgas(""), 30);
    for kind in TxKind::ALL {
        assert_eq!(base_tgas(kind.as_str()), kind.base_tgas());
        assert_eq!(base_tgas(&kind.as_str().to_uppercase()), kind.base_tgas());
    }
}
