//! Tests for transaction domain models.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal_macros::dec;

use crate::transactions::{monthly_expense_total, FlowDirection, NewTransaction, Transaction};

fn tx(
    amount: rust_decimal::Decimal,
    direction: FlowDirection,
    category: &str,
    date: DateTime<Utc>,
) -> Transaction {
    Transaction {
        id: "tx-1".to_string(),
        amount,
        direction,
        category: category.to_string(),
        description: "test".to_string(),
        date,
        account_id: "acc-1".to_string(),
        is_business: false,
        origin_rule_id: None,
        idempotency_key: None,
    }
}

#[test]
fn test_signed_amount_carries_direction() {
    let date = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
    let income = tx(dec!(100), FlowDirection::Income, "Salary", date);
    let expense = tx(dec!(40), FlowDirection::Expense, "Food", date);

    assert_eq!(income.signed_amount(), dec!(100));
    assert_eq!(expense.signed_amount(), dec!(-40));
}

#[test]
fn test_monthly_expense_total_filters_month_category_and_direction() {
    let now = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
    let transactions = vec![
        // Counts: expense, right category, right month
        tx(
            dec!(120),
            FlowDirection::Expense,
            "Food",
            Utc.with_ymd_and_hms(2024, 3, 5, 9, 0, 0).unwrap(),
        ),
        tx(
            dec!(80),
            FlowDirection::Expense,
            "Food",
            Utc.with_ymd_and_hms(2024, 3, 18, 20, 30, 0).unwrap(),
        ),
        // Wrong month
        tx(
            dec!(500),
            FlowDirection::Expense,
            "Food",
            Utc.with_ymd_and_hms(2024, 2, 28, 9, 0, 0).unwrap(),
        ),
        // Wrong year, same month number
        tx(
            dec!(500),
            FlowDirection::Expense,
            "Food",
            Utc.with_ymd_and_hms(2023, 3, 5, 9, 0, 0).unwrap(),
        ),
        // Wrong category
        tx(
            dec!(60),
            FlowDirection::Expense,
            "Transport",
            Utc.with_ymd_and_hms(2024, 3, 6, 9, 0, 0).unwrap(),
        ),
        // Income never counts
        tx(
            dec!(900),
            FlowDirection::Income,
            "Food",
            Utc.with_ymd_and_hms(2024, 3, 7, 9, 0, 0).unwrap(),
        ),
    ];

    assert_eq!(monthly_expense_total(&transactions, "Food", now), dec!(200));
}

#[test]
fn test_monthly_expense_total_empty_is_zero() {
    let now = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
    assert_eq!(
        monthly_expense_total(&[], "Food", now),
        rust_decimal::Decimal::ZERO
    );
}

#[test]
fn test_new_transaction_rejects_negative_amount() {
    let new_tx = NewTransaction {
        id: None,
        amount: dec!(-1),
        direction: FlowDirection::Expense,
        category: "Food".to_string(),
        description: "bad".to_string(),
        date: Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap(),
        account_id: "acc-1".to_string(),
        is_business: false,
        origin_rule_id: None,
        idempotency_key: None,
    };

    assert!(new_tx.validate().is_err());
}

#[test]
fn test_new_transaction_requires_account() {
    let new_tx = NewTransaction {
        id: None,
        amount: dec!(10),
        direction: FlowDirection::Expense,
        category: "Food".to_string(),
        description: "groceries".to_string(),
        date: Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap(),
        account_id: "  ".to_string(),
        is_business: false,
        origin_rule_id: None,
        idempotency_key: None,
    };

    assert!(new_tx.validate().is_err());
}

#[test]
fn test_flow_direction_serialization() {
    assert_eq!(
        serde_json::to_string(&FlowDirection::Income).unwrap(),
        "\"income\""
    );
    assert_eq!(
        serde_json::to_string(&FlowDirection::Expense).unwrap(),
        "\"expense\""
    );
}
