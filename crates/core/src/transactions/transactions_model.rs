//! Transaction domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};
use crate::utils::date_utils::same_calendar_month;

/// Direction of a cash movement. Amounts are magnitudes; the sign is
/// carried here, never by a negative amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowDirection {
    Income,
    Expense,
}

/// Domain model representing a ledger transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub amount: Decimal,
    pub direction: FlowDirection,
    pub category: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub account_id: String,
    #[serde(default)]
    pub is_business: bool,
    /// Id of the recurring rule this transaction was materialized from,
    /// when it was generated rather than entered by the user.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_rule_id: Option<String>,
    /// Stable fingerprint for dedupe of generated transactions.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
}

impl Transaction {
    /// The amount with its direction applied: positive for income,
    /// negative for expense.
    pub fn signed_amount(&self) -> Decimal {
        match self.direction {
            FlowDirection::Income => self.amount,
            FlowDirection::Expense => -self.amount,
        }
    }
}

/// Input model for creating a new transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub amount: Decimal,
    pub direction: FlowDirection,
    pub category: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub account_id: String,
    #[serde(default)]
    pub is_business: bool,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_rule_id: Option<String>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
}

impl NewTransaction {
    /// Validates the new transaction data.
    pub fn validate(&self) -> Result<()> {
        if self.amount < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Transaction amount cannot be negative".to_string(),
            )));
        }
        if self.account_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "accountId".to_string(),
            )));
        }
        Ok(())
    }
}

/// Sums the expense magnitudes for one category within the calendar
/// month of `now`.
///
/// Shared by the category-limit automation trigger and budget
/// reporting.
pub fn monthly_expense_total(
    transactions: &[Transaction],
    category: &str,
    now: DateTime<Utc>,
) -> Decimal {
    transactions
        .iter()
        .filter(|t| {
            t.direction == FlowDirection::Expense
                && t.category == category
                && same_calendar_month(t.date, now)
        })
        .map(|t| t.amount)
        .sum()
}
