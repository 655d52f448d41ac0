//! Budget domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::transactions::{monthly_expense_total, Transaction};

/// A monthly spending limit for one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub category: String,
    pub limit: Decimal,
}

/// Spending position of a budget within the current calendar month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetStatus {
    pub category: String,
    pub limit: Decimal,
    pub spent: Decimal,
    /// May be negative once the budget is overrun.
    pub remaining: Decimal,
    pub percent_used: Decimal,
}

impl Budget {
    /// Computes this budget's position for the calendar month of `now`.
    pub fn status(&self, transactions: &[Transaction], now: DateTime<Utc>) -> BudgetStatus {
        let spent = monthly_expense_total(transactions, &self.category, now);
        let percent_used = if self.limit.is_zero() {
            Decimal::ZERO
        } else {
            spent / self.limit * Decimal::ONE_HUNDRED
        };
        BudgetStatus {
            category: self.category.clone(),
            limit: self.limit,
            spent,
            remaining: self.limit - spent,
            percent_used,
        }
    }
}
