//! Recurring rule domain models.

use chrono::{DateTime, Months, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};
use crate::transactions::FlowDirection;

/// How often a recurring rule fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Monthly,
    Yearly,
}

impl Frequency {
    /// Advances an instant by one period, calendar-aware: the
    /// day-of-month is clamped to the length of the target month
    /// (Jan 31 + 1 month = Feb 28/29), never a fixed day count.
    ///
    /// Returns `None` only on date overflow.
    pub fn advance(&self, from: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let months = match self {
            Frequency::Monthly => 1,
            Frequency::Yearly => 12,
        };
        from.checked_add_months(Months::new(months))
    }
}

/// A template that periodically generates a real transaction.
///
/// `next_run_date` is always at or after the most recently materialized
/// occurrence; the engine advances it one period per occurrence. It is
/// mutated only by the catch-up engine or by user deactivation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringRule {
    pub id: String,
    pub description: String,
    pub amount: Decimal,
    pub direction: FlowDirection,
    pub category: String,
    pub account_id: String,
    pub frequency: Frequency,
    pub start_date: DateTime<Utc>,
    pub next_run_date: DateTime<Utc>,
    pub active: bool,
    #[serde(default)]
    pub is_business: bool,
}

/// Input model for creating a new recurring rule.
///
/// The initial `next_run_date` is the rule's start date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecurringRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub description: String,
    pub amount: Decimal,
    pub direction: FlowDirection,
    pub category: String,
    pub account_id: String,
    pub frequency: Frequency,
    pub start_date: DateTime<Utc>,
    pub active: bool,
    #[serde(default)]
    pub is_business: bool,
}

impl NewRecurringRule {
    /// Validates the new rule data.
    pub fn validate(&self) -> Result<()> {
        if self.amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Recurring rule amount must be positive".to_string(),
            )));
        }
        if self.description.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "description".to_string(),
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
