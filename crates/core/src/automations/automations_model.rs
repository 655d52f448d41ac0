//! Automation rule domain models.
//!
//! Triggers and actions are proper sum types: each variant carries only
//! the fields it needs, so a balance trigger without a threshold or a
//! rule with two triggers is unrepresentable.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Condition variant of an automation rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Trigger {
    /// Matches a newly observed transaction. Every condition is an
    /// optional filter; an absent condition means "don't care".
    TransactionReceived {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        account_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        category: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        amount_min: Option<Decimal>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        amount_max: Option<Decimal>,
        /// Case-insensitive substring match on the description.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description_contains: Option<String>,
    },
    /// Fires while an account's current balance is strictly below the
    /// threshold.
    BalanceBelow {
        account_id: String,
        threshold: Decimal,
    },
    /// Fires when the current calendar month's expenses in a category
    /// strictly exceed the limit.
    CategoryExceeds {
        category: String,
        monthly_limit: Decimal,
    },
}

/// Effect variant of an automation rule, executed when its trigger
/// matches. Each kind degrades to a no-op when a parameter or the
/// matching collaborator is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    CreateInvoice {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        amount: Option<Decimal>,
        /// Counterparty name; falls back to the triggering
        /// transaction's description.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    SendNotification {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        body: Option<String>,
    },
    AddTag {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tag: Option<String>,
    },
}

/// A condition/action pair evaluated against new transactions and
/// account state.
///
/// `last_triggered` and `trigger_count` are mutated only after a
/// successful fire; the active flag is toggled only by the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomationRule {
    pub id: String,
    pub name: String,
    pub description: String,
    pub active: bool,
    pub trigger: Trigger,
    pub action: Action,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_triggered: Option<DateTime<Utc>>,
    #[serde(default)]
    pub trigger_count: u32,
}

/// Input model for creating a new automation rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAutomationRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub active: bool,
    pub trigger: Trigger,
    pub action: Action,
}

impl NewAutomationRule {
    /// Validates the new rule data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Automation rule name cannot be empty".to_string(),
            )));
        }

        match &self.trigger {
            Trigger::TransactionReceived {
                amount_min,
                amount_max,
                ..
            } => {
                if let Some(min) = amount_min {
                    if *min < Decimal::ZERO {
                        return Err(Error::Validation(ValidationError::InvalidInput(
                            "Minimum amount cannot be negative".to_string(),
                        )));
                    }
                }
                if let Some(max) = amount_max {
                    if *max < Decimal::ZERO {
                        return Err(Error::Validation(ValidationError::InvalidInput(
                            "Maximum amount cannot be negative".to_string(),
                        )));
                    }
                }
                if let (Some(min), Some(max)) = (amount_min, amount_max) {
                    if min > max {
                        return Err(Error::Validation(ValidationError::InvalidInput(
                            "Minimum amount cannot exceed maximum amount".to_string(),
                        )));
                    }
                }
            }
            Trigger::BalanceBelow { account_id, .. } => {
                if account_id.trim().is_empty() {
                    return Err(Error::Validation(ValidationError::MissingField(
                        "accountId".to_string(),
                    )));
                }
            }
            Trigger::CategoryExceeds {
                category,
                monthly_limit,
            } => {
                if category.trim().is_empty() {
                    return Err(Error::Validation(ValidationError::MissingField(
                        "category".to_string(),
                    )));
                }
                if *monthly_limit < Decimal::ZERO {
                    return Err(Error::Validation(ValidationError::InvalidInput(
                        "Monthly limit cannot be negative".to_string(),
                    )));
                }
            }
        }

        if let Action::CreateInvoice {
            amount: Some(amount),
            ..
        } = &self.action
        {
            if *amount < Decimal::ZERO {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Invoice amount cannot be negative".to_string(),
                )));
            }
        }

        Ok(())
    }
}

/// One rule firing from a batch run. The caller persists
/// `last_triggered = fired_at` and increments the trigger count for
/// every firing, whether or not the dispatch itself succeeded.
#[derive(Debug)]
pub struct RuleFiring {
    pub rule_id: String,
    pub fired_at: DateTime<Utc>,
    /// Outcome of the action dispatch. A failure here never aborts the
    /// rest of the batch.
    pub result: Result<()>,
}

impl RuleFiring {
    pub fn succeeded(&self) -> bool {
        self.result.is_ok()
    }
}
