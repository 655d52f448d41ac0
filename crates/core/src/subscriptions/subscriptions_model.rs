//! Subscription domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};
use crate::recurrence::Frequency;

/// A tracked recurring service (streaming, gym, insurance, ...).
///
/// Unlike a recurring rule, a subscription does not generate
/// transactions by itself; it is watched by the alert engine, which
/// flags payments the user appears to have forgotten to record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: String,
    pub name: String,
    pub cost: Decimal,
    pub frequency: Frequency,
    pub next_payment_date: DateTime<Utc>,
    pub category: String,
    pub active: bool,
}

/// Input model for creating a new subscription.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubscription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub cost: Decimal,
    pub frequency: Frequency,
    pub next_payment_date: DateTime<Utc>,
    pub category: String,
    pub active: bool,
}

impl NewSubscription {
    /// Validates the new subscription data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "name".to_string(),
            )));
        }
        if self.cost < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Subscription cost cannot be negative".to_string(),
            )));
        }
        Ok(())
    }
}
