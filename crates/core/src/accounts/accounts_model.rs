//! Account domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};
use crate::transactions::Transaction;

/// Kind of account holding the money.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    Bank,
    Cash,
    CreditCard,
}

/// Domain model representing an account in the system.
///
/// The stored `balance` is a cached derivation: it is always
/// recomputable as the initial balance plus the signed sum of all
/// transactions referencing this account. `recalculated_balance` is the
/// source of truth.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    pub account_type: AccountType,
    pub initial_balance: Decimal,
    pub balance: Decimal,
    /// Day of month the card payment is charged. Credit cards only.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_day: Option<u32>,
}

impl Account {
    /// Recomputes the current balance from the initial balance and the
    /// net flow of the transactions linked to this account.
    pub fn recalculated_balance(&self, transactions: &[Transaction]) -> Decimal {
        let net_flow: Decimal = transactions
            .iter()
            .filter(|t| t.account_id == self.id)
            .map(|t| t.signed_amount())
            .sum();
        self.initial_balance + net_flow
    }

    /// Returns a copy of this account with its cached balance refreshed
    /// from the given transactions.
    pub fn with_recalculated_balance(&self, transactions: &[Transaction]) -> Account {
        Account {
            balance: self.recalculated_balance(transactions),
            ..self.clone()
        }
    }
}

/// Input model for creating a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub account_type: AccountType,
    pub initial_balance: Decimal,
    #[serde(default)]
    pub payment_day: Option<u32>,
}

impl NewAccount {
    /// Validates the new account data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Account name cannot be empty".to_string(),
            )));
        }
        if let Some(day) = self.payment_day {
            if self.account_type != AccountType::CreditCard {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Payment day is only valid on credit card accounts".to_string(),
                )));
            }
            if !(1..=31).contains(&day) {
                return Err(Error::Validation(ValidationError::InvalidInput(
                    "Payment day must be between 1 and 31".to_string(),
                )));
            }
        }
        Ok(())
    }
}
