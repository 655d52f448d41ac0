//! Invoice domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::AUTO_INVOICE_NUMBER_PREFIX;
use crate::errors::{Error, Result, ValidationError};

/// Whether the invoice was issued to a client or received from a
/// supplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceKind {
    Issued,
    Received,
}

/// Lifecycle status of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Overdue,
}

/// Domain model representing an invoice.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub number: String,
    pub date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub entity_name: String,
    pub amount: Decimal,
    pub kind: InvoiceKind,
    pub status: InvoiceStatus,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_transaction_id: Option<String>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Input model for creating a new invoice.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvoice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub number: String,
    pub date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub entity_name: String,
    pub amount: Decimal,
    pub kind: InvoiceKind,
    pub status: InvoiceStatus,
    #[serde(default)]
    pub linked_transaction_id: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl NewInvoice {
    /// Validates the new invoice data.
    pub fn validate(&self) -> Result<()> {
        if self.number.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "number".to_string(),
            )));
        }
        if self.amount < Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Invoice amount cannot be negative".to_string(),
            )));
        }
        if self.due_date < self.date {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Invoice due date cannot precede its issue date".to_string(),
            )));
        }
        Ok(())
    }
}

/// Generates a unique number for an automation-created invoice.
pub fn auto_invoice_number() -> String {
    format!(
        "{}{}",
        AUTO_INVOICE_NUMBER_PREFIX,
        Uuid::new_v4().simple()
    )
}
