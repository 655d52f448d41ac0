//! Collaborator sink traits for automation actions.
//!
//! Implementations translate action dispatches into platform-specific
//! effects (desktop notification, invoice persistence, tag storage).
//! The engine does not care which channel is behind a sink, and a sink
//! failure is reported per-rule rather than aborting the batch.

use std::sync::{Arc, Mutex};

use crate::errors::Result;
use crate::invoices::NewInvoice;

/// Surfaces a user-facing notification through whatever channel is
/// available.
pub trait Notifier: Send + Sync {
    fn notify(&self, title: &str, body: &str) -> Result<()>;
}

/// Persists an invoice created by an automation action.
pub trait InvoiceSink: Send + Sync {
    fn create_invoice(&self, invoice: NewInvoice) -> Result<()>;
}

/// Associates a tag with a transaction in whatever store manages tags.
pub trait TransactionTagger: Send + Sync {
    fn tag(&self, transaction_id: &str, tag: &str) -> Result<()>;
}

/// No-op implementation for tests or contexts without a notification
/// channel.
#[derive(Clone, Default)]
pub struct NoOpNotifier;

impl Notifier for NoOpNotifier {
    fn notify(&self, _title: &str, _body: &str) -> Result<()> {
        Ok(())
    }
}

/// Mock notifier for testing - collects delivered notifications.
#[derive(Clone, Default)]
pub struct MockNotifier {
    notifications: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected (title, body) pairs.
    pub fn notifications(&self) -> Vec<(String, String)> {
        self.notifications.lock().unwrap().clone()
    }
}

impl Notifier for MockNotifier {
    fn notify(&self, title: &str, body: &str) -> Result<()> {
        self.notifications
            .lock()
            .unwrap()
            .push((title.to_string(), body.to_string()));
        Ok(())
    }
}

/// Mock invoice sink for testing - collects created invoices.
#[derive(Clone, Default)]
pub struct MockInvoiceSink {
    invoices: Arc<Mutex<Vec<NewInvoice>>>,
}

impl MockInvoiceSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invoices(&self) -> Vec<NewInvoice> {
        self.invoices.lock().unwrap().clone()
    }
}

impl InvoiceSink for MockInvoiceSink {
    fn create_invoice(&self, invoice: NewInvoice) -> Result<()> {
        self.invoices.lock().unwrap().push(invoice);
        Ok(())
    }
}

/// Mock tagger for testing - collects applied tags.
#[derive(Clone, Default)]
pub struct MockTransactionTagger {
    tags: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockTransactionTagger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected (transaction id, tag) pairs.
    pub fn tags(&self) -> Vec<(String, String)> {
        self.tags.lock().unwrap().clone()
    }
}

impl TransactionTagger for MockTransactionTagger {
    fn tag(&self, transaction_id: &str, tag: &str) -> Result<()> {
        self.tags
            .lock()
            .unwrap()
            .push((transaction_id.to_string(), tag.to_string()));
        Ok(())
    }
}
