//! Invoices module - domain models.

mod invoices_model;

pub use invoices_model::{auto_invoice_number, Invoice, InvoiceKind, InvoiceStatus, NewInvoice};
