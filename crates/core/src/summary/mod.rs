//! Summary module - headline figures over the ledger.

mod summary_model;
mod summary_service;

pub use summary_model::FinancialSummary;
pub use summary_service::compute_summary;
