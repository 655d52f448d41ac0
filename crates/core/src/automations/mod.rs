//! Automations module - rule models, the evaluation/dispatch engine,
//! and collaborator sink traits.

mod automations_model;
mod automations_service;
mod automations_traits;
mod sinks;


pub use automations_model::{Action, AutomationRule, NewAutomationRule, RuleFiring, Trigger};
pub use automations_service::AutomationService;
pub use automations_traits::{AutomationRuleRepositoryTrait, AutomationServiceTrait};
pub use sinks::{
    InvoiceSink, MockInvoiceSink, MockNotifier, MockTransactionTagger, NoOpNotifier, Notifier,
    TransactionTagger,
};
