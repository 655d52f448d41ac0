//! Recurrence module - recurring rules and the catch-up materializer.

mod idempotency;
mod recurrence_engine;
mod recurrence_model;
mod recurrence_service;
mod recurrence_traits;


pub use idempotency::occurrence_idempotency_key;
pub use recurrence_engine::{materialize_due, MaterializationOutcome, RuleMaterialization};
pub use recurrence_model::{Frequency, NewRecurringRule, RecurringRule};
pub use recurrence_service::{MaterializationReport, RecurrenceService, RuleFailure};
pub use recurrence_traits::{RecurrenceServiceTrait, RecurringRuleRepositoryTrait};
