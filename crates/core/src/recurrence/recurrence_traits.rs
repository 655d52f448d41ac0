//! Recurring rule repository and service traits.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::recurrence_model::{NewRecurringRule, RecurringRule};
use super::recurrence_service::MaterializationReport;
use crate::errors::Result;

/// Trait defining the contract for RecurringRule repository operations.
#[async_trait]
pub trait RecurringRuleRepositoryTrait: Send + Sync {
    /// Retrieves all recurring rules.
    fn list(&self) -> Result<Vec<RecurringRule>>;

    /// Creates a new rule. The implementation assigns the id and sets
    /// the initial `next_run_date` to the start date.
    async fn create(&self, new_rule: NewRecurringRule) -> Result<RecurringRule>;

    /// Persists a rule whose `next_run_date` was advanced by the
    /// catch-up engine.
    async fn update(&self, rule: RecurringRule) -> Result<RecurringRule>;

    /// Deletes a rule by its ID.
    async fn delete(&self, rule_id: &str) -> Result<usize>;

    /// Activates or deactivates a rule.
    async fn set_active(&self, rule_id: &str, active: bool) -> Result<()>;
}

/// Trait defining the contract for the recurrence service.
#[async_trait]
pub trait RecurrenceServiceTrait: Send + Sync {
    /// Retrieves all recurring rules.
    fn get_rules(&self) -> Result<Vec<RecurringRule>>;

    /// Creates a new rule with business validation.
    async fn create_rule(&self, new_rule: NewRecurringRule) -> Result<RecurringRule>;

    /// Deletes a rule.
    async fn delete_rule(&self, rule_id: &str) -> Result<()>;

    /// Activates or deactivates a rule.
    async fn set_rule_active(&self, rule_id: &str, active: bool) -> Result<()>;

    /// Materializes every due occurrence up to `as_of` and persists the
    /// results, one rule batch at a time.
    async fn materialize_due_rules(&self, as_of: DateTime<Utc>) -> Result<MaterializationReport>;
}
