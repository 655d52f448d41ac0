//! Automation rule repository and service traits.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::automations_model::{AutomationRule, NewAutomationRule, RuleFiring};
use crate::accounts::Account;
use crate::errors::Result;
use crate::transactions::Transaction;

/// Trait defining the contract for AutomationRule repository
/// operations.
#[async_trait]
pub trait AutomationRuleRepositoryTrait: Send + Sync {
    /// Retrieves all automation rules.
    fn list(&self) -> Result<Vec<AutomationRule>>;

    /// Creates a new rule.
    async fn create(&self, new_rule: NewAutomationRule) -> Result<AutomationRule>;

    /// Deletes a rule by its ID.
    async fn delete(&self, rule_id: &str) -> Result<usize>;

    /// Activates or deactivates a rule.
    async fn set_active(&self, rule_id: &str, active: bool) -> Result<()>;

    /// Records a firing: sets `last_triggered` and increments
    /// `trigger_count`.
    async fn record_trigger(&self, rule_id: &str, fired_at: DateTime<Utc>) -> Result<()>;
}

/// Trait defining the contract for the automation service.
#[async_trait]
pub trait AutomationServiceTrait: Send + Sync {
    /// Retrieves all automation rules.
    fn get_rules(&self) -> Result<Vec<AutomationRule>>;

    /// Creates a new rule with business validation.
    async fn create_rule(&self, new_rule: NewAutomationRule) -> Result<AutomationRule>;

    /// Deletes a rule.
    async fn delete_rule(&self, rule_id: &str) -> Result<()>;

    /// Activates or deactivates a rule.
    async fn set_rule_active(&self, rule_id: &str, active: bool) -> Result<()>;

    /// Evaluates and dispatches all active rules against a batch of
    /// newly observed transactions, recording each firing through the
    /// repository.
    async fn process_new_transactions(
        &self,
        new_transactions: &[Transaction],
        accounts: &[Account],
        all_transactions: &[Transaction],
        now: DateTime<Utc>,
    ) -> Result<Vec<RuleFiring>>;
}
