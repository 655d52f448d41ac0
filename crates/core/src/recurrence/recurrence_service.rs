use chrono::{DateTime, Utc};
use log::{debug, warn};
use std::sync::Arc;

use super::recurrence_engine::{materialize_due, RuleMaterialization};
use super::recurrence_model::{NewRecurringRule, RecurringRule};
use super::recurrence_traits::{RecurrenceServiceTrait, RecurringRuleRepositoryTrait};
use crate::errors::{Error, Result};
use crate::transactions::TransactionRepositoryTrait;

/// A rule whose materialization batch could not be persisted. The
/// remaining rules are unaffected.
#[derive(Debug)]
pub struct RuleFailure {
    pub rule_id: String,
    pub error: Error,
}

/// Result of one materialization pass.
#[derive(Debug, Default)]
pub struct MaterializationReport {
    /// Number of transactions persisted across all rules.
    pub materialized_count: usize,
    /// Ids of rules whose `next_run_date` was advanced and persisted.
    pub advanced_rule_ids: Vec<String>,
    /// Per-rule persistence failures.
    pub failures: Vec<RuleFailure>,
}

/// Service orchestrating the catch-up materializer against the stores.
pub struct RecurrenceService {
    rule_repository: Arc<dyn RecurringRuleRepositoryTrait>,
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
}

impl RecurrenceService {
    /// Creates a new RecurrenceService instance.
    pub fn new(
        rule_repository: Arc<dyn RecurringRuleRepositoryTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    ) -> Self {
        Self {
            rule_repository,
            transaction_repository,
        }
    }

    /// Persists one rule's batch: occurrences first, then the advanced
    /// rule. If the advance fails after the occurrences were written,
    /// the idempotency keys on the occurrences let the store discard
    /// the duplicates emitted by the next pass.
    async fn persist_batch(&self, batch: RuleMaterialization) -> Result<usize> {
        let count = self
            .transaction_repository
            .insert_many(batch.transactions)
            .await?;
        self.rule_repository.update(batch.rule).await?;
        Ok(count)
    }
}

#[async_trait::async_trait]
impl RecurrenceServiceTrait for RecurrenceService {
    fn get_rules(&self) -> Result<Vec<RecurringRule>> {
        self.rule_repository.list()
    }

    async fn create_rule(&self, new_rule: NewRecurringRule) -> Result<RecurringRule> {
        new_rule.validate()?;
        self.rule_repository.create(new_rule).await
    }

    async fn delete_rule(&self, rule_id: &str) -> Result<()> {
        self.rule_repository.delete(rule_id).await?;
        Ok(())
    }

    async fn set_rule_active(&self, rule_id: &str, active: bool) -> Result<()> {
        self.rule_repository.set_active(rule_id, active).await
    }

    async fn materialize_due_rules(&self, as_of: DateTime<Utc>) -> Result<MaterializationReport> {
        let rules = self.rule_repository.list()?;
        let outcome = materialize_due(&rules, as_of);

        let mut report = MaterializationReport::default();
        for batch in outcome.batches {
            let rule_id = batch.rule.id.clone();
            match self.persist_batch(batch).await {
                Ok(count) => {
                    report.materialized_count += count;
                    report.advanced_rule_ids.push(rule_id);
                }
                Err(error) => {
                    warn!("Failed to persist batch for rule {}: {}", rule_id, error);
                    report.failures.push(RuleFailure { rule_id, error });
                }
            }
        }

        if report.materialized_count > 0 {
            debug!(
                "Materialized {} recurring transaction(s) across {} rule(s)",
                report.materialized_count,
                report.advanced_rule_ids.len()
            );
        }
        Ok(report)
    }
}
