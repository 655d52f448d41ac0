use chrono::{DateTime, Duration, Utc};
use log::{debug, warn};
use std::sync::Arc;
use uuid::Uuid;

use super::automations_model::{Action, AutomationRule, NewAutomationRule, RuleFiring, Trigger};
use super::automations_traits::{AutomationRuleRepositoryTrait, AutomationServiceTrait};
use super::sinks::{InvoiceSink, Notifier, TransactionTagger};
use crate::accounts::Account;
use crate::constants::{AUTO_INVOICE_DUE_DAYS, DEFAULT_NOTIFICATION_TITLE};
use crate::errors::Result;
use crate::invoices::{auto_invoice_number, InvoiceKind, InvoiceStatus, NewInvoice};
use crate::transactions::{monthly_expense_total, Transaction};

/// Service evaluating automation rules against observed transactions
/// and dispatching their actions through injected sinks.
///
/// Every sink is optional; an action whose sink or required parameter
/// is missing degrades to a no-op instead of failing the rule.
pub struct AutomationService {
    rule_repository: Arc<dyn AutomationRuleRepositoryTrait>,
    notifier: Option<Arc<dyn Notifier>>,
    invoice_sink: Option<Arc<dyn InvoiceSink>>,
    tagger: Option<Arc<dyn TransactionTagger>>,
}

impl AutomationService {
    /// Creates a new AutomationService instance.
    pub fn new(
        rule_repository: Arc<dyn AutomationRuleRepositoryTrait>,
        notifier: Option<Arc<dyn Notifier>>,
        invoice_sink: Option<Arc<dyn InvoiceSink>>,
        tagger: Option<Arc<dyn TransactionTagger>>,
    ) -> Self {
        Self {
            rule_repository,
            notifier,
            invoice_sink,
            tagger,
        }
    }

    /// Decides whether a rule's trigger matches the observed
    /// transaction and current account/ledger state.
    ///
    /// Pure: safe to call repeatedly, never mutates anything, and a
    /// misconfigured rule (e.g. referencing a deleted account)
    /// evaluates to false rather than erroring.
    pub fn evaluate_trigger(
        rule: &AutomationRule,
        transaction: &Transaction,
        accounts: &[Account],
        all_transactions: &[Transaction],
        now: DateTime<Utc>,
    ) -> bool {
        match &rule.trigger {
            Trigger::TransactionReceived {
                account_id,
                category,
                amount_min,
                amount_max,
                description_contains,
            } => {
                if let Some(account_id) = account_id {
                    if &transaction.account_id != account_id {
                        return false;
                    }
                }
                if let Some(category) = category {
                    if &transaction.category != category {
                        return false;
                    }
                }
                if let Some(min) = amount_min {
                    if transaction.amount < *min {
                        return false;
                    }
                }
                if let Some(max) = amount_max {
                    if transaction.amount > *max {
                        return false;
                    }
                }
                if let Some(needle) = description_contains {
                    let description = transaction.description.to_lowercase();
                    if !description.contains(&needle.to_lowercase()) {
                        return false;
                    }
                }
                true
            }

            Trigger::BalanceBelow {
                account_id,
                threshold,
            } => {
                // The cached balance may be stale; derive it from the
                // ledger, which is the source of truth.
                let Some(account) = accounts.iter().find(|a| &a.id == account_id) else {
                    return false;
                };
                account.recalculated_balance(all_transactions) < *threshold
            }

            Trigger::CategoryExceeds {
                category,
                monthly_limit,
            } => monthly_expense_total(all_transactions, category, now) > *monthly_limit,
        }
    }

    /// Executes a matched rule's action against the triggering
    /// transaction.
    ///
    /// Missing sinks and missing parameters are no-ops; only a sink
    /// that was invoked and rejected produces an error, which the
    /// caller records per-rule.
    pub fn execute_action(
        &self,
        rule: &AutomationRule,
        transaction: &Transaction,
        now: DateTime<Utc>,
    ) -> Result<()> {
        match &rule.action {
            Action::CreateInvoice {
                amount,
                description,
            } => {
                let (Some(sink), Some(amount)) = (&self.invoice_sink, amount) else {
                    return Ok(());
                };
                let invoice = NewInvoice {
                    id: Some(Uuid::new_v4().to_string()),
                    number: auto_invoice_number(),
                    date: now,
                    due_date: now + Duration::days(AUTO_INVOICE_DUE_DAYS),
                    entity_name: description
                        .clone()
                        .unwrap_or_else(|| transaction.description.clone()),
                    amount: *amount,
                    kind: InvoiceKind::Issued,
                    status: InvoiceStatus::Sent,
                    linked_transaction_id: None,
                    category: None,
                };
                sink.create_invoice(invoice)
            }

            Action::SendNotification { title, body } => {
                let Some(notifier) = &self.notifier else {
                    return Ok(());
                };
                let title = title.as_deref().unwrap_or(DEFAULT_NOTIFICATION_TITLE);
                let body = body.clone().unwrap_or_else(|| {
                    format!(
                        "Rule \"{}\" executed for {}",
                        rule.name, transaction.description
                    )
                });
                notifier.notify(title, &body)
            }

            Action::AddTag { tag } => {
                let (Some(tagger), Some(tag)) = (&self.tagger, tag) else {
                    return Ok(());
                };
                if tag.trim().is_empty() {
                    return Ok(());
                }
                tagger.tag(&transaction.id, tag)
            }
        }
    }

    /// Evaluates every active rule, in list order, against one newly
    /// observed transaction and dispatches the matches.
    ///
    /// Evaluation runs against the state as it existed before this
    /// batch of dispatches: no rule's firing affects another rule's
    /// evaluation within the same invocation. A dispatch failure is
    /// captured in that rule's firing and does not stop later rules.
    pub fn run_on_new_transaction(
        &self,
        rules: &[AutomationRule],
        transaction: &Transaction,
        accounts: &[Account],
        all_transactions: &[Transaction],
        now: DateTime<Utc>,
    ) -> Vec<RuleFiring> {
        let mut firings = Vec::new();

        for rule in rules.iter().filter(|r| r.active) {
            if !Self::evaluate_trigger(rule, transaction, accounts, all_transactions, now) {
                continue;
            }

            let result = self.execute_action(rule, transaction, now);
            if let Err(error) = &result {
                warn!("Dispatch failed for automation rule {}: {}", rule.id, error);
            } else {
                debug!(
                    "Automation rule {} fired for transaction {}",
                    rule.id, transaction.id
                );
            }
            firings.push(RuleFiring {
                rule_id: rule.id.clone(),
                fired_at: now,
                result,
            });
        }

        firings
    }

    /// Evaluates every newly observed transaction since the last run,
    /// not just the most recent one, so a bulk import cannot slip past
    /// the rules.
    pub fn run_on_new_transactions(
        &self,
        rules: &[AutomationRule],
        new_transactions: &[Transaction],
        accounts: &[Account],
        all_transactions: &[Transaction],
        now: DateTime<Utc>,
    ) -> Vec<RuleFiring> {
        new_transactions
            .iter()
            .flat_map(|transaction| {
                self.run_on_new_transaction(rules, transaction, accounts, all_transactions, now)
            })
            .collect()
    }
}

#[async_trait::async_trait]
impl AutomationServiceTrait for AutomationService {
    fn get_rules(&self) -> Result<Vec<AutomationRule>> {
        self.rule_repository.list()
    }

    async fn create_rule(&self, new_rule: NewAutomationRule) -> Result<AutomationRule> {
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

    async fn process_new_transactions(
        &self,
        new_transactions: &[Transaction],
        accounts: &[Account],
        all_transactions: &[Transaction],
        now: DateTime<Utc>,
    ) -> Result<Vec<RuleFiring>> {
        let rules = self.rule_repository.list()?;
        let firings =
            self.run_on_new_transactions(&rules, new_transactions, accounts, all_transactions, now);

        // A blocked dispatch still counts as fired for evaluation
        // purposes, so every firing is recorded.
        for firing in &firings {
            if let Err(error) = self
                .rule_repository
                .record_trigger(&firing.rule_id, firing.fired_at)
                .await
            {
                warn!(
                    "Failed to record trigger for rule {}: {}",
                    firing.rule_id, error
                );
            }
        }

        Ok(firings)
    }
}
