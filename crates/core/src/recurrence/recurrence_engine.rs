//! Catch-up materializer for recurring rules.
//!
//! Converts elapsed time into concrete ledger entries, exactly once per
//! elapsed period, with no duplication and no gaps - a rule six months
//! behind on a monthly frequency emits six occurrences, not one.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::idempotency::occurrence_idempotency_key;
use super::recurrence_model::RecurringRule;
use crate::constants::GENERATED_DESCRIPTION_SUFFIX;
use crate::transactions::NewTransaction;

/// One rule's materialization: the occurrences that became due and the
/// rule with its `next_run_date` advanced past them.
///
/// The caller must persist the two together: if the rule advance is not
/// durable, the occurrences must not be either, or a retry would
/// double-generate them.
#[derive(Debug, Clone)]
pub struct RuleMaterialization {
    /// The rule with `next_run_date` advanced to the first occurrence
    /// still in the future.
    pub rule: RecurringRule,
    /// Occurrences in chronological order, earliest first.
    pub transactions: Vec<NewTransaction>,
}

/// Output of a `materialize_due` pass. Only rules that emitted at least
/// one occurrence appear; inactive or already-current rules are left
/// untouched.
#[derive(Debug, Clone, Default)]
pub struct MaterializationOutcome {
    pub batches: Vec<RuleMaterialization>,
}

impl MaterializationOutcome {
    /// All newly materialized transactions across every rule.
    pub fn transactions(&self) -> impl Iterator<Item = &NewTransaction> {
        self.batches.iter().flat_map(|b| b.transactions.iter())
    }

    /// Total number of newly materialized transactions.
    pub fn transaction_count(&self) -> usize {
        self.batches.iter().map(|b| b.transactions.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }
}

/// Materializes every occurrence that became due up to `as_of`.
///
/// For each active rule the date cursor starts at `next_run_date` and
/// walks forward one calendar period at a time, emitting one
/// transaction per step, until it passes `as_of`. A `next_run_date` in
/// the future simply yields zero occurrences.
///
/// Pure computation: no side effects and no failure mode. Persistence
/// of the outcome, and its failure handling, belong to the caller.
pub fn materialize_due(rules: &[RecurringRule], as_of: DateTime<Utc>) -> MaterializationOutcome {
    let mut outcome = MaterializationOutcome::default();

    for rule in rules {
        if !rule.active {
            continue;
        }

        let mut cursor = rule.next_run_date;
        let mut transactions = Vec::new();

        while cursor <= as_of {
            transactions.push(NewTransaction {
                id: Some(Uuid::new_v4().to_string()),
                amount: rule.amount,
                direction: rule.direction,
                category: rule.category.clone(),
                description: format!("{}{}", rule.description, GENERATED_DESCRIPTION_SUFFIX),
                date: cursor,
                account_id: rule.account_id.clone(),
                is_business: rule.is_business,
                origin_rule_id: Some(rule.id.clone()),
                idempotency_key: Some(occurrence_idempotency_key(&rule.id, cursor)),
            });

            match rule.frequency.advance(cursor) {
                Some(next) => cursor = next,
                // Date overflow; stop rather than loop forever.
                None => break,
            }
        }

        if !transactions.is_empty() {
            let mut advanced = rule.clone();
            advanced.next_run_date = cursor;
            outcome.batches.push(RuleMaterialization {
                rule: advanced,
                transactions,
            });
        }
    }

    outcome
}
