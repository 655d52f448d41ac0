//! Idempotency key computation for materialized transactions.
//!
//! If the catch-up engine runs twice before the first run's advanced
//! `next_run_date` is visible, both runs emit the same occurrences.
//! A stable fingerprint of rule id + occurrence date lets the
//! persistence layer detect and discard the duplicates.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

/// Computes a stable idempotency key for one rule occurrence.
///
/// The key is a SHA-256 hash over the rule id and the occurrence date.
/// The time component is ignored: a rule fires at most once per
/// occurrence date regardless of when the engine caught up.
pub fn occurrence_idempotency_key(rule_id: &str, occurrence_date: DateTime<Utc>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(rule_id.as_bytes());
    hasher.update(b"|");
    let date_str = occurrence_date.format("%Y-%m-%d").to_string();
    hasher.update(date_str.as_bytes());
    hex::encode(hasher.finalize())
}
