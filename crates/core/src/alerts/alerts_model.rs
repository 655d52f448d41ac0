//! Alert domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How urgently an alert should be surfaced. Ordering is by urgency:
/// critical sorts before warning, warning before info.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    Critical,
    Warning,
    Info,
}

/// A user-facing heads-up produced by the alert engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartAlert {
    /// Stable per-subject id (e.g. one per budget category), so the
    /// shell can dedupe across runs.
    pub id: String,
    pub severity: AlertSeverity,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}
