//! Settings domain models.
//!
//! Configuration is an explicit struct handed to the shell at startup,
//! not ambient global state.

use serde::{Deserialize, Serialize};

/// Which alert families the user wants surfaced.
///
/// `enabled` is the master switch; notifications are opt-in, so it
/// defaults to off while the per-family toggles default to on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationConfig {
    pub enabled: bool,
    pub budget_alerts: bool,
    pub balance_alerts: bool,
    pub subscription_renewals: bool,
    pub card_payments: bool,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            budget_alerts: true,
            balance_alerts: true,
            subscription_renewals: true,
            card_payments: true,
        }
    }
}

impl NotificationConfig {
    /// A configuration with every alert family switched on.
    pub fn all_enabled() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_opt_in() {
        let config = NotificationConfig::default();
        assert!(!config.enabled);
        assert!(config.budget_alerts);
        assert!(config.subscription_renewals);
    }
}
