/// Suffix appended to descriptions of transactions materialized from
/// recurring rules, marking their automatic origin.
pub const GENERATED_DESCRIPTION_SUFFIX: &str = " (Auto)";

/// Prefix for invoice numbers created by automation rules.
pub const AUTO_INVOICE_NUMBER_PREFIX: &str = "AUTO-";

/// Days until an automation-created invoice falls due.
pub const AUTO_INVOICE_DUE_DAYS: i64 = 30;

/// Fallback notification title when an automation rule does not
/// configure one.
pub const DEFAULT_NOTIFICATION_TITLE: &str = "Automation triggered";

/// Default day of month for credit card payments when none is set.
pub const DEFAULT_CARD_PAYMENT_DAY: u32 = 15;

/// Days of lookback when projecting spending velocity for balance
/// alerts.
pub const BALANCE_PROJECTION_LOOKBACK_DAYS: i64 = 7;
