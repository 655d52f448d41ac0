//! Alerts module - spending velocity projections and payment
//! reminders.

mod alerts_model;
mod alerts_service;

pub use alerts_model::{AlertSeverity, SmartAlert};
pub use alerts_service::{
    balance_threshold_alert, budget_depletion_alert, generate_alerts,
    missing_subscription_alerts, upcoming_card_payment_alerts,
};
