//! Alert detectors: pure functions over supplied collections plus an
//! explicit `now`, so every projection is reproducible in tests.

use chrono::{DateTime, Datelike, Duration, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::alerts_model::{AlertSeverity, SmartAlert};
use crate::accounts::{days_until_payment, statement_balance, Account, AccountType};
use crate::budgets::Budget;
use crate::constants::BALANCE_PROJECTION_LOOKBACK_DAYS;
use crate::settings::NotificationConfig;
use crate::subscriptions::Subscription;
use crate::transactions::{FlowDirection, Transaction};

/// Predicts when a budget will be exhausted based on this month's
/// spending velocity. Exhausted budgets are critical; budgets projected
/// to run out within a week warn.
pub fn budget_depletion_alert(
    budget: &Budget,
    transactions: &[Transaction],
    now: DateTime<Utc>,
) -> Option<SmartAlert> {
    let status = budget.status(transactions, now);

    if status.remaining <= Decimal::ZERO {
        return Some(SmartAlert {
            id: format!("budget-depleted-{}", budget.category),
            severity: AlertSeverity::Critical,
            title: "Budget exhausted".to_string(),
            message: format!(
                "You have already spent the whole \"{}\" budget ({})",
                budget.category, budget.limit
            ),
            created_at: now,
        });
    }

    let daily_rate = status.spent / Decimal::from(now.day());
    if daily_rate.is_zero() {
        return None;
    }

    let days_until_depletion = (status.remaining / daily_rate)
        .floor()
        .to_i64()
        .unwrap_or(0);
    if (1..=7).contains(&days_until_depletion) {
        return Some(SmartAlert {
            id: format!("budget-warning-{}", budget.category),
            severity: AlertSeverity::Warning,
            title: "Budget running low".to_string(),
            message: format!(
                "The \"{}\" budget will run out in about {} day(s) at the current pace ({}/day)",
                budget.category,
                days_until_depletion,
                daily_rate.round_dp(2)
            ),
            created_at: now,
        });
    }

    None
}

/// Predicts when the overall balance will drop below a safety
/// threshold, projecting from the last week's average daily spending.
pub fn balance_threshold_alert(
    current_balance: Decimal,
    transactions: &[Transaction],
    threshold: Decimal,
    now: DateTime<Utc>,
) -> Option<SmartAlert> {
    if current_balance <= threshold {
        return Some(SmartAlert {
            id: "balance-critical".to_string(),
            severity: AlertSeverity::Critical,
            title: "Low balance".to_string(),
            message: format!(
                "Your balance ({}) is below the safety threshold ({})",
                current_balance.round_dp(2),
                threshold
            ),
            created_at: now,
        });
    }

    let lookback_start = now - Duration::days(BALANCE_PROJECTION_LOOKBACK_DAYS);
    let recent_spending: Decimal = transactions
        .iter()
        .filter(|t| t.direction == FlowDirection::Expense && t.date >= lookback_start)
        .map(|t| t.amount)
        .sum();
    let daily_spending = recent_spending / Decimal::from(BALANCE_PROJECTION_LOOKBACK_DAYS);
    if daily_spending.is_zero() {
        return None;
    }

    let days_until_threshold = ((current_balance - threshold) / daily_spending)
        .floor()
        .to_i64()
        .unwrap_or(0);
    if (1..=5).contains(&days_until_threshold) {
        return Some(SmartAlert {
            id: "balance-warning".to_string(),
            severity: AlertSeverity::Warning,
            title: "Balance warning".to_string(),
            message: format!(
                "At the current pace ({}/day), your balance will drop below {} in about {} day(s)",
                daily_spending.round_dp(2),
                threshold,
                days_until_threshold
            ),
            created_at: now,
        });
    }

    None
}

/// Flags active subscriptions whose payment date passed within the last
/// week with no matching transaction recorded.
///
/// A transaction matches when its description contains the subscription
/// name (case-insensitively), its amount is within one unit of the
/// subscription cost, and it is dated on or after the due date.
pub fn missing_subscription_alerts(
    subscriptions: &[Subscription],
    transactions: &[Transaction],
    now: DateTime<Utc>,
) -> Vec<SmartAlert> {
    let mut alerts = Vec::new();

    for subscription in subscriptions.iter().filter(|s| s.active) {
        if subscription.next_payment_date >= now {
            continue;
        }
        let days_past = (now - subscription.next_payment_date).num_days();
        if days_past > 7 {
            continue;
        }

        let name_lower = subscription.name.to_lowercase();
        let has_transaction = transactions.iter().any(|t| {
            t.description.to_lowercase().contains(&name_lower)
                && (t.amount - subscription.cost).abs() < Decimal::ONE
                && t.date >= subscription.next_payment_date
        });

        if !has_transaction {
            alerts.push(SmartAlert {
                id: format!("missing-sub-{}", subscription.id),
                severity: AlertSeverity::Info,
                title: "Subscription payment not recorded?".to_string(),
                message: format!(
                    "No transaction recorded for \"{}\" ({}) due on {}",
                    subscription.name,
                    subscription.cost,
                    subscription.next_payment_date.format("%Y-%m-%d")
                ),
                created_at: now,
            });
        }
    }

    alerts
}

/// Flags credit cards whose payment date is 1-5 days away and whose
/// previous month's statement is positive. Two days or less is
/// critical.
pub fn upcoming_card_payment_alerts(
    accounts: &[Account],
    transactions: &[Transaction],
    now: DateTime<Utc>,
) -> Vec<SmartAlert> {
    let today = now.date_naive();
    let mut alerts = Vec::new();

    for card in accounts
        .iter()
        .filter(|a| a.account_type == AccountType::CreditCard)
    {
        let Some(payment_day) = card.payment_day else {
            continue;
        };
        let Some(days_until) = days_until_payment(payment_day, today) else {
            continue;
        };

        let balance_due = statement_balance(card, transactions, today);
        if (1..=5).contains(&days_until) && balance_due > Decimal::ZERO {
            let (severity, title) = if days_until == 1 {
                (AlertSeverity::Critical, "Card payment due tomorrow".to_string())
            } else if days_until <= 2 {
                (
                    AlertSeverity::Critical,
                    format!("Card payment in {days_until} days"),
                )
            } else {
                (
                    AlertSeverity::Warning,
                    format!("Card payment in {days_until} days"),
                )
            };
            alerts.push(SmartAlert {
                id: format!("card-payment-{}", card.id),
                severity,
                title,
                message: format!(
                    "{} due for \"{}\"",
                    balance_due.round_dp(2),
                    card.name
                ),
                created_at: now,
            });
        }
    }

    alerts
}

/// Runs every detector the configuration allows and returns the alerts
/// sorted most urgent first.
#[allow(clippy::too_many_arguments)]
pub fn generate_alerts(
    config: &NotificationConfig,
    budgets: &[Budget],
    subscriptions: &[Subscription],
    accounts: &[Account],
    transactions: &[Transaction],
    current_balance: Decimal,
    balance_threshold: Decimal,
    now: DateTime<Utc>,
) -> Vec<SmartAlert> {
    if !config.enabled {
        return Vec::new();
    }

    let mut alerts = Vec::new();

    if config.budget_alerts {
        alerts.extend(
            budgets
                .iter()
                .filter_map(|b| budget_depletion_alert(b, transactions, now)),
        );
    }
    if config.balance_alerts {
        alerts.extend(balance_threshold_alert(
            current_balance,
            transactions,
            balance_threshold,
            now,
        ));
    }
    if config.subscription_renewals {
        alerts.extend(missing_subscription_alerts(subscriptions, transactions, now));
    }
    if config.card_payments {
        alerts.extend(upcoming_card_payment_alerts(accounts, transactions, now));
    }

    alerts.sort_by_key(|a| a.severity);
    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recurrence::Frequency;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap()
    }

    fn expense(amount: Decimal, category: &str, date: DateTime<Utc>) -> Transaction {
        Transaction {
            id: uuid::Uuid::new_v4().to_string(),
            amount,
            direction: FlowDirection::Expense,
            category: category.to_string(),
            description: format!("{category} purchase"),
            date,
            account_id: "acc-1".to_string(),
            is_business: false,
            origin_rule_id: None,
            idempotency_key: None,
        }
    }

    #[test]
    fn test_depleted_budget_is_critical() {
        let budget = Budget {
            category: "Food".to_string(),
            limit: dec!(200),
        };
        let transactions = vec![expense(dec!(250), "Food", now())];

        let alert = budget_depletion_alert(&budget, &transactions, now()).unwrap();
        assert_eq!(alert.severity, AlertSeverity::Critical);
        assert_eq!(alert.id, "budget-depleted-Food");
    }

    #[test]
    fn test_budget_on_pace_to_deplete_warns() {
        // Day 10 of the month: 300 spent, 30/day, 90 remaining -> 3
        // days to depletion.
        let budget = Budget {
            category: "Food".to_string(),
            limit: dec!(390),
        };
        let transactions = vec![expense(dec!(300), "Food", now())];

        let alert = budget_depletion_alert(&budget, &transactions, now()).unwrap();
        assert_eq!(alert.severity, AlertSeverity::Warning);
    }

    #[test]
    fn test_untouched_budget_raises_nothing() {
        let budget = Budget {
            category: "Food".to_string(),
            limit: dec!(400),
        };

        assert!(budget_depletion_alert(&budget, &[], now()).is_none());
    }

    #[test]
    fn test_balance_at_threshold_is_critical() {
        let alert = balance_threshold_alert(dec!(500), &[], dec!(500), now()).unwrap();
        assert_eq!(alert.severity, AlertSeverity::Critical);
    }

    #[test]
    fn test_balance_projected_to_cross_threshold_warns() {
        // 560 balance, 500 threshold, 140 spent over the last 7 days
        // (20/day) -> threshold crossed in 3 days.
        let transactions = vec![expense(
            dec!(140),
            "Misc",
            now() - Duration::days(2),
        )];

        let alert =
            balance_threshold_alert(dec!(560), &transactions, dec!(500), now()).unwrap();
        assert_eq!(alert.severity, AlertSeverity::Warning);
        assert_eq!(alert.id, "balance-warning");
    }

    #[test]
    fn test_healthy_balance_with_no_spending_raises_nothing() {
        assert!(balance_threshold_alert(dec!(5000), &[], dec!(500), now()).is_none());
    }

    fn subscription(name: &str, cost: Decimal, due: DateTime<Utc>) -> Subscription {
        Subscription {
            id: "sub-1".to_string(),
            name: name.to_string(),
            cost,
            frequency: Frequency::Monthly,
            next_payment_date: due,
            category: "Subscriptions".to_string(),
            active: true,
        }
    }

    #[test]
    fn test_missing_subscription_payment_is_flagged() {
        let due = now() - Duration::days(3);
        let subs = vec![subscription("Netflix", dec!(12.99), due)];

        let alerts = missing_subscription_alerts(&subs, &[], now());
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, AlertSeverity::Info);
        assert_eq!(alerts[0].id, "missing-sub-sub-1");
    }

    #[test]
    fn test_recorded_subscription_payment_is_not_flagged() {
        let due = now() - Duration::days(3);
        let subs = vec![subscription("Netflix", dec!(12.99), due)];
        let mut payment = expense(dec!(12.99), "Subscriptions", now() - Duration::days(2));
        payment.description = "NETFLIX monthly".to_string();

        let alerts = missing_subscription_alerts(&subs, &[payment], now());
        assert!(alerts.is_empty());
    }

    #[test]
    fn test_long_overdue_subscription_is_not_flagged() {
        // More than a week past due: the moment has passed.
        let due = now() - Duration::days(12);
        let subs = vec![subscription("Netflix", dec!(12.99), due)];

        assert!(missing_subscription_alerts(&subs, &[], now()).is_empty());
    }

    fn card(payment_day: u32) -> Account {
        Account {
            id: "card-1".to_string(),
            name: "Visa".to_string(),
            account_type: AccountType::CreditCard,
            initial_balance: Decimal::ZERO,
            balance: Decimal::ZERO,
            payment_day: Some(payment_day),
        }
    }

    #[test]
    fn test_upcoming_card_payment_with_statement_balance_warns() {
        // now is Mar 10; payment day 14 is 4 days out.
        let accounts = vec![card(14)];
        let transactions = vec![{
            let mut t = expense(dec!(320), "Shopping", Utc.with_ymd_and_hms(2024, 2, 15, 0, 0, 0).unwrap());
            t.account_id = "card-1".to_string();
            t
        }];

        let alerts = upcoming_card_payment_alerts(&accounts, &transactions, now());
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, AlertSeverity::Warning);
    }

    #[test]
    fn test_imminent_card_payment_is_critical() {
        let accounts = vec![card(11)];
        let transactions = vec![{
            let mut t = expense(dec!(320), "Shopping", Utc.with_ymd_and_hms(2024, 2, 15, 0, 0, 0).unwrap());
            t.account_id = "card-1".to_string();
            t
        }];

        let alerts = upcoming_card_payment_alerts(&accounts, &transactions, now());
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, AlertSeverity::Critical);
    }

    #[test]
    fn test_card_with_empty_statement_stays_quiet() {
        let accounts = vec![card(12)];
        assert!(upcoming_card_payment_alerts(&accounts, &[], now()).is_empty());
    }

    #[test]
    fn test_generate_alerts_respects_master_switch() {
        let config = NotificationConfig::default(); // enabled = false
        let budgets = vec![Budget {
            category: "Food".to_string(),
            limit: dec!(100),
        }];
        let transactions = vec![expense(dec!(500), "Food", now())];

        let alerts = generate_alerts(
            &config,
            &budgets,
            &[],
            &[],
            &transactions,
            dec!(1000),
            dec!(500),
            now(),
        );
        assert!(alerts.is_empty());
    }

    #[test]
    fn test_generate_alerts_suppresses_disabled_families_only() {
        let config = NotificationConfig {
            budget_alerts: false,
            ..NotificationConfig::all_enabled()
        };
        let budgets = vec![Budget {
            category: "Food".to_string(),
            limit: dec!(100),
        }];
        let due = now() - Duration::days(3);
        let subs = vec![subscription("Netflix", dec!(12.99), due)];
        let transactions = vec![expense(dec!(500), "Food", now())];

        let alerts = generate_alerts(
            &config,
            &budgets,
            &subs,
            &[],
            &transactions,
            dec!(5000),
            dec!(500),
            now(),
        );

        // The exhausted budget is suppressed; the subscription alert
        // still comes through.
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].id, "missing-sub-sub-1");
    }

    #[test]
    fn test_generate_alerts_sorts_most_urgent_first() {
        let config = NotificationConfig::all_enabled();
        let budgets = vec![Budget {
            category: "Food".to_string(),
            limit: dec!(100),
        }];
        let due = now() - Duration::days(3);
        let subs = vec![subscription("Netflix", dec!(12.99), due)];
        let transactions = vec![expense(dec!(500), "Food", now())];

        let alerts = generate_alerts(
            &config,
            &budgets,
            &subs,
            &[],
            &transactions,
            dec!(5000),
            dec!(500),
            now(),
        );

        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].severity, AlertSeverity::Critical);
        assert_eq!(alerts[1].severity, AlertSeverity::Info);
    }
}
