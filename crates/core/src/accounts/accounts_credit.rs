//! Credit card statement and payment date helpers.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::accounts_model::{Account, AccountType};
use crate::transactions::{FlowDirection, Transaction};
use crate::utils::date_utils::{date_with_clamped_day, next_month, previous_month_range};

/// Sums the previous calendar month's expenses charged to a credit
/// card. That sum is the balance due at the next payment date.
///
/// Returns zero for non-card accounts.
pub fn statement_balance(
    card: &Account,
    transactions: &[Transaction],
    today: NaiveDate,
) -> Decimal {
    if card.account_type != AccountType::CreditCard {
        return Decimal::ZERO;
    }
    let Some((month_start, month_end)) = previous_month_range(today) else {
        return Decimal::ZERO;
    };

    transactions
        .iter()
        .filter(|t| {
            t.account_id == card.id
                && t.direction == FlowDirection::Expense
                && t.date.date_naive() >= month_start
                && t.date.date_naive() <= month_end
        })
        .map(|t| t.amount)
        .sum()
}

/// Next date the card payment falls on: the payment day in the current
/// month, or in the next month if that day has already passed. The day
/// is clamped to the length of the target month.
pub fn next_payment_date(payment_day: u32, today: NaiveDate) -> Option<NaiveDate> {
    use chrono::Datelike;

    let due = date_with_clamped_day(today.year(), today.month(), payment_day)?;
    if due >= today {
        return Some(due);
    }
    let (year, month) = next_month(today.year(), today.month());
    date_with_clamped_day(year, month, payment_day)
}

/// Whole days until the next card payment.
pub fn days_until_payment(payment_day: u32, today: NaiveDate) -> Option<i64> {
    next_payment_date(payment_day, today).map(|due| (due - today).num_days())
}
