use rust_decimal::Decimal;

use super::summary_model::FinancialSummary;
use crate::accounts::Account;
use crate::transactions::{FlowDirection, Transaction};

/// Computes the headline figures over the full transaction ledger and
/// account set. Account balances are derived from the ledger, not read
/// from the cached balance field.
pub fn compute_summary(transactions: &[Transaction], accounts: &[Account]) -> FinancialSummary {
    let total_income: Decimal = transactions
        .iter()
        .filter(|t| t.direction == FlowDirection::Income)
        .map(|t| t.amount)
        .sum();
    let total_expense: Decimal = transactions
        .iter()
        .filter(|t| t.direction == FlowDirection::Expense)
        .map(|t| t.amount)
        .sum();

    let net_flow = total_income - total_expense;
    let savings_rate = if total_income > Decimal::ZERO {
        net_flow / total_income * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };
    let total_liquid_assets = accounts
        .iter()
        .map(|a| a.recalculated_balance(transactions))
        .sum();

    FinancialSummary {
        total_income,
        total_expense,
        net_flow,
        savings_rate,
        total_liquid_assets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::AccountType;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn tx(amount: Decimal, direction: FlowDirection, account_id: &str) -> Transaction {
        Transaction {
            id: uuid::Uuid::new_v4().to_string(),
            amount,
            direction,
            category: "Misc".to_string(),
            description: "test".to_string(),
            date: Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap(),
            account_id: account_id.to_string(),
            is_business: false,
            origin_rule_id: None,
            idempotency_key: None,
        }
    }

    fn account(id: &str, initial_balance: Decimal) -> Account {
        Account {
            id: id.to_string(),
            name: id.to_string(),
            account_type: AccountType::Bank,
            initial_balance,
            balance: initial_balance,
            payment_day: None,
        }
    }

    #[test]
    fn test_summary_totals_and_savings_rate() {
        let transactions = vec![
            tx(dec!(2000), FlowDirection::Income, "acc-1"),
            tx(dec!(500), FlowDirection::Expense, "acc-1"),
            tx(dec!(300), FlowDirection::Expense, "acc-2"),
        ];
        let accounts = vec![account("acc-1", dec!(100)), account("acc-2", dec!(50))];

        let summary = compute_summary(&transactions, &accounts);
        assert_eq!(summary.total_income, dec!(2000));
        assert_eq!(summary.total_expense, dec!(800));
        assert_eq!(summary.net_flow, dec!(1200));
        assert_eq!(summary.savings_rate, dec!(60));
        // 100 + 2000 - 500 = 1600 on acc-1; 50 - 300 = -250 on acc-2.
        assert_eq!(summary.total_liquid_assets, dec!(1350));
    }

    #[test]
    fn test_summary_without_income_has_zero_savings_rate() {
        let transactions = vec![tx(dec!(200), FlowDirection::Expense, "acc-1")];
        let summary = compute_summary(&transactions, &[]);

        assert_eq!(summary.savings_rate, Decimal::ZERO);
        assert_eq!(summary.net_flow, dec!(-200));
    }
}
