//! Financial summary domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Headline figures computed over the whole ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    /// Income minus expense over the whole ledger.
    pub net_flow: Decimal,
    /// Percent of income kept; zero when there is no income.
    pub savings_rate: Decimal,
    /// Sum of all account balances, derived from the ledger.
    pub total_liquid_assets: Decimal,
}
