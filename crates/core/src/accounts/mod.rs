//! Accounts module - domain models, services, and traits.

mod accounts_credit;
mod accounts_model;
mod accounts_service;
mod accounts_traits;


// Re-export the public interface
pub use accounts_credit::{days_until_payment, next_payment_date, statement_balance};
pub use accounts_model::{Account, AccountType, NewAccount};
pub use accounts_service::AccountService;
pub use accounts_traits::{AccountRepositoryTrait, AccountServiceTrait};
