//! Transaction repository and service traits.
//!
//! These traits define the contract for transaction operations without
//! any database-specific types, allowing for different storage
//! implementations.

use async_trait::async_trait;

use super::transactions_model::{NewTransaction, Transaction};
use crate::errors::Result;

/// Trait defining the contract for Transaction repository operations.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    /// Retrieves all transactions.
    fn list(&self) -> Result<Vec<Transaction>>;

    /// Retrieves the transactions linked to one account.
    fn list_by_account(&self, account_id: &str) -> Result<Vec<Transaction>>;

    /// Inserts a single transaction.
    async fn insert(&self, new_transaction: NewTransaction) -> Result<Transaction>;

    /// Inserts a batch of transactions, returning how many were
    /// persisted.
    async fn insert_many(&self, new_transactions: Vec<NewTransaction>) -> Result<usize>;

    /// Deletes a transaction by its ID.
    async fn delete(&self, transaction_id: &str) -> Result<usize>;
}

/// Trait defining the contract for Transaction service operations.
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    /// Retrieves all transactions.
    fn get_transactions(&self) -> Result<Vec<Transaction>>;

    /// Retrieves the transactions linked to one account.
    fn get_transactions_by_account(&self, account_id: &str) -> Result<Vec<Transaction>>;

    /// Creates a new transaction with business validation.
    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction>;

    /// Deletes a transaction.
    async fn delete_transaction(&self, transaction_id: &str) -> Result<()>;
}
