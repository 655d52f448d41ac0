use log::debug;
use std::sync::Arc;

use super::transactions_model::{NewTransaction, Transaction};
use super::transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
use crate::errors::Result;

/// Service for managing ledger transactions.
pub struct TransactionService {
    repository: Arc<dyn TransactionRepositoryTrait>,
}

impl TransactionService {
    /// Creates a new TransactionService instance.
    pub fn new(repository: Arc<dyn TransactionRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl TransactionServiceTrait for TransactionService {
    fn get_transactions(&self) -> Result<Vec<Transaction>> {
        self.repository.list()
    }

    fn get_transactions_by_account(&self, account_id: &str) -> Result<Vec<Transaction>> {
        self.repository.list_by_account(account_id)
    }

    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        new_transaction.validate()?;
        debug!(
            "Creating transaction for account {} ({:?} {})",
            new_transaction.account_id, new_transaction.direction, new_transaction.amount
        );
        self.repository.insert(new_transaction).await
    }

    async fn delete_transaction(&self, transaction_id: &str) -> Result<()> {
        self.repository.delete(transaction_id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transactions::{FlowDirection, TransactionServiceTrait};
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;
    use std::sync::Mutex;
    use uuid::Uuid;

    #[derive(Default)]
    struct MockTransactionRepository {
        transactions: Mutex<Vec<Transaction>>,
    }

    #[async_trait::async_trait]
    impl TransactionRepositoryTrait for MockTransactionRepository {
        fn list(&self) -> Result<Vec<Transaction>> {
            Ok(self.transactions.lock().unwrap().clone())
        }
        fn list_by_account(&self, account_id: &str) -> Result<Vec<Transaction>> {
            Ok(self
                .transactions
                .lock()
                .unwrap()
                .iter()
                .filter(|t| t.account_id == account_id)
                .cloned()
                .collect())
        }
        async fn insert(&self, new_transaction: NewTransaction) -> Result<Transaction> {
            let transaction = Transaction {
                id: new_transaction
                    .id
                    .unwrap_or_else(|| Uuid::new_v4().to_string()),
                amount: new_transaction.amount,
                direction: new_transaction.direction,
                category: new_transaction.category,
                description: new_transaction.description,
                date: new_transaction.date,
                account_id: new_transaction.account_id,
                is_business: new_transaction.is_business,
                origin_rule_id: new_transaction.origin_rule_id,
                idempotency_key: new_transaction.idempotency_key,
            };
            self.transactions.lock().unwrap().push(transaction.clone());
            Ok(transaction)
        }
        async fn insert_many(&self, _: Vec<NewTransaction>) -> Result<usize> {
            unimplemented!()
        }
        async fn delete(&self, _: &str) -> Result<usize> {
            unimplemented!()
        }
    }

    fn new_tx(account_id: &str) -> NewTransaction {
        NewTransaction {
            id: None,
            amount: dec!(25),
            direction: FlowDirection::Expense,
            category: "Food".to_string(),
            description: "lunch".to_string(),
            date: Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap(),
            account_id: account_id.to_string(),
            is_business: false,
            origin_rule_id: None,
            idempotency_key: None,
        }
    }

    #[tokio::test]
    async fn test_create_transaction_persists_valid_input() {
        let service = TransactionService::new(Arc::new(MockTransactionRepository::default()));

        let created = service.create_transaction(new_tx("acc-1")).await.unwrap();
        assert_eq!(created.amount, dec!(25));
        assert_eq!(service.get_transactions().unwrap().len(), 1);
        assert_eq!(
            service.get_transactions_by_account("acc-1").unwrap().len(),
            1
        );
        assert!(service
            .get_transactions_by_account("acc-2")
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_create_transaction_rejects_invalid_input() {
        let service = TransactionService::new(Arc::new(MockTransactionRepository::default()));

        let mut invalid = new_tx("acc-1");
        invalid.amount = dec!(-10);
        assert!(service.create_transaction(invalid).await.is_err());
        assert!(service.get_transactions().unwrap().is_empty());
    }
}
