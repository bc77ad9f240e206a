//! Unit of Work - hands out request-scoped repository handles.
//!
//! Each call to [`UnitOfWork::begin`] opens a fresh database transaction and
//! wraps it in a [`CustomerStore`]. The service runs its whole
//! check-then-mutate sequence through that one handle and commits with
//! `persist`, so the uniqueness check and the write share a transaction.

use async_trait::async_trait;
use sea_orm::{
    AccessMode, ConnectionTrait, DatabaseConnection, DbBackend, IsolationLevel, TransactionTrait,
};

use common::TransactionIsolation;

use crate::repository::{CustomerRepository, CustomerStore, StoreResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Source of request-scoped repository handles.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Open a new transaction and return the repository bound to it
    async fn begin(&self) -> StoreResult<Box<dyn CustomerRepository>>;
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    isolation: IsolationLevel,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection, isolation: TransactionIsolation) -> Self {
        let isolation = match isolation {
            TransactionIsolation::ReadCommitted => IsolationLevel::ReadCommitted,
            TransactionIsolation::RepeatableRead => IsolationLevel::RepeatableRead,
            TransactionIsolation::Serializable => IsolationLevel::Serializable,
        };
        Self { db, isolation }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    async fn begin(&self) -> StoreResult<Box<dyn CustomerRepository>> {
        let txn = match self.db.get_database_backend() {
            // SQLite transactions are always serializable and take no options
            DbBackend::Sqlite => self.db.begin().await?,
            _ => {
                self.db
                    .begin_with_config(Some(self.isolation), Some(AccessMode::ReadWrite))
                    .await?
            }
        };

        Ok(Box::new(CustomerStore::new(txn)))
    }
}
