//! Customer repository gateway.
//!
//! A repository handle is scoped to one request: it owns a single database
//! transaction, every read and write goes through it, and nothing becomes
//! durable until [`CustomerRepository::persist`] commits. Dropping a handle
//! without persisting rolls the transaction back.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseTransaction, EntityTrait, QueryFilter, QueryOrder};
use tokio::sync::Mutex;
use uuid::Uuid;

use super::entities::customer::{self, ActiveModel, Entity as CustomerEntity};
use super::error::{StoreError, StoreResult};
use domain::Customer;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Typed predicate for [`CustomerRepository::find_one`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerFilter {
    /// Exact, case-sensitive email match
    pub email: Option<String>,
    /// Skip the row with this id
    pub exclude_id: Option<Uuid>,
}

impl CustomerFilter {
    /// Match customers whose stored email equals `email` exactly
    pub fn by_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            exclude_id: None,
        }
    }

    /// Additionally skip the customer with `id`
    pub fn excluding(mut self, id: Uuid) -> Self {
        self.exclude_id = Some(id);
        self
    }
}

/// Request-scoped customer store.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Every stored customer, empty if the table is empty
    async fn list_all(&self) -> StoreResult<Vec<Customer>>;

    /// Exact primary key lookup
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Customer>>;

    /// First customer matching `filter` under store order
    async fn find_one(&self, filter: CustomerFilter) -> StoreResult<Option<Customer>>;

    /// Add a new row
    async fn insert(&self, customer: Customer) -> StoreResult<()>;

    /// Replace the row whose id equals `customer.id`
    async fn update(&self, customer: Customer) -> StoreResult<()>;

    /// Remove the row; fails if it is already gone
    async fn delete(&self, customer: Customer) -> StoreResult<()>;

    /// Commit everything done through this handle as one unit
    async fn persist(&self) -> StoreResult<()>;
}

/// sea-orm implementation of [`CustomerRepository`] over one transaction.
pub struct CustomerStore {
    txn: Mutex<Option<DatabaseTransaction>>,
}

impl CustomerStore {
    /// Wrap an open transaction
    pub fn new(txn: DatabaseTransaction) -> Self {
        Self {
            txn: Mutex::new(Some(txn)),
        }
    }
}

#[async_trait]
impl CustomerRepository for CustomerStore {
    async fn list_all(&self) -> StoreResult<Vec<Customer>> {
        let guard = self.txn.lock().await;
        let txn = guard.as_ref().ok_or(StoreError::Closed)?;

        let models = CustomerEntity::find()
            .order_by_asc(customer::Column::Email)
            .all(txn)
            .await?;

        Ok(models.into_iter().map(Customer::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Customer>> {
        let guard = self.txn.lock().await;
        let txn = guard.as_ref().ok_or(StoreError::Closed)?;

        let result = CustomerEntity::find_by_id(id).one(txn).await?;
        Ok(result.map(Customer::from))
    }

    async fn find_one(&self, filter: CustomerFilter) -> StoreResult<Option<Customer>> {
        let guard = self.txn.lock().await;
        let txn = guard.as_ref().ok_or(StoreError::Closed)?;

        let mut query = CustomerEntity::find();
        if let Some(email) = filter.email {
            query = query.filter(customer::Column::Email.eq(email));
        }
        if let Some(id) = filter.exclude_id {
            query = query.filter(customer::Column::Id.ne(id));
        }

        let result = query.one(txn).await?;
        Ok(result.map(Customer::from))
    }

    async fn insert(&self, customer: Customer) -> StoreResult<()> {
        let guard = self.txn.lock().await;
        let txn = guard.as_ref().ok_or(StoreError::Closed)?;

        CustomerEntity::insert(ActiveModel::from(customer))
            .exec_without_returning(txn)
            .await?;
        Ok(())
    }

    async fn update(&self, customer: Customer) -> StoreResult<()> {
        let guard = self.txn.lock().await;
        let txn = guard.as_ref().ok_or(StoreError::Closed)?;

        let id = customer.id;
        let result = CustomerEntity::update_many()
            .set(ActiveModel::from(customer))
            .filter(customer::Column::Id.eq(id))
            .exec(txn)
            .await?;

        if result.rows_affected == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn delete(&self, customer: Customer) -> StoreResult<()> {
        let guard = self.txn.lock().await;
        let txn = guard.as_ref().ok_or(StoreError::Closed)?;

        let result = CustomerEntity::delete_by_id(customer.id).exec(txn).await?;

        if result.rows_affected == 0 {
            return Err(StoreError::NotFound(customer.id));
        }
        Ok(())
    }

    async fn persist(&self) -> StoreResult<()> {
        let txn = self.txn.lock().await.take().ok_or(StoreError::Closed)?;
        txn.commit().await?;
        Ok(())
    }
}
