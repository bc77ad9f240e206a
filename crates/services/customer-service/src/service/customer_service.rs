//! Customer service - lifecycle and integrity rules.
//!
//! Every operation runs through one request-scoped repository handle:
//! validate, check email uniqueness, mutate, persist, then redact before the
//! customer leaves the service.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use common::{AppError, AppResult, OptionExt};
use domain::{Customer, CustomerPayload, Password};

use crate::repository::CustomerFilter;
use crate::unit_of_work::UnitOfWork;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Customer service trait for dependency injection.
///
/// Every returned customer has its password cleared.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CustomerService: Send + Sync {
    /// List every customer
    async fn list_customers(&self) -> AppResult<Vec<Customer>>;

    /// Get customer by ID
    async fn get_customer(&self, id: Uuid) -> AppResult<Customer>;

    /// Create a customer; the id is assigned here, never taken from the payload
    async fn create_customer(&self, payload: CustomerPayload) -> AppResult<Customer>;

    /// Replace the customer stored under `id` with `payload`
    async fn update_customer(&self, id: Uuid, payload: CustomerPayload) -> AppResult<Customer>;

    /// Delete customer by ID
    async fn delete_customer(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of CustomerService using Unit of Work.
pub struct CustomerManager {
    uow: Arc<dyn UnitOfWork>,
}

impl CustomerManager {
    /// Create new customer service instance with Unit of Work
    pub fn new(uow: Arc<dyn UnitOfWork>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl CustomerService for CustomerManager {
    async fn list_customers(&self) -> AppResult<Vec<Customer>> {
        let store = self.uow.begin().await?;
        let customers = store.list_all().await?;

        Ok(customers.into_iter().map(Customer::redacted).collect())
    }

    async fn get_customer(&self, id: Uuid) -> AppResult<Customer> {
        let store = self.uow.begin().await?;
        let customer = store.find_by_id(id).await?.ok_or_not_found()?;

        Ok(customer.redacted())
    }

    async fn create_customer(&self, payload: CustomerPayload) -> AppResult<Customer> {
        let payload = payload.validated()?;
        let store = self.uow.begin().await?;

        if store
            .find_one(CustomerFilter::by_email(&payload.email))
            .await?
            .is_some()
        {
            return Err(AppError::Conflict);
        }

        let password = Password::new(&payload.password)?;
        let customer = payload.into_customer(Uuid::new_v4(), password);

        store.insert(customer.clone()).await?;
        store.persist().await?;

        tracing::info!(customer_id = %customer.id, "Customer created");
        Ok(customer.redacted())
    }

    async fn update_customer(&self, id: Uuid, payload: CustomerPayload) -> AppResult<Customer> {
        let payload = payload.validated()?;
        let store = self.uow.begin().await?;

        store.find_by_id(id).await?.ok_or_not_found()?;

        if store
            .find_one(CustomerFilter::by_email(&payload.email).excluding(id))
            .await?
            .is_some()
        {
            return Err(AppError::Conflict);
        }

        if payload.id.is_some_and(|body_id| body_id != id) {
            tracing::debug!(customer_id = %id, "Ignoring mismatched id in update body");
        }

        let password = Password::new(&payload.password)?;
        let customer = payload.into_customer(id, password);

        store.update(customer.clone()).await?;
        store.persist().await?;

        tracing::info!(customer_id = %id, "Customer updated");
        Ok(customer.redacted())
    }

    async fn delete_customer(&self, id: Uuid) -> AppResult<()> {
        let store = self.uow.begin().await?;
        let customer = store.find_by_id(id).await?.ok_or_not_found()?;

        store.delete(customer).await?;
        store.persist().await?;

        tracing::info!(customer_id = %id, "Customer deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use mockall::predicate::eq;
    use sea_orm::DbErr;

    use crate::repository::{MockCustomerRepository, StoreError};
    use crate::unit_of_work::MockUnitOfWork;

    fn stored(id: Uuid, email: &str) -> Customer {
        Customer {
            id,
            name: Some("Stored Customer".to_string()),
            email: email.to_string(),
            password: "$argon2id$stored-hash".to_string(),
            phone: None,
            birth_date: None,
        }
    }

    fn payload(email: &str) -> CustomerPayload {
        CustomerPayload {
            id: None,
            name: Some("New Customer".to_string()),
            email: email.to_string(),
            password: "secret-pass".to_string(),
            phone: None,
            birth_date: None,
        }
    }

    fn manager_with(repo: MockCustomerRepository) -> CustomerManager {
        let mut uow = MockUnitOfWork::new();
        uow.expect_begin()
            .times(1)
            .return_once(move || Ok(Box::new(repo)));
        CustomerManager::new(Arc::new(uow))
    }

    #[tokio::test]
    async fn test_list_redacts_every_password() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_list_all().returning(|| {
            Ok(vec![
                stored(Uuid::new_v4(), "a@example.com"),
                stored(Uuid::new_v4(), "b@example.com"),
            ])
        });

        let customers = manager_with(repo).list_customers().await.unwrap();

        assert_eq!(customers.len(), 2);
        assert!(customers.iter().all(Customer::is_redacted));
    }

    #[tokio::test]
    async fn test_get_customer_not_found() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let result = manager_with(repo).get_customer(Uuid::new_v4()).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_payload_before_touching_store() {
        let mut uow = MockUnitOfWork::new();
        uow.expect_begin().never();
        let manager = CustomerManager::new(Arc::new(uow));

        let result = manager.create_customer(payload("not-an-email")).await;

        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_email() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_find_one()
            .with(eq(CustomerFilter::by_email("taken@example.com")))
            .returning(|_| Ok(Some(stored(Uuid::new_v4(), "taken@example.com"))));
        repo.expect_insert().never();
        repo.expect_persist().never();

        let result = manager_with(repo)
            .create_customer(payload("taken@example.com"))
            .await;

        assert!(matches!(result, Err(AppError::Conflict)));
    }

    #[tokio::test]
    async fn test_create_assigns_fresh_id_and_hashes_password() {
        let body_id = Uuid::new_v4();

        let mut repo = MockCustomerRepository::new();
        repo.expect_find_one().returning(|_| Ok(None));
        repo.expect_insert()
            .withf(move |c| c.id != body_id && c.password.starts_with("$argon2"))
            .times(1)
            .returning(|_| Ok(()));
        repo.expect_persist().times(1).returning(|| Ok(()));

        let mut body = payload("new@example.com");
        body.id = Some(body_id);
        let created = manager_with(repo).create_customer(body).await.unwrap();

        assert_ne!(created.id, body_id);
        assert!(created.is_redacted());
    }

    #[tokio::test]
    async fn test_create_unique_index_violation_surfaces_as_conflict() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_find_one().returning(|_| Ok(None));
        repo.expect_insert()
            .returning(|_| Err(StoreError::DuplicateEmail));
        repo.expect_persist().never();

        let result = manager_with(repo)
            .create_customer(payload("race@example.com"))
            .await;

        assert!(matches!(result, Err(AppError::Conflict)));
    }

    #[tokio::test]
    async fn test_create_persist_failure_surfaces_as_persistence() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_find_one().returning(|_| Ok(None));
        repo.expect_insert().returning(|_| Ok(()));
        repo.expect_persist()
            .returning(|| Err(StoreError::Persistence(DbErr::Custom("disk full".into()))));

        let result = manager_with(repo)
            .create_customer(payload("new@example.com"))
            .await;

        assert!(matches!(result, Err(AppError::Persistence(_))));
    }

    #[tokio::test]
    async fn test_update_missing_customer_is_not_found() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_update().never();

        let result = manager_with(repo)
            .update_customer(Uuid::new_v4(), payload("x@example.com"))
            .await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_checks_email_against_other_customers_only() {
        let id = Uuid::new_v4();

        let mut repo = MockCustomerRepository::new();
        repo.expect_find_by_id()
            .with(eq(id))
            .returning(move |id| Ok(Some(stored(id, "mine@example.com"))));
        repo.expect_find_one()
            .with(eq(CustomerFilter::by_email("mine@example.com").excluding(id)))
            .returning(|_| Ok(None));
        repo.expect_update().times(1).returning(|_| Ok(()));
        repo.expect_persist().times(1).returning(|| Ok(()));

        let updated = manager_with(repo)
            .update_customer(id, payload("mine@example.com"))
            .await
            .unwrap();

        assert_eq!(updated.id, id);
        assert!(updated.is_redacted());
    }

    #[tokio::test]
    async fn test_update_uses_path_id_over_body_id() {
        let path_id = Uuid::new_v4();
        let body_id = Uuid::new_v4();

        let mut repo = MockCustomerRepository::new();
        repo.expect_find_by_id()
            .returning(move |id| Ok(Some(stored(id, "old@example.com"))));
        repo.expect_find_one().returning(|_| Ok(None));
        repo.expect_update()
            .withf(move |c| c.id == path_id)
            .times(1)
            .returning(|_| Ok(()));
        repo.expect_persist().returning(|| Ok(()));

        let mut body = payload("new@example.com");
        body.id = Some(body_id);
        let updated = manager_with(repo)
            .update_customer(path_id, body)
            .await
            .unwrap();

        assert_eq!(updated.id, path_id);
    }

    #[tokio::test]
    async fn test_update_rejects_email_of_another_customer() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_find_by_id()
            .returning(move |id| Ok(Some(stored(id, "mine@example.com"))));
        repo.expect_find_one()
            .returning(|_| Ok(Some(stored(Uuid::new_v4(), "theirs@example.com"))));
        repo.expect_update().never();

        let result = manager_with(repo)
            .update_customer(Uuid::new_v4(), payload("theirs@example.com"))
            .await;

        assert!(matches!(result, Err(AppError::Conflict)));
    }

    #[tokio::test]
    async fn test_delete_removes_and_persists() {
        let id = Uuid::new_v4();

        let mut repo = MockCustomerRepository::new();
        repo.expect_find_by_id()
            .returning(move |id| Ok(Some(stored(id, "gone@example.com"))));
        repo.expect_delete()
            .withf(move |c| c.id == id)
            .times(1)
            .returning(|_| Ok(()));
        repo.expect_persist().times(1).returning(|| Ok(()));

        assert!(manager_with(repo).delete_customer(id).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_missing_customer_is_not_found() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_delete().never();

        let result = manager_with(repo).delete_customer(Uuid::new_v4()).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_begin_failure_surfaces_as_persistence() {
        let mut uow = MockUnitOfWork::new();
        uow.expect_begin()
            .returning(|| Err(StoreError::Persistence(DbErr::Custom("pool timed out".into()))));
        let manager = CustomerManager::new(Arc::new(uow));

        let result = manager.list_customers().await;

        assert!(matches!(result, Err(AppError::Persistence(_))));
    }
}
