//! Repository layer for data access.

pub mod entities;
mod customer_repository;
mod error;

pub use customer_repository::{CustomerFilter, CustomerRepository, CustomerStore};
pub use error::{StoreError, StoreResult};

#[cfg(any(test, feature = "test-utils"))]
pub use customer_repository::MockCustomerRepository;
