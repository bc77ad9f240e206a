mod customer_service;

pub use customer_service::{CustomerManager, CustomerService};

#[cfg(any(test, feature = "test-utils"))]
pub use customer_service::MockCustomerService;
