//! Customer Service Library
//!
//! Customer lifecycle and integrity rules on top of a request-scoped
//! repository gateway. The HTTP surface lives in the gateway crate.

pub mod infra;
pub mod repository;
pub mod service;
pub mod unit_of_work;

use std::sync::Arc;

use common::DatabaseConfig;
use sea_orm::DbErr;

use crate::infra::Database;
use crate::service::{CustomerManager, CustomerService};
use crate::unit_of_work::Persistence;

/// Connect to the store, make sure the schema exists, and wire the service.
pub async fn bootstrap(
    config: &DatabaseConfig,
) -> Result<(Arc<Database>, Arc<dyn CustomerService>), DbErr> {
    let db = Database::connect(config).await?;
    let uow = Arc::new(Persistence::new(db.get_connection(), config.isolation));
    let service: Arc<dyn CustomerService> = Arc::new(CustomerManager::new(uow));

    Ok((Arc::new(db), service))
}
