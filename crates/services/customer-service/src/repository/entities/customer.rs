//! Customer database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::Customer;

/// Unique index on `email`; closes the check-then-insert race between writers
pub const EMAIL_UNIQUE_INDEX: &str = "idx_customers_email";

/// Column reference backends without constraint names (SQLite) report instead
pub const EMAIL_COLUMN_REF: &str = "customers.email";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: Option<String>,
    /// Indexed by [`EMAIL_UNIQUE_INDEX`]
    pub email: String,
    /// Argon2 hash
    pub password: String,
    pub phone: Option<String>,
    pub birth_date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Customer {
    fn from(model: Model) -> Self {
        Customer {
            id: model.id,
            name: model.name,
            email: model.email,
            password: model.password,
            phone: model.phone,
            birth_date: model.birth_date,
        }
    }
}

/// Every column set, for inserts and whole-record replacement
impl From<Customer> for ActiveModel {
    fn from(customer: Customer) -> Self {
        ActiveModel {
            id: Set(customer.id),
            name: Set(customer.name),
            email: Set(customer.email),
            password: Set(customer.password),
            phone: Set(customer.phone),
            birth_date: Set(customer.birth_date),
        }
    }
}
